//! Query classification.
//!
//! Raw input selects one of five search modes. Prefix and separator checks
//! run on the raw text; fragments are normalized.

use super::normalize::normalize;

/// Search mode selected from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Empty input: list every channel in catalog order.
    ShowAll,
    /// `#fragment`: channels only.
    SingleChannel(String),
    /// `@fragment`: DMs and groups with a matching member.
    SingleUser(String),
    /// `a, b, c`: DMs and groups containing every listed member.
    ///
    /// Empty segments are dropped. An empty list matches nothing.
    MultiUser(Vec<String>),
    /// Anything else: channels and conversations with the same fragment.
    Mixed(String),
}

impl QueryMode {
    /// Classify raw query text.
    ///
    /// Rules, first match wins:
    /// 1. empty → [`QueryMode::ShowAll`]
    /// 2. leading `@` → [`QueryMode::SingleUser`]
    /// 3. contains `,` → [`QueryMode::MultiUser`]
    /// 4. leading `#` → [`QueryMode::SingleChannel`]
    /// 5. otherwise → [`QueryMode::Mixed`]
    pub fn classify(raw: &str) -> Self {
        if raw.is_empty() {
            return QueryMode::ShowAll;
        }

        if let Some(rest) = raw.strip_prefix('@') {
            return QueryMode::SingleUser(normalize(rest));
        }

        if raw.contains(',') {
            let fragments = raw
                .split(',')
                .map(|segment| normalize(segment.trim()))
                .filter(|fragment| !fragment.is_empty())
                .collect();
            return QueryMode::MultiUser(fragments);
        }

        if let Some(rest) = raw.strip_prefix('#') {
            return QueryMode::SingleChannel(normalize(rest));
        }

        QueryMode::Mixed(normalize(raw))
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            QueryMode::ShowAll => "show_all",
            QueryMode::SingleChannel(_) => "single_channel",
            QueryMode::SingleUser(_) => "single_user",
            QueryMode::MultiUser(_) => "multi_user",
            QueryMode::Mixed(_) => "mixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_show_all() {
        assert_eq!(QueryMode::classify(""), QueryMode::ShowAll);
    }

    #[test]
    fn at_prefix_is_single_user() {
        assert_eq!(
            QueryMode::classify("@Zoë"),
            QueryMode::SingleUser("zoe".to_string())
        );
    }

    #[test]
    fn at_prefix_wins_over_comma() {
        assert_eq!(
            QueryMode::classify("@alice, carol"),
            QueryMode::SingleUser("alice, carol".to_string())
        );
    }

    #[test]
    fn comma_is_multi_user_with_trimmed_segments() {
        assert_eq!(
            QueryMode::classify("Alice,  Carol "),
            QueryMode::MultiUser(vec!["alice".to_string(), "carol".to_string()])
        );
    }

    #[test]
    fn comma_wins_over_hash() {
        assert_eq!(
            QueryMode::classify("#dev,ops"),
            QueryMode::MultiUser(vec!["#dev".to_string(), "ops".to_string()])
        );
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(
            QueryMode::classify("alice,,  ,carol,"),
            QueryMode::MultiUser(vec!["alice".to_string(), "carol".to_string()])
        );
    }

    #[test]
    fn only_commas_is_empty_multi_user() {
        assert_eq!(QueryMode::classify(",,"), QueryMode::MultiUser(vec![]));
        assert_eq!(QueryMode::classify(" , "), QueryMode::MultiUser(vec![]));
    }

    #[test]
    fn hash_prefix_is_single_channel() {
        assert_eq!(
            QueryMode::classify("#Général"),
            QueryMode::SingleChannel("general".to_string())
        );
    }

    #[test]
    fn bare_hash_and_at_have_empty_fragments() {
        assert_eq!(
            QueryMode::classify("#"),
            QueryMode::SingleChannel(String::new())
        );
        assert_eq!(QueryMode::classify("@"), QueryMode::SingleUser(String::new()));
    }

    #[test]
    fn plain_text_is_mixed() {
        assert_eq!(
            QueryMode::classify("GenEral"),
            QueryMode::Mixed("general".to_string())
        );
    }

    #[test]
    fn whitespace_only_is_mixed_not_show_all() {
        assert_eq!(QueryMode::classify(" "), QueryMode::Mixed(" ".to_string()));
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(QueryMode::classify("").name(), "show_all");
        assert_eq!(QueryMode::classify("a,b").name(), "multi_user");
    }
}
