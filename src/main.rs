//! Quick switcher - Entry Point

use clap::Parser;
use quickswitch::model::SearchResult;
use quickswitch::search::SearchEngine;
use quickswitch::state::SwitcherState;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Quick switcher - jump to a channel, direct message or group
#[derive(Parser, Debug)]
#[command(name = "quickswitch")]
#[command(version)]
#[command(about = "Incremental quick switcher over a chat workspace snapshot")]
pub struct Args {
    /// Path to the workspace state snapshot (JSON)
    pub snapshot: PathBuf,

    /// Start with this query already typed
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print matches as `id<TAB>icon<TAB>label` lines instead of opening the overlay
    #[arg(short, long)]
    pub print: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Quiet interval before a search runs, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = quickswitch::config::load_config_with_precedence(args.config.clone())?;
        let merged = quickswitch::config::merge_config(config_file);
        let with_env = quickswitch::config::apply_env_overrides(merged);
        quickswitch::config::apply_cli_overrides(with_env, args.debounce_ms)
    };

    quickswitch::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let snapshot = quickswitch::source::load_snapshot(&args.snapshot)?
        .with_bot_user_ids(config.bot_user_ids.iter().cloned());
    let engine = SearchEngine::from_snapshot(&snapshot);

    if args.print {
        let query = args.query.unwrap_or_default();
        let mut stdout = std::io::stdout().lock();
        for result in engine.search(&query) {
            writeln!(stdout, "{}", format_tsv(&result))?;
        }
        return Ok(());
    }

    let layout = quickswitch::view::overlay_layout(&config);
    let mut switcher = SwitcherState::new(engine, config.debounce())
        .with_page_size(usize::from(layout.height.saturating_sub(3)));
    if let Some(query) = args.query {
        switcher = switcher.with_query(query);
    }

    if let Some(id) = quickswitch::view::run_switcher(switcher, layout)? {
        println!("{id}");
    }

    Ok(())
}

/// One `--print` output line.
fn format_tsv(result: &SearchResult) -> String {
    format!("{}\t{}\t{}", result.id, result.icon, result.label)
}
