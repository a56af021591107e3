//! TUI rendering and terminal management (impure shell)

pub mod switcher;

pub use switcher::{render_switcher, OverlayLayout};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, EntityId};
use crate::state::{SwitcherOutcome, SwitcherState};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Poll timeout when no search is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// How a switcher session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user committed to a conversation.
    Navigate(EntityId),
    /// The user dismissed the switcher.
    Closed,
}

impl SessionEnd {
    /// The chosen conversation, if any.
    pub fn into_target(self) -> Option<EntityId> {
        match self {
            SessionEnd::Navigate(id) => Some(id),
            SessionEnd::Closed => None,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    switcher: SwitcherState,
    key_bindings: KeyBindings,
    layout: OverlayLayout,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(switcher: SwitcherState, layout: OverlayLayout) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, switcher, layout))
    }

    /// Run the event loop until the session ends.
    ///
    /// Event-driven: blocks in `event::poll` until a key arrives or the
    /// pending search is due.
    pub fn run(&mut self) -> Result<SessionEnd, TuiError> {
        self.draw()?;

        loop {
            let timeout = self
                .switcher
                .debouncer()
                .time_until_fire(Instant::now())
                .unwrap_or(IDLE_POLL);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(end) = self.handle_key(key, Instant::now()) {
                            return Ok(end);
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create the application over an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, switcher: SwitcherState, layout: OverlayLayout) -> Self {
        Self {
            terminal,
            switcher,
            key_bindings: KeyBindings::default(),
            layout,
        }
    }

    /// Replace the key bindings.
    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }

    /// The switcher session being driven.
    pub fn switcher(&self) -> &SwitcherState {
        &self.switcher
    }

    /// Handle a single keyboard event
    ///
    /// Returns the session end when the key commits or cancels.
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<SessionEnd> {
        // Release/repeat events are reported on some platforms
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let action = self.key_bindings.get(key)?;
        match self.switcher.handle(action, now) {
            SwitcherOutcome::Navigate(id) => {
                info!(id = %id, "Switcher navigated");
                Some(SessionEnd::Navigate(id))
            }
            SwitcherOutcome::Close => {
                debug!("Switcher closed");
                Some(SessionEnd::Closed)
            }
            SwitcherOutcome::Continue | SwitcherOutcome::Results => None,
        }
    }

    /// Fire the pending search if due. Returns true when results changed.
    fn tick(&mut self, now: Instant) -> bool {
        self.switcher.tick(now) == SwitcherOutcome::Results
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let layout = self.layout;
        let switcher = &mut self.switcher;
        self.terminal
            .draw(|frame| render_switcher(frame, switcher, &layout))?;
        Ok(())
    }
}

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> Option<SessionEnd> {
        self.handle_key(key, now)
    }

    pub(crate) fn tick_test(&mut self, now: Instant) -> bool {
        self.tick(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Overlay geometry from resolved configuration.
pub fn overlay_layout(config: &ResolvedConfig) -> OverlayLayout {
    OverlayLayout {
        width_percent: config.width_percent,
        height: config.visible_rows,
    }
}

/// Open the switcher on the real terminal and run it to completion.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_switcher(
    switcher: SwitcherState,
    layout: OverlayLayout,
) -> Result<Option<EntityId>, TuiError> {
    let mut app = TuiApp::new(switcher, layout)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result.map(SessionEnd::into_target)
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
