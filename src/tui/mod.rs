//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! translates keyboard events into `core::action::Action` values, and runs
//! the submitter on a background task.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Submitting**: polls every ~50ms so the completion shows up promptly.
//! - **Otherwise**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{ContactForm, Status};
use crate::core::submission::{SimulatedSubmitter, Submission, Submitter};
use crate::tui::component::EventHandler;
use crate::tui::components::{ContactFormView, FormEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const BUSY_POLL: Duration = Duration::from_millis(50);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the form record)
pub struct TuiState {
    pub form_view: ContactFormView,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form_view: ContactFormView::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Run the form until the user quits. Must be called from within a tokio runtime.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let submitter: Arc<dyn Submitter> = Arc::new(SimulatedSubmitter::new(config.submit_delay));
    info!("Using {} submitter", submitter.name());

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, submitter),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            event_loop(&mut terminal, submitter)
        }
    };
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    submitter: Arc<dyn Submitter>,
) -> std::io::Result<()> {
    let mut form = ContactForm::new();
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &form, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if form.status == Status::Submitting {
            BUSY_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
                other => match tui.form_view.handle_event(&other) {
                    Some(FormEvent::Edited { field, value }) => Action::EditField { field, value },
                    Some(FormEvent::Submit) => Action::Submit,
                    None => continue,
                },
            };

            should_quit |= apply(update(&mut form, action), &submitter, &tx);
            // Keep the button's disabled state current for the next event in this batch
            tui.form_view.sync(&form);
        }

        if should_quit {
            break;
        }

        // Handle background task actions (submission outcomes)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(update(&mut form, action), &submitter, &tx) {
                return Ok(());
            }
        }
    }

    info!("Quitting (status: {})", form.status.label());
    Ok(())
}

/// Perform an effect. Returns `true` when the loop should exit.
fn apply(effect: Effect, submitter: &Arc<dyn Submitter>, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnSubmission(submission) => {
            spawn_submission(submission, Arc::clone(submitter), tx.clone());
            false
        }
    }
}

/// Run the submitter on a background task and report the outcome as an Action.
fn spawn_submission(
    submission: Submission,
    submitter: Arc<dyn Submitter>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!(
        "Spawning submission {} via {} submitter",
        submission.id,
        submitter.name()
    );
    debug!("Submission payload: {}", submission.to_json());

    tokio::spawn(async move {
        let id = submission.id;
        let action = match submitter.submit(&submission).await {
            Ok(()) => Action::SubmissionSucceeded { id },
            Err(error) => {
                warn!("Submitter {} failed for {}: {}", submitter.name(), id, error);
                Action::SubmissionFailed { id, error }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to report submission {}: receiver dropped", id);
        }
    })
}
