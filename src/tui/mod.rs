// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the orchestrator's domain state.
// The orchestrator pushes `UiUpdate` messages over an mpsc channel; the TUI
// applies them to `ViewState` and re-renders at ~30 fps. User keys become
// `UserCommand` messages flowing the other way.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashSet;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::cards::Card;
use crate::hand::HAND_SIZE;
use crate::protocol::{EquityOutcome, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the orchestrator.
/// Cursor positions are view-local and never leave the TUI.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The hand slots as last reported by the orchestrator.
    pub slots: [Option<Card>; HAND_SIZE],
    /// Villain range percentile for the gauge.
    pub range_percent: u8,
    /// Current equity request lifecycle state.
    pub outcome: EquityOutcome,
    /// Slot being edited; `Some` means the picker modal is open.
    pub editing: Option<usize>,
    /// Which hand slot the cursor sits on in normal mode.
    pub slot_cursor: usize,
    /// Picker grid cursor: suit row (0..4).
    pub picker_row: usize,
    /// Picker grid cursor: rank column (0..13).
    pub picker_col: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            slots: [None; HAND_SIZE],
            range_percent: 15,
            outcome: EquityOutcome::Idle,
            editing: None,
            slot_cursor: 0,
            picker_row: 0,
            picker_col: 0,
        }
    }
}

/// The set of cards currently placed, derived from the slots on demand.
pub fn used_cards(slots: &[Option<Card>; HAND_SIZE]) -> HashSet<Card> {
    slots.iter().flatten().copied().collect()
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::HandUpdate { slots } => {
            state.slots = slots;
        }
        UiUpdate::RangeUpdate(percent) => {
            state.range_percent = percent;
        }
        UiUpdate::OutcomeUpdate(outcome) => {
            state.outcome = outcome;
        }
        UiUpdate::PickerUpdate(editing) => {
            state.editing = editing;
        }
    }
}

// ---------------------------------------------------------------------------
// Frame rendering
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::hand::render(frame, layout.hand, state);
    widgets::range::render(frame, layout.range, state);
    widgets::result::render(frame, layout.result, state);
    widgets::help_bar::render(frame, layout.help_bar, state);

    // Modal overlay goes last so it sits on top.
    widgets::picker::render(frame, frame.area(), state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Chain our terminal restore before the original panic hook.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // State updates from the orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: orchestrator is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(command) = input::handle_key(key_event, &mut view_state) {
                            let quit = command == UserCommand::Quit;
                            let _ = cmd_tx.send(command).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws anyway
                    }
                    Some(Err(_)) | None => {
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
