// Message types shared between the orchestrator, the equity request task,
// and the TUI. Everything that crosses an mpsc channel lives here.

use crate::cards::Card;
use crate::hand::HAND_SIZE;

// ---------------------------------------------------------------------------
// Equity request lifecycle
// ---------------------------------------------------------------------------

/// Where the current (or last) equity calculation stands.
///
/// `Succeeded` stores the service-provided display string verbatim; this
/// client never parses its numeric content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EquityOutcome {
    /// No calculation has been requested yet (or the last one was discarded).
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The service answered; the payload is the formatted equity string.
    Succeeded(String),
    /// Validation or the request failed; the payload is user-presentable.
    Failed(String),
}

/// Result of one outbound equity call, reported by the spawned request task.
///
/// `generation` identifies which trigger the event belongs to, so the
/// coordinator can discard events from a stale task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquityEvent {
    Completed { equity: String, generation: u64 },
    Failed { message: String, generation: u64 },
}

impl EquityEvent {
    pub fn generation(&self) -> u64 {
        match self {
            EquityEvent::Completed { generation, .. } => *generation,
            EquityEvent::Failed { generation, .. } => *generation,
        }
    }
}

// ---------------------------------------------------------------------------
// TUI -> orchestrator commands
// ---------------------------------------------------------------------------

/// A user action forwarded from the TUI to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Open the card picker targeting the given hand slot.
    EditSlot(usize),
    /// Choose a card in the picker for the currently targeted slot.
    PickCard(Card),
    /// Close the picker without choosing.
    ClosePicker,
    /// Reset the hand to all-empty.
    ClearHand,
    /// Step the villain range by the given delta (saturating at 1/100).
    AdjustRange(i16),
    /// Validate and submit the current hand + range.
    Calculate,
    /// Shut down.
    Quit,
}

// ---------------------------------------------------------------------------
// Orchestrator -> TUI updates
// ---------------------------------------------------------------------------

/// Incremental view updates pushed by the orchestrator. The TUI applies
/// them to its `ViewState` and re-renders on the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// The hand slots changed.
    HandUpdate { slots: [Option<Card>; HAND_SIZE] },
    /// The villain range percentile changed.
    RangeUpdate(u8),
    /// The equity request lifecycle moved.
    OutcomeUpdate(EquityOutcome),
    /// The picker target changed (`Some(slot)` = open for that slot).
    PickerUpdate(Option<usize>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_default_is_idle() {
        assert_eq!(EquityOutcome::default(), EquityOutcome::Idle);
    }

    #[test]
    fn event_generation_accessor() {
        let done = EquityEvent::Completed {
            equity: "61.32%".into(),
            generation: 3,
        };
        let failed = EquityEvent::Failed {
            message: "nope".into(),
            generation: 7,
        };
        assert_eq!(done.generation(), 3);
        assert_eq!(failed.generation(), 7);
    }
}
