// Application state and orchestration logic.
//
// The central event loop that coordinates user commands from the TUI and
// completion events from the equity request task. Owns the domain state
// (hand, range, picker target, request coordinator) and pushes incremental
// UI updates to the TUI render loop.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::Config;
use crate::equity::client::EquityClient;
use crate::equity::coordinator::EquityCoordinator;
use crate::hand::{HandState, HAND_SIZE};
use crate::picker::{CardPicker, PickResult};
use crate::protocol::{EquityEvent, UiUpdate, UserCommand};
use crate::range::RangePercent;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub hand: HandState,
    pub range: RangePercent,
    pub picker: CardPicker,
    pub coordinator: EquityCoordinator,
}

impl AppState {
    pub fn new(config: Config, client: EquityClient, equity_tx: mpsc::Sender<EquityEvent>) -> Self {
        let range = RangePercent::new(config.default_range_percent);
        AppState {
            config,
            hand: HandState::new(),
            range,
            picker: CardPicker::new(),
            coordinator: EquityCoordinator::new(client, equity_tx),
        }
    }

    /// Updates that bring a fresh TUI in sync with the initial state.
    pub fn initial_updates(&self) -> Vec<UiUpdate> {
        vec![
            UiUpdate::HandUpdate {
                slots: *self.hand.slots(),
            },
            UiUpdate::RangeUpdate(self.range.get()),
            UiUpdate::OutcomeUpdate(self.coordinator.outcome().clone()),
            UiUpdate::PickerUpdate(self.picker.target_slot()),
        ]
    }

    /// Apply one user command, returning the UI updates it produced.
    ///
    /// `Quit` is handled by the run loop, not here.
    pub fn handle_command(&mut self, command: UserCommand) -> Vec<UiUpdate> {
        match command {
            UserCommand::EditSlot(index) => {
                if index >= HAND_SIZE {
                    warn!(index, "ignoring edit request for out-of-range slot");
                    return vec![];
                }
                self.picker.open(index);
                vec![UiUpdate::PickerUpdate(Some(index))]
            }
            UserCommand::PickCard(card) => match self.picker.select(card, &mut self.hand) {
                PickResult::Placed => vec![
                    UiUpdate::HandUpdate {
                        slots: *self.hand.slots(),
                    },
                    UiUpdate::PickerUpdate(None),
                ],
                // Disabled entry or stray command: nothing changed.
                PickResult::CardInUse | PickResult::NotOpen => vec![],
            },
            UserCommand::ClosePicker => {
                self.picker.close();
                vec![UiUpdate::PickerUpdate(None)]
            }
            UserCommand::ClearHand => {
                self.hand.clear();
                vec![UiUpdate::HandUpdate {
                    slots: *self.hand.slots(),
                }]
            }
            UserCommand::AdjustRange(delta) => {
                self.range = self.range.adjust(delta);
                vec![UiUpdate::RangeUpdate(self.range.get())]
            }
            UserCommand::Calculate => {
                self.coordinator.trigger(&self.hand, self.range);
                vec![UiUpdate::OutcomeUpdate(self.coordinator.outcome().clone())]
            }
            UserCommand::Quit => vec![],
        }
    }

    /// Apply a completed request task's event.
    pub fn handle_equity_event(&mut self, event: EquityEvent) -> Vec<UiUpdate> {
        self.coordinator.handle_event(event);
        vec![UiUpdate::OutcomeUpdate(self.coordinator.outcome().clone())]
    }
}

// ---------------------------------------------------------------------------
// Orchestrator event loop
// ---------------------------------------------------------------------------

/// Run the orchestrator until the TUI quits or a channel closes.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    mut equity_rx: mpsc::Receiver<EquityEvent>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    for update in state.initial_updates() {
        if ui_tx.send(update).await.is_err() {
            return Ok(());
        }
    }

    'outer: loop {
        let updates = tokio::select! {
            command = cmd_rx.recv() => {
                match command {
                    None => break 'outer,
                    Some(UserCommand::Quit) => {
                        info!("quit command received, shutting down orchestrator");
                        break 'outer;
                    }
                    Some(command) => state.handle_command(command),
                }
            }
            event = equity_rx.recv() => {
                match event {
                    // All senders dropped: the coordinator holds one, so
                    // this only happens during teardown.
                    None => break 'outer,
                    Some(event) => state.handle_equity_event(event),
                }
            }
        };

        for update in updates {
            if ui_tx.send(update).await.is_err() {
                // TUI is gone; nothing left to drive.
                break 'outer;
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::equity::coordinator::INCOMPLETE_HAND_MESSAGE;
    use crate::protocol::EquityOutcome;
    use std::time::Duration;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn test_state() -> (AppState, mpsc::Receiver<EquityEvent>) {
        let (tx, rx) = mpsc::channel(8);
        let client =
            EquityClient::new("http://127.0.0.1:9".to_string(), Duration::from_secs(1)).unwrap();
        (AppState::new(Config::default(), client, tx), rx)
    }

    #[tokio::test]
    async fn initial_updates_cover_the_whole_view() {
        let (state, _rx) = test_state();
        let updates = state.initial_updates();
        assert_eq!(updates.len(), 4);
        assert!(updates.contains(&UiUpdate::RangeUpdate(15)));
        assert!(updates.contains(&UiUpdate::OutcomeUpdate(EquityOutcome::Idle)));
        assert!(updates.contains(&UiUpdate::PickerUpdate(None)));
    }

    #[tokio::test]
    async fn edit_then_pick_assigns_and_closes_picker() {
        let (mut state, _rx) = test_state();

        let updates = state.handle_command(UserCommand::EditSlot(2));
        assert_eq!(updates, vec![UiUpdate::PickerUpdate(Some(2))]);

        let updates = state.handle_command(UserCommand::PickCard(card("As")));
        assert_eq!(updates.len(), 2);
        assert!(matches!(updates[0], UiUpdate::HandUpdate { .. }));
        assert_eq!(updates[1], UiUpdate::PickerUpdate(None));
        assert_eq!(state.hand.slot(2), Some(card("As")));
    }

    #[tokio::test]
    async fn picking_a_used_card_changes_nothing() {
        let (mut state, _rx) = test_state();
        state.handle_command(UserCommand::EditSlot(0));
        state.handle_command(UserCommand::PickCard(card("As")));

        state.handle_command(UserCommand::EditSlot(1));
        let updates = state.handle_command(UserCommand::PickCard(card("As")));
        assert!(updates.is_empty());
        assert_eq!(state.hand.slot(1), None);
        assert_eq!(state.picker.target_slot(), Some(1), "picker stays open");
    }

    #[tokio::test]
    async fn out_of_range_edit_slot_is_ignored() {
        let (mut state, _rx) = test_state();
        let updates = state.handle_command(UserCommand::EditSlot(HAND_SIZE));
        assert!(updates.is_empty());
        assert_eq!(state.picker.target_slot(), None);
    }

    #[tokio::test]
    async fn clear_hand_empties_all_slots() {
        let (mut state, _rx) = test_state();
        state.handle_command(UserCommand::EditSlot(0));
        state.handle_command(UserCommand::PickCard(card("As")));

        let updates = state.handle_command(UserCommand::ClearHand);
        assert_eq!(
            updates,
            vec![UiUpdate::HandUpdate {
                slots: [None; HAND_SIZE]
            }]
        );
        assert!(state.hand.used_cards().is_empty());
    }

    #[tokio::test]
    async fn adjust_range_saturates_and_reports() {
        let (mut state, _rx) = test_state();
        let updates = state.handle_command(UserCommand::AdjustRange(5));
        assert_eq!(updates, vec![UiUpdate::RangeUpdate(20)]);
        let updates = state.handle_command(UserCommand::AdjustRange(1000));
        assert_eq!(updates, vec![UiUpdate::RangeUpdate(100)]);
    }

    #[tokio::test]
    async fn calculate_with_incomplete_hand_fails_without_network() {
        let (mut state, mut rx) = test_state();
        let updates = state.handle_command(UserCommand::Calculate);
        assert_eq!(
            updates,
            vec![UiUpdate::OutcomeUpdate(EquityOutcome::Failed(
                INCOMPLETE_HAND_MESSAGE.to_string()
            ))]
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err(), "no request task may be spawned");
    }

    #[tokio::test]
    async fn editing_after_an_outcome_does_not_clear_it() {
        let (mut state, _rx) = test_state();
        state.handle_command(UserCommand::Calculate); // Failed: incomplete

        // Edits touch hand and range but leave the shown outcome alone.
        state.handle_command(UserCommand::EditSlot(0));
        state.handle_command(UserCommand::PickCard(card("Kd")));
        let updates = state.handle_command(UserCommand::AdjustRange(-5));
        assert_eq!(updates, vec![UiUpdate::RangeUpdate(10)]);
        assert_eq!(
            state.coordinator.outcome(),
            &EquityOutcome::Failed(INCOMPLETE_HAND_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn equity_event_updates_outcome() {
        let (mut state, mut rx) = test_state();
        // Fill the hand, then trigger against the unroutable client.
        for (i, code) in ["As", "Ks", "Qs", "Js", "Ts"].iter().enumerate() {
            state.handle_command(UserCommand::EditSlot(i));
            state.handle_command(UserCommand::PickCard(card(code)));
        }
        state.handle_command(UserCommand::Calculate);
        assert_eq!(state.coordinator.outcome(), &EquityOutcome::Pending);

        let event = rx.recv().await.expect("transport failure should report");
        let updates = state.handle_equity_event(event);
        assert!(matches!(
            updates.as_slice(),
            [UiUpdate::OutcomeUpdate(EquityOutcome::Failed(_))]
        ));
    }
}
