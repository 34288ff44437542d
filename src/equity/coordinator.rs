// Equity request lifecycle coordinator.
//
// State machine over `EquityOutcome`:
//
//   Idle -> (trigger) validate -> Failed          incomplete hand, no call
//                              -> Pending         one spawned request task
//   Pending -> (trigger)                          ignored: single-flight
//   Pending -> (event)  -> Succeeded | Failed
//   Succeeded | Failed -> (trigger) re-validate, discarding the old outcome
//
// Single-flight is enforced here, inside the coordinator, not by a UI
// affordance: a trigger while a request is outstanding is dropped.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::equity::client::{EquityClient, EquityRequest};
use crate::hand::HandState;
use crate::protocol::{EquityEvent, EquityOutcome};
use crate::range::RangePercent;

/// Fixed message shown when calculate is triggered on an incomplete hand.
pub const INCOMPLETE_HAND_MESSAGE: &str = "Please select a full 5-card hand for the Hero.";

pub struct EquityCoordinator {
    /// Shared with spawned request tasks.
    client: Arc<EquityClient>,
    /// Spawned tasks report back through a clone of this sender.
    tx: mpsc::Sender<EquityEvent>,
    outcome: EquityOutcome,
    /// Monotonically increasing id of the current request cycle. Events
    /// carrying an older generation are discarded in `handle_event`.
    generation: u64,
}

impl EquityCoordinator {
    pub fn new(client: EquityClient, tx: mpsc::Sender<EquityEvent>) -> Self {
        EquityCoordinator {
            client: Arc::new(client),
            tx,
            outcome: EquityOutcome::Idle,
            generation: 0,
        }
    }

    pub fn outcome(&self) -> &EquityOutcome {
        &self.outcome
    }

    /// True while an outbound call is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.outcome == EquityOutcome::Pending
    }

    /// Handle a calculate trigger.
    ///
    /// Ignored while a request is in flight. An incomplete hand fails
    /// locally with the fixed validation message and never reaches the
    /// network. A complete hand clears the previous outcome and spawns
    /// exactly one request task.
    pub fn trigger(&mut self, hand: &HandState, range: RangePercent) {
        if self.is_in_flight() {
            debug!(generation = self.generation, "calculate ignored: request already in flight");
            return;
        }

        let Some(hero_hand) = hand.code() else {
            debug!("calculate rejected: hand is incomplete");
            self.outcome = EquityOutcome::Failed(INCOMPLETE_HAND_MESSAGE.to_string());
            return;
        };

        let request = EquityRequest {
            hero_hand,
            villain_range_percent: range.get(),
        };

        self.generation += 1;
        self.outcome = EquityOutcome::Pending;
        info!(
            hero_hand = %request.hero_hand,
            villain_range_percent = request.villain_range_percent,
            generation = self.generation,
            "submitting equity calculation"
        );

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let _ = client.calculate(request, tx, generation).await;
        });
    }

    /// Apply a completed request task's event.
    ///
    /// Stale generations are dropped. Under single-flight there is never
    /// more than one task alive, but the guard keeps the invariant local
    /// rather than depending on callers.
    pub fn handle_event(&mut self, event: EquityEvent) {
        if event.generation() != self.generation {
            debug!(
                event_generation = event.generation(),
                current_generation = self.generation,
                "discarding stale equity event"
            );
            return;
        }

        self.outcome = match event {
            EquityEvent::Completed { equity, .. } => {
                info!(%equity, "equity calculation succeeded");
                EquityOutcome::Succeeded(equity)
            }
            EquityEvent::Failed { message, .. } => {
                info!(%message, "equity calculation failed");
                EquityOutcome::Failed(message)
            }
        };
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
