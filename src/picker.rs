// Card picker targeting: which hand slot, if any, is being edited.
//
// At most one slot may be targeted at a time; the sum type makes that
// impossible to violate. The picker itself holds no card state -- it is
// handed the hand's derived used-card set at render time.

use tracing::debug;

use crate::cards::Card;
use crate::hand::{HandError, HandState};

/// The picker's edit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Targeting {
    #[default]
    None,
    Slot(usize),
}

/// Outcome of a picker selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    /// The card was assigned and the picker closed.
    Placed,
    /// The card is already in the hand; the picker stays open.
    CardInUse,
    /// No slot is targeted; nothing to do.
    NotOpen,
}

#[derive(Debug, Clone, Default)]
pub struct CardPicker {
    target: Targeting,
}

impl CardPicker {
    pub fn new() -> Self {
        CardPicker::default()
    }

    /// Open the picker for `slot`. Opening while already open retargets.
    pub fn open(&mut self, slot: usize) {
        self.target = Targeting::Slot(slot);
    }

    /// Close the picker, clearing the target.
    pub fn close(&mut self) {
        self.target = Targeting::None;
    }

    pub fn target(&self) -> Targeting {
        self.target
    }

    /// The targeted slot index, if open. Convenient for snapshots.
    pub fn target_slot(&self) -> Option<usize> {
        match self.target {
            Targeting::None => None,
            Targeting::Slot(i) => Some(i),
        }
    }

    /// Try to place `card` into the targeted slot.
    ///
    /// A card already in the hand is a no-op and the picker stays open
    /// (the grid shows it disabled, but the rule holds here too). A
    /// successful assignment closes the picker and clears the target.
    pub fn select(&mut self, card: Card, hand: &mut HandState) -> PickResult {
        let Targeting::Slot(slot) = self.target else {
            return PickResult::NotOpen;
        };
        match hand.assign(slot, card) {
            Ok(()) => {
                self.close();
                PickResult::Placed
            }
            Err(HandError::DuplicateCard { .. }) => {
                debug!(%card, slot, "picker: card already in use, ignoring");
                PickResult::CardInUse
            }
            Err(HandError::SlotOutOfRange { .. }) => {
                // Target indices come from the input layer, which only emits
                // 0..HAND_SIZE. Close rather than stay wedged on a bad target.
                self.close();
                PickResult::NotOpen
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HAND_SIZE;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn starts_closed() {
        let picker = CardPicker::new();
        assert_eq!(picker.target(), Targeting::None);
        assert_eq!(picker.target_slot(), None);
    }

    #[test]
    fn open_targets_exactly_one_slot() {
        let mut picker = CardPicker::new();
        picker.open(2);
        assert_eq!(picker.target(), Targeting::Slot(2));
        // Re-opening retargets, never accumulates.
        picker.open(4);
        assert_eq!(picker.target(), Targeting::Slot(4));
    }

    #[test]
    fn select_assigns_and_closes() {
        let mut picker = CardPicker::new();
        let mut hand = HandState::new();
        picker.open(1);
        assert_eq!(picker.select(card("As"), &mut hand), PickResult::Placed);
        assert_eq!(hand.slot(1), Some(card("As")));
        assert_eq!(picker.target(), Targeting::None);
    }

    #[test]
    fn select_used_card_is_a_no_op_and_stays_open() {
        let mut picker = CardPicker::new();
        let mut hand = HandState::new();
        hand.assign(0, card("As")).unwrap();
        picker.open(3);

        assert_eq!(picker.select(card("As"), &mut hand), PickResult::CardInUse);
        assert_eq!(hand.slot(3), None);
        assert_eq!(picker.target(), Targeting::Slot(3), "picker must stay open");
    }

    #[test]
    fn select_while_closed_does_nothing() {
        let mut picker = CardPicker::new();
        let mut hand = HandState::new();
        assert_eq!(picker.select(card("Kd"), &mut hand), PickResult::NotOpen);
        assert!(hand.used_cards().is_empty());
    }

    #[test]
    fn select_reassigning_same_card_to_its_own_slot_closes() {
        let mut picker = CardPicker::new();
        let mut hand = HandState::new();
        hand.assign(2, card("Qh")).unwrap();
        picker.open(2);
        assert_eq!(picker.select(card("Qh"), &mut hand), PickResult::Placed);
        assert_eq!(picker.target(), Targeting::None);
    }

    #[test]
    fn select_with_out_of_range_target_closes() {
        let mut picker = CardPicker::new();
        let mut hand = HandState::new();
        picker.open(HAND_SIZE + 1);
        assert_eq!(picker.select(card("As"), &mut hand), PickResult::NotOpen);
        assert_eq!(picker.target(), Targeting::None);
    }
}
