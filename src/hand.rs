// Hero hand state: 5 ordered card slots under interactive editing.
//
// Invariant: no two non-empty slots ever hold the same card. `assign`
// rejects duplicates without touching the hand, so the invariant holds
// after every mutation, not just at submission time.

use std::collections::HashSet;

use thiserror::Error;

use crate::cards::Card;

/// Number of slots in a PLO5 starting hand.
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("card {card} is already placed in slot {occupied_slot}")]
    DuplicateCard { card: Card, occupied_slot: usize },

    #[error("slot index {index} out of range (expected 0..{})", HAND_SIZE)]
    SlotOutOfRange { index: usize },
}

/// The Hero's partially-filled hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandState {
    slots: [Option<Card>; HAND_SIZE],
}

impl HandState {
    pub fn new() -> Self {
        HandState::default()
    }

    /// Place `card` in `index`, overwriting whatever was there.
    ///
    /// Fails with `DuplicateCard` if the card already occupies a *different*
    /// slot, leaving the hand unchanged. Re-assigning a card to the slot it
    /// already occupies succeeds trivially.
    pub fn assign(&mut self, index: usize, card: Card) -> Result<(), HandError> {
        if index >= HAND_SIZE {
            return Err(HandError::SlotOutOfRange { index });
        }
        if let Some(occupied_slot) = self.slot_of(card) {
            if occupied_slot != index {
                return Err(HandError::DuplicateCard {
                    card,
                    occupied_slot,
                });
            }
        }
        self.slots[index] = Some(card);
        Ok(())
    }

    /// Reset all slots to empty. Unconditional and idempotent.
    pub fn clear(&mut self) {
        self.slots = [None; HAND_SIZE];
    }

    /// The set of cards currently placed. Derived on demand, never stored,
    /// so it cannot drift from the slots.
    pub fn used_cards(&self) -> HashSet<Card> {
        self.slots.iter().flatten().copied().collect()
    }

    /// True iff all 5 slots are filled. The no-duplicate invariant means a
    /// complete hand is automatically 5 distinct cards.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// The 10-character wire code (slot order), available only when the
    /// hand is complete.
    pub fn code(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        let mut out = String::with_capacity(HAND_SIZE * 2);
        for card in self.slots.iter().flatten() {
            out.push_str(&card.to_string());
        }
        Some(out)
    }

    pub fn slot(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<Card>; HAND_SIZE] {
        &self.slots
    }

    fn slot_of(&self, card: Card) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(card))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn new_hand_is_empty_and_incomplete() {
        let hand = HandState::new();
        assert!(!hand.is_complete());
        assert!(hand.used_cards().is_empty());
        assert_eq!(hand.code(), None);
    }

    #[test]
    fn assign_fills_a_slot() {
        let mut hand = HandState::new();
        hand.assign(2, card("As")).unwrap();
        assert_eq!(hand.slot(2), Some(card("As")));
        assert_eq!(hand.used_cards().len(), 1);
    }

    #[test]
    fn assign_overwrites_a_different_card_in_the_same_slot() {
        let mut hand = HandState::new();
        hand.assign(0, card("As")).unwrap();
        hand.assign(0, card("Kd")).unwrap();
        assert_eq!(hand.slot(0), Some(card("Kd")));
        assert!(!hand.used_cards().contains(&card("As")));
    }

    #[test]
    fn assign_same_card_to_same_slot_is_a_trivial_success() {
        let mut hand = HandState::new();
        hand.assign(3, card("Qh")).unwrap();
        assert_eq!(hand.assign(3, card("Qh")), Ok(()));
        assert_eq!(hand.slot(3), Some(card("Qh")));
    }

    #[test]
    fn assign_duplicate_in_another_slot_is_rejected_and_hand_unchanged() {
        let mut hand = HandState::new();
        hand.assign(0, card("As")).unwrap();
        hand.assign(1, card("Kd")).unwrap();
        let before = hand.clone();

        let err = hand.assign(4, card("As")).unwrap_err();
        assert_eq!(
            err,
            HandError::DuplicateCard {
                card: card("As"),
                occupied_slot: 0,
            }
        );
        assert_eq!(hand, before, "rejected assign must leave the hand unchanged");
    }

    #[test]
    fn assign_out_of_range_slot_is_rejected() {
        let mut hand = HandState::new();
        assert_eq!(
            hand.assign(HAND_SIZE, card("As")),
            Err(HandError::SlotOutOfRange { index: HAND_SIZE })
        );
    }

    #[test]
    fn no_assign_sequence_produces_duplicates() {
        // Arbitrary editing session: assigns, overwrites, rejected dupes.
        let mut hand = HandState::new();
        let moves = [
            (0, "As"),
            (1, "Ks"),
            (2, "As"), // rejected
            (0, "Qs"), // overwrite frees As
            (2, "As"), // now fine
            (3, "Ks"), // rejected
            (4, "Js"),
            (3, "Ts"),
        ];
        for (slot, code) in moves {
            let _ = hand.assign(slot, card(code));
            let used = hand.used_cards();
            let filled = hand.slots().iter().flatten().count();
            assert_eq!(used.len(), filled, "duplicate detected after ({slot}, {code})");
        }
        assert!(hand.is_complete());
    }

    #[test]
    fn clear_empties_all_slots_and_is_idempotent() {
        let mut hand = HandState::new();
        for (i, code) in ["As", "Ks", "Qs", "Js", "Ts"].iter().enumerate() {
            hand.assign(i, card(code)).unwrap();
        }
        hand.clear();
        assert_eq!(hand, HandState::new());
        hand.clear();
        assert_eq!(hand, HandState::new());
    }

    #[test]
    fn is_complete_requires_all_five_slots() {
        let mut hand = HandState::new();
        for (i, code) in ["As", "Ks", "Qs", "Js"].iter().enumerate() {
            hand.assign(i, card(code)).unwrap();
        }
        assert!(!hand.is_complete());
        hand.assign(4, card("Ts")).unwrap();
        assert!(hand.is_complete());
    }

    #[test]
    fn code_concatenates_slot_order() {
        let mut hand = HandState::new();
        for (i, c) in ["As", "Ks", "Qs", "Js", "Ts"].iter().enumerate() {
            hand.assign(i, card(c)).unwrap();
        }
        assert_eq!(hand.code().as_deref(), Some("AsKsQsJsTs"));
    }

    #[test]
    fn code_is_none_when_incomplete() {
        let mut hand = HandState::new();
        hand.assign(0, card("As")).unwrap();
        assert_eq!(hand.code(), None);
    }
}
