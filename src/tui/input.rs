// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (moving the slot
// cursor or the picker grid cursor).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cards::{Card, RANKS, SUITS};
use crate::hand::HAND_SIZE;
use crate::protocol::UserCommand;

use super::{used_cards, ViewState};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to
/// the orchestrator. Returns `None` when it was handled locally by mutating
/// `ViewState` (cursor movement) or ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // On Windows, crossterm emits both Press and Release events for each
    // physical keypress; ignoring non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.editing.is_some() {
        return handle_picker_mode(key_event, view_state);
    }

    handle_normal_mode(key_event, view_state)
}

fn handle_normal_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('q') => Some(UserCommand::Quit),

        // Direct slot targeting
        KeyCode::Char(c @ '1'..='5') => {
            let slot = c as usize - '1' as usize;
            view_state.slot_cursor = slot;
            Some(UserCommand::EditSlot(slot))
        }

        // Slot cursor movement
        KeyCode::Left | KeyCode::Char('h') => {
            view_state.slot_cursor = view_state.slot_cursor.saturating_sub(1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            view_state.slot_cursor = (view_state.slot_cursor + 1).min(HAND_SIZE - 1);
            None
        }

        // Open the picker for the cursor slot
        KeyCode::Enter | KeyCode::Char(' ') => {
            Some(UserCommand::EditSlot(view_state.slot_cursor))
        }

        // Hand reset
        KeyCode::Char('x') => Some(UserCommand::ClearHand),

        // Range slider
        KeyCode::Up | KeyCode::Char('k') => Some(UserCommand::AdjustRange(1)),
        KeyCode::Down | KeyCode::Char('j') => Some(UserCommand::AdjustRange(-1)),
        KeyCode::PageUp => Some(UserCommand::AdjustRange(5)),
        KeyCode::PageDown => Some(UserCommand::AdjustRange(-5)),

        // Submit
        KeyCode::Char('c') => Some(UserCommand::Calculate),

        _ => None,
    }
}

/// Key events while the card picker modal is open.
///
/// Arrows move the grid cursor (rows are suits, columns are ranks). Enter
/// selects the card under the cursor; a card already in the hand is a
/// local no-op so the modal stays open. Esc closes without choosing.
fn handle_picker_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => Some(UserCommand::ClosePicker),

        KeyCode::Up | KeyCode::Char('k') => {
            view_state.picker_row = view_state.picker_row.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.picker_row = (view_state.picker_row + 1).min(SUITS.len() - 1);
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            view_state.picker_col = view_state.picker_col.saturating_sub(1);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            view_state.picker_col = (view_state.picker_col + 1).min(RANKS.len() - 1);
            None
        }

        KeyCode::Enter | KeyCode::Char(' ') => {
            let card = Card::new(RANKS[view_state.picker_col], SUITS[view_state.picker_row]);
            if used_cards(&view_state.slots).contains(&card) {
                // Disabled entry; stay open.
                return None;
            }
            Some(UserCommand::PickCard(card))
        }

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
