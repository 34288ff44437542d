// Hero hand widget: the 5 editable card slots.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::cards::Card;
use crate::hand::HAND_SIZE;
use crate::tui::ViewState;

/// Render the hand panel: a bordered row of 5 card slots. The cursor slot
/// gets a highlighted border; the slot being edited gets a cyan one.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title("Hero's Hand");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let zones = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, HAND_SIZE as u32); HAND_SIZE])
        .split(inner);

    for (i, zone) in zones.iter().enumerate() {
        render_slot(frame, *zone, state, i);
    }
}

fn render_slot(frame: &mut Frame, area: Rect, state: &ViewState, index: usize) {
    let (face, color) = slot_face(state.slots[index]);

    let border_style = if state.editing == Some(index) {
        Style::default().fg(Color::Cyan)
    } else if state.slot_cursor == index {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(face)
        .style(Style::default().fg(color))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("{}", index + 1)),
        );
    frame.render_widget(paragraph, area);
}

/// The display face of a slot: "A♠" for a card, "+" for an empty slot,
/// with its foreground color.
pub fn slot_face(card: Option<Card>) -> (String, Color) {
    match card {
        Some(card) => {
            let color = if card.suit.is_red() {
                Color::Red
            } else {
                Color::White
            };
            (format!("{}{}", card.rank.code(), card.suit.symbol()), color)
        }
        None => ("+".to_string(), Color::DarkGray),
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
    fn empty_slot_shows_plus_placeholder() {
        let (face, color) = slot_face(None);
        assert_eq!(face, "+");
        assert_eq!(color, Color::DarkGray);
    }

    #[test]
    fn red_suits_render_red() {
        let (face, color) = slot_face(Some(card("Th")));
        assert_eq!(face, "T♥");
        assert_eq!(color, Color::Red);
        let (_, color) = slot_face(Some(card("2d")));
        assert_eq!(color, Color::Red);
    }

    #[test]
    fn black_suits_render_white() {
        let (face, color) = slot_face(Some(card("As")));
        assert_eq!(face, "A♠");
        assert_eq!(color, Color::White);
        let (face, color) = slot_face(Some(card("Kc")));
        assert_eq!(face, "K♣");
        assert_eq!(color, Color::White);
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(80, 7);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_full_hand_and_editing() {
        let backend = ratatui::backend::TestBackend::new(80, 7);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        for (i, code) in ["As", "Kh", "Qd", "Jc", "Ts"].iter().enumerate() {
            state.slots[i] = Some(card(code));
        }
        state.editing = Some(2);
        state.slot_cursor = 4;
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
