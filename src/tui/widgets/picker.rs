// Card picker modal: 4 suit rows of 13 rank cells.
//
// Cards already placed in the hand are dimmed and cannot be selected; the
// grid cursor is drawn reversed. Rendered on top of the dashboard via the
// `Clear` widget.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::cards::{Card, RANKS, SUITS};
use crate::tui::layout::picker_rect;
use crate::tui::{used_cards, ViewState};

/// Render the picker modal if a slot is being edited.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(slot) = state.editing else {
        return;
    };

    let modal = picker_rect(area);
    frame.render_widget(Clear, modal);

    let used = used_cards(&state.slots);
    let mut lines = Vec::with_capacity(SUITS.len());
    for (row, suit) in SUITS.iter().enumerate() {
        let mut spans = Vec::with_capacity(RANKS.len() + 1);
        let suit_color = if suit.is_red() { Color::Red } else { Color::White };
        spans.push(Span::styled(
            format!(" {} ", suit.symbol()),
            Style::default().fg(suit_color),
        ));
        for (col, rank) in RANKS.iter().enumerate() {
            let card = Card::new(*rank, *suit);
            let is_cursor = row == state.picker_row && col == state.picker_col;
            spans.push(Span::styled(
                format!(" {} ", rank.code()),
                cell_style(*suit, used.contains(&card), is_cursor),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Select a Card (slot {})", slot + 1)),
    );
    frame.render_widget(paragraph, modal);
}

/// Style for one grid cell. Used cards are dimmed regardless of suit; the
/// cursor cell is reversed so it reads on any background.
pub fn cell_style(suit: crate::cards::Suit, used: bool, is_cursor: bool) -> Style {
    let base = if used {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if suit.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };
    if is_cursor {
        base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        base
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
