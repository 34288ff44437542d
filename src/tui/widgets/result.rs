// Result panel: pure projection of the equity outcome into display text.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::protocol::EquityOutcome;
use crate::tui::ViewState;

/// Placeholder shown before any calculation has been requested.
pub const IDLE_PLACEHOLDER: &str = "--.--%";

/// Loading indicator while a request is in flight.
pub const PENDING_TEXT: &str = "Calculating...";

/// Project an outcome into its display text and style. Pure: no side
/// effects, no state, success and failure strings rendered verbatim.
pub fn presentation(outcome: &EquityOutcome) -> (String, Style) {
    match outcome {
        EquityOutcome::Idle => (
            IDLE_PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        EquityOutcome::Pending => (
            PENDING_TEXT.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        EquityOutcome::Succeeded(text) => (
            text.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        EquityOutcome::Failed(message) => (message.clone(), Style::default().fg(Color::Red)),
    }
}

/// Render the result panel.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (text, style) = presentation(&state.outcome);
    let paragraph = Paragraph::new(text).style(style).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .title("Hero's Equity vs. Villain's Range"),
    );
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
