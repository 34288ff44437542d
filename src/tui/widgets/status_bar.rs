// Status bar widget: app title and request state indicator.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::EquityOutcome;
use crate::tui::ViewState;

/// Render the status bar: title on the left, lifecycle indicator on the right.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (dot, dot_color) = state_indicator(&state.outcome);
    let spans = vec![
        Span::styled(
            " PLO5 Equity Calculator ",
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("| Hand vs. Range ", Style::default().fg(Color::Gray)),
        Span::styled(format!("{} ", dot), Style::default().fg(dot_color)),
        Span::styled(status_label(&state.outcome), Style::default().fg(Color::White)),
    ];
    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Colored dot for the current request lifecycle state.
pub fn state_indicator(outcome: &EquityOutcome) -> (&'static str, Color) {
    match outcome {
        EquityOutcome::Idle => ("●", Color::DarkGray),
        EquityOutcome::Pending => ("●", Color::Yellow),
        EquityOutcome::Succeeded(_) => ("●", Color::Green),
        EquityOutcome::Failed(_) => ("●", Color::Red),
    }
}

/// Short lifecycle label next to the indicator.
pub fn status_label(outcome: &EquityOutcome) -> &'static str {
    match outcome {
        EquityOutcome::Idle => "Ready",
        EquityOutcome::Pending => "Calculating",
        EquityOutcome::Succeeded(_) => "Done",
        EquityOutcome::Failed(_) => "Error",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
