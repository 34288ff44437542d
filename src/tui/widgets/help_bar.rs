// Help bar widget: keyboard shortcut hints, mode-aware.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the bottom help bar. The hints switch when the picker is open.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state.editing.is_some()),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// The hint line for the current mode.
pub fn help_text(picker_open: bool) -> &'static str {
    if picker_open {
        " Arrows:Navigate | Enter:Select | Esc:Close"
    } else {
        " q:Quit | 1-5/Enter:Edit slot | x:Clear | Up/Down:Range | PgUp/PgDn:Range +-5 | c:Calculate"
    }
}
