// Villain range widget: gauge with a live percentage label.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the range gauge. The percentile is the share of strongest
/// starting hands included in the villain's range.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Villain's Range (top % of hands)"),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(gauge_ratio(state.range_percent))
        .label(range_label(state.range_percent));
    frame.render_widget(gauge, area);
}

/// Gauge fill ratio in [0.0, 1.0].
pub fn gauge_ratio(percent: u8) -> f64 {
    f64::from(percent.min(100)) / 100.0
}

/// The label drawn over the gauge: "{n}%".
pub fn range_label(percent: u8) -> String {
    format!("{percent}%")
}
