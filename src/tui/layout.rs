// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                               |
// +--------------------------------------------------+
// | Hero's Hand (7 rows)                             |
// +--------------------------------------------------+
// | Villain's Range (3 rows)                         |
// +--------------------------------------------------+
// | Result (fill)                                    |
// +--------------------------------------------------+
// | Help Bar (1 row)                                 |
// +--------------------------------------------------+
//
// The card picker renders as a centered modal on top of everything.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: app title and request state indicator.
    pub status_bar: Rect,
    /// The 5 hand slots.
    pub hand: Rect,
    /// Range gauge with percentage label.
    pub range: Rect,
    /// Equity result / error / loading panel.
    pub result: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(7), // hand slots
            Constraint::Length(3), // range gauge
            Constraint::Min(5),    // result panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        hand: vertical[1],
        range: vertical[2],
        result: vertical[3],
        help_bar: vertical[4],
    }
}

/// Centered rectangle for the card picker modal.
///
/// Sized for 4 suit rows of 13 rank cells plus borders, clamped to the
/// available area on small terminals.
pub fn picker_rect(area: Rect) -> Rect {
    let width = 60.min(area.width);
    let height = 8.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
