//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub title: Rect,
    pub input: Rect,
    pub process: Rect,
    pub tabs: Rect,
    pub panel: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// Title, input box and process button on top; tabs and the active result
/// panel fill the rest; status and help bars at the bottom.
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    // The input box grows on tall terminals but never crowds out results
    let input_height = (area.height / 4).clamp(5, 10);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        title: chunks[0],
        input: chunks[1],
        process: chunks[2],
        tabs: chunks[3],
        panel: chunks[4],
        status: chunks[5],
        help: chunks[6],
    }
}
