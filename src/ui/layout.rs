use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub navbar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical split: navbar | page content | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(5),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        navbar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}
