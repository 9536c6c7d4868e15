use ratatui::prelude::*;

/// How the two charts share the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartLayout {
    #[default]
    SideBySide,
    Stacked,
}

impl ChartLayout {
    pub fn toggle(self) -> Self {
        match self {
            ChartLayout::SideBySide => ChartLayout::Stacked,
            ChartLayout::Stacked => ChartLayout::SideBySide,
        }
    }
}

/// Create the main layout with header, body, and footer
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Min(0),     // Body
            Constraint::Length(1),  // Footer/status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split header into title and stats sections
pub fn header_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(12),        // Title
            Constraint::Percentage(80), // Stats
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Split the body into histogram and pie chart panes
pub fn chart_panes(area: Rect, layout: ChartLayout) -> (Rect, Rect) {
    let direction = match layout {
        ChartLayout::SideBySide => Direction::Horizontal,
        ChartLayout::Stacked => Direction::Vertical,
    };

    let chunks = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Percentage(60), // Histogram
            Constraint::Percentage(40), // Pie
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Split the pie pane into the pie itself and its legend
pub fn pie_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),    // Pie
            Constraint::Length(24), // Legend
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered modal area
pub fn centered_modal(area: Rect, width_percent: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height.min(80)) / 2),
            Constraint::Length(height),
            Constraint::Percentage((100 - height.min(80)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
