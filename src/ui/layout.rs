use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub content: Rect,
    pub help: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Key help
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        content: chunks[1],
        help: chunks[2],
        status_bar: chunks[3],
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Split `area` into rows of the given heights from the top; rows that do not
/// fit come back empty.
pub fn rows(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut y = area.y;
    let bottom = area.y + area.height;
    heights
        .iter()
        .map(|&h| {
            let h = h.min(bottom.saturating_sub(y));
            let row = Rect::new(area.x, y, area.width, h);
            y += h;
            row
        })
        .collect()
}
