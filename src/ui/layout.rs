use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub tabs: Rect,
    pub main: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    UiAreas {
        size,
        header: vertical[0],
        tabs: vertical[1],
        main: vertical[2],
        status_line: vertical[3],
        command_line: vertical[4],
    }
}

/// Split `area` into `count` equal columns.
pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Lay `count` cards out in rows of `per_row`, each `height` tall.
///
/// Only the rows that fit are returned, scrolled so the row holding
/// `selected` is visible. Each card comes with its index.
pub fn card_grid(
    area: Rect,
    count: usize,
    per_row: usize,
    height: u16,
    selected: usize,
) -> Vec<(usize, Rect)> {
    let per_row = per_row.max(1);
    let height = height.max(1);
    let rows = count.div_ceil(per_row);
    let visible_rows = ((area.height / height) as usize).min(rows);
    if visible_rows == 0 {
        return Vec::new();
    }

    let selected_row = selected.min(count.saturating_sub(1)) / per_row;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let mut cards = Vec::with_capacity(visible_rows * per_row);
    for (offset, row) in (first_row..first_row + visible_rows).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + offset as u16 * height,
            width: area.width,
            height,
        };
        let first = row * per_row;
        let in_row = (count - first).min(per_row);
        cards.extend(
            columns(row_area, per_row)
                .into_iter()
                .take(in_row)
                .enumerate()
                .map(|(col, rect)| (first + col, rect)),
        );
    }
    cards
}
