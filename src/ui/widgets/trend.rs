//! Column chart for the daily flight trend

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::TrendPoint;

const BAR_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One labelled column per trend point; the bottom row holds the labels.
pub struct TrendColumns<'a> {
    points: &'a [TrendPoint],
    style: Style,
    label_style: Style,
}

impl<'a> TrendColumns<'a> {
    pub fn new(points: &'a [TrendPoint]) -> Self {
        Self {
            points,
            style: Style::default().fg(Color::Blue),
            label_style: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Height of a column in eighths of a cell.
fn scaled_eighths(value: u32, max: u32, rows: u16) -> usize {
    let max = max.max(1);
    ((value as f64 / max as f64) * rows as f64 * 8.0).round() as usize
}

impl<'a> Widget for TrendColumns<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 3 || self.points.is_empty() {
            return;
        }

        let max = self.points.iter().map(|p| p.flights).max().unwrap_or(1);
        let chart_rows = area.height - 2;
        let slot = (area.width as usize / self.points.len()).max(1) as u16;
        let bar_width = slot.saturating_sub(2).clamp(1, 4);

        for (i, point) in self.points.iter().enumerate() {
            let slot_x = area.x + i as u16 * slot;
            if slot_x + bar_width > area.x + area.width {
                break;
            }
            let bar_x = slot_x + (slot - bar_width) / 2;

            let mut remaining = scaled_eighths(point.flights, max, chart_rows);
            for row in 0..chart_rows {
                if remaining == 0 {
                    break;
                }
                let y = area.y + chart_rows - row;
                let ch = BAR_CHARS[remaining.min(8) - 1];
                for dx in 0..bar_width {
                    buf.get_mut(bar_x + dx, y).set_char(ch).set_style(self.style);
                }
                remaining = remaining.saturating_sub(8);
            }

            let value = point.flights.to_string();
            let value_x = bar_x + bar_width.saturating_sub(value.len() as u16) / 2;
            buf.set_string(value_x, area.y, &value, self.style);

            let label: String = point.label.chars().take(slot as usize).collect();
            buf.set_string(slot_x, area.y + area.height - 1, &label, self.label_style);
        }
    }
}

/// Inline rendering of the trend, one glyph per point.
pub fn trend_text(points: &[TrendPoint]) -> String {
    let max = points.iter().map(|p| p.flights).max().unwrap_or(1).max(1);
    points
        .iter()
        .map(|point| {
            let scaled = ((point.flights as f64 / max as f64) * 7.0).round() as usize;
            BAR_CHARS[scaled.min(7)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<TrendPoint> {
        [("06:00", 12), ("09:00", 28), ("12:00", 45), ("15:00", 52)]
            .into_iter()
            .map(|(label, flights)| TrendPoint {
                label: label.to_string(),
                flights,
            })
            .collect()
    }

    #[test]
    fn test_trend_text() {
        let text = trend_text(&points());
        assert_eq!(text.chars().count(), 4);
        assert_eq!(text.chars().last(), Some('█'));
    }

    #[test]
    fn test_trend_text_empty() {
        assert!(trend_text(&[]).is_empty());
    }

    #[test]
    fn test_tallest_column_fills_the_chart() {
        let points = points();
        let area = Rect::new(0, 0, 32, 8);
        let mut buf = Buffer::empty(area);
        TrendColumns::new(&points).render(area, &mut buf);

        // The peak (52) sits in the fourth slot and reaches the top chart row.
        let slot = 8;
        let bar_x = 3 * slot + 2;
        assert_eq!(buf.get(bar_x, 1).symbol(), "█");
        assert_eq!(buf.get(bar_x, 6).symbol(), "█");

        let labels: String = (0..area.width)
            .map(|x| buf.get(x, 7).symbol().to_string())
            .collect();
        assert!(labels.contains("06:00"));
        assert!(labels.contains("15:00"));
    }

    #[test]
    fn test_too_small_area_renders_nothing() {
        let points = points();
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        TrendColumns::new(&points).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
