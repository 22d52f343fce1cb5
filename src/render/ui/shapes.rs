//! Canvas shapes.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

/// Solid disc in canvas coordinates.
///
/// ratatui's own `Circle` only strokes the outline. This one walks the canvas dot
/// grid inside the disc's bounding box, clipped to the grid, and paints every dot
/// whose centre lies in the disc. Work is bounded by the grid size no matter how
/// large the disc or how small the logical bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    /// Canvas `x_bounds`.
    pub x_bounds: [f64; 2],
    /// Canvas `y_bounds`.
    pub y_bounds: [f64; 2],
    /// Dot grid size (columns, rows) of the canvas marker.
    pub resolution: (usize, usize),
}

impl FilledCircle {
    /// Inclusive dot range covering `[low, high]` along one axis, clipped to the grid.
    fn dot_range(low: f64, high: f64, scale: f64, dots: usize) -> Option<(usize, usize)> {
        let last = (dots - 1) as f64;
        let first = (low * scale).floor().max(0.0);
        let end = (high * scale).ceil().min(last);
        (first <= end).then(|| (first as usize, end as usize))
    }
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let (columns, rows) = self.resolution;
        let [left, right] = self.x_bounds;
        let [bottom, top] = self.y_bounds;
        let width = right - left;
        let height = top - bottom;
        if self.radius <= 0.0 || columns == 0 || rows == 0 || width <= 0.0 || height <= 0.0 {
            return;
        }

        // Same mapping as `Painter::get_point`: dot = offset * (dots - 1) / span
        let scale_x = (columns.max(2) - 1) as f64 / width;
        let scale_y = (rows.max(2) - 1) as f64 / height;

        // A disc thinner than one dot still shows up as its centre dot
        if let Some((px, py)) = painter.get_point(self.x, self.y) {
            painter.paint(px, py, self.color);
        }

        let Some((col_first, col_last)) = Self::dot_range(
            self.x - self.radius - left,
            self.x + self.radius - left,
            scale_x,
            columns,
        ) else {
            return;
        };
        // Rows count down from the top edge
        let Some((row_first, row_last)) = Self::dot_range(
            top - (self.y + self.radius),
            top - (self.y - self.radius),
            scale_y,
            rows,
        ) else {
            return;
        };

        let radius_sq = self.radius * self.radius;
        for row in row_first..=row_last {
            let dy = top - row as f64 / scale_y - self.y;
            for col in col_first..=col_last {
                let dx = left + col as f64 / scale_x - self.x;
                if dx * dx + dy * dy <= radius_sq {
                    painter.paint(col, row, self.color);
                }
            }
        }
    }
}
