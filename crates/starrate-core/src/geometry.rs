//! Star geometry and row layout.

use kurbo::{Point, Rect, Size};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::view::ClipRect;

/// Inner to outer radius ratio of a regular five-pointed star.
pub const INNER_RADIUS_RATIO: f64 = 0.381_966;

/// Outline of a five-pointed star inscribed in `bounds`.
///
/// Points alternate between outer tips and inner vertices, clockwise,
/// starting with the top tip.
pub fn star_outline(bounds: Rect) -> [Point; 10] {
    let center = bounds.center();
    let outer = bounds.width().min(bounds.height()) / 2.0;
    let inner = outer * INNER_RADIUS_RATIO;

    std::array::from_fn(|i| {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = -FRAC_PI_2 + i as f64 * PI / 5.0;
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    })
}

/// Resolve a unit clip rectangle against the icon's bounds.
pub fn clip_bounds(bounds: Rect, clip: &ClipRect) -> Rect {
    Rect::new(
        bounds.x0 + bounds.width() * clip.x0,
        bounds.y0 + bounds.height() * clip.y0,
        bounds.x0 + bounds.width() * clip.x1,
        bounds.y0 + bounds.height() * clip.y1,
    )
}

/// Horizontal layout of a row of equally sized star icons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    /// Top-left corner of the first icon
    pub origin: Point,
    /// Icon edge length
    pub icon_size: f64,
    /// Gap between icons
    pub spacing: f64,
    /// Number of icons
    pub count: usize,
}

impl RowLayout {
    pub fn new(origin: Point, icon_size: f64, spacing: f64, count: usize) -> Self {
        Self {
            origin,
            icon_size,
            spacing,
            count,
        }
    }

    /// Bounds of the icon at `index`.
    pub fn unit_bounds(&self, index: usize) -> Rect {
        let x = self.origin.x + index as f64 * (self.icon_size + self.spacing);
        Rect::from_origin_size(
            Point::new(x, self.origin.y),
            Size::new(self.icon_size, self.icon_size),
        )
    }

    /// Total size of the row.
    pub fn size(&self) -> Size {
        if self.count == 0 {
            return Size::ZERO;
        }
        let width = self.count as f64 * self.icon_size + (self.count - 1) as f64 * self.spacing;
        Size::new(width, self.icon_size)
    }

    /// Index of the icon under `point`. Gaps between icons hit nothing.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        let dx = point.x - self.origin.x;
        let dy = point.y - self.origin.y;
        if dx < 0.0 || dy < 0.0 || dy > self.icon_size {
            return None;
        }
        let pitch = self.icon_size + self.spacing;
        let index = (dx / pitch).floor() as usize;
        let within = dx - index as f64 * pitch;
        (index < self.count && within <= self.icon_size).then_some(index)
    }
}
