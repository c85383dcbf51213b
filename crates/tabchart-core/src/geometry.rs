//! Pixel-space rectangles and percentage-space conversion.
//!
//! Widgets receive their bounds in pixels from the host. The chart editor
//! works in percentages (0..100 on both axes, y pointing up), so every hit
//! test and drag goes through [`PlotRect::to_percent`] and
//! [`PlotRect::to_pixel`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle with its top-left corner at `(left, top)`.
    pub fn from_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn mid_x(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub fn mid_y(&self) -> f64 {
        0.5 * (self.top + self.bottom)
    }

    /// Zero-area rectangles cannot map pixels to percentages.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Inclusive containment test.
    pub fn contains(&self, pos: DVec2) -> bool {
        pos.x >= self.left && pos.x <= self.right && pos.y >= self.top && pos.y <= self.bottom
    }

    /// A `width` × `height` rectangle centred on this one.
    pub fn centered_inside(&self, width: f64, height: f64) -> Self {
        let l = self.mid_x() - 0.5 * width;
        let t = self.mid_y() - 0.5 * height;
        Self::from_size(l, t, width, height)
    }

    /// Same as [`Self::centered_inside`] with a square.
    pub fn centered_square(&self, size: f64) -> Self {
        self.centered_inside(size, size)
    }

    /// A `width` × `height` rectangle anchored at the top-left corner.
    pub fn from_tlhc(&self, width: f64, height: f64) -> Self {
        Self::from_size(self.left, self.top, width, height)
    }

    /// Top strip of the given height.
    pub fn from_top(&self, height: f64) -> Self {
        Self::new(self.left, self.top, self.right, self.top + height)
    }

    /// Left strip of the given width.
    pub fn from_left(&self, width: f64) -> Self {
        Self::new(self.left, self.top, self.left + width, self.bottom)
    }

    /// Right strip of the given width.
    pub fn from_right(&self, width: f64) -> Self {
        Self::new(self.right - width, self.top, self.right, self.bottom)
    }

    /// Grows the rectangle by `amount` on every side (negative shrinks).
    pub fn padded(&self, amount: f64) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }

    pub fn v_shifted(&self, dy: f64) -> Self {
        Self::new(self.left, self.top + dy, self.right, self.bottom + dy)
    }

    pub fn h_shifted(&self, dx: f64) -> Self {
        Self::new(self.left + dx, self.top, self.right + dx, self.bottom)
    }

    /// Pixel position → percentage position (y flipped so 100 is the top edge).
    pub fn to_percent(&self, pos: DVec2) -> DVec2 {
        DVec2::new(
            (pos.x - self.left) / self.width() * 100.0,
            100.0 - (pos.y - self.top) / self.height() * 100.0,
        )
    }

    /// Percentage position → pixel position.
    pub fn to_pixel(&self, pct: DVec2) -> DVec2 {
        DVec2::new(
            self.left + pct.x / 100.0 * self.width(),
            self.top + self.height() - pct.y / 100.0 * self.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_percent_roundtrip_corners() {
        let rect = PlotRect::from_size(10.0, 20.0, 200.0, 100.0);

        let top_left = rect.to_percent(DVec2::new(10.0, 20.0));
        assert!((top_left - DVec2::new(0.0, 100.0)).length() < EPSILON);

        let bottom_right = rect.to_percent(DVec2::new(210.0, 120.0));
        assert!((bottom_right - DVec2::new(100.0, 0.0)).length() < EPSILON);

        let px = rect.to_pixel(DVec2::new(25.0, 75.0));
        assert!((px - DVec2::new(60.0, 45.0)).length() < EPSILON);
    }

    #[test]
    fn test_layout_helpers() {
        let rect = PlotRect::from_size(0.0, 0.0, 400.0, 600.0);

        let centred = rect.centered_inside(200.0, 300.0);
        assert_eq!(centred, PlotRect::new(100.0, 150.0, 300.0, 450.0));

        let tlhc = centred.from_tlhc(50.0, 60.0);
        assert_eq!(tlhc, PlotRect::new(100.0, 150.0, 150.0, 210.0));

        assert_eq!(tlhc.padded(-5.0), PlotRect::new(105.0, 155.0, 145.0, 205.0));
        assert_eq!(tlhc.from_right(10.0).left, 140.0);
        assert_eq!(tlhc.from_left(10.0).right, 110.0);
        assert_eq!(tlhc.from_top(10.0).bottom, 160.0);
        assert_eq!(tlhc.v_shifted(5.0).top, 155.0);
        assert_eq!(tlhc.h_shifted(5.0).right, 155.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = PlotRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(DVec2::new(0.0, 10.0)));
        assert!(rect.contains(DVec2::new(5.0, 5.0)));
        assert!(!rect.contains(DVec2::new(10.1, 5.0)));
        assert!(PlotRect::default().is_empty());
    }
}
