use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::NEUTRAL_FACTOR;

/// Anchor of the chart curve, in percent of the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    /// Endpoints are pinned to x=0 / x=100.
    pub is_x_restricted: bool,
    /// Shape of the segment into the next point; 0.5 is a straight line.
    pub interpolation_factor: f64,
    /// Pixel position of the handle between this point and the next.
    #[serde(skip)]
    pub mid_point: Option<DVec2>,
}

impl ControlPoint {
    /// Free interior point with a straight outgoing segment.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            is_x_restricted: false,
            interpolation_factor: NEUTRAL_FACTOR,
            mid_point: None,
        }
    }

    /// Endpoint whose x never moves.
    pub fn pinned(x: f64, y: f64) -> Self {
        Self {
            is_x_restricted: true,
            ..Self::new(x, y)
        }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Point set of a freshly constructed editor.
pub fn default_points() -> Vec<ControlPoint> {
    vec![
        ControlPoint::pinned(0.0, 0.0),
        ControlPoint::new(50.0, 50.0),
        ControlPoint::pinned(100.0, 50.0),
    ]
}
