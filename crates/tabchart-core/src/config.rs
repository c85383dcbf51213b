//! Tunables for the chart editor and the tabbed panel.
//!
//! Both structs deserialize with per-field defaults, so a host can ship a
//! partial JSON file and only override what it needs.

use serde::{Deserialize, Serialize};

/// Hit box half-size in percent of the plot size.
const DEFAULT_HIT_TOLERANCE: f64 = 5.0;
/// Grid step in percent used when snapping.
const DEFAULT_SNAP_STEP: f64 = 5.0;
/// Horizontal pixel distance between curve samples.
const DEFAULT_CURVE_STEP_PX: f64 = 5.0;
/// Smallest x distance between neighbouring points, in percent.
pub const DEFAULT_MIN_GAP: f64 = 0.01;
/// Interpolation factor that yields a straight segment.
pub const NEUTRAL_FACTOR: f64 = 0.5;

/// Chart editor behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub hit_tolerance: f64,
    pub snap_step: f64,
    pub curve_step_px: f64,
    pub min_gap: f64,
    pub default_factor: f64,
    /// Stroke a frame around the plot bounds.
    pub draw_frame: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            snap_step: DEFAULT_SNAP_STEP,
            curve_step_px: DEFAULT_CURVE_STEP_PX,
            min_gap: DEFAULT_MIN_GAP,
            default_factor: NEUTRAL_FACTOR,
            draw_frame: true,
        }
    }
}

impl EditorConfig {
    /// Parses a (possibly partial) JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rounds `value` to the nearest grid step.
    pub fn snap(&self, value: f64) -> f64 {
        if self.snap_step <= 0.0 {
            return value;
        }
        (value / self.snap_step).round() * self.snap_step
    }
}

/// Pixel geometry of the tabbed panel, relative to its bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLayout {
    /// Square plot area anchored at the panel's top-left corner.
    pub plot_size: f64,
    /// Inset applied to the plot area.
    pub plot_inset: f64,
    pub selector_width: f64,
    pub selector_height: f64,
    /// Vertical offset of the selector column from the panel top.
    pub selector_offset: f64,
    /// Width of the color stripe on each selector.
    pub stripe_width: f64,
    pub label_size: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            plot_size: 270.0,
            plot_inset: 5.0,
            selector_width: 105.0,
            selector_height: 150.0,
            selector_offset: 300.0,
            stripe_width: 5.0,
            label_size: 16.0,
        }
    }
}
