//! Chart editor: draggable control points over a percentage plot.
//!
//! The editor owns an x-sorted list of [`ControlPoint`]s. Two pinned
//! endpoints (x=0 and x=100) always exist; interior points are added with a
//! double-click, removed with a right-click and moved by dragging. Each
//! segment carries a midpoint handle whose height bends the curve (see
//! [`curve`]).
//!
//! Pointer input arrives in pixels and is converted through the plot bounds.
//! The `"Snap to Grid"` and `"Freeze"` flags are read from the shared
//! [`SharedProperties`] on every gesture.
//!
//! Split into:
//! - `point`:       control point type and the default set
//! - `interaction`: pointer state machine
//! - `curve`:       midpoint placement and Lagrange sampling
//! - `render`:      draw command emission
//! - `snapshot`:    serializable point set and its validation

pub mod curve;
mod interaction;
mod point;
mod render;
mod snapshot;

pub use interaction::Interaction;
pub use point::{ControlPoint, default_points};
pub use snapshot::CurveSnapshot;

use glam::DVec2;

use crate::color::Color;
use crate::config::EditorConfig;
use crate::draw::DrawList;
use crate::error::ChartError;
use crate::geometry::PlotRect;
use crate::input::{PointerButton, PointerHandler, Widget};
use crate::properties::{FREEZE, SNAP_TO_GRID, SharedProperties};

/// Interactive curve editor for one chart.
#[derive(Debug, Clone)]
pub struct ChartEditor {
    bounds: PlotRect,
    plot_bounds: PlotRect,
    color: Color,
    points: Vec<ControlPoint>,
    interaction: Interaction,
    properties: SharedProperties,
    config: EditorConfig,
}

impl ChartEditor {
    pub fn new(properties: SharedProperties, color: Color) -> Self {
        Self::with_config(properties, color, EditorConfig::default())
    }

    pub fn with_config(properties: SharedProperties, color: Color, config: EditorConfig) -> Self {
        Self {
            bounds: PlotRect::default(),
            plot_bounds: PlotRect::default(),
            color,
            points: default_points(),
            interaction: Interaction::Idle,
            properties,
            config,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    pub fn plot_bounds(&self) -> PlotRect {
        self.plot_bounds
    }

    /// Plot area used for every pixel ↔ percent conversion.
    pub fn set_plot_bounds(&mut self, plot_bounds: PlotRect) {
        self.plot_bounds = plot_bounds;
        self.refresh_midpoints();
    }

    pub fn is_frozen(&self) -> bool {
        self.properties.is_enabled(FREEZE)
    }

    fn snaps_to_grid(&self) -> bool {
        self.properties.is_enabled(SNAP_TO_GRID)
    }

    // ── Hit testing ─────────────────────────────────────────────────────────

    /// Index of the first point whose percent position lies within the hit
    /// tolerance of `pos` on both axes.
    pub fn hit_test_point(&self, pos: DVec2) -> Option<usize> {
        if self.plot_bounds.is_empty() {
            return None;
        }
        let pct = self.plot_bounds.to_percent(pos);
        let tol = self.config.hit_tolerance;
        self.points
            .iter()
            .position(|p| (pct.x - p.x).abs() < tol && (pct.y - p.y).abs() < tol)
    }

    /// Index of the segment whose cached midpoint handle is under `pos`.
    pub fn hit_test_midpoint(&self, pos: DVec2) -> Option<usize> {
        if self.plot_bounds.is_empty() {
            return None;
        }
        let tol_x = self.config.hit_tolerance / 100.0 * self.plot_bounds.width();
        let tol_y = self.config.hit_tolerance / 100.0 * self.plot_bounds.height();
        self.points.iter().position(|p| {
            p.mid_point
                .is_some_and(|m| (pos.x - m.x).abs() < tol_x && (pos.y - m.y).abs() < tol_y)
        })
    }

    // ── Curve ───────────────────────────────────────────────────────────────

    /// Recomputes every cached midpoint handle from the current points.
    pub fn refresh_midpoints(&mut self) {
        for i in 0..self.points.len() {
            let mid = self
                .points
                .get(i + 1)
                .map(|next| self.plot_bounds.to_pixel(curve::midpoint(&self.points[i], next)));
            self.points[i].mid_point = mid;
        }
    }

    /// Pixel-space polyline through all points, sampled every
    /// `curve_step_px` pixels along x.
    pub fn compute_curve(&mut self) -> Vec<DVec2> {
        self.refresh_midpoints();

        let plot = self.plot_bounds;
        let Some(first) = self.points.first() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(self.estimated_samples());
        out.push(plot.to_pixel(first.position()));

        for pair in self.points.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let start = plot.to_pixel(a.position());
            let end = plot.to_pixel(b.position());
            let mid = a
                .mid_point
                .unwrap_or_else(|| plot.to_pixel(curve::midpoint(a, b)));
            curve::sample_segment(start, mid, end, self.config.curve_step_px, &mut out);
        }
        out
    }

    fn estimated_samples(&self) -> usize {
        if self.config.curve_step_px <= 0.0 {
            return self.points.len();
        }
        let steps = (self.plot_bounds.width().abs() / self.config.curve_step_px).ceil();
        steps as usize + self.points.len() + 1
    }

    /// Curve height (percent) at `x` (percent).
    pub fn evaluate(&self, x: f64) -> f64 {
        curve::evaluate(&self.points, x)
    }

    // ── Snapshots ───────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> CurveSnapshot {
        CurveSnapshot {
            points: self.points.clone(),
        }
    }

    /// Replaces the point set. On error the current points are kept.
    pub fn restore(&mut self, snapshot: CurveSnapshot) -> Result<(), ChartError> {
        if let Err(e) = snapshot.validate(self.config.min_gap) {
            tracing::warn!("rejected curve snapshot: {e}");
            return Err(e);
        }
        tracing::info!("restored curve with {} points", snapshot.points.len());
        self.points = snapshot.points;
        self.interaction = Interaction::Idle;
        self.refresh_midpoints();
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ChartError> {
        self.snapshot().to_json()
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), ChartError> {
        let snapshot: CurveSnapshot = serde_json::from_str(json)?;
        self.restore(snapshot)
    }

    // ── Edits ───────────────────────────────────────────────────────────────

    /// Pointer position in percent, snapped when the grid flag is on.
    fn pointer_percent(&self, pos: DVec2) -> DVec2 {
        let pct = self.plot_bounds.to_percent(pos);
        if self.snaps_to_grid() {
            DVec2::new(self.config.snap(pct.x), self.config.snap(pct.y))
        } else {
            pct
        }
    }

    fn drag_point(&mut self, index: usize, pos: DVec2) {
        if self.plot_bounds.is_empty() || index >= self.points.len() {
            return;
        }
        let target = self.pointer_percent(pos);
        let gap = self.config.min_gap;

        let mut x = self.points[index].x;
        if !self.points[index].is_x_restricted {
            let lo = index
                .checked_sub(1)
                .map_or(0.0, |i| self.points[i].x + gap)
                .max(0.0);
            let hi = self
                .points
                .get(index + 1)
                .map_or(100.0, |p| p.x - gap)
                .min(100.0);
            // No room between the neighbours: only y moves.
            if lo <= hi {
                x = target.x.clamp(lo, hi);
            }
        }

        let point = &mut self.points[index];
        point.x = x;
        point.y = target.y.clamp(0.0, 100.0);
        tracing::debug!("point {index} dragged to ({:.2}, {:.2})", point.x, point.y);
        self.refresh_midpoints();
    }

    fn drag_midpoint(&mut self, index: usize, pos: DVec2) {
        if self.plot_bounds.is_empty() || index + 1 >= self.points.len() {
            return;
        }
        let y = self.plot_bounds.to_percent(pos).y;
        let Some(factor) = curve::factor_for_height(&self.points[index], &self.points[index + 1], y)
        else {
            return;
        };
        self.points[index].interpolation_factor = factor;
        tracing::debug!("segment {index} interpolation factor set to {factor:.3}");
        self.refresh_midpoints();
    }

    /// Adds an interior point at `pct`. Returns its index, or `None` when it
    /// would land within the minimum gap of a neighbour.
    pub fn insert_point(&mut self, pct: DVec2) -> Option<usize> {
        let x = pct.x.clamp(0.0, 100.0);
        let y = pct.y.clamp(0.0, 100.0);
        let gap = self.config.min_gap;

        let index = self.points.partition_point(|p| p.x < x);
        let fits = index > 0
            && index < self.points.len()
            && self.points[index - 1].x + gap <= x
            && x <= self.points[index].x - gap;
        if !fits {
            tracing::warn!("dropped point insert at x={x:.2}: too close to a neighbour");
            return None;
        }

        let mut point = ControlPoint::new(x, y);
        point.interpolation_factor = self.config.default_factor;
        self.points.insert(index, point);
        tracing::info!(
            "inserted point {index} at ({x:.2}, {y:.2}), {} points",
            self.points.len()
        );
        self.interaction = Interaction::Idle;
        self.refresh_midpoints();
        Some(index)
    }

    /// Removes an interior point. Endpoints are never removed.
    pub fn delete_point(&mut self, index: usize) -> bool {
        match self.points.get(index) {
            Some(point) if !point.is_x_restricted => {
                self.points.remove(index);
                tracing::info!("deleted point {index}, {} points", self.points.len());
                self.interaction = Interaction::Idle;
                self.refresh_midpoints();
                true
            }
            _ => false,
        }
    }

    /// Straightens the segment leaving point `index`.
    pub fn reset_interpolation(&mut self, index: usize) {
        if let Some(point) = self.points.get_mut(index) {
            point.interpolation_factor = self.config.default_factor;
            tracing::info!("reset interpolation of segment {index}");
            self.interaction = Interaction::Idle;
        }
        self.refresh_midpoints();
    }

    /// A release that wandered further than the hit tolerance from the press
    /// cancels the right-click.
    fn resolve_right_click(&mut self, origin: DVec2, pos: DVec2) {
        if self.plot_bounds.is_empty() {
            return;
        }
        let tol_x = self.config.hit_tolerance / 100.0 * self.plot_bounds.width();
        let tol_y = self.config.hit_tolerance / 100.0 * self.plot_bounds.height();
        if (pos.x - origin.x).abs() >= tol_x || (pos.y - origin.y).abs() >= tol_y {
            tracing::debug!("right-click cancelled: pointer moved away");
            return;
        }
        if let Some(index) = self.hit_test_point(pos) {
            if self.delete_point(index) {
                return;
            }
        }
        if let Some(index) = self.hit_test_midpoint(pos) {
            self.reset_interpolation(index);
        }
    }
}

impl PointerHandler for ChartEditor {
    fn on_pointer_move(&mut self, pos: DVec2) {
        if self.is_frozen() {
            if self.interaction.focused_point().is_some() {
                self.interaction = Interaction::Idle;
            }
            return;
        }
        if !matches!(self.interaction, Interaction::Idle | Interaction::Focused(_)) {
            return;
        }

        let next = match self.hit_test_point(pos) {
            Some(index) => Interaction::Focused(index),
            None => Interaction::Idle,
        };
        if next != self.interaction {
            tracing::debug!("chart focus {:?} -> {:?}", self.interaction, next);
            self.interaction = next;
        }
    }

    fn on_pointer_down(&mut self, pos: DVec2, button: PointerButton) {
        if self.is_frozen() {
            return;
        }
        match button {
            PointerButton::Primary => {
                if let Some(index) = self.hit_test_point(pos) {
                    self.interaction = Interaction::DraggingPoint(index);
                } else if let Some(index) = self.hit_test_midpoint(pos) {
                    self.interaction = Interaction::DraggingMidpoint(index);
                }
            }
            PointerButton::Secondary => {
                self.interaction = Interaction::PendingRightClick { origin: pos };
            }
        }
    }

    fn on_pointer_drag(&mut self, pos: DVec2) {
        if self.is_frozen() || !pos.is_finite() {
            return;
        }
        match self.interaction {
            Interaction::DraggingPoint(index) => self.drag_point(index, pos),
            Interaction::DraggingMidpoint(index) => self.drag_midpoint(index, pos),
            _ => {}
        }
    }

    fn on_pointer_up(&mut self, pos: DVec2, _button: PointerButton) {
        let finished = std::mem::take(&mut self.interaction);
        if self.is_frozen() {
            return;
        }
        if let Interaction::PendingRightClick { origin } = finished {
            self.resolve_right_click(origin, pos);
        }
    }

    fn on_double_click(&mut self, pos: DVec2) {
        if self.is_frozen() || self.plot_bounds.is_empty() || !pos.is_finite() {
            return;
        }
        if self.hit_test_point(pos).is_some() {
            return;
        }
        let pct = self.pointer_percent(pos);
        if let Some(index) = self.insert_point(pct) {
            self.interaction = Interaction::Focused(index);
        }
    }
}

impl Widget for ChartEditor {
    fn on_resize(&mut self, bounds: PlotRect) {
        self.bounds = bounds;
        self.set_plot_bounds(bounds);
    }

    fn bounds(&self) -> PlotRect {
        self.bounds
    }

    fn draw(&mut self, out: &mut DrawList) {
        let curve = self.compute_curve();
        render::draw_chart(self, &curve, out);
    }
}
