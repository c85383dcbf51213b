//! Pointer events and the widget capability traits.
//!
//! Hosts translate their native mouse events into [`PointerEvent`]s (pixel
//! coordinates) and hand them to the root widget. Widgets that own children
//! route the events themselves; there is no shared base class.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::draw::DrawList;
use crate::geometry::PlotRect;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Pointer event in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Down { x: f64, y: f64, button: PointerButton },
    Drag { x: f64, y: f64 },
    Up { x: f64, y: f64, button: PointerButton },
    DoubleClick { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn position(&self) -> DVec2 {
        match *self {
            Self::Move { x, y }
            | Self::Down { x, y, .. }
            | Self::Drag { x, y }
            | Self::Up { x, y, .. }
            | Self::DoubleClick { x, y } => DVec2::new(x, y),
        }
    }
}

/// Interactive surface that reacts to pointer gestures.
pub trait PointerHandler {
    /// Pointer moved with no button held.
    fn on_pointer_move(&mut self, pos: DVec2);

    fn on_pointer_down(&mut self, pos: DVec2, button: PointerButton);

    /// Pointer moved with a button held.
    fn on_pointer_drag(&mut self, pos: DVec2);

    fn on_pointer_up(&mut self, pos: DVec2, button: PointerButton);

    fn on_double_click(&mut self, pos: DVec2);

    /// Dispatches a recorded event to the matching handler.
    fn handle_event(&mut self, event: PointerEvent) {
        let pos = event.position();
        match event {
            PointerEvent::Move { .. } => self.on_pointer_move(pos),
            PointerEvent::Down { button, .. } => self.on_pointer_down(pos, button),
            PointerEvent::Drag { .. } => self.on_pointer_drag(pos),
            PointerEvent::Up { button, .. } => self.on_pointer_up(pos, button),
            PointerEvent::DoubleClick { .. } => self.on_double_click(pos),
        }
    }
}

/// Something with bounds that can emit draw commands.
pub trait Widget {
    /// Bounds changed (layout or window resize).
    fn on_resize(&mut self, bounds: PlotRect);

    fn bounds(&self) -> PlotRect;

    fn draw(&mut self, out: &mut DrawList);
}
