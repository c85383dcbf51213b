//! Backend-agnostic draw commands.
//!
//! Widgets never talk to a graphics API. Each frame they append
//! [`DrawCommand`]s to a [`DrawList`], and the host's rendering shim replays
//! the list with whatever backend it owns.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::PlotRect;

/// Horizontal text alignment inside the target rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Near,
    Center,
    Far,
}

/// One primitive for the rendering shim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        rect: PlotRect,
        color: Color,
    },
    StrokeRect {
        rect: PlotRect,
        color: Color,
        thickness: f32,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Color,
    },
    /// Open polyline through `points`.
    StrokePath {
        points: Vec<DVec2>,
        color: Color,
        thickness: f32,
    },
    /// Closed polygon through `points`.
    FillPath {
        points: Vec<DVec2>,
        color: Color,
    },
    Circle {
        center: DVec2,
        radius: f32,
        color: Color,
        filled: bool,
    },
    Text {
        text: String,
        rect: PlotRect,
        size: f32,
        color: Color,
        align: TextAlign,
    },
    /// Bitmap resource fitted into `rect`. Only the file name is carried.
    Bitmap {
        name: String,
        rect: PlotRect,
    },
}

/// Ordered draw commands for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn fill_rect(&mut self, rect: PlotRect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: PlotRect, color: Color, thickness: f32) {
        self.push(DrawCommand::StrokeRect {
            rect,
            color,
            thickness,
        });
    }

    pub fn line(&mut self, from: DVec2, to: DVec2, color: Color) {
        self.push(DrawCommand::Line { from, to, color });
    }

    pub fn stroke_path(&mut self, points: Vec<DVec2>, color: Color, thickness: f32) {
        if points.len() < 2 {
            return;
        }
        self.push(DrawCommand::StrokePath {
            points,
            color,
            thickness,
        });
    }

    pub fn fill_path(&mut self, points: Vec<DVec2>, color: Color) {
        if points.len() < 3 {
            return;
        }
        self.push(DrawCommand::FillPath { points, color });
    }

    pub fn circle(&mut self, center: DVec2, radius: f32, color: Color, filled: bool) {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
            filled,
        });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        rect: PlotRect,
        size: f32,
        color: Color,
        align: TextAlign,
    ) {
        self.push(DrawCommand::Text {
            text: text.into(),
            rect,
            size,
            color,
            align,
        });
    }

    pub fn bitmap(&mut self, name: impl Into<String>, rect: PlotRect) {
        self.push(DrawCommand::Bitmap {
            name: name.into(),
            rect,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn test_degenerate_paths_are_skipped() {
        let mut list = DrawList::new();
        list.stroke_path(vec![DVec2::ZERO], color::WHITE, 1.0);
        list.fill_path(vec![DVec2::ZERO, DVec2::ONE], color::WHITE);
        assert!(list.is_empty());

        list.stroke_path(vec![DVec2::ZERO, DVec2::ONE], color::WHITE, 1.0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_commands_serialize_with_kind_tag() {
        let mut list = DrawList::new();
        list.bitmap("magnet.png", PlotRect::new(0.0, 0.0, 1.0, 1.0));
        let json = serde_json::to_value(list.commands()).expect("serialize");
        assert_eq!(json[0]["kind"], "bitmap");
        assert_eq!(json[0]["name"], "magnet.png");
    }
}
