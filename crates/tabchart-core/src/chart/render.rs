//! Draw command emission for the chart editor.

use glam::DVec2;

use super::ChartEditor;
use crate::color::{self, BLEND_10, BLEND_15, BLEND_75, with_opacity};
use crate::draw::{DrawList, TextAlign};
use crate::geometry::PlotRect;

const CURVE_THICKNESS: f32 = 2.0;
const POINT_RADIUS: f32 = 3.0;
const ACTIVE_POINT_RADIUS: f32 = 5.0;
const HANDLE_RADIUS: f32 = 2.5;
const TICK_LABEL_SIZE: f32 = 12.0;

/// dB labels along the top edge: `(text, left, right)` in tick-scale units.
const DB_LABELS: [(&str, f64, f64); 5] = [
    ("-18", 1.0, 3.0),
    ("-12", 3.0, 5.0),
    ("-9", 4.0, 6.0),
    ("-6", 5.0, 7.0),
    ("-3", 6.0, 8.0),
];
/// Tick positions on the left half, in tick-scale units.
const DB_TICKS_LEFT: [f64; 5] = [2.0, 4.0, 5.0, 6.0, 7.0];
/// Tick positions on the right half, offset from the centre.
const DB_TICKS_RIGHT: [f64; 3] = [2.0, 4.0, 6.0];

pub(super) fn draw_chart(editor: &ChartEditor, curve: &[DVec2], out: &mut DrawList) {
    let plot = editor.plot_bounds();
    let color = editor.color();

    out.fill_rect(plot, color::BLACK);

    // Area under the curve, closed along the bottom edge.
    let mut area = Vec::with_capacity(curve.len() + 2);
    area.push(DVec2::new(plot.right, plot.bottom));
    area.push(DVec2::new(plot.left, plot.bottom));
    area.extend_from_slice(curve);
    out.fill_path(area, with_opacity(color, BLEND_15));
    out.stroke_path(curve.to_vec(), color, CURVE_THICKNESS);

    draw_points(editor, plot, out);
    draw_reference_lines(plot, out);
    draw_db_scale(plot, out);

    if editor.config().draw_frame {
        out.stroke_rect(plot, color::GRAY, 1.0);
    }
}

fn draw_points(editor: &ChartEditor, plot: PlotRect, out: &mut DrawList) {
    let color = editor.color();
    let interaction = editor.interaction();

    if let Some(point) = interaction
        .focused_point()
        .and_then(|index| editor.points().get(index))
    {
        out.circle(plot.to_pixel(point.position()), ACTIVE_POINT_RADIUS, color, false);
    }

    for (index, point) in editor.points().iter().enumerate() {
        let radius = if interaction.dragged_point() == Some(index) {
            ACTIVE_POINT_RADIUS
        } else {
            POINT_RADIUS
        };
        out.circle(plot.to_pixel(point.position()), radius, color, true);

        if let Some(mid) = point.mid_point {
            let dragged = interaction.dragged_midpoint() == Some(index);
            out.circle(mid, HANDLE_RADIUS, with_opacity(color, 0.6), dragged);
        }
    }
}

fn draw_reference_lines(plot: PlotRect, out: &mut DrawList) {
    let faint = with_opacity(color::WHITE, BLEND_10);
    out.line(
        DVec2::new(plot.left, plot.bottom),
        DVec2::new(plot.right, plot.top),
        faint,
    );
    out.line(
        DVec2::new(plot.left, plot.mid_y()),
        DVec2::new(plot.right, plot.mid_y()),
        faint,
    );
    out.line(
        DVec2::new(plot.mid_x(), plot.top),
        DVec2::new(plot.mid_x(), plot.bottom),
        faint,
    );
}

fn draw_db_scale(plot: PlotRect, out: &mut DrawList) {
    let scale = 3.0 * 0.5 / 27.0 * plot.width();
    let tick_color = with_opacity(color::WHITE, BLEND_75);
    let (x, y) = (plot.left, plot.top);

    let left = DB_TICKS_LEFT.iter().map(|k| x + k * scale);
    let right = DB_TICKS_RIGHT
        .iter()
        .map(|k| x + plot.width() / 2.0 + k * scale);
    for tx in left.chain(right) {
        out.line(DVec2::new(tx, y - 1.0), DVec2::new(tx, y + 2.0), tick_color);
    }

    for (text, from, to) in DB_LABELS {
        let rect = PlotRect::new(x + from * scale, y, x + to * scale, y + 15.0);
        out.text(text, rect, TICK_LABEL_SIZE, color::WHITE, TextAlign::Center);
    }
}

#[cfg(test)]
mod tests {
    use crate::chart::ChartEditor;
    use crate::color;
    use crate::draw::{DrawCommand, DrawList};
    use crate::geometry::PlotRect;
    use crate::input::{PointerButton, PointerHandler, Widget};
    use crate::properties::SharedProperties;
    use glam::DVec2;

    fn drawn(editor: &mut ChartEditor) -> Vec<DrawCommand> {
        let mut list = DrawList::new();
        editor.draw(&mut list);
        list.into_commands()
    }

    #[test]
    fn test_draws_curve_area_and_points() {
        let mut editor = ChartEditor::new(SharedProperties::with_defaults(), color::RED);
        editor.on_resize(PlotRect::new(0.0, 0.0, 100.0, 100.0));
        let commands = drawn(&mut editor);

        let strokes = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath { .. }))
            .count();
        assert_eq!(strokes, 1);

        let Some(DrawCommand::FillPath { points, .. }) = commands
            .iter()
            .find(|c| matches!(c, DrawCommand::FillPath { .. }))
        else {
            panic!("missing area fill");
        };
        assert_eq!(points[0], DVec2::new(100.0, 100.0));
        assert_eq!(points[1], DVec2::new(0.0, 100.0));

        // Three filled points.
        let filled = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { filled: true, .. }))
            .count();
        assert_eq!(filled, 3);

        let labels: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["-18", "-12", "-9", "-6", "-3"]);
    }

    #[test]
    fn test_dragged_point_is_enlarged() {
        let mut editor = ChartEditor::new(SharedProperties::with_defaults(), color::RED);
        editor.on_resize(PlotRect::new(0.0, 0.0, 100.0, 100.0));
        editor.on_pointer_down(DVec2::new(50.0, 50.0), PointerButton::Primary);

        let radii: Vec<f32> = drawn(&mut editor)
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle {
                    radius,
                    filled: true,
                    ..
                } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![3.0, 5.0, 3.0]);
    }
}
