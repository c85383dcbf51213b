//! Script replay and frame capture.

use glam::DVec2;
use serde::Serialize;
use tabchart_core::{
    ChartError, ControlPoint, DrawCommand, DrawList, EffectLayout, PlotRect, PointerEvent,
    PointerHandler, Property, Widget,
};

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),
}

/// One tab's curve after the replay.
#[derive(Debug, Serialize)]
pub struct CurveFrame {
    pub tab: String,
    pub points: Vec<ControlPoint>,
    /// Pixel-space polyline as drawn.
    pub polyline: Vec<DVec2>,
}

/// Everything a host would need to render the final state.
#[derive(Debug, Serialize)]
pub struct Frame {
    pub active_tab: String,
    pub properties: Vec<(String, Property)>,
    pub curves: Vec<CurveFrame>,
    pub commands: Vec<DrawCommand>,
}

pub fn parse_script(json: &str) -> Result<Vec<PointerEvent>, DemoError> {
    Ok(serde_json::from_str(json)?)
}

/// Builds a layout for the window, applies the optional preset to every tab,
/// feeds it every event and captures a frame.
pub fn replay(
    window: PlotRect,
    preset: Option<&str>,
    events: &[PointerEvent],
) -> Result<Frame, DemoError> {
    let mut layout = EffectLayout::new(window);
    if let Some(json) = preset {
        for tab in layout.panel_mut().tabs_mut() {
            tab.editor.load_json(json)?;
        }
        tracing::info!("preset applied to every tab");
    }
    for event in events {
        tracing::debug!("replaying {event:?}");
        layout.handle_event(*event);
    }
    tracing::info!("replayed {} events", events.len());
    Ok(capture(&mut layout))
}

fn capture(layout: &mut EffectLayout) -> Frame {
    let mut list = DrawList::new();
    layout.draw(&mut list);

    let curves = layout
        .panel_mut()
        .tabs_mut()
        .iter_mut()
        .map(|tab| CurveFrame {
            tab: tab.name.clone(),
            points: tab.editor.points().to_vec(),
            polyline: tab.editor.compute_curve(),
        })
        .collect();

    Frame {
        active_tab: layout
            .panel()
            .active_tab()
            .map(|tab| tab.name.clone())
            .unwrap_or_default(),
        properties: layout.properties().entries(),
        curves,
        commands: list.into_commands(),
    }
}

pub fn to_json(frame: &Frame) -> Result<String, DemoError> {
    Ok(serde_json::to_string_pretty(frame)?)
}
