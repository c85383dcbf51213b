//! The complete editor surface of the multiband effect.
//!
//! Four chart editors (LOW, MID, HIGH, MASTER) live in a tabbed panel in the
//! middle of the window; the snap/freeze toggles sit below it. All of them
//! share one [`SharedProperties`] store.

use glam::DVec2;

use crate::chart::{ChartEditor, CurveSnapshot};
use crate::color::{self, Color};
use crate::config::{EditorConfig, PanelLayout};
use crate::draw::DrawList;
use crate::geometry::PlotRect;
use crate::input::{PointerButton, PointerHandler, Widget};
use crate::panel::{Tab, TabbedPanel};
use crate::properties::SharedProperties;
use crate::props_editor::PropsEditor;

/// Tab names and their curve colors, in selector order.
pub const BANDS: [(&str, Color); 4] = [
    ("LOW", color::RED),
    ("MID", color::ORANGE),
    ("HIGH", color::YELLOW),
    ("MASTER", color::GREEN),
];

const PANEL_WIDTH: f64 = 200.0;
const PANEL_HEIGHT: f64 = 300.0;

/// Window background.
const BACKGROUND: Color = color::GRAY;

#[derive(Debug, Clone)]
pub struct EffectLayout {
    bounds: PlotRect,
    properties: SharedProperties,
    panel: TabbedPanel,
    props_editor: PropsEditor,
}

impl EffectLayout {
    pub fn new(window: PlotRect) -> Self {
        Self::with_config(window, EditorConfig::default(), PanelLayout::default())
    }

    pub fn with_config(window: PlotRect, editor: EditorConfig, panel: PanelLayout) -> Self {
        let properties = SharedProperties::with_defaults();
        let tabs = BANDS
            .iter()
            .map(|&(name, color)| {
                let chart = ChartEditor::with_config(properties.clone(), color, editor.clone());
                Tab::new(name, chart)
            })
            .collect();

        let mut layout = Self {
            bounds: window,
            panel: TabbedPanel::with_layout(tabs, panel),
            props_editor: PropsEditor::new(properties.clone()),
            properties,
        };
        layout.on_resize(window);
        tracing::info!(
            "effect layout built for {:.0}x{:.0} window",
            window.width(),
            window.height()
        );
        layout
    }

    pub fn properties(&self) -> &SharedProperties {
        &self.properties
    }

    pub fn panel(&self) -> &TabbedPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut TabbedPanel {
        &mut self.panel
    }

    pub fn props_editor(&self) -> &PropsEditor {
        &self.props_editor
    }

    /// Snapshots of every tab, in selector order.
    pub fn snapshots(&self) -> Vec<(String, CurveSnapshot)> {
        self.panel
            .tabs()
            .iter()
            .map(|tab| (tab.name.clone(), tab.editor.snapshot()))
            .collect()
    }

    fn over_props(&self, pos: DVec2) -> bool {
        self.props_editor.bounds().contains(pos)
    }
}

impl PointerHandler for EffectLayout {
    fn on_pointer_move(&mut self, pos: DVec2) {
        if self.over_props(pos) {
            self.props_editor.on_pointer_move(pos);
        } else {
            self.panel.on_pointer_move(pos);
        }
    }

    fn on_pointer_down(&mut self, pos: DVec2, button: PointerButton) {
        if self.over_props(pos) {
            self.props_editor.on_pointer_down(pos, button);
        } else {
            self.panel.on_pointer_down(pos, button);
        }
    }

    fn on_pointer_drag(&mut self, pos: DVec2) {
        self.panel.on_pointer_drag(pos);
    }

    fn on_pointer_up(&mut self, pos: DVec2, button: PointerButton) {
        if self.over_props(pos) {
            self.props_editor.on_pointer_up(pos, button);
        }
        // Always let the panel finish a gesture it started.
        self.panel.on_pointer_up(pos, button);
    }

    fn on_double_click(&mut self, pos: DVec2) {
        if !self.over_props(pos) {
            self.panel.on_double_click(pos);
        }
    }
}

impl Widget for EffectLayout {
    fn on_resize(&mut self, bounds: PlotRect) {
        self.bounds = bounds;
        self.panel
            .on_resize(bounds.centered_inside(PANEL_WIDTH, PANEL_HEIGHT));
        self.props_editor.on_resize(
            bounds
                .centered_inside(PANEL_WIDTH, 50.0)
                .v_shifted(100.0)
                .from_right(50.0),
        );
    }

    fn bounds(&self) -> PlotRect {
        self.bounds
    }

    fn draw(&mut self, out: &mut DrawList) {
        out.fill_rect(self.bounds, BACKGROUND);
        self.panel.draw(out);
        self.props_editor.draw(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{FREEZE, SNAP_TO_GRID};

    fn layout() -> EffectLayout {
        EffectLayout::new(PlotRect::from_size(0.0, 0.0, 600.0, 800.0))
    }

    #[test]
    fn test_builds_four_bands() {
        let layout = layout();
        let names: Vec<&str> = layout
            .panel()
            .tabs()
            .iter()
            .map(|tab| tab.name.as_str())
            .collect();
        assert_eq!(names, vec!["LOW", "MID", "HIGH", "MASTER"]);
        assert_eq!(layout.panel().tabs()[3].editor.color(), color::GREEN);
        assert_eq!(layout.panel().bounds(), PlotRect::new(200.0, 250.0, 400.0, 550.0));
        assert_eq!(layout.props_editor().bounds(), PlotRect::new(350.0, 475.0, 400.0, 525.0));
        assert!(layout.properties().is_enabled(SNAP_TO_GRID));
    }

    #[test]
    fn test_props_toggle_reaches_editors() {
        let mut layout = layout();
        let props_bounds = layout.props_editor().bounds();
        let freeze = DVec2::new(props_bounds.left + 40.0, props_bounds.mid_y());
        layout.on_pointer_down(freeze, PointerButton::Primary);
        layout.on_pointer_up(freeze, PointerButton::Primary);
        assert!(layout.properties().is_enabled(FREEZE));

        let frozen = layout
            .panel()
            .active_editor()
            .is_some_and(|editor| editor.is_frozen());
        assert!(frozen);
    }

    #[test]
    fn test_snapshots_cover_all_tabs() {
        let layout = layout();
        let snapshots = layout.snapshots();
        assert_eq!(snapshots.len(), 4);
        assert!(snapshots.iter().all(|(_, s)| s.points.len() == 3));
    }
}
