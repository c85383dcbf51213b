//! Tabbed panel holding one chart editor per tab.
//!
//! The panel owns its editors outright. Only the active tab's editor is
//! drawn and receives pointer events; the selector column on the left of the
//! panel switches between tabs.

use glam::DVec2;

use crate::chart::ChartEditor;
use crate::color;
use crate::config::PanelLayout;
use crate::draw::{DrawList, TextAlign};
use crate::geometry::PlotRect;
use crate::input::{PointerButton, PointerHandler, Widget};

/// One named chart editor and its selector rect.
#[derive(Debug, Clone)]
pub struct Tab {
    pub name: String,
    pub editor: ChartEditor,
    selector_rect: PlotRect,
}

impl Tab {
    pub fn new(name: impl Into<String>, editor: ChartEditor) -> Self {
        Self {
            name: name.into(),
            editor,
            selector_rect: PlotRect::default(),
        }
    }

    pub fn selector_rect(&self) -> PlotRect {
        self.selector_rect
    }
}

#[derive(Debug, Clone)]
pub struct TabbedPanel {
    bounds: PlotRect,
    tabs: Vec<Tab>,
    active: usize,
    layout: PanelLayout,
}

impl TabbedPanel {
    pub fn new(tabs: Vec<Tab>) -> Self {
        Self::with_layout(tabs, PanelLayout::default())
    }

    pub fn with_layout(tabs: Vec<Tab>, layout: PanelLayout) -> Self {
        Self {
            bounds: PlotRect::default(),
            tabs,
            active: 0,
            layout,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut [Tab] {
        &mut self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Selects a tab. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) {
        if index >= self.tabs.len() || index == self.active {
            return;
        }
        tracing::info!("switched to tab '{}'", self.tabs[index].name);
        self.active = index;
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn active_editor(&self) -> Option<&ChartEditor> {
        self.active_tab().map(|tab| &tab.editor)
    }

    pub fn active_editor_mut(&mut self) -> Option<&mut ChartEditor> {
        self.tabs.get_mut(self.active).map(|tab| &mut tab.editor)
    }

    pub fn editor(&self, name: &str) -> Option<&ChartEditor> {
        self.tabs
            .iter()
            .find(|tab| tab.name == name)
            .map(|tab| &tab.editor)
    }

    /// Bounding box of all selectors.
    fn selector_column(&self) -> PlotRect {
        self.bounds
            .from_tlhc(self.layout.selector_width, self.layout.selector_height)
            .v_shifted(self.layout.selector_offset)
    }

    fn selector_at(&self, pos: DVec2) -> Option<usize> {
        self.tabs
            .iter()
            .position(|tab| tab.selector_rect.contains(pos))
    }

    /// Active editor, if `pos` lies within its plot area.
    fn editor_at(&mut self, pos: DVec2) -> Option<&mut ChartEditor> {
        self.active_editor_mut()
            .filter(|editor| editor.plot_bounds().contains(pos))
    }
}

impl PointerHandler for TabbedPanel {
    fn on_pointer_move(&mut self, pos: DVec2) {
        if let Some(editor) = self.editor_at(pos) {
            editor.on_pointer_move(pos);
        }
    }

    fn on_pointer_down(&mut self, pos: DVec2, button: PointerButton) {
        // The press belongs to the tab that was active before any switch.
        if let Some(editor) = self.editor_at(pos) {
            editor.on_pointer_down(pos, button);
        }
        if let Some(index) = self.selector_at(pos) {
            self.set_active(index);
        }
    }

    fn on_pointer_drag(&mut self, pos: DVec2) {
        let Some(editor) = self.active_editor_mut() else {
            return;
        };
        // Keep feeding a drag that leaves the plot so it clamps at the edge.
        if editor.is_dragging() || editor.plot_bounds().contains(pos) {
            editor.on_pointer_drag(pos);
        }
    }

    fn on_pointer_up(&mut self, pos: DVec2, button: PointerButton) {
        if let Some(editor) = self.active_editor_mut() {
            editor.on_pointer_up(pos, button);
        }
    }

    fn on_double_click(&mut self, pos: DVec2) {
        if let Some(editor) = self.editor_at(pos) {
            editor.on_double_click(pos);
        }
    }
}

impl Widget for TabbedPanel {
    fn on_resize(&mut self, bounds: PlotRect) {
        self.bounds = bounds;
        let plot = bounds
            .from_tlhc(self.layout.plot_size, self.layout.plot_size)
            .padded(-self.layout.plot_inset);
        let column = self.selector_column();
        let count = self.tabs.len().max(1) as f64;
        let height = column.height() / count;

        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.editor.set_plot_bounds(plot);
            tab.selector_rect = column.from_top(height).v_shifted(height * i as f64);
        }
    }

    fn bounds(&self) -> PlotRect {
        self.bounds
    }

    fn draw(&mut self, out: &mut DrawList) {
        out.fill_rect(self.bounds, color::DARK_GRAY);
        out.stroke_rect(self.bounds, color::BLACK, 1.0);

        let stripe = self.layout.stripe_width;
        for (i, tab) in self.tabs.iter().enumerate() {
            let active = i == self.active;
            let rect = tab.selector_rect;
            out.fill_rect(rect, if active { color::GRAY } else { color::MID_GRAY });
            out.text(
                tab.name.clone(),
                rect.from_right(rect.width() - stripe).padded(-2.0),
                self.layout.label_size,
                if active {
                    color::LIGHT_GRAY
                } else {
                    color::DARK_GRAY
                },
                TextAlign::Far,
            );
            out.fill_rect(rect.from_left(stripe), tab.editor.color());
        }

        if let Some(tab) = self.tabs.get_mut(self.active) {
            tab.editor.draw(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{FREEZE, SharedProperties};

    fn panel() -> (TabbedPanel, SharedProperties) {
        let props = SharedProperties::with_defaults();
        props.set(crate::properties::SNAP_TO_GRID, false);
        let tabs = [("LOW", color::RED), ("MID", color::ORANGE)]
            .into_iter()
            .map(|(name, c)| Tab::new(name, ChartEditor::new(props.clone(), c)))
            .collect();
        let mut panel = TabbedPanel::new(tabs);
        panel.on_resize(PlotRect::from_size(0.0, 0.0, 400.0, 600.0));
        (panel, props)
    }

    #[test]
    fn test_resize_lays_out_plot_and_selectors() {
        let (panel, _) = panel();
        let plot = panel.tabs()[0].editor.plot_bounds();
        assert_eq!(plot, PlotRect::new(5.0, 5.0, 265.0, 265.0));

        assert_eq!(panel.tabs()[0].selector_rect(), PlotRect::new(0.0, 300.0, 105.0, 375.0));
        assert_eq!(panel.tabs()[1].selector_rect(), PlotRect::new(0.0, 375.0, 105.0, 450.0));
    }

    #[test]
    fn test_selector_click_switches_tab() {
        let (mut panel, _) = panel();
        assert_eq!(panel.active_index(), 0);
        panel.on_pointer_down(DVec2::new(50.0, 400.0), PointerButton::Primary);
        panel.on_pointer_up(DVec2::new(50.0, 400.0), PointerButton::Primary);
        assert_eq!(panel.active_index(), 1);
        assert_eq!(panel.active_tab().map(|t| t.name.as_str()), Some("MID"));

        panel.set_active(7);
        assert_eq!(panel.active_index(), 1);
    }

    #[test]
    fn test_events_reach_only_active_editor() {
        let (mut panel, _) = panel();
        panel.set_active(1);
        let plot = panel.tabs()[1].editor.plot_bounds();
        let pos = plot.to_pixel(DVec2::new(80.0, 20.0));
        panel.on_double_click(pos);

        assert_eq!(panel.editor("LOW").map(|e| e.points().len()), Some(3));
        assert_eq!(panel.editor("MID").map(|e| e.points().len()), Some(4));
    }

    #[test]
    fn test_drag_outside_plot_still_clamps() {
        let (mut panel, _) = panel();
        let plot = panel.tabs()[0].editor.plot_bounds();
        let start = plot.to_pixel(DVec2::new(50.0, 50.0));
        panel.on_pointer_down(start, PointerButton::Primary);
        panel.on_pointer_drag(plot.to_pixel(DVec2::new(110.0, 50.0)));
        panel.on_pointer_up(plot.to_pixel(DVec2::new(110.0, 50.0)), PointerButton::Primary);

        let point = panel.tabs()[0].editor.points()[1];
        assert!((point.x - 99.99).abs() < 1e-9);
        assert!((point.y - 50.0).abs() < 1e-9);
        assert!(!panel.tabs()[0].editor.is_dragging());
    }

    #[test]
    fn test_freeze_applies_to_every_tab() {
        let (mut panel, props) = panel();
        props.set(FREEZE, true);
        for index in 0..2 {
            panel.set_active(index);
            let plot = panel.tabs()[index].editor.plot_bounds();
            panel.on_double_click(plot.to_pixel(DVec2::new(80.0, 20.0)));
        }
        assert!(panel.tabs().iter().all(|tab| tab.editor.points().len() == 3));
    }

    #[test]
    fn test_draw_emits_selectors_then_active_chart() {
        let (mut panel, _) = panel();
        let mut list = DrawList::new();
        panel.draw(&mut list);

        let texts: Vec<&str> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                crate::draw::DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(&texts[..2], &["LOW", "MID"]);
        assert!(texts.contains(&"-18"));
    }
}
