//! Row of toggle buttons bound to the shared properties.
//!
//! Each property gets one bitmap handle, spaced 20 px apart along the
//! vertical centre of the widget. Releasing the pointer over a handle flips
//! the flag for every widget sharing the store.

use glam::DVec2;

use crate::draw::DrawList;
use crate::geometry::PlotRect;
use crate::input::{PointerButton, PointerHandler, Widget};
use crate::properties::SharedProperties;

/// Horizontal distance between toggle centres.
const TOGGLE_SPACING: f64 = 20.0;
/// Half-size of a toggle's hit box.
const TOGGLE_HIT: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct PropsEditor {
    bounds: PlotRect,
    properties: SharedProperties,
    focused: Option<String>,
}

impl PropsEditor {
    pub fn new(properties: SharedProperties) -> Self {
        Self {
            bounds: PlotRect::default(),
            properties,
            focused: None,
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Centre of the `index`-th toggle.
    fn toggle_center(&self, index: usize) -> DVec2 {
        DVec2::new(
            self.bounds.left + TOGGLE_SPACING * (index + 1) as f64,
            self.bounds.mid_y(),
        )
    }

    /// Name of the property whose toggle is under `pos`.
    pub fn hit_test(&self, pos: DVec2) -> Option<String> {
        self.properties
            .entries()
            .into_iter()
            .enumerate()
            .find(|(index, _)| {
                let c = self.toggle_center(*index);
                (pos.x - c.x).abs() <= TOGGLE_HIT && (pos.y - c.y).abs() <= TOGGLE_HIT
            })
            .map(|(_, (name, _))| name)
    }
}

impl PointerHandler for PropsEditor {
    fn on_pointer_move(&mut self, pos: DVec2) {
        self.focused = self.hit_test(pos);
    }

    fn on_pointer_down(&mut self, _pos: DVec2, _button: PointerButton) {}

    fn on_pointer_drag(&mut self, _pos: DVec2) {}

    fn on_pointer_up(&mut self, pos: DVec2, _button: PointerButton) {
        if let Some(name) = self.hit_test(pos) {
            self.properties.toggle(&name);
        }
    }

    fn on_double_click(&mut self, _pos: DVec2) {}
}

impl Widget for PropsEditor {
    fn on_resize(&mut self, bounds: PlotRect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> PlotRect {
        self.bounds
    }

    fn draw(&mut self, out: &mut DrawList) {
        let w = self.bounds.width();
        let h = self.bounds.height();
        for (index, (name, prop)) in self.properties.entries().into_iter().enumerate() {
            let x = self.toggle_center(index).x;
            let suffix = if prop.enabled {
                "_selected"
            } else if self.focused.as_deref() == Some(name.as_str()) {
                "_focused"
            } else {
                ""
            };
            let rect = PlotRect::new(
                x - w / 4.0,
                self.bounds.top + h / 4.0,
                x + w / 4.0,
                self.bounds.top + 3.0 * h / 4.0,
            );
            out.bitmap(format!("{}{suffix}.png", prop.label), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use crate::properties::{FREEZE, SNAP_TO_GRID};

    fn editor() -> (PropsEditor, SharedProperties) {
        let props = SharedProperties::with_defaults();
        let mut editor = PropsEditor::new(props.clone());
        editor.on_resize(PlotRect::from_size(100.0, 0.0, 50.0, 50.0));
        (editor, props)
    }

    fn bitmap_names(editor: &mut PropsEditor) -> Vec<String> {
        let mut list = DrawList::new();
        editor.draw(&mut list);
        list.into_commands()
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::Bitmap { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_toggles_are_spaced_along_centre() {
        let (editor, _) = editor();
        assert_eq!(editor.hit_test(DVec2::new(120.0, 25.0)).as_deref(), Some(SNAP_TO_GRID));
        assert_eq!(editor.hit_test(DVec2::new(144.0, 29.0)).as_deref(), Some(FREEZE));
        assert_eq!(editor.hit_test(DVec2::new(130.0, 25.0)), None);
        assert_eq!(editor.hit_test(DVec2::new(120.0, 40.0)), None);
    }

    #[test]
    fn test_release_toggles_shared_flag() {
        let (mut editor, props) = editor();
        editor.on_pointer_up(DVec2::new(140.0, 25.0), PointerButton::Primary);
        assert!(props.is_enabled(FREEZE));
        editor.on_pointer_up(DVec2::new(140.0, 25.0), PointerButton::Primary);
        assert!(!props.is_enabled(FREEZE));
    }

    #[test]
    fn test_bitmaps_reflect_state() {
        let (mut editor, _) = editor();
        assert_eq!(bitmap_names(&mut editor), vec!["magnet_selected.png", "freeze.png"]);

        editor.on_pointer_move(DVec2::new(140.0, 25.0));
        assert_eq!(editor.focused(), Some(FREEZE));
        assert_eq!(
            bitmap_names(&mut editor),
            vec!["magnet_selected.png", "freeze_focused.png"]
        );
    }
}
