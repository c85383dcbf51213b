//! Tabchart Core — interactive curve editors for a multiband effect UI.
//!
//! This crate contains the chart editor model, its tabbed container, the
//! shared property toggles and the complete effect layout. Widgets consume
//! host-neutral pointer events and emit [`DrawCommand`]s; no windowing or
//! rendering framework is involved.

pub mod chart;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod panel;
pub mod properties;
pub mod props_editor;

// Re-exports for convenience.
pub use chart::{ChartEditor, ControlPoint, CurveSnapshot, Interaction};
pub use config::{EditorConfig, PanelLayout};
pub use draw::{DrawCommand, DrawList};
pub use error::ChartError;
pub use geometry::PlotRect;
pub use input::{PointerButton, PointerEvent, PointerHandler, Widget};
pub use layout::EffectLayout;
pub use panel::{Tab, TabbedPanel};
pub use properties::{Property, SharedProperties};
pub use props_editor::PropsEditor;
