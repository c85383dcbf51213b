//! Shared boolean properties (snap-to-grid, freeze).
//!
//! One store is created by the layout and a cloned handle is injected into
//! every widget that reads or toggles a flag. Entries keep insertion order,
//! which the properties editor uses for its toggle layout.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Rounds dragged and inserted chart points to the grid.
pub const SNAP_TO_GRID: &str = "Snap to Grid";
/// Turns every chart editing gesture into a no-op.
pub const FREEZE: &str = "Freeze";

/// A single flag and its display label (also the bitmap base name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub enabled: bool,
    pub label: String,
}

impl Property {
    pub fn new(enabled: bool, label: impl Into<String>) -> Self {
        Self {
            enabled,
            label: label.into(),
        }
    }
}

/// Reference-counted handle to the property map.
#[derive(Debug, Clone, Default)]
pub struct SharedProperties {
    inner: Arc<RwLock<Vec<(String, Property)>>>,
}

impl SharedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two flags every chart editor understands.
    pub fn with_defaults() -> Self {
        let props = Self::new();
        props.insert(SNAP_TO_GRID, Property::new(true, "magnet"));
        props.insert(FREEZE, Property::new(false, "freeze"));
        props
    }

    /// Adds a property, or replaces an existing one in place.
    pub fn insert(&self, name: impl Into<String>, property: Property) {
        let name = name.into();
        let mut entries = self.inner.write();
        match entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = property,
            None => entries.push((name, property)),
        }
    }

    /// `(enabled, label)` for `name`.
    pub fn get(&self, name: &str) -> Option<(bool, String)> {
        self.inner
            .read()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, prop)| (prop.enabled, prop.label.clone()))
    }

    /// Missing properties read as disabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.inner
            .read()
            .iter()
            .any(|(key, prop)| key == name && prop.enabled)
    }

    /// Sets the flag. Returns `false` when `name` is unknown.
    pub fn set(&self, name: &str, enabled: bool) -> bool {
        let mut entries = self.inner.write();
        let Some((_, prop)) = entries.iter_mut().find(|(key, _)| key == name) else {
            return false;
        };
        prop.enabled = enabled;
        tracing::info!("property '{name}' set to {enabled}");
        true
    }

    /// Flips the flag and returns its new value.
    pub fn toggle(&self, name: &str) -> Option<bool> {
        let mut entries = self.inner.write();
        let (_, prop) = entries.iter_mut().find(|(key, _)| key == name)?;
        prop.enabled = !prop.enabled;
        tracing::info!("property '{name}' toggled to {}", prop.enabled);
        Some(prop.enabled)
    }

    /// Snapshot of all entries in insertion order.
    pub fn entries(&self) -> Vec<(String, Property)> {
        self.inner.read().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
