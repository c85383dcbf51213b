use glam::DVec2;

/// What the chart editor is currently doing with the pointer.
///
/// Point indices stay valid for the whole gesture: drags clamp x between the
/// neighbours, so the ordering (and therefore the index) never changes while
/// a button is held.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Pointer hovers a point, no button held.
    Focused(usize),
    DraggingPoint(usize),
    /// Handle between point `n` and `n + 1`.
    DraggingMidpoint(usize),
    /// Secondary button held; resolved on release.
    PendingRightClick { origin: DVec2 },
}

impl Interaction {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingPoint(_) | Self::DraggingMidpoint(_))
    }

    pub fn focused_point(&self) -> Option<usize> {
        match *self {
            Self::Focused(index) => Some(index),
            _ => None,
        }
    }

    pub fn dragged_point(&self) -> Option<usize> {
        match *self {
            Self::DraggingPoint(index) => Some(index),
            _ => None,
        }
    }

    pub fn dragged_midpoint(&self) -> Option<usize> {
        match *self {
            Self::DraggingMidpoint(index) => Some(index),
            _ => None,
        }
    }
}
