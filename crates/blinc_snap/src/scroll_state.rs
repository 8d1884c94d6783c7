//! Scroll state reported by the host list

/// Scroll state of the list
///
/// The host reports every change through
/// [`SnapCalculator::on_scroll_state_changed`](crate::SnapCalculator::on_scroll_state_changed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
    /// No scrolling, content at rest
    #[default]
    Idle,
    /// Content follows an active touch or pointer drag
    Dragging,
    /// Content moves on its own (fling momentum or a smooth scroll)
    Settling,
}

impl ScrollState {
    /// Returns true if the content is at rest
    pub fn is_idle(&self) -> bool {
        matches!(self, ScrollState::Idle)
    }

    /// Returns true if the content is moving
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true while the user is dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, ScrollState::Dragging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_state_activity() {
        assert!(ScrollState::default().is_idle());
        assert!(ScrollState::Dragging.is_active());
        assert!(ScrollState::Dragging.is_dragging());
        assert!(ScrollState::Settling.is_active());
        assert!(!ScrollState::Settling.is_dragging());
    }
}
