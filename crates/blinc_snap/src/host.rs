//! Host list traits
//!
//! The snap calculator never owns a list. It reads geometry through
//! [`SnapLayout`] and drives scrolling through [`ScrollContainer`], both
//! implemented by the widget that hosts it.

use crate::edge::{Axis, LayoutDirection};

/// Density assumed when the host does not report one (mdpi)
pub const DEFAULT_DENSITY_DPI: f32 = 160.0;

/// Kind of layout arranging the list children
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// Single-axis linear layout, the only kind snapping supports
    Linear { orientation: Axis, reversed: bool },
    /// Grids, staggered or custom layouts
    Other,
}

impl LayoutKind {
    /// Vertical, non-reversed linear layout
    pub fn vertical() -> Self {
        LayoutKind::Linear {
            orientation: Axis::Vertical,
            reversed: false,
        }
    }

    /// Horizontal, non-reversed linear layout
    pub fn horizontal() -> Self {
        LayoutKind::Linear {
            orientation: Axis::Horizontal,
            reversed: false,
        }
    }

    /// Scroll axis of a linear layout
    pub fn orientation(&self) -> Option<Axis> {
        match self {
            LayoutKind::Linear { orientation, .. } => Some(*orientation),
            LayoutKind::Other => None,
        }
    }

    /// Whether a linear layout is laid out from the end
    pub fn is_reversed(&self) -> bool {
        matches!(self, LayoutKind::Linear { reversed: true, .. })
    }
}

/// Read access to the host's laid-out children
///
/// Coordinates are in pixels relative to the container. "Decorated" bounds
/// include item decorations and margins.
pub trait SnapLayout {
    /// Cheap handle to a realized child
    type Child: Copy;

    /// Current layout, or `None` if the container has no layout yet
    fn layout(&self) -> Option<LayoutKind>;

    /// Number of realized children
    fn child_count(&self) -> usize;

    /// Realized child at `index` in layout order
    fn child_at(&self, index: usize) -> Option<Self::Child>;

    /// Adapter position bound to `child`
    fn child_adapter_position(&self, child: Self::Child) -> Option<usize>;

    /// Total number of items in the adapter
    fn item_count(&self) -> usize;

    /// First adapter position whose child is completely inside the padded bounds
    fn first_completely_visible_position(&self) -> Option<usize>;

    /// Last adapter position whose child is completely inside the padded bounds
    fn last_completely_visible_position(&self) -> Option<usize>;

    /// Decorated start of `child` along `axis`
    fn decorated_start(&self, axis: Axis, child: Self::Child) -> i32;

    /// Decorated end of `child` along `axis`
    fn decorated_end(&self, axis: Axis, child: Self::Child) -> i32;

    /// Start of the visible region excluding leading padding
    fn start_after_padding(&self, axis: Axis) -> i32;

    /// End of the visible region excluding trailing padding
    fn end_after_padding(&self, axis: Axis) -> i32;

    /// End of the visible region including trailing padding
    fn end(&self, axis: Axis) -> i32;

    /// Realized child bound to `position`, if any
    fn find_child_for_position(&self, position: usize) -> Option<Self::Child>;

    /// Text direction of the environment
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }

    /// Screen density in dots per inch
    fn density_dpi(&self) -> f32 {
        DEFAULT_DENSITY_DPI
    }
}

/// Scrolling facilities of the host
pub trait ScrollContainer: SnapLayout {
    /// Scroll immediately by a pixel delta
    fn scroll_by(&mut self, dx: i32, dy: i32);

    /// Animate a scroll by a pixel delta
    fn smooth_scroll_by(&mut self, dx: i32, dy: i32);

    /// Jump to an adapter position without alignment
    fn scroll_to_position(&mut self, position: usize);

    /// Animate to an adapter position without alignment
    fn smooth_scroll_to_position(&mut self, position: usize);

    /// Remove any fling handler installed on the container
    fn clear_fling_handler(&mut self) {}
}
