//! Snap calculator
//!
//! Picks the child that should rest against the configured [`SnapEdge`]
//! once scrolling settles, and computes how far the list has to move to
//! align it.
//!
//! # Example
//!
//! ```rust,ignore
//! use blinc_snap::prelude::*;
//!
//! let mut snap = SnapCalculator::new(SnapEdge::Start, false)
//!     .with_listener(|position| println!("snapped to {position}"));
//! snap.attach(&mut list);
//!
//! // After a fling, once the host asks for a target:
//! if let Some(child) = snap.find_snap_view(&list) {
//!     let distance = snap.calculate_distance_to_final_snap(&list, child);
//!     list.smooth_scroll_by(distance.dx, distance.dy);
//! }
//!
//! // Forward scroll state changes so the listener fires on settle
//! snap.on_scroll_state_changed(ScrollState::Idle);
//! ```

use std::fmt;

use crate::config::{MaxScrollDistance, SnapConfig};
use crate::edge::{Axis, SnapEdge};
use crate::error::Result;
use crate::fling::{FlingBounds, FlingPhysics};
use crate::host::{LayoutKind, ScrollContainer, SnapLayout};
use crate::orientation::OrientationHelper;
use crate::scroll_state::ScrollState;
use crate::smooth_scroll::{SmoothScrollAction, SmoothScrollTiming, DEFAULT_MS_PER_INCH};

/// Callback invoked with the adapter position a list settled on
pub type SnapListener = Box<dyn FnMut(usize)>;

/// Pixel offset that aligns a child with the snap edge
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapDistance {
    pub dx: i32,
    pub dy: i32,
}

impl SnapDistance {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Returns true if no scrolling is needed
    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Distance along the larger axis
    pub fn max_abs(&self) -> i32 {
        self.dx.abs().max(self.dy.abs())
    }
}

/// Edge snapping policy for a linear list
pub struct SnapCalculator {
    edge: SnapEdge,
    is_rtl: bool,
    snap_last_item: bool,
    snap_to_padding: bool,
    scroll_ms_per_inch: f32,
    max_scroll_distance: MaxScrollDistance,

    vertical_helper: Option<OrientationHelper>,
    horizontal_helper: Option<OrientationHelper>,

    listener: Option<SnapListener>,
    listening: bool,
    attached: bool,

    current_snapped_position: Option<usize>,
    is_scrolling: bool,
}

impl fmt::Debug for SnapCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapCalculator")
            .field("edge", &self.edge)
            .field("is_rtl", &self.is_rtl)
            .field("snap_last_item", &self.snap_last_item)
            .field("snap_to_padding", &self.snap_to_padding)
            .field("scroll_ms_per_inch", &self.scroll_ms_per_inch)
            .field("max_scroll_distance", &self.max_scroll_distance)
            .field("attached", &self.attached)
            .field("current_snapped_position", &self.current_snapped_position)
            .field("is_scrolling", &self.is_scrolling)
            .finish_non_exhaustive()
    }
}

impl SnapCalculator {
    /// Create a calculator for an edge
    pub fn new(edge: SnapEdge, snap_last_item: bool) -> Self {
        Self {
            edge,
            is_rtl: false,
            snap_last_item,
            snap_to_padding: false,
            scroll_ms_per_inch: DEFAULT_MS_PER_INCH,
            max_scroll_distance: MaxScrollDistance::Unbounded,
            vertical_helper: None,
            horizontal_helper: None,
            listener: None,
            listening: false,
            attached: false,
            current_snapped_position: None,
            is_scrolling: false,
        }
    }

    /// Create a calculator from a platform gravity constant
    ///
    /// Fails unless `gravity` is START, END, TOP or BOTTOM.
    pub fn with_gravity(gravity: u32, snap_last_item: bool) -> Result<Self> {
        Ok(Self::new(SnapEdge::try_from(gravity)?, snap_last_item))
    }

    /// Create a calculator from a validated configuration
    pub fn from_config(config: &SnapConfig) -> Result<Self> {
        let max_scroll_distance = config.max_distance()?;
        let mut snap = Self::new(config.edge, config.snap_last_item);
        snap.snap_to_padding = config.snap_to_padding;
        snap.scroll_ms_per_inch = config.scroll_ms_per_inch;
        snap.max_scroll_distance = max_scroll_distance;
        Ok(snap)
    }

    /// Set the callback fired when scrolling settles on a snapped position
    ///
    /// Takes effect on the next [`attach`](Self::attach).
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(usize) + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to a list
    pub fn attach<C: ScrollContainer>(&mut self, container: &mut C) {
        container.clear_fling_handler();
        if self.edge.is_mirrored() {
            self.is_rtl = container.layout_direction().is_rtl();
        }
        self.listening = self.listener.is_some();
        self.attached = true;
        tracing::debug!(
            edge = %self.edge,
            rtl = self.is_rtl,
            listening = self.listening,
            "snap calculator attached"
        );
    }

    /// Drop the cached orientation helpers
    ///
    /// The next attach derives them again from the new layout.
    pub fn detach(&mut self) {
        self.vertical_helper = None;
        self.horizontal_helper = None;
        tracing::debug!("snap calculator detached");
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Forward a scroll state change from the host
    ///
    /// Returns the snapped position when this change settles the list.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) -> Option<usize> {
        if !self.listening {
            return None;
        }

        let mut settled = None;
        if state.is_idle() && self.is_scrolling {
            if let Some(position) = self.current_snapped_position {
                tracing::debug!(position, "snapped");
                if let Some(listener) = self.listener.as_mut() {
                    listener(position);
                }
                settled = Some(position);
            }
        }
        self.is_scrolling = state.is_active();
        settled
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn edge(&self) -> SnapEdge {
        self.edge
    }

    /// Whether START and END are mirrored for right-to-left text
    pub fn is_rtl(&self) -> bool {
        self.is_rtl
    }

    /// Adapter position of the last snap target, if any
    pub fn current_snapped_position(&self) -> Option<usize> {
        self.current_snapped_position
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Keep snapping once the list is scrolled to its end
    pub fn enable_last_item_snap(&mut self, snap: bool) {
        self.snap_last_item = snap;
    }

    pub fn snap_last_item(&self) -> bool {
        self.snap_last_item
    }

    /// Always align against the padded edge
    pub fn set_snap_to_padding(&mut self, snap_to_padding: bool) {
        self.snap_to_padding = snap_to_padding;
    }

    pub fn snap_to_padding(&self) -> bool {
        self.snap_to_padding
    }

    /// Set the smooth-scroll speed (milliseconds per inch)
    pub fn set_scroll_ms_per_inch(&mut self, ms: f32) {
        self.scroll_ms_per_inch = ms;
    }

    pub fn scroll_ms_per_inch(&self) -> f32 {
        self.scroll_ms_per_inch
    }

    /// Limit fling travel to `distance` pixels
    ///
    /// Clears any fractional limit.
    pub fn set_max_scroll_distance(&mut self, distance: u32) {
        self.max_scroll_distance = MaxScrollDistance::Pixels(distance);
    }

    /// Limit fling travel to a fraction of the visible extent
    ///
    /// Clears any absolute limit. A fraction of zero removes the limit.
    pub fn set_max_scroll_distance_from_size(&mut self, fraction: f32) {
        self.max_scroll_distance = if fraction == 0.0 {
            MaxScrollDistance::Unbounded
        } else {
            MaxScrollDistance::FractionOfExtent(fraction)
        };
    }

    /// Remove any fling travel limit
    pub fn clear_max_scroll_distance(&mut self) {
        self.max_scroll_distance = MaxScrollDistance::Unbounded;
    }

    /// Absolute fling travel limit, `None` when inactive
    pub fn max_scroll_distance(&self) -> Option<u32> {
        self.max_scroll_distance.pixels()
    }

    /// Relative fling travel limit, `0.0` when inactive
    pub fn max_scroll_distance_fraction(&self) -> f32 {
        self.max_scroll_distance.fraction()
    }

    // =========================================================================
    // Snap Target
    // =========================================================================

    /// Find the child that should rest against the snap edge
    ///
    /// Updates [`current_snapped_position`](Self::current_snapped_position).
    pub fn find_snap_view<L: SnapLayout>(&mut self, layout: &L) -> Option<L::Child> {
        let Some(LayoutKind::Linear { reversed, .. }) = layout.layout() else {
            return None;
        };

        let helper = match self.edge.axis() {
            Axis::Horizontal => self.horizontal_helper(),
            Axis::Vertical => self.vertical_helper(),
        };
        let snap_view = self.find_edge_view(layout, helper, reversed, self.edge.is_start());

        self.current_snapped_position =
            snap_view.and_then(|view| layout.child_adapter_position(view));
        tracing::trace!(position = ?self.current_snapped_position, "snap target");
        snap_view
    }

    /// Child closest to the leading or trailing edge
    fn find_edge_view<L: SnapLayout>(
        &self,
        layout: &L,
        helper: OrientationHelper,
        reversed: bool,
        start: bool,
    ) -> Option<L::Child> {
        if layout.child_count() == 0 {
            return None;
        }

        // Snapping at the end would leave the last item partially hidden
        if !self.snap_last_item && self.is_at_end_of_list(layout, reversed) {
            return None;
        }

        let leading = start != self.is_rtl;
        let end = helper.end(layout);

        let mut edge_view = None;
        let mut distance_to_edge = i32::MAX;
        for index in 0..layout.child_count() {
            let Some(child) = layout.child_at(index) else {
                continue;
            };
            let distance = if leading {
                helper.decorated_start(layout, child).saturating_abs()
            } else {
                (helper.decorated_end(layout, child) - end).saturating_abs()
            };
            if distance < distance_to_edge {
                distance_to_edge = distance;
                edge_view = Some(child);
            }
        }
        edge_view
    }

    /// Whether the list is scrolled to its terminal position for this edge
    fn is_at_end_of_list<L: SnapLayout>(&self, layout: &L, reversed: bool) -> bool {
        let towards_last = match self.edge {
            SnapEdge::Start | SnapEdge::Top => !reversed,
            SnapEdge::End | SnapEdge::Bottom => reversed,
        };
        if towards_last {
            layout.last_completely_visible_position() == layout.item_count().checked_sub(1)
        } else {
            layout.first_completely_visible_position() == Some(0)
        }
    }

    // =========================================================================
    // Distances
    // =========================================================================

    /// Offset that aligns `target` with the snap edge
    ///
    /// Only one axis is non-zero. Non-linear layouts yield zero.
    pub fn calculate_distance_to_final_snap<L: SnapLayout>(
        &mut self,
        layout: &L,
        target: L::Child,
    ) -> SnapDistance {
        let Some(LayoutKind::Linear { orientation, .. }) = layout.layout() else {
            return SnapDistance::default();
        };

        match orientation {
            Axis::Horizontal => {
                let helper = self.horizontal_helper();
                let to_start = matches!(
                    (self.is_rtl, self.edge),
                    (true, SnapEdge::End) | (false, SnapEdge::Start)
                );
                let dx = if to_start {
                    self.distance_to_start(layout, helper, target)
                } else {
                    self.distance_to_end(layout, helper, target)
                };
                SnapDistance::new(dx, 0)
            }
            Axis::Vertical => {
                let helper = self.vertical_helper();
                let dy = if self.edge == SnapEdge::Top {
                    self.distance_to_start(layout, helper, target)
                } else {
                    self.distance_to_end(layout, helper, target)
                };
                SnapDistance::new(0, dy)
            }
        }
    }

    fn distance_to_start<L: SnapLayout>(
        &self,
        layout: &L,
        helper: OrientationHelper,
        target: L::Child,
    ) -> i32 {
        let child_start = helper.decorated_start(layout, target);
        let start_after_padding = helper.start_after_padding(layout);

        // Children already inside the leading padding snap flush to the edge
        if !self.snap_to_padding && child_start < start_after_padding / 2 {
            child_start
        } else {
            child_start - start_after_padding
        }
    }

    fn distance_to_end<L: SnapLayout>(
        &self,
        layout: &L,
        helper: OrientationHelper,
        target: L::Child,
    ) -> i32 {
        let child_end = helper.decorated_end(layout, target);
        let end = helper.end(layout);
        let end_after_padding = helper.end_after_padding(layout);

        if !self.snap_to_padding && child_end >= end - (end - end_after_padding) / 2 {
            child_end - end
        } else {
            child_end - end_after_padding
        }
    }

    /// Where a fling at the given velocity comes to rest, clamped to the max travel
    ///
    /// Returns zero when no limit is configured or nothing has been measured
    /// yet; the host then keeps its unclamped fling.
    pub fn calculate_scroll_distance<L: SnapLayout>(
        &self,
        layout: &L,
        velocity_x: i32,
        velocity_y: i32,
    ) -> SnapDistance {
        if !self.attached
            || (self.vertical_helper.is_none() && self.horizontal_helper.is_none())
            || self.max_scroll_distance.is_unbounded()
        {
            return SnapDistance::default();
        }

        let max_distance = match self.max_scroll_distance {
            MaxScrollDistance::FractionOfExtent(fraction) => {
                let helper = self.vertical_helper.or(self.horizontal_helper);
                helper.map_or(0, |helper| (helper.total_space(layout) as f32 * fraction) as i32)
            }
            MaxScrollDistance::Pixels(px) => i32::try_from(px).unwrap_or(i32::MAX),
            MaxScrollDistance::Unbounded => return SnapDistance::default(),
        };

        let fling = FlingPhysics::new(layout.density_dpi()).fling(
            (0, 0),
            (velocity_x, velocity_y),
            FlingBounds::symmetric(max_distance),
        );
        tracing::trace!(
            velocity_x,
            velocity_y,
            max_distance,
            final_x = fling.final_x,
            final_y = fling.final_y,
            "fling clamped"
        );
        SnapDistance::new(fling.final_x, fling.final_y)
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Final step of a smooth scroll once `target` is laid out
    ///
    /// Returns `None` when detached, for non-linear layouts, or when the
    /// target is already aligned.
    pub fn smooth_scroll_action<L: SnapLayout>(
        &mut self,
        layout: &L,
        target: L::Child,
    ) -> Option<SmoothScrollAction> {
        if !self.attached || !matches!(layout.layout(), Some(LayoutKind::Linear { .. })) {
            return None;
        }

        let distance = self.calculate_distance_to_final_snap(layout, target);
        let timing = SmoothScrollTiming::new(self.scroll_ms_per_inch, layout.density_dpi());
        let duration_ms = timing.time_for_deceleration(distance.max_abs());
        (duration_ms > 0).then_some(SmoothScrollAction {
            dx: distance.dx,
            dy: distance.dy,
            duration_ms,
        })
    }

    /// Scroll so that `position` rests against the snap edge
    pub fn scroll_to_position<C: ScrollContainer>(&mut self, container: &mut C, position: usize) {
        self.scroll_to(container, position, false);
    }

    /// Animate so that `position` rests against the snap edge
    pub fn smooth_scroll_to_position<C: ScrollContainer>(
        &mut self,
        container: &mut C,
        position: usize,
    ) {
        self.scroll_to(container, position, true);
    }

    fn scroll_to<C: ScrollContainer>(&mut self, container: &mut C, position: usize, smooth: bool) {
        if container.layout().is_none() {
            return;
        }

        match container.find_child_for_position(position) {
            Some(child) => {
                let distance = self.calculate_distance_to_final_snap(&*container, child);
                if smooth {
                    container.smooth_scroll_by(distance.dx, distance.dy);
                } else {
                    container.scroll_by(distance.dx, distance.dy);
                }
            }
            // Not laid out yet, so no precise alignment is possible
            None => {
                tracing::trace!(position, "target not realized, scrolling without alignment");
                if smooth {
                    container.smooth_scroll_to_position(position);
                } else {
                    container.scroll_to_position(position);
                }
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn vertical_helper(&mut self) -> OrientationHelper {
        *self
            .vertical_helper
            .get_or_insert_with(OrientationHelper::vertical)
    }

    fn horizontal_helper(&mut self) -> OrientationHelper {
        *self
            .horizontal_helper
            .get_or_insert_with(OrientationHelper::horizontal)
    }
}
