//! Blinc List Snapping
//!
//! Edge snapping for linear lists: after a fling or a programmatic scroll,
//! decide which child comes to rest against a chosen edge and how far the
//! list must move to align it exactly.
//!
//! # Features
//!
//! - **Gravity edges**: Snap to START, END, TOP or BOTTOM, with START/END
//!   mirrored for right-to-left locales
//! - **Padding-aware alignment**: Align against the padded edge, or flush with
//!   the container when a child already sits inside the padding
//! - **End-of-list guard**: Optionally stop snapping once the last item is
//!   fully visible
//! - **Fling clamping**: Limit how far a fling travels, in pixels or as a
//!   fraction of the visible extent
//! - **Snap events**: A listener fires once each time scrolling settles
//!
//! # Architecture
//!
//! The calculator never owns the list. The host widget implements
//! [`SnapLayout`] to expose child geometry and [`ScrollContainer`] to accept
//! scroll requests, and forwards its scroll state changes.
//!
//! # Example
//!
//! ```rust,ignore
//! use blinc_snap::prelude::*;
//!
//! let config = SnapConfig::start().with_max_scroll_distance_fraction(1.0);
//! let mut snap = SnapCalculator::from_config(&config)?
//!     .with_listener(|position| tracing::info!(position, "page changed"));
//! snap.attach(&mut carousel);
//! ```

pub mod calculator;
pub mod config;
pub mod edge;
pub mod error;
pub mod fling;
pub mod host;
pub mod orientation;
pub mod scroll_state;
pub mod smooth_scroll;

#[cfg(test)]
mod test_support;

pub use calculator::{SnapCalculator, SnapDistance, SnapListener};
pub use config::{MaxScrollDistance, SnapConfig};
pub use edge::{gravity, Axis, LayoutDirection, SnapEdge};
pub use error::{Result, SnapError};
pub use fling::{FlingBounds, FlingPhysics, FlingResult};
pub use host::{LayoutKind, ScrollContainer, SnapLayout, DEFAULT_DENSITY_DPI};
pub use orientation::OrientationHelper;
pub use scroll_state::ScrollState;
pub use smooth_scroll::{SmoothScrollAction, SmoothScrollTiming};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::calculator::{SnapCalculator, SnapDistance};
    pub use crate::config::{MaxScrollDistance, SnapConfig};
    pub use crate::edge::{Axis, LayoutDirection, SnapEdge};
    pub use crate::error::{Result, SnapError};
    pub use crate::host::{LayoutKind, ScrollContainer, SnapLayout};
    pub use crate::scroll_state::ScrollState;
    pub use crate::smooth_scroll::SmoothScrollAction;
}
