//! Snap configuration presets.
//!
//! A [`SnapConfig`] can be built in code or loaded from TOML:
//!
//! ```rust
//! use blinc_snap::{SnapConfig, SnapEdge};
//!
//! let config = SnapConfig::from_toml_str(
//!     r#"
//!     edge = "end"
//!     snap_to_padding = true
//!     max_scroll_distance_fraction = 0.5
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.edge, SnapEdge::End);
//! assert!(config.snap_to_padding);
//! ```

use serde::{Deserialize, Serialize};

use crate::edge::SnapEdge;
use crate::error::{Result, SnapError};
use crate::smooth_scroll::DEFAULT_MS_PER_INCH;

/// Limit on how far a fling may travel before snapping
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MaxScrollDistance {
    /// Flings travel as far as their velocity carries them
    #[default]
    Unbounded,
    /// Absolute limit in pixels
    Pixels(u32),
    /// Limit as a fraction of the visible extent between paddings
    FractionOfExtent(f32),
}

impl MaxScrollDistance {
    /// Absolute limit, if one is active
    pub fn pixels(&self) -> Option<u32> {
        match self {
            MaxScrollDistance::Pixels(px) => Some(*px),
            _ => None,
        }
    }

    /// Relative limit, or 0.0 when none is active
    pub fn fraction(&self) -> f32 {
        match self {
            MaxScrollDistance::FractionOfExtent(fraction) => *fraction,
            _ => 0.0,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, MaxScrollDistance::Unbounded)
    }
}

/// Configuration for a snap calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Edge the snapped child aligns against.
    pub edge: SnapEdge,
    /// Whether to keep snapping once the list is scrolled to its end.
    pub snap_last_item: bool,
    /// Whether to always align against the padded edge.
    pub snap_to_padding: bool,
    /// Smooth-scroll speed (ms per inch).
    pub scroll_ms_per_inch: f32,
    /// Absolute fling travel limit (pixels).
    pub max_scroll_distance: Option<u32>,
    /// Fling travel limit as a fraction of the visible extent.
    pub max_scroll_distance_fraction: Option<f32>,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self::start()
    }
}

impl SnapConfig {
    /// Configuration snapping to a given edge with defaults for the rest.
    pub fn new(edge: SnapEdge) -> Self {
        Self {
            edge,
            snap_last_item: false,
            snap_to_padding: false,
            scroll_ms_per_inch: DEFAULT_MS_PER_INCH,
            max_scroll_distance: None,
            max_scroll_distance_fraction: None,
        }
    }

    /// Snap to the reading-direction start (carousels).
    pub fn start() -> Self {
        Self::new(SnapEdge::Start)
    }

    /// Snap to the reading-direction end.
    pub fn end() -> Self {
        Self::new(SnapEdge::End)
    }

    /// Snap to the top (vertical feeds).
    pub fn top() -> Self {
        Self::new(SnapEdge::Top)
    }

    /// Snap to the bottom (chat-style lists).
    pub fn bottom() -> Self {
        Self::new(SnapEdge::Bottom)
    }

    /// Pager-like carousel: one page per fling, last item snaps too.
    pub fn pager() -> Self {
        Self {
            snap_last_item: true,
            max_scroll_distance_fraction: Some(1.0),
            ..Self::start()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the max scroll distance settings.
    pub fn validate(&self) -> Result<()> {
        self.max_distance().map(|_| ())
    }

    /// Resolve the fling travel limit.
    pub fn max_distance(&self) -> Result<MaxScrollDistance> {
        match (self.max_scroll_distance, self.max_scroll_distance_fraction) {
            (Some(_), Some(_)) => Err(SnapError::ConflictingMaxDistance),
            (Some(px), None) => Ok(MaxScrollDistance::Pixels(px)),
            (None, Some(fraction)) if !fraction.is_finite() || fraction < 0.0 => {
                Err(SnapError::InvalidMaxDistanceFraction(fraction))
            }
            (None, Some(fraction)) if fraction == 0.0 => Ok(MaxScrollDistance::Unbounded),
            (None, Some(fraction)) => Ok(MaxScrollDistance::FractionOfExtent(fraction)),
            (None, None) => Ok(MaxScrollDistance::Unbounded),
        }
    }

    /// Enable or disable snapping at the end of the list.
    pub fn with_snap_last_item(mut self, snap: bool) -> Self {
        self.snap_last_item = snap;
        self
    }

    /// Enable or disable snapping against the padded edge.
    pub fn with_snap_to_padding(mut self, snap: bool) -> Self {
        self.snap_to_padding = snap;
        self
    }

    /// Set the smooth-scroll speed.
    pub fn with_scroll_ms_per_inch(mut self, ms: f32) -> Self {
        self.scroll_ms_per_inch = ms;
        self
    }

    /// Limit fling travel to a number of pixels.
    pub fn with_max_scroll_distance(mut self, px: u32) -> Self {
        self.max_scroll_distance = Some(px);
        self.max_scroll_distance_fraction = None;
        self
    }

    /// Limit fling travel to a fraction of the visible extent.
    pub fn with_max_scroll_distance_fraction(mut self, fraction: f32) -> Self {
        self.max_scroll_distance_fraction = Some(fraction);
        self.max_scroll_distance = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SnapConfig::default();
        assert_eq!(config.edge, SnapEdge::Start);
        assert!(!config.snap_last_item);
        assert!(!config.snap_to_padding);
        assert_eq!(config.scroll_ms_per_inch, 100.0);
        assert_eq!(config.max_distance().unwrap(), MaxScrollDistance::Unbounded);
    }

    #[test]
    fn test_load_toml() {
        let config = SnapConfig::from_toml_str(
            r#"
            edge = "bottom"
            snap_last_item = true
            scroll_ms_per_inch = 50.0
            max_scroll_distance = 400
            "#,
        )
        .unwrap();

        assert_eq!(config.edge, SnapEdge::Bottom);
        assert!(config.snap_last_item);
        assert_eq!(config.scroll_ms_per_inch, 50.0);
        assert_eq!(config.max_distance().unwrap(), MaxScrollDistance::Pixels(400));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SnapConfig::from_toml_str("").unwrap();
        assert_eq!(config, SnapConfig::default());
    }

    #[test]
    fn test_unknown_edge_rejected() {
        let err = SnapConfig::from_toml_str(r#"edge = "center""#).unwrap_err();
        assert!(matches!(err, SnapError::Config(_)));
    }

    #[test]
    fn test_conflicting_limits_rejected() {
        let err = SnapConfig::from_toml_str(
            r#"
            max_scroll_distance = 400
            max_scroll_distance_fraction = 0.5
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SnapError::ConflictingMaxDistance));
    }

    #[test]
    fn test_negative_fraction_rejected() {
        let config = SnapConfig::start().with_max_scroll_distance_fraction(-0.5);
        assert!(matches!(
            config.validate(),
            Err(SnapError::InvalidMaxDistanceFraction(_))
        ));
    }

    #[test]
    fn test_builders_keep_limits_exclusive() {
        let config = SnapConfig::top()
            .with_max_scroll_distance_fraction(0.5)
            .with_max_scroll_distance(300);
        assert_eq!(config.max_scroll_distance, Some(300));
        assert_eq!(config.max_scroll_distance_fraction, None);

        let config = config.with_max_scroll_distance_fraction(0.25);
        assert_eq!(config.max_scroll_distance, None);
        assert_eq!(
            config.max_distance().unwrap(),
            MaxScrollDistance::FractionOfExtent(0.25)
        );
    }

    #[test]
    fn test_pager_preset() {
        let config = SnapConfig::pager();
        assert!(config.snap_last_item);
        assert_eq!(
            config.max_distance().unwrap(),
            MaxScrollDistance::FractionOfExtent(1.0)
        );
    }

    #[test]
    fn test_serialize_round_trip_through_toml() {
        let config = SnapConfig::end().with_snap_to_padding(true);
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("edge = \"end\""));
        assert_eq!(SnapConfig::from_toml_str(&text).unwrap(), config);
    }
}
