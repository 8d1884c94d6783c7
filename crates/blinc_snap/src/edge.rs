//! Snap edges, scroll axes and layout direction
//!
//! A [`SnapEdge`] names the side of the list a child comes to rest against.
//! `Start` and `End` follow the reading direction, so under a right-to-left
//! [`LayoutDirection`] they swap physical sides. `Top` and `Bottom` are
//! never mirrored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SnapError;

/// Gravity constants used by platform list widgets
pub mod gravity {
    /// Reading-direction start (`Gravity.START`)
    pub const START: u32 = 0x0080_0003;
    /// Reading-direction end (`Gravity.END`)
    pub const END: u32 = 0x0080_0005;
    /// Top edge (`Gravity.TOP`)
    pub const TOP: u32 = 0x30;
    /// Bottom edge (`Gravity.BOTTOM`)
    pub const BOTTOM: u32 = 0x50;
}

/// Scroll axis of a linear list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Edge a snapped child aligns against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapEdge {
    Start,
    End,
    Top,
    Bottom,
}

impl SnapEdge {
    /// Axis this edge lives on
    pub fn axis(&self) -> Axis {
        match self {
            SnapEdge::Start | SnapEdge::End => Axis::Horizontal,
            SnapEdge::Top | SnapEdge::Bottom => Axis::Vertical,
        }
    }

    /// Returns true for `Start` and `Top`
    pub fn is_start(&self) -> bool {
        matches!(self, SnapEdge::Start | SnapEdge::Top)
    }

    /// Returns true if the edge follows the reading direction
    pub fn is_mirrored(&self) -> bool {
        self.axis() == Axis::Horizontal
    }

    /// Platform gravity constant for this edge
    pub fn gravity(&self) -> u32 {
        match self {
            SnapEdge::Start => gravity::START,
            SnapEdge::End => gravity::END,
            SnapEdge::Top => gravity::TOP,
            SnapEdge::Bottom => gravity::BOTTOM,
        }
    }
}

impl TryFrom<u32> for SnapEdge {
    type Error = SnapError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            gravity::START => Ok(SnapEdge::Start),
            gravity::END => Ok(SnapEdge::End),
            gravity::TOP => Ok(SnapEdge::Top),
            gravity::BOTTOM => Ok(SnapEdge::Bottom),
            other => Err(SnapError::InvalidEdge(format!("{other:#x}"))),
        }
    }
}

impl FromStr for SnapEdge {
    type Err = SnapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(SnapEdge::Start),
            "end" => Ok(SnapEdge::End),
            "top" => Ok(SnapEdge::Top),
            "bottom" => Ok(SnapEdge::Bottom),
            _ => Err(SnapError::InvalidEdge(format!("{s:?}"))),
        }
    }
}

impl fmt::Display for SnapEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SnapEdge::Start => "start",
            SnapEdge::End => "end",
            SnapEdge::Top => "top",
            SnapEdge::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Layout Direction
// ============================================================================

/// Text direction of the environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Scripts written right-to-left (ISO 15924)
const RTL_SCRIPTS: &[&str] = &["arab", "hebr", "thaa", "syrc", "nkoo", "adlm", "rohg", "mand"];

/// Languages whose default script is right-to-left
const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "he", "iw", "ji", "ks", "ps", "sd", "syr", "ug", "ur", "yi",
];

impl LayoutDirection {
    /// Derive the direction from a BCP 47 locale tag such as `ar-EG` or `az_Arab`
    ///
    /// An explicit script subtag wins over the language default.
    pub fn from_locale(tag: &str) -> Self {
        let mut parts = tag.split(['-', '_']).filter(|p| !p.is_empty());
        let Some(language) = parts.next() else {
            return LayoutDirection::Ltr;
        };

        if let Some(script) = parts.next().filter(|p| p.len() == 4) {
            let script = script.to_ascii_lowercase();
            return if RTL_SCRIPTS.contains(&script.as_str()) {
                LayoutDirection::Rtl
            } else {
                LayoutDirection::Ltr
            };
        }

        let language = language.to_ascii_lowercase();
        if RTL_LANGUAGES.contains(&language.as_str()) {
            LayoutDirection::Rtl
        } else {
            LayoutDirection::Ltr
        }
    }

    /// Returns true for right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}
