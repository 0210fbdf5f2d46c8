// crates/core/src/category.rs
use core::fmt;

use serde::{Serialize, Serializer};

use crate::table::TIER_COUNT;

/// Health category attached to an AQI tier.
///
/// Serializes as its [`label`](Category::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Category of each tier, index-aligned with the breakpoint tables.
///
/// The two top tiers share `Hazardous`.
pub const CATEGORIES: [Category; TIER_COUNT] = [
    Category::Good,
    Category::Moderate,
    Category::UnhealthyForSensitiveGroups,
    Category::Unhealthy,
    Category::VeryUnhealthy,
    Category::Hazardous,
    Category::Hazardous,
];

impl Category {
    /// Human-readable label, e.g. `"Unhealthy for Sensitive Groups"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Category of the given tier, `None` past the last tier.
    #[must_use]
    pub fn for_tier(tier: usize) -> Option<Self> {
        CATEGORIES.get(tier).copied()
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
