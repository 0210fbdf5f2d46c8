// crates/core/src/table.rs
//! Breakpoint tables.
//!
//! Every table has [`TIER_COUNT`] tiers. Tier `i` of a pollutant table, tier
//! `i` of [`AQI_BREAKPOINTS`] and [`CATEGORIES`]`[i]` describe the same health
//! category.

use serde::{Deserialize, Serialize};

use crate::category::{CATEGORIES, Category};
use crate::error::TableError;

pub const TIER_COUNT: usize = 7;

/// Closed concentration interval `[low, high]` in µg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub low: f64,
    pub high: f64,
}

impl Breakpoint {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub fn contains(self, concentration: f64) -> bool {
        concentration >= self.low && concentration <= self.high
    }
}

/// Closed AQI interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexBand {
    pub low: i64,
    pub high: i64,
}

impl IndexBand {
    #[must_use]
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub const fn contains(self, aqi: i64) -> bool {
        aqi >= self.low && aqi <= self.high
    }
}

/// PM2.5 breakpoints, 24-hour average.
pub const PM25_BREAKPOINTS: [Breakpoint; TIER_COUNT] = [
    Breakpoint::new(0.0, 12.0),
    Breakpoint::new(12.1, 35.4),
    Breakpoint::new(35.5, 55.4),
    Breakpoint::new(55.5, 150.4),
    Breakpoint::new(150.5, 250.4),
    Breakpoint::new(250.5, 350.4),
    Breakpoint::new(350.5, 500.4),
];

/// PM10 breakpoints, 24-hour average. Whole-number bins: truncate inputs first.
pub const PM10_BREAKPOINTS: [Breakpoint; TIER_COUNT] = [
    Breakpoint::new(0.0, 54.0),
    Breakpoint::new(55.0, 154.0),
    Breakpoint::new(155.0, 254.0),
    Breakpoint::new(255.0, 354.0),
    Breakpoint::new(355.0, 424.0),
    Breakpoint::new(425.0, 504.0),
    Breakpoint::new(505.0, 604.0),
];

/// AQI bands, shared by every pollutant.
pub const AQI_BREAKPOINTS: [IndexBand; TIER_COUNT] = [
    IndexBand::new(0, 50),
    IndexBand::new(51, 100),
    IndexBand::new(101, 150),
    IndexBand::new(151, 200),
    IndexBand::new(201, 300),
    IndexBand::new(301, 400),
    IndexBand::new(401, 500),
];

pub const PM25_TABLE: BreakpointTable<'static> = BreakpointTable {
    concentrations: &PM25_BREAKPOINTS,
};

pub const PM10_TABLE: BreakpointTable<'static> = BreakpointTable {
    concentrations: &PM10_BREAKPOINTS,
};

/// One row of a pollutant table joined with its AQI band and category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tier {
    pub concentration: Breakpoint,
    pub index: IndexBand,
    pub category: Category,
}

/// A validated pollutant breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointTable<'a> {
    concentrations: &'a [Breakpoint],
}

impl<'a> BreakpointTable<'a> {
    /// Wraps a caller-supplied concentration table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] when the table does not have [`TIER_COUNT`]
    /// tiers, has a non-finite or inverted range, or when a tier does not
    /// start strictly above the previous tier's high bound.
    pub fn new(concentrations: &'a [Breakpoint]) -> Result<Self, TableError> {
        validate(concentrations)?;
        Ok(Self { concentrations })
    }

    #[must_use]
    pub const fn concentrations(&self) -> &'a [Breakpoint] {
        self.concentrations
    }

    /// Tier `i` joined with its AQI band and category.
    #[must_use]
    pub fn tier(&self, i: usize) -> Option<Tier> {
        let concentration = *self.concentrations.get(i)?;
        Some(Tier {
            concentration,
            index: AQI_BREAKPOINTS[i],
            category: CATEGORIES[i],
        })
    }

    pub fn tiers(&self) -> impl Iterator<Item = Tier> + 'a {
        let table = *self;
        (0..self.concentrations.len()).filter_map(move |i| table.tier(i))
    }

    /// First tier whose closed range contains `concentration`.
    #[must_use]
    pub fn tier_for_concentration(&self, concentration: f64) -> Option<usize> {
        self.concentrations
            .iter()
            .position(|bp| bp.contains(concentration))
    }

    /// Lowest concentration covered by the table.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.concentrations[0].low
    }

    /// Highest concentration covered by the table.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.concentrations[TIER_COUNT - 1].high
    }
}

fn validate(concentrations: &[Breakpoint]) -> Result<(), TableError> {
    if concentrations.len() != TIER_COUNT {
        return Err(TableError::TierCount {
            found: concentrations.len(),
            expected: TIER_COUNT,
        });
    }

    for (tier, bp) in concentrations.iter().enumerate() {
        if !bp.low.is_finite() || !bp.high.is_finite() {
            return Err(TableError::NonFinite { tier });
        }
        if bp.low > bp.high {
            return Err(TableError::Inverted { tier });
        }
    }

    for (previous, pair) in concentrations.windows(2).enumerate() {
        if pair[1].low <= pair[0].high {
            return Err(TableError::Overlap {
                tier: previous + 1,
                previous,
            });
        }
    }

    Ok(())
}
