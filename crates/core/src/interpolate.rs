// crates/core/src/interpolate.rs
//! Piecewise-linear mapping between concentrations and AQI values.

use crate::category::Category;
use crate::error::{AqiError, Result};
use crate::table::{AQI_BREAKPOINTS, Breakpoint, BreakpointTable, IndexBand};

/// Interpolates `concentration` inside one tier.
///
/// Rounds half away from zero. The caller is responsible for picking the
/// tier that contains `concentration`; values outside it extrapolate.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn aqi_for_breakpoint(concentration: f64, breakpoint: Breakpoint, band: IndexBand) -> i64 {
    let (index_low, index_high) = (band.low as f64, band.high as f64);
    let slope = (index_high - index_low) / (breakpoint.high - breakpoint.low);
    libm::round(slope * (concentration - breakpoint.low) + index_low) as i64
}

/// Computes the AQI of `concentration` against a pollutant table.
///
/// # Errors
///
/// Returns [`AqiError::BeyondScale`] when no tier contains `concentration`.
pub fn compute_index(concentration: f64, table: &BreakpointTable<'_>) -> Result<i64> {
    let Some(tier) = table.tier_for_concentration(concentration) else {
        log::debug!("concentration {concentration} is outside every tier");
        return Err(AqiError::BeyondScale);
    };

    let aqi = aqi_for_breakpoint(
        concentration,
        table.concentrations()[tier],
        AQI_BREAKPOINTS[tier],
    );
    log::trace!("concentration {concentration} matched tier {tier}, aqi {aqi}");
    Ok(aqi)
}

/// First tier whose AQI band contains `aqi`.
#[must_use]
pub fn tier_for_aqi(aqi: i64) -> Option<usize> {
    AQI_BREAKPOINTS.iter().position(|band| band.contains(aqi))
}

/// Looks up the health category of an AQI value.
///
/// # Errors
///
/// Returns [`AqiError::BeyondScale`] for negative values and values above the
/// top band.
pub fn category_for_aqi(aqi: i64) -> Result<Category> {
    match tier_for_aqi(aqi).and_then(Category::for_tier) {
        Some(category) => Ok(category),
        None => {
            log::debug!("aqi {aqi} is outside every band");
            Err(AqiError::BeyondScale)
        }
    }
}
