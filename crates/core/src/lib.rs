//! Air Quality Index computation.
//!
//! Converts 24-hour average particulate concentrations (µg/m³) into AQI
//! values with the EPA piecewise-linear breakpoint method, and maps AQI
//! values back to their health category.
//!
//! ```
//! use aqi_core::{Category, Pollutant, aqi_for_pollutant, category_for_aqi};
//!
//! let aqi = aqi_for_pollutant(Pollutant::Pm25, 10.5).unwrap();
//! assert_eq!(aqi, 44);
//! assert_eq!(category_for_aqi(aqi), Ok(Category::Good));
//! ```
#![cfg_attr(not(test), no_std)]
#![allow(clippy::cargo_common_metadata)]

pub mod assessment;
pub mod category;
pub mod error;
pub mod interpolate;
pub mod pollutant;
pub mod table;

pub use assessment::{Assessment, Preprocess, assess};
pub use category::{CATEGORIES, Category};
pub use error::{AqiError, Result, TableError};
pub use interpolate::{aqi_for_breakpoint, category_for_aqi, compute_index, tier_for_aqi};
pub use pollutant::{Pollutant, UnknownPollutant};
pub use table::{
    AQI_BREAKPOINTS, Breakpoint, BreakpointTable, IndexBand, PM10_BREAKPOINTS, PM10_TABLE,
    PM25_BREAKPOINTS, PM25_TABLE, TIER_COUNT, Tier,
};

/// AQI of a 24-hour average concentration for a built-in pollutant.
///
/// No truncation is applied; integer-binned pollutants expect the caller to
/// pass `pollutant.truncate(average)` (or use [`assess`]).
///
/// # Errors
///
/// Returns [`AqiError::BeyondScale`] when the value lies outside the table.
pub fn aqi_for_pollutant(pollutant: Pollutant, average: f64) -> Result<i64> {
    compute_index(average, &pollutant.table())
}

/// AQI of a 24-hour PM2.5 average in µg/m³.
///
/// # Errors
///
/// Returns [`AqiError::BeyondScale`] when the value lies outside the table.
pub fn aqi_pm25(average: f64) -> Result<i64> {
    compute_index(average, &PM25_TABLE)
}
