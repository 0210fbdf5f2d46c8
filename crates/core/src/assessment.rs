// crates/core/src/assessment.rs
use serde::Serialize;

use crate::category::Category;
use crate::error::{AqiError, Result};
use crate::interpolate::{category_for_aqi, compute_index};
use crate::pollutant::Pollutant;

/// Input preprocessing applied before the table lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preprocess {
    /// Apply the pollutant's truncation rule (see [`Pollutant::truncate`]).
    #[default]
    Truncate,
    /// Look the value up as given.
    Raw,
}

/// A single evaluated reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub pollutant: Pollutant,
    /// Value as supplied by the caller.
    pub input: f64,
    /// Value after preprocessing; the one looked up in the table.
    pub concentration: f64,
    pub aqi: i64,
    pub category: Category,
}

/// Preprocesses `input`, computes its AQI and resolves the category.
///
/// # Errors
///
/// Returns [`crate::AqiError::BeyondScale`] when `input` lies below the
/// pollutant's table or the preprocessed value lies outside it.
pub fn assess(pollutant: Pollutant, input: f64, preprocess: Preprocess) -> Result<Assessment> {
    let table = pollutant.table();
    // Truncation maps (-1, 0) onto -0.0, which compares equal to the 0.0 bound.
    if input < table.min() {
        log::debug!("{pollutant} input {input} is below the table");
        return Err(AqiError::BeyondScale);
    }

    let concentration = match preprocess {
        Preprocess::Truncate => pollutant.truncate(input),
        Preprocess::Raw => input,
    };
    let aqi = compute_index(concentration, &table)?;
    let category = category_for_aqi(aqi)?;

    Ok(Assessment {
        pollutant,
        input,
        concentration,
        aqi,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_selects_pm10_tier() {
        let a = assess(Pollutant::Pm10, 54.9, Preprocess::Truncate).unwrap();
        assert_eq!(a.concentration, 54.0);
        assert_eq!(a.aqi, 50);
        assert_eq!(a.category, Category::Good);
    }

    #[test]
    fn raw_fractional_pm10_falls_between_bins() {
        assert_eq!(
            assess(Pollutant::Pm10, 54.9, Preprocess::Raw),
            Err(AqiError::BeyondScale)
        );
    }

    #[test]
    fn negative_input_rejected_before_truncation() {
        for input in [-0.7, -0.5, -1e-9] {
            assert_eq!(
                assess(Pollutant::Pm10, input, Preprocess::Truncate),
                Err(AqiError::BeyondScale)
            );
        }
    }

    #[test]
    fn pm25_keeps_input() {
        let a = assess(Pollutant::Pm25, 30.2, Preprocess::Truncate).unwrap();
        assert_eq!(a.input, a.concentration);
        assert_eq!(a.aqi, 89);
        assert_eq!(a.category, Category::Moderate);
    }
}
