// crates/core/src/pollutant.rs
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::{BreakpointTable, PM10_TABLE, PM25_TABLE};

/// Pollutants with a built-in breakpoint table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    /// Fine particulate matter, 24-hour average in µg/m³.
    #[default]
    Pm25,
    /// Coarse particulate matter, 24-hour average in µg/m³.
    Pm10,
}

impl Pollutant {
    pub const ALL: [Self; 2] = [Self::Pm25, Self::Pm10];

    #[must_use]
    pub const fn table(self) -> BreakpointTable<'static> {
        match self {
            Self::Pm25 => PM25_TABLE,
            Self::Pm10 => PM10_TABLE,
        }
    }

    /// Whether the table uses whole-number bins.
    #[must_use]
    pub const fn is_integer_binned(self) -> bool {
        matches!(self, Self::Pm10)
    }

    /// Applies the pollutant's input truncation.
    ///
    /// Integer-binned pollutants are truncated toward zero; others pass through.
    #[must_use]
    pub fn truncate(self, concentration: f64) -> f64 {
        if self.is_integer_binned() {
            libm::trunc(concentration)
        } else {
            concentration
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown pollutant (expected pm25 or pm10)")]
pub struct UnknownPollutant;

impl FromStr for Pollutant {
    type Err = UnknownPollutant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pm25") || s.eq_ignore_ascii_case("pm2.5") {
            Ok(Self::Pm25)
        } else if s.eq_ignore_ascii_case("pm10") {
            Ok(Self::Pm10)
        } else {
            Err(UnknownPollutant)
        }
    }
}
