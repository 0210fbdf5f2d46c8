// crates/cli/src/run.rs
use aqi_core::{Assessment, Category, Pollutant, Preprocess, Tier, assess, category_for_aqi};
use serde::Serialize;

use crate::config::{Config, InputSource, Mode};
use crate::error::{AppError, Result};
use crate::input;

/// Records that evaluated, plus the raw values that did not.
#[derive(Debug)]
pub struct RunResult<T> {
    pub records: Vec<T>,
    pub errors: Vec<(String, AppError)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    pub aqi: i64,
    pub category: Category,
}

/// One breakpoint tier flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierRow {
    pub tier: usize,
    pub pollutant: Pollutant,
    pub concentration_low: f64,
    pub concentration_high: f64,
    pub aqi_low: i64,
    pub aqi_high: i64,
    pub category: Category,
}

impl TierRow {
    pub(crate) fn new(tier: usize, pollutant: Pollutant, t: Tier) -> Self {
        Self {
            tier,
            pollutant,
            concentration_low: t.concentration.low,
            concentration_high: t.concentration.high,
            aqi_low: t.index.low,
            aqi_high: t.index.high,
            category: t.category,
        }
    }
}

#[derive(Debug)]
pub enum Report {
    Index(RunResult<Assessment>),
    Category(RunResult<CategoryRecord>),
    Breakpoints(Vec<TierRow>),
}

impl Report {
    #[must_use]
    pub fn errors(&self) -> &[(String, AppError)] {
        match self {
            Self::Index(result) => &result.errors,
            Self::Category(result) => &result.errors,
            Self::Breakpoints(_) => &[],
        }
    }
}

/// Runs the configured subcommand.
///
/// # Errors
///
/// Fails when the input source cannot be read, or in strict mode on the first
/// value that does not evaluate. Otherwise per-value failures are collected in
/// the report.
pub fn run(config: &Config) -> Result<Report> {
    match &config.mode {
        Mode::Index {
            pollutant,
            preprocess,
            source,
        } => {
            let values = input::read_values(source)?;
            log::info!(
                "evaluating {} {pollutant} value(s) from {}",
                values.len(),
                describe(source)
            );
            let result = evaluate(values, config.strict, |raw| {
                index_record(*pollutant, *preprocess, raw)
            })?;
            Ok(Report::Index(result))
        }
        Mode::Category { values } => {
            log::info!("looking up {} AQI value(s)", values.len());
            let result = evaluate(values.clone(), config.strict, category_record)?;
            Ok(Report::Category(result))
        }
        Mode::Breakpoints { pollutant } => Ok(Report::Breakpoints(
            pollutant
                .table()
                .tiers()
                .enumerate()
                .map(|(i, t)| TierRow::new(i, *pollutant, t))
                .collect(),
        )),
    }
}

fn index_record(pollutant: Pollutant, preprocess: Preprocess, raw: &str) -> Result<Assessment> {
    let concentration = input::parse_concentration(raw)?;
    let assessment = assess(pollutant, concentration, preprocess)?;
    log::debug!(
        "{pollutant} {concentration} -> aqi {} ({})",
        assessment.aqi,
        assessment.category
    );
    Ok(assessment)
}

fn category_record(raw: &str) -> Result<CategoryRecord> {
    let aqi = input::parse_index(raw)?;
    let category = category_for_aqi(aqi)?;
    Ok(CategoryRecord { aqi, category })
}

fn evaluate<T, F>(values: Vec<String>, strict: bool, f: F) -> Result<RunResult<T>>
where
    F: Fn(&str) -> Result<T>,
{
    if strict {
        let records = values
            .iter()
            .map(|raw| f(raw.as_str()))
            .collect::<Result<Vec<_>>>()?;
        return Ok(RunResult {
            records,
            errors: Vec::new(),
        });
    }

    let mut records = Vec::with_capacity(values.len());
    let mut errors = Vec::new();
    for raw in values {
        match f(raw.as_str()) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("skipping '{raw}': {e}");
                errors.push((raw, e));
            }
        }
    }
    Ok(RunResult { records, errors })
}

fn describe(source: &InputSource) -> String {
    match source {
        InputSource::Values(_) => "arguments".to_string(),
        InputSource::File(path) => path.display().to_string(),
        InputSource::Stdin => "stdin".to_string(),
    }
}
