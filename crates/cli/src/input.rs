// crates/cli/src/input.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::config::InputSource;
use crate::error::{AppError, Result};

/// Collects the raw value strings for `source`.
///
/// File and stdin input is read one value per line; blank lines and lines
/// starting with `#` are skipped.
pub fn read_values(source: &InputSource) -> Result<Vec<String>> {
    match source {
        InputSource::Values(values) => Ok(values.clone()),
        InputSource::Stdin => read_lines(io::stdin().lock()).map_err(AppError::from),
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| AppError::InputRead {
                path: path.clone(),
                source,
            })?;
            read_lines(BufReader::new(file)).map_err(|source| AppError::InputRead {
                path: path.clone(),
                source,
            })
        }
    }
}

pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        values.push(trimmed.to_string());
    }
    Ok(values)
}

/// Parses a concentration in µg/m³.
pub fn parse_concentration(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|e: std::num::ParseFloatError| {
        AppError::InvalidValue {
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::InvalidValue {
            value: raw.to_string(),
            reason: "not a finite number".to_string(),
        })
    }
}

/// Parses an integer AQI value.
pub fn parse_index(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| AppError::InvalidValue {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_lines_skips_blank_and_comments() {
        let input = "# station 7\n10.5\n\n  30.2  \n#skip\n51.4\n";
        let values = read_lines(input.as_bytes()).unwrap();
        assert_eq!(values, ["10.5", "30.2", "51.4"]);
    }

    #[test]
    fn concentration_rejects_garbage_and_infinity() {
        assert_eq!(parse_concentration(" 12.5 ").unwrap(), 12.5);
        assert!(matches!(
            parse_concentration("abc"),
            Err(AppError::InvalidValue { .. })
        ));
        let err = parse_concentration("inf").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value 'inf': not a finite number");
        assert!(parse_concentration("NaN").is_err());
    }

    #[test]
    fn index_must_be_integer() {
        assert_eq!(parse_index("-10").unwrap(), -10);
        assert!(parse_index("44.5").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let source = InputSource::File("does/not/exist.txt".into());
        let err = read_values(&source).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
