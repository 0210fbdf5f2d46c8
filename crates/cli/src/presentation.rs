// crates/cli/src/presentation.rs
use std::io::Write;

use aqi_core::Assessment;
use serde::Serialize;

use crate::error::Result;
use crate::options::OutputFormat;
use crate::run::{CategoryRecord, Report, TierRow};

/// A row that can be rendered in every output format.
pub trait Record: Serialize {
    /// Value of the `type` key in JSONL output.
    const KIND: &'static str;
    const HEADERS: &'static [&'static str];
    /// Noun phrase counted in the table footer.
    const SUMMARY: &'static str = "values evaluated";

    fn cells(&self) -> Vec<String>;
}

impl Record for Assessment {
    const KIND: &'static str = "index";
    const HEADERS: &'static [&'static str] = &["POLLUTANT", "INPUT", "USED", "AQI", "CATEGORY"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.pollutant.to_string(),
            self.input.to_string(),
            self.concentration.to_string(),
            self.aqi.to_string(),
            self.category.to_string(),
        ]
    }
}

impl Record for CategoryRecord {
    const KIND: &'static str = "category";
    const HEADERS: &'static [&'static str] = &["AQI", "CATEGORY"];

    fn cells(&self) -> Vec<String> {
        vec![self.aqi.to_string(), self.category.to_string()]
    }
}

impl Record for TierRow {
    const KIND: &'static str = "tier";
    const HEADERS: &'static [&'static str] =
        &["TIER", "POLLUTANT", "CONC LOW", "CONC HIGH", "AQI LOW", "AQI HIGH", "CATEGORY"];
    const SUMMARY: &'static str = "tiers listed";

    fn cells(&self) -> Vec<String> {
        vec![
            self.tier.to_string(),
            self.pollutant.to_string(),
            format!("{:.1}", self.concentration_low),
            format!("{:.1}", self.concentration_high),
            self.aqi_low.to_string(),
            self.aqi_high.to_string(),
            self.category.to_string(),
        ]
    }
}

pub fn print_report(out: &mut impl Write, report: &Report, format: OutputFormat) -> Result<()> {
    match report {
        Report::Index(result) => print_records(out, &result.records, result.errors.len(), format),
        Report::Category(result) => {
            print_records(out, &result.records, result.errors.len(), format)
        }
        Report::Breakpoints(rows) => print_records(out, rows, 0, format),
    }
}

pub fn print_records<R: Record>(
    out: &mut impl Write,
    records: &[R],
    failed: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(out, records, failed),
        OutputFormat::Csv => print_sv(out, records, ","),
        OutputFormat::Tsv => print_sv(out, records, "\t"),
        OutputFormat::Json => print_json(out, records),
        OutputFormat::Jsonl => print_jsonl(out, records, failed),
        OutputFormat::Yaml => print_yaml(out, records),
        OutputFormat::Md => print_markdown(out, records),
    }
}

fn print_table<R: Record>(out: &mut impl Write, records: &[R], failed: usize) -> Result<()> {
    let rows: Vec<Vec<String>> = records.iter().map(R::cells).collect();
    let mut widths: Vec<usize> = R::HEADERS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "aqi v{}", crate::VERSION)?;
    writeln!(out)?;

    let header: Vec<String> = R::HEADERS.iter().map(ToString::to_string).collect();
    write_aligned(out, &header, &widths)?;
    let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(out, "{}", "-".repeat(rule))?;
    for row in &rows {
        write_aligned(out, row, &widths)?;
    }

    writeln!(out)?;
    if failed == 0 {
        writeln!(out, "[aqi] Completed: {} {}.", records.len(), R::SUMMARY)?;
    } else {
        writeln!(
            out,
            "[aqi] Completed: {} {}, {failed} failed.",
            records.len(),
            R::SUMMARY
        )?;
    }
    Ok(())
}

fn write_aligned(out: &mut impl Write, cells: &[String], widths: &[usize]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn print_sv<R: Record>(out: &mut impl Write, records: &[R], delimiter: &str) -> Result<()> {
    let header: Vec<String> = R::HEADERS
        .iter()
        .map(|h| h.to_ascii_lowercase().replace(' ', "_"))
        .collect();
    writeln!(out, "{}", header.join(delimiter))?;

    for record in records {
        let row: Vec<String> = record
            .cells()
            .into_iter()
            .map(|cell| escape_cell(cell, delimiter))
            .collect();
        writeln!(out, "{}", row.join(delimiter))?;
    }
    Ok(())
}

fn escape_cell(cell: String, delimiter: &str) -> String {
    if delimiter == "," && (cell.contains(',') || cell.contains('"')) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell
    }
}

fn print_json<R: Record>(out: &mut impl Write, records: &[R]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

fn print_yaml<R: Record>(out: &mut impl Write, records: &[R]) -> Result<()> {
    serde_yaml::to_writer(&mut *out, records)?;
    Ok(())
}

fn print_jsonl<R: Record>(out: &mut impl Write, records: &[R], failed: usize) -> Result<()> {
    for record in records {
        let mut value = serde_json::to_value(record)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("type".to_string(), R::KIND.into());
        }
        writeln!(out, "{value}")?;
    }

    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "records": records.len(),
        "failed": failed,
    });
    writeln!(out, "{total}")?;
    Ok(())
}

fn print_markdown<R: Record>(out: &mut impl Write, records: &[R]) -> Result<()> {
    writeln!(out, "### Air Quality Index")?;
    writeln!(out)?;
    writeln!(out, "| {} |", R::HEADERS.join(" | "))?;
    writeln!(out, "|{}", ":---|".repeat(R::HEADERS.len()))?;
    for record in records {
        let cells: Vec<String> = record
            .cells()
            .into_iter()
            .map(|c| c.replace('|', "\\|"))
            .collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
    }
    writeln!(out)?;
    Ok(())
}
