// crates/cli/src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Yaml,
    Md,
}

/// 対象汚染物質
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum PollutantArg {
    /// PM2.5 (24時間平均, µg/m³)
    #[default]
    #[value(name = "pm25", alias = "pm2.5")]
    Pm25,
    /// PM10 (24時間平均, µg/m³, 整数に切り捨て)
    #[value(name = "pm10")]
    Pm10,
}
