// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};

use crate::options::{OutputFormat, PollutantArg};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "aqi",
    version = crate::VERSION,
    about = "粒子状物質濃度から大気質指数 (AQI) と健康区分を算出"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub output: OutputOptions,

    /// ログを詳細化 (-v: warn, -vv: info, -vvv: debug, -vvvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 濃度 (µg/m³) から AQI を算出
    Index(IndexArgs),
    /// AQI 値の健康区分を表示
    Category(CategoryArgs),
    /// ブレークポイント表を表示
    Breakpoints(BreakpointsArgs),
}

/// Output-related options
#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", global = true, help_heading = "出力")]
    pub format: OutputFormat,

    /// 最初のエラーで中断し失敗終了する
    #[arg(long, global = true, help_heading = "動作")]
    pub strict: bool,
}

#[derive(ClapArgs, Debug)]
pub struct IndexArgs {
    /// 汚染物質
    #[arg(short, long, value_enum, default_value = "pm25")]
    pub pollutant: PollutantArg,

    /// 整数ビンの汚染物質でも切り捨てを行わない
    #[arg(long)]
    pub no_truncate: bool,

    /// 濃度を1行ずつ読み込むファイル（`-` で標準入力）
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "values")]
    pub from: Option<PathBuf>,

    /// 24時間平均濃度 (µg/m³)
    #[arg(required_unless_present = "from", allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct CategoryArgs {
    /// AQI 値（整数）
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct BreakpointsArgs {
    /// 汚染物質
    #[arg(short, long, value_enum, default_value = "pm25")]
    pub pollutant: PollutantArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_with_negative_value() {
        let args = Args::parse_from(["aqi", "index", "--pollutant", "pm10", "-10.5", "42"]);
        let Command::Index(index) = args.command else {
            panic!("expected index subcommand");
        };
        assert_eq!(index.pollutant, PollutantArg::Pm10);
        assert_eq!(index.values, ["-10.5", "42"]);
        assert!(!index.no_truncate);
    }

    #[test]
    fn global_options_follow_subcommand() {
        let args = Args::parse_from(["aqi", "category", "44", "--format", "json", "--strict", "-vv"]);
        assert_eq!(args.output.format, OutputFormat::Json);
        assert!(args.output.strict);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn index_requires_values_or_file() {
        assert!(Args::try_parse_from(["aqi", "index"]).is_err());
        assert!(Args::try_parse_from(["aqi", "index", "--from", "-"]).is_ok());
    }

    #[test]
    fn pollutant_alias() {
        let args = Args::parse_from(["aqi", "breakpoints", "-p", "pm2.5"]);
        let Command::Breakpoints(bp) = args.command else {
            panic!("expected breakpoints subcommand");
        };
        assert_eq!(bp.pollutant, PollutantArg::Pm25);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
