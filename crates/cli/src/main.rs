use std::io::{self, Write};
use std::process::ExitCode;

use aqi_cli::args::Args;
use aqi_cli::config::Config;
use aqi_cli::presentation;
use clap::Parser;

fn main() -> ExitCode {
    let args = Args::parse();
    aqi_cli::init_logging(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("running with {config:?}");

    match aqi_cli::run::run(&config) {
        Ok(report) => {
            for (value, err) in report.errors() {
                eprintln!("Error processing {value}: {err}");
            }

            let mut out = io::stdout().lock();
            match presentation::print_report(&mut out, &report, config.format)
                .and_then(|()| out.flush().map_err(Into::into))
            {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Output Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
