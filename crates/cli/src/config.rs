// crates/cli/src/config.rs
use std::path::PathBuf;

use aqi_core::{Pollutant, Preprocess};
use derive_builder::Builder;

use crate::args::{Args, Command};
use crate::error::AppError;
use crate::options::{OutputFormat, PollutantArg};

/// Where `index` reads its concentrations from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Values(Vec<String>),
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Index {
        pollutant: Pollutant,
        preprocess: Preprocess,
        source: InputSource,
    },
    Category {
        values: Vec<String>,
    },
    Breakpoints {
        pollutant: Pollutant,
    },
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub mode: Mode,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub verbosity: u8,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mode = match args.command {
            Command::Index(index) => {
                let source = match index.from {
                    Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
                    Some(path) => InputSource::File(path),
                    None => InputSource::Values(index.values),
                };
                let preprocess = if index.no_truncate {
                    Preprocess::Raw
                } else {
                    Preprocess::Truncate
                };
                Mode::Index {
                    pollutant: index.pollutant.into(),
                    preprocess,
                    source,
                }
            }
            Command::Category(category) => Mode::Category {
                values: category.values,
            },
            Command::Breakpoints(bp) => Mode::Breakpoints {
                pollutant: bp.pollutant.into(),
            },
        };

        Ok(ConfigBuilder::default()
            .mode(mode)
            .format(args.output.format)
            .strict(args.output.strict)
            .verbosity(args.verbose)
            .build()?)
    }
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(PollutantArg, Pollutant, Pm25, Pm10);
