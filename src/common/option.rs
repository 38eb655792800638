use crate::common::time_series::{TimeSeries, DEFAULT_DELIMITER};
use crate::storage::CsvStorage;
use crate::{Result, TicklineErr};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use serde::{Deserialize, Serialize};
use std::fs::read;
use std::path::{Path, PathBuf};

pub const FILE_ARG: &str = "file";
pub const DELIMITER_ARG: &str = "delimiter";
pub const CONFIG_ARG: &str = "config";
pub const OUTPUT_ARG: &str = "output";
pub const DATE_ARG: &str = "date";
pub const PRICE_ARG: &str = "price";

pub const SUMMARY_CMD: &str = "summary";
pub const PRICES_ON_CMD: &str = "prices-on";
pub const INCREMENTS_ON_CMD: &str = "increments-on";
pub const PRICE_AT_CMD: &str = "price-at";
pub const GREATEST_CMD: &str = "greatest";
pub const FILTER_CMD: &str = "filter";
pub const ADD_CMD: &str = "add";

pub const BEFORE_ARG: &str = "before";
pub const AFTER_ARG: &str = "after";
pub const ABOVE_ARG: &str = "above";
pub const BELOW_ARG: &str = "below";
pub const DROP_ARG: &str = "drop";

/// Command line definition shared by the binary and its tests.
pub fn cli_app() -> App<'static, 'static> {
    let output = Arg::with_name(OUTPUT_ARG)
        .short("o")
        .long("output")
        .takes_value(true)
        .required(true);
    let date = Arg::with_name(DATE_ARG).required(true).index(1);

    App::new("tickline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("price time series statistics")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .args(&[
            Arg::with_name(FILE_ARG).required(true).index(1),
            Arg::with_name(DELIMITER_ARG)
                .short("d")
                .long("delimiter")
                .takes_value(true),
            Arg::with_name(CONFIG_ARG)
                .short("c")
                .long("config")
                .takes_value(true),
        ])
        .subcommand(SubCommand::with_name(SUMMARY_CMD).about("print summary statistics as yaml"))
        .subcommand(
            SubCommand::with_name(PRICES_ON_CMD)
                .about("print prices within one day")
                .arg(date.clone()),
        )
        .subcommand(
            SubCommand::with_name(INCREMENTS_ON_CMD)
                .about("print increments landing within one day")
                .arg(date.clone()),
        )
        .subcommand(
            SubCommand::with_name(PRICE_AT_CMD)
                .about("print the price at an exact time")
                .arg(date.clone()),
        )
        .subcommand(SubCommand::with_name(GREATEST_CMD).about("print the greatest increment"))
        .subcommand(
            SubCommand::with_name(FILTER_CMD)
                .about("remove observations and save the result")
                .setting(AppSettings::AllowNegativeNumbers)
                .args(&[
                    Arg::with_name(BEFORE_ARG).long("before").takes_value(true),
                    Arg::with_name(AFTER_ARG).long("after").takes_value(true),
                    Arg::with_name(ABOVE_ARG)
                        .long("above")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                    Arg::with_name(BELOW_ARG)
                        .long("below")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                    Arg::with_name(DROP_ARG)
                        .long("drop")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1),
                    output.clone(),
                ]),
        )
        .subcommand(
            SubCommand::with_name(ADD_CMD)
                .about("insert a price and save the result")
                .setting(AppSettings::AllowNegativeNumbers)
                .args(&[
                    date,
                    Arg::with_name(PRICE_ARG)
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(2),
                    output,
                ]),
        )
}

/// Optional yaml file, overridden by command line flags.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SeriesConfigFile {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub name: Option<String>,
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl Default for SeriesConfigFile {
    fn default() -> Self {
        SeriesConfigFile {
            delimiter: DEFAULT_DELIMITER,
            name: None,
        }
    }
}

impl SeriesConfigFile {
    pub fn from_file(filepath: &Path) -> Result<SeriesConfigFile> {
        let content = read(filepath)
            .map_err(|e| TicklineErr::SourceErr(filepath.display().to_string(), e))?;
        let config_file: SeriesConfigFile = serde_yaml::from_slice(content.as_slice())?;
        Ok(config_file)
    }
}

pub struct CliOpts {
    file: PathBuf,
    delimiter: char,
    name: Option<String>,
}

impl CliOpts {
    pub fn get_config(matches: &ArgMatches) -> Result<CliOpts> {
        let config = match matches.value_of(CONFIG_ARG) {
            Some(path) => SeriesConfigFile::from_file(Path::new(path))?,
            None => SeriesConfigFile::default(),
        };
        let delimiter = match matches.value_of(DELIMITER_ARG) {
            Some(text) => parse_delimiter(text)?,
            None => config.delimiter,
        };
        CsvStorage::delimiter_byte(delimiter)?;
        let file = matches
            .value_of(FILE_ARG)
            .ok_or_else(|| TicklineErr::OptionErr("missing input file".to_string()))?;

        Ok(CliOpts {
            file: PathBuf::from(file),
            delimiter,
            name: config.name,
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn load_series(&self) -> Result<TimeSeries> {
        let mut series = TimeSeries::from_file_with_delimiter(&self.file, self.delimiter)?;
        if let Some(name) = &self.name {
            series.set_name(name);
        }
        Ok(series)
    }
}

/// A single character, or `\t` for tab.
pub fn parse_delimiter(text: &str) -> Result<char> {
    if text == "\\t" {
        return Ok('\t');
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TicklineErr::OptionErr(format!(
            "delimiter must be one character, got {:?}",
            text
        ))),
    }
}
