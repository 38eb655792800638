use std::io;

#[derive(Debug, Fail)]
pub enum TicklineErr {
    #[fail(display = "Unable to open file {}: {}", _0, _1)]
    SourceErr(String, #[cause] io::Error),

    #[fail(display = "{}", _0)]
    IoErr(#[cause] io::Error),

    #[fail(display = "{}", _0)]
    CsvErr(#[cause] csv::Error),

    #[fail(display = "Malformed record at line {}: {}", _0, _1)]
    MalformedRecord(u64, String),

    #[fail(display = "Time and price vectors are not equally sized ({} vs {})", _0, _1)]
    ShapeMismatch(usize, usize),

    #[fail(display = "Date {} cannot be parsed", _0)]
    InvalidDate(String),

    #[fail(display = "No price at {}", _0)]
    NotFound(String),

    #[fail(display = "Need at least {} observations, found {}", required, found)]
    InsufficientData { required: usize, found: usize },

    #[fail(display = "Delimiter {:?} is not a single ascii character", _0)]
    InvalidDelimiter(char),

    #[fail(display = "Invalid option: {}", _0)]
    OptionErr(String),

    #[fail(display = "{}", _0)]
    ConfigErr(#[cause] serde_yaml::Error),
}

impl From<io::Error> for TicklineErr {
    fn from(e: io::Error) -> Self {
        TicklineErr::IoErr(e)
    }
}

impl From<csv::Error> for TicklineErr {
    fn from(e: csv::Error) -> Self {
        TicklineErr::CsvErr(e)
    }
}

impl From<serde_yaml::Error> for TicklineErr {
    fn from(e: serde_yaml::Error) -> Self {
        TicklineErr::ConfigErr(e)
    }
}

pub type Result<T> = std::result::Result<T, TicklineErr>;
