pub mod codec;
pub mod metadata;
pub mod option;
pub mod stats;
pub mod time_point;
pub mod time_series;
pub mod utils;

pub use option::{CONFIG_ARG, DELIMITER_ARG, FILE_ARG};
pub use time_point::{TimePoint, Timestamp, Value};
pub use time_series::{Increment, TimeSeries, DEFAULT_DELIMITER};

pub mod ops {
    pub trait FirstDifference {
        fn first_difference(&self) -> Self;
    }
}

/// Increment at index `i` is `value[i + 1] - value[i]`, stamped with the time of the later point.
impl ops::FirstDifference for Vec<TimePoint> {
    fn first_difference(&self) -> Self {
        self.windows(2)
            .map(|pair| TimePoint::new(pair[1].timestamp, pair[1].value - pair[0].value))
            .collect()
    }
}

impl ops::FirstDifference for Vec<Value> {
    fn first_difference(&self) -> Self {
        self.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }
}
