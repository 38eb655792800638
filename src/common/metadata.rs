use crate::common::codec::format_from_epoch;
use crate::common::time_point::Value;
use crate::common::time_series::TimeSeries;
use serde::{Deserialize, Serialize};

/// Statistics that cannot be computed are left as `None`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub name: String,
    pub count: usize,
    pub first_time: Option<String>,
    pub last_time: Option<String>,
    pub mean: Option<Value>,
    pub standard_deviation: Option<Value>,
    pub increment_mean: Option<Value>,
    pub increment_standard_deviation: Option<Value>,
    pub greatest_increment: Option<Value>,
    pub greatest_increment_at: Option<String>,
}

impl From<&TimeSeries> for SeriesSummary {
    fn from(series: &TimeSeries) -> Self {
        let greatest = series.greatest_increment().ok();
        SeriesSummary {
            name: series.name().to_string(),
            count: series.count(),
            first_time: series.first().map(|tp| format_from_epoch(tp.timestamp)),
            last_time: series.last().map(|tp| format_from_epoch(tp.timestamp)),
            mean: series.mean().ok(),
            standard_deviation: series.standard_deviation().ok(),
            increment_mean: series.increment_mean().ok(),
            increment_standard_deviation: series.increment_standard_deviation().ok(),
            greatest_increment: greatest.as_ref().map(|inc| inc.value),
            greatest_increment_at: greatest.map(|inc| inc.at),
        }
    }
}
