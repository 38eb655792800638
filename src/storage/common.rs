use crate::common::time_series::TimeSeries;
use crate::Result;

///
/// Storage is in charge of persisting a whole series.
/// The series' name and observations travel through it; the delimiter belongs to the storage.
pub trait Storage: Sized {
    fn read_series(&self) -> Result<TimeSeries>;

    fn write_series(&self, series: &TimeSeries) -> Result<()>;
}
