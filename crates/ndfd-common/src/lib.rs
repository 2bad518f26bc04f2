//! Common types and utilities shared across the NDFD forecast crates.

pub mod error;
pub mod forecast;
pub mod latlon;
pub mod time;

pub use error::{ErrorKind, NdfdError, NdfdResult};
pub use forecast::{
    Forecast, Location, ParameterSeries, ParameterValue, TimedValue, ValueWithUncertainty,
    WeatherTypeRecord,
};
pub use latlon::{format_lat_lon_list, parse_lat_lon_coords, parse_lat_lon_list};
pub use time::{parse_dwml_time, Interval, DEFAULT_RANGE_STRIDE_HOURS, MAX_RANGE_SPAN_HOURS};
