//! NDFD digital weather markup (DWML) extraction.
//!
//! Turns a DWML document into per-location, per-parameter time series:
//!
//! 1. [`document`] parses the XML into a read-only tree.
//! 2. [`locations`] and [`time_layouts`] read the point and time metadata.
//! 3. [`parameters`] pulls each requested parameter's raw values.
//! 4. [`align`] stamps every value with a time, expanding ranged slots.
//! 5. [`assemble`] collects the series into a [`Forecast`].
//!
//! ```no_run
//! use dwml_parser::ForecastExtractor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = std::fs::read_to_string("glance.xml")?;
//! let forecast = ForecastExtractor::default().extract(&xml, &["maxt", "wx"])?;
//! for location in forecast.iter() {
//!     println!("{}: {} parameters", location.key, location.params.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod align;
pub mod assemble;
pub mod config;
pub mod document;
pub mod locations;
pub mod parameters;
pub mod product;
pub mod time_layouts;
pub mod zone_text;

pub use align::TimeAligner;
pub use assemble::{ForecastBuilder, ForecastExtractor};
pub use config::{ExtractorConfig, GLANCE_PARAMS};
pub use document::{Document, Node, NodeId};
pub use locations::{extract_locations, lat_lon_points, LocationInfo};
pub use parameters::{lookup, ParameterDef, Strategy, PARAMETER_REGISTRY};
pub use product::{Product, BY_DAY_PARAMS};
pub use time_layouts::{extract_time_layouts, TimeLayouts};
pub use zone_text::{parse_zone_forecast, zone_forecast_path, ZoneForecast};

pub use ndfd_common::{Forecast, NdfdError, NdfdResult};
