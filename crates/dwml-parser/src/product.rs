//! NDFD forecast products and their parameter sets.

use std::fmt;
use std::str::FromStr;

use ndfd_common::{NdfdError, NdfdResult};

use crate::config::ExtractorConfig;

/// Parameters carried by every by-day summary document.
pub const BY_DAY_PARAMS: &[&str] = &["maxt", "mint", "pop12", "wx", "icons"];

/// The kind of document a request asked NDFD for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    /// Hourly/3-hourly series of explicitly requested parameters.
    TimeSeries,
    /// Summary set of a handful of parameters.
    Glance,
    /// 12- or 24-hourly day summaries.
    ByDay,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::TimeSeries => "time-series",
            Product::Glance => "glance",
            Product::ByDay => "by-day",
        }
    }

    /// Parameter codes to extract for this product.
    ///
    /// # Errors
    /// `InvalidRequest` for a time-series with no parameters.
    pub fn resolve_parameters(
        &self,
        requested: &[String],
        config: &ExtractorConfig,
    ) -> NdfdResult<Vec<String>> {
        match self {
            Product::TimeSeries if requested.is_empty() => Err(NdfdError::InvalidRequest(
                "time-series requests must name at least one parameter".to_string(),
            )),
            Product::TimeSeries => Ok(requested.to_vec()),
            Product::Glance if requested.is_empty() => Ok(config.glance_params.clone()),
            Product::Glance => Ok(requested.to_vec()),
            Product::ByDay => Ok(BY_DAY_PARAMS.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = NdfdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "time-series" => Ok(Product::TimeSeries),
            "glance" => Ok(Product::Glance),
            "by-day" => Ok(Product::ByDay),
            other => Err(NdfdError::InvalidRequest(format!("unknown product: {}", other))),
        }
    }
}
