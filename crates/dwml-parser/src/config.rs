//! Extractor configuration.
//!
//! ```yaml
//! range_stride_hours: 3
//! glance_params: [maxt, mint, sky, wx, icons]
//! ```
//!
//! Every field is optional; omitted fields take the defaults below.

use std::path::Path;

use ndfd_common::{NdfdError, NdfdResult, DEFAULT_RANGE_STRIDE_HOURS};
use serde::{Deserialize, Serialize};

use crate::align::TimeAligner;
use crate::parameters;

/// Parameters returned for a glance request when none are named.
pub const GLANCE_PARAMS: &[&str] = &["maxt", "mint", "sky", "wx", "icons"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Spacing of the samples a ranged slot is expanded into.
    pub range_stride_hours: u32,

    /// Default parameter codes for the glance product.
    pub glance_params: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            range_stride_hours: DEFAULT_RANGE_STRIDE_HOURS,
            glance_params: GLANCE_PARAMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExtractorConfig {
    /// Load and validate configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> NdfdResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NdfdError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> NdfdResult<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| NdfdError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NdfdResult<()> {
        if self.range_stride_hours == 0 {
            return Err(NdfdError::InvalidConfig(
                "range_stride_hours must be at least 1".to_string(),
            ));
        }
        if let Some(unknown) = self
            .glance_params
            .iter()
            .find(|code| parameters::lookup(code).is_none())
        {
            return Err(NdfdError::InvalidConfig(format!(
                "unknown glance parameter: {}",
                unknown
            )));
        }
        Ok(())
    }

    /// Aligner for the configured stride.
    pub fn aligner(&self) -> NdfdResult<TimeAligner> {
        TimeAligner::new(self.range_stride_hours)
    }
}
