//! Forecast result types.
//!
//! A [`Forecast`] is the immutable product of extracting one DWML document:
//! every location in the document with one aligned series per requested
//! parameter code.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One extracted parameter value.
///
/// Scalars are coerced integer-first, then float, then kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Integer(i64),
    Float(f64),
    Text(String),
    /// The value element carried no text (usually `xsi:nil="true"`).
    Missing,
    /// All simultaneous weather conditions for one time bucket.
    Weather(Vec<WeatherTypeRecord>),
    Uncertain(ValueWithUncertainty),
}

impl ParameterValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParameterValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of a scalar value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterValue::Integer(v) => Some(*v as f64),
            ParameterValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_weather(&self) -> Option<&[WeatherTypeRecord]> {
        match self {
            ParameterValue::Weather(records) => Some(records),
            _ => None,
        }
    }

    pub fn as_uncertain(&self) -> Option<&ValueWithUncertainty> {
        match self {
            ParameterValue::Uncertain(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ParameterValue::Missing)
    }
}

/// One weather condition inside a `weather-conditions` bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherTypeRecord {
    pub summary: Option<String>,
    pub coverage: Option<String>,
    pub intensity: Option<String>,
    pub weather_type: Option<String>,
    pub additive: Option<String>,
    pub qualifier: Option<String>,
    /// Visibility in the document's units; `None` when nil or absent.
    pub visibility: Option<u32>,
}

impl WeatherTypeRecord {
    /// A bucket described only by its `weather-summary` attribute.
    pub fn summary_only(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    /// A bucket with neither conditions nor a summary.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn has_weather_type(&self) -> bool {
        self.weather_type.as_deref().is_some_and(|wt| !wt.is_empty())
    }
}

/// RTMA analysis value with its uncertainty, both kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueWithUncertainty {
    pub value: String,
    pub error: String,
}

/// A value stamped with the time it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedValue<V = ParameterValue> {
    pub time: DateTime<FixedOffset>,
    pub value: V,
}

impl<V> TimedValue<V> {
    pub fn new(time: DateTime<FixedOffset>, value: V) -> Self {
        Self { time, value }
    }
}

/// Time-ordered values of one parameter at one location.
pub type ParameterSeries = Vec<TimedValue>;

/// A forecast point with its extracted parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub key: String,
    pub lat: f64,
    pub lon: f64,
    /// "More weather information" link for this point, if the document has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Series keyed by parameter code (`maxt`, `wx`, ...).
    #[serde(default)]
    pub params: BTreeMap<String, ParameterSeries>,
}

impl Location {
    pub fn new(key: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            key: key.into(),
            lat,
            lon,
            link: None,
            params: BTreeMap::new(),
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn series(&self, code: &str) -> Option<&ParameterSeries> {
        self.params.get(code)
    }
}

/// Result of extracting a DWML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub locations: BTreeMap<String, Location>,
}

impl Forecast {
    pub fn new(locations: BTreeMap<String, Location>) -> Self {
        Self { locations }
    }

    pub fn location(&self, key: &str) -> Option<&Location> {
        self.locations.get(key)
    }

    pub fn series(&self, location: &str, code: &str) -> Option<&ParameterSeries> {
        self.location(location).and_then(|loc| loc.series(code))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(ParameterValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(ParameterValue::Float(3.5).as_i64(), None);
        assert_eq!(ParameterValue::Text("abc".into()).as_str(), Some("abc"));
        assert!(ParameterValue::Missing.is_missing());
    }

    #[test]
    fn test_weather_record_constructors() {
        let sunny = WeatherTypeRecord::summary_only("Sunny");
        assert_eq!(sunny.summary.as_deref(), Some("Sunny"));
        assert!(sunny.coverage.is_none());
        assert!(!sunny.has_weather_type());

        let empty = WeatherTypeRecord::placeholder();
        assert_eq!(empty, WeatherTypeRecord::default());
    }

    #[test]
    fn test_value_serializes_untagged() {
        let json = serde_json::to_string(&vec![
            ParameterValue::Integer(3),
            ParameterValue::Float(3.5),
            ParameterValue::Text("abc".into()),
            ParameterValue::Missing,
        ])
        .unwrap();
        assert_eq!(json, r#"[3,3.5,"abc",null]"#);
    }

    #[test]
    fn test_forecast_lookup() {
        let mut loc = Location::new("point1", 38.99, -77.01).with_link("http://example.com");
        loc.params.insert("maxt".into(), Vec::new());

        let mut locations = BTreeMap::new();
        locations.insert(loc.key.clone(), loc);
        let forecast = Forecast::new(locations);

        assert_eq!(forecast.len(), 1);
        assert!(forecast.series("point1", "maxt").is_some());
        assert!(forecast.series("point1", "mint").is_none());
        assert!(forecast.series("point2", "maxt").is_none());
    }
}
