//! Weather type, coverage and intensity (`wx`).
//!
//! Each layout slot is a `weather-conditions` bucket holding zero or more
//! simultaneous conditions:
//!
//! ```xml
//! <weather-conditions>
//!   <value coverage="chance" intensity="light" weather-type="rain showers">
//!     <visibility xsi:nil="true"/>
//!   </value>
//!   <value coverage="chance" intensity="light" additive="and"
//!          weather-type="thunderstorms"/>
//! </weather-conditions>
//! ```
//!
//! A bucket with no conditions may carry a `weather-summary` attribute
//! instead. Every bucket becomes one `ParameterValue::Weather`.

use ndfd_common::{NdfdResult, ParameterSeries, ParameterValue, WeatherTypeRecord};

use super::{ExtractionContext, LayoutScope};
use crate::document::Node;

const BUCKET_TAG: &str = "weather-conditions";

pub fn extract(ctx: &ExtractionContext<'_>, name: &str, location: &str) -> NdfdResult<ParameterSeries> {
    let element = ctx.parameter_element(name, location)?;

    let values = element
        .children()
        .filter(|c| c.tag() == BUCKET_TAG)
        .map(|bucket| ParameterValue::Weather(read_bucket(bucket)))
        .collect();

    ctx.align(element, LayoutScope::Element, values)
}

/// Records for one `weather-conditions` bucket. Never empty.
///
/// The `weather-summary` attribute is only read when the bucket has no
/// `value` children.
pub fn read_bucket(bucket: Node<'_>) -> Vec<WeatherTypeRecord> {
    let mut records: Vec<WeatherTypeRecord> = bucket
        .children()
        .filter(|c| c.tag() == "value")
        .map(read_condition)
        .collect();

    if records.is_empty() {
        return match bucket.attr("weather-summary").filter(|s| !s.is_empty()) {
            Some(summary) => vec![WeatherTypeRecord::summary_only(summary)],
            None => vec![WeatherTypeRecord::placeholder()],
        };
    }

    if let Some(summary) = synthesize_summary(&records) {
        for record in &mut records {
            record.summary = Some(summary.clone());
        }
    }
    records
}

fn read_condition(value: Node<'_>) -> WeatherTypeRecord {
    let attr = |name: &str| Some(value.attr(name).unwrap_or_default().to_string());

    WeatherTypeRecord {
        summary: attr("weather-type"),
        coverage: attr("coverage"),
        intensity: attr("intensity"),
        weather_type: attr("weather-type"),
        additive: attr("additive"),
        qualifier: attr("qualifier"),
        visibility: value.child("visibility").and_then(parse_visibility),
    }
}

/// First run of digits in a `visibility` element; `None` when it is nil.
fn parse_visibility(node: Node<'_>) -> Option<u32> {
    let nil = node
        .attributes()
        .any(|(name, value)| name.contains("nil") && value != "false");
    if nil {
        return None;
    }

    let text = node.text();
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Combined summary for a bucket, when any record names a weather type.
///
/// Each record contributes `" {additive} "` when it has an additive, followed
/// by its title-cased weather type: rain then snow gives `"RainSnow"`, rain
/// showers then thunderstorms with additive `and` gives
/// `"Rain Showers and Thunderstorms"`.
pub fn synthesize_summary(records: &[WeatherTypeRecord]) -> Option<String> {
    if !records.iter().any(WeatherTypeRecord::has_weather_type) {
        return None;
    }

    let mut summary = String::new();
    for record in records {
        let Some(weather_type) = record.weather_type.as_deref() else {
            continue;
        };
        if let Some(additive) = record.additive.as_deref().filter(|a| !a.is_empty()) {
            summary.push(' ');
            summary.push_str(additive);
            summary.push(' ');
        }
        summary.push_str(&title_case(weather_type));
    }
    Some(summary)
}

/// Upper-case the first letter of every word, lower-case the rest. A word is
/// a run of cased letters, so `"t-storms"` becomes `"T-Storms"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && in_word {
            out.extend(c.to_lowercase());
        } else if cased {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = cased;
    }
    out
}
