//! Synthetic DWML document generators.
//!
//! These build predictable documents of arbitrary size so tests can check
//! counts and ordering without hand-writing XML.

use chrono::{DateTime, Duration, FixedOffset};

/// Produces `count` timestamps starting at `start`, `step_hours` apart,
/// formatted the way DWML writes them (`2008-06-02T08:00:00-05:00`).
///
/// # Example
///
/// ```
/// use test_utils::hourly_times;
///
/// let times = hourly_times("2008-06-02T08:00:00-05:00", 3, 6);
/// assert_eq!(times[1], "2008-06-02T14:00:00-05:00");
/// ```
pub fn hourly_times(start: &str, count: usize, step_hours: i64) -> Vec<String> {
    let start: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339(start).expect("start must be RFC 3339");
    (0..count)
        .map(|i| {
            (start + Duration::hours(step_hours * i as i64))
                .format("%Y-%m-%dT%H:%M:%S%:z")
                .to_string()
        })
        .collect()
}

/// Builder for DWML documents.
///
/// # Example
///
/// ```
/// use test_utils::DwmlBuilder;
///
/// let xml = DwmlBuilder::new()
///     .location("point1", 38.99, -77.01)
///     .instant_layout("k-p3h-n2-1", &["2008-06-02T08:00:00-05:00", "2008-06-02T11:00:00-05:00"])
///     .scalar_parameter("point1", "cloud-amount", "Cloud Cover Amount", "k-p3h-n2-1", &["20", "30"])
///     .build();
/// assert!(xml.contains("<layout-key>k-p3h-n2-1</layout-key>"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct DwmlBuilder {
    locations: Vec<String>,
    links: Vec<String>,
    layouts: Vec<String>,
    parameters: Vec<(String, String)>,
}

impl DwmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, key: &str, lat: f64, lon: f64) -> Self {
        self.locations.push(format!(
            "    <location>\n      <location-key>{}</location-key>\n      <point latitude=\"{}\" longitude=\"{}\"/>\n    </location>\n",
            key, lat, lon
        ));
        self
    }

    pub fn link(mut self, key: &str, url: &str) -> Self {
        self.links.push(format!(
            "    <moreWeatherInformation applicable-location=\"{}\">{}</moreWeatherInformation>\n",
            key, url
        ));
        self
    }

    /// A layout of instantaneous times.
    pub fn instant_layout(mut self, key: &str, starts: &[&str]) -> Self {
        let mut xml = format!(
            "    <time-layout time-coordinate=\"local\" summarization=\"none\">\n      <layout-key>{}</layout-key>\n",
            key
        );
        for start in starts {
            xml.push_str(&format!("      <start-valid-time>{}</start-valid-time>\n", start));
        }
        xml.push_str("    </time-layout>\n");
        self.layouts.push(xml);
        self
    }

    /// A layout of `(start, end)` ranges.
    pub fn ranged_layout(mut self, key: &str, ranges: &[(&str, &str)]) -> Self {
        let mut xml = format!(
            "    <time-layout time-coordinate=\"local\" summarization=\"none\">\n      <layout-key>{}</layout-key>\n",
            key
        );
        for (start, end) in ranges {
            xml.push_str(&format!("      <start-valid-time>{}</start-valid-time>\n", start));
            xml.push_str(&format!("      <end-valid-time>{}</end-valid-time>\n", end));
        }
        xml.push_str("    </time-layout>\n");
        self.layouts.push(xml);
        self
    }

    /// A parameter whose values are plain `<value>` elements.
    pub fn scalar_parameter(
        mut self,
        location: &str,
        element: &str,
        name: &str,
        layout: &str,
        values: &[&str],
    ) -> Self {
        let mut xml = format!(
            "      <{} time-layout=\"{}\">\n        <name>{}</name>\n",
            element, layout, name
        );
        for value in values {
            xml.push_str(&format!("        <value>{}</value>\n", value));
        }
        xml.push_str(&format!("      </{}>\n", element));
        self.parameters.push((location.to_string(), xml));
        self
    }

    pub fn build(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\"?>\n<dwml version=\"1.0\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n  <data>\n",
        );
        for loc in &self.locations {
            xml.push_str(loc);
        }
        for link in &self.links {
            xml.push_str(link);
        }
        for layout in &self.layouts {
            xml.push_str(layout);
        }

        // One parameters block per location, in first-seen order
        let mut keys: Vec<&str> = Vec::new();
        for (key, _) in &self.parameters {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        for key in keys {
            xml.push_str(&format!("    <parameters applicable-location=\"{}\">\n", key));
            for (_, param) in self.parameters.iter().filter(|(k, _)| k == key) {
                xml.push_str(param);
            }
            xml.push_str("    </parameters>\n");
        }

        xml.push_str("  </data>\n</dwml>\n");
        xml
    }
}

/// A document with `locations` points, each carrying a 3-hourly cloud cover
/// series of `slots` values on layout `k-p3h-gen` and a 12-hour maximum
/// temperature series of `slots / 4` ranged values on layout `k-p12h-gen`.
///
/// Cloud values are `location_index * 1000 + slot`; maxt values are
/// `60 + slot`.
pub fn generate_glance_document(locations: usize, slots: usize) -> String {
    let start = "2008-06-02T08:00:00-05:00";
    let instants = hourly_times(start, slots, 3);
    let instant_refs: Vec<&str> = instants.iter().map(String::as_str).collect();

    let ranges_count = (slots / 4).max(1);
    let range_starts = hourly_times(start, ranges_count, 12);
    let range_ends = hourly_times("2008-06-02T20:00:00-05:00", ranges_count, 12);
    let ranges: Vec<(&str, &str)> = range_starts
        .iter()
        .zip(range_ends.iter())
        .map(|(s, e)| (s.as_str(), e.as_str()))
        .collect();

    let mut builder = DwmlBuilder::new()
        .instant_layout("k-p3h-gen", &instant_refs)
        .ranged_layout("k-p12h-gen", &ranges);

    for i in 0..locations {
        let key = format!("point{}", i + 1);
        let cloud: Vec<String> = (0..slots).map(|s| (i * 1000 + s).to_string()).collect();
        let cloud_refs: Vec<&str> = cloud.iter().map(String::as_str).collect();
        let maxt: Vec<String> = (0..ranges_count).map(|s| (60 + s).to_string()).collect();
        let maxt_refs: Vec<&str> = maxt.iter().map(String::as_str).collect();

        builder = builder
            .location(&key, 35.0 + i as f64 * 0.01, -97.0)
            .scalar_parameter(&key, "cloud-amount", "Cloud Cover Amount", "k-p3h-gen", &cloud_refs)
            .scalar_parameter(
                &key,
                "temperature",
                "Daily Maximum Temperature",
                "k-p12h-gen",
                &maxt_refs,
            );
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_times() {
        let times = hourly_times("2008-06-02T20:00:00-05:00", 3, 3);
        assert_eq!(
            times,
            vec![
                "2008-06-02T20:00:00-05:00",
                "2008-06-02T23:00:00-05:00",
                "2008-06-03T02:00:00-05:00",
            ]
        );
    }

    #[test]
    fn test_builder_groups_parameters_by_location() {
        let xml = DwmlBuilder::new()
            .location("a", 1.0, 2.0)
            .location("b", 3.0, 4.0)
            .scalar_parameter("a", "x", "X", "k", &["1"])
            .scalar_parameter("b", "x", "X", "k", &["2"])
            .scalar_parameter("a", "y", "Y", "k", &["3"])
            .build();
        assert_eq!(xml.matches("<parameters ").count(), 2);
    }

    #[test]
    fn test_generate_glance_document() {
        let xml = generate_glance_document(3, 8);
        assert_eq!(xml.matches("<location>").count(), 3);
        assert_eq!(xml.matches("<end-valid-time>").count(), 2);
        assert!(xml.contains("<value>2007</value>"));
    }
}
