//! RTMA analysis parameters.
//!
//! Each slot is a `valueWithUncertainty` pair:
//!
//! ```xml
//! <valueWithUncertainty>
//!   <value>72</value>
//!   <uncertainty type="rtma"><error>2.5</error></uncertainty>
//! </valueWithUncertainty>
//! ```
//!
//! Both texts are kept verbatim.

use ndfd_common::{NdfdResult, ParameterSeries, ParameterValue, ValueWithUncertainty};
use tracing::debug;

use super::{ExtractionContext, LayoutScope};
use crate::document::Node;

const ENTRY_TAG: &str = "valueWithUncertainty";

pub fn extract(ctx: &ExtractionContext<'_>, name: &str, location: &str) -> NdfdResult<ParameterSeries> {
    let element = ctx.parameter_element(name, location)?;

    let values = element
        .children()
        .filter(|c| c.tag() == ENTRY_TAG)
        .map(|entry| ParameterValue::Uncertain(read_entry(entry, name)))
        .collect();

    ctx.align(element, LayoutScope::Element, values)
}

fn read_entry(entry: Node<'_>, name: &str) -> ValueWithUncertainty {
    let value = entry.child("value").and_then(|n| n.text_opt());
    let error = entry.child_path("uncertainty/error").and_then(|n| n.text_opt());

    if value.is_none() || error.is_none() {
        debug!(parameter = name, "RTMA entry missing value or uncertainty");
    }

    ValueWithUncertainty {
        value: value.unwrap_or_default().to_string(),
        error: error.unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::TimeAligner;
    use crate::document::Document;
    use crate::time_layouts::extract_time_layouts;

    fn run(xml: &str, name: &str) -> ParameterSeries {
        let doc = Document::parse(xml).unwrap();
        let layouts = extract_time_layouts(&doc).unwrap();
        let ctx = ExtractionContext::new(&doc, &layouts, TimeAligner::default());
        extract(&ctx, name, "point1").unwrap()
    }

    #[test]
    fn test_values_kept_verbatim() {
        let series = run(test_utils::dwml::RTMA_POINT, "RTMA Temperature");
        assert_eq!(series.len(), 2);
        let second = series[1].value.as_uncertain().unwrap();
        assert_eq!(second.value, "74");
        // Trailing zero survives
        assert_eq!(second.error, "2.40");
    }

    #[test]
    fn test_missing_uncertainty_is_empty() {
        let xml = r#"<dwml>
            <time-layout><layout-key>k</layout-key>
              <start-valid-time>2008-06-02T10:00:00-05:00</start-valid-time>
            </time-layout>
            <parameters applicable-location="point1">
              <wind-speed type="rtma" time-layout="k">
                <name>RTMA Wind Speed</name>
                <valueWithUncertainty><value>12</value></valueWithUncertainty>
              </wind-speed>
            </parameters>
        </dwml>"#;
        let series = run(xml, "RTMA Wind Speed");
        assert_eq!(
            series[0].value,
            ParameterValue::Uncertain(ValueWithUncertainty {
                value: "12".to_string(),
                error: String::new(),
            })
        );
    }
}
