//! Scalar parameters: one `<value>` (or `<icon-link>`) per layout slot.

use ndfd_common::{NdfdResult, ParameterSeries, ParameterValue};
use tracing::trace;

use super::{ExtractionContext, LayoutScope};

/// Extract a scalar parameter for `location`.
pub fn extract(
    ctx: &ExtractionContext<'_>,
    name: &str,
    location: &str,
    value_tag: &str,
    scope: LayoutScope,
) -> NdfdResult<ParameterSeries> {
    let element = ctx.parameter_element(name, location)?;

    let values: Vec<ParameterValue> = element
        .children()
        .filter(|c| c.tag() == value_tag)
        .map(|c| coerce_value(c.text_opt()))
        .collect();

    trace!(parameter = name, location, values = values.len(), "Read scalar values");
    ctx.align(element, scope, values)
}

/// Integer if the text is one, then float, then the text itself.
/// An empty element is `Missing`.
pub fn coerce_value(text: Option<&str>) -> ParameterValue {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return ParameterValue::Missing;
    };

    if let Ok(i) = text.parse::<i64>() {
        ParameterValue::Integer(i)
    } else if let Ok(f) = text.parse::<f64>() {
        ParameterValue::Float(f)
    } else {
        ParameterValue::Text(text.to_string())
    }
}
