//! Parameter extraction.
//!
//! Every NDFD element code maps to the display name the document uses for it
//! and to one of three extraction strategies:
//!
//! - [`generic`]: scalar `<value>` (or `<icon-link>`) children
//! - [`rtma`]: `<valueWithUncertainty>` analysis values
//! - [`weather`]: `<weather-conditions>` buckets of structured records
//!
//! The mapping is the static [`PARAMETER_REGISTRY`]; requested codes are
//! resolved against it once, before any document work.

pub mod generic;
pub mod rtma;
pub mod weather;

use ndfd_common::{NdfdError, NdfdResult, ParameterSeries, ParameterValue};

use crate::align::TimeAligner;
use crate::document::{Document, Node};
use crate::time_layouts::{layout, TimeLayouts};

/// Which element carries the `time-layout` attribute for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutScope {
    /// The element that directly contains `<name>`.
    Element,
    /// One level further up, for parameters nested inside a container
    /// (wave height under `water-state`).
    Container,
}

/// How a parameter's values are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Generic {
        value_tag: &'static str,
        scope: LayoutScope,
    },
    Rtma,
    Weather,
}

const SCALAR: Strategy = Strategy::Generic {
    value_tag: "value",
    scope: LayoutScope::Element,
};

/// A known NDFD parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDef {
    /// Element code used in requests (`maxt`, `wx`, ...).
    pub code: &'static str,
    /// Exact text of the `<name>` element in DWML.
    pub name: &'static str,
    pub strategy: Strategy,
}

impl ParameterDef {
    const fn new(code: &'static str, name: &'static str, strategy: Strategy) -> Self {
        Self { code, name, strategy }
    }

    /// Extract and align this parameter for one location.
    pub fn extract(&self, ctx: &ExtractionContext<'_>, location: &str) -> NdfdResult<ParameterSeries> {
        match self.strategy {
            Strategy::Generic { value_tag, scope } => {
                generic::extract(ctx, self.name, location, value_tag, scope)
            }
            Strategy::Rtma => rtma::extract(ctx, self.name, location),
            Strategy::Weather => weather::extract(ctx, self.name, location),
        }
    }
}

/// Every parameter the NDFD XML service can return.
pub static PARAMETER_REGISTRY: &[ParameterDef] = &[
    // Core forecast elements
    ParameterDef::new("maxt", "Daily Maximum Temperature", SCALAR),
    ParameterDef::new("mint", "Daily Minimum Temperature", SCALAR),
    ParameterDef::new("temp", "Temperature", SCALAR),
    ParameterDef::new("dew", "Dew Point Temperature", SCALAR),
    ParameterDef::new("appt", "Apparent Temperature", SCALAR),
    ParameterDef::new("pop12", "12 Hourly Probability of Precipitation", SCALAR),
    ParameterDef::new("qpf", "Liquid Precipitation Amount", SCALAR),
    ParameterDef::new("snow", "Snow Amount", SCALAR),
    ParameterDef::new("sky", "Cloud Cover Amount", SCALAR),
    ParameterDef::new("rh", "Relative Humidity", SCALAR),
    ParameterDef::new("wspd", "Wind Speed", SCALAR),
    ParameterDef::new("wdir", "Wind Direction", SCALAR),
    ParameterDef::new("wgust", "Wind Speed Gust", SCALAR),
    ParameterDef::new("wx", "Weather Type, Coverage, and Intensity", Strategy::Weather),
    ParameterDef::new(
        "icons",
        "Conditions Icons",
        Strategy::Generic {
            value_tag: "icon-link",
            scope: LayoutScope::Element,
        },
    ),
    ParameterDef::new(
        "waveh",
        "Wave Height",
        Strategy::Generic {
            value_tag: "value",
            scope: LayoutScope::Container,
        },
    ),
    // Tropical cyclone wind probabilities
    ParameterDef::new("incw34", "Probability of a Tropical Cyclone Wind Speed above 34 Knots (Incremental)", SCALAR),
    ParameterDef::new("incw50", "Probability of a Tropical Cyclone Wind Speed above 50 Knots (Incremental)", SCALAR),
    ParameterDef::new("incw64", "Probability of a Tropical Cyclone Wind Speed above 64 Knots (Incremental)", SCALAR),
    ParameterDef::new("cumw34", "Probability of a Tropical Cyclone Wind Speed above 34 Knots (Cumulative)", SCALAR),
    ParameterDef::new("cumw50", "Probability of a Tropical Cyclone Wind Speed above 50 Knots (Cumulative)", SCALAR),
    ParameterDef::new("cumw64", "Probability of a Tropical Cyclone Wind Speed above 64 Knots (Cumulative)", SCALAR),
    // Convective outlooks
    ParameterDef::new("conhazo", "Convective Hazard Outlook", SCALAR),
    ParameterDef::new("ptornado", "Probability of Tornadoes", SCALAR),
    ParameterDef::new("phail", "Probability of Hail", SCALAR),
    ParameterDef::new("ptstmwinds", "Probability of Damaging Thunderstorm Winds", SCALAR),
    ParameterDef::new("pxtornado", "Probability of Extreme Tornadoes", SCALAR),
    ParameterDef::new("pxhail", "Probability of Extreme Hail", SCALAR),
    ParameterDef::new("pxtstmwinds", "Probability of Extreme Thunderstorm Winds", SCALAR),
    ParameterDef::new("ptotsvrtstm", "Total Probability of Severe Thunderstorms", SCALAR),
    ParameterDef::new("pxtotsvrtstm", "Total Probability of Extreme Severe Thunderstorms", SCALAR),
    // Climate outlooks
    ParameterDef::new("tmpabv14d", "Probability of 8-14 Day Average Temperature Above Normal", SCALAR),
    ParameterDef::new("tmpblw14d", "Probability of 8-14 Day Average Temperature Below Normal", SCALAR),
    ParameterDef::new("tmpabv30d", "Probability of One-Month Average Temperature Above Normal", SCALAR),
    ParameterDef::new("tmpblw30d", "Probability of One-Month Average Temperature Below Normal", SCALAR),
    ParameterDef::new("tmpabv90d", "Probability of Three-Month Average Temperature Above Normal", SCALAR),
    ParameterDef::new("tmpblw90d", "Probability of Three-Month Average Temperature Below Normal", SCALAR),
    ParameterDef::new("prcpabv14d", "Probability of 8-14 Day Average Precipitation Above Normal", SCALAR),
    ParameterDef::new("prcpblw14d", "Probability of 8-14 Day Average Precipitation Below Normal", SCALAR),
    ParameterDef::new("prcpabv30d", "Probability of One-Month Average Precipitation Above Normal", SCALAR),
    ParameterDef::new("prcpblw30d", "Probability of One-Month Average Precipitation Below Normal", SCALAR),
    ParameterDef::new("prcpabv90d", "Probability of Three-Month Average Precipitation Above Normal", SCALAR),
    ParameterDef::new("prcpblw90d", "Probability of Three-Month Average Precipitation Below Normal", SCALAR),
    // Real-time mesoscale analysis
    ParameterDef::new("precipa_r", "RTMA Liquid Precipitation Amount", SCALAR),
    ParameterDef::new("sky_r", "RTMA Cloud Cover Amount", SCALAR),
    ParameterDef::new("td_r", "RTMA Dew Point Temperature", Strategy::Rtma),
    ParameterDef::new("temp_r", "RTMA Temperature", Strategy::Rtma),
    ParameterDef::new("wdir_r", "RTMA Wind Direction", Strategy::Rtma),
    ParameterDef::new("wspd_r", "RTMA Wind Speed", Strategy::Rtma),
];

/// Registry entry for `code`.
pub fn lookup(code: &str) -> Option<&'static ParameterDef> {
    PARAMETER_REGISTRY.iter().find(|p| p.code == code)
}

/// Resolve requested codes in order, dropping repeats.
///
/// # Errors
/// `UnknownParameterCode` for the first code not in the registry.
pub fn resolve<S: AsRef<str>>(codes: &[S]) -> NdfdResult<Vec<&'static ParameterDef>> {
    let mut resolved: Vec<&'static ParameterDef> = Vec::with_capacity(codes.len());
    for code in codes {
        let code = code.as_ref();
        let def = lookup(code).ok_or_else(|| NdfdError::UnknownParameterCode(code.to_string()))?;
        if !resolved.iter().any(|d| d.code == def.code) {
            resolved.push(def);
        }
    }
    Ok(resolved)
}

/// Shared inputs for every extraction over one document.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionContext<'d> {
    pub doc: &'d Document,
    pub layouts: &'d TimeLayouts,
    pub aligner: TimeAligner,
}

impl<'d> ExtractionContext<'d> {
    pub fn new(doc: &'d Document, layouts: &'d TimeLayouts, aligner: TimeAligner) -> Self {
        Self { doc, layouts, aligner }
    }

    /// The element holding parameter `name` for `location`, i.e. the parent
    /// of the matching `<name>`.
    ///
    /// The search is confined to the location's own `parameters` block.
    ///
    /// # Errors
    /// `NoParameters` when no `parameters` block names the location;
    /// `ParameterNotFound` when the block has no such `<name>`.
    pub fn parameter_element(&self, name: &str, location: &str) -> NdfdResult<Node<'d>> {
        let block = self
            .doc
            .first_matching("parameters", |n| n.attr("applicable-location") == Some(location))
            .ok_or_else(|| NdfdError::NoParameters(location.to_string()))?;

        let name_node = block
            .first_matching("name", |n| n.text() == name)
            .ok_or_else(|| NdfdError::ParameterNotFound {
                name: name.to_string(),
                location: location.to_string(),
            })?;

        name_node
            .parent()
            .ok_or_else(|| NdfdError::missing_element(name_node.tag(), "parameters"))
    }

    /// Align values read from `element` onto its time-layout.
    pub fn align(
        &self,
        element: Node<'d>,
        scope: LayoutScope,
        values: Vec<ParameterValue>,
    ) -> NdfdResult<ParameterSeries> {
        let key = layout_key(element, scope)?;
        let intervals = layout(self.layouts, key)?;
        self.aligner.align(key, intervals, values)
    }
}

fn layout_key<'d>(element: Node<'d>, scope: LayoutScope) -> NdfdResult<&'d str> {
    let holder = match scope {
        LayoutScope::Element => element,
        LayoutScope::Container => element
            .parent()
            .ok_or_else(|| NdfdError::missing_element("time-layout container", element.tag()))?,
    };
    holder.required_attr("time-layout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_codes_unique() {
        let codes: HashSet<&str> = PARAMETER_REGISTRY.iter().map(|p| p.code).collect();
        assert_eq!(codes.len(), PARAMETER_REGISTRY.len());
    }

    #[test]
    fn test_registry_strategies() {
        assert_eq!(lookup("wx").unwrap().strategy, Strategy::Weather);
        assert_eq!(lookup("temp_r").unwrap().strategy, Strategy::Rtma);
        assert_eq!(lookup("sky_r").unwrap().strategy, SCALAR);
        assert!(matches!(
            lookup("icons").unwrap().strategy,
            Strategy::Generic { value_tag: "icon-link", .. }
        ));
        assert!(matches!(
            lookup("waveh").unwrap().strategy,
            Strategy::Generic { scope: LayoutScope::Container, .. }
        ));
    }

    #[test]
    fn test_resolve_keeps_order_and_drops_repeats() {
        let defs = resolve(&["wx", "maxt", "wx"]).unwrap();
        let codes: Vec<&str> = defs.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["wx", "maxt"]);
    }

    #[test]
    fn test_resolve_unknown_code() {
        let err = resolve(&["maxt", "pollen"]).unwrap_err();
        assert!(matches!(err, NdfdError::UnknownParameterCode(ref c) if c == "pollen"));
    }

    #[test]
    fn test_parameter_element_is_scoped_to_location() {
        let xml = r#"<dwml>
            <parameters applicable-location="point1">
              <temperature time-layout="k1"><name>Temperature</name><value>1</value></temperature>
            </parameters>
            <parameters applicable-location="point2">
              <humidity time-layout="k1"><name>Relative Humidity</name><value>2</value></humidity>
            </parameters>
        </dwml>"#;
        let doc = Document::parse(xml).unwrap();
        let layouts = TimeLayouts::new();
        let ctx = ExtractionContext::new(&doc, &layouts, TimeAligner::default());

        let el = ctx.parameter_element("Temperature", "point1").unwrap();
        assert_eq!(el.tag(), "temperature");

        // Present in the document, but not under point2
        let err = ctx.parameter_element("Temperature", "point2").unwrap_err();
        assert!(matches!(err, NdfdError::ParameterNotFound { .. }));

        let err = ctx.parameter_element("Temperature", "point3").unwrap_err();
        assert!(matches!(err, NdfdError::NoParameters(ref key) if key == "point3"));
    }
}
