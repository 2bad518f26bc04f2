//! Assembly of extracted series into a finished [`Forecast`].

use std::collections::BTreeMap;

use ndfd_common::{Forecast, Location, NdfdError, NdfdResult, ParameterSeries};
use tracing::{debug, info, instrument};

use crate::config::ExtractorConfig;
use crate::document::Document;
use crate::locations::{extract_locations, LocationInfo};
use crate::parameters::{self, ExtractionContext, ParameterDef};
use crate::product::Product;
use crate::time_layouts::extract_time_layouts;

/// Accumulates parameter series per location.
///
/// Locations are only reachable through [`ForecastBuilder::finish`], so a
/// caller never observes a partly filled forecast.
#[derive(Debug, Default)]
pub struct ForecastBuilder {
    locations: BTreeMap<String, Location>,
}

impl ForecastBuilder {
    pub fn new(infos: BTreeMap<String, LocationInfo>) -> Self {
        let locations = infos
            .into_iter()
            .map(|(key, info)| {
                let mut location = Location::new(info.key, info.lat, info.lon);
                location.link = info.link;
                (key, location)
            })
            .collect();
        Self { locations }
    }

    /// Attach `series` under `code`, replacing any earlier series for it.
    pub fn insert_series(
        &mut self,
        location: &str,
        code: &str,
        series: ParameterSeries,
    ) -> NdfdResult<()> {
        let entry = self
            .locations
            .get_mut(location)
            .ok_or_else(|| NdfdError::UnknownLocation(location.to_string()))?;
        entry.params.insert(code.to_string(), series);
        Ok(())
    }

    pub fn location_keys(&self) -> Vec<String> {
        self.locations.keys().cloned().collect()
    }

    pub fn finish(self) -> Forecast {
        Forecast::new(self.locations)
    }
}

/// Turns DWML documents into forecasts.
///
/// Holds no per-document state; one extractor can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ForecastExtractor {
    config: ExtractorConfig,
}

impl ForecastExtractor {
    /// # Errors
    /// `InvalidConfig` when the configuration does not validate.
    pub fn new(config: ExtractorConfig) -> NdfdResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract `params` for every location in `xml`.
    ///
    /// With no parameters the configured glance set is used. Codes are
    /// resolved before the document is parsed, so an unknown code fails
    /// without touching the input.
    #[instrument(skip(self, xml, params), fields(bytes = xml.len(), params = params.len()))]
    pub fn extract<S: AsRef<str>>(&self, xml: &str, params: &[S]) -> NdfdResult<Forecast> {
        let defs = if params.is_empty() {
            parameters::resolve(&self.config.glance_params)?
        } else {
            parameters::resolve(params)?
        };
        let doc = Document::parse(xml)?;
        self.extract_resolved(&doc, &defs)
    }

    /// Extract the parameter set `product` calls for.
    #[instrument(skip(self, xml, product, requested), fields(product = %product))]
    pub fn extract_product(
        &self,
        xml: &str,
        product: Product,
        requested: &[String],
    ) -> NdfdResult<Forecast> {
        let codes = product.resolve_parameters(requested, &self.config)?;
        self.extract(xml, &codes)
    }

    /// Extract already-resolved parameters from a parsed document.
    pub fn extract_resolved(&self, doc: &Document, defs: &[&ParameterDef]) -> NdfdResult<Forecast> {
        let infos = extract_locations(doc)?;
        let layouts = extract_time_layouts(doc)?;
        let ctx = ExtractionContext::new(doc, &layouts, self.config.aligner()?);

        let mut builder = ForecastBuilder::new(infos);
        for def in defs {
            for key in builder.location_keys() {
                let series = def.extract(&ctx, &key)?;
                debug!(
                    parameter = def.code,
                    location = %key,
                    samples = series.len(),
                    "Aligned parameter"
                );
                builder.insert_series(&key, def.code, series)?;
            }
        }

        let forecast = builder.finish();
        info!(
            locations = forecast.len(),
            parameters = defs.len(),
            "Extracted forecast"
        );
        Ok(forecast)
    }
}
