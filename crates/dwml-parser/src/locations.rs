//! Location and point-list extraction.

use std::collections::BTreeMap;

use ndfd_common::{parse_lat_lon_list, NdfdError, NdfdResult};
use tracing::debug;

use crate::document::{Document, Node};

/// A forecast point as declared by the document, before any parameters are
/// attached.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    pub key: String,
    pub lat: f64,
    pub lon: f64,
    pub link: Option<String>,
}

/// Read every `location` element and attach its "more weather information"
/// link.
///
/// # Errors
/// - `MissingElement` / `MissingAttribute` when a location lacks its key or
///   point coordinates.
/// - `InvalidCoordinate` when a coordinate is not a decimal.
/// - `DuplicateLocation` when two locations share a key.
/// - `UnknownLocation` when a link names a key no location declares.
pub fn extract_locations(doc: &Document) -> NdfdResult<BTreeMap<String, LocationInfo>> {
    let mut locations = BTreeMap::new();

    for node in doc.find_all("location") {
        let info = read_location(node)?;
        if locations.contains_key(&info.key) {
            return Err(NdfdError::DuplicateLocation(info.key));
        }
        locations.insert(info.key.clone(), info);
    }

    for annotation in doc.find_all("moreWeatherInformation") {
        let key = annotation.required_attr("applicable-location")?;
        let location = locations
            .get_mut(key)
            .ok_or_else(|| NdfdError::UnknownLocation(key.to_string()))?;
        location.link = annotation.text_opt().map(str::to_string);
    }

    debug!(count = locations.len(), "Extracted locations");
    Ok(locations)
}

fn read_location(node: Node<'_>) -> NdfdResult<LocationInfo> {
    let key = node.required_child("location-key")?.text();
    if key.is_empty() {
        return Err(NdfdError::missing_element("location-key", "location"));
    }

    let point = node.required_child("point")?;
    let lat = parse_coordinate(point.required_attr("latitude")?)?;
    let lon = parse_coordinate(point.required_attr("longitude")?)?;

    Ok(LocationInfo {
        key: key.to_string(),
        lat,
        lon,
        link: None,
    })
}

fn parse_coordinate(raw: &str) -> NdfdResult<f64> {
    raw.trim()
        .parse()
        .map_err(|_| NdfdError::InvalidCoordinate(raw.to_string()))
}

/// Points from the first `latLonList` element, as returned by the NDFD
/// subgrid, line, zip code, square and corner-point list services.
///
/// # Errors
/// `MissingElement` when the document has no `latLonList`; `InvalidCoordinate`
/// when the list is malformed.
pub fn lat_lon_points(doc: &Document) -> NdfdResult<Vec<(String, String)>> {
    let list = doc
        .first_matching("latLonList", |_| true)
        .ok_or_else(|| NdfdError::missing_element("latLonList", doc.root().tag()))?;
    parse_lat_lon_list(list.text())
}
