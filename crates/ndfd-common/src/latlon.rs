//! NDFD `latLonList` wire format.
//!
//! Points are written as `lat,lon` pairs separated by single spaces:
//!
//! ```text
//! 38.88,-77.10 37.1764,-101.347
//! ```

use std::fmt::Display;

use crate::error::{NdfdError, NdfdResult};

/// Parse a lat/lon list, keeping each coordinate's text exactly as written.
///
/// Both halves of every pair must parse as decimals, but the original text is
/// returned so that [`format_lat_lon_list`] reproduces the input.
pub fn parse_lat_lon_list(s: &str) -> NdfdResult<Vec<(String, String)>> {
    s.split_whitespace()
        .map(|pair| {
            let (lat, lon) = pair
                .split_once(',')
                .ok_or_else(|| NdfdError::InvalidCoordinate(format!("expected lat,lon: '{}'", pair)))?;
            if lon.contains(',') {
                return Err(NdfdError::InvalidCoordinate(format!(
                    "expected a single comma: '{}'",
                    pair
                )));
            }
            for part in [lat, lon] {
                part.parse::<f64>()
                    .map_err(|_| NdfdError::InvalidCoordinate(format!("not a number: '{}'", part)))?;
            }
            Ok((lat.to_string(), lon.to_string()))
        })
        .collect()
}

/// Parse a lat/lon list into numeric pairs.
pub fn parse_lat_lon_coords(s: &str) -> NdfdResult<Vec<(f64, f64)>> {
    parse_lat_lon_list(s)?
        .into_iter()
        .map(|(lat, lon)| {
            let lat = lat
                .parse::<f64>()
                .map_err(|_| NdfdError::InvalidCoordinate(lat.clone()))?;
            let lon = lon
                .parse::<f64>()
                .map_err(|_| NdfdError::InvalidCoordinate(lon.clone()))?;
            Ok((lat, lon))
        })
        .collect()
}

/// Serialize points into the lat/lon list format.
///
/// Accepts numbers or strings: `&[(38.88, -77.1)]` and
/// `&[("38.88", "-77.10")]` both work.
pub fn format_lat_lon_list<L: Display, R: Display>(points: &[(L, R)]) -> String {
    points
        .iter()
        .map(|(lat, lon)| format!("{},{}", lat, lon))
        .collect::<Vec<_>>()
        .join(" ")
}
