//! NWS zone forecast products (plain text).
//!
//! ```text
//! Expires:200806030900;;059089        <- line 0
//! FPUS53 KGLD 021515
//! ZFPGLD
//!
//! ZONE FORECAST PRODUCT
//! 1015 AM CDT MON JUN 2 2008          <- line 5
//! ...
//! .TODAY...SUNNY. HIGHS AROUND 90.    <- line 12 onwards
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ndfd_common::{NdfdError, NdfdResult};
use serde::{Deserialize, Serialize};

const EXPIRES_LINE: usize = 0;
const ISSUED_LINE: usize = 5;
const BODY_START_LINE: usize = 12;

/// A parsed zone forecast. Times are wall-clock in the issuing office's zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneForecast {
    pub issued: NaiveDateTime,
    /// Time zone abbreviation printed with the issuance time (`CDT`).
    pub issued_zone: String,
    pub expires: NaiveDateTime,
    pub text: String,
}

/// Relative path of a zone product, e.g. `ks/ksz001.txt`.
pub fn zone_forecast_path(state: &str, zone: &str) -> String {
    let state = state.trim().to_lowercase();
    format!("{}/{}z{}.txt", state, state, zone.trim())
}

/// Parse a zone forecast product.
///
/// # Errors
/// `InvalidZoneForecast` when the header lines are missing or malformed.
pub fn parse_zone_forecast(product: &str) -> NdfdResult<ZoneForecast> {
    let lines: Vec<&str> = product.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    if lines.len() <= ISSUED_LINE {
        return Err(invalid(format!(
            "expected at least {} lines, found {}",
            ISSUED_LINE + 1,
            lines.len()
        )));
    }

    let expires = parse_expires(lines[EXPIRES_LINE])?;
    let (issued, issued_zone) = parse_issued(lines[ISSUED_LINE])?;
    let text = lines
        .get(BODY_START_LINE..)
        .map(|body| body.join("\n"))
        .unwrap_or_default()
        .trim()
        .to_string();

    Ok(ZoneForecast {
        issued,
        issued_zone,
        expires,
        text,
    })
}

fn invalid(msg: impl Into<String>) -> NdfdError {
    NdfdError::InvalidZoneForecast(msg.into())
}

/// `Expires:YYYYMMDDHHMM;;...`
fn parse_expires(line: &str) -> NdfdResult<NaiveDateTime> {
    let stamp = line
        .strip_prefix("Expires:")
        .and_then(|rest| rest.get(..12))
        .ok_or_else(|| invalid(format!("bad expiry line: {:?}", line)))?;
    NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M")
        .map_err(|e| invalid(format!("bad expiry time {:?}: {}", stamp, e)))
}

/// `HMM AM TZ DOW MON D YYYY`, hour without zero padding.
fn parse_issued(line: &str) -> NdfdResult<(NaiveDateTime, String)> {
    let bad = || invalid(format!("bad issuance line: {:?}", line));

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [clock, meridiem, zone, _weekday, month, day, year] = fields[..] else {
        return Err(bad());
    };

    if clock.len() < 3 || clock.len() > 4 || !clock.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let (hour, minute) = clock.split_at(clock.len() - 2);
    let hour: u32 = hour.parse().map_err(|_| bad())?;
    let minute: u32 = minute.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&hour) {
        return Err(bad());
    }
    let hour = match meridiem.to_ascii_uppercase().as_str() {
        "AM" => hour % 12,
        "PM" => hour % 12 + 12,
        _ => return Err(bad()),
    };
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(bad)?;

    let date_text = format!("{} {} {}", month, day, year);
    let date = NaiveDate::parse_from_str(&date_text, "%b %d %Y").map_err(|_| bad())?;

    Ok((date.and_time(time), zone.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_fixture() {
        let fc = parse_zone_forecast(test_utils::zone::KSZ001).unwrap();
        assert_eq!(fc.expires, at(2008, 6, 3, 9, 0));
        assert_eq!(fc.issued, at(2008, 6, 2, 10, 15));
        assert_eq!(fc.issued_zone, "CDT");
        assert!(fc.text.starts_with(".TODAY...SUNNY."));
        assert!(fc.text.ends_with("$$"));
    }

    #[test]
    fn test_single_digit_hour_and_pm() {
        let (issued, _) = parse_issued("915 PM EDT SUN JUN 1 2008").unwrap();
        assert_eq!(issued, at(2008, 6, 1, 21, 15));

        let (issued, _) = parse_issued("1205 AM EDT SUN JUN 1 2008").unwrap();
        assert_eq!(issued, at(2008, 6, 1, 0, 5));
    }

    #[test]
    fn test_short_product() {
        let err = parse_zone_forecast("Expires:200806030900;;059089\nFPUS53").unwrap_err();
        assert!(matches!(err, NdfdError::InvalidZoneForecast(_)));
    }

    #[test]
    fn test_bad_header_lines() {
        assert!(parse_expires("Expired:200806030900").is_err());
        assert!(parse_expires("Expires:2008").is_err());
        assert!(parse_issued("10:15 AM CDT MON JUN 2 2008").is_err());
        assert!(parse_issued("1315 PM CDT MON JUN 2 2008").is_err());
        assert!(parse_issued("1015 AM CDT MON JUN 2").is_err());
    }

    #[test]
    fn test_header_only_has_empty_text() {
        let product = "Expires:200806030900;;1\n\n\n\n\n1015 AM CDT MON JUN 2 2008\n";
        let fc = parse_zone_forecast(product).unwrap();
        assert!(fc.text.is_empty());
    }

    #[test]
    fn test_zone_forecast_path() {
        assert_eq!(zone_forecast_path("KS", "009"), "ks/ksz009.txt");
    }
}
