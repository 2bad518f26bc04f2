//! Test support shared by the NDFD forecast crates.
//!
//! - `fixtures`: hand-written DWML documents, a zone product and a point list
//! - `generators`: `DwmlBuilder` and a multi-location glance generator
//! - `paths`: scratch directories for APIs that take file paths
//!
//! Pull it in as a dev-dependency and use the re-exports:
//!
//! ```ignore
//! use test_utils::{dwml, DwmlBuilder};
//!
//! let xml = dwml::GLANCE_TWO_POINTS;
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Asserts two numbers are within `epsilon` of each other, compared as `f64`.
///
/// ```ignore
/// assert_approx_eq!(38.8800001, 38.88, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: {} and {} differ by {}, more than {}",
                left, right, diff, epsilon
            );
        }
    }};
}

/// [`assert_approx_eq!`] applied to both halves of a `(lat, lon)` pair.
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($lat1:expr, $lon1:expr), ($lat2:expr, $lon2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($lat1, $lat2, $epsilon);
        $crate::assert_approx_eq!($lon1, $lon2, $epsilon);
    }};
}
