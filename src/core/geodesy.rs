//! Rhumb-line (constant-bearing, Mercator-based) navigation math.
//!
//! Everything here stays in the rhumb model on a sphere of
//! [`EARTH_RADIUS_KM`]; great-circle precision is out of scope at route
//! corridor scale, and mixing models would break the grid/intersection
//! consistency.

use crate::core::constants::{EARTH_RADIUS_KM, FLOAT_TOLERANCE};
use crate::util::coord::LatLng;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Normalizes a heading in radians to degrees in `[0, 360)`.
pub fn normalize_bearing(rad: f64) -> f64 {
    (rad.to_degrees() + 360.0) % 360.0
}

/// The point reached by travelling `distance_km` from `origin` on a
/// constant bearing of `bearing_deg`.
///
/// A projected latitude past a pole is reflected back. When the Mercator
/// latitude delta vanishes (east-west travel), the longitude scaling
/// factor falls back to `cos(latitude)` instead of dividing by the
/// (near-)zero delta.
pub fn rhumb_destination(origin: &LatLng, bearing_deg: f64, distance_km: f64) -> LatLng {
    // Angular distance covered on the earth's surface.
    let d = distance_km / EARTH_RADIUS_KM;
    let lat1 = origin.lat_rad();
    let lng1 = origin.lng_rad();
    let bearing = bearing_deg.to_radians();

    let mut lat2 = lat1 + d * bearing.cos();
    let d_lat = lat2 - lat1;
    let d_phi = ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln();
    let q = if d_phi.abs() > FLOAT_TOLERANCE {
        d_lat / d_phi
    } else {
        lat1.cos()
    };
    let d_lng = d * bearing.sin() / q;

    if lat2.abs() > FRAC_PI_2 {
        lat2 = if lat2 > 0.0 { PI - lat2 } else { -(PI - lat2) };
    }
    let lng2 = (lng1 + d_lng + PI).rem_euclid(2.0 * PI) - PI;

    LatLng::new(lat2.to_degrees(), lng2.to_degrees())
}

/// The constant bearing, in degrees `[0, 360)`, of the rhumb line from
/// `from` to `to`.
pub fn rhumb_bearing(from: &LatLng, to: &LatLng) -> f64 {
    let mut d_lng = (to.lng - from.lng).to_radians();
    let d_phi = ((to.lat_rad() / 2.0 + FRAC_PI_4).tan() / (from.lat_rad() / 2.0 + FRAC_PI_4).tan())
        .ln();
    if d_lng.abs() > PI {
        d_lng = if d_lng > 0.0 {
            -(2.0 * PI - d_lng)
        } else {
            2.0 * PI + d_lng
        };
    }
    normalize_bearing(d_lng.atan2(d_phi))
}

/// The point where the rhumb line leaving `start` at `bearing_deg` reaches
/// the parallel `lat_deg`.
pub fn rhumb_lat_crossing(start: &LatLng, bearing_deg: f64, lat_deg: f64) -> LatLng {
    let distance_km =
        EARTH_RADIUS_KM * (lat_deg.to_radians() - start.lat_rad()) / bearing_deg.to_radians().cos();
    rhumb_destination(start, bearing_deg, distance_km)
}
