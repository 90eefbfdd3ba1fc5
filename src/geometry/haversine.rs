//! Great-circle distance on a sphere of the WGS84 semi-major radius, and
//! conversion between metric distances and degrees of equatorial
//! longitude.

use std::f64::consts::PI;

use super::projection::rad;

/// WGS84 semi-major axis used as the sphere radius, in meters
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Haversine distance in meters, rounded to 4 decimal places
pub fn haversine_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let rad_lat1 = rad(lat1);
    let rad_lat2 = rad(lat2);
    let a = rad_lat1 - rad_lat2;
    let b = (lon1 - lon2) * PI / 180.0;

    let half_a = (a / 2.0).sin();
    let half_b = (b / 2.0).sin();
    let s = 2.0
        * (half_a * half_a + rad_lat1.cos() * rad_lat2.cos() * half_b * half_b)
            .sqrt()
            .asin();

    round_to_ten_thousandths(s * EARTH_RADIUS)
}

/// Scale by 10000, round half up, scale back
fn round_to_ten_thousandths(meters: f64) -> f64 {
    (meters * 10000.0 + 0.5).floor() / 10000.0
}

/// Length in meters of one degree of longitude along the equator
pub fn meters_per_degree() -> f64 {
    haversine_distance(0.0, 0.0, 1.0, 0.0)
}

/// Express a metric distance as degrees of longitude at the equator
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / meters_per_degree()
}

/// Inverse of [`meters_to_degrees`]
pub fn degrees_to_meters(degrees: f64) -> f64 {
    degrees * meters_per_degree()
}
