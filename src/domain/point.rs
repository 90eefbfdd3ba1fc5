use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};

use super::Zone;

/// A geographic coordinate in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Create a point without any range checks
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Create a point, rejecting non-finite values and anything outside
    /// [-180, 180] longitude or [-90, 90] latitude
    pub fn validated(lon: f64, lat: f64) -> Result<Self> {
        let in_range = lon.is_finite()
            && lat.is_finite()
            && (-180.0..=180.0).contains(&lon)
            && (-90.0..=90.0).contains(&lat);

        if !in_range {
            return Err(GeoError::InvalidCoordinate { lon, lat });
        }
        Ok(Self::new(lon, lat))
    }

    /// The 6-degree zone this point projects into
    pub fn zone(&self) -> Zone {
        Zone::of_longitude(self.lon)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(p: geo::Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::coord! { x: p.lon, y: p.lat }
    }
}

/// A Gauss-Krüger planar coordinate in meters.
///
/// `x` is the northing-like axis and `y` the easting-like axis, which
/// carries a 500 km false easting plus the zone number in millions.
/// Points from different zones are not comparable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another planar point
    pub fn distance_to(&self, other: &PlanarPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Zone number (`dh`) encoded in the millions of `y`
    pub fn zone_number(&self) -> i64 {
        ((self.y - 500_000.0) / 1_000_000.0).round() as i64
    }
}
