//! Point search around a center with a metric radius.
//!
//! The radius is turned into degrees of equatorial longitude and used as
//! a circular buffer in lon/lat space, so away from the equator the
//! buffer is narrower on the ground east-west than north-south. Hits are
//! reported with their haversine distance.

use serde::Serialize;

use crate::domain::GeoPoint;
use crate::error::{GeoError, Result};

use super::envelope::Envelope;
use super::haversine::{haversine_distance, meters_to_degrees};

/// A degree-space buffer around a point
#[derive(Debug, Clone, Copy)]
pub struct SearchArea {
    center: GeoPoint,
    radius_m: f64,
    radius_deg: f64,
}

/// A candidate that fell inside a search area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit {
    /// Position of the point in the candidate slice
    pub index: usize,
    pub point: GeoPoint,
    /// Haversine distance from the center in meters
    pub distance_m: f64,
}

impl SearchArea {
    /// Create a search area of `radius_m` meters around `center`
    pub fn new(center: GeoPoint, radius_m: f64) -> Result<Self> {
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(GeoError::InvalidRadius(radius_m));
        }

        let radius_deg = meters_to_degrees(radius_m);
        log::debug!(
            "search area around ({}, {}): {} m = {} deg",
            center.lon,
            center.lat,
            radius_m,
            radius_deg
        );

        Ok(Self {
            center,
            radius_m,
            radius_deg,
        })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_m
    }

    pub fn radius_degrees(&self) -> f64 {
        self.radius_deg
    }

    /// Bounding box of the buffer
    pub fn envelope(&self) -> Envelope {
        Envelope::around(&self.center, self.radius_deg)
    }

    /// Whether `p` lies inside the buffer (boundary included)
    pub fn contains(&self, p: &GeoPoint) -> bool {
        let dlon = p.lon - self.center.lon;
        let dlat = p.lat - self.center.lat;
        (dlon * dlon + dlat * dlat).sqrt() <= self.radius_deg
    }

    /// All candidates inside the buffer, nearest first
    pub fn filter(&self, candidates: &[GeoPoint]) -> Vec<Hit> {
        let envelope = self.envelope();

        let mut hits: Vec<Hit> = candidates
            .iter()
            .enumerate()
            .filter(|(_, p)| envelope.contains(p) && self.contains(p))
            .map(|(index, p)| Hit {
                index,
                point: *p,
                distance_m: haversine_distance(self.center.lon, self.center.lat, p.lon, p.lat),
            })
            .collect();

        hits.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
        log::debug!("{} of {} candidates in range", hits.len(), candidates.len());
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxi_center() -> GeoPoint {
        GeoPoint::new(118.9, 31.23)
    }

    #[test]
    fn test_radius_conversion() {
        let area = SearchArea::new(taxi_center(), 1000.0).unwrap();
        assert!((area.radius_degrees() - 0.008983152840652412).abs() < 1e-15);
        assert_eq!(area.radius_meters(), 1000.0);
    }

    #[test]
    fn test_invalid_radius() {
        assert_eq!(
            SearchArea::new(taxi_center(), 0.0).unwrap_err(),
            GeoError::InvalidRadius(0.0)
        );
        assert!(SearchArea::new(taxi_center(), -5.0).is_err());
        assert!(SearchArea::new(taxi_center(), f64::NAN).is_err());
    }

    #[test]
    fn test_envelope_of_area() {
        let area = SearchArea::new(taxi_center(), 1000.0).unwrap();
        let env = area.envelope();
        assert!((env.width() - 2.0 * area.radius_degrees()).abs() < 1e-12);
        assert!(env.contains(&taxi_center()));
    }

    #[test]
    fn test_contains_is_circular() {
        let area = SearchArea::new(taxi_center(), 1000.0).unwrap();
        let r = area.radius_degrees();
        assert!(area.contains(&GeoPoint::new(118.9 + r * 0.99, 31.23)));
        // Envelope corner is outside the circle
        assert!(!area.contains(&GeoPoint::new(118.9 + r * 0.9, 31.23 + r * 0.9)));
    }

    #[test]
    fn test_filter_orders_nearest_first() {
        let area = SearchArea::new(taxi_center(), 1000.0).unwrap();
        let candidates = vec![
            GeoPoint::new(118.905, 31.23),
            GeoPoint::new(119.5, 31.23),
            GeoPoint::new(118.901, 31.231),
            GeoPoint::new(118.9, 31.25),
        ];

        let hits = area.filter(&candidates);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 2);
        assert_eq!(hits[1].index, 0);
        assert!(hits[0].distance_m < hits[1].distance_m);
        assert!(hits[1].distance_m < 1000.0);
    }

    #[test]
    fn test_filter_empty() {
        let area = SearchArea::new(taxi_center(), 1000.0).unwrap();
        assert!(area.filter(&[]).is_empty());
    }
}
