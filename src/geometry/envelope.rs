use serde::Serialize;

use crate::domain::GeoPoint;

/// Axis-aligned bounding box in lon/lat degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Envelope {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Envelope {
    /// Square envelope of half-width `radius_deg` around `center`
    pub fn around(center: &GeoPoint, radius_deg: f64) -> Self {
        Self {
            min_lon: center.lon - radius_deg,
            max_lon: center.lon + radius_deg,
            min_lat: center.lat - radius_deg,
            max_lat: center.lat + radius_deg,
        }
    }

    /// Create an envelope from a set of points
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut env = Self::around(first, 0.0);
        env.expand(&points[1..]);
        Some(env)
    }

    /// Expand the envelope to include another set of points
    pub fn expand(&mut self, points: &[GeoPoint]) {
        for p in points {
            self.min_lon = self.min_lon.min(p.lon);
            self.max_lon = self.max_lon.max(p.lon);
            self.min_lat = self.min_lat.min(p.lat);
            self.max_lat = self.max_lat.max(p.lat);
        }
    }

    pub fn contains(&self, p: &GeoPoint) -> bool {
        (self.min_lon..=self.max_lon).contains(&p.lon)
            && (self.min_lat..=self.max_lat).contains(&p.lat)
    }

    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_from_points() {
        let points = vec![
            GeoPoint::new(118.0, 30.0),
            GeoPoint::new(119.0, 32.0),
            GeoPoint::new(118.5, 31.0),
        ];
        let env = Envelope::from_points(&points).unwrap();

        assert_eq!(env.min_lon, 118.0);
        assert_eq!(env.max_lon, 119.0);
        assert_eq!(env.min_lat, 30.0);
        assert_eq!(env.max_lat, 32.0);
        assert_eq!(env.width(), 1.0);
        assert_eq!(env.height(), 2.0);
    }

    #[test]
    fn test_envelope_empty() {
        assert!(Envelope::from_points(&[]).is_none());
    }

    #[test]
    fn test_envelope_around_and_contains() {
        let env = Envelope::around(&GeoPoint::new(118.9, 31.23), 0.01);
        assert!(env.contains(&GeoPoint::new(118.9, 31.23)));
        assert!(env.contains(&GeoPoint::new(118.909, 31.221)));
        assert!(!env.contains(&GeoPoint::new(118.92, 31.23)));
    }
}
