use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, Zone};
use crate::error::{GeoError, Result};

use super::projection::project;

/// What to do when a planar distance spans two 6-degree zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZonePolicy {
    /// Return the (meaningless) distance and log a warning
    #[default]
    Warn,
    /// Refuse with `GeoError::ZoneMismatch`
    Strict,
}

impl ZonePolicy {
    /// Planar distance between two points under this policy
    pub fn planar_distance(self, a: &GeoPoint, b: &GeoPoint) -> Result<f64> {
        match self {
            ZonePolicy::Warn => Ok(planar_distance(a.lon, a.lat, b.lon, b.lat)),
            ZonePolicy::Strict => try_planar_distance(a.lon, a.lat, b.lon, b.lat),
        }
    }
}

/// Euclidean distance between the Gauss-Krüger projections of two points.
///
/// Only meaningful inside one zone. Across zones the zone offset baked
/// into `y` inflates the result by about a million meters per zone; the
/// value is still returned and a warning is logged.
pub fn planar_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (first, second) = (Zone::of_longitude(lon1), Zone::of_longitude(lon2));
    if first != second {
        log::warn!(
            "planar distance across zones {} and {} is not meaningful",
            first.number(),
            second.number()
        );
    }

    project(lon1, lat1).distance_to(&project(lon2, lat2))
}

/// Same as [`planar_distance`] but fails when the zones differ
pub fn try_planar_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> Result<f64> {
    let (first, second) = (Zone::of_longitude(lon1), Zone::of_longitude(lon2));
    if first != second {
        return Err(GeoError::ZoneMismatch {
            first_zone: first.number(),
            second_zone: second.number(),
        });
    }

    Ok(project(lon1, lat1).distance_to(&project(lon2, lat2)))
}
