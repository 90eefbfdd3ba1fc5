use thiserror::Error;

/// Errors raised by the checked variants of the geodetic operations.
///
/// The core operations are total; these only come out of the strict
/// and validating entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Planar distance requested between points in different 6-degree zones.
    /// Carries zone numbers, the `dh` encoded into projected `y`.
    #[error("points lie in different 6-degree zones ({first_zone} and {second_zone})")]
    ZoneMismatch { first_zone: i64, second_zone: i64 },

    #[error("coordinate out of range: lon {lon}, lat {lat}")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("search radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

pub type Result<T> = std::result::Result<T, GeoError>;
