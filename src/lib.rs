//! gkdist - Gauss-Krüger projection and ground distance utilities for WGS84 coordinates

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;

pub use domain::{GeoPoint, PlanarPoint, Zone};
pub use error::GeoError;
pub use geometry::{
    Envelope, Hit, SearchArea, ZonePolicy, degrees_to_meters, haversine_distance,
    meters_to_degrees, path_length, planar_distance, project, try_planar_distance,
};
