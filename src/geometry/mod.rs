pub mod distance;
pub mod envelope;
pub mod haversine;
pub mod path;
pub mod projection;
pub mod search;

pub use distance::{ZonePolicy, planar_distance, try_planar_distance};
pub use envelope::Envelope;
pub use haversine::{degrees_to_meters, haversine_distance, meters_per_degree, meters_to_degrees};
pub use path::path_length;
pub use projection::{project, project_point, project_points};
pub use search::{Hit, SearchArea};
