pub mod point;
pub mod zone;

pub use point::{GeoPoint, PlanarPoint};
pub use zone::Zone;
