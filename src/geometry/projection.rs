use std::f64::consts::PI;

use crate::domain::{GeoPoint, PlanarPoint, Zone};

/// False easting added to every projected `y`, in meters
pub const FALSE_EASTING: f64 = 500_000.0;

/// Multiplier that encodes the zone number into `y`
pub const ZONE_OFFSET: f64 = 1_000_000.0;

/// Degrees to radians, kept as `deg * PI / 180` so results match the
/// historical implementation to the last digit
#[inline]
pub(crate) fn rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Project a WGS84 longitude/latitude into Gauss-Krüger planar meters.
///
/// Uses a truncated series on the Krassovsky ellipsoid within the
/// 6-degree zone `floor(lon / 6)`. The zone number is added to `y` in
/// millions on top of the 500 km false easting, so `y` is only
/// comparable between points of the same zone.
///
/// Total over all finite inputs: longitudes far outside [-180, 180]
/// just land in a zone with a large or negative index.
///
/// # Returns
/// * `PlanarPoint` with `x` northing-like and `y` easting-like
pub fn project(lon: f64, lat: f64) -> PlanarPoint {
    let n = Zone::index_f64(lon);
    let dh = n + 1.0;
    let l2 = 3.0 + 6.0 * n;
    let l1 = lon - l2;

    let t1 = rad(lat);
    let t2 = rad(l1);
    let t2_2 = t2 * t2;
    let t2_3 = t2_2 * t2;
    let t2_4 = t2_2 * t2_2;
    let t2_5 = t2_4 * t2;

    let sin2 = (2.0 * t1).sin();
    let sin4 = (4.0 * t1).sin();

    let x = 6367558.497 * t1
        + (1597237.956 * t2_2 + 268563.280 * t2_4) * sin2
        + (-1340.831 * t2_2 + 201450.536 * t2_4) * sin4
        - 16036.480 * sin2
        + 16.828 * sin4;

    let cos1 = t1.cos();
    let cos3 = (3.0 * t1).cos();
    let cos5 = (5.0 * t1).cos();

    let y = (6383594.975 * t2 + 535998.795 * t2_3 + 54206.791 * t2_5) * cos1
        + (-5356.713 * t2 + 534204.967 * t2_3 + 134966.691 * t2_5) * cos3
        + (6.744 * t2 + 81276.496 * t2_5) * cos5
        + FALSE_EASTING
        + dh * ZONE_OFFSET;

    log::trace!("project({}, {}) -> ({}, {}) in zone {}", lon, lat, x, y, dh);

    PlanarPoint::new(x, y)
}

/// Project a `GeoPoint`
pub fn project_point(point: &GeoPoint) -> PlanarPoint {
    project(point.lon, point.lat)
}

/// Project a slice of points
pub fn project_points(points: &[GeoPoint]) -> Vec<PlanarPoint> {
    points.iter().map(project_point).collect()
}
