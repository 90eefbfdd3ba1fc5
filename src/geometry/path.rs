use geo::LineString;

use crate::domain::GeoPoint;

use super::haversine::haversine_distance;

/// Haversine length of a polyline in meters.
///
/// Each segment is rounded on its own, as `haversine_distance` does, so
/// the sum can differ from a single end-to-end call in the last digits.
pub fn path_length(points: &[GeoPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let line: LineString<f64> = points.iter().map(|&p| geo::Coord::from(p)).collect();

    line.lines()
        .map(|seg| haversine_distance(seg.start.x, seg.start.y, seg.end.x, seg.end.y))
        .sum()
}
