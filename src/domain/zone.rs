/// A 6-degree longitudinal band, indexed by `floor(lon / 6)`.
///
/// The index saturates at the `i64` range for absurd longitudes and is
/// only used to tell zones apart. Projection works on [`Zone::index_f64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zone {
    pub index: i64,
}

impl Zone {
    /// Width of a zone in degrees of longitude
    pub const WIDTH_DEG: f64 = 6.0;

    pub fn of_longitude(lon: f64) -> Self {
        Self {
            index: Self::index_f64(lon) as i64,
        }
    }

    /// Unsaturated zone index `floor(lon / 6)`
    pub fn index_f64(lon: f64) -> f64 {
        (lon / Self::WIDTH_DEG).floor()
    }

    /// Zone number as written into projected coordinates (index + 1)
    pub fn number(&self) -> i64 {
        self.index.saturating_add(1)
    }

    /// Central meridian of the zone in degrees
    pub fn central_meridian(&self) -> f64 {
        3.0 + 6.0 * self.index as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_of_longitude() {
        let z = Zone::of_longitude(114.5);
        assert_eq!(z.index, 19);
        assert_eq!(z.number(), 20);
        assert_eq!(z.central_meridian(), 117.0);
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(Zone::of_longitude(0.0).index, 0);
        assert_eq!(Zone::of_longitude(6.0).index, 1);
        assert_eq!(Zone::of_longitude(5.999).index, 0);
    }

    #[test]
    fn test_negative_longitude_floors() {
        let z = Zone::of_longitude(-0.5);
        assert_eq!(z.index, -1);
        assert_eq!(z.number(), 0);
        assert_eq!(z.central_meridian(), -3.0);

        assert_eq!(Zone::of_longitude(-122.4).index, -21);
    }

    #[test]
    fn test_huge_longitude_saturates() {
        let east = Zone::of_longitude(1e300);
        assert_eq!(east.index, i64::MAX);
        assert_eq!(east.number(), i64::MAX);
        assert!(east.central_meridian().is_finite());

        let west = Zone::of_longitude(-1e300);
        assert_eq!(west.index, i64::MIN);
        assert_eq!(west.number(), i64::MIN + 1);
    }
}
