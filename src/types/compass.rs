use std::fmt;
use std::fmt::{Display, Formatter};

/// One of the eight principal compass points.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

const POINTS: [CompassPoint; 8] = [
    CompassPoint::N,
    CompassPoint::NE,
    CompassPoint::E,
    CompassPoint::SE,
    CompassPoint::S,
    CompassPoint::SW,
    CompassPoint::W,
    CompassPoint::NW,
];

impl CompassPoint {
    /// Snaps a bearing to the compass point whose 45° sector contains it.
    ///
    /// Sectors are half-open and centred on each point, so north covers
    /// `[337.5, 360) ∪ [0, 22.5)` and `22.5` already belongs to NE. The
    /// bearing is wrapped into `[0, 360)` first. Returns `None` for NaN or
    /// infinite input.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        // rem_euclid can round tiny negative bearings up to exactly 360.
        let wrapped = degrees.rem_euclid(360.0) % 360.0;
        let sector = ((wrapped + 22.5) / 45.0).floor() as usize % POINTS.len();
        Some(POINTS[sector])
    }

    /// Centre bearing of the sector.
    pub fn degrees(self) -> f64 {
        match self {
            CompassPoint::N => 0.0,
            CompassPoint::NE => 45.0,
            CompassPoint::E => 90.0,
            CompassPoint::SE => 135.0,
            CompassPoint::S => 180.0,
            CompassPoint::SW => 225.0,
            CompassPoint::W => 270.0,
            CompassPoint::NW => 315.0,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl Display for CompassPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_wraps_around() {
        assert_eq!(CompassPoint::from_degrees(0.0), Some(CompassPoint::N));
        assert_eq!(CompassPoint::from_degrees(359.0), Some(CompassPoint::N));
        assert_eq!(CompassPoint::from_degrees(337.5), Some(CompassPoint::N));
        assert_eq!(CompassPoint::from_degrees(22.49), Some(CompassPoint::N));
    }

    #[test]
    fn test_sector_lower_bounds_are_inclusive() {
        assert_eq!(CompassPoint::from_degrees(22.5), Some(CompassPoint::NE));
        assert_eq!(CompassPoint::from_degrees(44.0), Some(CompassPoint::NE));
        assert_eq!(CompassPoint::from_degrees(67.5), Some(CompassPoint::E));
        assert_eq!(CompassPoint::from_degrees(202.5), Some(CompassPoint::SW));
        assert_eq!(CompassPoint::from_degrees(337.49), Some(CompassPoint::NW));
    }

    #[test]
    fn test_out_of_range_bearings_wrap() {
        assert_eq!(CompassPoint::from_degrees(360.0), Some(CompassPoint::N));
        assert_eq!(CompassPoint::from_degrees(450.0), Some(CompassPoint::E));
        assert_eq!(CompassPoint::from_degrees(-90.0), Some(CompassPoint::W));
    }

    #[test]
    fn test_non_finite_bearings() {
        assert_eq!(CompassPoint::from_degrees(f64::NAN), None);
        assert_eq!(CompassPoint::from_degrees(f64::INFINITY), None);
    }

    #[test]
    fn test_centres_snap_to_themselves() {
        for point in POINTS {
            assert_eq!(CompassPoint::from_degrees(point.degrees()), Some(point));
        }
    }
}
