use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of fixed-point units per degree.
pub const COORDINATE_PRECISION: i32 = 10_000_000;

const UNDEFINED_COORDINATE: i32 = i32::MAX;

/// A coordinate pair in fixed-point 1e-7 degrees.
///
/// `x` is the longitude and `y` the latitude. A location that was never set
/// (or belongs to a deleted node) is *undefined*, which is different from
/// the valid location (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    x: i32,
    y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn undefined() -> Self {
        Self {
            x: UNDEFINED_COORDINATE,
            y: UNDEFINED_COORDINATE,
        }
    }

    /// Build a location from degrees, rounding to the nearest fixed-point unit.
    pub fn from_degrees(lon: f64, lat: f64) -> Self {
        Self {
            x: degrees_to_fixed(lon),
            y: degrees_to_fixed(lat),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn lon(&self) -> f64 {
        fixed_to_degrees(self.x)
    }

    pub fn lat(&self) -> f64 {
        fixed_to_degrees(self.y)
    }

    pub fn is_defined(&self) -> bool {
        self.x != UNDEFINED_COORDINATE || self.y != UNDEFINED_COORDINATE
    }

    /// Defined and inside the -180..180, -90..90 range.
    pub fn is_valid(&self) -> bool {
        let max_x = 180 * COORDINATE_PRECISION;
        let max_y = 90 * COORDINATE_PRECISION;
        self.is_defined()
            && (-max_x..=max_x).contains(&self.x)
            && (-max_y..=max_y).contains(&self.y)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::undefined()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(f, "({:.7},{:.7})", self.lon(), self.lat())
        } else {
            f.write_str("(undefined,undefined)")
        }
    }
}

fn degrees_to_fixed(degrees: f64) -> i32 {
    (degrees * COORDINATE_PRECISION as f64).round() as i32
}

fn fixed_to_degrees(value: i32) -> f64 {
    value as f64 / COORDINATE_PRECISION as f64
}

/// An axis-aligned box. Starts out undefined and grows with [`BoundingBox::extend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub bottom_left: Location,
    pub top_right: Location,
}

impl BoundingBox {
    pub fn new(bottom_left: Location, top_right: Location) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.bottom_left.is_defined() && self.top_right.is_defined()
    }

    /// Grow the box so that it contains `location`. Undefined locations are
    /// ignored.
    pub fn extend(&mut self, location: Location) -> &mut Self {
        if !location.is_defined() {
            return self;
        }
        if self.is_defined() {
            self.bottom_left = Location::new(
                self.bottom_left.x.min(location.x),
                self.bottom_left.y.min(location.y),
            );
            self.top_right = Location::new(
                self.top_right.x.max(location.x),
                self.top_right.y.max(location.y),
            );
        } else {
            self.bottom_left = location;
            self.top_right = location;
        }
        self
    }

    pub fn contains(&self, location: Location) -> bool {
        self.is_defined()
            && location.is_defined()
            && (self.bottom_left.x..=self.top_right.x).contains(&location.x)
            && (self.bottom_left.y..=self.top_right.y).contains(&location.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined() {
        let loc = Location::default();
        assert!(!loc.is_defined());
        assert!(!loc.is_valid());
        assert!(Location::new(0, 0).is_valid());
        assert_eq!(loc.to_string(), "(undefined,undefined)");
    }

    #[test]
    fn test_degrees() {
        let loc = Location::from_degrees(3.5, 4.7);
        assert_eq!(loc.x(), 35_000_000);
        assert_eq!(loc.y(), 47_000_000);
        assert!((loc.lon() - 3.5).abs() < 1e-9);
        assert!((loc.lat() - 4.7).abs() < 1e-9);
        assert!(!Location::from_degrees(181.0, 0.0).is_valid());
    }

    #[test]
    fn test_bounding_box() {
        let mut bbox = BoundingBox::default();
        assert!(!bbox.is_defined());
        bbox.extend(Location::new(10, 20))
            .extend(Location::new(-5, 30))
            .extend(Location::undefined());
        assert_eq!(bbox.bottom_left, Location::new(-5, 20));
        assert_eq!(bbox.top_right, Location::new(10, 30));
        assert!(bbox.contains(Location::new(0, 25)));
        assert!(!bbox.contains(Location::new(0, 31)));
    }
}
