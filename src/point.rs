/// Represents a simple point in the Cartesian plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Point {
    /// The X value of the point.
    pub x: f64,
    /// The Y value of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new `Point` with the specified values.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
    /// Returns a point representing the origin of (0, 0).
    pub fn origin() -> Point {
        Point::new(0.0, 0.0)
    }
    pub fn tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_conversion_case() {
        let p = Point::new(1.0, 2.0);
        assert_eq!((1.0, 2.0), p.tuple());
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(Point::new(0.0, 0.0), Point::origin());
    }
}
