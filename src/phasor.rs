use crate::color::Color;
use crate::enums::PhasorKind;
use crate::point::Point;

/// Represents a resolved phasor: a named directed line segment in absolute
/// plot coordinates.
///
/// The polar form is derived from the stored coordinates on demand so it can
/// never disagree with the geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Phasor {
    /// The unique identifier of the phasor within its diagram.
    pub name: String,
    /// The resolved start point.
    pub start: Point,
    /// The resolved end point.
    pub end: Point,
    /// The kind of quantity the phasor represents.
    pub kind: PhasorKind,
    /// The display color.
    pub color: Color,
    /// The offset applied to the name label, in plot units.
    pub label_offset: f64,
    /// The stroke width of the arrow, in pixels.
    pub arrow_width: u32,
}

impl Phasor {
    /// The length of the phasor.
    pub fn magnitude(&self) -> f64 {
        let (dx, dy) = self.delta();
        dx.hypot(dy)
    }
    /// The angle of the phasor in degrees, measured counter-clockwise from
    /// the positive X axis.
    pub fn angle_degrees(&self) -> f64 {
        let (dx, dy) = self.delta();
        dy.atan2(dx).to_degrees()
    }
    /// The midpoint of the segment; labels are anchored here.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
    pub(crate) fn delta(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn phasor(start: Point, end: Point) -> Phasor {
        Phasor {
            name: String::from("p"),
            start,
            end,
            kind: PhasorKind::Voltage,
            color: Color::blue(),
            label_offset: 0.1,
            arrow_width: 2,
        }
    }

    #[test]
    fn magnitude_is_segment_length() {
        let p = phasor(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert!(approx_eq!(f64, 5.0, p.magnitude()));
    }

    #[test]
    fn angle_is_measured_from_positive_x_axis() {
        let p = phasor(Point::origin(), Point::new(0.0, 2.0));
        assert!(approx_eq!(f64, 90.0, p.angle_degrees()));
        let p = phasor(Point::origin(), Point::new(-1.0, 0.0));
        assert!(approx_eq!(f64, 180.0, p.angle_degrees()));
    }

    #[test]
    fn midpoint_halves_the_segment() {
        let p = phasor(Point::new(2.0, 0.0), Point::new(4.0, 6.0));
        assert_eq!(Point::new(3.0, 3.0), p.midpoint());
    }
}
