use crate::color::Color;
use crate::enums::{PhasorKind, Reference};

/// The full set of parameters recognized when drawing a phasor, with their
/// defaults.
///
/// A phasor's geometry can be given two ways:
///
/// 1. Polar: `magnitude` and `angle_degrees`, applied from the resolved
///    start point.
/// 2. Cartesian: explicit `end_x` and `end_y`.
///
/// If both forms are fully specified the Cartesian form takes precedence and
/// `magnitude`/`angle_degrees` are ignored.  A half-specified form (for
/// example `end_x` without `end_y`) is rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct PhasorOptions {
    /// The length of the phasor.  Used with `angle_degrees`.
    pub magnitude: Option<f64>,
    /// The angle in degrees from the positive X axis.  Used with `magnitude`.
    pub angle_degrees: Option<f64>,
    /// How the start point is resolved.
    pub start: Reference,
    /// The starting X coordinate.  Only used with `Reference::Absolute`.
    pub start_x: f64,
    /// The starting Y coordinate.  Only used with `Reference::Absolute`.
    pub start_y: f64,
    /// The ending X coordinate.  If given with `end_y`, overrides the polar
    /// form.
    pub end_x: Option<f64>,
    /// The ending Y coordinate.  If given with `end_x`, overrides the polar
    /// form.
    pub end_y: Option<f64>,
    /// The kind of quantity; determines the color when `color` is unset.
    pub kind: PhasorKind,
    /// The display color.  Defaults from `kind` when unset.
    pub color: Option<Color>,
    /// The offset applied to the name label, in plot units.
    pub label_offset: f64,
    /// The stroke width of the arrow, in pixels.
    pub arrow_width: u32,
}

impl Default for PhasorOptions {
    fn default() -> Self {
        PhasorOptions {
            magnitude: None,
            angle_degrees: None,
            start: Reference::Absolute,
            start_x: 0.0,
            start_y: 0.0,
            end_x: None,
            end_y: None,
            kind: PhasorKind::Voltage,
            color: None,
            label_offset: 0.1,
            arrow_width: 2,
        }
    }
}

impl PhasorOptions {
    /// Options for a phasor given in polar form from the origin.
    pub fn polar(magnitude: f64, angle_degrees: f64) -> PhasorOptions {
        PhasorOptions {
            magnitude: Some(magnitude),
            angle_degrees: Some(angle_degrees),
            ..Default::default()
        }
    }
    /// Options for a phasor given by explicit end coordinates.
    pub fn cartesian(end_x: f64, end_y: f64) -> PhasorOptions {
        PhasorOptions {
            end_x: Some(end_x),
            end_y: Some(end_y),
            ..Default::default()
        }
    }
}
