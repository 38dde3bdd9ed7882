use crate::enums::PhasorKind;

/// An opaque RGB color with 8-bit components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Color {
    /// The red component.
    pub r: u8,
    /// The green component.
    pub g: u8,
    /// The blue component.
    pub b: u8,
}

impl Color {
    /// Creates a new `Color` with the specified components.
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
    /// The default color for voltage phasors.
    pub const fn blue() -> Color {
        Color::new(0, 0, 255)
    }
    /// The default color for current phasors.
    pub const fn red() -> Color {
        Color::new(255, 0, 0)
    }
    /// Returns the default color for the given phasor kind.
    pub fn for_kind(kind: PhasorKind) -> Color {
        match kind {
            PhasorKind::Voltage => Color::blue(),
            PhasorKind::Current => Color::red(),
        }
    }
    pub fn tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}
