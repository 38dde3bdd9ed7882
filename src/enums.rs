use crate::{PhasorError, PhasorResult};
use std::fmt;

/// The kind of electrical quantity a phasor represents.  Only affects the
/// default display color.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum PhasorKind {
    Voltage,
    Current,
}

impl PhasorKind {
    pub fn from(val: String) -> PhasorResult<PhasorKind> {
        match &*val.to_lowercase() {
            "voltage" => Ok(PhasorKind::Voltage),
            "current" => Ok(PhasorKind::Current),
            _ => Err(PhasorError::InvalidParameters(format!(
                "unknown phasor kind '{}'",
                val
            ))),
        }
    }
}

impl fmt::Display for PhasorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhasorKind::Voltage => write!(formatter, "voltage"),
            PhasorKind::Current => write!(formatter, "current"),
        }
    }
}

/// Which end of a referenced phasor to chain from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ReferencePoint {
    Start,
    End,
}

impl ReferencePoint {
    pub fn from(val: String) -> PhasorResult<ReferencePoint> {
        match &*val.to_lowercase() {
            "start" => Ok(ReferencePoint::Start),
            "end" => Ok(ReferencePoint::End),
            _ => Err(PhasorError::InvalidParameters(format!(
                "unknown reference point '{}'",
                val
            ))),
        }
    }
}

impl fmt::Display for ReferencePoint {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReferencePoint::Start => write!(formatter, "start"),
            ReferencePoint::End => write!(formatter, "end"),
        }
    }
}

/// How a phasor's start point is resolved: either the absolute coordinates
/// supplied with it, or the start or end of a previously drawn phasor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Reference {
    /// Use the supplied start coordinates as-is.
    Absolute,
    /// Chain from a previously drawn phasor.
    Named {
        /// The name of the referenced phasor.
        name: String,
        /// Which end of the referenced phasor to start from.
        point: ReferencePoint,
    },
}

impl Reference {
    /// Chains from the end point of the named phasor.
    pub fn from_end_of(name: &str) -> Reference {
        Reference::Named {
            name: name.to_string(),
            point: ReferencePoint::End,
        }
    }
    /// Chains from the start point of the named phasor.
    pub fn from_start_of(name: &str) -> Reference {
        Reference::Named {
            name: name.to_string(),
            point: ReferencePoint::Start,
        }
    }
}

impl Default for Reference {
    fn default() -> Self {
        Reference::Absolute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_phasor_kind() {
        assert_eq!(
            PhasorKind::Voltage,
            PhasorKind::from(String::from("Voltage")).unwrap()
        );
        assert_eq!(
            PhasorKind::Current,
            PhasorKind::from(String::from("current")).unwrap()
        );
        assert!(PhasorKind::from(String::from("impedance")).is_err());
    }

    #[test]
    fn parse_reference_point() {
        assert_eq!(
            ReferencePoint::Start,
            ReferencePoint::from(String::from("start")).unwrap()
        );
        assert!(ReferencePoint::from(String::from("middle")).is_err());
    }
}
