use crate::phasor_error::PhasorError;

/// The common result type used by this crate.
pub type PhasorResult<T> = Result<T, PhasorError>;
