use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PhasorError {
    IoError(io::Error),
    ReferenceNotFound(String),
    NotFound(String),
    InvalidParameters(String),
    RenderError(String),
}

impl From<io::Error> for PhasorError {
    fn from(ioe: io::Error) -> PhasorError {
        PhasorError::IoError(ioe)
    }
}

impl fmt::Display for PhasorError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PhasorError::IoError(ref e) => write!(formatter, "{}", e),
            PhasorError::ReferenceNotFound(ref name) => write!(
                formatter,
                "the referenced phasor '{}' does not exist",
                name
            ),
            PhasorError::NotFound(ref name) => {
                write!(formatter, "no phasor named '{}' has been drawn", name)
            }
            PhasorError::InvalidParameters(ref s) => write!(formatter, "{}", s),
            PhasorError::RenderError(ref s) => {
                write!(formatter, "the plotting backend reported an error: {}", s)
            }
        }
    }
}

impl error::Error for PhasorError {
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            PhasorError::IoError(ref e) => Some(e),
            _ => None,
        }
    }
}
