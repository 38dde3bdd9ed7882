//! This crate provides the ability to create and render phasor diagrams:
//! labeled arrows representing sinusoidal electrical quantities (voltage,
//! current) drawn in the Cartesian plane, optionally chained so that one
//! phasor starts where a previously drawn phasor starts or ends.
//!
//! # Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ``` toml
//! [dependencies]
//! phasor = "0.1.0"
//! ```
//!
//! Or if you want [serde](https://github.com/serde-rs/serde) support, enable the `serialize` feature:
//!
//! ``` toml
//! [dependencies]
//! phasor = { version = "0.1.0", features = ["serialize"] }
//! ```
//!
//! > Note that `serde` support is intended to aid in debugging and since the serialized format is heavily
//! dependent on the layout of the structures, it may change at any time.
//!
//! # Examples
//!
//! Draw a source voltage and chain a line drop from its end:
//!
//! ``` rust
//! # fn ex() -> phasor::PhasorResult<()> {
//! use phasor::{PhasorDiagram, PhasorOptions, Reference};
//!
//! let mut diagram = PhasorDiagram::new();
//! diagram.draw_phasor("Vs", &PhasorOptions::polar(10.0, 0.0))?;
//! let vl = diagram.draw_phasor(
//!     "Vl",
//!     &PhasorOptions {
//!         start: Reference::from_end_of("Vs"),
//!         ..PhasorOptions::polar(2.0, 30.0)
//!     },
//! )?;
//! assert_eq!((10.0, 0.0), vl.start.tuple());
//! # Ok(())
//! # }
//! ```
//!
//! Save a diagram to disk:
//!
//! ``` rust,no_run
//! # fn ex() -> phasor::PhasorResult<()> {
//! use phasor::{PhasorDiagram, PhasorOptions};
//!
//! let mut diagram = PhasorDiagram::new();
//! diagram.draw_phasor("I", &PhasorOptions::polar(5.0, -30.0))?;
//! diagram.save("diagram.png")?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::doc_markdown)]

#[cfg(feature = "serialize")]
#[macro_use]
extern crate serde_derive;

pub mod enums;
pub use crate::enums::{PhasorKind, Reference, ReferencePoint};

mod color;
pub use crate::color::Color;

mod point;
pub use crate::point::Point;

mod phasor;
pub use crate::phasor::Phasor;

mod phasor_options;
pub use crate::phasor_options::PhasorOptions;

mod diagram_config;
pub use crate::diagram_config::DiagramConfig;

mod render_options;
pub use crate::render_options::RenderOptions;

mod diagram;
pub use crate::diagram::PhasorDiagram;

mod render;

mod phasor_error;
pub use crate::phasor_error::PhasorError;

mod phasor_result;
pub use crate::phasor_result::PhasorResult;
