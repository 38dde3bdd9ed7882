extern crate phasor;

#[cfg(test)]
#[allow(dead_code)]
pub mod helpers {
    use phasor::{PhasorDiagram, PhasorOptions, Reference};
    use std::path::PathBuf;

    /// Returns a per-process temp path so parallel test runs don't collide.
    pub fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("phasor-test-{}-{}", std::process::id(), name))
    }

    /// A source voltage with a line drop chained from its end.
    pub fn chained_diagram() -> PhasorDiagram {
        let mut diagram = PhasorDiagram::new();
        diagram
            .draw_phasor("Vs", &PhasorOptions::polar(10.0, 0.0))
            .unwrap();
        diagram
            .draw_phasor(
                "Vl",
                &PhasorOptions {
                    start: Reference::from_end_of("Vs"),
                    ..PhasorOptions::polar(2.0, 30.0)
                },
            )
            .unwrap();
        diagram
    }
}
