use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::{BitMapBackend, DrawingArea, DrawingBackend, IntoDrawingArea, SVGBackend};

use crate::color::Color;
use crate::diagram_config::DiagramConfig;
use crate::enums::{Reference, ReferencePoint};
use crate::phasor::Phasor;
use crate::phasor_options::PhasorOptions;
use crate::point::Point;
use crate::render::render_diagram;
use crate::render_options::RenderOptions;
use crate::{PhasorError, PhasorResult};

/// Represents a phasor diagram: a named registry of resolved phasors and the
/// figure they are drawn on.
///
/// Phasors are stored in first-draw order; re-drawing a name overwrites the
/// stored phasor but keeps its position in the draw order.
pub struct PhasorDiagram {
    /// Figure-level settings.
    pub config: DiagramConfig,
    phasors: HashMap<String, Phasor>,
    order: Vec<String>,
}

impl Default for PhasorDiagram {
    fn default() -> Self {
        PhasorDiagram::new()
    }
}

impl PhasorDiagram {
    pub fn new() -> Self {
        PhasorDiagram::with_config(DiagramConfig::default())
    }
    pub fn with_config(config: DiagramConfig) -> Self {
        PhasorDiagram {
            config,
            phasors: HashMap::new(),
            order: vec![],
        }
    }
    /// Resolves the given options to absolute coordinates, stores the result
    /// under `name` (overwriting any prior phasor of the same name), and
    /// returns the resolved phasor.
    ///
    /// The start point is either `(start_x, start_y)` as given, or the start
    /// or end of a previously drawn phasor when `start` is
    /// `Reference::Named`.  The end point is `(end_x, end_y)` when both are
    /// given, otherwise it is computed from `magnitude` and `angle_degrees`.
    ///
    /// A failed resolution leaves the registry untouched.
    pub fn draw_phasor(&mut self, name: &str, options: &PhasorOptions) -> PhasorResult<Phasor> {
        let start = self.resolve_start(options)?;
        let end = resolve_end(start, options)?;
        let phasor = Phasor {
            name: name.to_string(),
            start,
            end,
            kind: options.kind,
            color: options
                .color
                .unwrap_or_else(|| Color::for_kind(options.kind)),
            label_offset: options.label_offset,
            arrow_width: options.arrow_width,
        };
        if !self.phasors.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.phasors.insert(name.to_string(), phasor.clone());
        Ok(phasor)
    }
    /// Returns the phasor previously drawn under `name`.
    pub fn get_phasor(&self, name: &str) -> PhasorResult<&Phasor> {
        self.phasors
            .get(name)
            .ok_or_else(|| PhasorError::NotFound(name.to_string()))
    }
    /// Returns an iterator over all drawn phasors, in draw order.
    pub fn phasors(&self) -> impl Iterator<Item = &Phasor> {
        self.order.iter().filter_map(move |name| self.phasors.get(name))
    }
    /// Removes all drawn phasors.
    pub fn clear(&mut self) {
        self.phasors.clear();
        self.order.clear();
    }
    /// Draws the diagram onto the given plotting area.
    pub fn render<DB>(
        &self,
        area: &DrawingArea<DB, Shift>,
        options: &RenderOptions,
    ) -> PhasorResult<()>
    where
        DB: DrawingBackend,
    {
        render_diagram(self, area, options)
    }
    /// Renders the diagram to an in-memory RGB image at the configured
    /// figure size.  The returned buffer holds `3 * width * height` bytes in
    /// row-major order.
    pub fn render_to_bitmap(&self, options: &RenderOptions) -> PhasorResult<Vec<u8>> {
        let (width, height) = (self.config.width, self.config.height);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let area = BitMapBackend::with_buffer(&mut buffer, (width, height))
                .into_drawing_area();
            render_diagram(self, &area, options)?;
            area.present()
                .map_err(|e| PhasorError::RenderError(e.to_string()))?;
        }
        Ok(buffer)
    }
    /// Saves the diagram to disk with default render options.  The image
    /// format is chosen by the file extension; `png` and `svg` are
    /// supported.
    pub fn save(&self, file_name: &str) -> PhasorResult<()> {
        self.save_with_options(file_name, &RenderOptions::default())
    }
    /// Saves the diagram to disk.  The image format is chosen by the file
    /// extension; `png` and `svg` are supported.
    pub fn save_with_options(&self, file_name: &str, options: &RenderOptions) -> PhasorResult<()> {
        let path = Path::new(file_name);
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match &*extension {
            "png" => {
                // surface file creation problems as real I/O errors; the
                // backend only reports them as opaque draw failures
                File::create(path)?;
                let area = BitMapBackend::new(path, (self.config.width, self.config.height))
                    .into_drawing_area();
                render_diagram(self, &area, options)?;
                area.present()
                    .map_err(|e| PhasorError::RenderError(e.to_string()))
            }
            "svg" => {
                File::create(path)?;
                let area = SVGBackend::new(path, (self.config.width, self.config.height))
                    .into_drawing_area();
                render_diagram(self, &area, options)?;
                area.present()
                    .map_err(|e| PhasorError::RenderError(e.to_string()))
            }
            _ => Err(PhasorError::InvalidParameters(format!(
                "unsupported image format '{}'; expected 'png' or 'svg'",
                extension
            ))),
        }
    }
    fn resolve_start(&self, options: &PhasorOptions) -> PhasorResult<Point> {
        match options.start {
            Reference::Absolute => Ok(Point::new(options.start_x, options.start_y)),
            Reference::Named {
                ref name,
                ref point,
            } => {
                let referenced = self
                    .phasors
                    .get(name)
                    .ok_or_else(|| PhasorError::ReferenceNotFound(name.clone()))?;
                match point {
                    ReferencePoint::Start => Ok(referenced.start),
                    ReferencePoint::End => Ok(referenced.end),
                }
            }
        }
    }
}

fn resolve_end(start: Point, options: &PhasorOptions) -> PhasorResult<Point> {
    match (options.end_x, options.end_y) {
        (Some(end_x), Some(end_y)) => Ok(Point::new(end_x, end_y)),
        (None, None) => match (options.magnitude, options.angle_degrees) {
            (Some(magnitude), Some(angle_degrees)) => {
                let angle = angle_degrees.to_radians();
                Ok(Point::new(
                    start.x + magnitude * angle.cos(),
                    start.y + magnitude * angle.sin(),
                ))
            }
            _ => Err(PhasorError::InvalidParameters(String::from(
                "either (end_x, end_y) or (magnitude, angle_degrees) must be provided",
            ))),
        },
        _ => Err(PhasorError::InvalidParameters(String::from(
            "end_x and end_y must be provided together",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn end_point_from_polar_form() {
        let end = resolve_end(Point::origin(), &PhasorOptions::polar(2.0, 90.0)).unwrap();
        assert!(approx_eq!(f64, 0.0, end.x, epsilon = 1e-12));
        assert!(approx_eq!(f64, 2.0, end.y, epsilon = 1e-12));
    }

    #[test]
    fn explicit_end_point_overrides_polar_form() {
        let mut options = PhasorOptions::polar(2.0, 90.0);
        options.end_x = Some(5.0);
        options.end_y = Some(6.0);
        let end = resolve_end(Point::origin(), &options).unwrap();
        assert_eq!(Point::new(5.0, 6.0), end);
    }

    #[test]
    fn half_specified_end_point_is_rejected() {
        let mut options = PhasorOptions::polar(2.0, 90.0);
        options.end_x = Some(5.0);
        assert!(resolve_end(Point::origin(), &options).is_err());
    }

    #[test]
    fn missing_angle_is_rejected() {
        let options = PhasorOptions {
            magnitude: Some(2.0),
            ..Default::default()
        };
        assert!(resolve_end(Point::origin(), &options).is_err());
    }
}
