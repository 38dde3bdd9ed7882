use std::cmp::Ordering;

use itertools::Itertools;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::diagram::PhasorDiagram;
use crate::phasor::Phasor;
use crate::render_options::RenderOptions;
use crate::{PhasorError, PhasorResult};

const TITLE_FONT: u32 = 30;
const LABEL_FONT: u32 = 16;
const CHART_MARGIN: u32 = 10;
const AXIS_LABEL_AREA: u32 = 40;
// arrow head length as a fraction of the larger axis span
const HEAD_FRACTION: f64 = 0.04;
// half-width of the arrow head base relative to its length
const HEAD_ASPECT: f64 = 0.35;

pub(crate) fn render_diagram<DB>(
    diagram: &PhasorDiagram,
    area: &DrawingArea<DB, Shift>,
    options: &RenderOptions,
) -> PhasorResult<()>
where
    DB: DrawingBackend,
{
    area.fill(&WHITE).map_err(render_error)?;

    let ((x_min, x_max), (y_min, y_max)) = axis_bounds(diagram, options.equal_aspect);
    let mut chart = ChartBuilder::on(area)
        .caption(&diagram.config.title, ("sans-serif", TITLE_FONT))
        .margin(CHART_MARGIN)
        .x_label_area_size(AXIS_LABEL_AREA)
        .y_label_area_size(AXIS_LABEL_AREA)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_error)?;

    let mut mesh = chart.configure_mesh();
    if !options.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(render_error)?;

    // reference lines through the origin
    let axis_style = ShapeStyle::from(&RGBColor(128, 128, 128));
    if y_min < 0.0 && y_max > 0.0 {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x_min, 0.0), (x_max, 0.0)],
                axis_style,
            )))
            .map_err(render_error)?;
    }
    if x_min < 0.0 && x_max > 0.0 {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, y_min), (0.0, y_max)],
                axis_style,
            )))
            .map_err(render_error)?;
    }

    let head_length = HEAD_FRACTION * (x_max - x_min).max(y_max - y_min);
    for phasor in diagram.phasors() {
        draw_arrow(&mut chart, phasor, head_length)?;
        draw_label(&mut chart, phasor)?;
    }

    Ok(())
}

fn draw_arrow<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    phasor: &Phasor,
    head_length: f64,
) -> PhasorResult<()>
where
    DB: DrawingBackend,
{
    let (r, g, b) = phasor.color.tuple();
    let color = RGBColor(r, g, b);
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![phasor.start.tuple(), phasor.end.tuple()],
            ShapeStyle::from(&color).stroke_width(phasor.arrow_width),
        )))
        .map_err(render_error)?;

    // a zero-length phasor has no direction to point the head in
    let magnitude = phasor.magnitude();
    if magnitude > 0.0 {
        let (dx, dy) = phasor.delta();
        let (ux, uy) = (dx / magnitude, dy / magnitude);
        let length = head_length.min(magnitude);
        let half_width = HEAD_ASPECT * length;
        let base = (phasor.end.x - length * ux, phasor.end.y - length * uy);
        let left = (base.0 - half_width * uy, base.1 + half_width * ux);
        let right = (base.0 + half_width * uy, base.1 - half_width * ux);
        chart
            .draw_series(std::iter::once(Polygon::new(
                vec![phasor.end.tuple(), left, right],
                color.filled(),
            )))
            .map_err(render_error)?;
    }

    Ok(())
}

fn draw_label<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    phasor: &Phasor,
) -> PhasorResult<()>
where
    DB: DrawingBackend,
{
    let (r, g, b) = phasor.color.tuple();
    let color = RGBColor(r, g, b);
    let mid = phasor.midpoint();
    let position = (mid.x + phasor.label_offset, mid.y + phasor.label_offset);
    chart
        .draw_series(std::iter::once(Text::new(
            phasor.name.clone(),
            position,
            ("sans-serif", LABEL_FONT).into_font().color(&color),
        )))
        .map_err(render_error)?;
    Ok(())
}

/// Computes axis ranges that fit every drawn phasor with a margin of
/// `max(1, 0.1 * extent)` per axis.  With `equal_aspect` the shorter span is
/// widened about its center to match the longer one.
pub(crate) fn axis_bounds(
    diagram: &PhasorDiagram,
    equal_aspect: bool,
) -> ((f64, f64), (f64, f64)) {
    let xs = diagram
        .phasors()
        .flat_map(|p| vec![p.start.x, p.end.x])
        .minmax_by(total_order)
        .into_option();
    let ys = diagram
        .phasors()
        .flat_map(|p| vec![p.start.y, p.end.y])
        .minmax_by(total_order)
        .into_option();
    let (mut x_range, mut y_range) = match (xs, ys) {
        (Some(x), Some(y)) => (with_margin(x), with_margin(y)),
        _ => ((-1.0, 1.0), (-1.0, 1.0)),
    };
    if equal_aspect {
        let x_span = x_range.1 - x_range.0;
        let y_span = y_range.1 - y_range.0;
        match x_span.partial_cmp(&y_span) {
            Some(Ordering::Less) => x_range = widen(x_range, y_span),
            Some(Ordering::Greater) => y_range = widen(y_range, x_span),
            _ => (),
        }
    }
    (x_range, y_range)
}

fn with_margin((min, max): (f64, f64)) -> (f64, f64) {
    let margin = (0.1 * (max - min)).max(1.0);
    (min - margin, max + margin)
}

fn widen((min, max): (f64, f64), span: f64) -> (f64, f64) {
    let center = (min + max) / 2.0;
    (center - span / 2.0, center + span / 2.0)
}

fn total_order(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

fn render_error<E>(e: E) -> PhasorError
where
    E: std::fmt::Display,
{
    PhasorError::RenderError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phasor_options::PhasorOptions;
    use float_cmp::approx_eq;

    #[test]
    fn empty_diagram_gets_unit_bounds() {
        let diagram = PhasorDiagram::new();
        let (x, y) = axis_bounds(&diagram, false);
        assert_eq!((-1.0, 1.0), x);
        assert_eq!((-1.0, 1.0), y);
    }

    #[test]
    fn bounds_fit_all_phasors_with_margin() {
        let mut diagram = PhasorDiagram::new();
        diagram
            .draw_phasor("a", &PhasorOptions::cartesian(10.0, 4.0))
            .unwrap();
        let (x, y) = axis_bounds(&diagram, false);
        // x extent is 10, so the margin is 1; y extent is 4, clamped to 1
        assert!(approx_eq!(f64, -1.0, x.0));
        assert!(approx_eq!(f64, 11.0, x.1));
        assert!(approx_eq!(f64, -1.0, y.0));
        assert!(approx_eq!(f64, 5.0, y.1));
    }

    #[test]
    fn equal_aspect_widens_the_shorter_axis() {
        let mut diagram = PhasorDiagram::new();
        diagram
            .draw_phasor("a", &PhasorOptions::cartesian(10.0, 4.0))
            .unwrap();
        let (x, y) = axis_bounds(&diagram, true);
        let x_span = x.1 - x.0;
        let y_span = y.1 - y.0;
        assert!(approx_eq!(f64, x_span, y_span));
        // the y range is widened about its center
        assert!(approx_eq!(f64, 2.0, (y.0 + y.1) / 2.0));
    }
}
