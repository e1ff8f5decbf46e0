//! Vertex-list shapes: free-form polygons and triangles.
//!
//! The outline is drawn edge by edge, closing from the last vertex back
//! to the first. Erasing redraws the outline in the background colour
//! and leaves any filled interior on screen.

use super::Shape;
use crate::color::Color;
use crate::config::{BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_FILL_COLOR, MAX_VERTICES};
use crate::display::Surface;
use crate::error::Error;
use crate::geometry::{Edges, Point, PointSequence};
use heapless::Vec;

/// Stroke the closed outline through `vertices`.
pub(crate) fn stroke_outline<S: Surface + ?Sized>(
    surface: &mut S,
    vertices: &[Point],
    color: Color,
) -> Result<(), Error> {
    for (from, to) in Edges::new(vertices) {
        surface.draw_line(from, to, color)?;
    }
    Ok(())
}

/// Even-odd scan-line fill of the area enclosed by `vertices`.
///
/// The outline is never overdrawn: spans are inset by one pixel on both
/// sides, the top and bottom rows are left to the outline, and pixels on
/// horizontal edges inside the shape are skipped. Edges are half-open in
/// `y`, so a vertex shared by two edges is counted once.
pub(crate) fn fill_scanlines<S: Surface + ?Sized>(
    surface: &mut S,
    vertices: &[Point],
    color: Color,
) -> Result<(), Error> {
    if vertices.len() < 3 {
        return Ok(());
    }

    let (y_min, y_max) = vertices
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.y()), hi.max(p.y())));

    for y in y_min.saturating_add(1)..y_max {
        let mut crossings: Vec<i32, MAX_VERTICES> = Vec::new();
        let mut flats: Vec<(i32, i32), MAX_VERTICES> = Vec::new();
        for (a, b) in Edges::new(vertices) {
            if a.y() == y && b.y() == y {
                let _ = flats.push((a.x().min(b.x()), a.x().max(b.x())));
                continue;
            }
            let (top, bottom) = if a.y() <= b.y() { (a, b) } else { (b, a) };
            if y < top.y() || y >= bottom.y() {
                continue;
            }
            let run = i64::from(bottom.x()) - i64::from(top.x());
            let rise = i64::from(bottom.y()) - i64::from(top.y());
            let x = i64::from(top.x()) + (i64::from(y) - i64::from(top.y())) * run / rise;
            if crossings.push(x as i32).is_err() {
                break;
            }
        }
        crossings.sort_unstable();
        flats.sort_unstable();

        for span in crossings.chunks_exact(2) {
            let (left, right) = (span[0].saturating_add(1), span[1].saturating_sub(1));
            fill_around(surface, y, left, right, &flats, color)?;
        }
    }
    Ok(())
}

/// Draw `left..=right` on row `y`, leaving out the sorted `flats` ranges.
fn fill_around<S: Surface + ?Sized>(
    surface: &mut S,
    y: i32,
    left: i32,
    right: i32,
    flats: &[(i32, i32)],
    color: Color,
) -> Result<(), Error> {
    let mut from = left;
    for &(lo, hi) in flats {
        if from > right || lo > right {
            break;
        }
        if hi < from {
            continue;
        }
        if lo > from {
            surface.draw_line(Point::new(from, y), Point::new(lo - 1, y), color)?;
        }
        from = match hi.checked_add(1) {
            Some(next) => next,
            None => return Ok(()),
        };
    }
    if from <= right {
        surface.draw_line(Point::new(from, y), Point::new(right, y), color)?;
    }
    Ok(())
}

/// Closed shape defined by an ordered vertex list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    points: PointSequence,
    border_color: Color,
    fill_color: Color,
}

impl Polygon {
    /// Polygon with the default white border and black fill.
    pub fn new(points: PointSequence) -> Self {
        Self::with_colors(points, DEFAULT_BORDER_COLOR, DEFAULT_FILL_COLOR)
    }

    pub fn with_colors(points: PointSequence, border_color: Color, fill_color: Color) -> Self {
        Self {
            points,
            border_color,
            fill_color,
        }
    }

    /// Polygon through `vertices`, default colours.
    pub fn from_slice(vertices: &[Point]) -> Result<Self, Error> {
        Ok(Self::new(PointSequence::from_slice(vertices)?))
    }

    /// Number of sides (equal to the number of vertices).
    pub fn num_sides(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    /// Vertex list, for reshaping a free-form polygon. Nothing is redrawn.
    pub fn points_mut(&mut self) -> &mut PointSequence {
        &mut self.points
    }
}

impl Shape for Polygon {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        stroke_outline(surface, self.points.as_slice(), self.border_color)
    }

    fn fill<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        fill_scanlines(surface, self.points.as_slice(), self.fill_color)
    }

    fn erase<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        stroke_outline(surface, self.points.as_slice(), BACKGROUND_COLOR)
    }

    fn border_color(&self) -> Color {
        self.border_color
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }
}

/// Polygon with exactly three vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    vertices: [Point; 3],
    border_color: Color,
    fill_color: Color,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self::with_colors(a, b, c, DEFAULT_BORDER_COLOR, DEFAULT_FILL_COLOR)
    }

    pub fn with_colors(a: Point, b: Point, c: Point, border_color: Color, fill_color: Color) -> Self {
        Self {
            vertices: [a, b, c],
            border_color,
            fill_color,
        }
    }

    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    /// Replace one vertex. Out-of-range indices are ignored.
    pub fn set_vertex(&mut self, index: usize, point: Point) {
        if let Some(slot) = self.vertices.get_mut(index) {
            *slot = point;
        }
    }
}

impl Shape for Triangle {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        stroke_outline(surface, &self.vertices, self.border_color)
    }

    fn fill<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        fill_scanlines(surface, &self.vertices, self.fill_color)
    }

    fn erase<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        stroke_outline(surface, &self.vertices, BACKGROUND_COLOR)
    }

    fn border_color(&self) -> Color {
        self.border_color
    }

    fn fill_color(&self) -> Color {
        self.fill_color
    }

    fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }
}
