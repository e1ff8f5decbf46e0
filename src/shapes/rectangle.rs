//! Axis-aligned rectangles.
//!
//! Corners are stored in a fixed winding order:
//! ```text
//! UpperLeft ---- UpperRight
//!     |               |
//! LowerLeft ---- LowerRight
//! ```
//! `x_start`/`y_start` read the upper-left corner and `x_end`/`y_end` the
//! lower-right one. Corners are only rewritten together (by
//! `set_upper_left`, `set_size` and `set_values`), so the order holds.

use super::polygon::stroke_outline;
use super::Shape;
use crate::color::Color;
use crate::config::{BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_FILL_COLOR};
use crate::display::Surface;
use crate::error::Error;
use crate::geometry::Point;

/// Named rectangle corner, in winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Corner {
    UpperLeft,
    UpperRight,
    LowerRight,
    LowerLeft,
}

impl Corner {
    /// All corners in winding order.
    pub const ALL: [Corner; 4] = [
        Corner::UpperLeft,
        Corner::UpperRight,
        Corner::LowerRight,
        Corner::LowerLeft,
    ];

    const fn index(self) -> usize {
        match self {
            Corner::UpperLeft => 0,
            Corner::UpperRight => 1,
            Corner::LowerRight => 2,
            Corner::LowerLeft => 3,
        }
    }
}

/// Corners of the rectangle at `(x, y)` with the given size. Corners past
/// the `i32` range are clamped to it.
const fn layout(x: i32, y: i32, width: i32, height: i32) -> [Point; 4] {
    let origin = Point::new(x, y);
    [
        origin,
        origin.offset(width, 0),
        origin.offset(width, height),
        origin.offset(0, height),
    ]
}

/// Distance between two coordinates, clamped to `i32::MAX`.
fn span(from: i32, to: i32) -> i32 {
    i32::try_from(from.abs_diff(to)).unwrap_or(i32::MAX)
}

/// Four-vertex polygon with axis-aligned accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rectangle {
    corners: [Point; 4],
    border_color: Color,
    fill_color: Color,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Rectangle {
    /// Rectangle with the default white border and black fill.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::with_colors(x, y, width, height, DEFAULT_BORDER_COLOR, DEFAULT_FILL_COLOR)
    }

    pub fn with_colors(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        border_color: Color,
        fill_color: Color,
    ) -> Self {
        Self {
            corners: layout(x, y, width, height),
            border_color,
            fill_color,
        }
    }

    /// Rectangle spanning two opposite corners.
    pub fn from_corners(
        upper_left: Point,
        lower_right: Point,
        border_color: Color,
        fill_color: Color,
    ) -> Self {
        Self {
            corners: [
                upper_left,
                Point::new(lower_right.x(), upper_left.y()),
                lower_right,
                Point::new(upper_left.x(), lower_right.y()),
            ],
            border_color,
            fill_color,
        }
    }

    pub fn corner(&self, corner: Corner) -> Point {
        self.corners[corner.index()]
    }

    /// All four corners in winding order.
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Relocate the upper-left corner, keeping width and height.
    /// Does not redraw.
    pub fn set_upper_left(&mut self, x: i32, y: i32) {
        let (width, height) = (self.width(), self.height());
        self.corners = layout(x, y, width, height);
    }

    /// Resize, keeping the upper-left corner. Does not redraw.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.corners = layout(self.x_start(), self.y_start(), width, height);
    }

    /// Relocate and resize. Does not redraw.
    pub fn set_values(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.set_upper_left(x, y);
        self.set_size(width, height);
    }

    pub fn x_start(&self) -> i32 {
        self.corner(Corner::UpperLeft).x()
    }

    pub fn y_start(&self) -> i32 {
        self.corner(Corner::UpperLeft).y()
    }

    pub fn x_end(&self) -> i32 {
        self.corner(Corner::LowerRight).x()
    }

    pub fn y_end(&self) -> i32 {
        self.corner(Corner::LowerRight).y()
    }

    pub fn width(&self) -> i32 {
        span(self.x_start(), self.x_end())
    }

    pub fn height(&self) -> i32 {
        span(self.y_start(), self.y_end())
    }

    fn paint<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        border_color: Color,
        fill_color: Color,
    ) -> Result<(), Error> {
        stroke_outline(surface, &self.corners, border_color)?;
        self.fill_interior(surface, fill_color)
    }

    fn fill_interior<S: Surface + ?Sized>(&self, surface: &mut S, color: Color) -> Result<(), Error> {
        surface.fill_rectangle(
            self.corner(Corner::UpperLeft).offset(1, 1),
            self.width() - 1,
            self.height() - 1,
            color,
        )
    }

    /// Move by `(dx, dy)`: blank the old position, relocate, redraw and
    /// refill at the new one.
    pub fn move_by<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        dx: i32,
        dy: i32,
    ) -> Result<(), Error> {
        self.paint(surface, BACKGROUND_COLOR, BACKGROUND_COLOR)?;
        let origin = self.corner(Corner::UpperLeft).offset(dx, dy);
        self.set_upper_left(origin.x(), origin.y());
        self.paint(surface, self.border_color, self.fill_color)
    }

    /// Resize by `factor` around the upper-left corner, blanking the old
    /// area first. New sizes are truncated towards zero.
    pub fn scale<S: Surface + ?Sized>(&mut self, surface: &mut S, factor: f32) -> Result<(), Error> {
        self.paint(surface, BACKGROUND_COLOR, BACKGROUND_COLOR)?;
        let width = (factor * self.width() as f32) as i32;
        let height = (factor * self.height() as f32) as i32;
        self.set_size(width, height);
        self.paint(surface, self.border_color, self.fill_color)
    }
}

impl Shape for Rectangle {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        stroke_outline(surface, &self.corners, self.border_color)
    }

    /// Interior only, inset by one pixel from the outline.
    fn fill<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        self.fill_interior(surface, self.fill_color)
    }

    /// Clears outline and interior.
    fn erase<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        let origin = self.corner(Corner::UpperLeft);
        surface.draw_rectangle(origin, self.width(), self.height(), BACKGROUND_COLOR)?;
        surface.fill_rectangle(origin, self.width(), self.height(), BACKGROUND_COLOR)
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
