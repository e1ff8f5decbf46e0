//! Ellipses and circles.
//!
//! An ellipse is drawn by sampling its parametric outline at a fixed
//! number of angles and filled with horizontal spans. A circle uses the
//! surface's exact circle primitives instead.
//!
//! Shapes with a non-positive radius (or semi-axis) draw nothing.

use super::Shape;
use crate::color::Color;
use crate::config::{BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_FILL_COLOR, ELLIPSE_SAMPLES};
use crate::display::Surface;
use crate::error::Error;
use crate::geometry::Point;
use core::f32::consts::TAU;
use libm::{cosf, sinf};

/// Ellipse given by its centre and horizontal/vertical semi-axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ellipse {
    center: Point,
    width: i32,
    height: i32,
    border_color: Color,
    fill_color: Color,
}

impl Ellipse {
    /// Ellipse centred on `(x, y)`, default colours.
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
        Self::from_center(Point::new(x, y), width, height, border_color, fill_color)
    }

    pub fn from_center(
        center: Point,
        width: i32,
        height: i32,
        border_color: Color,
        fill_color: Color,
    ) -> Self {
        Self {
            center,
            width,
            height,
            border_color,
            fill_color,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn x(&self) -> i32 {
        self.center.x()
    }

    pub fn y(&self) -> i32 {
        self.center.y()
    }

    /// Horizontal semi-axis.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Vertical semi-axis.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set_center(&mut self, x: i32, y: i32) {
        self.center = Point::new(x, y);
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Erase, translate by `(dx, dy)` and redraw. The interior is only
    /// repainted when `fill_shape` is set.
    pub fn move_by<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        dx: i32,
        dy: i32,
        fill_shape: bool,
    ) -> Result<(), Error> {
        self.erase(surface)?;
        self.center = self.center.offset(dx, dy);
        self.redraw(surface, fill_shape)
    }

    /// Erase, scale both semi-axes by `factor` (truncated) and redraw.
    pub fn scale<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        factor: f32,
        fill_shape: bool,
    ) -> Result<(), Error> {
        self.erase(surface)?;
        self.width = (factor * self.width as f32) as i32;
        self.height = (factor * self.height as f32) as i32;
        self.redraw(surface, fill_shape)
    }

    fn redraw<S: Surface + ?Sized>(&self, surface: &mut S, fill_shape: bool) -> Result<(), Error> {
        // Spans reach the outline, so fill goes first.
        if fill_shape {
            self.fill(surface)?;
        }
        self.draw(surface)
    }

    fn span<S: Surface + ?Sized>(&self, surface: &mut S, dy: i64, half: i64) -> Result<(), Error> {
        let mid = self.center.offset(0, dy as i32);
        let half = half as i32;
        surface.draw_line(mid.offset(-half, 0), mid.offset(half, 0), self.fill_color)
    }
}

impl Shape for Ellipse {
    /// Plots `ELLIPSE_SAMPLES` single pixels along the outline.
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        if self.is_degenerate() {
            return Ok(());
        }
        let (w, h) = (self.width as f32, self.height as f32);
        for step in 0..ELLIPSE_SAMPLES {
            let theta = step as f32 * TAU / ELLIPSE_SAMPLES as f32;
            let sample = self
                .center
                .offset((w * cosf(theta)) as i32, (h * sinf(theta)) as i32);
            surface.draw_circle(sample, 0, self.border_color)?;
        }
        Ok(())
    }

    /// For each row `y` the widest `x` with
    /// `x²·h² + y²·w² <= w²·h²`, searched from the previous row's width
    /// using the running slope.
    fn fill<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        if self.is_degenerate() {
            return Ok(());
        }
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        let (ww, hh) = (w * w, h * h);
        let hhww = hh * ww;

        self.span(surface, 0, w)?;

        let mut x0 = w;
        let mut dx = 0;
        for y in 1..=h {
            let mut x1 = x0 - (dx - 1);
            while x1 > 0 {
                if x1 * x1 * hh + y * y * ww <= hhww {
                    break;
                }
                x1 -= 1;
            }
            dx = x0 - x1;
            x0 = x1;

            self.span(surface, -y, x0)?;
            self.span(surface, y, x0)?;
        }
        Ok(())
    }

    /// Blanks the bounding circle of radius `max(width, height)`.
    fn erase<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        let radius = self.width.max(self.height);
        surface.draw_circle(self.center, radius, BACKGROUND_COLOR)?;
        surface.fill_circle(self.center, radius, BACKGROUND_COLOR)
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

/// Circle drawn with the exact circle primitives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    center: Point,
    radius: i32,
    border_color: Color,
    fill_color: Color,
}

impl Circle {
    /// Circle centred on `(x, y)`, default colours.
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self::with_colors(x, y, radius, DEFAULT_BORDER_COLOR, DEFAULT_FILL_COLOR)
    }

    pub fn with_colors(x: i32, y: i32, radius: i32, border_color: Color, fill_color: Color) -> Self {
        Self::from_center(Point::new(x, y), radius, border_color, fill_color)
    }

    pub fn from_center(center: Point, radius: i32, border_color: Color, fill_color: Color) -> Self {
        Self {
            center,
            radius,
            border_color,
            fill_color,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn x(&self) -> i32 {
        self.center.x()
    }

    pub fn y(&self) -> i32 {
        self.center.y()
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_center(&mut self, x: i32, y: i32) {
        self.center = Point::new(x, y);
    }

    /// Does not redraw.
    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
    }

    /// Erase, translate by `(dx, dy)` and redraw. The interior is only
    /// repainted when `fill_shape` is set.
    pub fn move_by<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        dx: i32,
        dy: i32,
        fill_shape: bool,
    ) -> Result<(), Error> {
        self.erase(surface)?;
        self.center = self.center.offset(dx, dy);
        self.redraw(surface, fill_shape)
    }

    /// Erase, scale the radius by `factor` (truncated) and redraw.
    pub fn scale<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        factor: f32,
        fill_shape: bool,
    ) -> Result<(), Error> {
        self.erase(surface)?;
        self.radius = (factor * self.radius as f32) as i32;
        self.redraw(surface, fill_shape)
    }

    fn redraw<S: Surface + ?Sized>(&self, surface: &mut S, fill_shape: bool) -> Result<(), Error> {
        self.draw(surface)?;
        if fill_shape {
            self.fill(surface)?;
        }
        Ok(())
    }
}

impl Shape for Circle {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        if self.radius <= 0 {
            return Ok(());
        }
        surface.draw_circle(self.center, self.radius, self.border_color)
    }

    /// Interior inside the outline ring.
    fn fill<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        if self.radius <= 0 {
            return Ok(());
        }
        surface.fill_circle(self.center, self.radius - 1, self.fill_color)
    }

    fn erase<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        if self.radius <= 0 {
            return Ok(());
        }
        surface.draw_circle(self.center, self.radius, BACKGROUND_COLOR)?;
        surface.fill_circle(self.center, self.radius - 1, BACKGROUND_COLOR)
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
