//! Display surface the widgets draw on.
//!
//! [`Surface`] is the small set of primitives the shapes need. Any
//! `embedded-graphics` draw target with `Rgb565` colour can be used
//! through [`GraphicsSurface`]; tests use recording surfaces instead.
//!
//! Conventions shared by every implementation:
//!
//! - Lines include both endpoints.
//! - `draw_rectangle(origin, w, h)` outlines `origin ..= origin + (w, h)`,
//!   the same pixels the four edges of a rectangle polygon cover.
//! - `fill_rectangle(origin, w, h)` paints `w × h` pixels from `origin`.
//! - A circle of radius 0 is a single pixel.
//! - Non-positive sizes and negative radii draw nothing.

use crate::color::Color;
use crate::error::Error;
use crate::geometry::Point;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_8X13};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, Primitive, Size};
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

/// Drawing primitives consumed by shapes and widgets.
pub trait Surface {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Error>;

    fn draw_rectangle(
        &mut self,
        origin: Point,
        width: i32,
        height: i32,
        color: Color,
    ) -> Result<(), Error>;

    fn fill_rectangle(
        &mut self,
        origin: Point,
        width: i32,
        height: i32,
        color: Color,
    ) -> Result<(), Error>;

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error>;

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error>;

    /// Render `text` with its top-left corner at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: u8,
        color: Color,
    ) -> Result<(), Error>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Error> {
        (**self).draw_line(from, to, color)
    }

    fn draw_rectangle(
        &mut self,
        origin: Point,
        width: i32,
        height: i32,
        color: Color,
    ) -> Result<(), Error> {
        (**self).draw_rectangle(origin, width, height, color)
    }

    fn fill_rectangle(
        &mut self,
        origin: Point,
        width: i32,
        height: i32,
        color: Color,
    ) -> Result<(), Error> {
        (**self).fill_rectangle(origin, width, height, color)
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error> {
        (**self).draw_circle(center, radius, color)
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error> {
        (**self).fill_circle(center, radius, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: u8,
        color: Color,
    ) -> Result<(), Error> {
        (**self).draw_text(text, origin, font_size, color)
    }
}

/// Monospaced font used for a given label font size.
pub fn font_for_size(font_size: u8) -> &'static MonoFont<'static> {
    match font_size {
        0 | 1 => &FONT_6X10,
        2 => &FONT_8X13,
        _ => &FONT_10X20,
    }
}

/// [`Surface`] over an `embedded-graphics` draw target.
///
/// Generic over the target so callers pass in their panel driver (or a
/// framebuffer) directly.
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn stroke(color: Color) -> PrimitiveStyle<Rgb565> {
        PrimitiveStyleBuilder::new()
            .stroke_color(color.into())
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build()
    }

    /// Bounding box of a circle, or `None` for a negative radius.
    fn circle(center: Point, radius: i32) -> Option<Circle> {
        let radius = u32::try_from(radius).ok()?;
        Some(Circle::with_center(center.into(), 2 * radius + 1))
    }

    fn rectangle(origin: Point, width: i32, height: i32) -> Option<Rectangle> {
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Rectangle::new(
            origin.into(),
            Size::new(width as u32, height as u32),
        ))
    }
}

impl<D> Surface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Error> {
        Line::new(from.into(), to.into())
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(&mut self.target)
            .map_err(|_| Error::Display)
    }

    fn draw_rectangle(
        &mut self,
        origin: Point,
        width: i32,
        height: i32,
        color: Color,
    ) -> Result<(), Error> {
        // Outline spans both edge coordinates, hence the extra pixel.
        if width < 0 || height < 0 {
            return Ok(());
        }
        match Self::rectangle(origin, width.saturating_add(1), height.saturating_add(1)) {
            Some(rect) => rect
                .into_styled(Self::stroke(color))
                .draw(&mut self.target)
                .map_err(|_| Error::Display),
            None => Ok(()),
        }
    }

    fn fill_rectangle(
        &mut self,
        origin: Point,
        width: i32,
        height: i32,
        color: Color,
    ) -> Result<(), Error> {
        match Self::rectangle(origin, width, height) {
            Some(rect) => rect
                .into_styled(PrimitiveStyle::with_fill(color.into()))
                .draw(&mut self.target)
                .map_err(|_| Error::Display),
            None => Ok(()),
        }
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error> {
        match Self::circle(center, radius) {
            Some(circle) => circle
                .into_styled(Self::stroke(color))
                .draw(&mut self.target)
                .map_err(|_| Error::Display),
            None => Ok(()),
        }
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error> {
        match Self::circle(center, radius) {
            Some(circle) => circle
                .into_styled(PrimitiveStyle::with_fill(color.into()))
                .draw(&mut self.target)
                .map_err(|_| Error::Display),
            None => Ok(()),
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font_size: u8,
        color: Color,
    ) -> Result<(), Error> {
        let style = MonoTextStyle::new(font_for_size(font_size), color.into());
        Text::with_baseline(text, origin.into(), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| Error::Display)
    }
}
