//! Drawable shapes.
//!
//! Every shape implements [`Shape`]: draw the outline, fill the interior,
//! erase, and get/set its two colours. [`AnyShape`] holds any of them
//! when a host keeps a mixed list.
//!
//! ## Erase semantics
//!
//! - **Polygon / Triangle**: outline only; a filled interior stays.
//! - **Rectangle / Ellipse / Circle**: outline and interior.
//!
//! Erasing draws in [`BACKGROUND_COLOR`](crate::config::BACKGROUND_COLOR)
//! and never changes the shape's colour fields.

pub mod census;
pub mod ellipse;
pub mod polygon;
pub mod rectangle;


use crate::color::Color;
use crate::display::Surface;
use crate::error::Error;

pub use census::ShapeCensus;
pub use ellipse::{Circle, Ellipse};
pub use polygon::{Polygon, Triangle};
pub use rectangle::{Corner, Rectangle};

/// Draw / fill / erase capability shared by all shapes.
pub trait Shape {
    /// Stroke the outline in the border colour.
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error>;

    /// Paint the interior in the fill colour.
    fn fill<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error>;

    /// Paint over the shape in the background colour.
    fn erase<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error>;

    fn border_color(&self) -> Color;

    fn fill_color(&self) -> Color;

    fn set_border_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    /// Outline followed by interior.
    fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        self.draw(surface)?;
        self.fill(surface)
    }
}

/// Any shape the crate knows how to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyShape {
    Polygon(Polygon),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Ellipse(Ellipse),
    Circle(Circle),
}

impl AnyShape {
    pub fn is_polygon_family(&self) -> bool {
        matches!(
            self,
            AnyShape::Polygon(_) | AnyShape::Rectangle(_) | AnyShape::Triangle(_)
        )
    }
}

macro_rules! dispatch {
    ($self:expr, $shape:ident => $body:expr) => {
        match $self {
            AnyShape::Polygon($shape) => $body,
            AnyShape::Rectangle($shape) => $body,
            AnyShape::Triangle($shape) => $body,
            AnyShape::Ellipse($shape) => $body,
            AnyShape::Circle($shape) => $body,
        }
    };
}

impl Shape for AnyShape {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        dispatch!(self, s => s.draw(surface))
    }

    fn fill<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        dispatch!(self, s => s.fill(surface))
    }

    fn erase<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        dispatch!(self, s => s.erase(surface))
    }

    fn border_color(&self) -> Color {
        dispatch!(self, s => s.border_color())
    }

    fn fill_color(&self) -> Color {
        dispatch!(self, s => s.fill_color())
    }

    fn set_border_color(&mut self, color: Color) {
        dispatch!(self, s => s.set_border_color(color))
    }

    fn set_fill_color(&mut self, color: Color) {
        dispatch!(self, s => s.set_fill_color(color))
    }
}

impl From<Polygon> for AnyShape {
    fn from(shape: Polygon) -> Self {
        AnyShape::Polygon(shape)
    }
}

impl From<Rectangle> for AnyShape {
    fn from(shape: Rectangle) -> Self {
        AnyShape::Rectangle(shape)
    }
}

impl From<Triangle> for AnyShape {
    fn from(shape: Triangle) -> Self {
        AnyShape::Triangle(shape)
    }
}

impl From<Ellipse> for AnyShape {
    fn from(shape: Ellipse) -> Self {
        AnyShape::Ellipse(shape)
    }
}

impl From<Circle> for AnyShape {
    fn from(shape: Circle) -> Self {
        AnyShape::Circle(shape)
    }
}
