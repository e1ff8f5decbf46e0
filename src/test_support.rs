//! Recording surface for unit tests.

use crate::color::Color;
use crate::display::Surface;
use crate::error::Error;
use crate::geometry::Point;
use std::string::{String, ToString};
use std::vec::Vec;

/// One primitive call captured by [`Recorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Line(Point, Point, Color),
    Rect(Point, i32, i32, Color),
    FillRect(Point, i32, i32, Color),
    Circle(Point, i32, Color),
    FillCircle(Point, i32, Color),
    Text(String, Point, u8, Color),
}

impl Call {
    pub fn color(&self) -> Color {
        match self {
            Call::Line(_, _, c)
            | Call::Rect(_, _, _, c)
            | Call::FillRect(_, _, _, c)
            | Call::Circle(_, _, c)
            | Call::FillCircle(_, _, c)
            | Call::Text(_, _, _, c) => *c,
        }
    }
}

/// Surface that records every call instead of drawing.
/// Set `fail_after` to make the n-th and later calls fail.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub fail_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(calls: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_after: Some(calls),
        }
    }

    pub fn take(&mut self) -> Vec<Call> {
        core::mem::take(&mut self.calls)
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Line(a, b, _) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: Call) -> Result<(), Error> {
        if matches!(self.fail_after, Some(n) if self.calls.len() >= n) {
            return Err(Error::Display);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Surface for Recorder {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), Error> {
        self.record(Call::Line(from, to, color))
    }

    fn draw_rectangle(&mut self, origin: Point, w: i32, h: i32, color: Color) -> Result<(), Error> {
        self.record(Call::Rect(origin, w, h, color))
    }

    fn fill_rectangle(&mut self, origin: Point, w: i32, h: i32, color: Color) -> Result<(), Error> {
        self.record(Call::FillRect(origin, w, h, color))
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error> {
        self.record(Call::Circle(center, radius, color))
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), Error> {
        self.record(Call::FillCircle(center, radius, color))
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: u8, color: Color) -> Result<(), Error> {
        self.record(Call::Text(text.to_string(), origin, size, color))
    }
}

/// Shorthand for `Point::new`.
pub fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}
