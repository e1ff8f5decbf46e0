//! Rectangular touch buttons with optional text labels.
//!
//! A button is a [`Rectangle`] frame plus a [`Label`]. Hits are tested
//! strictly inside the frame, so a touch on the outline itself does not
//! count. Feedback is a short highlight of the outline and label, either
//! blocking ([`Button::button_display`]) or two-phase
//! ([`Button::begin_flash`] / [`Button::poll_flash`]).

use super::flash::Flash;
use super::input_logic::within_exclusive;
use crate::color::Color;
use crate::config::{
    DEFAULT_BORDER_COLOR, DEFAULT_FILL_COLOR, DEFAULT_FONT_SIZE, DEFAULT_TEXT_COLOR,
    FLASH_DURATION_MS, LABEL_CAPACITY, LABEL_INSET_PX,
};
use crate::display::Surface;
use crate::error::Error;
use crate::geometry::Point;
use crate::shapes::{Rectangle, Shape};
use embedded_hal::delay::DelayNs;
use heapless::String;

/// Copy `text`, cutting it at the last character that fits.
fn truncated(text: &str) -> String<LABEL_CAPACITY> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            warn!("Label: text truncated to {} bytes", LABEL_CAPACITY);
            break;
        }
    }
    out
}

/// Text drawn on top of a button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    text: String<LABEL_CAPACITY>,
    origin: Point,
    font_size: u8,
    color: Color,
}

impl Label {
    /// Label with its top-left corner at `origin`. Text longer than
    /// `LABEL_CAPACITY` bytes is truncated.
    pub fn new(text: &str, origin: Point, font_size: u8, color: Color) -> Self {
        Self {
            text: truncated(text),
            origin,
            font_size,
            color,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Empty labels draw nothing.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        if self.text.is_empty() {
            return Ok(());
        }
        surface.draw_text(&self.text, self.origin, self.font_size, self.color)
    }
}

/// Rectangular button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    frame: Rectangle,
    label: Option<Label>,
    flash: Option<Flash>,
}

impl Default for Button {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Button {
    /// Unlabelled button with the default white border and black fill.
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
            frame: Rectangle::with_colors(x, y, width, height, border_color, fill_color),
            label: None,
            flash: None,
        }
    }

    /// Button with `text` anchored just inside its upper-left corner.
    #[allow(clippy::too_many_arguments)]
    pub fn with_label(
        text: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        border_color: Color,
        fill_color: Color,
        text_color: Color,
    ) -> Self {
        let mut button = Self::with_colors(x, y, width, height, border_color, fill_color);
        let origin = button.default_label_origin();
        button.label = Some(Label::new(text, origin, DEFAULT_FONT_SIZE, text_color));
        button
    }

    fn default_label_origin(&self) -> Point {
        Point::new(self.x_start(), self.y_start()).offset(LABEL_INSET_PX, LABEL_INSET_PX)
    }

    /// The label, created empty at the default anchor if missing.
    fn label_mut(&mut self) -> &mut Label {
        let origin = self.default_label_origin();
        self.label
            .get_or_insert_with(|| Label::new("", origin, DEFAULT_FONT_SIZE, DEFAULT_TEXT_COLOR))
    }

    // ── Hit testing ──────────────────────────────────────────────────────

    /// True when `(x, y)` is strictly inside the frame.
    pub fn is_pressed(&self, x: i32, y: i32) -> bool {
        within_exclusive(
            x,
            y,
            Point::new(self.x_start(), self.y_start()),
            Point::new(self.x_end(), self.y_end()),
        )
    }

    // ── Drawing ──────────────────────────────────────────────────────────

    /// Frame outline, then label.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        self.frame.draw(surface)?;
        self.draw_label(surface)
    }

    /// Frame interior, then label so the text stays on top.
    pub fn fill<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        self.frame.fill(surface)?;
        self.draw_label(surface)
    }

    fn draw_label<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        match &self.label {
            Some(label) => label.draw(surface),
            None => Ok(()),
        }
    }

    // ── Flash feedback ───────────────────────────────────────────────────

    fn apply_colors(&mut self, border: Color, text: Color) {
        self.frame.set_border_color(border);
        if let Some(label) = &mut self.label {
            label.color = text;
        }
    }

    /// Highlight the outline and label for `FLASH_DURATION_MS`, blocking
    /// on `delay`, then restore the previous colours and redraw.
    ///
    /// A pending two-phase flash is cancelled first. The colours are
    /// restored even if drawing fails.
    pub fn button_display<S: Surface + ?Sized, D: DelayNs>(
        &mut self,
        surface: &mut S,
        delay: &mut D,
        highlight: Color,
    ) -> Result<(), Error> {
        if let Some(flash) = self.flash.take() {
            self.apply_colors(flash.saved_border(), flash.saved_text());
        }
        let (border, text) = (self.border_color(), self.text_color());

        self.apply_colors(highlight, highlight);
        let shown = self.draw(surface);
        if shown.is_ok() {
            delay.delay_ms(FLASH_DURATION_MS);
        }
        self.apply_colors(border, text);
        shown?;
        self.draw(surface)
    }

    /// Highlight the outline and label and return the time (ms) at which
    /// [`poll_flash`](Self::poll_flash) will restore them.
    ///
    /// Calling this again while flashing keeps the colours saved by the
    /// first call and pushes the deadline out.
    pub fn begin_flash<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        highlight: Color,
        now_ms: u64,
    ) -> Result<u64, Error> {
        let flash = match self.flash {
            Some(mut flash) => {
                flash.extend(now_ms);
                flash
            }
            None => Flash::start(self.border_color(), self.text_color(), now_ms),
        };
        self.flash = Some(flash);
        let deadline = flash.deadline_ms();
        debug!("Button: flash until {}", deadline);
        self.apply_colors(highlight, highlight);
        self.draw(surface)?;
        Ok(deadline)
    }

    /// Restore and redraw once the flash deadline has passed.
    /// Returns whether the button was restored by this call.
    pub fn poll_flash<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        now_ms: u64,
    ) -> Result<bool, Error> {
        match self.flash {
            Some(flash) if flash.expired(now_ms) => {
                self.end_flash(surface)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Restore and redraw now. Does nothing when not flashing.
    pub fn end_flash<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), Error> {
        let Some(flash) = self.flash.take() else {
            return Ok(());
        };
        debug!("Button: flash restored");
        self.apply_colors(flash.saved_border(), flash.saved_text());
        self.draw(surface)
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }

    // ── Geometry and colours ─────────────────────────────────────────────

    /// Relocate and resize the frame. Does not redraw.
    pub fn set_values(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.frame.set_values(x, y, width, height);
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.frame.set_size(width, height);
    }

    /// During a flash the new colour is what the flash restores; the
    /// highlight stays until then.
    pub fn set_border_color(&mut self, color: Color) {
        match &mut self.flash {
            Some(flash) => flash.set_saved_border(color),
            None => self.frame.set_border_color(color),
        }
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.frame.set_fill_color(color);
    }

    pub fn frame(&self) -> &Rectangle {
        &self.frame
    }

    pub fn x_start(&self) -> i32 {
        self.frame.x_start()
    }

    pub fn y_start(&self) -> i32 {
        self.frame.y_start()
    }

    pub fn x_end(&self) -> i32 {
        self.frame.x_end()
    }

    pub fn y_end(&self) -> i32 {
        self.frame.y_end()
    }

    pub fn width(&self) -> i32 {
        self.frame.width()
    }

    pub fn height(&self) -> i32 {
        self.frame.height()
    }

    pub fn border_color(&self) -> Color {
        self.frame.border_color()
    }

    pub fn fill_color(&self) -> Color {
        self.frame.fill_color()
    }

    // ── Label ────────────────────────────────────────────────────────────

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Label colour, or the default text colour for an unlabelled button.
    pub fn text_color(&self) -> Color {
        self.label.as_ref().map_or(DEFAULT_TEXT_COLOR, Label::color)
    }

    /// Replace the whole label.
    pub fn set_text_values(&mut self, text: &str, x: i32, y: i32, font_size: u8, color: Color) {
        self.label = Some(Label::new(text, Point::new(x, y), font_size, color));
        self.set_text_color(color);
    }

    pub fn set_text(&mut self, text: &str) {
        self.label_mut().text = truncated(text);
    }

    pub fn set_text_coord(&mut self, x: i32, y: i32) {
        self.label_mut().origin = Point::new(x, y);
    }

    pub fn set_font_size(&mut self, font_size: u8) {
        self.label_mut().font_size = font_size;
    }

    /// During a flash the new colour is what the flash restores; the
    /// label keeps the highlight until then.
    pub fn set_text_color(&mut self, color: Color) {
        let shown = match &mut self.flash {
            Some(flash) => {
                flash.set_saved_text(color);
                self.frame.border_color()
            }
            None => color,
        };
        self.label_mut().color = shown;
    }
}
