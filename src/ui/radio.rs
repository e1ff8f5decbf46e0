//! Radio buttons.
//!
//! A radio button is a fixed-radius circle with a toggle state. The
//! state only changes on request; the hit test never flips it. When on,
//! the interior shows the button's fill colour, when off the background.

use super::input_logic::within_radius;
use super::ToggleState;
use crate::color::Color;
use crate::config::{BACKGROUND_COLOR, RADIO_BUTTON_RADIUS};
use crate::display::Surface;
use crate::error::Error;
use crate::shapes::{Circle, Shape};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioButton {
    circle: Circle,
    fill_color: Color,
    state: ToggleState,
}

impl RadioButton {
    /// Radio button centred on `(x, y)`, initially off.
    pub fn new(x: i32, y: i32, border_color: Color, fill_color: Color) -> Self {
        Self {
            circle: Circle::with_colors(x, y, RADIO_BUTTON_RADIUS, border_color, BACKGROUND_COLOR),
            fill_color,
            state: ToggleState::Off,
        }
    }

    /// Point the circle's interior at the colour the state calls for.
    fn sync_interior(&mut self) {
        let interior = if self.state.is_on() {
            self.fill_color
        } else {
            BACKGROUND_COLOR
        };
        self.circle.set_fill_color(interior);
    }

    /// True when `(x, y)` is on or inside the circle.
    pub fn is_button_pressed(&self, x: i32, y: i32) -> bool {
        within_radius(x, y, self.circle.center(), self.circle.radius())
    }

    /// Flip the state and redraw.
    pub fn reset_button_state<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), Error> {
        self.state = self.state.toggled();
        self.sync_interior();
        debug!("RadioButton: state -> {}", self.state.is_on());
        self.draw(surface)
    }

    /// Outline, then the interior in the fill or background colour.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        self.circle.render(surface)
    }

    /// Force the state. Does not redraw.
    pub fn set_button_state(&mut self, on: bool) {
        self.state = on.into();
        self.sync_interior();
    }

    pub fn button_state(&self) -> bool {
        self.state.is_on()
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn set_center(&mut self, x: i32, y: i32) {
        self.circle.set_center(x, y);
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.circle.set_border_color(color);
    }

    /// Colour shown while on. Does not redraw.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.sync_interior();
    }

    /// Centre `x`.
    pub fn x_start(&self) -> i32 {
        self.circle.x()
    }

    /// Centre `y`.
    pub fn y_start(&self) -> i32 {
        self.circle.y()
    }

    pub fn radius(&self) -> i32 {
        self.circle.radius()
    }

    pub fn border_color(&self) -> Color {
        self.circle.border_color()
    }

    /// Colour shown while on, whatever the current state.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }
}
