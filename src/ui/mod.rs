//! Touch widgets - rectangular buttons and radio buttons.
//!
//! The host polls the touch panel, asks each widget whether the touch
//! landed on it, and triggers feedback on a hit.
//!
//! ## Components
//!
//! - **Button**: rectangle frame with an optional text label; strict
//!   (edge-exclusive) hit test and flash feedback
//! - **RadioButton**: fixed-radius circle with a persistent on/off state;
//!   inclusive hit test
//!
//! ## Flash feedback
//!
//! [`Button::button_display`] blocks for the flash duration through an
//! `embedded-hal` delay. Hosts that keep polling while a button flashes
//! use the two-phase form instead: [`Button::begin_flash`] then
//! [`Button::poll_flash`] with their own millisecond clock.

pub mod buttons;
pub mod flash;
pub mod input_logic;
pub mod radio;

#[cfg(test)]
mod tests;

pub use buttons::{Button, Label};
pub use flash::Flash;
pub use radio::RadioButton;

/// Radio button toggle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleState {
    #[default]
    Off,
    On,
}

impl ToggleState {
    pub fn toggled(self) -> Self {
        match self {
            ToggleState::Off => ToggleState::On,
            ToggleState::On => ToggleState::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == ToggleState::On
    }
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        if on {
            ToggleState::On
        } else {
            ToggleState::Off
        }
    }
}
