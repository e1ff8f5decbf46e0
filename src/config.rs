//! Crate-wide constants and compile-time configuration.
//!
//! Default colours, feedback timing and buffer capacities live here so
//! they can be tuned in one place.

use crate::color::Color;

// Colours

/// Border colour used when none is given (white).
pub const DEFAULT_BORDER_COLOR: Color = Color::WHITE;

/// Fill colour used when none is given (black).
pub const DEFAULT_FILL_COLOR: Color = Color::BLACK;

/// Text colour used for button labels when none is given (white).
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;

/// Colour a pressed button flashes with when none is given (red).
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::RED;

/// Screen background. Erasing a shape redraws it in this colour.
pub const BACKGROUND_COLOR: Color = Color::BLACK;

// Feedback timing

/// How long a pressed button stays highlighted (ms).
pub const FLASH_DURATION_MS: u32 = 100;

// Shapes

/// Radius of every radio button (pixels).
pub const RADIO_BUTTON_RADIUS: i32 = 10;

/// Number of points sampled along an ellipse outline.
/// Fixed regardless of the ellipse size.
pub const ELLIPSE_SAMPLES: u32 = 100;

/// Maximum number of vertices a free-form polygon can hold.
pub const MAX_VERTICES: usize = 16;

// Button labels

/// Maximum label length in bytes. Longer text is truncated.
pub const LABEL_CAPACITY: usize = 32;

/// Font size for labels created without an explicit size.
pub const DEFAULT_FONT_SIZE: u8 = 2;

/// Offset of a default label anchor from the button's upper-left corner.
pub const LABEL_INSET_PX: i32 = 4;
