//! Touchscreen widgets for small RGB565 displays.
//!
//! Shapes (polygons, rectangles, triangles, ellipses, circles) and touch
//! widgets (buttons, radio buttons) drawn through a small [`Surface`]
//! trait. Any `embedded-graphics` draw target can be used via
//! [`GraphicsSurface`].
//!
//! The crate is `no_std` and allocation-free; it runs on the panel's
//! microcontroller and is tested on the host with `cargo test`.
//!
//! ```ignore
//! let mut button = Button::with_label("OK", 10, 10, 60, 30,
//!     Color::WHITE, Color::BLUE, Color::WHITE);
//! button.draw(&mut surface)?;
//! if button.is_pressed(touch_x, touch_y) {
//!     button.begin_flash(&mut surface, Color::RED, now_ms)?;
//! }
//! button.poll_flash(&mut surface, now_ms)?;
//! ```

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible in every module.
#[macro_use]
mod fmt;

pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod shapes;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use color::Color;
pub use display::{GraphicsSurface, Surface};
pub use error::Error;
pub use geometry::{Point, PointSequence};
pub use shapes::{AnyShape, Circle, Ellipse, Polygon, Rectangle, Shape, ShapeCensus, Triangle};
pub use ui::{Button, RadioButton, ToggleState};
