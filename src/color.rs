//! 16-bit packed RGB565 colours.
//!
//! Layout (16 bits):
//! ```text
//! Bits 15..11: red   (5 bits)
//! Bits 10..5 : green (6 bits)
//! Bits  4..0 : blue  (5 bits)
//! ```

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;

/// A packed RGB565 colour as the TFT controller expects it.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xffff);
    pub const RED: Color = Color(0xf800);
    pub const GREEN: Color = Color(0x07e0);
    pub const BLUE: Color = Color(0x001f);
    pub const CYAN: Color = Color(0x07ff);
    pub const YELLOW: Color = Color(0xffe0);
    pub const GRAY: Color = Color(0x8410);

    /// Wrap a raw packed value.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Packed value.
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::from(RawU16::new(color.0))
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Self(color.into_storage())
    }
}
