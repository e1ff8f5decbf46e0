//! Live-shape tally for diagnostics.
//!
//! The host owns a `ShapeCensus` and routes the shapes it wants counted
//! through [`ShapeCensus::admit`] and [`ShapeCensus::retire`]. Nothing in
//! the crate reads the count; it exists so a sketch (or a test) can spot
//! leaked or double-released widgets.

use super::Shape;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShapeCensus {
    admitted: usize,
    retired: usize,
}

impl ShapeCensus {
    pub const fn new() -> Self {
        Self {
            admitted: 0,
            retired: 0,
        }
    }

    /// Count `shape` in and hand it back.
    pub fn admit<T: Shape>(&mut self, shape: T) -> T {
        self.admitted += 1;
        trace!("ShapeCensus: admit, live={}", self.live());
        shape
    }

    /// Count `shape` out and drop it. Nothing is erased from the screen.
    pub fn retire<T: Shape>(&mut self, shape: T) {
        drop(shape);
        if self.retired < self.admitted {
            self.retired += 1;
        } else {
            warn!("ShapeCensus: retire without matching admit");
        }
        trace!("ShapeCensus: retire, live={}", self.live());
    }

    /// Shapes admitted and not yet retired.
    pub fn live(&self) -> usize {
        self.admitted - self.retired
    }

    /// Shapes admitted since creation or the last reset.
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    /// Start a fresh tally.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
