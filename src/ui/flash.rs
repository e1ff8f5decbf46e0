//! Two-phase highlight feedback.
//!
//! A flash remembers the colours a widget had before it was highlighted
//! and when they should come back. The widget owns the drawing; this
//! type only keeps the bookkeeping.

use super::input_logic::{flash_deadline, flash_expired};
use crate::color::Color;
use crate::config::FLASH_DURATION_MS;

/// In-progress flash on a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flash {
    saved_border: Color,
    saved_text: Color,
    deadline_ms: u64,
}

impl Flash {
    /// Start a flash at `now_ms`, saving the colours to restore.
    pub fn start(saved_border: Color, saved_text: Color, now_ms: u64) -> Self {
        Self {
            saved_border,
            saved_text,
            deadline_ms: flash_deadline(now_ms, FLASH_DURATION_MS),
        }
    }

    /// Push the deadline out from `now_ms`. The saved colours are kept.
    pub fn extend(&mut self, now_ms: u64) {
        self.deadline_ms = flash_deadline(now_ms, FLASH_DURATION_MS);
    }

    /// Change the border colour the flash will restore.
    pub fn set_saved_border(&mut self, color: Color) {
        self.saved_border = color;
    }

    /// Change the text colour the flash will restore.
    pub fn set_saved_text(&mut self, color: Color) {
        self.saved_text = color;
    }

    pub fn saved_border(&self) -> Color {
        self.saved_border
    }

    pub fn saved_text(&self) -> Color {
        self.saved_text
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    pub fn expired(&self, now_ms: u64) -> bool {
        flash_expired(now_ms, self.deadline_ms)
    }
}
