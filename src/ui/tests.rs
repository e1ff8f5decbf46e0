//! Unit tests for button and radio button behaviour.
//!
//! Hit tests are checked directly; feedback is checked against the
//! primitive calls made on a recording surface.

use super::input_logic::{flash_deadline, flash_expired, within_exclusive, within_radius};
use super::*;
use crate::color::Color;
use crate::config::{
    BACKGROUND_COLOR, DEFAULT_FONT_SIZE, DEFAULT_TEXT_COLOR, FLASH_DURATION_MS, LABEL_CAPACITY,
};
use crate::error::Error;
use crate::test_support::{pt, Call, Recorder};
use embedded_hal::delay::DelayNs;

/// Delay that only adds up how long it was asked to wait.
#[derive(Default)]
struct CountingDelay {
    total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

fn ok_button() -> Button {
    Button::with_label("OK", 10, 10, 60, 30, Color::WHITE, Color::BLUE, Color::GREEN)
}

// ═══════════════════════════════════════════════════════════════════════════
// Input Logic Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn exclusive_box_rejects_edges() {
    let (a, b) = (pt(0, 0), pt(10, 10));
    assert!(within_exclusive(1, 1, a, b));
    assert!(within_exclusive(9, 9, a, b));
    assert!(!within_exclusive(0, 5, a, b));
    assert!(!within_exclusive(5, 10, a, b));
    assert!(!within_exclusive(-1, 5, a, b));
}

#[test]
fn radius_check_is_inclusive() {
    let c = pt(50, 50);
    assert!(within_radius(60, 50, c, 10));
    assert!(within_radius(50, 40, c, 10));
    assert!(within_radius(57, 57, c, 10));
    assert!(!within_radius(58, 57, c, 10));
    assert!(!within_radius(61, 50, c, 10));
}

#[test]
fn radius_check_handles_far_points() {
    assert!(!within_radius(i32::MAX, i32::MIN, pt(0, 0), 10));
}

#[test]
fn flash_timing_helpers() {
    assert_eq!(flash_deadline(1_000, 100), 1_100);
    assert_eq!(flash_deadline(u64::MAX, 100), u64::MAX);
    assert!(!flash_expired(1_099, 1_100));
    assert!(flash_expired(1_100, 1_100));
}

// ═══════════════════════════════════════════════════════════════════════════
// Button Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn button_hit_test_is_strict() {
    let b = Button::new(0, 0, 10, 10);
    assert!(b.is_pressed(5, 5));
    assert!(!b.is_pressed(0, 5));
    assert!(!b.is_pressed(10, 10));
    assert!(!b.is_pressed(5, 0));
    assert!(b.is_pressed(9, 1));
}

#[test]
fn button_default_is_empty_at_origin() {
    let b = Button::default();
    assert_eq!((b.x_start(), b.y_start(), b.width(), b.height()), (0, 0, 0, 0));
    assert!(b.label().is_none());
    assert!(!b.is_pressed(0, 0));
    assert_eq!(b.text_color(), DEFAULT_TEXT_COLOR);
}

#[test]
fn button_geometry_follows_frame() {
    let mut b = Button::new(10, 20, 30, 40);
    assert_eq!((b.x_end(), b.y_end()), (40, 60));
    b.set_values(0, 0, 5, 5);
    assert_eq!((b.x_start(), b.y_start(), b.x_end(), b.y_end()), (0, 0, 5, 5));
    b.set_size(8, 2);
    assert_eq!((b.width(), b.height()), (8, 2));
    assert_eq!(b.frame().x_end(), 8);

    b.set_border_color(Color::CYAN);
    b.set_fill_color(Color::GRAY);
    assert_eq!(b.border_color(), Color::CYAN);
    assert_eq!(b.fill_color(), Color::GRAY);
}

#[test]
fn label_anchor_defaults_inside_corner() {
    let b = ok_button();
    let label = b.label().unwrap();
    assert_eq!(label.text(), "OK");
    assert_eq!(label.origin(), pt(14, 14));
    assert_eq!(label.font_size(), DEFAULT_FONT_SIZE);
    assert_eq!(label.color(), Color::GREEN);
}

#[test]
fn long_label_is_truncated_on_char_boundary() {
    let ascii = "a".repeat(LABEL_CAPACITY + 8);
    let b = Button::with_label(&ascii, 0, 0, 1, 1, Color::WHITE, Color::BLACK, Color::WHITE);
    assert_eq!(b.label().unwrap().text().len(), LABEL_CAPACITY);

    let wide = "é".repeat(LABEL_CAPACITY);
    let mut b = Button::new(0, 0, 1, 1);
    b.set_text(&wide);
    let text = b.label().unwrap().text();
    assert_eq!(text.chars().count(), LABEL_CAPACITY / 2);
    assert!(text.chars().all(|c| c == 'é'));
}

#[test]
fn label_setters_create_label_on_demand() {
    let mut b = Button::new(20, 30, 50, 20);
    b.set_text("Go");
    let label = b.label().unwrap();
    assert_eq!(label.origin(), pt(24, 34));
    assert_eq!(label.color(), DEFAULT_TEXT_COLOR);

    b.set_text_coord(1, 2);
    b.set_font_size(3);
    b.set_text_color(Color::YELLOW);
    let label = b.label().unwrap();
    assert_eq!(label.text(), "Go");
    assert_eq!(label.origin(), pt(1, 2));
    assert_eq!(label.font_size(), 3);
    assert_eq!(b.text_color(), Color::YELLOW);

    b.set_text_values("Stop", 5, 6, 1, Color::RED);
    assert_eq!(
        b.label(),
        Some(&Label::new("Stop", pt(5, 6), 1, Color::RED))
    );
}

#[test]
fn button_draw_outlines_then_labels() {
    let b = ok_button();
    let mut s = Recorder::new();
    b.draw(&mut s).unwrap();
    assert_eq!(s.calls.len(), 5);
    assert_eq!(s.calls[0], Call::Line(pt(10, 10), pt(70, 10), Color::WHITE));
    assert_eq!(
        s.calls[4],
        Call::Text("OK".into(), pt(14, 14), DEFAULT_FONT_SIZE, Color::GREEN)
    );
}

#[test]
fn button_fill_keeps_label_on_top() {
    let b = ok_button();
    let mut s = Recorder::new();
    b.fill(&mut s).unwrap();
    assert_eq!(
        s.calls,
        vec![
            Call::FillRect(pt(11, 11), 59, 29, Color::BLUE),
            Call::Text("OK".into(), pt(14, 14), DEFAULT_FONT_SIZE, Color::GREEN),
        ]
    );
}

#[test]
fn unlabelled_button_draws_frame_only() {
    let b = Button::new(0, 0, 10, 10);
    let mut s = Recorder::new();
    b.draw(&mut s).unwrap();
    assert!(s.calls.iter().all(|c| matches!(c, Call::Line(..))));
}

#[test]
fn button_display_flashes_and_restores() {
    let mut b = ok_button();
    let mut s = Recorder::new();
    let mut delay = CountingDelay::default();
    b.button_display(&mut s, &mut delay, Color::RED).unwrap();

    assert_eq!(delay.total_ns, u64::from(FLASH_DURATION_MS) * 1_000_000);
    assert_eq!(s.calls.len(), 10);
    assert!(s.calls[..5].iter().all(|c| c.color() == Color::RED));
    assert_eq!(s.calls[5].color(), Color::WHITE);
    assert_eq!(s.calls[9].color(), Color::GREEN);

    assert_eq!(b.border_color(), Color::WHITE);
    assert_eq!(b.text_color(), Color::GREEN);
    assert!(!b.is_flashing());
}

#[test]
fn button_display_restores_colours_on_failure() {
    let mut b = ok_button();
    let mut s = Recorder::failing_after(2);
    let mut delay = CountingDelay::default();
    assert_eq!(
        b.button_display(&mut s, &mut delay, Color::RED),
        Err(Error::Display)
    );
    assert_eq!(delay.total_ns, 0);
    assert_eq!(b.border_color(), Color::WHITE);
    assert_eq!(b.text_color(), Color::GREEN);
}

#[test]
fn two_phase_flash_restores_after_deadline() {
    let mut b = ok_button();
    let mut s = Recorder::new();

    let deadline = b.begin_flash(&mut s, Color::RED, 1_000).unwrap();
    assert_eq!(deadline, 1_000 + u64::from(FLASH_DURATION_MS));
    assert!(b.is_flashing());
    assert_eq!(b.border_color(), Color::RED);
    assert_eq!(b.text_color(), Color::RED);
    assert_eq!(s.take().len(), 5);

    assert!(!b.poll_flash(&mut s, deadline - 1).unwrap());
    assert!(s.calls.is_empty());

    assert!(b.poll_flash(&mut s, deadline).unwrap());
    assert!(!b.is_flashing());
    assert_eq!(b.border_color(), Color::WHITE);
    assert_eq!(b.text_color(), Color::GREEN);
    assert_eq!(s.take().len(), 5);

    assert!(!b.poll_flash(&mut s, deadline + 1_000).unwrap());
    assert!(s.calls.is_empty());
}

#[test]
fn repeated_begin_keeps_original_colours() {
    let mut b = ok_button();
    let mut s = Recorder::new();

    b.begin_flash(&mut s, Color::RED, 0).unwrap();
    let deadline = b.begin_flash(&mut s, Color::YELLOW, 80).unwrap();
    assert_eq!(deadline, 80 + u64::from(FLASH_DURATION_MS));
    assert_eq!(b.border_color(), Color::YELLOW);

    assert!(!b.poll_flash(&mut s, 100).unwrap());
    assert!(b.poll_flash(&mut s, deadline).unwrap());
    assert_eq!(b.border_color(), Color::WHITE);
    assert_eq!(b.text_color(), Color::GREEN);
}

#[test]
fn end_flash_restores_immediately() {
    let mut b = ok_button();
    let mut s = Recorder::new();

    b.end_flash(&mut s).unwrap();
    assert!(s.calls.is_empty());

    b.begin_flash(&mut s, Color::RED, 0).unwrap();
    s.take();
    b.end_flash(&mut s).unwrap();
    assert!(!b.is_flashing());
    assert_eq!(b.border_color(), Color::WHITE);
    assert_eq!(s.calls[0].color(), Color::WHITE);
}

#[test]
fn colour_setters_during_flash_survive_restore() {
    let mut b = ok_button();
    let mut s = Recorder::new();
    b.begin_flash(&mut s, Color::RED, 0).unwrap();

    b.set_border_color(Color::CYAN);
    b.set_text_color(Color::YELLOW);
    assert_eq!(b.border_color(), Color::RED);
    assert_eq!(b.text_color(), Color::RED);

    s.take();
    assert!(b.poll_flash(&mut s, 100).unwrap());
    assert_eq!(b.border_color(), Color::CYAN);
    assert_eq!(b.text_color(), Color::YELLOW);
    assert_eq!(s.calls[0].color(), Color::CYAN);
    assert_eq!(s.calls[4].color(), Color::YELLOW);
}

#[test]
fn replacing_label_during_flash_keeps_highlight() {
    let mut b = ok_button();
    let mut s = Recorder::new();
    b.begin_flash(&mut s, Color::RED, 0).unwrap();
    b.set_text_values("Done", 12, 12, 1, Color::BLUE);
    assert_eq!(b.text_color(), Color::RED);

    b.end_flash(&mut s).unwrap();
    assert_eq!(b.text_color(), Color::BLUE);
    assert_eq!(b.label().unwrap().text(), "Done");
}

#[test]
fn button_display_cancels_pending_flash() {
    let mut b = ok_button();
    let mut s = Recorder::new();
    b.begin_flash(&mut s, Color::RED, 0).unwrap();
    b.button_display(&mut s, &mut CountingDelay::default(), Color::CYAN)
        .unwrap();
    assert!(!b.is_flashing());
    assert_eq!(b.border_color(), Color::WHITE);
    assert_eq!(b.text_color(), Color::GREEN);
}

// ═══════════════════════════════════════════════════════════════════════════
// Radio Button Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn radio_button_toggles_and_hits() {
    let mut r = RadioButton::new(50, 50, Color::WHITE, Color::GREEN);
    assert!(!r.button_state());

    r.reset_button_state(&mut Recorder::new()).unwrap();
    assert!(r.button_state());
    assert!(r.is_button_pressed(50, 50));
    assert!(r.is_button_pressed(60, 50));
    assert!(!r.is_button_pressed(61, 50));
}

#[test]
fn radio_hit_test_does_not_toggle() {
    let r = RadioButton::new(0, 0, Color::WHITE, Color::GREEN);
    assert!(r.is_button_pressed(3, 4));
    assert_eq!(r.state(), ToggleState::Off);
}

#[test]
fn radio_draw_reflects_state() {
    let mut r = RadioButton::new(50, 50, Color::WHITE, Color::GREEN);
    let mut s = Recorder::new();

    r.reset_button_state(&mut s).unwrap();
    assert_eq!(
        s.take(),
        vec![
            Call::Circle(pt(50, 50), 10, Color::WHITE),
            Call::FillCircle(pt(50, 50), 9, Color::GREEN),
        ]
    );

    r.reset_button_state(&mut s).unwrap();
    assert!(!r.button_state());
    assert_eq!(
        s.take(),
        vec![
            Call::Circle(pt(50, 50), 10, Color::WHITE),
            Call::FillCircle(pt(50, 50), 9, BACKGROUND_COLOR),
        ]
    );
}

#[test]
fn set_button_state_does_not_draw() {
    let mut r = RadioButton::new(0, 0, Color::WHITE, Color::GREEN);
    r.set_button_state(true);
    assert!(r.button_state());

    let mut s = Recorder::new();
    r.draw(&mut s).unwrap();
    assert_eq!(s.calls[1], Call::FillCircle(pt(0, 0), 9, Color::GREEN));
}

#[test]
fn radio_accessors() {
    let mut r = RadioButton::new(5, 6, Color::WHITE, Color::GREEN);
    assert_eq!((r.x_start(), r.y_start()), (5, 6));
    assert_eq!(r.radius(), 10);

    r.set_center(100, 120);
    r.set_border_color(Color::RED);
    r.set_fill_color(Color::BLUE);
    assert_eq!((r.x_start(), r.y_start()), (100, 120));
    assert_eq!(r.border_color(), Color::RED);
    assert_eq!(r.fill_color(), Color::BLUE);
    assert!(r.is_button_pressed(110, 120));

    // The saved colour only shows once the button is on.
    let mut s = Recorder::new();
    r.draw(&mut s).unwrap();
    assert_eq!(s.calls[1].color(), BACKGROUND_COLOR);
    r.reset_button_state(&mut s).unwrap();
    assert_eq!(s.calls[3].color(), Color::BLUE);
}

#[test]
fn toggle_state_helpers() {
    assert_eq!(ToggleState::default(), ToggleState::Off);
    assert_eq!(ToggleState::Off.toggled(), ToggleState::On);
    assert_eq!(ToggleState::On.toggled().toggled(), ToggleState::On);
    assert_eq!(ToggleState::from(true), ToggleState::On);
    assert!(!ToggleState::from(false).is_on());
}
