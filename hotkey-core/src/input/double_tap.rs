//! Double-tap detection for the boot key
//!
//! Two debounced press edges no further apart than the window count as a
//! double tap. Release edges are ignored and the reference point rolls
//! forward on every press, so a third quick press after a non-triggering
//! second press can still trigger.

use super::debounce::{Debouncer, Edge};

/// Default double-tap window
pub const DOUBLE_TAP_MS: u32 = 400;

/// Debounced double-tap detector
#[derive(Debug, Clone)]
pub struct DoubleTap {
    debouncer: Debouncer,
    window_ms: u32,
    /// Time of the previous press edge; `None` until the first press
    last_press_ms: Option<u32>,
}

impl DoubleTap {
    /// Create a detector seeded with the key's current level
    pub const fn new(initial: bool, now_ms: u32, debounce_ms: u32, window_ms: u32) -> Self {
        Self {
            debouncer: Debouncer::with_window(initial, now_ms, debounce_ms),
            window_ms,
            last_press_ms: None,
        }
    }

    /// Feed one raw sample; returns `true` when a double tap completes
    pub fn update(&mut self, raw: bool, now_ms: u32) -> bool {
        match self.debouncer.update(raw, now_ms) {
            Some(Edge::RoseToActive) => self.on_press(now_ms),
            _ => false,
        }
    }

    /// Record a press edge; returns `true` when it completes a double tap
    pub fn on_press(&mut self, now_ms: u32) -> bool {
        let triggered = match self.last_press_ms {
            Some(previous) => now_ms.wrapping_sub(previous) <= self.window_ms,
            None => false,
        };
        self.last_press_ms = Some(now_ms);
        triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> DoubleTap {
        DoubleTap::new(false, 0, 20, DOUBLE_TAP_MS)
    }

    #[test]
    fn test_first_press_never_triggers() {
        let mut tap = detector();
        assert!(!tap.on_press(0));
    }

    #[test]
    fn test_two_presses_inside_window() {
        let mut tap = detector();
        assert!(!tap.on_press(1000));
        assert!(tap.on_press(1300));
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let mut tap = detector();
        tap.on_press(1000);
        assert!(tap.on_press(1400));

        let mut tap = detector();
        tap.on_press(1000);
        assert!(!tap.on_press(1401));
    }

    #[test]
    fn test_reference_rolls_forward() {
        let mut tap = detector();
        assert!(!tap.on_press(1000));
        assert!(!tap.on_press(1500));
        assert!(tap.on_press(1800));
    }

    #[test]
    fn test_debounced_presses() {
        let mut tap = detector();
        let mut now = 100;
        let mut fired = false;

        // press, release, press with 30 ms holds
        for level in [true, false, true] {
            for _ in 0..3 {
                fired |= tap.update(level, now);
                now += 10;
            }
        }
        assert!(fired);
        assert!(tap.debouncer.is_active());
    }

    #[test]
    fn test_bounce_is_not_a_second_press() {
        let mut tap = detector();
        tap.update(true, 0);
        tap.update(false, 5);
        tap.update(true, 8);
        assert!(!tap.update(true, 30));
        assert!(!tap.update(true, 60));
    }
}
