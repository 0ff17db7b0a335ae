//! Time-window debouncing
//!
//! A contact is considered settled once the raw sample has not changed for
//! a full window. Timestamps are free-running milliseconds and may wrap.

/// Default settling window
pub const DEBOUNCE_MS: u32 = 20;

/// Stable state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Button became pressed
    RoseToActive,
    /// Button became released
    FellToInactive,
}

/// Debouncer for a single input
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Last raw sample
    raw: bool,
    /// Debounced state
    stable: bool,
    /// When `raw` last changed
    last_change_ms: u32,
    /// Settling window
    window_ms: u32,
}

impl Debouncer {
    /// Create a debouncer seeded with the input's current level
    pub const fn new(initial: bool, now_ms: u32) -> Self {
        Self::with_window(initial, now_ms, DEBOUNCE_MS)
    }

    /// Create a debouncer with a custom settling window
    pub const fn with_window(initial: bool, now_ms: u32, window_ms: u32) -> Self {
        Self {
            raw: initial,
            stable: initial,
            last_change_ms: now_ms,
            window_ms,
        }
    }

    /// Feed one raw sample
    ///
    /// Returns the edge when the stable state changes. At most one edge is
    /// reported per call.
    pub fn update(&mut self, raw: bool, now_ms: u32) -> Option<Edge> {
        if raw != self.raw {
            self.raw = raw;
            self.last_change_ms = now_ms;
        }

        if self.raw == self.stable {
            return None;
        }

        if now_ms.wrapping_sub(self.last_change_ms) < self.window_ms {
            return None;
        }

        self.stable = self.raw;
        Some(if self.stable {
            Edge::RoseToActive
        } else {
            Edge::FellToInactive
        })
    }

    /// Debounced state
    pub fn is_active(&self) -> bool {
        self.stable
    }
}
