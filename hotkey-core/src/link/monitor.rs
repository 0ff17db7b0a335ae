//! Connection monitor
//!
//! Turns the sampled host-present flag into connect and disconnect events.
//! A session begins when the host opens the port and ends when it closes
//! it; each session is announced exactly once.

/// Result of polling the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// No transition since the last poll
    #[default]
    Unchanged,
    /// A host session just started
    BecamePresent,
    /// The host went away
    BecameAbsent,
}

/// Host session tracker
#[derive(Debug, Clone, Default)]
pub struct ConnectionMonitor {
    /// Presence at the previous poll
    present: bool,
    /// Current session has been announced
    notified: bool,
}

impl ConnectionMonitor {
    /// Create a monitor that assumes no host
    pub const fn new() -> Self {
        Self {
            present: false,
            notified: false,
        }
    }

    /// Sample host presence
    pub fn poll(&mut self, present: bool) -> LinkEvent {
        let was_present = self.present;
        self.present = present;

        if present && !self.notified {
            self.notified = true;
            return LinkEvent::BecamePresent;
        }

        if !present && was_present {
            self.notified = false;
            return LinkEvent::BecameAbsent;
        }

        LinkEvent::Unchanged
    }

    /// Presence at the last poll
    pub fn is_present(&self) -> bool {
        self.present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_sequence() {
        let mut monitor = ConnectionMonitor::new();
        let events: heapless::Vec<LinkEvent, 8> = [false, true, true, false, true]
            .into_iter()
            .map(|p| monitor.poll(p))
            .collect();

        assert_eq!(
            events.as_slice(),
            &[
                LinkEvent::Unchanged,
                LinkEvent::BecamePresent,
                LinkEvent::Unchanged,
                LinkEvent::BecameAbsent,
                LinkEvent::BecamePresent,
            ]
        );
    }

    #[test]
    fn test_present_at_first_poll() {
        let mut monitor = ConnectionMonitor::new();
        assert_eq!(monitor.poll(true), LinkEvent::BecamePresent);
        assert!(monitor.is_present());
    }

    #[test]
    fn test_absent_is_quiet() {
        let mut monitor = ConnectionMonitor::new();
        for _ in 0..5 {
            assert_eq!(monitor.poll(false), LinkEvent::Unchanged);
        }
    }

    #[test]
    fn test_announced_once_per_session() {
        let mut monitor = ConnectionMonitor::new();
        monitor.poll(true);
        for _ in 0..10 {
            assert_eq!(monitor.poll(true), LinkEvent::Unchanged);
        }
    }
}
