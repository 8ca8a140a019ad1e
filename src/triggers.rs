//! Trigger Latches
//!
//! Exit intent and inactivity detection, kept free of browser types.

/// Session-storage key marking the exit modal as already shown
pub const EXIT_INTENT_KEY: &str = "exitIntentShown";

/// Pointer leaving within this many pixels of the top counts as exit intent
pub const EXIT_EDGE_PX: i32 = 5;

/// Fires at most once per session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExitIntent {
    triggered: bool,
}

impl ExitIntent {
    /// Restore from the session flag
    pub fn restore(stored: Option<&str>) -> Self {
        Self {
            triggered: stored == Some("true"),
        }
    }

    /// Pointer left the document at `client_y`; true only on the first
    /// qualifying exit
    pub fn on_pointer_leave(&mut self, client_y: i32) -> bool {
        if self.triggered || client_y > EXIT_EDGE_PX {
            return false;
        }
        self.triggered = true;
        true
    }
}

/// Input events that count as user activity
pub const ACTIVITY_EVENTS: [&str; 5] = ["mousedown", "mousemove", "keypress", "scroll", "touchstart"];

/// Checked once per inactivity window: fires when a whole window passed
/// without any recorded activity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InactivityTracker {
    active: bool,
}

impl Default for InactivityTracker {
    fn default() -> Self {
        Self { active: true }
    }
}

impl InactivityTracker {
    pub fn record_activity(&mut self) {
        self.active = true;
    }

    /// End of a window; true when the user was idle throughout it
    pub fn window_elapsed(&mut self) -> bool {
        let idle = !self.active;
        self.active = false;
        idle
    }
}

/// Pick an index in `0..len` from a uniform roll in `[0, 1)`
pub fn pick_index(roll: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    ((roll.clamp(0.0, 1.0) * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_intent_fires_once() {
        let mut exit = ExitIntent::default();
        assert!(!exit.on_pointer_leave(300));
        assert!(exit.on_pointer_leave(2));
        for y in [0, 1, 5, -10] {
            assert!(!exit.on_pointer_leave(y));
        }
    }

    #[test]
    fn test_exit_intent_restored_from_session() {
        let mut exit = ExitIntent::restore(Some("true"));
        assert!(!exit.on_pointer_leave(0));
        let mut fresh = ExitIntent::restore(None);
        assert!(fresh.on_pointer_leave(EXIT_EDGE_PX));
    }

    #[test]
    fn test_inactivity_needs_a_full_idle_window() {
        let mut tracker = InactivityTracker::default();
        // first window: user counted as active at load
        assert!(!tracker.window_elapsed());
        // second window: nothing happened
        assert!(tracker.window_elapsed());
        tracker.record_activity();
        assert!(!tracker.window_elapsed());
        assert!(tracker.window_elapsed());
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!(pick_index(0.0, 10), 0);
        assert_eq!(pick_index(0.999, 10), 9);
        assert_eq!(pick_index(1.0, 10), 9);
        assert_eq!(pick_index(0.5, 0), 0);
    }
}
