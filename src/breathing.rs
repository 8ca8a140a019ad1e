//! Breath Pacing
//!
//! 4-7-8 cycle: inhale 4 s, hold 7 s, exhale 8 s.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    pub fn seconds(self) -> u32 {
        match self {
            BreathPhase::Inhale => 4,
            BreathPhase::Hold => 7,
            BreathPhase::Exhale => 8,
        }
    }

    pub fn next(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Exhale",
        }
    }

    /// CSS class driving the box animation
    pub fn class(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "breath-box inhale",
            BreathPhase::Hold => "breath-box hold",
            BreathPhase::Exhale => "breath-box exhale",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreathState {
    pub phase: BreathPhase,
    /// Seconds left in the phase, never 0
    pub counter: u32,
}

impl Default for BreathState {
    fn default() -> Self {
        Self {
            phase: BreathPhase::Inhale,
            counter: BreathPhase::Inhale.seconds(),
        }
    }
}

impl BreathState {
    /// One second elapsed
    pub fn tick(&mut self) {
        if self.counter <= 1 {
            self.phase = self.phase.next();
            self.counter = self.phase.seconds();
        } else {
            self.counter -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut state = BreathState::default();
        let mut phases = vec![(state.phase, state.counter)];
        for _ in 0..19 {
            state.tick();
            phases.push((state.phase, state.counter));
        }
        assert_eq!(phases[3], (BreathPhase::Inhale, 1));
        assert_eq!(phases[4], (BreathPhase::Hold, 7));
        assert_eq!(phases[10], (BreathPhase::Hold, 1));
        assert_eq!(phases[11], (BreathPhase::Exhale, 8));
        assert_eq!(phases[19], (BreathPhase::Inhale, 4));
        assert!(phases.iter().all(|(_, c)| *c >= 1));
    }
}
