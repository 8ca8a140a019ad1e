//! Theme State
//!
//! Fire mode is a cosmetic variant applied as a class on `<body>`.

/// Class toggled on `<body>` while fire mode is on
pub const FIRE_MODE_CLASS: &str = "fire-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub fire_mode: bool,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        Self {
            fire_mode: !self.fire_mode,
        }
    }

    /// Pick the fire-mode or standard variant of a class list
    pub fn pick(self, fire: &'static str, standard: &'static str) -> &'static str {
        if self.fire_mode {
            fire
        } else {
            standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        for start in [false, true] {
            let theme = ThemeState { fire_mode: start };
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_pick() {
        let theme = ThemeState::default();
        assert_eq!(theme.pick("fire-card", "card"), "card");
        assert_eq!(theme.toggled().pick("fire-card", "card"), "fire-card");
    }
}
