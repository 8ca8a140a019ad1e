//! Typewriter Effect
//!
//! Types a word, holds it, deletes it, moves to the next word. Loops forever.

pub const TYPE_MS: u32 = 70;
pub const DELETE_MS: u32 = 50;
pub const HOLD_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    words: Vec<&'static str>,
    word: usize,
    /// Visible characters (not bytes) of the current word
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(words: &[&'static str]) -> Self {
        Self {
            words: words.to_vec(),
            word: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn current_word(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or("")
    }

    /// Currently visible text
    pub fn text(&self) -> &'static str {
        let word = self.current_word();
        let end = word
            .char_indices()
            .nth(self.shown)
            .map(|(idx, _)| idx)
            .unwrap_or(word.len());
        &word[..end]
    }

    /// Advance one step; returns how long to wait before the next step
    pub fn step(&mut self) -> u32 {
        if self.words.is_empty() {
            return HOLD_MS;
        }
        let len = self.current_word().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    self.phase = Phase::Deleting;
                    HOLD_MS
                } else {
                    TYPE_MS
                }
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                    DELETE_MS
                } else {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    TYPE_MS
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_every_prefix_then_holds() {
        let mut tw = Typewriter::new(&["awake?", "in control?"]);
        let mut seen = vec![tw.text()];
        let mut delays = Vec::new();
        for _ in 0..6 {
            delays.push(tw.step());
            seen.push(tw.text());
        }
        assert_eq!(seen, vec!["", "a", "aw", "awa", "awak", "awake", "awake?"]);
        assert_eq!(delays[..5], [TYPE_MS; 5]);
        assert_eq!(delays[5], HOLD_MS);
    }

    #[test]
    fn test_deletes_then_moves_on_and_loops() {
        let mut tw = Typewriter::new(&["ab", "c"]);
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.step(), DELETE_MS);
        assert_eq!(tw.text(), "a");
        tw.step();
        assert_eq!(tw.text(), "");
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "c");
        tw.step();
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_multibyte_safe() {
        let mut tw = Typewriter::new(&["día"]);
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "dí");
    }
}
