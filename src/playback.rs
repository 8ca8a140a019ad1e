//! Playback Bookkeeping
//!
//! Carousel rotation and the soundboard's single-clip rule.

/// Index cycling through `len` slides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

/// At most one clip plays at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Soundboard {
    playing: Option<&'static str>,
}

impl Soundboard {
    pub fn playing(&self) -> Option<&'static str> {
        self.playing
    }

    /// Start `id`; returns the clip that must be stopped and rewound first
    pub fn play(&mut self, id: &'static str) -> Option<&'static str> {
        self.playing.replace(id)
    }

    /// A clip finished on its own
    pub fn ended(&mut self, id: &str) {
        if self.playing == Some(id) {
            self.playing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut rotation = Rotation::new(5);
        let seen: Vec<usize> = (0..6).map(|_| rotation.advance()).collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1]);
        assert_eq!(Rotation::new(0).advance(), 0);
    }

    #[test]
    fn test_soundboard_single_clip() {
        let mut board = Soundboard::default();
        assert_eq!(board.play("control"), None);
        assert_eq!(board.play("attract"), Some("control"));
        // a stale ended event from the stopped clip is ignored
        board.ended("control");
        assert_eq!(board.playing(), Some("attract"));
        board.ended("attract");
        assert_eq!(board.playing(), None);
    }
}
