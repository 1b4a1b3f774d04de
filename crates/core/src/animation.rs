//! Frame cycling for animated entities.

/// Cycles through `frames` frame indices, holding each for `hold` calls.
///
/// A finite state machine: `next_frame` returns the current index and then
/// advances, wrapping back to frame 0 after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    frames: usize,
    hold: usize,
    current: usize,
    held: usize,
}

impl Animation {
    pub fn new(frames: usize, hold: usize) -> Self {
        Self {
            frames: frames.max(1),
            hold: hold.max(1),
            current: 0,
            held: 0,
        }
    }

    /// A single frame that never changes.
    pub fn still() -> Self {
        Self::new(1, 1)
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn hold(&self) -> usize {
        self.hold
    }

    pub fn next_frame(&mut self) -> usize {
        let frame = self.current;
        self.held += 1;
        if self.held == self.hold {
            self.held = 0;
            self.current = (self.current + 1) % self.frames;
        }
        frame
    }
}
