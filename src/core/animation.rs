//! Animation module - frame sequences and playback
//!
//! A `Clip` is an ordered list of canvases with a fixed per-frame duration.
//! A `Player` advances through a clip from `tick(elapsed_ms)` calls, so
//! playback timing lives in the loop that drives it, not here.

use crate::core::canvas::Canvas;

/// An ordered frame sequence with a fixed per-frame duration.
#[derive(Debug, Clone)]
pub struct Clip {
    frames: Vec<Canvas>,
    frame_ms: u32,
    looping: bool,
}

impl Clip {
    pub fn new(frames: Vec<Canvas>, frame_ms: u32, looping: bool) -> Self {
        // A zero duration would make tick() spin forever.
        let frame_ms = frame_ms.max(1);
        Self {
            frames,
            frame_ms,
            looping,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame_ms(&self) -> u32 {
        self.frame_ms
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn get(&self, index: usize) -> Option<&Canvas> {
        self.frames.get(index)
    }
}

/// Playback state machine over a `Clip`.
#[derive(Debug, Clone)]
pub struct Player {
    clip: Clip,
    index: usize,
    accumulator_ms: u32,
    paused: bool,
    finished: bool,
}

impl Player {
    pub fn new(clip: Clip) -> Self {
        let finished = clip.is_empty();
        Self {
            clip,
            index: 0,
            accumulator_ms: 0,
            paused: false,
            finished,
        }
    }

    /// Advance playback. Returns true when the current frame changed.
    ///
    /// A large elapsed time skips frames rather than replaying them; looping
    /// clips wrap with the remainder carried over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.finished {
            return false;
        }

        self.accumulator_ms += elapsed_ms;
        let mut advanced = false;

        while self.accumulator_ms >= self.clip.frame_ms {
            self.accumulator_ms -= self.clip.frame_ms;

            if self.index + 1 < self.clip.len() {
                self.index += 1;
                advanced = true;
            } else if self.clip.looping {
                self.index = 0;
                advanced = true;
            } else {
                // Last frame has played out its full duration.
                self.finished = true;
                self.accumulator_ms = 0;
                break;
            }
        }

        advanced
    }

    /// Manually advance one frame, independent of timing.
    ///
    /// Works while paused, which is how static scenes get stepped from the
    /// keyboard. Looping clips wrap; non-looping clips stay on their last
    /// frame.
    pub fn step(&mut self) {
        if self.clip.is_empty() {
            return;
        }
        self.accumulator_ms = 0;
        if self.index + 1 < self.clip.len() {
            self.index += 1;
        } else if self.clip.looping {
            self.index = 0;
        }
    }

    /// The canvas to show right now. None only for an empty clip.
    pub fn frame(&self) -> Option<&Canvas> {
        self.clip.get(self.index)
    }

    pub fn frame_index(&self) -> usize {
        self.index
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.accumulator_ms = 0;
        self.finished = self.clip.is_empty();
    }

    pub fn clip(&self) -> &Clip {
        &self.clip
    }
}
