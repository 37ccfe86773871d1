//! Animation playback state.
//!
//! Playback is tick-based: [`Animation::advance`] is called once per tick
//! and a frame-hold counter decides when the frame index steps, keeping
//! playback speed independent of how frames map to wall time. The frame
//! index always stays in `0..frame_count`.

use bevy_ecs::prelude::Component;

/// Ticks a frame is held before the cursor steps.
pub const DEFAULT_HOLD_DURATION: u32 = 4;

/// Outcome of one [`Animation::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// The cursor stayed put or moved to a non-terminal frame.
    Advanced,
    /// The last frame finished a full hold; on looping animations the
    /// cursor wrapped to frame 0, otherwise it stays frozen on the end.
    Completed,
}

/// Frame cursor over a sprite sequence.
#[derive(Component, Clone, Copy, Debug)]
pub struct Animation {
    pub frame_index: usize,
    pub hold_count: u32,
    pub hold_duration: u32,
    /// Length of the sequence this cursor runs over; at least 1.
    pub frame_count: usize,
    /// Wrap back to frame 0 after the last frame completes.
    pub looped: bool,
}

impl Animation {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_index: 0,
            hold_count: 0,
            hold_duration: DEFAULT_HOLD_DURATION,
            frame_count: frame_count.max(1),
            looped: true,
        }
    }

    pub fn with_hold(mut self, hold_duration: u32) -> Self {
        self.hold_duration = hold_duration.max(1);
        self
    }

    /// Freeze on the last frame instead of wrapping.
    pub fn once(mut self) -> Self {
        self.looped = false;
        self
    }

    /// Per-tick advance.
    ///
    /// Increments the hold counter; when it reaches `hold_duration` the
    /// counter resets and the frame index steps. Reaching the end of the
    /// sequence reports [`AnimationStep::Completed`] and either wraps
    /// (`looped`) or freezes on the last frame.
    pub fn advance(&mut self) -> AnimationStep {
        self.hold_count += 1;
        if self.hold_count == self.hold_duration {
            self.hold_count = 0;
            if self.frame_index == self.frame_count - 1 {
                if self.looped {
                    self.frame_index = 0;
                }
                return AnimationStep::Completed;
            }
            self.frame_index += 1;
        }
        AnimationStep::Advanced
    }

    /// Rewind to frame 0 with a fresh hold counter.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.hold_count = 0;
    }
}
