//! One-shot entrance transition
//!
//! The screen fades in exactly once, after the first completed draw. Modeled
//! as an explicit state machine so teardown can cancel it; a cancelled
//! transition freezes and never writes progress again.

use std::time::{Duration, Instant};

use readstack_core::EasingType;

use super::easing::EasingTypeExt;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// First layout has not completed yet
    Unmounted,
    /// Fading in since the recorded instant
    Animating(Instant),
    /// Fade complete; progress stays 1 forever
    Settled,
    /// Torn down mid-fade; progress frozen at the last sampled value
    Cancelled(f64),
}

/// Entrance fade state machine
#[derive(Debug, Clone)]
pub struct EntranceTransition {
    state: State,
    duration: Duration,
    easing: EasingType,
    /// Last sampled eased progress, so cancel() can freeze it
    progress: f64,
}

impl EntranceTransition {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            state: State::Unmounted,
            duration,
            easing,
            progress: 0.0,
        }
    }

    /// Start the fade. Only the first call has any effect; the transition
    /// runs exactly once per screen lifetime.
    pub fn begin(&mut self, now: Instant) {
        if self.state == State::Unmounted {
            self.state = State::Animating(now);
        }
    }

    /// Sample the fade at `now`, settling it once the duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let State::Animating(start) = self.state {
            let elapsed = now.saturating_duration_since(start);
            if elapsed >= self.duration || self.duration.is_zero() {
                self.progress = 1.0;
                self.state = State::Settled;
            } else {
                let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                self.progress = self.easing.apply(t);
            }
        }
    }

    /// Current progress in [0, 1]
    pub fn progress(&self) -> f64 {
        match self.state {
            State::Unmounted => 0.0,
            State::Animating(_) => self.progress,
            State::Settled => 1.0,
            State::Cancelled(p) => p,
        }
    }

    /// Freeze the transition; after this no tick changes progress again.
    pub fn cancel(&mut self) {
        match self.state {
            State::Settled => self.state = State::Cancelled(1.0),
            State::Cancelled(_) => {}
            _ => self.state = State::Cancelled(self.progress),
        }
    }

    /// Whether a tick at animation rate is still needed
    pub fn needs_update(&self) -> bool {
        matches!(self.state, State::Animating(_))
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.state, State::Settled | State::Cancelled(_))
    }
}
