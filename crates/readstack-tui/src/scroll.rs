//! Scroll offset controller
//!
//! Produces the single offset the header derivation consumes. Wheel and key
//! input feed velocity; each animation tick applies friction and, outside the
//! content bounds, a spring back toward the edge. Transient negative offsets
//! are what drive the header's pull-to-grow branch, so the offset is never
//! clamped at the source.

use readstack_core::ScrollConfig;

/// Velocity decay per tick
const FRICTION: f64 = 0.92;

/// Pull of the overscroll spring per tick
const SPRING: f64 = 0.25;

/// Velocity below this is treated as stopped
const MIN_VELOCITY: f64 = 0.05;

/// Offset distance from the edge below which the spring snaps
const SNAP_DISTANCE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct ScrollController {
    /// Current offset in layout units; negative during overscroll
    offset: f64,
    velocity: f64,
    /// Largest settled offset the content allows
    max_offset: f64,
    config: ScrollConfig,
}

impl ScrollController {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            offset: 0.0,
            velocity: 0.0,
            max_offset: 0.0,
            config,
        }
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Update the scrollable extent; the current offset is pulled back on the
    /// next ticks if it now lies beyond the end.
    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
    }

    /// Apply a wheel or key step. Positive scrolls down.
    pub fn scroll_by(&mut self, delta: f64) {
        if self.config.smooth_enabled {
            self.velocity += delta;
        } else {
            self.offset = (self.offset + delta * self.config.scroll_lines as f64)
                .clamp(0.0, self.max_offset);
            self.velocity = 0.0;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0.0;
        self.velocity = 0.0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
        self.velocity = 0.0;
    }

    /// Whether a tick at animation rate is required
    pub fn needs_update(&self) -> bool {
        self.velocity.abs() >= MIN_VELOCITY || self.out_of_bounds()
    }

    fn out_of_bounds(&self) -> bool {
        self.offset < 0.0 || self.offset > self.max_offset
    }

    /// Advance one animation frame and return the new offset.
    pub fn tick(&mut self) -> f64 {
        self.offset += self.velocity;
        self.velocity *= FRICTION;

        if self.velocity.abs() < MIN_VELOCITY {
            self.velocity = 0.0;
        }

        // Spring back from overscroll on either edge
        let target = self.offset.clamp(0.0, self.max_offset);
        if self.offset != target {
            let pull = (target - self.offset) * SPRING;
            self.offset += pull;
            // The spring overrides momentum so the edge never oscillates
            self.velocity *= FRICTION;
            if (target - self.offset).abs() < SNAP_DISTANCE && self.velocity.abs() < MIN_VELOCITY {
                self.offset = target;
                self.velocity = 0.0;
            }
        }

        self.offset
    }
}
