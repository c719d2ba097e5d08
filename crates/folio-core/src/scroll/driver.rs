//! Smooth scroll driver: the single writer of the virtual scroll offset
//!
//! Native wheel/touch deltas move a target offset; every frame the smoothed
//! offset chases it with a frame-rate independent lerp. Commanded scrolls
//! replace the chase with an eased trajectory for their duration.

use std::time::Duration;

use tracing::{debug, trace, warn};

use super::easing::EasingType;
use super::timing::{frame_factor, is_complete, lerp, progress};
use crate::config::ScrollConfig;
use crate::navigation::ScrollCommand;
use crate::section::SectionRegistry;
use crate::{Error, Result};

/// Raw input as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeInput {
    /// Wheel notches (positive = down)
    Wheel(f64),
    /// Touch drag distance (positive = down)
    Touch(f64),
}

/// Commanded scroll in flight
#[derive(Debug, Clone)]
struct Trajectory {
    /// Section the trajectory was resolved from
    section_id: String,
    elapsed: Duration,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone)]
pub struct SmoothScrollDriver {
    config: ScrollConfig,
    /// Accumulated input position
    target_offset: f64,
    /// Displayed position
    smoothed_offset: f64,
    max_extent: f64,
    trajectory: Option<Trajectory>,
    /// A frame-loop step is scheduled
    running: bool,
    /// Native input listeners attached
    listening: bool,
}

impl Default for SmoothScrollDriver {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl SmoothScrollDriver {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            target_offset: 0.0,
            smoothed_offset: 0.0,
            max_extent: 0.0,
            trajectory: None,
            running: false,
            listening: true,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    pub fn smoothed_offset(&self) -> f64 {
        self.smoothed_offset
    }

    pub fn max_extent(&self) -> f64 {
        self.max_extent
    }

    /// A commanded trajectory is playing
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.trajectory.is_some()
    }

    /// The host should keep calling `step` at animation frame rate
    #[inline]
    pub fn needs_frame(&self) -> bool {
        self.running
    }

    pub fn is_destroyed(&self) -> bool {
        !self.listening
    }

    /// Section of the in-flight commanded scroll, if any
    pub fn trajectory_target(&self) -> Option<&str> {
        self.trajectory.as_ref().map(|t| t.section_id.as_str())
    }

    /// Update the scrollable extent after a layout change
    pub fn set_max_extent(&mut self, extent: f64) {
        self.max_extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        self.target_offset = self.clamp(self.target_offset);
        self.smoothed_offset = self.clamp(self.smoothed_offset);
        if let Some(trajectory) = self.trajectory.as_mut() {
            trajectory.to = trajectory.to.clamp(0.0, self.max_extent);
        }
        if self.target_offset != self.smoothed_offset {
            self.running = true;
        }
    }

    /// Apply host input with the configured multipliers
    pub fn on_input(&mut self, input: NativeInput) {
        let delta = match input {
            NativeInput::Wheel(notches) => notches * self.config.wheel_multiplier,
            NativeInput::Touch(distance) => distance * self.config.touch_multiplier,
        };
        self.on_native_delta(delta);
    }

    /// Accumulate a raw delta into the target offset
    pub fn on_native_delta(&mut self, delta: f64) {
        if !self.listening || !delta.is_finite() {
            return;
        }

        if let Some(trajectory) = &self.trajectory {
            if !self.config.interrupt_on_input {
                trace!(delta, section = %trajectory.section_id, "Input ignored during commanded scroll");
                return;
            }
            debug!(section = %trajectory.section_id, "Commanded scroll interrupted by input");
            self.trajectory = None;
            self.target_offset = self.smoothed_offset;
        }

        self.target_offset = self.clamp(self.target_offset + delta);
        self.running = true;
    }

    /// Advance one frame of `dt` and return the smoothed offset
    pub fn step(&mut self, dt: Duration) -> f64 {
        if !self.listening || !self.running {
            return self.smoothed_offset;
        }

        if let Some(mut trajectory) = self.trajectory.take() {
            trajectory.elapsed += dt;
            if is_complete(trajectory.elapsed, trajectory.duration) {
                self.smoothed_offset = trajectory.to;
                self.target_offset = trajectory.to;
                self.running = false;
                debug!(section = %trajectory.section_id, offset = trajectory.to, "Commanded scroll settled");
            } else {
                let t = trajectory
                    .easing
                    .apply(progress(trajectory.elapsed, trajectory.duration));
                self.smoothed_offset = lerp(trajectory.from, trajectory.to, t);
                self.target_offset = self.smoothed_offset;
                self.trajectory = Some(trajectory);
            }
            return self.smoothed_offset;
        }

        if !self.config.smooth_enabled {
            self.smoothed_offset = self.target_offset;
            self.running = false;
            return self.smoothed_offset;
        }

        let k = frame_factor(
            self.config.lerp_factor,
            dt,
            Duration::from_millis(self.config.reference_frame_ms),
        );
        self.smoothed_offset += (self.target_offset - self.smoothed_offset) * k;

        if (self.target_offset - self.smoothed_offset).abs() < self.config.settle_threshold {
            self.smoothed_offset = self.target_offset;
            self.running = false;
        }

        self.smoothed_offset
    }

    /// Start a commanded scroll to a registered section; last caller wins
    pub fn scroll_to(&mut self, command: &ScrollCommand, registry: &SectionRegistry) -> bool {
        match self.try_scroll_to(command, registry) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Scroll command ignored");
                false
            }
        }
    }

    fn try_scroll_to(&mut self, command: &ScrollCommand, registry: &SectionRegistry) -> Result<()> {
        if !self.listening {
            return Err(Error::Other("scroll driver destroyed".to_string()));
        }

        let bounds = registry
            .bounds_of(&command.target_section_id)
            .ok_or_else(|| Error::UnknownSection(command.target_section_id.clone()))?;
        if !bounds.is_valid() {
            return Err(Error::UnknownSection(format!(
                "{} (stale geometry)",
                command.target_section_id
            )));
        }

        let to = self.clamp(bounds.top);
        if let Some(previous) = &self.trajectory {
            debug!(
                previous = %previous.section_id,
                next = %command.target_section_id,
                "Replacing in-flight commanded scroll"
            );
        }

        if command.duration.is_zero() || !self.config.smooth_enabled {
            self.trajectory = None;
            self.jump_to(to);
            return Ok(());
        }

        self.trajectory = Some(Trajectory {
            section_id: command.target_section_id.clone(),
            elapsed: Duration::ZERO,
            from: self.smoothed_offset,
            to,
            duration: command.duration,
            easing: command.easing,
        });
        self.running = true;
        debug!(section = %command.target_section_id, to, "Commanded scroll started");
        Ok(())
    }

    /// Set the offset immediately (no animation)
    pub fn jump_to(&mut self, offset: f64) {
        if !self.listening {
            return;
        }
        let offset = self.clamp(offset);
        self.trajectory = None;
        self.target_offset = offset;
        self.smoothed_offset = offset;
        self.running = false;
    }

    /// Cancel any commanded scroll and stop at the current position
    pub fn cancel(&mut self) {
        self.trajectory = None;
        self.target_offset = self.smoothed_offset;
        self.running = false;
    }

    /// Stop the frame loop and detach input; safe to call repeatedly
    pub fn destroy(&mut self) {
        if !self.listening {
            return;
        }
        self.listening = false;
        self.running = false;
        self.trajectory = None;
        debug!("Scroll driver destroyed");
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_extent)
        } else {
            0.0
        }
    }
}
