//! Playback pace between narrated steps
//!
//! The delay for a given [`AnimationSpeed`] is
//!
//! ```text
//! delay = max(base_delay_ms - speed * delay_scale_ms, min_delay_ms)
//! ```
//!
//! so a faster speed never yields a longer delay. With the defaults
//! (1000 ms, 10 ms per unit, floor 0) speed 50 waits 500 ms and speed 100
//! does not wait at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Playback speed in the range 1..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnimationSpeed(u8);

impl AnimationSpeed {
    pub const MIN: AnimationSpeed = AnimationSpeed(1);
    pub const MAX: AnimationSpeed = AnimationSpeed(100);

    /// Clamp any integer into the valid range
    pub fn clamped(value: i64) -> Self {
        AnimationSpeed(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn faster(self, by: u8) -> Self {
        Self::clamped(self.0 as i64 + by as i64)
    }

    pub fn slower(self, by: u8) -> Self {
        Self::clamped(self.0 as i64 - by as i64)
    }
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        AnimationSpeed(50)
    }
}

impl TryFrom<u8> for AnimationSpeed {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(AnimationSpeed(value))
        } else {
            Err(format!("speed must be between 1 and 100, got {}", value))
        }
    }
}

impl From<AnimationSpeed> for u8 {
    fn from(speed: AnimationSpeed) -> Self {
        speed.0
    }
}

impl fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Delay curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub base_delay_ms: u64,
    pub delay_scale_ms: u64,
    pub min_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            base_delay_ms: 1000,
            delay_scale_ms: 10,
            min_delay_ms: 0,
        }
    }
}

impl PacingConfig {
    pub fn delay(&self, speed: AnimationSpeed) -> Duration {
        let reduction = (speed.get() as u64).saturating_mul(self.delay_scale_ms);
        let ms = self
            .base_delay_ms
            .saturating_sub(reduction)
            .max(self.min_delay_ms);
        Duration::from_millis(ms)
    }
}

/// Live-adjustable speed shared between the controls and a running sort
///
/// Read once per step boundary, so a change takes effect at the next pause.
#[derive(Debug, Clone)]
pub struct SpeedControl {
    speed: Arc<AtomicU8>,
}

impl SpeedControl {
    pub fn new(speed: AnimationSpeed) -> Self {
        SpeedControl {
            speed: Arc::new(AtomicU8::new(speed.get())),
        }
    }

    pub fn get(&self) -> AnimationSpeed {
        AnimationSpeed::clamped(self.speed.load(Ordering::Relaxed) as i64)
    }

    pub fn set(&self, speed: AnimationSpeed) {
        self.speed.store(speed.get(), Ordering::Relaxed);
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new(AnimationSpeed::default())
    }
}

/// The suspension point between two steps
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Blocks the calling thread for the requested delay
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _delay: Duration) {}
}

/// Records every requested delay without waiting
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

#[cfg(test)]
impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}
