// File: crates/chart-core/src/animation.rs
// Summary: Time-driven tweens sampled from an external clock, decoupled from rendering.

use std::time::{Duration, Instant};

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 { 4.0 * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0 }
            }
        }
    }
}

/// One interpolation from `from` to `to` starting at clock time `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Duration, duration: Duration, easing: Easing) -> Self {
        Self { from, to, start, duration, easing }
    }

    /// A tween that already sits at `value`.
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, Duration::ZERO, Easing::Linear)
    }

    /// Linear progress in `[0, 1]` at clock time `now`. Zero-length tweens are complete.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated value at clock time `now`.
    pub fn sample(&self, now: Duration) -> f32 {
        let t = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// A value that animates toward its latest target.
///
/// Retargeting starts the next tween from wherever the current one is at `now`,
/// so an interrupted transition continues without a jump.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedValue {
    tween: Tween,
    duration: Duration,
    easing: Easing,
}

impl AnimatedValue {
    pub fn new(initial: f32, duration: Duration, easing: Easing) -> Self {
        Self { tween: Tween::settled(initial), duration, easing }
    }

    pub fn set_target(&mut self, to: f32, now: Duration) {
        let from = self.tween.sample(now);
        self.tween = Tween::new(from, to, now, self.duration, self.easing);
    }

    pub fn sample(&self, now: Duration) -> f32 {
        self.tween.sample(now)
    }

    pub fn target(&self) -> f32 {
        self.tween.to
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        self.tween.is_finished(now)
    }
}

/// Entry animation for a renderer: 0 -> 1 over `duration` when `animated`, else already complete.
pub fn entry_tween(animated: bool, duration: Duration, start: Duration) -> Tween {
    if animated {
        Tween::new(0.0, 1.0, start, duration, Easing::EaseOutCubic)
    } else {
        Tween::settled(1.0)
    }
}

/// Source of clock time for sampling tweens.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock advanced by hand; used for frame-by-frame export and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}
