// File: crates/chart-core/src/feedback.rs
// Summary: Haptic feedback collaborator; fire-and-forget, failures never reach the caller.

use thiserror::Error;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticKind {
    Selection,
    Light,
    Medium,
    Success,
    Warning,
}

#[derive(Debug, Error)]
#[error("haptic feedback failed: {0}")]
pub struct HapticError(pub String);

/// Device vibration hook invoked on discrete user actions (tab switch, button press).
pub trait Haptics {
    fn trigger(&self, kind: HapticKind) -> Result<(), HapticError>;
}

/// Haptics for hosts without a vibration motor.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn trigger(&self, _kind: HapticKind) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Trigger `kind` and drop any failure after logging it.
pub fn trigger_quietly(haptics: &dyn Haptics, kind: HapticKind) {
    if let Err(err) = haptics.trigger(kind) {
        debug!(error = %err, ?kind, "ignoring haptic failure");
    }
}
