//! Optional haptic signal fired when a step timer reaches zero.
//!
//! Devices without the capability use [`NoHaptics`]; a failing signal is
//! skipped silently and never reported to the user.

use std::io::Write;
use std::time::Duration;

/// Default pulse length.
pub const DEFAULT_PULSE: Duration = Duration::from_millis(40);

pub trait Haptics {
    /// Fire a short pulse. Implementations swallow their own failures.
    fn pulse(&self, duration: Duration);
}

/// No feedback capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, _duration: Duration) {}
}

/// Rings the terminal bell, the closest a terminal gets to a vibration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn pulse(&self, duration: Duration) {
        let mut err = std::io::stderr();
        if err.write_all(b"\x07").and_then(|_| err.flush()).is_err() {
            tracing::debug!(?duration, "terminal bell unavailable, skipping pulse");
        }
    }
}

/// Pick the haptics implementation for the given setting.
pub fn from_setting(enabled: bool) -> Box<dyn Haptics> {
    if enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(NoHaptics)
    }
}
