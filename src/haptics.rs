//! Haptic feedback bridge
//!
//! The panel has no haptics hardware of its own; signals are forwarded to
//! the host environment by name. Exactly two names exist.

use std::fmt;

use tracing::debug;

/// Tactile feedback event forwarded to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticSignal {
    /// A click was rejected
    Failure,
    /// A selection took effect
    Selection,
}

impl fmt::Display for HapticSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HapticSignal::Failure => write!(f, "failure"),
            HapticSignal::Selection => write!(f, "selection"),
        }
    }
}

/// Forward a haptic signal to the host environment
pub fn forward_haptic(signal: HapticSignal) {
    debug!("[vacmap:haptics] forwarding '{signal}'");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names_match_host_contract() {
        assert_eq!(HapticSignal::Failure.to_string(), "failure");
        assert_eq!(HapticSignal::Selection.to_string(), "selection");
    }
}
