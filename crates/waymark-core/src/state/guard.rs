//! Re-entrancy guard for the scroll/click feedback loop.
//!
//! Clicking a category scrolls the view; scrolling updates the active
//! category. Without a guard the click-triggered smooth scroll re-selects
//! whatever section it passes through. The guard is a short-lived
//! suppression token armed by user-initiated clicks: while it is engaged,
//! scroll-driven selection updates are dropped.

use crate::config::NAV_COOLDOWN_MS;
use instant::Instant;
use std::time::Duration;

/// Guard lifecycle: idle, or suppressing until a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Idle,
    UserNavigating { until: Instant },
}

/// Finite-state suppression token for scroll-sync reconciliation.
///
/// Deliberately not a bare boolean: the two states and the expiry deadline
/// make the guard's lifecycle auditable from any call site.
#[derive(Debug, Clone)]
pub struct NavGuard {
    state: GuardState,
    cooldown: Duration,
}

impl NavGuard {
    /// Creates a guard with the production cooldown ([`NAV_COOLDOWN_MS`]).
    pub fn new() -> Self {
        Self::with_cooldown(Duration::from_millis(NAV_COOLDOWN_MS))
    }

    /// Creates a guard with a custom cooldown (tests use zero to disable
    /// suppression without sleeping).
    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            state: GuardState::Idle,
            cooldown,
        }
    }

    /// Arms the guard for one cooldown window from now.
    ///
    /// Re-engaging while already armed extends the window.
    pub fn engage(&mut self) {
        self.state = GuardState::UserNavigating {
            until: Instant::now() + self.cooldown,
        };
    }

    /// Returns `true` while the cooldown window is open.
    ///
    /// An expired window collapses back to idle as a side effect, so the
    /// guard never reports stale suppression.
    pub fn is_suppressed(&mut self) -> bool {
        match self.state {
            GuardState::Idle => false,
            GuardState::UserNavigating { until } => {
                if Instant::now() < until {
                    true
                } else {
                    self.state = GuardState::Idle;
                    false
                }
            }
        }
    }
}

impl Default for NavGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let mut guard = NavGuard::new();
        assert!(!guard.is_suppressed());
    }

    #[test]
    fn test_engage_suppresses_within_cooldown() {
        let mut guard = NavGuard::new();
        guard.engage();
        assert!(guard.is_suppressed());
        // Still suppressed on a second check inside the window
        assert!(guard.is_suppressed());
    }

    #[test]
    fn test_zero_cooldown_expires_immediately() {
        let mut guard = NavGuard::with_cooldown(Duration::ZERO);
        guard.engage();
        assert!(!guard.is_suppressed());
        // Expired window has collapsed back to idle
        assert!(!guard.is_suppressed());
    }

    #[test]
    fn test_reengage_extends_window() {
        let mut guard = NavGuard::with_cooldown(Duration::from_secs(60));
        guard.engage();
        guard.engage();
        assert!(guard.is_suppressed());
    }
}
