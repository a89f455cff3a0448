//! Focus timer state machine
//!
//! ```text
//!   idle ── toggle ──► running ── toggle ──► idle
//!   running ── tick (reaches 0) ──► idle, finished
//!   any ── reset ──► idle, full duration of the current mode
//!   any ── switch_mode ──► idle, full duration of the new mode
//! ```
//!
//! The timer does not read a clock. The shell calls [`FocusTimer::tick`]
//! once per elapsed second.

use akademix_core::Number;
use serde::Serialize;
use tracing::{debug, info};

use crate::mode::TimerMode;

/// Snapshot of everything the shell renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub mode: TimerMode,
    pub remaining: u32,
    pub display: String,
    pub active: bool,
    pub progress: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    mode: TimerMode,
    remaining: u32,
    active: bool,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    /// Idle, in focus mode, with the full focus duration left
    pub fn new() -> Self {
        FocusTimer {
            mode: TimerMode::Focus,
            remaining: TimerMode::Focus.duration_secs(),
            active: false,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Seconds left in the current session
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start or pause. A finished session stays stopped until reset.
    pub fn toggle(&mut self) {
        self.active = !self.active && self.remaining > 0;
        debug!(mode = %self.mode, active = self.active, remaining = self.remaining, "timer toggled");
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.remaining = self.mode.duration_secs();
    }

    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.reset();
        debug!(mode = %mode, "timer mode switched");
    }

    /// One second elapsed. Returns true when this tick ended the session.
    pub fn tick(&mut self) -> bool {
        if !self.active || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.active = false;
            info!(mode = %self.mode, "session finished");
            return true;
        }
        false
    }

    /// `seconds` ticks at once; true when the session finished among them
    pub fn advance(&mut self, seconds: u32) -> bool {
        (0..seconds).any(|_| self.tick())
    }

    /// Elapsed share of the session, 0 to 100
    pub fn progress(&self) -> Number {
        let total = self.mode.duration_secs();
        let elapsed = Number::from_i64((total - self.remaining.min(total)) as i64);
        elapsed
            .mul(&Number::from_i64(100))
            .checked_div(&Number::from_i64(total as i64))
            .unwrap_or_else(|_| Number::zero())
    }

    pub fn state(&self) -> TimerState {
        TimerState {
            mode: self.mode,
            remaining: self.remaining,
            display: format_time(self.remaining),
            active: self.active,
            progress: self.progress().to_fixed(1),
        }
    }
}

/// Seconds as `MM:SS`. Minutes are not wrapped into hours: 3600 is `60:00`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let timer = FocusTimer::new();
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.remaining(), 1500);
        assert!(!timer.is_active());
        assert!(timer.progress().is_zero());
        assert_eq!(timer.state().display, "25:00");
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut timer = FocusTimer::new();
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 1500);

        timer.toggle();
        assert!(timer.is_active());
        timer.advance(90);
        assert_eq!(timer.remaining(), 1410);
        assert_eq!(timer.state().display, "23:30");

        timer.toggle();
        timer.advance(10);
        assert_eq!(timer.remaining(), 1410);
    }

    #[test]
    fn test_session_finishes_at_zero() {
        let mut timer = FocusTimer::new();
        timer.switch_mode(TimerMode::Break);
        timer.toggle();
        assert!(!timer.advance(299));
        assert!(timer.is_active());
        assert!(timer.tick());
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_active());
        assert_eq!(timer.progress(), Number::from_i64(100));

        // stays finished until reset
        assert!(!timer.tick());
        timer.toggle();
        assert!(!timer.is_active());
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut timer = FocusTimer::new();
        timer.switch_mode(TimerMode::Break);
        timer.toggle();
        timer.advance(42);
        timer.reset();
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.remaining(), 300);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_switch_mode_stops_and_reloads() {
        let mut timer = FocusTimer::new();
        timer.toggle();
        timer.advance(5);
        timer.switch_mode(TimerMode::Break);
        assert!(!timer.is_active());
        assert_eq!(timer.remaining(), 300);
        assert_eq!(timer.state().display, "05:00");
    }

    #[test]
    fn test_progress() {
        let mut timer = FocusTimer::new();
        timer.toggle();
        timer.advance(375);
        assert_eq!(timer.progress(), Number::from_i64(25));
        assert_eq!(timer.state().progress, "25.0");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(3600), "60:00");
    }
}
