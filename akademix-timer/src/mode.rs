//! Focus and break modes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TimerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Focus,
    Break,
}

impl TimerMode {
    pub const ALL: [TimerMode; 2] = [TimerMode::Focus, TimerMode::Break];

    /// Full length of one session in seconds
    pub fn duration_secs(self) -> u32 {
        match self {
            TimerMode::Focus => 25 * 60,
            TimerMode::Break => 5 * 60,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::Break => "break",
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TimerMode {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TimerMode::ALL.iter()
            .copied()
            .find(|m| m.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TimerError::UnknownMode(s.to_string()))
    }
}
