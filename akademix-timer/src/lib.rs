//! Akademix Timer - Focus/break countdown
//!
//! A [`FocusTimer`] counts a 25 minute focus session or a 5 minute break
//! down to zero, one tick per second.

mod error;
mod mode;
mod timer;
mod functions;

pub use error::TimerError;
pub use mode::TimerMode;
pub use timer::{format_time, FocusTimer, TimerState};

use akademix_plugin::PluginRegistry;

/// Load timer functions into registry
pub fn load_timer_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::FormatTime)
        .with_function(functions::SessionLength)
}
