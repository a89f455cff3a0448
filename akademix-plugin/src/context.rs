//! Evaluation Context

use akademix_core::DEFAULT_PRECISION;
use crate::PluginRegistry;
use std::sync::Arc;

/// Significant digits shown for converted values
pub const DEFAULT_DISPLAY_DIGITS: u32 = 6;

/// Evaluation context passed to plugins
pub struct EvalContext {
    /// Working precision in decimal digits
    pub precision: u32,
    /// Significant digits used when a function renders a number as text
    pub display_digits: u32,
    pub registry: Arc<PluginRegistry>,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            precision: DEFAULT_PRECISION as u32,
            display_digits: DEFAULT_DISPLAY_DIGITS,
            registry,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Clamped to 1..=17
    pub fn with_display_digits(mut self, digits: u32) -> Self {
        self.display_digits = digits.clamp(1, 17);
        self
    }
}
