//! Akademix Units - Unit conversion widget
//!
//! Twelve categories, each with its own rate table and a base unit:
//! - Primary tabs: length, weight, temperature
//! - "More" grid: data, speed, angle, area, volume, time, pressure,
//!   energy, power
//!
//! Temperature converts affinely through Celsius; every other category is
//! a plain ratio of rates. The converter widget state machine lives in
//! [`ConverterWidget`].

mod error;
mod strategy;
mod category;
mod registry;
mod format;
mod widget;
mod helpers;
mod functions;

pub use error::UnitsError;
pub use strategy::{BaseScale, LinearUnit, AffineUnit, Scale, Conversion};
pub use category::{UnitCategory, CategoryInfo, Tier};
pub use registry::{CategoryRegistry, CATEGORIES, list_categories, units_for, convert};
pub use format::{parse_input, parse_input_with_precision, format_significant, format_result, DEFAULT_DISPLAY_DIGITS};
pub use widget::{ConverterWidget, ViewMode, WidgetState};

use akademix_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Conversion
        .with_function(functions::Convert)
        .with_function(functions::ConvertText)

        // Catalogue
        .with_function(functions::ListCategories)
        .with_function(functions::UnitsFor)

        // Display
        .with_function(functions::FormatNumber)
}
