//! Converter widget state machine
//!
//! ```text
//!   select_tab(primary) ─────────────► primary-view
//!   more ────────────────────────────► grid-view
//!   grid-view ── select_tile ────────► secondary-view
//!   secondary-view ── back ──────────► grid-view
//! ```
//!
//! Every category switch clears both value fields and resets the units to
//! the category's first two entries. Each input event recomputes the
//! result exactly once.

use std::fmt;

use akademix_core::DEFAULT_PRECISION;
use serde::Serialize;
use tracing::debug;

use crate::category::{Tier, UnitCategory};
use crate::format::{format_result, parse_input_with_precision, DEFAULT_DISPLAY_DIGITS};
use crate::registry::CategoryRegistry;
use crate::UnitsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    #[serde(rename = "primary-view")]
    Primary,
    #[serde(rename = "grid-view")]
    Grid,
    #[serde(rename = "secondary-view")]
    Secondary,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Primary => "primary-view",
            ViewMode::Grid => "grid-view",
            ViewMode::Secondary => "secondary-view",
        };
        f.write_str(name)
    }
}

/// Snapshot of everything the shell renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetState {
    pub view: ViewMode,
    pub category: &'static str,
    pub units: Vec<&'static str>,
    pub from_unit: String,
    pub to_unit: String,
    pub input: String,
    pub result: String,
}

#[derive(Debug, Clone)]
pub struct ConverterWidget<'r> {
    registry: &'r CategoryRegistry,
    view: ViewMode,
    category: &'r UnitCategory,
    input: String,
    result: String,
    from_unit: String,
    to_unit: String,
    digits: u32,
    precision: usize,
}

impl<'r> ConverterWidget<'r> {
    /// Start on the first primary category with its default units
    pub fn new(registry: &'r CategoryRegistry) -> Result<Self, UnitsError> {
        let category = registry.primary().next().ok_or(UnitsError::NoPrimaryCategory)?;
        let (from, to) = category.defaults();
        Ok(ConverterWidget {
            registry,
            view: ViewMode::Primary,
            category,
            input: String::new(),
            result: String::new(),
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            digits: DEFAULT_DISPLAY_DIGITS,
            precision: DEFAULT_PRECISION,
        })
    }

    pub fn with_display_digits(mut self, digits: u32) -> Self {
        self.digits = digits.clamp(1, 17);
        self.recompute();
        self
    }

    /// Working precision of parsing and conversion, in decimal digits
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.max(1);
        self.recompute();
        self
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn category(&self) -> &'r UnitCategory {
        self.category
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn state(&self) -> WidgetState {
        WidgetState {
            view: self.view,
            category: self.category.key,
            units: self.category.units(),
            from_unit: self.from_unit.clone(),
            to_unit: self.to_unit.clone(),
            input: self.input.clone(),
            result: self.result.clone(),
        }
    }

    /// Switch to a primary tab. Allowed from every view.
    pub fn select_tab(&mut self, key: &str) -> Result<(), UnitsError> {
        let category = self.registry.get(key)?;
        if category.tier != Tier::Primary {
            return Err(self.rejected(format!("select tab '{key}'")));
        }
        self.view = ViewMode::Primary;
        self.reset_to(category);
        Ok(())
    }

    /// Open the grid of secondary categories. The tab bar is always
    /// visible, so this is allowed from every view.
    pub fn open_grid(&mut self) {
        debug!(from = %self.view, "open grid");
        self.view = ViewMode::Grid;
    }

    pub fn select_tile(&mut self, key: &str) -> Result<(), UnitsError> {
        if self.view != ViewMode::Grid {
            return Err(self.rejected(format!("select tile '{key}'")));
        }
        let category = self.registry.get(key)?;
        if category.tier != Tier::Secondary {
            return Err(self.rejected(format!("select tile '{key}'")));
        }
        self.view = ViewMode::Secondary;
        self.reset_to(category);
        Ok(())
    }

    pub fn back(&mut self) -> Result<(), UnitsError> {
        if self.view != ViewMode::Secondary {
            return Err(self.rejected("go back".to_string()));
        }
        debug!(category = self.category.key, "back to grid");
        self.view = ViewMode::Grid;
        Ok(())
    }

    pub fn set_input(&mut self, raw: &str) -> Result<(), UnitsError> {
        self.require_converter("edit the value")?;
        self.input = raw.to_string();
        self.recompute();
        Ok(())
    }

    pub fn set_from_unit(&mut self, unit: &str) -> Result<(), UnitsError> {
        self.require_converter("change units")?;
        self.require_unit(unit)?;
        self.from_unit = unit.to_string();
        self.recompute();
        Ok(())
    }

    pub fn set_to_unit(&mut self, unit: &str) -> Result<(), UnitsError> {
        self.require_converter("change units")?;
        self.require_unit(unit)?;
        self.to_unit = unit.to_string();
        self.recompute();
        Ok(())
    }

    /// Exchange units and carry the displayed result into the source field
    pub fn swap(&mut self) -> Result<(), UnitsError> {
        self.require_converter("swap")?;
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        self.input = std::mem::take(&mut self.result);
        self.recompute();
        Ok(())
    }

    fn reset_to(&mut self, category: &'r UnitCategory) {
        let (from, to) = category.defaults();
        debug!(category = category.key, view = %self.view, "category switch");
        self.category = category;
        self.from_unit = from.to_string();
        self.to_unit = to.to_string();
        self.input.clear();
        self.result.clear();
    }

    fn recompute(&mut self) {
        let value = parse_input_with_precision(&self.input, self.precision);
        let converted = self.category.convert(value.as_ref(), &self.from_unit, &self.to_unit)
            .map(|n| n.with_precision(self.precision));
        self.result = format_result(converted.as_ref(), self.digits);
    }

    fn require_converter(&self, action: &str) -> Result<(), UnitsError> {
        if self.view == ViewMode::Grid {
            return Err(self.rejected(action.to_string()));
        }
        Ok(())
    }

    fn require_unit(&self, unit: &str) -> Result<(), UnitsError> {
        if self.category.contains(unit) {
            Ok(())
        } else {
            Err(UnitsError::UnrepresentedUnit {
                unit: unit.to_string(),
                category: self.category.key.to_string(),
            })
        }
    }

    fn rejected(&self, action: String) -> UnitsError {
        UnitsError::InvalidTransition { action, view: self.view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CATEGORIES;

    fn widget() -> ConverterWidget<'static> {
        ConverterWidget::new(&CATEGORIES).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let w = widget();
        assert_eq!(w.view(), ViewMode::Primary);
        assert_eq!(w.category().key, "length");
        assert_eq!((w.from_unit(), w.to_unit()), ("km", "m"));
        assert_eq!(w.input(), "");
        assert_eq!(w.result(), "");
    }

    #[test]
    fn test_swap_carries_result_into_source() {
        let mut w = widget();
        w.set_from_unit("m").unwrap();
        w.set_to_unit("cm").unwrap();
        w.set_input("5").unwrap();
        assert_eq!(w.result(), "500");

        w.swap().unwrap();
        assert_eq!((w.from_unit(), w.to_unit()), ("cm", "m"));
        assert_eq!(w.input(), "500");
        assert_eq!(w.result(), "5");
    }

    #[test]
    fn test_swap_with_empty_result() {
        let mut w = widget();
        w.swap().unwrap();
        assert_eq!((w.from_unit(), w.to_unit()), ("m", "km"));
        assert_eq!(w.input(), "");
        assert_eq!(w.result(), "");
    }

    #[test]
    fn test_category_switch_resets() {
        let mut w = widget();
        w.set_to_unit("mile").unwrap();
        w.set_input("12").unwrap();
        assert!(!w.result().is_empty());

        w.select_tab("temp").unwrap();
        assert_eq!(w.category().key, "temp");
        assert_eq!((w.from_unit(), w.to_unit()), ("C", "F"));
        assert_eq!(w.input(), "");
        assert_eq!(w.result(), "");
    }

    #[test]
    fn test_grid_and_tiles() {
        let mut w = widget();
        w.set_input("3").unwrap();
        w.open_grid();
        assert_eq!(w.view(), ViewMode::Grid);

        w.select_tile("data").unwrap();
        assert_eq!(w.view(), ViewMode::Secondary);
        let state = w.state();
        assert_eq!(state.category, "data");
        assert_eq!(state.from_unit, state.units[0]);
        assert_eq!(state.to_unit, state.units[1]);
        assert_eq!(state.input, "");

        w.back().unwrap();
        assert_eq!(w.view(), ViewMode::Grid);
        assert_eq!(w.category().key, "data");
    }

    #[test]
    fn test_rejected_transitions() {
        let mut w = widget();
        assert!(matches!(w.back(), Err(UnitsError::InvalidTransition { view: ViewMode::Primary, .. })));
        assert!(matches!(w.select_tile("data"), Err(UnitsError::InvalidTransition { .. })));

        w.open_grid();
        assert!(matches!(w.set_input("1"), Err(UnitsError::InvalidTransition { view: ViewMode::Grid, .. })));
        assert!(matches!(w.swap(), Err(UnitsError::InvalidTransition { .. })));
        assert!(matches!(w.select_tile("length"), Err(UnitsError::InvalidTransition { .. })));
        assert!(matches!(w.select_tile("flux"), Err(UnitsError::UnknownCategory(_))));

        // primary tabs stay reachable from the grid
        w.select_tab("weight").unwrap();
        assert_eq!(w.view(), ViewMode::Primary);
        assert!(matches!(w.select_tab("data"), Err(UnitsError::InvalidTransition { .. })));
    }

    #[test]
    fn test_primary_tab_from_secondary_view() {
        let mut w = widget();
        w.open_grid();
        w.select_tile("data").unwrap();
        w.set_input("8").unwrap();
        assert_eq!(w.result(), "1");

        w.select_tab("weight").unwrap();
        assert_eq!(w.view(), ViewMode::Primary);
        assert_eq!(w.category().key, "weight");
        assert_eq!((w.from_unit(), w.to_unit()), ("kg", "g"));
        assert_eq!(w.input(), "");
        assert_eq!(w.result(), "");
    }

    #[test]
    fn test_extreme_magnitudes_display() {
        let mut w = widget();
        w.set_from_unit("inch").unwrap();
        w.set_to_unit("mile").unwrap();
        w.set_input("1e-290").unwrap();
        assert_eq!(w.result(), "1.57829e-295");
    }

    #[test]
    fn test_precision_applies_to_result() {
        let mut w = widget().with_precision(3).with_display_digits(6);
        w.set_from_unit("m").unwrap();
        w.set_to_unit("ft").unwrap();
        w.set_input("1").unwrap();
        assert_eq!(w.result(), "3.28");
    }

    #[test]
    fn test_unit_outside_category_rejected() {
        let mut w = widget();
        let err = w.set_from_unit("kg").unwrap_err();
        assert!(matches!(err, UnitsError::UnrepresentedUnit { .. }));
        assert_eq!(w.from_unit(), "km");
    }

    #[test]
    fn test_unparseable_input_gives_empty_result() {
        let mut w = widget();
        w.set_input("abc").unwrap();
        assert_eq!(w.input(), "abc");
        assert_eq!(w.result(), "");
    }

    #[test]
    fn test_temperature_display() {
        let mut w = widget();
        w.select_tab("temp").unwrap();
        w.set_to_unit("K").unwrap();
        w.set_input("100").unwrap();
        assert_eq!(w.result(), "373.15");
    }

    #[test]
    fn test_display_digits() {
        let mut w = widget().with_display_digits(3);
        w.set_to_unit("mile").unwrap();
        w.set_input("1").unwrap();
        assert_eq!(w.result(), "0.621");
    }
}
