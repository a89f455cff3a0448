//! Unit categories

use akademix_core::Number;
use serde::Serialize;
use tracing::warn;

use crate::strategy::{AffineUnit, BaseScale, Conversion, LinearUnit, Scale};
use crate::UnitsError;

/// Where a category is offered in the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Top-level tab
    Primary,
    /// Tile in the "more" grid
    Secondary,
}

/// A closed set of mutually convertible units
#[derive(Debug, Clone)]
pub struct UnitCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub tier: Tier,
    conversion: Conversion,
}

/// Serializable summary of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub tier: Tier,
    pub base: &'static str,
    pub units: Vec<&'static str>,
}

impl UnitCategory {
    pub fn linear(
        key: &'static str,
        label: &'static str,
        tier: Tier,
        base: &'static str,
        units: Vec<LinearUnit>,
    ) -> Self {
        UnitCategory { key, label, tier, conversion: Conversion::Linear(Scale::new(base, units)) }
    }

    pub fn affine(
        key: &'static str,
        label: &'static str,
        tier: Tier,
        base: &'static str,
        units: Vec<AffineUnit>,
    ) -> Self {
        UnitCategory { key, label, tier, conversion: Conversion::Affine(Scale::new(base, units)) }
    }

    /// Unit symbols in display order
    pub fn units(&self) -> Vec<&'static str> {
        self.conversion.symbols()
    }

    /// Default (source, target) pair: the first two units
    pub fn defaults(&self) -> (&'static str, &'static str) {
        let units = self.units();
        let from = units.first().copied().unwrap_or("");
        let to = units.get(1).copied().unwrap_or(from);
        (from, to)
    }

    pub fn base(&self) -> &'static str {
        self.conversion.base()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.conversion.unit(unit).is_some()
    }

    pub fn is_affine(&self) -> bool {
        self.conversion.is_affine()
    }

    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            key: self.key,
            label: self.label,
            tier: self.tier,
            base: self.base(),
            units: self.units(),
        }
    }

    fn lookup(&self, unit: &str) -> Result<&dyn BaseScale, UnitsError> {
        self.conversion.unit(unit).ok_or_else(|| UnitsError::UnrepresentedUnit {
            unit: unit.to_string(),
            category: self.key.to_string(),
        })
    }

    /// Strict conversion: unknown units are an error.
    ///
    /// `from == to` returns the value untouched, without a trip through the
    /// base unit.
    pub fn try_convert(&self, value: &Number, from: &str, to: &str) -> Result<Number, UnitsError> {
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        if from == to {
            return Ok(value.clone());
        }
        let base = source.to_base(value)?;
        Ok(target.from_base(&base)?)
    }

    /// Lenient conversion used by live input fields.
    ///
    /// Empty input stays empty. A unit missing from the table yields the
    /// input unconverted.
    pub fn convert(&self, value: Option<&Number>, from: &str, to: &str) -> Option<Number> {
        let value = value?;
        match self.try_convert(value, from, to) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(category = self.key, from, to, error = %e, "returning value unconverted");
                Some(value.clone())
            }
        }
    }
}
