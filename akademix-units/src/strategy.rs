//! Conversion strategies
//!
//! Every category normalizes through a base unit. How a unit relates to
//! that base depends on the category:
//!
//! - `Linear`: `base = value * rate` (length, data, energy, ...)
//! - `Affine`: `base = (value + offset) * numerator / denominator`
//!   (temperature, base unit Celsius)
//!
//! The strategy is fixed when a category is defined, so conversions never
//! branch on the category key.

use akademix_core::{Number, NumberError};

/// A unit that can move values to and from its category's base unit
pub trait BaseScale {
    fn symbol(&self) -> &'static str;

    /// Value in this unit -> value in the base unit
    fn to_base(&self, value: &Number) -> Result<Number, NumberError>;

    /// Value in the base unit -> value in this unit
    fn from_base(&self, base: &Number) -> Result<Number, NumberError>;
}

/// Multiplicative unit: how many base units make one of this unit
#[derive(Debug, Clone, PartialEq)]
pub struct LinearUnit {
    pub symbol: &'static str,
    pub rate: Number,
}

impl LinearUnit {
    pub fn new(symbol: &'static str, rate: Number) -> Self {
        LinearUnit { symbol, rate }
    }
}

impl BaseScale for LinearUnit {
    fn symbol(&self) -> &'static str {
        self.symbol
    }

    fn to_base(&self, value: &Number) -> Result<Number, NumberError> {
        Ok(value.mul(&self.rate))
    }

    fn from_base(&self, base: &Number) -> Result<Number, NumberError> {
        base.checked_div(&self.rate)
    }
}

/// Affine unit: `base = (value + offset) * numerator / denominator`
///
/// The scale is kept as an integer ratio so `5/9` is applied as
/// "multiply by 5, divide by 9" instead of a rounded 0.5555... constant.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineUnit {
    pub symbol: &'static str,
    pub offset: Number,
    pub numerator: i64,
    pub denominator: i64,
}

impl AffineUnit {
    pub fn new(symbol: &'static str, offset: Number, numerator: i64, denominator: i64) -> Self {
        AffineUnit { symbol, offset, numerator, denominator }
    }

    /// The base unit itself: no offset, unit scale
    pub fn identity(symbol: &'static str) -> Self {
        Self::new(symbol, Number::zero(), 1, 1)
    }
}

impl BaseScale for AffineUnit {
    fn symbol(&self) -> &'static str {
        self.symbol
    }

    fn to_base(&self, value: &Number) -> Result<Number, NumberError> {
        value.add(&self.offset)
            .mul(&Number::from_i64(self.numerator))
            .checked_div(&Number::from_i64(self.denominator))
    }

    fn from_base(&self, base: &Number) -> Result<Number, NumberError> {
        let scaled = base.mul(&Number::from_i64(self.denominator))
            .checked_div(&Number::from_i64(self.numerator))?;
        Ok(scaled.sub(&self.offset))
    }
}

/// Ordered unit table with a named base unit
#[derive(Debug, Clone)]
pub struct Scale<U> {
    base: &'static str,
    units: Vec<U>,
}

impl<U: BaseScale> Scale<U> {
    pub fn new(base: &'static str, units: Vec<U>) -> Self {
        Scale { base, units }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn get(&self, symbol: &str) -> Option<&U> {
        self.units.iter().find(|u| u.symbol() == symbol)
    }

    pub fn units(&self) -> &[U] {
        &self.units
    }
}

/// Strategy chosen once per category
#[derive(Debug, Clone)]
pub enum Conversion {
    Linear(Scale<LinearUnit>),
    Affine(Scale<AffineUnit>),
}

impl Conversion {
    /// Unit symbols in table order
    pub fn symbols(&self) -> Vec<&'static str> {
        match self {
            Conversion::Linear(s) => s.units().iter().map(|u| u.symbol).collect(),
            Conversion::Affine(s) => s.units().iter().map(|u| u.symbol).collect(),
        }
    }

    pub fn base(&self) -> &'static str {
        match self {
            Conversion::Linear(s) => s.base(),
            Conversion::Affine(s) => s.base(),
        }
    }

    pub fn is_affine(&self) -> bool {
        matches!(self, Conversion::Affine(_))
    }

    pub fn unit(&self, symbol: &str) -> Option<&dyn BaseScale> {
        match self {
            Conversion::Linear(s) => s.get(symbol).map(|u| u as &dyn BaseScale),
            Conversion::Affine(s) => s.get(symbol).map(|u| u as &dyn BaseScale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fahrenheit() -> AffineUnit {
        AffineUnit::new("F", Number::from_i64(-32), 5, 9)
    }

    #[test]
    fn test_linear_round_trip() {
        let ft = LinearUnit::new("ft", Number::from_decimal(3048, 4));
        let base = ft.to_base(&Number::from_i64(10)).unwrap();
        assert_eq!(base, Number::from_decimal(3048, 3));
        assert_eq!(ft.from_base(&base).unwrap(), Number::from_i64(10));
    }

    #[test]
    fn test_linear_zero_rate_is_an_error() {
        let broken = LinearUnit::new("x", Number::zero());
        assert!(broken.from_base(&Number::from_i64(1)).is_err());
    }

    #[test]
    fn test_affine_fahrenheit() {
        let f = fahrenheit();
        assert_eq!(f.to_base(&Number::from_i64(212)).unwrap(), Number::from_i64(100));
        assert_eq!(f.from_base(&Number::from_i64(100)).unwrap(), Number::from_i64(212));
        assert_eq!(f.from_base(&Number::zero()).unwrap(), Number::from_i64(32));
    }

    #[test]
    fn test_affine_identity() {
        let c = AffineUnit::identity("C");
        let v = Number::from_decimal(-4015, 2);
        assert_eq!(c.to_base(&v).unwrap(), v);
        assert_eq!(c.from_base(&v).unwrap(), v);
    }

    #[test]
    fn test_conversion_lookup() {
        let conv = Conversion::Affine(Scale::new("C", vec![AffineUnit::identity("C"), fahrenheit()]));
        assert!(conv.is_affine());
        assert_eq!(conv.base(), "C");
        assert_eq!(conv.symbols(), vec!["C", "F"]);
        assert!(conv.unit("F").is_some());
        assert!(conv.unit("K").is_none());
    }
}
