//! Arbitrary precision numbers using dashu
//!
//! Uses dashu-float (DBig) for decimal arithmetic. Conversion rates are
//! written as exact decimal literals, so chains like `KB -> bit -> Byte`
//! stay exact instead of accumulating binary floating-point error.

use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Serialize, Serializer, Deserializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Working precision for calculations (decimal digits)
pub const DEFAULT_PRECISION: usize = 50;

/// Arbitrary precision decimal number
///
/// All operations return Results or new Numbers - never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DEFAULT_PRECISION).value()
    }

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "1.5e10", "-42"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        Self::from_str_with_precision(s, DEFAULT_PRECISION)
    }

    /// Parse at `precision` decimal digits instead of the default.
    ///
    /// Only matters for inputs that are not exact decimals, such as `1/3`.
    pub fn from_str_with_precision(s: &str, precision: usize) -> Result<Self, NumberError> {
        let precision = precision.max(1);
        let at = |val: DBig| val.with_precision(precision).value();
        let s = s.trim();
        if s.is_empty() {
            return Err(NumberError::ParseError(s.to_string()));
        }

        // Rational format "a/b"
        if s.contains('/') && !s.contains('.') && !s.contains('e') && !s.contains('E') {
            let (num_str, den_str) = s.split_once('/')
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;
            let num: DBig = num_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let den: DBig = den_str.trim().parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            if den == DBig::ZERO {
                return Err(NumberError::DivisionByZero);
            }
            let result = at(num) / at(den);
            return Ok(Self { inner: result });
        }

        // Scientific notation with integer mantissa: "8e-7"
        if (s.contains('e') || s.contains('E')) && !s.contains('.') {
            let s_lower = s.to_lowercase();
            let (mantissa_str, exp_str) = s_lower.split_once('e')
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;
            let mantissa: IBig = mantissa_str.trim_start_matches('+').parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let exp: isize = exp_str.trim_start_matches('+').parse()
                .map_err(|_| NumberError::ParseError(s.to_string()))?;
            let result = DBig::from_parts(mantissa, exp);
            return Ok(Self { inner: at(result) });
        }

        let inner: DBig = s.trim_start_matches('+').parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;
        Ok(Self { inner: at(inner) })
    }

    /// Create from i64 with working precision
    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Exact decimal literal: `significand * 10^-scale`.
    ///
    /// `Number::from_decimal(254, 4)` is exactly `0.0254`.
    pub fn from_decimal(significand: i64, scale: u32) -> Self {
        let exponent = -(scale as isize);
        let inner = DBig::from_parts(IBig::from(significand), exponent);
        Self { inner: Self::with_work_precision(inner) }
    }

    pub fn zero() -> Self {
        Self { inner: DBig::ZERO }
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_integer(&self) -> bool {
        let floor_val = self.inner.clone().floor();
        self.inner == floor_val
    }

    // ========== Basic Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Round to `digits` significant decimal digits and keep that as the
    /// working precision of later arithmetic.
    pub fn with_precision(&self, digits: usize) -> Self {
        Self { inner: self.inner.clone().with_precision(digits.max(1)).value() }
    }

    /// True when `|self - other| <= tolerance * max(1, |self|, |other|)`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        match (self.to_f64(), other.to_f64()) {
            (Some(a), Some(b)) => {
                let scale = 1.0_f64.max(a.abs()).max(b.abs());
                (a - b).abs() <= tolerance * scale
            }
            _ => self == other,
        }
    }

    // ========== Conversion ==========

    /// Try to convert to i64
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let sig_i64: i64 = significand.try_into().ok()?;
        if exponent == 0 {
            Some(sig_i64)
        } else if exponent > 0 && exponent <= 18 {
            sig_i64.checked_mul(10_i64.checked_pow(exponent as u32)?)
        } else if exponent < 0 && exponent >= -18 {
            let divisor = 10_i64.checked_pow((-exponent) as u32)?;
            if sig_i64 % divisor == 0 { Some(sig_i64 / divisor) } else { None }
        } else {
            None
        }
    }

    /// Convert to f64 (may lose precision)
    ///
    /// Values outside the f64 range give `None`; values too small for it
    /// come back as `0.0`.
    pub fn to_f64(&self) -> Option<f64> {
        // significand * 10^exponent, parsed as decimal text so the
        // significand length never overflows an intermediate power of ten
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let result: f64 = format!("{}e{}", significand, exponent).parse().ok()?;
        if result.is_finite() { Some(result) } else { None }
    }

    /// Decimal digits of the value rounded to `digits` significant digits.
    ///
    /// Returns `(negative, mantissa, exponent)` where `mantissa` holds the
    /// significant digits without trailing zeros and `exponent` is the
    /// power of ten of the leading digit: `-0.00123` gives
    /// `(true, "123", -3)`. Zero gives `None`.
    pub fn to_significant(&self, digits: usize) -> Option<(bool, String, isize)> {
        if self.is_zero() {
            return None;
        }
        let rounded = self.inner.clone().with_precision(digits.max(1)).value();
        let (significand, exponent) = rounded.into_repr().into_parts();
        let negative = significand < IBig::ZERO;
        let text = significand.to_string();
        let all_digits = text.trim_start_matches('-');
        let leading = exponent + all_digits.len() as isize - 1;
        let mantissa = all_digits.trim_end_matches('0');
        if mantissa.is_empty() {
            return None;
        }
        Some((negative, mantissa.to_string(), leading))
    }

    /// Render with a fixed number of decimal places
    pub fn to_fixed(&self, places: u32) -> String {
        match self.to_f64() {
            Some(f) => {
                let rendered = format!("{:.prec$}", f, prec = places as usize);
                // "-0.00" is not a useful display value
                if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.') {
                    rendered[1..].to_string()
                } else {
                    rendered
                }
            }
            None => self.inner.to_string(),
        }
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_f64() {
            Some(v) if v == 0.0 => write!(f, "0"),
            Some(v) => write!(f, "{}", v),
            None => write!(f, "{}", self.inner),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}
