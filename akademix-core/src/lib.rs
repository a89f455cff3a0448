//! Akademix Core - Fundamental types
//!
//! This crate provides the core types shared by every widget library:
//! - `Number`: Arbitrary precision decimal numbers
//! - `Value`: Runtime values (numbers, text, objects, null, errors)
//! - `AkademixError`: Structured errors with codes and suggestions

mod number;
mod value;
mod error;

pub use number::{Number, NumberError, DEFAULT_PRECISION};
pub use value::Value;
pub use error::{AkademixError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, Value, AkademixError, Severity};
    pub use crate::error::codes;
}
