//! Errors raised by the registry, the engine and the converter widget

use akademix_core::{AkademixError, NumberError};
use thiserror::Error;

use crate::ViewMode;

#[derive(Debug, Clone, Error)]
pub enum UnitsError {
    /// Category key not in the registry
    #[error("unknown unit category: {0}")]
    UnknownCategory(String),

    /// Unit symbol absent from a category's rate table
    #[error("unit '{unit}' has no rate in category '{category}'")]
    UnrepresentedUnit { unit: String, category: String },

    /// Widget action not allowed from the current view
    #[error("cannot {action} while in {view}")]
    InvalidTransition { action: String, view: ViewMode },

    #[error("registry has no primary category to start from")]
    NoPrimaryCategory,

    #[error(transparent)]
    Number(#[from] NumberError),
}

impl From<UnitsError> for AkademixError {
    fn from(err: UnitsError) -> Self {
        match err {
            UnitsError::UnknownCategory(key) => AkademixError::unknown_category(&key),
            UnitsError::UnrepresentedUnit { unit, category } => {
                AkademixError::unrepresented_unit(&unit, &category)
            }
            e @ UnitsError::InvalidTransition { .. } => AkademixError::invalid_transition(e.to_string()),
            e @ UnitsError::NoPrimaryCategory => AkademixError::internal(e.to_string()),
            UnitsError::Number(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use akademix_core::codes;

    #[test]
    fn test_maps_to_structured_codes() {
        let err: AkademixError = UnitsError::UnknownCategory("flux".into()).into();
        assert_eq!(err.code, codes::UNKNOWN_CATEGORY);

        let err: AkademixError = UnitsError::UnrepresentedUnit {
            unit: "furlong".into(),
            category: "length".into(),
        }.into();
        assert_eq!(err.code, codes::UNREPRESENTED_UNIT);

        let err: AkademixError = UnitsError::InvalidTransition {
            action: "go back".into(),
            view: ViewMode::Primary,
        }.into();
        assert_eq!(err.code, codes::INVALID_TRANSITION);
        assert_eq!(err.message, "cannot go back while in primary-view");
    }
}
