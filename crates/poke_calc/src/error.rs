use thiserror::Error;

/// Errors produced while resolving combatants or running an estimate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A request field is outside its legal range. Out-of-range values are
    /// rejected, never clamped.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A name did not resolve against the embedded data set.
    #[error("unknown {kind}: {name:?}")]
    NotFound { kind: &'static str, name: String },

    /// The move exists but its damage cannot be expressed by the standard
    /// formula (fixed damage, variable power, multi-hit, OHKO).
    #[error("unsupported move: {reason}")]
    Unsupported { reason: String },
}

impl CalcError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        CalcError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn unsupported(reason: impl Into<String>) -> Self {
        CalcError::Unsupported {
            reason: reason.into(),
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
