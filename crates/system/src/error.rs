use helio_orbits::KeplerError;
use thiserror::Error;

/// Validation failures raised by body constructors and stepping.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be >= 0 (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("time step must be >= 0 s (got {0})")]
    NegativeTimeStep(f64),
    #[error("planet '{name}' has non-positive period {period_s} s")]
    NonPositivePeriod { name: String, period_s: f64 },
    #[error(transparent)]
    Kepler(#[from] KeplerError),
}

/// Failures while rebuilding a system from its serialized form.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("missing required field `{0}`")]
    MissingField(String),
    #[error("malformed system document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unknown planet kind '{0}'")]
    UnknownKind(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}
