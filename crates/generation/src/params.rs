use helio_orbits::KeplerError;
use helio_system::ModelError;
use thiserror::Error;

/// Innermost baseline orbit (AU) when none is given.
pub const DEFAULT_INNER_AU: f64 = 0.4;
/// Outermost baseline orbit (AU) when none is given.
pub const DEFAULT_OUTER_AU: f64 = 40.0;

/// Errors raised while validating inputs or building generated planets.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    #[error("planet count must be >= 0 (got {0})")]
    NegativeCount(i64),
    #[error("bounds must satisfy 0 < inner_au < outer_au (got inner {inner_au}, outer {outer_au})")]
    InvalidBounds { inner_au: f64, outer_au: f64 },
    #[error(transparent)]
    Kepler(#[from] KeplerError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// How many planets to create and the baseline orbit range in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub count: usize,
    pub inner_au: f64,
    pub outer_au: f64,
}

impl GenerationParams {
    pub fn new(count: usize, inner_au: f64, outer_au: f64) -> Result<Self, GenerationError> {
        let params = Self {
            count,
            inner_au,
            outer_au,
        };
        params.validate()?;
        Ok(params)
    }

    /// Accept a count from signed external input (config files, CLI).
    pub fn from_signed(count: i64, inner_au: f64, outer_au: f64) -> Result<Self, GenerationError> {
        let count = usize::try_from(count).map_err(|_| GenerationError::NegativeCount(count))?;
        Self::new(count, inner_au, outer_au)
    }

    pub fn with_default_bounds(count: usize) -> Self {
        Self {
            count,
            inner_au: DEFAULT_INNER_AU,
            outer_au: DEFAULT_OUTER_AU,
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        let ordered = self.inner_au > 0.0 && self.outer_au > self.inner_au;
        if ordered && self.outer_au.is_finite() {
            Ok(())
        } else {
            Err(GenerationError::InvalidBounds {
                inner_au: self.inner_au,
                outer_au: self.outer_au,
            })
        }
    }
}
