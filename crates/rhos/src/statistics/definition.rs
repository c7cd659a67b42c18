//! Variance definitions.
//!
//! Two definitions of "variance around a point" are in use in the recursive
//! statistics literature. They differ only in which running mean the current
//! sample is centred on:
//!
//! ```text
//! PriorMean   (0):  σ²[i] = C·(x[i] - μ[i-1])² + (1-C)·σ²[i-1]
//! CurrentMean (1):  σ²[i] = C·(x[i] - μ[i])²   + (1-C)·σ²[i-1]
//! ```
//!
//! `PriorMean` is the formulation of Poiata et al. (2016) and the one
//! BackTrackBB uses for its HOS; `CurrentMean` is the formulation of Langet
//! et al. (2014). HOS uses the same centring for its numerator.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which running mean a sample is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Definition {
    /// Centre on the mean from the previous step, `μ[i-1]` (code 0).
    #[default]
    PriorMean,
    /// Centre on the mean just updated with the current sample, `μ[i]` (code 1).
    CurrentMean,
}

impl Definition {
    /// Returns the integer code of the definition (0 or 1).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::PriorMean => 0,
            Self::CurrentMean => 1,
        }
    }

    /// Builds a definition from its integer code.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDefinition` for any code other than 0 or 1.
    ///
    /// # Example
    ///
    /// ```
    /// use rhos::Definition;
    ///
    /// assert_eq!(Definition::from_code(1).unwrap(), Definition::CurrentMean);
    /// assert!(Definition::from_code(2).is_err());
    /// ```
    pub const fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::PriorMean),
            1 => Ok(Self::CurrentMean),
            value => Err(Error::InvalidDefinition { value }),
        }
    }
}

impl TryFrom<i64> for Definition {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        Self::from_code(code)
    }
}

impl TryFrom<i32> for Definition {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Self::from_code(i64::from(code))
    }
}

impl TryFrom<u8> for Definition {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(i64::from(code))
    }
}

impl From<Definition> for u8 {
    fn from(definition: Definition) -> Self {
        definition.code()
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriorMean => write!(f, "prior-mean"),
            Self::CurrentMean => write!(f, "current-mean"),
        }
    }
}

/// Parses `0`/`1` or the names `prior`, `prior-mean`, `current`, `current-mean`.
impl FromStr for Definition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prior" | "prior-mean" | "prior_mean" => Ok(Self::PriorMean),
            "current" | "current-mean" | "current_mean" => Ok(Self::CurrentMean),
            other => other
                .parse::<i64>()
                .map_err(|_| Error::InvalidDefinition { value: -1 })
                .and_then(Self::from_code),
        }
    }
}
