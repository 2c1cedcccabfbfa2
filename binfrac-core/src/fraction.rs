//! Proper fraction value type
//!
//! A [`Fraction`] is the only input to the digit generator. Construction
//! validates the bounds that keep the doubling step free of overflow.

use crate::error::{BinfracError, Result};

/// Largest denominator whose remainders can be doubled in a `u64`
pub const MAX_DENOMINATOR: u64 = u64::MAX / 2;

/// A validated proper fraction `numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// The fraction printed by the `battery-vampire` binary
    pub const ONE_OVER_101: Self = Self {
        numerator: 1,
        denominator: 101,
    };

    /// Create a fraction, rejecting zero, improper and oversized denominators
    pub const fn new(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(BinfracError::ZeroDenominator);
        }
        if denominator > MAX_DENOMINATOR {
            return Err(BinfracError::DenominatorOverflow);
        }
        if numerator >= denominator {
            return Err(BinfracError::ImproperFraction);
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    pub const fn denominator(&self) -> u64 {
        self.denominator
    }
}

impl core::fmt::Display for Fraction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
