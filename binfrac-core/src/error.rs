//! Error types for binary fraction operations

/// Errors that can occur when building a fraction or a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinfracError {
    /// Denominator is zero
    ZeroDenominator,
    /// Numerator is not smaller than the denominator
    ImproperFraction,
    /// Denominator too large to double a remainder without overflow
    DenominatorOverflow,
    /// Group size or line width is zero
    InvalidLayout,
}

impl core::fmt::Display for BinfracError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BinfracError::ZeroDenominator => "Denominator must be non-zero",
            BinfracError::ImproperFraction => "Numerator must be smaller than the denominator",
            BinfracError::DenominatorOverflow => "Denominator exceeds u64::MAX / 2",
            BinfracError::InvalidLayout => "Group size and line width must be non-zero",
        };
        write!(f, "{msg}")
    }
}

/// Result type for binary fraction operations
pub type Result<T> = core::result::Result<T, BinfracError>;
