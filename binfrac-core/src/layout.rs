//! Digit grouping and line breaking rules
//!
//! After the n-th digit a space is emitted when n is a multiple of the
//! group size, then a newline when n is a multiple of the line width. With
//! the default 4/80 layout the 80th digit gets both, so every full line ends
//! in `" \n"`.

use crate::error::{BinfracError, Result};

/// Default number of digits per space-separated group
pub const DEFAULT_GROUP_SIZE: u64 = 4;

/// Default number of digits per output line
pub const DEFAULT_LINE_WIDTH: u64 = 80;

/// Separators to write after a digit, in order: space first, then newline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Separators {
    pub space: bool,
    pub newline: bool,
}

impl Separators {
    /// Most bytes a single digit's separators take
    pub const MAX_LEN: usize = 2;

    /// Write the separators as bytes into `buf`, returning how many were used
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than the separators being written; a
    /// buffer of [`Separators::MAX_LEN`] bytes always fits.
    pub fn encode(self, buf: &mut [u8]) -> usize {
        let mut len = 0;
        if self.space {
            buf[len] = b' ';
            len += 1;
        }
        if self.newline {
            buf[len] = b'\n';
            len += 1;
        }
        len
    }
}

/// Grouping and line width, both counted in digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLayout"))]
pub struct Layout {
    group_size: u64,
    line_width: u64,
}

impl Layout {
    /// Create a layout; both dimensions must be non-zero
    pub const fn new(group_size: u64, line_width: u64) -> Result<Self> {
        if group_size == 0 || line_width == 0 {
            return Err(BinfracError::InvalidLayout);
        }
        Ok(Self {
            group_size,
            line_width,
        })
    }

    pub const fn group_size(&self) -> u64 {
        self.group_size
    }

    pub const fn line_width(&self) -> u64 {
        self.line_width
    }

    /// Separators that follow the digit with 1-based position `count`
    pub const fn separators_after(&self, count: u64) -> Separators {
        Separators {
            space: count % self.group_size == 0,
            newline: count % self.line_width == 0,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Unvalidated layout as it appears in a config file
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLayout {
    #[serde(default = "default_group_size")]
    group_size: u64,
    #[serde(default = "default_line_width")]
    line_width: u64,
}

#[cfg(feature = "serde")]
const fn default_group_size() -> u64 {
    DEFAULT_GROUP_SIZE
}

#[cfg(feature = "serde")]
const fn default_line_width() -> u64 {
    DEFAULT_LINE_WIDTH
}

#[cfg(feature = "serde")]
impl TryFrom<RawLayout> for Layout {
    type Error = BinfracError;

    fn try_from(raw: RawLayout) -> Result<Self> {
        Layout::new(raw.group_size, raw.line_width)
    }
}
