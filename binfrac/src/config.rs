//! Printer configuration
//!
//! The per-digit flush that keeps the output device busy is an explicit
//! [`FlushPolicy`] rather than a side effect of how stdout is buffered.

use binfrac_core::Layout;

/// When the printer forces buffered output to its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlushPolicy {
    /// Flush after every digit and its separators
    EveryDigit,
    /// Leave flushing to the writer, plus one flush when a bounded run ends
    #[default]
    Buffered,
}

/// Configuration for a printer run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PrinterConfig {
    /// Flush behavior
    pub flush: FlushPolicy,
    /// Stop after this many digits; `None` runs forever
    pub digit_limit: Option<u64>,
    /// Digit grouping and line width
    pub layout: Layout,
}

impl PrinterConfig {
    /// Config that flushes after every digit, as the original vampire does
    pub fn every_digit() -> Self {
        Self::default().with_flush(FlushPolicy::EveryDigit)
    }

    /// Set the flush policy
    pub fn with_flush(mut self, flush: FlushPolicy) -> Self {
        self.flush = flush;
        self
    }

    /// Stop after `limit` digits
    pub fn with_digit_limit(mut self, limit: u64) -> Self {
        self.digit_limit = Some(limit);
        self
    }

    /// Set grouping and line width
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Parse a config from JSON; missing fields take their defaults
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
