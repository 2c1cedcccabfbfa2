//! binfrac - stream the binary expansion of a fraction
//!
//! This library writes the never-ending binary expansion of a proper
//! fraction to any [`std::io::Write`], grouped into blocks of four digits
//! with a line break every eighty.
//!
//! ## Architecture
//!
//! - **binfrac-core**: fraction validation, the digit generator, layout rules
//!   and cycle analysis (no I/O, `no_std`)
//! - **binfrac**: configuration, the streaming printer and the
//!   `battery-vampire` binary
//!
//! ## Quick Start
//!
//! ```rust
//! use binfrac::{BinaryFractionPrinter, Fraction, PrinterConfig};
//!
//! fn example() -> binfrac::Result<()> {
//!     let config = PrinterConfig::default().with_digit_limit(8);
//!     let mut printer = BinaryFractionPrinter::new(Vec::new(), Fraction::ONE_OVER_101, config);
//!     printer.run()?;
//!
//!     assert_eq!(
//!         printer.into_inner(),
//!         b"Binary representation of 1/101: 0.0000 0010 "
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions
pub use binfrac_core::{
    BinaryExpansion, BinfracError, Bit, Cycle, Fraction, Layout, Separators, DEFAULT_GROUP_SIZE,
    DEFAULT_LINE_WIDTH, MAX_DENOMINATOR,
};

pub mod config;
pub mod error;
pub mod printer;

pub use config::{FlushPolicy, PrinterConfig};
pub use error::{Error, Result};
pub use printer::{header_for, BinaryFractionPrinter, PrintReport};
