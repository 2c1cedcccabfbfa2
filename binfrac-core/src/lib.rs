#![no_std]

//! binfrac core - binary expansion of proper fractions
//!
//! This crate provides the pure pieces of the binary fraction printer: the
//! validated [`Fraction`], the doubling-remainder digit generator, the digit
//! grouping rules and, with the `alloc` feature, cycle analysis. No I/O.

#[cfg(feature = "alloc")]
pub mod cycle;
pub mod error;
pub mod expansion;
pub mod fraction;
pub mod layout;

#[cfg(feature = "alloc")]
pub use cycle::Cycle;
pub use error::*;
pub use expansion::{BinaryExpansion, Bit};
pub use fraction::{Fraction, MAX_DENOMINATOR};
pub use layout::{Layout, Separators, DEFAULT_GROUP_SIZE, DEFAULT_LINE_WIDTH};
