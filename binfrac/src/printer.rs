//! Streaming printer for binary expansions
//!
//! The printer writes a header, then one digit per step followed by the
//! separators the layout asks for. With [`FlushPolicy::EveryDigit`] every
//! step ends in a flush, which is what keeps a terminal (and the battery)
//! busy forever.

use std::io::Write;

use binfrac_core::{BinaryExpansion, Bit, Fraction, Separators};

use crate::config::{FlushPolicy, PrinterConfig};
use crate::Result;

/// Header written before the first digit, without a trailing newline
pub fn header_for(fraction: Fraction) -> String {
    format!("Binary representation of {fraction}: 0.")
}

/// Outcome of a bounded run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintReport {
    /// Digits written
    pub digits: u64,
    /// Remainder after the last digit
    pub remainder: u64,
}

/// Writes the binary expansion of a fraction to `W`
pub struct BinaryFractionPrinter<W: Write> {
    writer: W,
    expansion: BinaryExpansion,
    config: PrinterConfig,
}

impl<W: Write> BinaryFractionPrinter<W> {
    /// Create a printer positioned before the header
    pub fn new(writer: W, fraction: Fraction, config: PrinterConfig) -> Self {
        Self {
            writer,
            expansion: BinaryExpansion::new(fraction),
            config,
        }
    }

    /// Write the header and flush it, regardless of policy
    pub fn write_header(&mut self) -> Result<()> {
        let header = header_for(self.expansion.fraction());
        self.writer.write_all(header.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Emit one digit and its separators, flushing if the policy asks for it
    pub fn step(&mut self) -> Result<Bit> {
        let bit = self.expansion.next_bit();
        let separators = self
            .config
            .layout
            .separators_after(self.expansion.digits_emitted());

        let mut buf = [0u8; 1 + Separators::MAX_LEN];
        buf[0] = bit.as_byte();
        let len = 1 + separators.encode(&mut buf[1..]);
        self.writer.write_all(&buf[..len])?;

        if self.config.flush == FlushPolicy::EveryDigit {
            self.writer.flush()?;
        }
        Ok(bit)
    }

    /// Write the header and digits until the limit, or forever without one
    pub fn run(&mut self) -> Result<PrintReport> {
        self.write_header()?;

        match self.config.digit_limit {
            Some(limit) => {
                for _ in 0..limit {
                    self.step()?;
                }
                self.writer.flush()?;
                Ok(self.report())
            }
            None => loop {
                self.step()?;
            },
        }
    }

    /// Digits written and current remainder
    pub fn report(&self) -> PrintReport {
        PrintReport {
            digits: self.expansion.digits_emitted(),
            remainder: self.expansion.remainder(),
        }
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the printer, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
