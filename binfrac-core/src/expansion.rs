//! Doubling-remainder binary expansion
//!
//! Each step doubles the remainder and subtracts the denominator when the
//! doubled value reaches it. The subtraction decides the digit, so the
//! remainder stays in `[0, denominator)` and every digit is exactly 0 or 1.

use crate::fraction::Fraction;

/// A single binary digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Bit {
    Zero = 0,
    One = 1,
}

impl Bit {
    /// ASCII digit for this bit
    pub const fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// ASCII digit as a byte, ready for a byte writer
    pub const fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit as u8
    }
}

impl core::fmt::Display for Bit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Unbounded generator of the binary digits of a fraction after the point
///
/// The iterator never returns `None`; bound it with `take` or a digit limit.
#[derive(Debug, Clone)]
pub struct BinaryExpansion {
    fraction: Fraction,
    remainder: u64,
    digits_emitted: u64,
}

impl BinaryExpansion {
    /// Start a new expansion with the remainder set to the numerator
    pub const fn new(fraction: Fraction) -> Self {
        Self {
            fraction,
            remainder: fraction.numerator(),
            digits_emitted: 0,
        }
    }

    /// Produce the next digit
    pub fn next_bit(&mut self) -> Bit {
        let denominator = self.fraction.denominator();
        // remainder < denominator <= u64::MAX / 2, so doubling cannot overflow
        self.remainder *= 2;

        let bit = if self.remainder >= denominator {
            self.remainder -= denominator;
            Bit::One
        } else {
            Bit::Zero
        };

        // Wrapping keeps a run of 2^64 digits well defined
        self.digits_emitted = self.digits_emitted.wrapping_add(1);
        bit
    }

    /// Current remainder, always in `[0, denominator)`
    pub const fn remainder(&self) -> u64 {
        self.remainder
    }

    /// Number of digits produced so far
    pub const fn digits_emitted(&self) -> u64 {
        self.digits_emitted
    }

    pub const fn fraction(&self) -> Fraction {
        self.fraction
    }
}

impl Iterator for BinaryExpansion {
    type Item = Bit;

    fn next(&mut self) -> Option<Bit> {
        Some(self.next_bit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl core::iter::FusedIterator for BinaryExpansion {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn bits_of(fraction: Fraction, out: &mut [u8]) {
        let mut expansion = BinaryExpansion::new(fraction);
        for slot in out.iter_mut() {
            *slot = expansion.next_bit().as_byte();
        }
    }

    #[test]
    fn test_first_digits_of_one_over_101() {
        let mut digits = [0u8; 8];
        bits_of(Fraction::ONE_OVER_101, &mut digits);
        assert_eq!(&digits, b"00000010");

        let mut digits = [0u8; 40];
        bits_of(Fraction::ONE_OVER_101, &mut digits);
        assert_eq!(&digits, b"0000001010001000110111110000110010101100");
    }

    #[test]
    fn test_remainder_stays_below_denominator() {
        let mut expansion = BinaryExpansion::new(Fraction::ONE_OVER_101);
        assert_eq!(expansion.remainder(), 1);

        for step in 1..=10_000u64 {
            expansion.next_bit();
            assert!(expansion.remainder() < 101);
            assert_eq!(expansion.digits_emitted(), step);
        }
    }

    #[test]
    fn test_expansion_repeats_with_period_100() {
        let mut expansion = BinaryExpansion::new(Fraction::ONE_OVER_101);
        let mut first = [Bit::Zero; 100];
        for slot in first.iter_mut() {
            *slot = expansion.next_bit();
        }
        // 2 is a primitive root modulo 101, so the remainder returns to 1
        assert_eq!(expansion.remainder(), 1);
        for expected in first {
            assert_eq!(expansion.next_bit(), expected);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let a = BinaryExpansion::new(Fraction::ONE_OVER_101).take(1_000);
        let b = BinaryExpansion::new(Fraction::ONE_OVER_101).take(1_000);
        assert!(a.eq(b));
    }

    #[test]
    fn test_zero_numerator_yields_zeros() {
        let fraction = Fraction::new(0, 9).unwrap();
        assert!(BinaryExpansion::new(fraction).take(64).all(|b| b == Bit::Zero));
    }

    #[test]
    fn test_terminating_fraction() {
        // 3/8 = 0.011
        let fraction = Fraction::new(3, 8).unwrap();
        let mut expansion = BinaryExpansion::new(fraction);
        assert_eq!(expansion.next_bit(), Bit::Zero);
        assert_eq!(expansion.next_bit(), Bit::One);
        assert_eq!(expansion.next_bit(), Bit::One);
        assert_eq!(expansion.remainder(), 0);
        assert!(expansion.take(32).all(|b| b == Bit::Zero));
    }

    #[test]
    fn test_matches_wide_integer_oracle() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x101);

        for _ in 0..200 {
            let denominator = rng.gen_range(1..=u32::MAX as u64);
            let numerator = rng.gen_range(0..denominator);
            let fraction = Fraction::new(numerator, denominator).unwrap();
            let mut expansion = BinaryExpansion::new(fraction);

            // digit k is floor(n * 2^k / d) mod 2; n * 2^64 fits in u128 for n < 2^32
            for k in 1..=64u32 {
                let expected = (((numerator as u128) << k) / denominator as u128) & 1;
                assert_eq!(u8::from(expansion.next_bit()) as u128, expected);
                assert!(expansion.remainder() < denominator);
            }
        }
    }

    #[test]
    fn test_largest_denominator_does_not_overflow() {
        let d = crate::fraction::MAX_DENOMINATOR;
        let fraction = Fraction::new(d - 1, d).unwrap();
        let mut expansion = BinaryExpansion::new(fraction);
        for _ in 0..256 {
            expansion.next_bit();
            assert!(expansion.remainder() < d);
        }
    }

    #[test]
    fn test_bit_chars() {
        assert_eq!(Bit::Zero.as_char(), '0');
        assert_eq!(Bit::One.as_byte(), b'1');
        assert_eq!(u8::from(Bit::One), 1);
    }
}
