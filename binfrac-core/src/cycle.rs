//! Cycle analysis of a binary expansion
//!
//! The digit sequence depends only on the remainder, so the expansion
//! repeats as soon as a remainder repeats. Recording the step at which each
//! remainder was first seen yields both the preperiod and the period.

use hashbrown::HashMap;

use crate::expansion::BinaryExpansion;
use crate::fraction::Fraction;

/// Repeating structure of a binary expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Digits before the repeating block starts
    pub preperiod: u64,
    /// Length of the repeating block
    pub period: u64,
    /// The repeating block is all zeros
    pub terminating: bool,
}

impl Cycle {
    /// Find the cycle, giving up after `max_steps` digits
    ///
    /// A denominator `d` has at most `d` distinct remainders, so any
    /// `max_steps >= d` always finds the cycle. Memory grows with the number
    /// of distinct remainders seen.
    pub fn detect(fraction: Fraction, max_steps: u64) -> Option<Self> {
        let mut expansion = BinaryExpansion::new(fraction);
        let mut first_seen: HashMap<u64, u64> = HashMap::new();
        first_seen.insert(expansion.remainder(), 0);

        for step in 1..=max_steps {
            expansion.next_bit();
            if let Some(&start) = first_seen.get(&expansion.remainder()) {
                // A repeated zero remainder means only zeros follow
                return Some(Self {
                    preperiod: start,
                    period: step - start,
                    terminating: expansion.remainder() == 0,
                });
            }
            first_seen.insert(expansion.remainder(), step);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraction(n: u64, d: u64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_one_over_101() {
        let cycle = Cycle::detect(Fraction::ONE_OVER_101, 101).unwrap();
        assert_eq!(
            cycle,
            Cycle {
                preperiod: 0,
                period: 100,
                terminating: false
            }
        );
    }

    #[test]
    fn test_mixed_preperiod() {
        // 1/6 = 0.0(01)
        assert_eq!(
            Cycle::detect(fraction(1, 6), 6),
            Some(Cycle {
                preperiod: 1,
                period: 2,
                terminating: false
            })
        );
        // 1/12 = 0.00(01)
        assert_eq!(
            Cycle::detect(fraction(1, 12), 12),
            Some(Cycle {
                preperiod: 2,
                period: 2,
                terminating: false
            })
        );
    }

    #[test]
    fn test_terminating() {
        // 1/8 = 0.001(0)
        let cycle = Cycle::detect(fraction(1, 8), 8).unwrap();
        assert_eq!(
            cycle,
            Cycle {
                preperiod: 3,
                period: 1,
                terminating: true
            }
        );

        let zero = Cycle::detect(fraction(0, 5), 5).unwrap();
        assert_eq!(
            zero,
            Cycle {
                preperiod: 0,
                period: 1,
                terminating: true
            }
        );
    }

    #[test]
    fn test_terminating_is_fixed_at_detection() {
        // 3/4 = 0.11(0), 1/3 = 0.(01)
        let quarter = Cycle::detect(fraction(3, 4), 4).unwrap();
        let third = Cycle::detect(fraction(1, 3), 3).unwrap();

        assert!(quarter.terminating);
        assert_eq!(quarter.preperiod, 2);
        assert!(!third.terminating);
        assert_eq!(third.period, 2);
    }

    #[test]
    fn test_gives_up_after_max_steps() {
        assert_eq!(Cycle::detect(Fraction::ONE_OVER_101, 99), None);
        assert!(Cycle::detect(Fraction::ONE_OVER_101, 100).is_some());
    }
}
