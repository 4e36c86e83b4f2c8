//! Candidate space enumeration
//!
//! Enumerates every code of a given length over an alphabet in mixed-radix
//! counting order. Position 0 is the most significant digit and varies
//! slowest, so the sequence is ascending in `Code` order:
//!
//! `RRRR, RRRG, RRRB, ..., RRGR, ...`
//!
//! This order is the tie-break order for guess selection.

use crate::core::{Alphabet, Code, Colour};
use std::iter::FusedIterator;

/// Every code of `length` pegs over an alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSpace {
    alphabet: Alphabet,
    length: usize,
}

impl CandidateSpace {
    #[must_use]
    pub const fn new(alphabet: Alphabet, length: usize) -> Self {
        Self { alphabet, length }
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of codes in the space (`alphabet^length`)
    #[must_use]
    pub fn size(&self) -> usize {
        usize::from(self.alphabet.size()).saturating_pow(self.length as u32)
    }

    /// A fresh, independent pass over the space
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Alphabet;
    /// use mastermind::solver::CandidateSpace;
    ///
    /// let space = CandidateSpace::new(Alphabet::new(2).unwrap(), 2);
    /// let codes: Vec<String> = space.iter().map(|c| c.to_string()).collect();
    /// assert_eq!(codes, ["RR", "RG", "GR", "GG"]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Codes {
        Codes {
            colours: self.alphabet.colours(),
            digits: vec![0; self.length],
            remaining: self.size(),
        }
    }
}

impl IntoIterator for &CandidateSpace {
    type Item = Code;
    type IntoIter = Codes;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`CandidateSpace`]
#[derive(Debug, Clone)]
pub struct Codes {
    colours: &'static [Colour],
    digits: Vec<usize>,
    remaining: usize,
}

impl Codes {
    fn current(&self) -> Code {
        Code::new(self.digits.iter().map(|&d| self.colours[d]).collect())
    }

    /// Add one to the counter, carrying towards position 0
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.colours.len() {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for Codes {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.remaining == 0 {
            return None;
        }
        let code = self.current();
        self.remaining -= 1;
        self.advance();
        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Codes {}

impl FusedIterator for Codes {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn space(colours: u8, length: usize) -> CandidateSpace {
        CandidateSpace::new(Alphabet::new(colours).unwrap(), length)
    }

    #[test]
    fn size_is_power() {
        assert_eq!(space(6, 4).size(), 1296);
        assert_eq!(space(7, 6).size(), 117_649);
        assert_eq!(space(2, 2).size(), 4);
    }

    #[test]
    fn yields_every_code_once() {
        let space = space(4, 3);
        let codes: Vec<Code> = space.iter().collect();
        assert_eq!(codes.len(), 64);

        let unique: FxHashSet<&Code> = codes.iter().collect();
        assert_eq!(unique.len(), 64);
        assert!(codes.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn order_is_ascending() {
        let codes: Vec<Code> = space(3, 3).iter().collect();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(codes.first().unwrap().to_string(), "RRR");
        assert_eq!(codes.last().unwrap().to_string(), "BBB");
    }

    #[test]
    fn last_position_varies_fastest() {
        let codes: Vec<String> = space(3, 2).iter().take(4).map(|c| c.to_string()).collect();
        assert_eq!(codes, ["RR", "RG", "RB", "GR"]);
    }

    #[test]
    fn iteration_is_restartable() {
        let space = space(3, 2);
        let mut first = space.iter();
        first.next();
        first.next();

        let fresh: Vec<Code> = space.iter().collect();
        assert_eq!(fresh.len(), 9);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut codes = space(2, 2).iter();
        assert_eq!(codes.by_ref().count(), 4);
        assert!(codes.next().is_none());
        assert!(codes.next().is_none());
    }
}
