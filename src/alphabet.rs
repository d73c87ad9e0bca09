// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Nucleotide Alphabet and Complement Table
//!
//! The scanner works over the four standard bases plus one synthetic
//! separator symbol used by the interleaved transform.
//!
//! ## Encoding
//!
//! | Symbol    | Code | Complement |
//! |-----------|------|------------|
//! | A         | 00   | T          |
//! | C         | 01   | G          |
//! | G         | 10   | C          |
//! | T         | 11   | A          |
//! | Separator | 100  | Separator  |
//!
//! The base codes match the 2-bit packing used for clean ACGT sequences, so the
//! complement of a base is a single XOR with `0b11`. The separator sits outside
//! the 2-bit range and is its own complement.
//!
//! ## Validation
//!
//! ASCII lookup is strict: only uppercase `A`, `C`, `G` and `T` are accepted.
//! Case folding and whitespace trimming belong to whoever reads the input.

use std::fmt;

use crate::error::{HelixError, Result};

/// The four accepted input bases, in code order.
pub const BASES: [u8; 4] = *b"ACGT";

/// ASCII rendering of the separator symbol (never valid input).
pub const SEPARATOR: u8 = b'#';

/// Numeric codes for each [`Symbol`].
pub mod code {
    /// Adenine: binary 00
    pub const A: u8 = 0b00;
    /// Cytosine: binary 01
    pub const C: u8 = 0b01;
    /// Guanine: binary 10
    pub const G: u8 = 0b10;
    /// Thymine: binary 11
    pub const T: u8 = 0b11;
    /// Separator: outside the 2-bit base range
    pub const SEPARATOR: u8 = 0b100;

    /// XOR mask mapping a base code to its complement
    pub const COMPLEMENT_MASK: u8 = 0b11;

    /// Sentinel for bytes that are not bases
    pub(crate) const INVALID: u8 = 0xFF;
}

/// Lookup table for ASCII to symbol code.
///
/// Valid entries: A=0, C=1, G=2, T=3
/// Invalid entries: 0xFF (sentinel for validation)
static ASCII_TO_CODE: [u8; 256] = {
    let mut table = [code::INVALID; 256];
    table[b'A' as usize] = code::A;
    table[b'C' as usize] = code::C;
    table[b'G' as usize] = code::G;
    table[b'T' as usize] = code::T;
    table
};

/// One position of an interleaved sequence: a base or the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// Adenine
    A = code::A,
    /// Cytosine
    C = code::C,
    /// Guanine
    G = code::G,
    /// Thymine
    T = code::T,
    /// Synthetic separator placed between and around bases.
    Separator = code::SEPARATOR,
}

impl Symbol {
    /// Parses one input byte.
    ///
    /// `position` is only used to build the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helixscan::alphabet::Symbol;
    ///
    /// assert_eq!(Symbol::from_ascii(b'G', 0).unwrap(), Symbol::G);
    /// assert!(Symbol::from_ascii(b'N', 3).is_err());
    /// assert!(Symbol::from_ascii(b'#', 0).is_err());
    /// ```
    #[inline]
    pub fn from_ascii(byte: u8, position: usize) -> Result<Self> {
        Self::from_code(ASCII_TO_CODE[byte as usize]).ok_or(HelixError::InvalidSymbol {
            symbol: byte as char,
            position,
        })
    }

    /// Creates a `Symbol` from its numeric code.
    ///
    /// Returns `None` for anything but the five defined codes.
    #[inline]
    pub const fn from_code(value: u8) -> Option<Symbol> {
        match value {
            code::A => Some(Symbol::A),
            code::C => Some(Symbol::C),
            code::G => Some(Symbol::G),
            code::T => Some(Symbol::T),
            code::SEPARATOR => Some(Symbol::Separator),
            _ => None,
        }
    }

    /// Returns the paired symbol: A<->T, C<->G, separator<->separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helixscan::alphabet::Symbol;
    ///
    /// assert_eq!(Symbol::A.complement(), Symbol::T);
    /// assert_eq!(Symbol::G.complement(), Symbol::C);
    /// assert_eq!(Symbol::Separator.complement(), Symbol::Separator);
    /// ```
    #[inline]
    pub const fn complement(self) -> Symbol {
        match self {
            Symbol::Separator => Symbol::Separator,
            base => match Symbol::from_code(base as u8 ^ code::COMPLEMENT_MASK) {
                Some(paired) => paired,
                None => Symbol::Separator,
            },
        }
    }

    /// Returns `true` for the four bases.
    #[inline]
    pub const fn is_base(self) -> bool {
        !matches!(self, Symbol::Separator)
    }

    /// ASCII character for this symbol (`#` for the separator).
    #[inline]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Symbol::A => b'A',
            Symbol::C => b'C',
            Symbol::G => b'G',
            Symbol::T => b'T',
            Symbol::Separator => SEPARATOR,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii() as char)
    }
}

/// Pairing predicate used when expanding around a center.
///
/// `left` is the symbol on the left of the center, `right` its mirror on the
/// right. They pair when the complement of `left` is `right`.
#[inline]
pub fn pairs(left: Symbol, right: Symbol) -> bool {
    left.complement() == right
}

/// Checks whether every byte is an accepted base.
///
/// # Examples
///
/// ```rust
/// use helixscan::alphabet::is_valid_sequence;
///
/// assert!(is_valid_sequence(b"ACGT"));
/// assert!(is_valid_sequence(b""));
/// assert!(!is_valid_sequence(b"acgt"));
/// assert!(!is_valid_sequence(b"ACGN"));
/// ```
pub fn is_valid_sequence(sequence: &[u8]) -> bool {
    sequence
        .iter()
        .all(|&b| ASCII_TO_CODE[b as usize] != code::INVALID)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Symbol; 5] = [Symbol::A, Symbol::C, Symbol::G, Symbol::T, Symbol::Separator];

    #[test]
    fn test_from_ascii_bases() {
        assert_eq!(Symbol::from_ascii(b'A', 0).unwrap(), Symbol::A);
        assert_eq!(Symbol::from_ascii(b'C', 0).unwrap(), Symbol::C);
        assert_eq!(Symbol::from_ascii(b'G', 0).unwrap(), Symbol::G);
        assert_eq!(Symbol::from_ascii(b'T', 0).unwrap(), Symbol::T);
    }

    #[test]
    fn test_from_ascii_rejects_everything_else() {
        for byte in 0..=255u8 {
            if BASES.contains(&byte) {
                continue;
            }
            match Symbol::from_ascii(byte, 11) {
                Err(HelixError::InvalidSymbol { symbol, position }) => {
                    assert_eq!(symbol, byte as char);
                    assert_eq!(position, 11);
                }
                other => panic!("byte {byte:#04x} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn test_separator_is_not_input() {
        assert!(Symbol::from_ascii(SEPARATOR, 0).is_err());
    }

    #[test]
    fn test_complement_pairs() {
        assert_eq!(Symbol::A.complement(), Symbol::T);
        assert_eq!(Symbol::T.complement(), Symbol::A);
        assert_eq!(Symbol::C.complement(), Symbol::G);
        assert_eq!(Symbol::G.complement(), Symbol::C);
        assert_eq!(Symbol::Separator.complement(), Symbol::Separator);
    }

    #[test]
    fn test_complement_is_involution() {
        for symbol in ALL {
            assert_eq!(symbol.complement().complement(), symbol);
        }
    }

    #[test]
    fn test_no_base_is_self_complementary() {
        for symbol in ALL.into_iter().filter(|s| s.is_base()) {
            assert_ne!(symbol.complement(), symbol);
            assert!(!pairs(symbol, symbol));
        }
    }

    #[test]
    fn test_pairs_is_symmetric() {
        for left in ALL {
            for right in ALL {
                assert_eq!(pairs(left, right), pairs(right, left));
            }
        }
    }

    #[test]
    fn test_separator_pairs_only_with_itself() {
        assert!(pairs(Symbol::Separator, Symbol::Separator));
        for base in [Symbol::A, Symbol::C, Symbol::G, Symbol::T] {
            assert!(!pairs(Symbol::Separator, base));
            assert!(!pairs(base, Symbol::Separator));
        }
    }

    #[test]
    fn test_code_roundtrip() {
        for symbol in ALL {
            assert_eq!(Symbol::from_code(symbol as u8), Some(symbol));
        }
        assert_eq!(Symbol::from_code(5), None);
        assert_eq!(Symbol::from_code(0xFF), None);
    }

    #[test]
    fn test_to_ascii_and_display() {
        assert_eq!(Symbol::G.to_ascii(), b'G');
        assert_eq!(Symbol::Separator.to_string(), "#");
        for &byte in &BASES {
            assert_eq!(Symbol::from_ascii(byte, 0).unwrap().to_ascii(), byte);
        }
    }

    #[test]
    fn test_is_valid_sequence() {
        assert!(is_valid_sequence(b"GATTACA"));
        assert!(!is_valid_sequence(b"GATTACA\n"));
        assert!(!is_valid_sequence(b"gattaca"));
        assert!(!is_valid_sequence(b"GAUUACA"));
    }
}
