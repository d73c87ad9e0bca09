// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Longest Near-Palindrome Search
//!
//! Entry points tying the pieces together:
//!
//! 1. validate and interleave the input ([`Interleaved`])
//! 2. run both radius passes ([`RadiusProfile`])
//! 3. pick the leftmost index with the largest radius and map it back
//!
//! A *near-palindrome* is a substring that equals its own reverse complement
//! except for at most one base pair. Ties between equally long candidates go
//! to the one starting furthest left.
//!
//! ```rust
//! use helixscan::near_palindrome::{find_near_palindrome, longest_near_palindrome};
//!
//! assert_eq!(longest_near_palindrome(b"CAGC").unwrap(), b"CAG");
//!
//! let hit = find_near_palindrome(b"TTGAATTCTT").unwrap();
//! assert_eq!((hit.start, hit.len, hit.mismatches), (1, 8, 1));
//! ```

use tracing::debug;

use crate::error::Result;
use crate::interleave::Interleaved;
use crate::radius::RadiusProfile;

/// A substring located by the search, in input coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NearPalindrome {
    /// Offset of the first base.
    pub start: usize,
    /// Number of bases.
    pub len: usize,
    /// Non-complementary pairs inside the substring (0 or 1).
    pub mismatches: usize,
}

impl NearPalindrome {
    /// Offset one past the last base.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns `true` for the empty match of an empty input.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` when the substring equals its reverse complement.
    #[inline]
    pub const fn is_exact(&self) -> bool {
        self.mismatches == 0
    }

    /// The matched bases of `sequence`.
    ///
    /// # Panics
    ///
    /// If `sequence` is shorter than [`end`](Self::end), i.e. not the input
    /// this match was found in.
    #[inline]
    pub fn slice<'a>(&self, sequence: &'a [u8]) -> &'a [u8] {
        &sequence[self.start..self.end()]
    }
}

/// Finds the longest substring of `sequence` that is a complement
/// palindrome with at most one mismatched pair.
///
/// Runs in O(n) time and memory.
///
/// # Errors
///
/// [`HelixError::InvalidSymbol`](crate::error::HelixError::InvalidSymbol)
/// if `sequence` contains anything but uppercase `A`, `C`, `G`, `T`.
///
/// # Examples
///
/// ```rust
/// use helixscan::near_palindrome::find_near_palindrome;
///
/// let hit = find_near_palindrome(b"ACGT").unwrap();
/// assert_eq!((hit.start, hit.len), (0, 4));
/// assert!(hit.is_exact());
///
/// assert!(find_near_palindrome(b"ACGN").is_err());
/// ```
pub fn find_near_palindrome(sequence: &[u8]) -> Result<NearPalindrome> {
    let seq = Interleaved::from_ascii(sequence)?;
    let profile = RadiusProfile::compute(&seq);

    let (center, radius) = leftmost_max(profile.one());
    let (start, len) = seq.original_span(center, radius);
    let hit = NearPalindrome {
        start,
        len,
        mismatches: usize::from(profile.spends_mismatch(center)),
    };

    debug!(
        input_len = sequence.len(),
        start = hit.start,
        len = hit.len,
        mismatches = hit.mismatches,
        "near-palindrome scan complete"
    );
    Ok(hit)
}

/// Returns the bases of [`find_near_palindrome`]'s match.
///
/// # Examples
///
/// ```rust
/// use helixscan::near_palindrome::longest_near_palindrome;
///
/// assert_eq!(longest_near_palindrome(b"").unwrap(), b"");
/// assert_eq!(longest_near_palindrome(b"AG").unwrap(), b"AG");
/// assert_eq!(longest_near_palindrome(b"AAA").unwrap(), b"AAA");
/// ```
pub fn longest_near_palindrome(sequence: &[u8]) -> Result<Vec<u8>> {
    let hit = find_near_palindrome(sequence)?;
    Ok(hit.slice(sequence).to_vec())
}

/// Finds the longest exact complement palindrome (no mismatches allowed).
///
/// Only the zero-mismatch pass is needed.
///
/// # Examples
///
/// ```rust
/// use helixscan::near_palindrome::find_complement_palindrome;
///
/// // EcoRI site
/// let hit = find_complement_palindrome(b"TTGAATTCTT").unwrap();
/// assert_eq!((hit.start, hit.len), (2, 6));
/// ```
pub fn find_complement_palindrome(sequence: &[u8]) -> Result<NearPalindrome> {
    let seq = Interleaved::from_ascii(sequence)?;
    let zero = crate::radius::zero_mismatch_radii(&seq);

    let (center, radius) = leftmost_max(&zero);
    let (start, len) = seq.original_span(center, radius);

    debug!(
        input_len = sequence.len(),
        start, len, "complement-palindrome scan complete"
    );
    Ok(NearPalindrome {
        start,
        len,
        mismatches: 0,
    })
}

/// Returns the bases of [`find_complement_palindrome`]'s match.
pub fn longest_complement_palindrome(sequence: &[u8]) -> Result<Vec<u8>> {
    let hit = find_complement_palindrome(sequence)?;
    Ok(hit.slice(sequence).to_vec())
}

/// First index holding the largest radius, with that radius.
///
/// Strict comparison keeps the smallest index on ties, which is also the
/// leftmost-starting substring since equal radii mean equal lengths.
fn leftmost_max(radii: &[usize]) -> (usize, usize) {
    let mut best = (0, 0);
    for (index, &radius) in radii.iter().enumerate() {
        if radius > best.1 {
            best = (index, radius);
        }
    }
    best
}

// ============================================================================
// Unit Tests
// ============================================================================
