// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Brute-Force Reference Checker
//!
//! Straightforward definitions used as ground truth by tests, fuzz targets
//! and benchmarks. Every substring is compared against its own
//! reverse complement; nothing is shared with the mirrored scan beyond the
//! alphabet.
//!
//! The search is cubic in the worst case and meant for short inputs only.

use crate::alphabet::{Symbol, pairs};
use crate::error::Result;
use crate::near_palindrome::NearPalindrome;

/// Counts the symmetric pairs of `window` that are not complementary.
///
/// Positions are compared from both ends inward; the middle base of an
/// odd-length window is not compared with anything.
///
/// # Examples
///
/// ```rust
/// use helixscan::reference::count_mismatches;
///
/// assert_eq!(count_mismatches(b"ACGT"), Some(0));
/// assert_eq!(count_mismatches(b"CAGC"), Some(2));
/// assert_eq!(count_mismatches(b"AAA"), Some(1));
/// assert_eq!(count_mismatches(b"ANT"), None);
/// ```
pub fn count_mismatches(window: &[u8]) -> Option<usize> {
    let symbols = parse(window).ok()?;
    Some(mismatches_within(&symbols, usize::MAX))
}

/// Returns `true` when `window` has at most `max_mismatches` mismatched pairs.
pub fn is_near_palindrome(window: &[u8], max_mismatches: usize) -> bool {
    parse(window)
        .map(|symbols| mismatches_within(&symbols, max_mismatches) <= max_mismatches)
        .unwrap_or(false)
}

/// Longest substring with at most `max_mismatches` mismatched pairs,
/// leftmost among equal lengths.
///
/// # Errors
///
/// [`HelixError::InvalidSymbol`](crate::error::HelixError::InvalidSymbol)
/// when `sequence` contains anything but `A`, `C`, `G`, `T`.
///
/// # Examples
///
/// ```rust
/// use helixscan::reference::longest_within;
///
/// let hit = longest_within(b"CAGC", 1).unwrap();
/// assert_eq!((hit.start, hit.len), (0, 3));
/// ```
pub fn longest_within(sequence: &[u8], max_mismatches: usize) -> Result<NearPalindrome> {
    let symbols = parse(sequence)?;
    let mut best = NearPalindrome::default();

    for start in 0..symbols.len() {
        // only strictly longer windows can replace the current best
        for end in (start + best.len + 1)..=symbols.len() {
            let found = mismatches_within(&symbols[start..end], max_mismatches);
            if found <= max_mismatches {
                best = NearPalindrome {
                    start,
                    len: end - start,
                    mismatches: found,
                };
            }
        }
    }
    Ok(best)
}

/// [`longest_within`] with one tolerated mismatch, returned as bytes.
pub fn longest_near_palindrome(sequence: &[u8]) -> Result<Vec<u8>> {
    let hit = longest_within(sequence, 1)?;
    Ok(hit.slice(sequence).to_vec())
}

fn parse(sequence: &[u8]) -> Result<Vec<Symbol>> {
    sequence
        .iter()
        .enumerate()
        .map(|(position, &byte)| Symbol::from_ascii(byte, position))
        .collect()
}

/// Counts mismatched pairs, stopping once `limit` is exceeded.
fn mismatches_within(symbols: &[Symbol], limit: usize) -> usize {
    let half = symbols.len() / 2;
    let mut found = 0;
    for (&left, &right) in symbols[..half].iter().zip(symbols.iter().rev()) {
        if !pairs(left, right) {
            found += 1;
            if found > limit {
                break;
            }
        }
    }
    found
}
