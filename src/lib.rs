// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # helixscan
//!
//! Linear-time search for the longest DNA substring that reads as its own
//! reverse complement with at most one mismatched base pair.
//!
//! ## Features
//!
//! - **O(n) dual-pass scan**: a Manacher-style mirrored expansion computes the
//!   exact complement-palindrome radius at every center, then a second pass
//!   reuses it to spend the single tolerated mismatch
//! - **Even and odd lengths** handled uniformly through a separator-interleaved
//!   view of the input
//! - **Strict validation**: any byte other than `A`, `C`, `G`, `T` rejects the
//!   whole input with [`HelixError::InvalidSymbol`]
//! - **Brute-force reference** for testing and benchmarking
//!
//! ## Quick Start
//!
//! ```rust
//! use helixscan::longest_near_palindrome;
//!
//! // CAGC has two mismatched pairs; CAG has none
//! assert_eq!(longest_near_palindrome(b"CAGC").unwrap(), b"CAG");
//!
//! // AG is allowed one mismatched pair
//! assert_eq!(longest_near_palindrome(b"AG").unwrap(), b"AG");
//! ```
//!
//! ## Match Details
//!
//! ```rust
//! use helixscan::find_near_palindrome;
//!
//! let hit = find_near_palindrome(b"TTGAATTCTT").unwrap();
//! assert_eq!(hit.start, 1);
//! assert_eq!(hit.len, 8);
//! assert_eq!(hit.mismatches, 1);
//! ```
//!
//! ## Exact Complement Palindromes
//!
//! ```rust
//! use helixscan::longest_complement_palindrome;
//!
//! assert_eq!(longest_complement_palindrome(b"TTGAATTCTT").unwrap(), b"GAATTC");
//! ```
//!
//! See the [`alphabet`], [`interleave`], [`radius`], [`near_palindrome`] and
//! [`reference`] modules for the complete API.

pub mod alphabet;
pub mod error;
pub mod interleave;
pub mod near_palindrome;
pub mod radius;
pub mod reference;

pub use error::{HelixError, Result};
pub use near_palindrome::{
    NearPalindrome, find_complement_palindrome, find_near_palindrome,
    longest_complement_palindrome, longest_near_palindrome,
};
