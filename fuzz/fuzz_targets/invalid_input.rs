// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Robustness fuzzing on raw bytes.
//!
//! Arbitrary input must never panic. It is either rejected with
//! `InvalidSymbol` naming the first byte outside ACGT, or accepted because
//! every byte is a valid base.

#![no_main]

use libfuzzer_sys::fuzz_target;
use helixscan::HelixError;
use helixscan::alphabet::BASES;
use helixscan::near_palindrome::find_near_palindrome;

fuzz_target!(|data: &[u8]| {
    let first_invalid = data.iter().position(|b| !BASES.contains(b));

    match (find_near_palindrome(data), first_invalid) {
        (Ok(hit), None) => assert!(hit.end() <= data.len()),
        (Err(HelixError::InvalidSymbol { symbol, position }), Some(expected)) => {
            assert_eq!(position, expected);
            assert_eq!(symbol, data[expected] as char);
        }
        (result, expected) => panic!(
            "unexpected outcome {:?} (first invalid byte at {:?})",
            result, expected
        ),
    }
});
