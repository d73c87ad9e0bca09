// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Linear scan vs brute-force reference equivalence fuzzing.
//!
//! Maps arbitrary bytes onto ACGT (two bits per byte) and checks that the
//! mirrored scan finds exactly the substring the brute-force checker finds,
//! for both the one-mismatch and the exact search.

#![no_main]

use libfuzzer_sys::fuzz_target;
use helixscan::near_palindrome::{find_complement_palindrome, find_near_palindrome};
use helixscan::reference::longest_within;

/// Keeps the cubic reference affordable.
const MAX_LEN: usize = 256;

fuzz_target!(|data: &[u8]| {
    let sequence: Vec<u8> = data
        .iter()
        .take(MAX_LEN)
        .map(|&b| b"ACGT"[(b & 0b11) as usize])
        .collect();

    let fast = find_near_palindrome(&sequence).expect("ACGT input is valid");
    let slow = longest_within(&sequence, 1).expect("ACGT input is valid");
    assert_eq!(
        fast,
        slow,
        "one-mismatch result differs from reference for {}",
        String::from_utf8_lossy(&sequence)
    );

    let fast = find_complement_palindrome(&sequence).expect("ACGT input is valid");
    let slow = longest_within(&sequence, 0).expect("ACGT input is valid");
    assert_eq!(
        fast,
        slow,
        "exact result differs from reference for {}",
        String::from_utf8_lossy(&sequence)
    );
});
