// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Length boundary fuzzing.
//!
//! Generates sequences of fixed small lengths, where the scan has the fewest
//! interior centers and off-by-one errors in the mirror guards show up first,
//! and compares each against the brute-force reference.

#![no_main]

use libfuzzer_sys::fuzz_target;
use helixscan::near_palindrome::find_near_palindrome;
use helixscan::reference::longest_within;

/// Lengths to test: the empty and single-base cases plus short odd/even pairs.
const BOUNDARY_LENGTHS: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 15, 16, 17, 31, 32, 33];

fuzz_target!(|data: &[u8]| {
    for &target_len in BOUNDARY_LENGTHS {
        let sequence = generate_dna_sequence(data, target_len);

        let fast = find_near_palindrome(&sequence).expect("ACGT input is valid");
        let slow = longest_within(&sequence, 1).expect("ACGT input is valid");
        assert_eq!(
            fast,
            slow,
            "mismatch at boundary {} (odd={}) for {}",
            target_len,
            target_len % 2 == 1,
            String::from_utf8_lossy(&sequence)
        );
        assert_eq!(fast.len == 0, target_len == 0);
    }
});

/// Generate a DNA sequence of a specific length using input bytes as entropy.
fn generate_dna_sequence(seed: &[u8], length: usize) -> Vec<u8> {
    const BASES: &[u8] = b"ACGT";

    let mut result = Vec::with_capacity(length);
    for i in 0..length {
        // Use seed bytes cyclically to determine each base
        let seed_byte = if seed.is_empty() {
            i as u8
        } else {
            seed[i % seed.len()]
        };
        result.push(BASES[(seed_byte as usize) % BASES.len()]);
    }
    result
}
