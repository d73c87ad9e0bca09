// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Radius array invariant fuzzing.
//!
//! Checks, on inputs far longer than the reference can handle, the
//! properties that hold for every index of the two radius arrays:
//! - `one[i] >= zero[i]`
//! - a radius never runs past either end of the interleaved sequence
//! - radii at separators are even, at bases odd (spans end on separators)
//! - the winning span has at most one mismatched pair

#![no_main]

use libfuzzer_sys::fuzz_target;
use helixscan::interleave::Interleaved;
use helixscan::near_palindrome::find_near_palindrome;
use helixscan::radius::RadiusProfile;
use helixscan::reference::count_mismatches;

fuzz_target!(|data: &[u8]| {
    // Low-entropy mapping: long A/T runs stress mirroring
    let sequence: Vec<u8> = data
        .iter()
        .map(|&b| if b < 200 { b"AT"[(b & 1) as usize] } else { b"CG"[(b & 1) as usize] })
        .collect();

    let interleaved = Interleaved::from_ascii(&sequence).expect("ACGT input is valid");
    let profile = RadiusProfile::compute(&interleaved);
    let len = interleaved.len();

    for i in 0..len {
        let zero = profile.zero()[i];
        let one = profile.one()[i];
        assert!(one >= zero, "one < zero at index {}", i);
        assert!(one <= i && i + one < len, "radius out of bounds at index {}", i);
        assert_eq!(one % 2, i % 2, "one-mismatch span at {} does not end on separators", i);
        assert_eq!(zero % 2, i % 2, "zero-mismatch span at {} does not end on separators", i);
    }

    let hit = find_near_palindrome(&sequence).expect("ACGT input is valid");
    assert!(hit.end() <= sequence.len());
    assert_eq!(hit.len == 0, sequence.is_empty());
    assert_eq!(count_mismatches(hit.slice(&sequence)), Some(hit.mismatches));
});
