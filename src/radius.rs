// Copyright (c) 2025-present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! # Dual-Pass Mirrored Radius Computation
//!
//! Two left-to-right Manacher-style scans over an [`Interleaved`] sequence:
//!
//! 1. **Zero-mismatch pass**: for every index, the largest radius of an exact
//!    complement-palindrome centered there.
//! 2. **One-mismatch pass**: the largest radius when one non-complementary
//!    pair is tolerated, seeded from the first pass.
//!
//! Radii are counted in interleaved positions, so a radius of `r` covers
//! exactly `r` input bases.
//!
//! ## Mirroring
//!
//! Each pass tracks the palindrome reaching furthest right so far as a
//! [`MirrorBoundary`]. For an index `i` inside it, the mirror index
//! `2 * center - i` has already been scanned, and every pair around `i` that
//! stays inside the boundary has the same status as the mirrored pair around
//! the mirror index.
//!
//! Complement palindromes break that rule at a few *defect* positions. A base
//! is never its own complement, so a palindrome centered on a base does not map
//! that base onto itself. Likewise the spent mismatch of a one-mismatch
//! palindrome breaks its symmetry at two positions. The status of a pair that
//! touches a defect is compared directly; every other failing pair is read off
//! the mirror's radii. Only pairs beyond the boundary, or beyond what the
//! mirror's radii reveal, are expanded one by one.
//!
//! ## Mismatch Budget
//!
//! In the second pass the budget is decided per center from the failing pairs
//! found inside the boundary: none means the mismatch is still available, one
//! means it is already spent.
//!
//! ## Complexity
//!
//! Both passes run in O(n) time and memory for an input of `n` bases. Every
//! index examines at most five offsets before expanding, and expansion past
//! the boundary moves it right.

use tracing::trace;

use crate::interleave::Interleaved;

/// The rightmost-reaching palindrome seen so far in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MirrorBoundary {
    /// Center index of the palindrome.
    pub center: usize,
    /// Rightmost interleaved index it covers (`center + radius`).
    pub right_edge: usize,
}

impl MirrorBoundary {
    /// Mirror of `index` about the boundary center, if the boundary covers it.
    #[inline]
    pub fn mirror(&self, index: usize) -> Option<usize> {
        (index < self.right_edge).then(|| 2 * self.center - index)
    }

    /// Moves the boundary to `(index, index + radius)` if that reaches further.
    #[inline]
    pub fn advance(&mut self, index: usize, radius: usize) {
        if index + radius > self.right_edge {
            self.center = index;
            self.right_edge = index + radius;
        }
    }
}

/// Pair offsets around one index that touch a defect of the boundary.
///
/// A boundary has at most three defects: its center, when that is a base, and
/// both ends of its spent mismatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Defects {
    offsets: [usize; 3],
    len: usize,
}

impl Defects {
    /// Converts defect positions into pair offsets around `index`.
    ///
    /// A defect at `index` itself is never part of a pair around it.
    fn seen_from(index: usize, positions: impl IntoIterator<Item = usize>) -> Self {
        let mut defects = Self::default();
        for position in positions {
            if position != index {
                defects.offsets[defects.len] = index.abs_diff(position);
                defects.len += 1;
            }
        }
        defects
    }

    #[inline]
    fn contains(&self, offset: usize) -> bool {
        self.offsets[..self.len].contains(&offset)
    }
}

/// What the mirror reveals about the pairs around an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inherited {
    /// More pairs fail than tolerated; the radius is final.
    Settled(usize),
    /// Pairs at offsets `1..=known` hold `failures` mismatches, all tolerated.
    Open { known: usize, failures: usize },
}

/// Reads the failing pairs around `index` off its mirror.
///
/// Pairs at offsets `1..=known` fail at `index` exactly where they fail at
/// the mirror (`mirror_failures`), except at `defects`, which are compared
/// directly. At most five offsets are examined.
fn inherit(
    seq: &Interleaved,
    index: usize,
    known: usize,
    mirror_failures: &[usize],
    defects: &Defects,
    tolerated: usize,
) -> Inherited {
    let mut candidates = [0usize; 5];
    let mut count = 0;
    for &offset in mirror_failures.iter().chain(&defects.offsets[..defects.len]) {
        if (1..=known).contains(&offset) {
            candidates[count] = offset;
            count += 1;
        }
    }
    let candidates = &mut candidates[..count];
    candidates.sort_unstable();

    let mut failures = 0;
    let mut previous = 0;
    for &offset in candidates.iter() {
        if offset == previous {
            continue;
        }
        previous = offset;

        let fails = !defects.contains(offset) || !seq.pairs_at(index, offset - 1);
        if fails {
            failures += 1;
            if failures > tolerated {
                return Inherited::Settled(offset - 1);
            }
        }
    }
    Inherited::Open { known, failures }
}

/// Whether a center may still spend its one tolerated mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MismatchBudget {
    Available,
    Spent,
}

/// Expands from `radius` one pair at a time.
///
/// With the budget available the next in-bounds pair is taken whatever its
/// symbols; after that only complementary pairs extend the radius.
fn expand(seq: &Interleaved, index: usize, mut radius: usize, budget: MismatchBudget) -> usize {
    if budget == MismatchBudget::Available && seq.can_extend(index, radius) {
        radius += 1;
    }
    while seq.pairs_at(index, radius) {
        radius += 1;
    }
    radius
}

/// Zero- and one-mismatch radii for every index of an interleaved sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiusProfile {
    zero: Vec<usize>,
    one: Vec<usize>,
}

impl RadiusProfile {
    /// Runs both passes over `seq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helixscan::interleave::Interleaved;
    /// use helixscan::radius::RadiusProfile;
    ///
    /// let seq = Interleaved::from_ascii(b"AG").unwrap();
    /// let profile = RadiusProfile::compute(&seq);
    /// assert_eq!(profile.zero(), &[0, 1, 0, 1, 0]);
    /// assert_eq!(profile.one(), &[0, 1, 2, 1, 0]);
    /// ```
    pub fn compute(seq: &Interleaved) -> Self {
        let zero = zero_mismatch_radii(seq);
        let one = one_mismatch_radii(seq, &zero);
        Self { zero, one }
    }

    /// Exact complement-palindrome radius per index.
    #[inline]
    pub fn zero(&self) -> &[usize] {
        &self.zero
    }

    /// One-mismatch complement-palindrome radius per index.
    #[inline]
    pub fn one(&self) -> &[usize] {
        &self.one
    }

    /// Whether the one-mismatch palindrome at `index` actually uses its mismatch.
    #[inline]
    pub fn spends_mismatch(&self, index: usize) -> bool {
        self.one[index] > self.zero[index]
    }
}

/// Computes the exact complement-palindrome radius at every index.
///
/// The two end separators keep radius 0.
pub fn zero_mismatch_radii(seq: &Interleaved) -> Vec<usize> {
    let symbols = seq.symbols();
    let len = seq.len();
    let mut zero = vec![0usize; len];
    let mut boundary = MirrorBoundary::default();

    for i in 1..len.saturating_sub(1) {
        let inherited = match boundary.mirror(i) {
            Some(mirror) => {
                let center = boundary.center;
                let defects = Defects::seen_from(i, symbols[center].is_base().then_some(center));
                let known = (boundary.right_edge - i).min(zero[mirror] + 1);
                inherit(seq, i, known, &[zero[mirror] + 1], &defects, 0)
            }
            None => Inherited::Open {
                known: 0,
                failures: 0,
            },
        };

        let radius = match inherited {
            Inherited::Settled(radius) => radius,
            Inherited::Open { known, .. } => expand(seq, i, known, MismatchBudget::Spent),
        };

        zero[i] = radius;
        boundary.advance(i, radius);
    }

    trace!(
        len,
        center = boundary.center,
        right_edge = boundary.right_edge,
        "zero-mismatch pass complete"
    );
    zero
}

/// Computes the one-mismatch complement-palindrome radius at every index.
///
/// `zero` must be the output of [`zero_mismatch_radii`] for the same `seq`.
pub fn one_mismatch_radii(seq: &Interleaved, zero: &[usize]) -> Vec<usize> {
    debug_assert_eq!(zero.len(), seq.len());

    let symbols = seq.symbols();
    let len = seq.len();
    let mut one = vec![0usize; len];
    let mut boundary = MirrorBoundary::default();

    for i in 1..len.saturating_sub(1) {
        let inherited = match boundary.mirror(i) {
            Some(mirror) => {
                let center = boundary.center;
                let base_center = symbols[center].is_base().then_some(center);
                let spent = (one[center] > zero[center]).then(|| zero[center] + 1);
                let defects = Defects::seen_from(
                    i,
                    base_center
                        .into_iter()
                        .chain(spent.into_iter().flat_map(|m| [center - m, center + m])),
                );
                let known = (boundary.right_edge - i).min(one[mirror] + 1);
                inherit(
                    seq,
                    i,
                    known,
                    &[zero[mirror] + 1, one[mirror] + 1],
                    &defects,
                    1,
                )
            }
            None => Inherited::Open {
                known: 0,
                failures: 0,
            },
        };

        let radius = match inherited {
            Inherited::Settled(radius) => radius,
            // every known pair holds, so zero[i] already covers them
            Inherited::Open { failures: 0, .. } => {
                expand(seq, i, zero[i], MismatchBudget::Available)
            }
            Inherited::Open { known, .. } => expand(seq, i, known, MismatchBudget::Spent),
        };

        debug_assert!(
            radius >= zero[i],
            "one-mismatch radius {} below zero-mismatch radius {} at index {}",
            radius,
            zero[i],
            i
        );
        one[i] = radius;
        boundary.advance(i, radius);
    }

    trace!(
        len,
        center = boundary.center,
        right_edge = boundary.right_edge,
        "one-mismatch pass complete"
    );
    one
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interleave::pair_checks;

    fn profile(input: &[u8]) -> RadiusProfile {
        RadiusProfile::compute(&Interleaved::from_ascii(input).unwrap())
    }

    /// Direct per-center expansion with an explicit mismatch counter.
    fn expand_naive(seq: &Interleaved, center: usize, budget: usize) -> usize {
        let symbols = seq.symbols();
        let mut radius = 0;
        let mut mismatches = 0;
        while seq.can_extend(center, radius) {
            let left = symbols[center - radius - 1];
            let right = symbols[center + radius + 1];
            if !crate::alphabet::pairs(left, right) {
                if mismatches == budget {
                    break;
                }
                mismatches += 1;
            }
            radius += 1;
        }
        radius
    }

    fn assert_matches_naive(input: &[u8]) {
        let seq = Interleaved::from_ascii(input).unwrap();
        let profile = RadiusProfile::compute(&seq);
        for i in 1..seq.len() - 1 {
            assert_eq!(
                profile.zero()[i],
                expand_naive(&seq, i, 0),
                "zero radius at {} for {}",
                i,
                String::from_utf8_lossy(input)
            );
            assert_eq!(
                profile.one()[i],
                expand_naive(&seq, i, 1),
                "one radius at {} for {}",
                i,
                String::from_utf8_lossy(input)
            );
        }
    }

    #[test]
    fn test_empty_profile() {
        let p = profile(b"");
        assert_eq!(p.zero(), &[0]);
        assert_eq!(p.one(), &[0]);
    }

    #[test]
    fn test_single_base() {
        let p = profile(b"A");
        assert_eq!(p.zero(), &[0, 1, 0]);
        assert_eq!(p.one(), &[0, 1, 0]);
    }

    #[test]
    fn test_exact_palindrome_acgt() {
        let p = profile(b"ACGT");
        assert_eq!(p.zero(), &[0, 1, 0, 1, 4, 1, 0, 1, 0]);
        assert_eq!(p.one(), &[0, 1, 2, 3, 4, 3, 2, 1, 0]);
        assert!(!p.spends_mismatch(4));
        assert!(p.spends_mismatch(3));
    }

    #[test]
    fn test_base_centered_mirror_is_not_trusted() {
        // TTA around the first T would mirror into TT, which is not a
        // complement palindrome.
        let p = profile(b"ATTA");
        assert_eq!(p.zero(), &[0, 1, 2, 3, 0, 3, 2, 1, 0]);
        assert_eq!(p.one(), &[0, 1, 2, 3, 2, 3, 2, 1, 0]);
    }

    #[test]
    fn test_cagc_profile() {
        let p = profile(b"CAGC");
        assert_eq!(p.zero(), &[0, 1, 0, 3, 0, 1, 2, 1, 0]);
        assert_eq!(p.one(), &[0, 1, 2, 3, 2, 3, 2, 1, 0]);
    }

    #[test]
    fn test_homopolymer_never_pairs() {
        let p = profile(b"AAAAAAAA");
        for (i, &r) in p.zero().iter().enumerate() {
            let expected = if i % 2 == 1 { 1 } else { 0 };
            assert_eq!(r, expected, "index {}", i);
        }
        // one mismatch buys exactly one more base pair on each side
        assert_eq!(*p.one().iter().max().unwrap(), 3);
    }

    #[test]
    fn test_alternating_complement_run() {
        let input = b"ATATATATAT";
        let p = profile(input);
        let center = input.len();
        assert_eq!(p.zero()[center], input.len());
        assert_eq!(p.one()[center], input.len());
    }

    #[test]
    fn test_one_never_below_zero() {
        for input in [
            &b"GTACCGTT"[..],
            &b"ACGTAC"[..],
            &b"CATGTAAACACGAAAAACTCTAAGATTAAGA"[..],
            &b"GGGGCCCCAGGGGCCCC"[..],
        ] {
            let p = profile(input);
            for (z, o) in p.zero().iter().zip(p.one()) {
                assert!(o >= z);
            }
        }
    }

    #[test]
    fn test_matches_naive_expansion_exhaustive_short() {
        // every sequence up to length 6
        for len in 0..=6u32 {
            for n in 0..4usize.pow(len) {
                let input: Vec<u8> = (0..len)
                    .map(|k| b"ACGT"[(n >> (2 * k)) & 3])
                    .collect();
                assert_matches_naive(&input);
            }
        }
    }

    #[test]
    fn test_matches_naive_expansion_adversarial() {
        assert_matches_naive(&[b'A'; 64]);
        assert_matches_naive(&b"AT".repeat(40));
        assert_matches_naive(&[&[b'A'; 30][..], &b"C"[..], &[b'T'; 30][..]].concat());
        let arm = b"AT".repeat(12);
        assert_matches_naive(&[&arm[..], &b"G"[..], &arm[..]].concat());
        assert_matches_naive(&b"ATATTAG".repeat(12));
        assert_matches_naive(&b"AACGTTGCA".repeat(9));
        assert_matches_naive(&sparse_mismatches(200, 50));
        assert_matches_naive(&b"ATA".repeat(30));
    }

    #[test]
    fn test_boundary_mirror_and_advance() {
        let mut boundary = MirrorBoundary::default();
        assert_eq!(boundary.mirror(1), None);
        boundary.advance(4, 3);
        assert_eq!(boundary, MirrorBoundary { center: 4, right_edge: 7 });
        assert_eq!(boundary.mirror(6), Some(2));
        assert_eq!(boundary.mirror(7), None);
        // a shorter reach does not move the boundary
        boundary.advance(5, 1);
        assert_eq!(boundary.center, 4);
    }

    #[test]
    fn test_defects_seen_from() {
        // base center 5 and a spent mismatch at 5 +/- 2, seen from 8
        let defects = Defects::seen_from(8, [5, 3, 7]);
        assert_eq!(&defects.offsets[..defects.len], &[3, 5, 1]);
        assert!(defects.contains(5));
        assert!(!defects.contains(2));
        // sitting on a mismatch position drops it
        let defects = Defects::seen_from(7, [3, 7]);
        assert_eq!(&defects.offsets[..defects.len], &[4]);
        assert_eq!(Defects::seen_from(4, None), Defects::default());
    }

    #[test]
    fn test_inherit_from_separator_center() {
        // #A#C#G#T# is one palindrome around 4; index 5 mirrors index 3,
        // which fails at offset 2
        let seq = Interleaved::from_ascii(b"ACGT").unwrap();
        let defects = Defects::seen_from(5, None);
        assert_eq!(
            inherit(&seq, 5, 2, &[2], &defects, 0),
            Inherited::Settled(1)
        );
        assert_eq!(
            inherit(&seq, 5, 2, &[2], &defects, 1),
            Inherited::Open {
                known: 2,
                failures: 1
            }
        );
    }

    #[test]
    fn test_inherit_across_base_center() {
        // #A#C#C#G#T# has a palindrome of radius 5 around the base at 5
        let seq = Interleaved::from_ascii(b"ACCGT").unwrap();
        assert_eq!(zero_mismatch_radii(&seq)[5], 5);

        // index 6 mirrors 4, which fails at offset 1; the pair touching the
        // center holds at 6, so nothing beyond offset 1 is known
        let defects = Defects::seen_from(6, Some(5));
        assert_eq!(
            inherit(&seq, 6, 1, &[1], &defects, 0),
            Inherited::Open {
                known: 1,
                failures: 0
            }
        );

        // index 7 mirrors 3, which fails at offset 2; so does 7 itself
        let defects = Defects::seen_from(7, Some(5));
        assert_eq!(
            inherit(&seq, 7, 2, &[2], &defects, 0),
            Inherited::Settled(1)
        );
    }

    /// Alternating A/T with a G every `spacing` bases.
    fn sparse_mismatches(len: usize, spacing: usize) -> Vec<u8> {
        (0..len)
            .map(|i| if i % spacing == spacing - 1 { b'G' } else { b"AT"[i % 2] })
            .collect()
    }

    #[test]
    fn test_pair_checks_stay_linear() {
        for len in [1024, 4096, 16384] {
            let inputs = [
                sparse_mismatches(len, len / 4),
                sparse_mismatches(len, 7),
                b"ATA".repeat(len / 3),
                vec![b'A'; len],
                [&vec![b'A'; len / 2][..], &b"C"[..], &vec![b'T'; len / 2][..]].concat(),
            ];
            for input in &inputs {
                let seq = Interleaved::from_ascii(input).unwrap();
                let before = pair_checks();
                RadiusProfile::compute(&seq);
                let checks = pair_checks() - before;
                assert!(
                    checks <= 10 * seq.len(),
                    "{} pair checks for {} interleaved positions",
                    checks,
                    seq.len()
                );
            }
        }
    }
}
