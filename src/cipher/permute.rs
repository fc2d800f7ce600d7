// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! Pixel position permutation and its inverse.
//!
//! Applies a Fisher-Yates shuffle to the identity sequence `[0, n)` using a
//! ChaCha20 PRNG seeded from the operator's integer seed. Encrypt and decrypt
//! regenerate the identical permutation from the same seed, which is the
//! entire reproducibility story: no permutation is ever stored.
//!
//! # Pinned generator contract
//!
//! Bit-exact output across runs and implementations requires agreeing on one
//! generator and one seeding transform. This crate pins ChaCha20
//! (`rand_chacha::ChaCha20Rng`) seeded via `SeedableRng::seed_from_u64` with
//! the operator seed reinterpreted as `u64` (two's complement for negative
//! seeds). Changing either breaks decryption of previously scrambled images.
//!
//! # Cross-platform portability
//!
//! The Fisher-Yates shuffle uses `u32` for `gen_range` (not `usize`) to
//! ensure identical permutations on all platforms. `usize` is 32-bit on WASM
//! but 64-bit on native, which causes `rand::Rng::gen_range` to consume
//! different amounts of PRNG entropy per step — producing completely
//! different shuffles.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cipher::error::CipherError;

/// Generate the permutation for `n` pixel positions from `seed`.
///
/// Starts from the identity sequence and applies an unbiased Fisher-Yates
/// shuffle: for `i` from `n-1` down to `1`, draw `j` uniformly from `[0, i]`
/// and swap. The result is a bijection on `[0, n)`; entry `π[i]` is the
/// source index moved to position `i`.
///
/// `n = 0` yields an empty permutation, `n = 1` yields `[0]` with no draws.
pub fn generate_permutation(n: u32, seed: i64) -> Vec<u32> {
    let mut perm: Vec<u32> = (0..n).collect();
    let mut rng = ChaCha20Rng::seed_from_u64(seed as u64);
    for i in (1..n as usize).rev() {
        let j = rng.gen_range(0..=(i as u32)) as usize;
        perm.swap(i, j);
    }
    perm
}

/// Invert a permutation: the result satisfies `inv[perm[i]] = i` for all `i`.
///
/// Pure and `O(n)`. Validates that the input is a bijection on `[0, n)`;
/// a duplicate or out-of-range entry means the caller's permutation did not
/// come from [`generate_permutation`].
///
/// # Errors
/// - [`CipherError::InvalidPermutation`] on a duplicate or out-of-range value.
pub fn invert_permutation(perm: &[u32]) -> Result<Vec<u32>, CipherError> {
    // n <= u32::MAX, so u32::MAX itself can never be a valid entry and
    // doubles as the unassigned marker.
    let mut inv = vec![u32::MAX; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        let slot = inv
            .get_mut(p as usize)
            .ok_or(CipherError::InvalidPermutation("value out of range"))?;
        if *slot != u32::MAX {
            return Err(CipherError::InvalidPermutation("duplicate value"));
        }
        *slot = i as u32;
    }
    Ok(inv)
}
