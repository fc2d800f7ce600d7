// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! Channel-masking keystream.
//!
//! Produces `n × k` uniform bytes from a ChaCha20 PRNG seeded from the
//! operator seed plus a fixed offset. The offset separates this stream from
//! the permutation stream, which is seeded from the bare value — one operator
//! seed keys both purposes without the two generators ever agreeing.
//!
//! Enumeration order is fixed: pixel `0..n`, channel `0..k`, one byte per
//! draw. Because every byte is an independent draw, the in-place XOR below
//! consumes the identical stream regardless of how a caller chunks the
//! buffer.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Added to the operator seed before seeding the keystream PRNG.
/// Must differ from the permutation derivation (which uses the bare seed).
const KEYSTREAM_SEED_OFFSET: u64 = 0xFEED;

fn keystream_rng(seed: i64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64((seed as u64).wrapping_add(KEYSTREAM_SEED_OFFSET))
}

/// Generate the full `n × k` keystream, pixel-major.
///
/// Deterministic given `(n, seed, k)` and independent of image content.
/// Byte `i * k + c` is the mask for channel `c` of pixel `i`.
pub fn generate_keystream(n: u32, seed: i64, k: usize) -> Vec<u8> {
    let mut rng = keystream_rng(seed);
    let mut out = vec![0u8; n as usize * k];
    for b in out.iter_mut() {
        *b = rng.gen();
    }
    out
}

/// XOR the first `masked` channels of every `channels`-wide pixel in place.
///
/// Streams the keystream while walking the buffer, so the `n × k` matrix is
/// never materialized. Channels at index `masked` and beyond (the alpha
/// channel in the 4-channel layout) pass through untouched.
///
/// XOR is self-inverse: applying this twice with the same seed restores the
/// input.
pub fn xor_masked_channels(pixels: &mut [u8], channels: usize, masked: usize, seed: i64) {
    debug_assert!(masked <= channels);
    let mut rng = keystream_rng(seed);
    for px in pixels.chunks_exact_mut(channels) {
        for b in px[..masked].iter_mut() {
            *b ^= rng.gen::<u8>();
        }
    }
}
