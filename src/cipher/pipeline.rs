// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! Encrypt/decrypt orchestration over flat RGBA8 buffers.
//!
//! Encryption composes two reversible passes:
//! 1. Gather whole pixels through a seeded Fisher-Yates permutation
//! 2. XOR the color channels with a seeded keystream (alpha untouched)
//!
//! Decryption applies the inverses in reverse order: XOR first (self-inverse),
//! then gather through the inverse permutation. The un-permute direction is
//! the classic place for a sign error, so the gather helper is a pure array
//! function with its own tests, independent of image I/O.

use crate::cipher::error::CipherError;
use crate::cipher::keystream::xor_masked_channels;
use crate::cipher::permute::{generate_permutation, invert_permutation};
use crate::cipher::{CHANNELS, MASKED_CHANNELS, MAX_PIXELS};

/// Gather `channels`-wide pixels: output position `i` receives the pixel at
/// source index `perm[i]`.
///
/// Encrypt calls this with the permutation, decrypt with its inverse —
/// gathering by `π⁻¹` places the pixel found at position `π[i]` back at
/// position `i`, undoing the encrypt-time gather.
#[cfg(not(feature = "parallel"))]
fn gather_pixels(src: &[u8], perm: &[u32], channels: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    for &p in perm {
        let s = p as usize * channels;
        out.extend_from_slice(&src[s..s + channels]);
    }
    out
}

/// Parallel gather: every output pixel is written by exactly one task, so the
/// chunks partition the output disjointly.
#[cfg(feature = "parallel")]
fn gather_pixels(src: &[u8], perm: &[u32], channels: usize) -> Vec<u8> {
    use rayon::prelude::*;
    let mut out = vec![0u8; src.len()];
    out.par_chunks_mut(channels)
        .zip(perm.par_iter())
        .for_each(|(dst, &p)| {
            let s = p as usize * channels;
            dst.copy_from_slice(&src[s..s + channels]);
        });
    out
}

/// Check the buffer is a whole number of RGBA pixels within the permutation
/// index range, and return the pixel count.
fn pixel_count(pixels: &[u8]) -> Result<u32, CipherError> {
    if pixels.len() % CHANNELS != 0 {
        return Err(CipherError::InvalidBufferLength(pixels.len()));
    }
    let n = pixels.len() / CHANNELS;
    if n as u64 > MAX_PIXELS {
        return Err(CipherError::ImageTooLarge);
    }
    Ok(n as u32)
}

/// Encrypt a flat RGBA8 pixel buffer.
///
/// # Arguments
/// - `pixels`: row-major RGBA8 bytes, `4 × n` for `n` pixels.
/// - `seed`: operator seed; the same value must be used to decrypt.
///
/// # Returns
/// A new buffer of the same length with pixels permuted and color channels
/// masked. The alpha byte of every pixel survives bit-identical (at its new
/// position).
///
/// # Errors
/// - [`CipherError::InvalidBufferLength`] if `pixels.len()` is not a
///   multiple of 4.
/// - [`CipherError::ImageTooLarge`] if the buffer holds more than 2^32 - 1
///   pixels.
pub fn encrypt_pixels(pixels: &[u8], seed: i64) -> Result<Vec<u8>, CipherError> {
    let n = pixel_count(pixels)?;

    // 1. Permute: position i takes the pixel from source index perm[i].
    let perm = generate_permutation(n, seed);
    let mut out = gather_pixels(pixels, &perm, CHANNELS);

    // 2. Mask the color channels; alpha passes through.
    xor_masked_channels(&mut out, CHANNELS, MASKED_CHANNELS, seed);

    Ok(out)
}

/// Decrypt a flat RGBA8 pixel buffer scrambled by [`encrypt_pixels`].
///
/// Applies the inverse passes in reverse order, so
/// `decrypt_pixels(encrypt_pixels(b, s)?, s)` returns `b` exactly.
///
/// # Errors
/// - [`CipherError::InvalidBufferLength`] / [`CipherError::ImageTooLarge`]
///   as for [`encrypt_pixels`].
/// - [`CipherError::InvalidPermutation`] if permutation inversion fails —
///   a generator bug, not a data error.
pub fn decrypt_pixels(pixels: &[u8], seed: i64) -> Result<Vec<u8>, CipherError> {
    let n = pixel_count(pixels)?;

    // 1. Unmask first: XOR is self-inverse and was applied after permuting,
    //    so it must be removed before un-permuting.
    let mut buf = pixels.to_vec();
    xor_masked_channels(&mut buf, CHANNELS, MASKED_CHANNELS, seed);

    // 2. Un-permute: gathering by the inverse returns every pixel to the
    //    position it was taken from.
    let perm = generate_permutation(n, seed);
    let inv = invert_permutation(&perm)?;
    Ok(gather_pixels(&buf, &inv, CHANNELS))
}
