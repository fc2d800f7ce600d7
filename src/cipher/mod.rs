// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! Seed-deterministic pixel cipher.
//!
//! Two operations, exact inverses of each other:
//!
//! - **Encrypt** (`encrypt_pixels`): gather pixels through a seeded
//!   Fisher-Yates permutation, then XOR the color channels with a seeded
//!   keystream. Alpha is never masked.
//! - **Decrypt** (`decrypt_pixels`): XOR first (self-inverse), then gather
//!   through the inverse permutation, restoring the original ordering.
//!
//! Both streams are regenerated from `(pixel count, seed)` on every call;
//! nothing is persisted between runs. Reproducibility rests on the pinned
//! PRNG contract documented in [`permute`].

pub mod error;
pub mod keystream;
pub mod permute;
pub mod pipeline;

pub use error::CipherError;

/// Channels per pixel in the internal representation (RGBA8).
pub const CHANNELS: usize = 4;

/// Channels masked by the keystream. The trailing alpha channel passes
/// through encryption bit-identical.
pub const MASKED_CHANNELS: usize = 3;

/// Maximum pixel count. Permutation entries are `u32` indices, so the
/// flattened pixel domain must be addressable by one.
pub const MAX_PIXELS: u64 = u32::MAX as u64;

/// Validate image dimensions before handing a buffer to the codec.
///
/// Returns `Ok(())` when `width * height` pixels fit the permutation index
/// type. There is no minimum: a 0×0 image round-trips to an empty buffer.
///
/// # Errors
/// - [`CipherError::ImageTooLarge`] if the pixel count exceeds [`MAX_PIXELS`].
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), CipherError> {
    if (width as u64) * (height as u64) > MAX_PIXELS {
        return Err(CipherError::ImageTooLarge);
    }
    Ok(())
}
