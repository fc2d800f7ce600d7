// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! Error types for the pixel cipher.

use core::fmt;

/// Errors that can occur while encrypting or decrypting a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The buffer length is not a whole number of 4-channel pixels.
    InvalidBufferLength(usize),
    /// The pixel count exceeds what a `u32` permutation index can address.
    ImageTooLarge,
    /// A permutation handed to the inverter is not a bijection on `[0, n)`.
    /// Indicates a generator bug, never expected from valid inputs.
    InvalidPermutation(&'static str),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBufferLength(len) => {
                write!(f, "pixel buffer length {len} is not a multiple of 4")
            }
            Self::ImageTooLarge => write!(f, "image too large (max 2^32 - 1 pixels)"),
            Self::InvalidPermutation(msg) => write!(f, "invalid permutation: {msg}"),
        }
    }
}

impl std::error::Error for CipherError {}
