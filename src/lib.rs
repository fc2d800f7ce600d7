// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! # shroud-core
//!
//! Seed-deterministic image obfuscation: pixels are rearranged by a
//! pseudo-random permutation and their color channels are masked with a
//! pseudo-random keystream. The same integer seed regenerates both streams,
//! so decryption inverts the transform exactly, byte for byte.
//!
//! This is a reversibility exercise, not a secure cipher: both streams come
//! from a small-state PRNG keyed only by the operator's seed. What the crate
//! does guarantee is bit-exact round-tripping — `decrypt(encrypt(img, s), s)`
//! restores the original pixels on every platform, for every seed.
//!
//! The `cipher` module operates on flat RGBA8 buffers and knows nothing about
//! files. The `raster` module loads and saves those buffers, preserving the
//! source image's color mode across the always-RGBA internal representation.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use shroud_core::{encrypt_pixels, RasterImage};
//!
//! let img = RasterImage::load("photo.png").unwrap();
//! let scrambled = encrypt_pixels(&img.pixels, 42).unwrap();
//! img.with_pixels(scrambled).unwrap().save("scrambled.png").unwrap();
//! ```

pub mod cipher;
pub mod raster;

pub use cipher::error::CipherError;
pub use cipher::keystream::{generate_keystream, xor_masked_channels};
pub use cipher::permute::{generate_permutation, invert_permutation};
pub use cipher::pipeline::{decrypt_pixels, encrypt_pixels};
pub use cipher::{validate_dimensions, CHANNELS, MASKED_CHANNELS, MAX_PIXELS};
pub use raster::error::RasterError;
pub use raster::RasterImage;
