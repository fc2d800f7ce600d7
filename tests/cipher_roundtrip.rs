// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! Round-trip integration tests: buffer-level cipher and file-level
//! load → encrypt → save → load → decrypt chains.

use image::{ColorType, DynamicImage, RgbaImage};
use shroud_core::{decrypt_pixels, encrypt_pixels, RasterImage, CHANNELS};
use tempfile::tempdir;

/// Deterministic synthetic RGBA buffer with varied bytes.
fn synth_pixels(n: usize) -> Vec<u8> {
    (0..n * CHANNELS).map(|i| (i * 101 % 253) as u8).collect()
}

fn write_rgba_png(path: &std::path::Path, w: u32, h: u32) -> Vec<u8> {
    let pixels = synth_pixels((w * h) as usize);
    let img = RgbaImage::from_raw(w, h, pixels.clone()).unwrap();
    DynamicImage::ImageRgba8(img).save(path).unwrap();
    pixels
}

#[test]
fn buffer_roundtrip_basic() {
    let original = synth_pixels(320 * 240);
    let encrypted = encrypt_pixels(&original, 42).unwrap();
    assert_ne!(encrypted, original);
    let decrypted = decrypt_pixels(&encrypted, 42).unwrap();
    assert_eq!(decrypted, original);
}

#[test]
fn buffer_roundtrip_many_seeds() {
    let original = synth_pixels(1024);
    for seed in [0i64, 1, -1, 42, i64::MAX, i64::MIN, 0xFEED] {
        let encrypted = encrypt_pixels(&original, seed).unwrap();
        let decrypted = decrypt_pixels(&encrypted, seed).unwrap();
        assert_eq!(decrypted, original, "roundtrip failed for seed {seed}");
    }
}

#[test]
fn wrong_seed_fails_to_restore() {
    let original = synth_pixels(4096);
    let encrypted = encrypt_pixels(&original, 7).unwrap();
    let decrypted = decrypt_pixels(&encrypted, 8).unwrap();
    assert_ne!(decrypted, original);
}

#[test]
fn empty_image_roundtrips() {
    let encrypted = encrypt_pixels(&[], 42).unwrap();
    assert!(encrypted.is_empty());
    assert!(decrypt_pixels(&encrypted, 42).unwrap().is_empty());
}

#[test]
fn alpha_survives_encryption() {
    let mut original = synth_pixels(500);
    for (i, px) in original.chunks_exact_mut(CHANNELS).enumerate() {
        px[3] = (i * 13 % 256) as u8;
    }
    let encrypted = encrypt_pixels(&original, 3).unwrap();

    // The permutation moves alpha bytes but never rewrites them: the
    // multiset of alpha values is preserved exactly.
    let mut before: Vec<u8> = original.chunks_exact(CHANNELS).map(|p| p[3]).collect();
    let mut after: Vec<u8> = encrypted.chunks_exact(CHANNELS).map(|p| p[3]).collect();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn opaque_alpha_stays_opaque_in_place() {
    // With uniform alpha, permutation is invisible on that channel: every
    // position's alpha is bit-identical between input and ciphertext.
    let mut original = synth_pixels(256);
    for px in original.chunks_exact_mut(CHANNELS) {
        px[3] = 255;
    }
    let encrypted = encrypt_pixels(&original, 11).unwrap();
    assert!(encrypted.chunks_exact(CHANNELS).all(|px| px[3] == 255));
}

#[test]
fn file_roundtrip_rgba_png() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let scrambled = dir.path().join("scrambled.png");
    let restored = dir.path().join("restored.png");
    let original_pixels = write_rgba_png(&input, 32, 24);

    // encrypt: load -> cipher -> save
    let img = RasterImage::load(&input).unwrap();
    let enc = encrypt_pixels(&img.pixels, 1234).unwrap();
    img.with_pixels(enc).unwrap().save(&scrambled).unwrap();

    // decrypt: load -> cipher -> save
    let img = RasterImage::load(&scrambled).unwrap();
    let dec = decrypt_pixels(&img.pixels, 1234).unwrap();
    img.with_pixels(dec).unwrap().save(&restored).unwrap();

    let back = RasterImage::load(&restored).unwrap();
    assert_eq!(back.pixels, original_pixels);
}

#[test]
fn file_roundtrip_rgb_png() {
    // RGB source: alpha is synthesized on load, dropped again on save.
    // PNG is lossless, so the restored file matches the input byte-wise
    // at the pixel level.
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let scrambled = dir.path().join("scrambled.png");
    let restored = dir.path().join("restored.png");

    let rgb: Vec<u8> = (0..48 * 3).map(|i| (i * 7 % 256) as u8).collect();
    let img = image::RgbImage::from_raw(8, 6, rgb.clone()).unwrap();
    DynamicImage::ImageRgb8(img).save(&input).unwrap();

    let loaded = RasterImage::load(&input).unwrap();
    assert_eq!(loaded.color(), ColorType::Rgb8);
    let enc = encrypt_pixels(&loaded.pixels, -5).unwrap();
    loaded.with_pixels(enc).unwrap().save(&scrambled).unwrap();

    // The scrambled file keeps the source mode.
    assert_eq!(image::open(&scrambled).unwrap().color(), ColorType::Rgb8);

    let loaded = RasterImage::load(&scrambled).unwrap();
    let dec = decrypt_pixels(&loaded.pixels, -5).unwrap();
    loaded.with_pixels(dec).unwrap().save(&restored).unwrap();

    let back = image::open(&restored).unwrap().to_rgb8();
    assert_eq!(back.into_raw(), rgb);
}

#[test]
fn scrambled_file_differs_from_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.png");
    let scrambled = dir.path().join("scrambled.png");
    let original_pixels = write_rgba_png(&input, 16, 16);

    let img = RasterImage::load(&input).unwrap();
    let enc = encrypt_pixels(&img.pixels, 99).unwrap();
    img.with_pixels(enc).unwrap().save(&scrambled).unwrap();

    let scrambled_pixels = RasterImage::load(&scrambled).unwrap().pixels;
    assert_ne!(scrambled_pixels, original_pixels);
}
