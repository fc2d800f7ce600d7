// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! Raster image adapter.
//!
//! Bridges files and the cipher's flat RGBA8 buffers. Every source is
//! converted to RGBA on load — an alpha channel is synthesized when the
//! format has none — and the original color mode is recorded so the save
//! path can convert back down. The cipher itself treats the mode as opaque
//! pass-through metadata.
//!
//! Supported source modes are the 8-bit ones: `L8`, `La8`, `Rgb8`, `Rgba8`.
//! Deeper sample formats would be silently quantized by the RGBA8 pipeline,
//! so they are rejected up front instead.

pub mod error;

use std::path::Path;

use image::{ColorType, DynamicImage, RgbaImage};

pub use error::RasterError;

use crate::cipher::CHANNELS;

/// A decoded image: flat RGBA8 pixels plus the metadata needed to write it
/// back out in its original color mode.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    /// Color mode of the source file, restored on save.
    color: ColorType,
    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Load an image file and convert it to the internal RGBA8 layout.
    ///
    /// # Errors
    /// - [`RasterError::Image`] if the file cannot be opened or decoded.
    /// - [`RasterError::UnsupportedColorMode`] for non-8-bit sample formats.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RasterError> {
        let img = image::open(path)?;
        let color = img.color();
        if !matches!(
            color,
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
        ) {
            return Err(RasterError::UnsupportedColorMode(color));
        }
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            color,
            pixels: rgba.into_raw(),
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color mode of the source file.
    pub fn color(&self) -> ColorType {
        self.color
    }

    /// Replace the pixel buffer, keeping dimensions and color mode.
    ///
    /// Used to carry the encrypted or decrypted buffer back out through the
    /// same metadata the input arrived with.
    ///
    /// # Errors
    /// - [`RasterError::BufferSizeMismatch`] if `pixels` is not exactly
    ///   `width * height * 4` bytes.
    pub fn with_pixels(mut self, pixels: Vec<u8>) -> Result<Self, RasterError> {
        let expected = self.width as usize * self.height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        self.pixels = pixels;
        Ok(self)
    }

    /// Encode the image to `path`, converting back to the original color
    /// mode. The container format follows the output extension.
    ///
    /// # Errors
    /// - [`RasterError::Image`] if encoding or writing fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RasterError> {
        let rgba = RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .expect("pixel buffer length should match dimensions");
        let full = DynamicImage::ImageRgba8(rgba);
        let out = match self.color {
            ColorType::L8 => DynamicImage::ImageLuma8(full.to_luma8()),
            ColorType::La8 => DynamicImage::ImageLumaA8(full.to_luma_alpha8()),
            ColorType::Rgb8 => DynamicImage::ImageRgb8(full.to_rgb8()),
            _ => full,
        };
        out.save(path)?;
        Ok(())
    }
}
