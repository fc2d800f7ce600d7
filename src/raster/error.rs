// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/shroudcore

//! Error types for image loading and saving.

use std::fmt;

use image::ColorType;

/// Errors that can occur while loading or saving a raster image.
#[derive(Debug)]
pub enum RasterError {
    /// Decode or encode failure from the image codec, passed through.
    Image(image::ImageError),
    /// The source uses a color mode the 8-bit RGBA pipeline cannot represent
    /// (16-bit or float samples).
    UnsupportedColorMode(ColorType),
    /// A replacement pixel buffer does not match the image dimensions.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(e) => write!(f, "image codec: {e}"),
            Self::UnsupportedColorMode(c) => write!(f, "unsupported color mode: {c:?}"),
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "pixel buffer size mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}
