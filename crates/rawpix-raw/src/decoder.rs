/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use log::{info, trace};
use rawpix_core::rgb332;
use rawpix_core::PixelFormat;

use crate::errors::RawDecodeErrors;

/// Decoder configuration for a headerless raw buffer.
///
/// A `width` or `height` of zero means "unknown, guess the shape from
/// the buffer length"; both must be non zero for the dimensions to
/// count as explicit.
#[derive(Copy, Clone, Debug)]
pub struct RawDecoderOptions {
    width:  usize,
    height: usize,
    format: PixelFormat,
    strict: bool
}

impl RawDecoderOptions {
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
    pub fn set_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }
    /// Toggle strict mode. A strict decoder rejects buffers whose
    /// length differs from `width * height` instead of repairing them.
    pub fn set_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    pub const fn format(&self) -> PixelFormat {
        self.format
    }
    pub const fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for RawDecoderOptions {
    fn default() -> Self {
        Self {
            width:  0,
            height: 0,
            format: PixelFormat::Luma8,
            strict: false
        }
    }
}

/// Guess a `(height, width)` shape for a raw buffer of `n` bytes.
///
/// A perfect square length maps to a square image. Anything else gets
/// a default width of 256 (or 32 for buffers shorter than 256 bytes)
/// with the height derived by integer division; degenerate lengths
/// collapse to a single row.
pub fn guess_shape(n: usize) -> (usize, usize) {
    let side = n.isqrt();
    if side * side == n {
        return (side, side);
    }
    let mut width = if n >= 256 { 256 } else { 32 };
    let mut height = n / width;
    if height == 0 {
        width = n.max(1);
        height = 1;
    }
    (height, width)
}

/// Advisory estimate of whether two buffers are approximate
/// arithmetic complements of each other (`b ≈ 255 - a`).
///
/// True when the mean of `(a[i] + b[i]) mod 256` over all pixels is
/// at least 254. Complementary buffers sum to 255 everywhere, so a
/// mean this close to 255 means the relationship holds for nearly
/// every pixel. This is a label for the viewer, never an error.
pub fn inversion_estimate(a: &[u8], b: &[u8]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let sum: u64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| u64::from((u16::from(*x) + u16::from(*y)) % 256))
        .sum();

    let count = a.len().min(b.len()) as f64;

    (sum as f64 / count) >= 254.0
}

/// A decoder for headerless raw pixel buffers.
pub struct RawDecoder<'a> {
    data:     &'a [u8],
    width:    usize,
    height:   usize,
    resolved: bool,
    options:  RawDecoderOptions
}

impl<'a> RawDecoder<'a> {
    /// Create a new decoder with default options, i.e a lenient
    /// grayscale decoder that guesses its shape.
    pub fn new(data: &'a [u8]) -> RawDecoder<'a> {
        Self::new_with_options(data, RawDecoderOptions::default())
    }

    /// Create a new decoder with the specified options.
    pub fn new_with_options(data: &'a [u8], options: RawDecoderOptions) -> RawDecoder<'a> {
        RawDecoder {
            data,
            width: 0,
            height: 0,
            resolved: false,
            options
        }
    }

    /// Resolve the buffer shape without touching pixel data.
    ///
    /// Explicit dimensions from the options win; otherwise the shape
    /// is guessed from the buffer length via [`guess_shape`].
    ///
    /// # Errors
    /// [`RawDecodeErrors::EmptySource`] when the buffer is zero length.
    pub fn resolve_shape(&mut self) -> Result<(usize, usize), RawDecodeErrors> {
        if self.data.is_empty() {
            return Err(RawDecodeErrors::EmptySource);
        }
        if self.resolved {
            return Ok((self.height, self.width));
        }

        if self.options.width() != 0 && self.options.height() != 0 {
            self.width = self.options.width();
            self.height = self.options.height();
        } else {
            let (h, w) = guess_shape(self.data.len());
            info!("Guessed shape {w}x{h} from {} bytes", self.data.len());
            self.height = h;
            self.width = w;
        }
        self.resolved = true;

        Ok((self.height, self.width))
    }

    /// Decode the buffer into a row major grayscale/packed byte matrix
    /// of exactly `height * width` bytes.
    ///
    /// In lenient mode a short buffer is zero padded at the tail and a
    /// long one truncated; strict mode turns either mismatch into
    /// [`RawDecodeErrors::SizeMismatch`].
    pub fn decode(&mut self) -> Result<Vec<u8>, RawDecodeErrors> {
        let (height, width) = self.resolve_shape()?;
        let need = height * width;

        if self.options.strict() && self.data.len() != need {
            return Err(RawDecodeErrors::SizeMismatch {
                expected: need,
                found:    self.data.len()
            });
        }

        let mut pixels = vec![0_u8; need];
        let take = self.data.len().min(need);
        pixels[..take].copy_from_slice(&self.data[..take]);

        if take < need {
            trace!("Zero padded {} trailing bytes", need - take);
        } else if self.data.len() > need {
            trace!("Truncated {} excess bytes", self.data.len() - need);
        }
        Ok(pixels)
    }

    /// Decode a packed RGB332 buffer into interleaved 8-bit RGB.
    ///
    /// Output length is `height * width * 3`.
    ///
    /// # Errors
    /// In addition to the [`decode`](Self::decode) errors, fails when
    /// the decoder options do not declare the buffer as RGB332.
    pub fn decode_rgb(&mut self) -> Result<Vec<u8>, RawDecodeErrors> {
        if self.options.format() != PixelFormat::Rgb332 {
            return Err(RawDecodeErrors::Generic(
                "rgb decode needs an RGB332 declared buffer"
            ));
        }
        let packed = self.decode()?;
        let mut rgb = Vec::with_capacity(packed.len() * 3);

        for byte in packed {
            rgb.extend_from_slice(&rgb332::unpack(byte));
        }
        Ok(rgb)
    }

    /// Resolved image width, zero before shape resolution.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Resolved image height, zero before shape resolution.
    pub const fn height(&self) -> usize {
        self.height
    }
}
