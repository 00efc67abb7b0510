/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Raw pixel format information

/// Layout of a single pixel in a raw, headerless buffer.
///
/// Both supported formats store one byte per pixel, row major,
/// with no stride padding, so a well formed buffer is always exactly
/// `width * height` bytes long.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PixelFormat {
    /// 8-bit grayscale, full 0-255 range.
    Luma8,
    /// Packed 8-bit color, MSB first: 3 bits red, 3 bits green, 2 bits blue.
    ///
    /// Channel ranges are red/green 0-7 and blue 0-3. See the
    /// [`rgb332`](crate::rgb332) module for the conversion policy.
    Rgb332
}

impl PixelFormat {
    /// Number of bytes a single pixel occupies in the raw buffer.
    ///
    /// This is 1 for every supported format, the two formats differ
    /// only in how the byte is interpreted.
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Luma8 | Self::Rgb332 => 1
        }
    }

    /// Number of color components a pixel expands to for display.
    ///
    /// E.g `Rgb332` returns 3 since a byte unpacks to an R,G,B triple.
    pub const fn num_components(&self) -> usize {
        match self {
            Self::Luma8 => 1,
            Self::Rgb332 => 3
        }
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma8)
    }
}

#[cfg(test)]
mod tests {
    use crate::format::PixelFormat;

    #[test]
    fn single_byte_pixels() {
        assert_eq!(PixelFormat::Luma8.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Rgb332.bytes_per_pixel(), 1);
    }

    #[test]
    fn component_counts() {
        assert_eq!(PixelFormat::Luma8.num_components(), 1);
        assert_eq!(PixelFormat::Rgb332.num_components(), 3);
        assert!(PixelFormat::Luma8.is_grayscale());
        assert!(!PixelFormat::Rgb332.is_grayscale());
    }
}
