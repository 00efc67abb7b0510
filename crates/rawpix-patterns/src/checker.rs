/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Checkerboard + gradient generators
use log::trace;

use crate::errors::PatternErrors;

/// Checker block edge, in pixels, for the square pattern.
pub const SQUARE_BLOCK: usize = 4;
/// Checker block edge, in pixels, for the VGA pattern.
pub const VGA_BLOCK: usize = 16;

/// Checkerboard base value for pixel `(x, y)`, 0 or 128 depending on
/// the parity of the block-row plus block-column index.
#[inline]
const fn checker_base(x: usize, y: usize, block: usize) -> u8 {
    (((x / block + y / block) % 2) * 128) as u8
}

/// Synthesize the square wrap-variant pattern.
///
/// `size` is the total byte count of the image and must be a perfect
/// square; the side length is returned alongside the buffer. The
/// horizontal gradient runs 0..127 over the full width and is combined
/// with the checkerboard by wrapping addition modulo 256.
///
/// # Errors
/// Returns [`PatternErrors::NotPerfectSquare`] when `size` has no
/// integer square root and [`PatternErrors::ZeroBlock`] when `block`
/// is zero. Nothing is allocated in either case.
pub fn square_pattern(size: usize, block: usize) -> Result<(Vec<u8>, usize), PatternErrors> {
    if block == 0 {
        return Err(PatternErrors::ZeroBlock);
    }
    let side = size.isqrt();

    if side * side != size {
        return Err(PatternErrors::NotPerfectSquare(size));
    }
    trace!("Synthesizing {side}x{side} wrap-variant pattern, block={block}");

    let mut pixels = vec![0_u8; size];

    for y in 0..side {
        for x in 0..side {
            let base = checker_base(x, y, block);
            let grad = (127 * x / side) as u8;

            pixels[y * side + x] = base.wrapping_add(grad);
        }
    }
    Ok((pixels, side))
}

/// Synthesize the clamp-variant grayscale pattern used for the VGA
/// test image.
///
/// The horizontal gradient runs 0..=255 over `width - 1` so the last
/// column always reaches full scale, and the checkerboard sum is
/// clamped at 255 instead of wrapping.
///
/// # Errors
/// Returns [`PatternErrors::ZeroBlock`] when `block` is zero.
pub fn vga_pattern(
    width: usize, height: usize, block: usize
) -> Result<Vec<u8>, PatternErrors> {
    if block == 0 {
        return Err(PatternErrors::ZeroBlock);
    }
    trace!("Synthesizing {width}x{height} clamp-variant pattern, block={block}");

    let span = width.saturating_sub(1).max(1);
    let mut pixels = vec![0_u8; width * height];

    for y in 0..height {
        for x in 0..width {
            let base = usize::from(checker_base(x, y, block));
            let grad = 255 * x / span;

            pixels[y * width + x] = (base + grad).min(255) as u8;
        }
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use crate::checker::{square_pattern, vga_pattern, SQUARE_BLOCK, VGA_BLOCK};

    #[test]
    fn square_pattern_matches_formula() {
        let (pixels, side) = square_pattern(1024, SQUARE_BLOCK).unwrap();

        assert_eq!(side, 32);
        assert_eq!(pixels.len(), 1024);

        for y in 0..side {
            for x in 0..side {
                let base = ((x / 4 + y / 4) % 2) * 128;
                let grad = 127 * x / side;
                let expected = ((base + grad) % 256) as u8;

                assert_eq!(pixels[y * side + x], expected, "mismatch at ({x},{y})");
            }
        }
    }

    #[test]
    fn square_pattern_rejects_non_squares() {
        assert!(square_pattern(1000, SQUARE_BLOCK).is_err());
        assert!(square_pattern(1023, SQUARE_BLOCK).is_err());
        // 0 and 1 are perfect squares
        assert!(square_pattern(0, SQUARE_BLOCK).is_ok());
        assert!(square_pattern(4096, SQUARE_BLOCK).is_ok());
    }

    #[test]
    fn zero_block_is_rejected() {
        // a zero block edge must fail through the error path, not
        // divide by zero inside the pixel loop
        assert!(square_pattern(1024, 0).is_err());
        assert!(vga_pattern(320, 240, 0).is_err());
    }

    #[test]
    fn vga_pattern_matches_formula() {
        let (w, h) = (320, 240);
        let pixels = vga_pattern(w, h, VGA_BLOCK).unwrap();

        assert_eq!(pixels.len(), 76800);

        for y in 0..h {
            for x in 0..w {
                let base = ((x / 16 + y / 16) % 2) * 128;
                let grad = 255 * x / (w - 1);
                let expected = (base + grad).min(255) as u8;

                assert_eq!(pixels[y * w + x], expected, "mismatch at ({x},{y})");
            }
        }
    }

    #[test]
    fn vga_gradient_reaches_full_scale() {
        let pixels = vga_pattern(320, 240, VGA_BLOCK).unwrap();
        // last column of the first row is 255 regardless of checker parity
        assert_eq!(pixels[319], 255);
    }

    #[test]
    fn square_gradient_stays_below_wrap() {
        // with scale 127 and base at most 128 the wrap never actually
        // fires, the sum peaks at 254
        let (pixels, _) = square_pattern(4096, SQUARE_BLOCK).unwrap();
        assert!(pixels.iter().all(|p| *p <= 254));
    }
}
