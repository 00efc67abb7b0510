/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Composition of the rendered inspection images
use image::{GrayImage, RgbImage};

use crate::errors::ToolErrors;

/// Width, in pixels, of the gutter separating the two panels of a
/// side by side comparison.
pub const GUTTER: usize = 4;
/// Gray value the gutter is filled with.
const GUTTER_SHADE: u8 = 128;

/// Compose two equally shaped grayscale buffers into one canvas,
/// input on the left, output on the right, separated by a mid-gray
/// gutter.
///
/// Both buffers must hold exactly `width * height` bytes, which the
/// decoder guarantees after its reshape step.
pub fn side_by_side(left: &[u8], right: &[u8], width: usize, height: usize) -> GrayImage {
    debug_assert_eq!(left.len(), width * height);
    debug_assert_eq!(right.len(), width * height);

    let canvas_width = (width * 2 + GUTTER) as u32;

    GrayImage::from_fn(canvas_width, height as u32, |x, y| {
        let (x, y) = (x as usize, y as usize);

        let shade = if x < width {
            left[y * width + x]
        } else if x < width + GUTTER {
            GUTTER_SHADE
        } else {
            right[y * width + (x - width - GUTTER)]
        };
        image::Luma([shade])
    })
}

/// Wrap an interleaved 8-bit RGB buffer into an image canvas.
pub fn rgb_canvas(rgb: &[u8], width: usize, height: usize) -> Result<RgbImage, ToolErrors> {
    RgbImage::from_raw(width as u32, height as u32, rgb.to_vec()).ok_or_else(|| {
        ToolErrors::Generic("RGB buffer does not match the requested dimensions".to_string())
    })
}

#[cfg(test)]
mod tests {
    use crate::render::{rgb_canvas, side_by_side, GUTTER};

    #[test]
    fn side_by_side_layout() {
        let left = vec![10_u8; 4 * 2];
        let right = vec![200_u8; 4 * 2];

        let canvas = side_by_side(&left, &right, 4, 2);

        assert_eq!(canvas.width() as usize, 4 * 2 + GUTTER);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.get_pixel(0, 0).0, [10]);
        assert_eq!(canvas.get_pixel(4, 0).0, [128]);
        assert_eq!(canvas.get_pixel((4 + GUTTER) as u32, 1).0, [200]);
    }

    #[test]
    fn rgb_canvas_checks_geometry() {
        let rgb = vec![0_u8; 2 * 2 * 3];
        assert!(rgb_canvas(&rgb, 2, 2).is_ok());
        assert!(rgb_canvas(&rgb, 3, 2).is_err());
    }
}
