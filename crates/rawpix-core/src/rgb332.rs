/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! RGB332 packing and unpacking
//!
//! A packed byte holds, MSB first, 3 bits of red, 3 bits of green and
//! 2 bits of blue (`RRRGGGBB`).
//!
//! Both directions use proportional scaling with flooring integer
//! division, not bit replication. That makes [`unpack`] the exact
//! algebraic inverse of the scaling policy in [`pack_gray`]; in
//! particular a full-scale byte unpacks to `(255, 255, 255)` and a
//! zero byte to `(0, 0, 0)`.
//!
//! The round trip is lossy away from the quantization boundaries,
//! 8 bits of intensity do not survive a squeeze through 3:3:2 bits.

/// Pack an 8-bit grayscale intensity into an `RRRGGGBB` byte.
///
/// Red and green receive the same 3-bit quantization of the intensity,
/// blue its 2-bit quantization, so a gray input stays (approximately)
/// gray after unpacking.
pub const fn pack_gray(gray: u8) -> u8 {
    let r3 = (gray as u16 * 7 / 255) as u8;
    let g3 = (gray as u16 * 7 / 255) as u8;
    let b2 = (gray as u16 * 3 / 255) as u8;

    (r3 << 5) | (g3 << 2) | b2
}

/// Unpack an `RRRGGGBB` byte into an 8-bit `[R, G, B]` triple.
///
/// Each channel is expanded proportionally over its own range,
/// `c8 = c * 255 / max`, with flooring division to match the encoder.
pub const fn unpack(byte: u8) -> [u8; 3] {
    let r3 = (byte >> 5) & 0b111;
    let g3 = (byte >> 2) & 0b111;
    let b2 = byte & 0b11;

    [
        (r3 as u16 * 255 / 7) as u8,
        (g3 as u16 * 255 / 7) as u8,
        (b2 as u16 * 255 / 3) as u8
    ]
}

#[cfg(test)]
mod tests {
    use crate::rgb332::{pack_gray, unpack};

    #[test]
    fn boundary_values() {
        assert_eq!(pack_gray(0), 0x00);
        assert_eq!(pack_gray(255), 0xFF);
        assert_eq!(unpack(0x00), [0, 0, 0]);
        assert_eq!(unpack(0xFF), [255, 255, 255]);
    }

    #[test]
    fn encode_floors() {
        // 36 * 7 = 252 which is still below 255, 37 * 7 = 259 crosses it
        assert_eq!(pack_gray(36) >> 5, 0);
        assert_eq!(pack_gray(37) >> 5, 1);
        // blue crosses its first step between 84 and 85
        assert_eq!(pack_gray(84) & 0b11, 0);
        assert_eq!(pack_gray(85) & 0b11, 1);
    }

    #[test]
    fn red_and_green_quantize_identically() {
        for gray in 0..=255_u16 {
            let byte = pack_gray(gray as u8);
            assert_eq!((byte >> 5) & 0b111, (byte >> 2) & 0b111);
        }
    }

    #[test]
    fn decode_is_monotonic() {
        let mut prev = unpack(pack_gray(0));
        for gray in 1..=255_u16 {
            let cur = unpack(pack_gray(gray as u8));
            assert!(cur[0] >= prev[0]);
            assert!(cur[1] >= prev[1]);
            assert!(cur[2] >= prev[2]);
            prev = cur;
        }
    }

    #[test]
    fn round_trip_is_lossy() {
        // 100 is not representable in 3 bits of intensity, it lands on
        // the floor of its quantization bucket
        let byte = pack_gray(100);
        let [r, _, _] = unpack(byte);
        assert_ne!(r, 100);
        // but representable endpoints survive
        assert_eq!(unpack(pack_gray(0))[0], 0);
        assert_eq!(unpack(pack_gray(255))[0], 255);
    }
}
