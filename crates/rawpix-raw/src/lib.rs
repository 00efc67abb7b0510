/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A headerless raw pixel buffer decoder and encoder
//!
//! Raw buffers have no magic bytes, no header and no stride padding,
//! a file is nothing but `width * height` single-byte pixels in row
//! major order. That means a decoder cannot read dimensions from the
//! stream; they are either supplied by the caller or guessed from the
//! buffer length.
//!
//! Two decode disciplines exist:
//!
//! - the lenient path ([`RawDecoder::decode`] with strict mode off)
//!   zero-pads short buffers and truncates long ones to the resolved
//!   shape, for eyeballing whatever bytes a device produced.
//! - the strict path (strict mode on) rejects any length mismatch,
//!   for formats with a fixed contract such as the 320x240 VGA frame.
//!
//! # Example
//! ```
//! use rawpix_raw::{RawDecoder, RawDecoderOptions};
//!
//! let data = [0_u8; 64];
//! let mut decoder = RawDecoder::new(&data);
//! let pixels = decoder.decode().unwrap();
//! // 64 bytes guess to an 8x8 square
//! assert_eq!((decoder.height(), decoder.width()), (8, 8));
//! assert_eq!(pixels.len(), 64);
//! ```
pub use crate::decoder::{guess_shape, inversion_estimate, RawDecoder, RawDecoderOptions};
pub use crate::encoder::RawEncoder;
pub use crate::errors::{RawDecodeErrors, RawEncodeErrors};

mod decoder;
mod encoder;
mod errors;
