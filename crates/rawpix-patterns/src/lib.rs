/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Deterministic test pattern synthesis
//!
//! Produces the checkerboard-plus-gradient grayscale patterns used to
//! exercise the raw display path. Two variants exist and they are
//! intentionally *not* unified:
//!
//! - [`square_pattern`]: square images, gradient scaled by 127 over
//!   the full width, combined with the checkerboard by wrapping
//!   addition modulo 256.
//! - [`vga_pattern`]: arbitrary dimensions (in practice 320x240),
//!   gradient scaled by 255 over `width - 1`, combined by clamping
//!   at 255.
//!
//! The wrap/clamp difference changes the visual banding, downstream
//! hardware checks rely on reproducing each variant bit exactly.
pub use crate::checker::{square_pattern, vga_pattern, SQUARE_BLOCK, VGA_BLOCK};
pub use crate::errors::PatternErrors;

mod checker;
mod errors;
