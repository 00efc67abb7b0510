/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Command line tools for the raw VGA test image path
//!
//! Four independent utilities share this library:
//!
//! - `rawpix-gen`: square grayscale checkerboard+gradient generator
//! - `rawpix-gen-vga`: fixed 320x240 RGB332 test frame generator
//! - `rawpix-view`: side by side viewer for two raw grayscale buffers
//! - `rawpix-view-vga`: viewer for a single 320x240 RGB332 frame
//!
//! They communicate only through headerless raw files, there is no
//! shared runtime state between them.

/// Width of the fixed VGA frame contract, in pixels.
pub const VGA_WIDTH: usize = 320;
/// Height of the fixed VGA frame contract, in pixels.
pub const VGA_HEIGHT: usize = 240;

pub mod cmd_args;
pub mod errors;
pub mod gen_img;
pub mod gen_vga;
pub mod render;
pub mod show_gui;
pub mod view_img;
pub mod view_vga;
