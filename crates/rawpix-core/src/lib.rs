/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core types shared by the rawpix crates
//!
//! This crate provides the small set of types the generators and
//! viewers agree on:
//!
//! - [`PixelFormat`], describing the two raw single-byte pixel layouts
//!   used by the VGA test path.
//! - The [`rgb332`] codec, converting between 8-bit intensities and
//!   packed `RRRGGGBB` bytes.
//!
//! Everything here is deterministic and allocation free.
pub mod format;
pub mod rgb332;

pub use crate::format::PixelFormat;
