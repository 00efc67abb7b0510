/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::fmt::{Debug, Formatter};

/// Errors occurring during pattern synthesis
pub enum PatternErrors {
    /// The requested total byte count cannot form a square image.
    NotPerfectSquare(usize),
    /// The checker block edge was zero, which leaves no block to
    /// alternate over.
    ZeroBlock
}

impl Debug for PatternErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternErrors::NotPerfectSquare(size) => {
                writeln!(
                    f,
                    "size must be a perfect square, e.g 1024=32x32 or 4096=64x64, but {size} is not"
                )
            }
            PatternErrors::ZeroBlock => {
                writeln!(f, "checker block edge must be at least one pixel")
            }
        }
    }
}
