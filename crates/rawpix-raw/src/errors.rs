/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::fmt::{Debug, Formatter};
use std::io;

/// Errors occurring during raw buffer decoding
pub enum RawDecodeErrors {
    /// The source buffer contained no bytes at all.
    EmptySource,
    /// Strict decode found a buffer whose length does not match the
    /// fixed contract.
    SizeMismatch { expected: usize, found: usize },
    Generic(&'static str),
    IoError(io::Error)
}

impl Debug for RawDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RawDecodeErrors::EmptySource => {
                writeln!(f, "source is empty or unreadable")
            }
            RawDecodeErrors::SizeMismatch { expected, found } => {
                writeln!(f, "buffer size is {found}, but expected {expected}")
            }
            RawDecodeErrors::Generic(e) => writeln!(f, "{e}"),
            RawDecodeErrors::IoError(e) => writeln!(f, "IO error: {e}")
        }
    }
}

impl From<io::Error> for RawDecodeErrors {
    fn from(err: io::Error) -> Self {
        RawDecodeErrors::IoError(err)
    }
}

/// Errors occurring during raw buffer encoding
pub enum RawEncodeErrors {
    Static(&'static str),
    IoError(io::Error)
}

impl Debug for RawEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RawEncodeErrors::Static(e) => writeln!(f, "{e}"),
            RawEncodeErrors::IoError(e) => writeln!(f, "IO error: {e}")
        }
    }
}

impl From<io::Error> for RawEncodeErrors {
    fn from(err: io::Error) -> Self {
        RawEncodeErrors::IoError(err)
    }
}
