/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::fmt::{Debug, Formatter};
use std::io;

use rawpix_patterns::PatternErrors;
use rawpix_raw::{RawDecodeErrors, RawEncodeErrors};

/// Aggregate error for the command line tools
///
/// Collects the library error enums plus the I/O and PNG rendering
/// failures only the binaries can hit.
pub enum ToolErrors {
    Pattern(PatternErrors),
    Decode(RawDecodeErrors),
    Encode(RawEncodeErrors),
    Render(image::ImageError),
    Io(io::Error),
    Generic(String)
}

impl Debug for ToolErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolErrors::Pattern(e) => write!(f, "{e:?}"),
            ToolErrors::Decode(e) => write!(f, "{e:?}"),
            ToolErrors::Encode(e) => write!(f, "{e:?}"),
            ToolErrors::Render(e) => writeln!(f, "render error: {e}"),
            ToolErrors::Io(e) => writeln!(f, "IO error: {e}"),
            ToolErrors::Generic(e) => writeln!(f, "{e}")
        }
    }
}

impl From<PatternErrors> for ToolErrors {
    fn from(err: PatternErrors) -> Self {
        ToolErrors::Pattern(err)
    }
}

impl From<RawDecodeErrors> for ToolErrors {
    fn from(err: RawDecodeErrors) -> Self {
        ToolErrors::Decode(err)
    }
}

impl From<RawEncodeErrors> for ToolErrors {
    fn from(err: RawEncodeErrors) -> Self {
        ToolErrors::Encode(err)
    }
}

impl From<image::ImageError> for ToolErrors {
    fn from(err: image::ImageError) -> Self {
        ToolErrors::Render(err)
    }
}

impl From<io::Error> for ToolErrors {
    fn from(err: io::Error) -> Self {
        ToolErrors::Io(err)
    }
}
