/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::io::Write;

use log::trace;

use crate::errors::RawEncodeErrors;

/// A raw buffer encoder
///
/// Writes row major single-byte pixels with no header, which makes
/// encoding a length check followed by a single write.
pub struct RawEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> RawEncoder<'a, W> {
    /// Create a new raw encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> RawEncoder<'a, W> {
        Self { writer }
    }

    /// Write `data` as a `width` x `height` raw image, returning the
    /// number of bytes written.
    ///
    /// # Errors
    /// Fails before writing anything when `data.len()` is not exactly
    /// `width * height`, generators must never emit a malformed file.
    pub fn encode(
        &mut self, data: &[u8], width: usize, height: usize
    ) -> Result<usize, RawEncodeErrors> {
        if data.len() != width * height {
            return Err(RawEncodeErrors::Static(
                "pixel buffer length does not match width * height"
            ));
        }
        self.writer.write_all(data)?;
        trace!("Wrote {} raw bytes ({width}x{height})", data.len());

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::encoder::RawEncoder;

    #[test]
    fn encode_writes_bytes_verbatim() {
        let data: Vec<u8> = (0..64).collect();
        let mut sink = Vec::new();

        let written = RawEncoder::new(&mut sink).encode(&data, 8, 8).unwrap();

        assert_eq!(written, 64);
        assert_eq!(sink, data);
    }

    #[test]
    fn encode_rejects_bad_geometry() {
        let data = [0_u8; 60];
        let mut sink = Vec::new();

        assert!(RawEncoder::new(&mut sink).encode(&data, 8, 8).is_err());
        // nothing reaches the sink on failure
        assert!(sink.is_empty());
    }
}
