/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::env::temp_dir;
use std::time::UNIX_EPOCH;

use image::{DynamicImage, ImageFormat};
use log::trace;

use crate::errors::ToolErrors;

/// Render `image` to a PNG in the temp directory and open it with the
/// platform's default image viewer.
///
/// Used when a viewer runs without `--save`; the file is left behind
/// for the viewer application to keep reading after we exit.
pub fn open_in_default_app(image: &DynamicImage) -> Result<(), ToolErrors> {
    let name = format!(
        "{}.png",
        std::time::SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    );
    let mut path = temp_dir();
    path.push(name);

    image.save_with_format(&path, ImageFormat::Png)?;
    trace!("Wrote preview image to {:?}", path);

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(&path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("start").arg(&path).spawn()?;
    }
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(&path).spawn()?;
    }
    Ok(())
}
