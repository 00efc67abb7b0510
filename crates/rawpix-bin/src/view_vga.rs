/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! `rawpix-view-vga`: viewer for a single 320x240 RGB332 frame
use std::fs;
use std::path::Path;

use clap::{Arg, ArgMatches, Command};
use image::{DynamicImage, ImageFormat};
use rawpix_core::PixelFormat;
use rawpix_raw::{RawDecoder, RawDecoderOptions};

use crate::cmd_args::{add_logging_args, setup_logger};
use crate::errors::ToolErrors;
use crate::{render, show_gui, VGA_HEIGHT, VGA_WIDTH};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    let cmd = Command::new("rawpix-view-vga")
        .about("Display a raw 320x240 RGB332 frame")
        .arg(Arg::new("input")
            .help("The raw frame file to display, e.g vga_out.bin")
            .required(true))
        .arg(Arg::new("save")
            .long("save")
            .help("Save the rendered frame to this PNG instead of displaying it"));

    add_logging_args(cmd)
}

pub fn main() {
    let options = create_cmd_args().get_matches();
    setup_logger(&options);

    // logical failures are reported but do not fail the process; a
    // frame file that is missing or mid-write should not kill a watch
    // loop that re-runs this tool
    if let Err(e) = run(&options) {
        println!("Error: {e:?}");
    }
}

fn run(options: &ArgMatches) -> Result<(), ToolErrors> {
    let input = options.get_one::<String>("input").unwrap();

    if !Path::new(input).exists() {
        return Err(ToolErrors::Generic(format!("file '{input}' not found")));
    }
    let data = fs::read(input)?;

    let decoder_options = RawDecoderOptions::default()
        .set_width(VGA_WIDTH)
        .set_height(VGA_HEIGHT)
        .set_format(PixelFormat::Rgb332)
        .set_strict(true);

    let rgb = RawDecoder::new_with_options(&data, decoder_options).decode_rgb()?;
    let canvas = render::rgb_canvas(&rgb, VGA_WIDTH, VGA_HEIGHT)?;

    match options.get_one::<String>("save") {
        Some(path) => {
            canvas.save_with_format(path, ImageFormat::Png)?;
            println!("Image saved to {path}");
        }
        None => show_gui::open_in_default_app(&DynamicImage::ImageRgb8(canvas))?
    }

    Ok(())
}
