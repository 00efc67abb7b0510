/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! `rawpix-view`: side by side viewer for two raw grayscale buffers
use std::fs;
use std::process::exit;

use clap::{value_parser, Arg, ArgMatches, Command};
use image::{DynamicImage, ImageFormat};
use log::error;
use rawpix_raw::{guess_shape, inversion_estimate, RawDecoder, RawDecoderOptions};

use crate::cmd_args::{add_logging_args, setup_logger};
use crate::errors::ToolErrors;
use crate::{render, show_gui};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    let cmd = Command::new("rawpix-view")
        .about("Display two raw 8-bit grayscale buffers side by side")
        .arg(Arg::new("inp")
            .long("inp")
            .help("Input-side raw image file")
            .default_value("img.bin"))
        .arg(Arg::new("out")
            .long("out")
            .help("Output-side raw image file")
            .default_value("out.bin"))
        .arg(Arg::new("width")
            .long("width")
            .help("Image width; pass 0 to guess the shape from the buffer length")
            .value_parser(value_parser!(usize))
            .default_value("32"))
        .arg(Arg::new("height")
            .long("height")
            .help("Image height; pass 0 to guess the shape from the buffer length")
            .value_parser(value_parser!(usize))
            .default_value("32"))
        .arg(Arg::new("save")
            .long("save")
            .help("Save the rendered comparison to this PNG instead of displaying it"));

    add_logging_args(cmd)
}

pub fn main() {
    let options = create_cmd_args().get_matches();
    setup_logger(&options);

    if let Err(e) = run(&options) {
        println!();
        error!(" Could not display images, reason {:?}", e);
        println!();
        exit(-1);
    }
}

fn run(options: &ArgMatches) -> Result<(), ToolErrors> {
    let inp_path = options.get_one::<String>("inp").unwrap();
    let out_path = options.get_one::<String>("out").unwrap();
    let width = *options.get_one::<usize>("width").unwrap();
    let height = *options.get_one::<usize>("height").unwrap();

    let inp = fs::read(inp_path)?;
    let out = fs::read(out_path)?;

    // explicit dimensions win; a zero on either side means guess from
    // the shorter of the two buffers
    let (h, w) = if width != 0 && height != 0 {
        (height, width)
    } else {
        guess_shape(inp.len().min(out.len()))
    };

    let decoder_options = RawDecoderOptions::default().set_width(w).set_height(h);

    let img_in = RawDecoder::new_with_options(&inp, decoder_options).decode()?;
    let img_out = RawDecoder::new_with_options(&out, decoder_options).decode()?;

    let inverted = inversion_estimate(&img_in, &img_out);

    println!("INPUT  ({w}x{h})");
    println!(
        "OUTPUT ({w}x{h}){}",
        if inverted { "  [~ inverted]" } else { "" }
    );

    let canvas = render::side_by_side(&img_in, &img_out, w, h);

    match options.get_one::<String>("save") {
        Some(path) => {
            canvas.save_with_format(path, ImageFormat::Png)?;
            println!("Saved -> {path}");
        }
        None => show_gui::open_in_default_app(&DynamicImage::ImageLuma8(canvas))?
    }

    Ok(())
}
