/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! `rawpix-gen`: square grayscale test image generator
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::exit;

use clap::{value_parser, Arg, ArgMatches, Command};
use log::error;
use rawpix_patterns::square_pattern;
use rawpix_raw::RawEncoder;

use crate::cmd_args::{add_logging_args, setup_logger};
use crate::errors::ToolErrors;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    let cmd = Command::new("rawpix-gen")
        .about("Generate a square checkerboard+gradient grayscale raw image")
        .arg(Arg::new("size")
            .long("size")
            .help("Total byte count of the image, must be a perfect square")
            .value_parser(value_parser!(usize))
            .default_value("1024"))
        .arg(Arg::new("block")
            .long("block")
            .help("Checker block edge in pixels")
            .value_parser(value_parser!(usize))
            .default_value("4"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Output file to write raw bytes to")
            .default_value("img.bin"));

    add_logging_args(cmd)
}

pub fn main() {
    let options = create_cmd_args().get_matches();
    setup_logger(&options);

    if let Err(e) = run(&options) {
        println!();
        error!(" Could not generate image, reason {:?}", e);
        println!();
        exit(-1);
    }
}

fn run(options: &ArgMatches) -> Result<(), ToolErrors> {
    let size = *options.get_one::<usize>("size").unwrap();
    let block = *options.get_one::<usize>("block").unwrap();
    let output = options.get_one::<String>("output").unwrap();

    // pattern synthesis validates the size, nothing touches the
    // filesystem until it succeeds
    let (pixels, side) = square_pattern(size, block)?;

    let mut writer = BufWriter::new(File::create(output)?);
    let written = RawEncoder::new(&mut writer).encode(&pixels, side, side)?;
    writer.flush()?;

    println!("Generated {output} ({written} bytes, {side}x{side})");

    Ok(())
}
