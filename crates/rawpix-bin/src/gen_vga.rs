/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! `rawpix-gen-vga`: fixed 320x240 RGB332 test frame generator
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::exit;

use clap::{value_parser, Arg, ArgMatches, Command};
use log::{error, info};
use rawpix_core::rgb332;
use rawpix_patterns::vga_pattern;
use rawpix_raw::RawEncoder;

use crate::cmd_args::{add_logging_args, setup_logger};
use crate::errors::ToolErrors;
use crate::{VGA_HEIGHT, VGA_WIDTH};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    let cmd = Command::new("rawpix-gen-vga")
        .about("Generate a 320x240 RGB332 checkerboard+gradient VGA test frame")
        .arg(Arg::new("block")
            .long("block")
            .help("Checker block edge in pixels")
            .value_parser(value_parser!(usize))
            .default_value("16"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Output file to write raw bytes to")
            .default_value("vga_test.bin"));

    add_logging_args(cmd)
}

pub fn main() {
    let options = create_cmd_args().get_matches();
    setup_logger(&options);

    if let Err(e) = run(&options) {
        println!();
        error!(" Could not generate VGA frame, reason {:?}", e);
        println!();
        exit(-1);
    }
}

fn run(options: &ArgMatches) -> Result<(), ToolErrors> {
    let block = *options.get_one::<usize>("block").unwrap();
    let output = options.get_one::<String>("output").unwrap();
    let expected = VGA_WIDTH * VGA_HEIGHT;

    info!("Generating pixel data");
    let gray = vga_pattern(VGA_WIDTH, VGA_HEIGHT, block)?;
    let packed: Vec<u8> = gray.iter().map(|g| rgb332::pack_gray(*g)).collect();

    let mut writer = BufWriter::new(File::create(output)?);
    let written = RawEncoder::new(&mut writer).encode(&packed, VGA_WIDTH, VGA_HEIGHT)?;
    writer.flush()?;

    println!("Generated file: {output}");
    println!("Resolution: {VGA_WIDTH}x{VGA_HEIGHT}");
    println!("Expected size: {expected} bytes");
    println!("Actual size:   {written} bytes");

    if written == expected {
        println!("Success: File size is correct!");
    } else {
        println!("Error: File size is incorrect!");
    }

    Ok(())
}
