/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{info, Level};

/// Attach the shared logging flags to a tool's command definition.
pub fn add_logging_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher")
    )
    .arg(
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information")
    )
    .arg(
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors")
    )
    .arg(
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about what the tool is doing")
    )
}

/// Initialize the logger from the shared logging flags.
///
/// The most verbose flag present wins; the default level is `Warn`,
/// which also makes the `--warn` flag a no-op kept for symmetry.
pub fn setup_logger(options: &ArgMatches) {
    let flag = |name: &str| *options.get_one::<bool>(name).unwrap();

    let log_level = if flag("trace") {
        Level::Trace
    } else if flag("debug") {
        Level::Debug
    } else if flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    simple_logger::init_with_level(log_level).unwrap();

    info!("Log level: {log_level}");
}
