// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There are no subcommands: the tool does one thing, walk the web. The
// flags only choose where the configuration comes from, how chatty the
// logs are, and how long to run.
//
//   noise-walker                              built-in config, runs forever
//   noise-walker --config my.json --log debug
//   noise-walker --timeout 600                stop after ten minutes
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "noise-walker",
    version = "0.1.0",
    about = "Generates random HTTP browsing noise by walking links from seed URLs",
    long_about = "noise-walker picks a random seed URL, follows random links from it for a \
                  bounded number of hops, sleeps between requests, and starts over. \
                  It is meant to bury real browsing in a stream of plausible-looking traffic."
)]
pub struct Cli {
    /// Path to a JSON config file
    ///
    /// When omitted, the configuration compiled into the binary is used
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Logging level: debug, info, warn or error
    ///
    /// Unknown values fall back to info
    #[arg(long, default_value = "info")]
    pub log: String,

    /// How long to run, in seconds
    ///
    /// 0 or a negative value keeps the timeout from the config file (which
    /// may itself be 0, meaning run until interrupted)
    // allow_negative_numbers stops clap from reading "-5" as a flag
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub timeout: i64,
}
