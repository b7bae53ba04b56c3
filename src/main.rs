#![warn(missing_docs)]
//!
//! # NvrLink
//!
//! NvrLink is a small program that talks to the http api of Reolink NVRs and cameras.
//!
//! It contains sub commands for listing the recordings an NVR holds on
//! one of its channels.
//!
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::*;
use std::fs;
use validator::Validate;

mod cmdline;
mod config;
mod files;
mod utils;

use cmdline::{Command, Opt};
use config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!(
        "NvrLink {} {}",
        env!("NVRLINK_VERSION"),
        env!("NVRLINK_PROFILE")
    );

    let opt = Opt::parse();

    let conf_path = opt
        .config
        .context("Must supply --config file, see sample_config.toml")?;
    let config: Config = toml::from_str(
        &fs::read_to_string(&conf_path)
            .with_context(|| format!("Failed to read {:?}", conf_path))?,
    )
    .with_context(|| format!("Failed to parse the {:?} config file", conf_path))?;

    config
        .validate()
        .with_context(|| format!("Failed to validate the {:?} config file", conf_path))?;

    match opt.cmd {
        None => return Err(anyhow!("No command given, see --help")),
        Some(Command::Files(opts)) => {
            files::main(opts, config)?;
        }
    }

    Ok(())
}
