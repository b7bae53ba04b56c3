use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A command line client for the http api of Reolink NVRs
///
/// NvrLink is free software released under the GNU AGPL v3.
#[derive(Parser, Debug)]
#[command(name = "nvrlink", arg_required_else_help = true)]
pub struct Opt {
    /// The toml config file describing the cameras
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the recordings of a channel on an NVR
    Files(super::files::Opt),
}
