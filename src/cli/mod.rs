//! CLI for the package tracker

pub mod serve;

use clap::{Parser, Subcommand};

/// Package Delivery Tracker - REST API over a remote packages table
#[derive(Parser)]
#[command(name = "package-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
