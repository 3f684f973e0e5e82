//! CLI module for the events API

pub mod serve;

use clap::{Parser, Subcommand};

/// Events API - user accounts and their events over HTTP
#[derive(Parser)]
#[command(name = "events-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
