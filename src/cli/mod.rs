//! CLI module for the movies API
//!
//! Provides the `serve` subcommand that runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Movies API - cached read layer over a movies search index
#[derive(Parser)]
#[command(name = "movies-api")]
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
