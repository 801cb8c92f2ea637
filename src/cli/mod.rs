//! CLI module for the posts API
//!
//! Currently a single subcommand:
//! - `serve`: run the HTTP server

pub mod serve;

use clap::{Parser, Subcommand};

/// Posts API - content listing with a cache-aside repository
#[derive(Parser)]
#[command(name = "posts-api")]
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
