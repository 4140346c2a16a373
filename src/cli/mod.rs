//! CLI module for the authorization server
//!
//! Provides subcommands for running the server and generating key
//! material:
//! - `serve`: run the HTTP server
//! - `keygen`: generate a PEM RSA key pair for configuration

pub mod keygen;
pub mod serve;

use clap::{Parser, Subcommand};

/// Minimal authorization server - HTTP Basic in, RS256 JWT out
#[derive(Parser)]
#[command(name = "account-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Generate an RSA key pair and print it as PEM
    Keygen(keygen::KeygenArgs),
}
