//! Command line configuration.

use anyhow::{bail, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command line configuration for Inkpot.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkpot", version, about, long_about = None)]
pub struct Config {
    /// SQLite database path
    #[arg(default_value = "inkpot.db")]
    pub db: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    pub addr: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the listen address does not parse or the
    /// database's parent directory does not exist.
    pub fn validate(&self) -> Result<()> {
        if self.addr.parse::<SocketAddr>().is_err() {
            bail!("Invalid listen address: {}", self.addr);
        }

        if let Some(parent) = self.db.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                bail!(
                    "Database directory does not exist: {}",
                    parent.display()
                );
            }
        }

        Ok(())
    }
}
