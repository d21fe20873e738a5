//! Server configuration.
//!
//! Defaults are fixed; command-line flags may override them:
//! `--bind <addr:port>`, `--public <dir>`, `--initial-size <n>`.

use crate::dataset::generator::{is_valid_size, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};

use anyhow::{anyhow, Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PUBLIC_DIR: &str = "./public";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Root directory of the static front-end served under `/`.
    pub public_dir: PathBuf,
    /// Number of records generated at startup.
    pub initial_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            initial_size: DEFAULT_SIZE,
        }
    }
}

impl ServerConfig {
    /// Builds a config from `std::env::args()`-style arguments (program name first).
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = flag_value(args, i)?;
                    config.bind_addr = value
                        .parse()
                        .with_context(|| format!("Invalid --bind address: {}", value))?;
                    i += 2;
                }
                "--public" => {
                    config.public_dir = PathBuf::from(flag_value(args, i)?);
                    i += 2;
                }
                "--initial-size" => {
                    let value = flag_value(args, i)?;
                    let size: usize = value
                        .parse()
                        .with_context(|| format!("Invalid --initial-size: {}", value))?;
                    if !is_valid_size(size) {
                        return Err(anyhow!(
                            "--initial-size must be between {} and {}",
                            MIN_SIZE,
                            MAX_SIZE
                        ));
                    }
                    config.initial_size = size;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        Ok(config)
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("Missing value for {}", args[i]))
}
