//! Runtime configuration.
//!
//! Defaults are compiled in. A handful of `LISTD_*` environment variables can
//! override them; a value that does not parse stops startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::Error;

/// Address the service listens on unless `LISTD_ADDR` says otherwise.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
/// Directory holding `index.html` and the `/static` files.
pub const DEFAULT_ASSET_DIR: &str = "./static";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub asset_dir: PathBuf,
    /// Start with the example item instead of an empty list.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            seed: false,
        }
    }
}

impl Config {
    /// Defaults overridden by `LISTD_ADDR`, `LISTD_ASSET_DIR` and `LISTD_SEED`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&'static str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(addr) = var("LISTD_ADDR") {
            config.addr = addr.parse()
                .map_err(|_| Error::Config { key: "LISTD_ADDR", value: addr.clone() })?;
        }
        if let Some(dir) = var("LISTD_ASSET_DIR") {
            config.asset_dir = PathBuf::from(dir);
        }
        if let Some(seed) = var("LISTD_SEED") {
            config.seed = match seed.as_str() {
                "1" | "true" => true,
                "0" | "false" | "" => false,
                _ => return Err(Error::Config { key: "LISTD_SEED", value: seed }),
            };
        }
        Ok(config)
    }
}
