use std::{net::SocketAddr, path::PathBuf};

use crate::ServerError;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_LOG_FILTER: &str = "tower_http=debug,info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_address: SocketAddr,
    pub public_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Reads the process environment, which `dotenv` has already populated
    /// from `.env` when present.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let address = lookup("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.into());
        let server_address = address
            .parse::<SocketAddr>()
            .map_err(|source| ServerError::InvalidAddress {
                value: address.clone(),
                source,
            })?;

        Ok(Config {
            server_address,
            public_dir: lookup("PUBLIC_DIR")
                .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.into())
                .into(),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        })
    }
}
