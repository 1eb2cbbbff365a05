use std::env;
use std::path::PathBuf;

use crate::error::DomainError;

pub const DEFAULT_INITIAL_STATUS: &str = "PENDIENTE";
pub const DEFAULT_LOG_FILTER: &str = "info,loans=debug";

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the status new applications start in
    pub initial_status_name: String,
    /// JSON file with statuses and loan types to register at start-up
    pub catalog_seed_path: Option<PathBuf>,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let initial_status_name = match lookup("INITIAL_STATUS_NAME") {
            Some(name) if name.trim().is_empty() => {
                return Err(DomainError::invalid("INITIAL_STATUS_NAME must not be blank"))
            }
            Some(name) => name.trim().to_string(),
            None => DEFAULT_INITIAL_STATUS.to_string(),
        };

        Ok(Self {
            initial_status_name,
            catalog_seed_path: lookup("CATALOG_SEED_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
