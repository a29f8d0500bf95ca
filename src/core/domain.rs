use std::env;
use std::str::FromStr;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use tracing::warn;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_LIBRARY_FILE: &str = "library.json";
pub const DEFAULT_METADATA_URL: &str = "https://openlibrary.org";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

// Runtime selects how the REST surface is hosted
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum Runtime {
    Local,
    Lambda,
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Runtime::Local),
            "lambda" => Ok(Runtime::Lambda),
            other => Err(format!("unknown runtime {}", other)),
        }
    }
}

// Configuration abstracts config options for the bookshelf service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub library_file: String,
    pub metadata_url: String,
    pub lookup_timeout_secs: u64,
    pub bind_addr: String,
    pub runtime: Runtime,
    pub log_level: String,
    // rejected environment values, reported once logging is up
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl Configuration {
    pub fn new(library_file: &str) -> Self {
        Configuration {
            library_file: library_file.to_string(),
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            runtime: Runtime::Local,
            log_level: "info".to_string(),
            warnings: vec![],
        }
    }

    // builds configuration from BOOKSHELF_* environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(
            lookup("BOOKSHELF_LIBRARY_FILE").as_deref().unwrap_or(DEFAULT_LIBRARY_FILE));
        if let Some(url) = lookup("BOOKSHELF_METADATA_URL") {
            config.metadata_url = url;
        }
        if let Some(secs) = lookup("BOOKSHELF_LOOKUP_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => config.lookup_timeout_secs = n,
                _ => config.warnings.push(format!("ignoring invalid BOOKSHELF_LOOKUP_TIMEOUT_SECS {:?}", secs)),
            }
        }
        if let Some(addr) = lookup("BOOKSHELF_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(runtime) = lookup("BOOKSHELF_RUNTIME") {
            match Runtime::from_str(runtime.as_str()) {
                Ok(r) => config.runtime = r,
                Err(err) => config.warnings.push(format!("ignoring BOOKSHELF_RUNTIME: {}", err)),
            }
        }
        if let Some(level) = lookup("BOOKSHELF_LOG_LEVEL") {
            config.log_level = level;
        }
        config
    }

    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }

    pub fn with_metadata_url(mut self, url: &str) -> Self {
        self.metadata_url = url.to_string();
        self
    }

    pub fn with_lookup_timeout_secs(mut self, secs: u64) -> Self {
        self.lookup_timeout_secs = secs;
        self
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}
