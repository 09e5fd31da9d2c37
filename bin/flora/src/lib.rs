mod config;
mod error;
mod storage;
mod web_service;

pub use config::Config;
pub use error::{ConfigError, Error};
pub use storage::{History, Reading, Storage, MAX_HISTORY};
pub use web_service::router;

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, ErasedError>;
