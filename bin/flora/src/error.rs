use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(ConfigError),
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidHost(String),
    InvalidPort(String),
    InvalidHistory(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Config(err) => write!(f, "config error: {err}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHost(value) => write!(f, "invalid host {value:?}"),
            Self::InvalidPort(value) => write!(f, "invalid port {value:?}"),
            Self::InvalidHistory(value) => write!(f, "invalid history capacity {value:?}"),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for ConfigError {}
