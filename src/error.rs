use std::fmt;
use thiserror::Error;

/// Coarse classification of a failed resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    NotFound,
}

/// A single recorded failure inside the cascade.
///
/// These never abort a resolution on their own; they are collected so a
/// final `NotFound` can explain what was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    pub stage: String,
    pub reason: String,
}

impl StageFailure {
    pub fn new<S: Into<String>, R: Into<String>>(stage: S, reason: R) -> Self {
        Self {
            stage: stage.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.reason)
    }
}

/// Custom error type for link resolution
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Error fetching page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error fetching page: {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Error parsing page: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Could not find macOS download link for {site}")]
    NotFound {
        site: String,
        failures: Vec<StageFailure>,
    },
}

/// Result type alias for link resolution
pub type Result<T> = std::result::Result<T, LinkError>;

impl LinkError {
    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LinkError::Parse(msg.into())
    }

    /// Create an invalid URL error
    pub fn invalid_url<S: Into<String>>(msg: S) -> Self {
        LinkError::InvalidUrl(msg.into())
    }

    /// Create a non-2xx status error
    pub fn status<S: Into<String>>(url: S, status: u16) -> Self {
        LinkError::Status {
            url: url.into(),
            status,
        }
    }

    pub fn not_found<S: Into<String>>(site: S, failures: Vec<StageFailure>) -> Self {
        LinkError::NotFound {
            site: site.into(),
            failures,
        }
    }

    /// Invalid hrefs only occur inside a tier and count as "no candidate",
    /// so they are reported as `NotFound` if they ever escape.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinkError::Http(_) | LinkError::Status { .. } => ErrorKind::Network,
            LinkError::Parse(_) => ErrorKind::Parse,
            LinkError::InvalidUrl(_) | LinkError::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}
