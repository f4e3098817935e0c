use std::path::PathBuf;

use strum::Display;
use thiserror::Error;

/// Remote call that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FetchStep {
    #[strum(serialize = "account lookup")]
    Account,
    #[strum(serialize = "summoner lookup")]
    Summoner,
    #[strum(serialize = "league lookup")]
    League,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid Riot ID '{0}': expected name#tag")]
    InvalidRiotId(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Unknown account route: {0}")]
    UnknownAccountRoute(String),

    #[error("Character {ch:?} (U+{code:04X}) cannot be masked")]
    Unmaskable { ch: char, code: u32 },

    #[error("Missing API key")]
    MissingApiKey,

    #[error("{step} failed with HTTP {status}")]
    Api { step: FetchStep, status: u16 },

    #[error("{step} failed: {message}")]
    Network { step: FetchStep, message: String },

    #[error("{step} returned an unreadable response: {message}")]
    Decode { step: FetchStep, message: String },

    #[error("Ledger file {path} is corrupt: {source}")]
    CorruptLedger {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Remote step this error came from, if any.
    pub fn step(&self) -> Option<FetchStep> {
        match self {
            Error::Api { step, .. } | Error::Network { step, .. } | Error::Decode { step, .. } => {
                Some(*step)
            }
            _ => None,
        }
    }

    /// Whether a retry has a chance of succeeding.
    ///
    /// Timeouts, dropped connections, rate limiting (429) and server errors (5xx)
    /// are transient. Everything else fails the same way on every attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Network { .. } => true,
            Error::Api { status, .. } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }

    /// Map a transport error from the HTTP client onto the failing step.
    pub(crate) fn from_http(step: FetchStep, e: ureq::Error) -> Self {
        match &e {
            ureq::Error::StatusCode(status) => Error::Api {
                step,
                status: *status,
            },
            ureq::Error::Timeout(_) => Error::Network {
                step,
                message: format!("Request timed out: {}", e),
            },
            ureq::Error::Json(_) => Error::Decode {
                step,
                message: e.to_string(),
            },
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => Error::Network {
                step,
                message: format!("Connection failed: {}", e),
            },
            _ => Error::Network {
                step,
                message: format!("HTTP error: {}", e),
            },
        }
    }
}
