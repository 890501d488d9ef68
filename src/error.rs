//! Error types for sirenstream
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for sirenstream
#[derive(Error, Debug)]
pub enum Error {
    /// The current page carries no `next` link. This is the expected way for
    /// a listing to end and is never delivered to stream consumers.
    #[error("end of list")]
    EndOfList,

    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status of 400 or above. The raw body rides
    /// along so callers can surface server-supplied diagnostics.
    #[error("HTTP {status}: {body}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A response body did not match the expected shape.
    #[error("failed to decode response: {message}")]
    Decode {
        /// What went wrong
        message: String,
    },

    /// An operation that addresses a single entity was called with an empty
    /// identifier. Raised before any request is sent.
    #[error("id required")]
    IdRequired,

    /// Writing downloaded content failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Diagnostic messages the server includes in error response bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Messages {
    /// Human-readable explanations of what the server rejected
    #[serde(default)]
    pub messages: Vec<String>,
}

impl Error {
    /// Create a server status error
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        Self::Server {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Check whether this is the clean end-of-list condition
    pub fn is_end_of_list(&self) -> bool {
        matches!(self, Error::EndOfList)
    }

    /// Extract the server's diagnostic messages from a `Server` error body,
    /// if the body parses as the usual error envelope.
    pub fn server_messages(&self) -> Option<Vec<String>> {
        match self {
            Error::Server { body, .. } => serde_json::from_str::<Messages>(body)
                .ok()
                .map(|m| m.messages),
            _ => None,
        }
    }
}

/// Result type alias for sirenstream
pub type Result<T> = std::result::Result<T, Error>;
