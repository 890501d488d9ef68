//! Request credentials
//!
//! The API expects an authorization header on every request. Acquiring the
//! token is outside this crate; callers hand in whatever credential they
//! hold and it is applied verbatim.

use reqwest::RequestBuilder;

/// Credential applied to every outgoing request
#[derive(Debug, Clone, Default)]
pub enum Credential {
    /// No authorization header
    #[default]
    None,

    /// Bearer access token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// Arbitrary header, for gateways with their own key scheme
    Header {
        /// Header name
        name: String,
        /// Header value
        value: String,
    },
}

impl Credential {
    /// Create a bearer token credential
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Create a custom header credential
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Header {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Apply this credential to a request
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Credential::None => req,
            Credential::Bearer { token } => req.bearer_auth(token),
            Credential::Header { name, value } => req.header(name.as_str(), value.as_str()),
        }
    }
}
