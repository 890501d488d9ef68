// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # sirenstream
//!
//! A streaming Rust client for Siren-style paginated hypermedia APIs,
//! with a typed resource layer for a translation-platform REST API.
//!
//! ## Features
//!
//! - **Cursor-following pagination**: `self`/`next` links on each page
//!   resolve into the next page request, filter params preserved
//! - **One-at-a-time streaming**: a background walker feeds entities
//!   over a bounded channel, with cooperative cancellation
//! - **Typed resources**: communities, projects, documents, and
//!   translations decoded straight off the wire
//! - **Form-style writes**: POST parameters ride the query string with
//!   a form content type, the way the service expects
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sirenstream::{ApiClient, Credential, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::new(
//!         "https://api.example.com/api",
//!         Credential::bearer("access-token"),
//!     );
//!
//!     // Stream every community the credential can see
//!     let mut communities = client.list_communities();
//!     while let Some(community) = communities.recv().await {
//!         println!("{}", community.properties.title);
//!     }
//!     communities.finish().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         ApiClient                           │
//! │  get_entity()   post_entity()   collection_page()  stream() │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────┬───────────────────┴─────────┬────────────────────┐
//! │   HTTP   │          Pagination         │       Stream       │
//! ├──────────┼─────────────────────────────┼────────────────────┤
//! │ Bearer   │ Link rel inspection         │ Background walker  │
//! │ Form POST│ Cursor resolution           │ Bounded channel    │
//! │ Download │ Seed synthesis              │ Cancel handle      │
//! └──────────┴─────────────────────────────┴────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client and credentials
pub mod http;

/// Hypermedia links, page envelopes, and cursor resolution
pub mod pagination;

/// Entity block decoding
pub mod decode;

/// Streaming iteration over collections
pub mod stream;

/// Typed resource operations
pub mod resources;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use decode::{EntityDecoder, JsonEntityDecoder};
pub use http::{ApiClient, ApiConfig, Credential};
pub use pagination::{CursorRequest, Link, PageEnvelope};
pub use resources::{Community, Document, Project, Status, Translation};
pub use stream::{CancelHandle, EntityStream};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
