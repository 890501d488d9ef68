//! Streaming iteration over paginated collections.
//!
//! A stream walks a collection page by page in a background task and
//! hands entities over a bounded channel one at a time. Consumers pull
//! with [`EntityStream::recv`], may stop early through a
//! [`CancelHandle`], and learn how the walk ended from
//! [`EntityStream::finish`].

mod cancel;
mod walker;

pub use cancel::CancelHandle;
pub use walker::EntityStream;
