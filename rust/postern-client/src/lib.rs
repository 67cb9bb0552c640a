#![warn(missing_docs)]

//! HTTP boundary for the remote security API.
//!
//! The [SecurityClient] wraps a [reqwest::Client] configured via
//! [SecurityClientConfig] and exposes the two endpoints this layer consumes:
//! the full authorized path listing, and the single-URL authorization check.
//! It also implements [postern_cache::FetchBackend] (keyed by request path)
//! so that a [TtlCache](postern_cache::TtlCache) over it realizes the
//! session-wide permission cache.

mod client;
pub use client::*;

mod error;
pub use error::*;
