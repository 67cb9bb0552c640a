#![warn(missing_docs)]

//! This crate contains a generalized API for constructing expiring read
//! caches over remote data sources.
//!
//! In order to use it, first select or implement a [FetchBackend], then wrap
//! it in a [TtlCache] with the expiry appropriate for the data:
//!
//! ```rust
//! use std::time::Duration;
//! use postern_cache::{MemoryFetchBackend, TtlCache};
//!
//! // An in-memory backend with explicit types, here using String keys and
//! // string-list values
//! let backend = MemoryFetchBackend::<String, Vec<String>>::default();
//!
//! // Values read through the cache are memoized for one minute
//! let cache = TtlCache::new(backend, Duration::from_secs(60));
//! ```
//!
//! Reads through the cache are deduplicated per key: concurrent callers for
//! the same key share one underlying fetch, and backend failures resolve to
//! an absent value rather than an error.

mod backend;
pub use backend::*;

mod cache;
pub use cache::*;

mod error;
pub use error::*;
