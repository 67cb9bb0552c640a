use async_trait::async_trait;
use postern_common::{ConditionalSend, ConditionalSync};

use crate::PosternCacheError;

mod memory;
pub use memory::*;

/// A [FetchBackend] is a facade over some remote or computed data source that
/// is capable of producing values by some key.
///
/// Unlike a full storage substrate there is no write path: the backend is the
/// authority for the data, and the cache layer above it decides when a fresh
/// read is warranted. A backend reports a missing value as `Ok(None)` and
/// reserves its error type for transport or protocol failures.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait FetchBackend {
    /// The key type used by this [FetchBackend]
    type Key: ConditionalSync;
    /// The value type produced by this [FetchBackend]
    type Value: ConditionalSend;
    /// The error type produced by this [FetchBackend]
    type Error: Into<PosternCacheError>;

    /// Retrieve the current value (if any) for the given key
    async fn fetch(&self, key: &Self::Key) -> Result<Option<Self::Value>, Self::Error>;
}
