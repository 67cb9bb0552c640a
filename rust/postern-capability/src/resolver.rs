use std::{collections::HashSet, time::Duration};

use postern_cache::{FetchBackend, TtlCache};

use crate::{CapabilityMap, Position};

/// Well-known cache key under which the session's authorized path set is
/// stored. Backends that fetch by request path resolve it to the auth-info
/// endpoint.
pub const AUTH_INFO_KEY: &str = "/api/security/getauthinfo";

/// How long a fetched authorized path set stays fresh.
const AUTH_INFO_TTL: Duration = Duration::from_secs(60);

/// Resolves declared capabilities against the session's authorized paths.
///
/// The path set is read through a [TtlCache] shared by every clone of the
/// resolver, so concurrent resolutions across components collapse into one
/// fetch and later resolutions within the TTL hit memory.
///
/// Resolution is fail-safe: when no path set can be obtained (backend
/// failure, missing data, empty listing) the capability map is left exactly
/// as it was, rather than flashing every capability to denied over a
/// transient outage. Components rely on the denied-at-declaration default of
/// [CapabilityMap::declare] for safety instead.
#[derive(Clone)]
pub struct Resolver<Backend>
where
    Backend: FetchBackend<Key = String, Value = Vec<String>>,
{
    cache: TtlCache<Backend>,
}

impl<Backend> Resolver<Backend>
where
    Backend: FetchBackend<Key = String, Value = Vec<String>>,
{
    /// Create a resolver fetching authorized paths through the given
    /// backend.
    pub fn new(backend: Backend) -> Self {
        Self {
            cache: TtlCache::new(backend, AUTH_INFO_TTL),
        }
    }

    /// Resolve every capability in `capabilities` at `position`, in place.
    ///
    /// A [CapabilityMap::Disabled] map returns immediately without touching
    /// the cache. Otherwise each declared name is flagged by exact
    /// membership of its full path in the fetched set; either every declared
    /// capability is recomputed or, when no data is available, none are.
    pub async fn resolve(&self, capabilities: &mut CapabilityMap, position: &Position) {
        let CapabilityMap::Enabled(flags) = capabilities else {
            return;
        };

        let Some(paths) = self.cache.get(AUTH_INFO_KEY.to_string()).await else {
            tracing::debug!("No authorized path set available; keeping previous capability state");
            return;
        };
        if paths.is_empty() {
            tracing::debug!("Authorized path set is empty; keeping previous capability state");
            return;
        }

        let paths: HashSet<&str> = paths.iter().map(String::as_str).collect();

        for (name, authorized) in flags.iter_mut() {
            *authorized = paths.contains(position.capability_path(name).as_str());
        }
    }

    /// Discard the cached path set so the next resolution refetches it.
    ///
    /// Call this when a response classifies as unauthorized: the session the
    /// cached set belonged to is gone.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&AUTH_INFO_KEY.to_string()).await;
    }
}
