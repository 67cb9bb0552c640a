//! Cross-platform clock access.
//!
//! The cache layer keeps wall-clock timestamps next to its entries in order
//! to enforce expiry, and must be able to read the clock on the web target
//! where `std::time::SystemTime::now()` is unavailable.

pub use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Returns the current system time.
#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> SystemTime {
    SystemTime::now()
}

/// Returns the current system time, read via `web-time`.
#[cfg(target_arch = "wasm32")]
pub fn now() -> SystemTime {
    use web_time::web::SystemTimeExt;
    web_time::SystemTime::now().to_std()
}
