#![warn(missing_docs)]

//! Hierarchical capability authorization for UI components.
//!
//! A component sits at a [Position] in a static module hierarchy and
//! declares, by name, the capabilities it wants permission for. The
//! [Resolver] answers those declarations against the set of hierarchy paths
//! the server grants the current session, read through an expiring,
//! deduplicated cache so that any number of components can check themselves
//! without stampeding the API.
//!
//! # Quick Example
//!
//! ```rust
//! # async fn example() {
//! use postern_cache::MemoryFetchBackend;
//! use postern_capability::{AUTH_INFO_KEY, CapabilityMap, Position, Resolver};
//!
//! let backend = MemoryFetchBackend::default();
//! backend
//!     .insert(
//!         AUTH_INFO_KEY.to_string(),
//!         vec!["Root.Admin.Identity.Update".to_string()],
//!     )
//!     .await;
//!
//! let resolver = Resolver::new(backend);
//! let mut capabilities = CapabilityMap::declare(["Update", "Delete"]);
//!
//! resolver
//!     .resolve(&mut capabilities, &Position::new("Root.Admin.Identity"))
//!     .await;
//!
//! assert_eq!(capabilities.get("Update"), Some(true));
//! assert_eq!(capabilities.get("Delete"), Some(false));
//! # }
//! ```

mod component;
pub use component::*;

mod map;
pub use map::*;

mod position;
pub use position::*;

mod resolver;
pub use resolver::*;
