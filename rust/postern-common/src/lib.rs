#![warn(missing_docs)]

//! Light weight helpers shared across the other crates in this workspace.
//! Their chief quality is that they have virtually zero dependencies.

mod sync;
pub use sync::*;

pub mod time;

mod tree;
pub use tree::*;
