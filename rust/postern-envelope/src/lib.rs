#![warn(missing_docs)]

//! Classification of discriminated server responses.
//!
//! Every call against the remote API answers with a [ResultEnvelope]: a
//! tagged wrapper whose tag decides what the shell should do next - show a
//! message, run a callback, or route the user away. The [Classifier] owns
//! that decision so callers never switch over the taxonomy themselves; they
//! hand the envelope over together with optional success/failure callbacks
//! and let the configured [Notify] and [Navigate] collaborators carry out
//! the side effects.
//!
//! ```rust
//! use postern_envelope::{Classifier, LogNotifier, Navigate, ResultEnvelope};
//!
//! struct NoopRouter;
//!
//! impl Navigate for NoopRouter {
//!     fn navigate_to(&self, _route: &str) {}
//! }
//!
//! let classifier = Classifier::new(LogNotifier, NoopRouter);
//! classifier.classify(&ResultEnvelope::success("saved"));
//! ```

mod classifier;
pub use classifier::*;

mod envelope;
pub use envelope::*;

mod navigate;
pub use navigate::*;

mod notify;
pub use notify::*;
