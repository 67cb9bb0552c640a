/// The navigation boundary: something that can route the user to a client
/// route identified by its path string.
pub trait Navigate {
    /// Route the user to `route`.
    fn navigate_to(&self, route: &str);
}

/// The client routes that classification may navigate to.
///
/// Injected into the [Classifier](crate::Classifier) rather than hardcoded,
/// so tests and differently-routed shells can substitute their own targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Routes {
    /// Where to send the user when a resource does not exist.
    pub not_found: String,
    /// Where to send the user to (re-)establish a session.
    pub login: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            not_found: "/nofound".to_string(),
            login: "/identity/login".to_string(),
        }
    }
}

impl Routes {
    /// Create a route configuration with the given targets.
    pub fn new(not_found: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            not_found: not_found.into(),
            login: login.into(),
        }
    }
}
