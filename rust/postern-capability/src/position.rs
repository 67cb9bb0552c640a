use std::fmt::{Display, Formatter};

/// A node's place in the static module hierarchy, as a dot-delimited path of
/// ancestor names (e.g. `Root.Admin.Identity`).
///
/// A capability's full path is the position joined with the capability name
/// by another dot; authorization compares full paths by exact membership,
/// never by prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position(String);

impl Position {
    /// Create a position from its dot-delimited path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The dot-delimited path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The full hierarchy path of a capability declared at this position.
    pub fn capability_path(&self, name: &str) -> String {
        format!("{}.{name}", self.0)
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
