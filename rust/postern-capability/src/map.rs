use std::collections::BTreeMap;

/// The capability flags owned by a single UI component.
///
/// Authorization checking is opt-in per component: a component that never
/// declares capabilities holds [CapabilityMap::Disabled] and resolution
/// against it is a no-op. Declared capabilities start out denied and stay
/// denied until a resolution against server data flips them - on transient
/// failures the resolver leaves the map untouched, so the declaration-time
/// default is what guards the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CapabilityMap {
    /// Authorization checking is disabled for the declaring component.
    #[default]
    Disabled,
    /// Capability name → whether the current session is authorized for it.
    Enabled(BTreeMap<String, bool>),
}

impl CapabilityMap {
    /// Declare the named capabilities, every one of them initially denied.
    pub fn declare<Names, Name>(names: Names) -> Self
    where
        Names: IntoIterator<Item = Name>,
        Name: Into<String>,
    {
        Self::Enabled(names.into_iter().map(|name| (name.into(), false)).collect())
    }

    /// Whether this map participates in authorization checking at all.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// The resolved flag for a declared capability; `None` when checking is
    /// disabled or the capability was never declared.
    pub fn get(&self, name: &str) -> Option<bool> {
        match self {
            Self::Disabled => None,
            Self::Enabled(flags) => flags.get(name).copied(),
        }
    }

    /// Iterate over the declared capability names and their resolved flags.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        let flags = match self {
            Self::Disabled => None,
            Self::Enabled(flags) => Some(flags),
        };
        flags
            .into_iter()
            .flat_map(|flags| flags.iter().map(|(name, flag)| (name.as_str(), *flag)))
    }
}
