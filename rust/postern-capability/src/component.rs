use postern_cache::FetchBackend;

use crate::{CapabilityMap, Position, Resolver};

/// The declaration boundary for UI components that participate in
/// authorization checking.
///
/// A component announces where it sits in the module hierarchy and exposes
/// its declared capability flags; [Resolver::check_component] does the rest.
/// Components that do not participate return [CapabilityMap::Disabled] from
/// [Component::capabilities].
pub trait Component {
    /// The component's position: the dot-delimited path of its parent
    /// modules (e.g. `Root.Admin.Identity`).
    fn position(&self) -> Position;

    /// The component's declared capability flags.
    fn capabilities(&mut self) -> &mut CapabilityMap;
}

impl<Backend> Resolver<Backend>
where
    Backend: FetchBackend<Key = String, Value = Vec<String>>,
{
    /// Resolve a component's declared capabilities at its position.
    pub async fn check_component<C>(&self, component: &mut C)
    where
        C: Component + ?Sized,
    {
        let position = component.position();
        self.resolve(component.capabilities(), &position).await;
    }
}
