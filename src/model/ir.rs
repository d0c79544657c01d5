//! The compiled document: an ordered component map.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use super::component::ServiceComponent;

/// Ordered mapping from component name to compiled component.
///
/// Iteration follows declaration order. A component declared with `using`
/// shares the target's [`Arc`]; [`Ir::alias_target`] tells the two apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ir {
    components: IndexMap<String, Arc<ServiceComponent>>,
    /// Alias name → name it was declared `using`.
    aliases: IndexMap<String, String>,
}

impl Ir {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, component: ServiceComponent) {
        self.components.insert(name.into(), Arc::new(component));
    }

    /// Bind `alias` to the very same component as `target`.
    ///
    /// Returns `false` (and binds nothing) if `target` is not present.
    pub(crate) fn insert_alias(&mut self, alias: impl Into<String>, target: &str) -> bool {
        let Some(component) = self.components.get(target).cloned() else {
            return false;
        };
        let alias = alias.into();
        let root = self.alias_target(target).unwrap_or(target).to_string();
        self.components.insert(alias.clone(), component);
        self.aliases.insert(alias, root);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ServiceComponent>> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// All components, aliases included, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ServiceComponent>)> {
        self.components.iter().map(|(name, c)| (name.as_str(), c))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// The defining component an alias refers to.
    ///
    /// Chains of aliases are collapsed to the component that was defined.
    pub fn alias_target(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Defined (non-alias) components, each shared object exactly once.
    pub fn unique_components(&self) -> impl Iterator<Item = (&str, &Arc<ServiceComponent>)> {
        self.iter().filter(|(name, _)| !self.is_alias(name))
    }

    /// Components subscribing to `publisher.notification`, in declaration order.
    pub fn subscribers<'a>(
        &'a self,
        publisher: &'a str,
        notification: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        self.iter()
            .filter(move |(_, component)| {
                component
                    .utilization
                    .notifications
                    .iter()
                    .any(|sub| sub.reference() == Some((publisher, notification)))
            })
            .map(|(name, _)| name)
    }
}
