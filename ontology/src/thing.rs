//! Generic `owl:Thing` endpoints for properties that declare none.
//!
//! A property without a domain (or an object property without a range)
//! still needs two endpoints to be drawn. The provider synthesizes a single
//! `owl:Thing` class per run, on first need, and points every missing
//! endpoint at it.

use tracing::debug;

use crate::entity::{Class, ClassKind, DatatypeProperty, ObjectProperty, UNDEFINED_LANGUAGE};
use crate::error::RegistryError;
use crate::iri::Iri;
use crate::registry::Registry;

/// Lazily synthesizes the shared `owl:Thing` node.
#[derive(Debug, Default)]
pub struct ThingProvider {
    thing: Option<Iri>,
}

impl ThingProvider {
    /// Creates a provider that has not synthesized anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the IRI of the synthesized Thing, if it exists yet.
    #[must_use]
    pub fn synthesized(&self) -> Option<&Iri> {
        self.thing.as_ref()
    }

    /// Returns the shared Thing, registering it on first call.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError::Duplicate`] from the class insertion.
    pub fn thing(&mut self, registry: &mut Registry) -> Result<Iri, RegistryError> {
        if let Some(iri) = &self.thing {
            return Ok(iri.clone());
        }
        let iri = registry.get_new_iri();
        let mut class = Class::new(iri.clone(), ClassKind::Thing);
        class.annotations.set_label(UNDEFINED_LANGUAGE, "Thing");
        registry.add_class(class)?;
        debug!(iri = %iri, "synthesized owl:Thing");
        self.thing = Some(iri.clone());
        Ok(iri)
    }

    /// Points a missing domain or range of `property` at the Thing.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`ThingProvider::thing`].
    pub fn complete_object_property(
        &mut self,
        property: &mut ObjectProperty,
        registry: &mut Registry,
    ) -> Result<(), RegistryError> {
        if property.domains.is_empty() {
            property.domains.push(self.thing(registry)?);
        }
        if property.ranges.is_empty() {
            property.ranges.push(self.thing(registry)?);
        }
        Ok(())
    }

    /// Points a missing domain of `property` at the Thing.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`ThingProvider::thing`].
    pub fn complete_datatype_property(
        &mut self,
        property: &mut DatatypeProperty,
        registry: &mut Registry,
    ) -> Result<(), RegistryError> {
        if property.domains.is_empty() {
            property.domains.push(self.thing(registry)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ThingProvider;
    use crate::entity::{ClassKind, ObjectProperty};
    use crate::iri::Iri;
    use crate::registry::Registry;

    #[test]
    fn synthesizes_one_thing_per_run() {
        let mut registry = Registry::new();
        let mut provider = ThingProvider::new();
        assert!(provider.synthesized().is_none());

        let first = provider.thing(&mut registry).expect("thing");
        let second = provider.thing(&mut registry).expect("thing");
        assert_eq!(first, second);
        assert!(first.as_str().starts_with(registry.synthetic_prefix()));

        let class = registry.get_class_for_iri(&first).expect("registered");
        assert_eq!(class.kind, ClassKind::Thing);
        assert_eq!(registry.get_class_map().len(), 1);
    }

    #[test]
    fn fills_only_missing_endpoints() {
        let mut registry = Registry::new();
        let mut provider = ThingProvider::new();
        let range = Iri::new("http://ex#B").expect("valid iri");
        let mut property = ObjectProperty::new(Iri::new("http://ex#p").expect("valid iri"));
        property.ranges.push(range.clone());

        provider
            .complete_object_property(&mut property, &mut registry)
            .expect("completed");

        assert_eq!(property.domains.len(), 1);
        assert_eq!(Some(&property.domains[0]), provider.synthesized());
        assert_eq!(property.ranges, vec![range]);
    }
}
