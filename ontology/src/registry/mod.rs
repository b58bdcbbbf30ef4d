//! The entity registry shared by every conversion stage.
//!
//! Ingestion fills the typed tables through the `add_*` operations. Each
//! insertion into a class, datatype, object-property, datatype-property or
//! type-of-property table is mirrored into the unified entity table in the
//! same call. Individuals are kept in their own table only; they are not
//! part of the generated graph's node or property space.
//!
//! Later stages resolve IRIs through the `get_*_for_iri` operations, which
//! fail with [`RegistryError::NotFound`] or [`RegistryError::KindMismatch`]
//! instead of returning a default, and number entities through
//! [`Registry::get_id_for_entity`].
//!
//! # Views
//!
//! The `get_*_map` accessors and [`Registry::get_languages`] return live
//! borrowed views. [`Registry::get_properties`] returns a snapshot.
//!
//! # Examples
//!
//! ```
//! use vowl_ontology::{Class, ClassKind, Iri, Registry};
//!
//! let mut registry = Registry::new();
//! let iri = Iri::new("http://ex#A")?;
//! registry.add_class(Class::new(iri.clone(), ClassKind::Owl))?;
//! assert_eq!(registry.get_id_for_iri(&iri)?, "0");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod allocator;
pub mod generator;
pub mod languages;
pub mod table;

use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

pub use allocator::IdAllocator;
pub use generator::SyntheticIriGenerator;
pub use languages::LanguageTags;
pub use table::{EntityTable, Table, TypedTable};

use crate::config::{DuplicatePolicy, RegistryOptions};
use crate::entity::{
    Class, Datatype, DatatypeProperty, EntityKind, EntityRef, Individual, NodeRef,
    ObjectProperty, PropertyRef, TypeOfProperty,
};
use crate::error::{Lookup, RegistryError};
use crate::iri::{Iri, IriError};
use crate::vocab::SYNTHETIC_PREFIX;

/// Typed entity tables plus the derived unified table, output identifiers,
/// synthetic IRIs and observed language tags for one conversion run.
///
/// The registry is single-threaded: it uses `Rc` and `Cell` internally and
/// is neither `Send` nor `Sync`.
#[derive(Debug)]
pub struct Registry {
    duplicates: DuplicatePolicy,
    entities: EntityTable,
    classes: TypedTable<Class>,
    datatypes: TypedTable<Datatype>,
    object_properties: TypedTable<ObjectProperty>,
    datatype_properties: TypedTable<DatatypeProperty>,
    type_of_properties: TypedTable<TypeOfProperty>,
    individuals: TypedTable<Individual>,
    ids: IdAllocator,
    iris: SyntheticIriGenerator,
    languages: LanguageTags,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::build(
            DuplicatePolicy::default(),
            SyntheticIriGenerator::new_unchecked(SYNTHETIC_PREFIX.to_owned()),
        )
    }

    /// Creates an empty registry with `options`.
    ///
    /// # Errors
    ///
    /// Returns [`IriError::Invalid`] if the synthetic prefix cannot form an IRI.
    pub fn with_options(options: RegistryOptions) -> Result<Self, IriError> {
        let iris = SyntheticIriGenerator::new(options.synthetic_prefix)?;
        Ok(Self::build(options.duplicates, iris))
    }

    fn build(duplicates: DuplicatePolicy, iris: SyntheticIriGenerator) -> Self {
        Self {
            duplicates,
            entities: Table::default(),
            classes: Table::default(),
            datatypes: Table::default(),
            object_properties: Table::default(),
            datatype_properties: Table::default(),
            type_of_properties: Table::default(),
            individuals: Table::default(),
            ids: IdAllocator::new(),
            iris,
            languages: LanguageTags::default(),
        }
    }

    /// Returns the active duplicate policy.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    // ------------------------------------------------------------------
    // Ingestion
    // ------------------------------------------------------------------

    /// Registers a class and mirrors it into the unified table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the IRI is taken and the
    /// policy is [`DuplicatePolicy::Reject`].
    pub fn add_class(&mut self, class: Class) -> Result<Rc<Class>, RegistryError> {
        let class = Rc::new(class);
        self.insert(EntityRef::Class(Rc::clone(&class)))?;
        Ok(class)
    }

    /// Registers a datatype and mirrors it into the unified table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the IRI is taken and the
    /// policy is [`DuplicatePolicy::Reject`].
    pub fn add_datatype(&mut self, datatype: Datatype) -> Result<Rc<Datatype>, RegistryError> {
        let datatype = Rc::new(datatype);
        self.insert(EntityRef::Datatype(Rc::clone(&datatype)))?;
        Ok(datatype)
    }

    /// Registers an object property and mirrors it into the unified table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the IRI is taken and the
    /// policy is [`DuplicatePolicy::Reject`].
    pub fn add_object_property(
        &mut self,
        property: ObjectProperty,
    ) -> Result<Rc<ObjectProperty>, RegistryError> {
        let property = Rc::new(property);
        self.insert(EntityRef::ObjectProperty(Rc::clone(&property)))?;
        Ok(property)
    }

    /// Registers a datatype property and mirrors it into the unified table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the IRI is taken and the
    /// policy is [`DuplicatePolicy::Reject`].
    pub fn add_datatype_property(
        &mut self,
        property: DatatypeProperty,
    ) -> Result<Rc<DatatypeProperty>, RegistryError> {
        let property = Rc::new(property);
        self.insert(EntityRef::DatatypeProperty(Rc::clone(&property)))?;
        Ok(property)
    }

    /// Registers a type-of edge and mirrors it into the unified table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the IRI is taken and the
    /// policy is [`DuplicatePolicy::Reject`].
    pub fn add_type_of_property(
        &mut self,
        property: TypeOfProperty,
    ) -> Result<Rc<TypeOfProperty>, RegistryError> {
        let property = Rc::new(property);
        self.insert(EntityRef::TypeOfProperty(Rc::clone(&property)))?;
        Ok(property)
    }

    /// Registers an individual. Individuals are not mirrored into the
    /// unified table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the IRI is taken and the
    /// policy is [`DuplicatePolicy::Reject`].
    pub fn add_individual(
        &mut self,
        individual: Individual,
    ) -> Result<Rc<Individual>, RegistryError> {
        if self.duplicates == DuplicatePolicy::Reject && self.individuals.contains(&individual.iri)
        {
            return Err(RegistryError::Duplicate {
                kind: EntityKind::Individual,
                iri: individual.iri,
            });
        }
        let individual = Rc::new(individual);
        self.individuals
            .put(individual.iri.clone(), Rc::clone(&individual));
        Ok(individual)
    }

    /// Records a language tag seen on a literal.
    pub fn add_language(&mut self, tag: impl Into<String>) {
        self.languages.add(tag);
    }

    /// Inserts into the typed table and the unified table in one step.
    ///
    /// A displaced entity of another kind is evicted from its own typed
    /// table, so every merged typed entry always has the identical entity
    /// in the unified table.
    fn insert(&mut self, entity: EntityRef) -> Result<(), RegistryError> {
        let iri = entity.iri().clone();
        if self.duplicates == DuplicatePolicy::Reject {
            if let Some(existing) = self.entities.get(&iri) {
                return Err(RegistryError::Duplicate {
                    kind: existing.kind(),
                    iri,
                });
            }
        }
        let kind = entity.kind();
        self.put_typed(&entity);
        if let Some(displaced) = self.entities.put(iri, entity) {
            if displaced.kind() != kind {
                self.evict_typed(&displaced);
            }
        }
        Ok(())
    }

    fn put_typed(&mut self, entity: &EntityRef) {
        match entity {
            EntityRef::Class(c) => {
                self.classes.put(c.iri.clone(), Rc::clone(c));
            }
            EntityRef::Datatype(d) => {
                self.datatypes.put(d.iri.clone(), Rc::clone(d));
            }
            EntityRef::ObjectProperty(p) => {
                self.object_properties.put(p.iri.clone(), Rc::clone(p));
            }
            EntityRef::DatatypeProperty(p) => {
                self.datatype_properties.put(p.iri.clone(), Rc::clone(p));
            }
            EntityRef::TypeOfProperty(p) => {
                self.type_of_properties.put(p.iri.clone(), Rc::clone(p));
            }
            // `add_individual` bypasses `insert`.
            EntityRef::Individual(_) => {}
        }
    }

    fn evict_typed(&mut self, entity: &EntityRef) {
        let iri = entity.iri();
        match entity.kind() {
            EntityKind::Class => {
                self.classes.remove(iri);
            }
            EntityKind::Datatype => {
                self.datatypes.remove(iri);
            }
            EntityKind::ObjectProperty => {
                self.object_properties.remove(iri);
            }
            EntityKind::DatatypeProperty => {
                self.datatype_properties.remove(iri);
            }
            EntityKind::TypeOfProperty => {
                self.type_of_properties.remove(iri);
            }
            // Never in the unified table, so never displaced from it.
            EntityKind::Individual => {}
        }
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Resolves a class.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no class has this IRI.
    pub fn get_class_for_iri(&self, iri: &Iri) -> Result<Rc<Class>, RegistryError> {
        resolve(&self.classes, Lookup::Class, iri)
    }

    /// Resolves a datatype.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no datatype has this IRI.
    pub fn get_datatype_for_iri(&self, iri: &Iri) -> Result<Rc<Datatype>, RegistryError> {
        resolve(&self.datatypes, Lookup::Datatype, iri)
    }

    /// Resolves an object property.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no object property has this IRI.
    pub fn get_object_property_for_iri(
        &self,
        iri: &Iri,
    ) -> Result<Rc<ObjectProperty>, RegistryError> {
        resolve(&self.object_properties, Lookup::ObjectProperty, iri)
    }

    /// Resolves a datatype property.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no datatype property has this IRI.
    pub fn get_datatype_property_for_iri(
        &self,
        iri: &Iri,
    ) -> Result<Rc<DatatypeProperty>, RegistryError> {
        resolve(&self.datatype_properties, Lookup::DatatypeProperty, iri)
    }

    /// Resolves a type-of edge.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no type-of edge has this IRI.
    pub fn get_type_of_property_for_iri(
        &self,
        iri: &Iri,
    ) -> Result<Rc<TypeOfProperty>, RegistryError> {
        resolve(&self.type_of_properties, Lookup::TypeOfProperty, iri)
    }

    /// Resolves an individual.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no individual has this IRI.
    pub fn get_individual_for_iri(&self, iri: &Iri) -> Result<Rc<Individual>, RegistryError> {
        resolve(&self.individuals, Lookup::Individual, iri)
    }

    /// Resolves any entity in the unified table.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the unified table has no entry
    /// for this IRI. Individuals are never found here.
    pub fn get_entity_for_iri(&self, iri: &Iri) -> Result<EntityRef, RegistryError> {
        resolve(&self.entities, Lookup::Entity, iri)
    }

    /// Resolves an entity and narrows it to a property.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the IRI is unknown, or
    /// [`RegistryError::KindMismatch`] if it is not an object or datatype
    /// property.
    pub fn get_property_for_iri(&self, iri: &Iri) -> Result<PropertyRef, RegistryError> {
        let entity = resolve(&self.entities, Lookup::Property, iri)?;
        entity
            .as_property()
            .ok_or_else(|| RegistryError::KindMismatch {
                iri: iri.clone(),
                expected: Lookup::Property,
                found: entity.kind(),
            })
    }

    /// Resolves an entity and narrows it to a node.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the IRI is unknown, or
    /// [`RegistryError::KindMismatch`] if it is not a class or datatype.
    pub fn get_node_for_iri(&self, iri: &Iri) -> Result<NodeRef, RegistryError> {
        let entity = resolve(&self.entities, Lookup::Node, iri)?;
        entity.as_node().ok_or_else(|| RegistryError::KindMismatch {
            iri: iri.clone(),
            expected: Lookup::Node,
            found: entity.kind(),
        })
    }

    /// Returns true if the unified table or the individual table holds `iri`.
    #[must_use]
    pub fn contains(&self, iri: &Iri) -> bool {
        self.entities.contains(iri) || self.individuals.contains(iri)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Live view of the unified table.
    #[must_use]
    pub fn get_entity_map(&self) -> &EntityTable {
        &self.entities
    }

    /// Live view of the class table.
    #[must_use]
    pub fn get_class_map(&self) -> &TypedTable<Class> {
        &self.classes
    }

    /// Live view of the datatype table.
    #[must_use]
    pub fn get_datatype_map(&self) -> &TypedTable<Datatype> {
        &self.datatypes
    }

    /// Live view of the object-property table.
    #[must_use]
    pub fn get_object_property_map(&self) -> &TypedTable<ObjectProperty> {
        &self.object_properties
    }

    /// Live view of the datatype-property table.
    #[must_use]
    pub fn get_datatype_property_map(&self) -> &TypedTable<DatatypeProperty> {
        &self.datatype_properties
    }

    /// Live view of the type-of-property table.
    #[must_use]
    pub fn get_type_of_property_map(&self) -> &TypedTable<TypeOfProperty> {
        &self.type_of_properties
    }

    /// Live view of the individual table.
    #[must_use]
    pub fn get_individual_map(&self) -> &TypedTable<Individual> {
        &self.individuals
    }

    /// Snapshot of every object and datatype property, in IRI order.
    ///
    /// Each entity appears once even if it were reachable from both tables.
    #[must_use]
    pub fn get_properties(&self) -> Vec<PropertyRef> {
        let mut properties: Vec<PropertyRef> = self
            .object_properties
            .values()
            .map(|p| PropertyRef::Object(Rc::clone(p)))
            .chain(
                self.datatype_properties
                    .values()
                    .map(|p| PropertyRef::Datatype(Rc::clone(p))),
            )
            .collect();
        properties.sort_by(|a, b| a.iri().cmp(b.iri()));
        let mut seen = HashSet::new();
        properties.retain(|p| seen.insert(EntityRef::from(p.clone()).identity()));
        properties
    }

    /// Live view of the language tags recorded during ingestion.
    #[must_use]
    pub fn get_languages(&self) -> &BTreeSet<String> {
        self.languages.all()
    }

    // ------------------------------------------------------------------
    // Identifiers
    // ------------------------------------------------------------------

    /// Returns the output identifier of `entity`, assigning the next free
    /// one on first request.
    pub fn get_id_for_entity(&self, entity: impl Into<EntityRef>) -> String {
        self.ids.id_for(&entity.into())
    }

    /// Resolves `iri` in the unified table and returns its output identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the IRI is not in the unified table.
    pub fn get_id_for_iri(&self, iri: &Iri) -> Result<String, RegistryError> {
        let entity = self.get_entity_for_iri(iri)?;
        Ok(self.ids.id_for(&entity))
    }

    /// Returns a fresh synthetic IRI.
    pub fn get_new_iri(&self) -> Iri {
        self.iris.generate()
    }

    /// Returns the prefix shared by every synthetic IRI.
    #[must_use]
    pub fn synthetic_prefix(&self) -> &str {
        self.iris.prefix()
    }
}

fn resolve<V: Clone>(table: &Table<V>, lookup: Lookup, iri: &Iri) -> Result<V, RegistryError> {
    table
        .get(iri)
        .cloned()
        .ok_or_else(|| RegistryError::not_found(lookup, iri))
}
