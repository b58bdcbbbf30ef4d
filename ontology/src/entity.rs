//! OWL entities indexed by the registry.
//!
//! Entities are plain owned data. Once registered they are shared as
//! `Rc<T>` handles, and the allocation itself is the entity's identity:
//! two handles denote the same entity only if they point to the same
//! allocation, regardless of their IRIs. [`EntityRef`], [`NodeRef`] and
//! [`PropertyRef`] wrap those handles with the capability they expose.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::iri::Iri;

/// Language key used for literals that carry no language tag.
pub const UNDEFINED_LANGUAGE: &str = "undefined";

/// Language-keyed labels and comments of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// `rdfs:label` values keyed by language tag.
    pub labels: BTreeMap<String, String>,
    /// `rdfs:comment` values keyed by language tag.
    pub comments: BTreeMap<String, String>,
}

impl Annotations {
    /// Returns the label for `language`, if one was recorded.
    #[must_use]
    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels.get(language).map(String::as_str)
    }

    /// Records a label, replacing any previous label in the same language.
    pub fn set_label(&mut self, language: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(language.into(), label.into());
    }

    /// Records a comment, replacing any previous comment in the same language.
    pub fn set_comment(&mut self, language: impl Into<String>, comment: impl Into<String>) {
        self.comments.insert(language.into(), comment.into());
    }

    /// Returns true if neither labels nor comments were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.comments.is_empty()
    }
}

/// The flavor of a class node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// `owl:Class`.
    Owl,
    /// `rdfs:Class` without an `owl:Class` declaration.
    Rdfs,
    /// `owl:Thing`, declared or synthesized.
    Thing,
    /// A class referenced by the ontology but declared elsewhere.
    External,
    /// Anonymous or named `owl:unionOf` class.
    Union,
    /// Anonymous or named `owl:intersectionOf` class.
    Intersection,
    /// Anonymous or named `owl:complementOf` class.
    Complement,
    /// `owl:DeprecatedClass`, or a class annotated `owl:deprecated true`.
    Deprecated,
}

impl ClassKind {
    /// Returns the VOWL node type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ClassKind::Owl | ClassKind::External => "owl:Class",
            ClassKind::Rdfs => "rdfs:Class",
            ClassKind::Thing => "owl:Thing",
            ClassKind::Union => "owl:unionOf",
            ClassKind::Intersection => "owl:intersectionOf",
            ClassKind::Complement => "owl:complementOf",
            ClassKind::Deprecated => "owl:DeprecatedClass",
        }
    }
}

/// An OWL or RDFS class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    /// Full IRI, possibly synthetic for anonymous class expressions.
    pub iri: Iri,
    /// Node flavor.
    pub kind: ClassKind,
    /// Labels and comments.
    pub annotations: Annotations,
    /// `rdfs:subClassOf` targets.
    pub super_classes: Vec<Iri>,
    /// `owl:equivalentClass` targets.
    pub equivalents: Vec<Iri>,
    /// `owl:disjointWith` targets.
    pub disjoints: Vec<Iri>,
    /// Operands of a union, intersection or complement.
    pub members: Vec<Iri>,
}

impl Class {
    /// Creates a class with no annotations or relations.
    #[must_use]
    pub fn new(iri: Iri, kind: ClassKind) -> Self {
        Self {
            iri,
            kind,
            annotations: Annotations::default(),
            super_classes: Vec::new(),
            equivalents: Vec::new(),
            disjoints: Vec::new(),
            members: Vec::new(),
        }
    }
}

/// The flavor of a datatype node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatatypeKind {
    /// A concrete datatype such as `xsd:string`.
    Datatype,
    /// The generic `rdfs:Literal`.
    Literal,
}

impl DatatypeKind {
    /// Returns the VOWL node type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DatatypeKind::Datatype => "rdfs:Datatype",
            DatatypeKind::Literal => "rdfs:Literal",
        }
    }
}

/// An `rdfs:Datatype` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datatype {
    /// Full IRI.
    pub iri: Iri,
    /// Node flavor.
    pub kind: DatatypeKind,
    /// Labels and comments.
    pub annotations: Annotations,
}

impl Datatype {
    /// Creates a datatype with no annotations.
    #[must_use]
    pub fn new(iri: Iri, kind: DatatypeKind) -> Self {
        Self {
            iri,
            kind,
            annotations: Annotations::default(),
        }
    }
}

/// Logical characteristics rendered as property attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Characteristic {
    /// `owl:FunctionalProperty`.
    Functional,
    /// `owl:InverseFunctionalProperty`.
    InverseFunctional,
    /// `owl:TransitiveProperty`.
    Transitive,
    /// `owl:SymmetricProperty`.
    Symmetric,
    /// `owl:DeprecatedProperty` or `owl:deprecated true`.
    Deprecated,
}

impl Characteristic {
    /// Returns the VOWL attribute name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Characteristic::Functional => "functional",
            Characteristic::InverseFunctional => "inverse functional",
            Characteristic::Transitive => "transitive",
            Characteristic::Symmetric => "symmetric",
            Characteristic::Deprecated => "deprecated",
        }
    }
}

/// An `owl:ObjectProperty` relating two classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectProperty {
    /// Full IRI.
    pub iri: Iri,
    /// Labels and comments.
    pub annotations: Annotations,
    /// `rdfs:domain` classes.
    pub domains: Vec<Iri>,
    /// `rdfs:range` classes.
    pub ranges: Vec<Iri>,
    /// `owl:inverseOf` partner, if declared.
    pub inverse: Option<Iri>,
    /// `rdfs:subPropertyOf` targets.
    pub super_properties: Vec<Iri>,
    /// Declared characteristics, sorted and without duplicates.
    pub characteristics: Vec<Characteristic>,
}

impl ObjectProperty {
    /// Creates an object property with no endpoints.
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self {
            iri,
            annotations: Annotations::default(),
            domains: Vec::new(),
            ranges: Vec::new(),
            inverse: None,
            super_properties: Vec::new(),
            characteristics: Vec::new(),
        }
    }
}

/// An `owl:DatatypeProperty` relating a class to a datatype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatatypeProperty {
    /// Full IRI.
    pub iri: Iri,
    /// Labels and comments.
    pub annotations: Annotations,
    /// `rdfs:domain` classes.
    pub domains: Vec<Iri>,
    /// `rdfs:range` datatypes.
    pub ranges: Vec<Iri>,
    /// `rdfs:subPropertyOf` targets.
    pub super_properties: Vec<Iri>,
    /// Declared characteristics, sorted and without duplicates.
    pub characteristics: Vec<Characteristic>,
}

impl DatatypeProperty {
    /// Creates a datatype property with no endpoints.
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self {
            iri,
            annotations: Annotations::default(),
            domains: Vec::new(),
            ranges: Vec::new(),
            super_properties: Vec::new(),
            characteristics: Vec::new(),
        }
    }
}

/// An `rdf:type` edge from a class to the class it is an instance of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOfProperty {
    /// Synthetic IRI naming the edge.
    pub iri: Iri,
    /// The typed class.
    pub domain: Iri,
    /// The class used as its type.
    pub range: Iri,
}

/// An `owl:NamedIndividual`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// Full IRI.
    pub iri: Iri,
    /// Labels and comments.
    pub annotations: Annotations,
    /// Classes the individual is asserted to be an instance of.
    pub types: Vec<Iri>,
}

impl Individual {
    /// Creates an individual without type assertions.
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self {
            iri,
            annotations: Annotations::default(),
            types: Vec::new(),
        }
    }
}

/// Discriminates the six entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// [`Class`].
    Class,
    /// [`Datatype`].
    Datatype,
    /// [`ObjectProperty`].
    ObjectProperty,
    /// [`DatatypeProperty`].
    DatatypeProperty,
    /// [`TypeOfProperty`].
    TypeOfProperty,
    /// [`Individual`].
    Individual,
}

impl EntityKind {
    /// Returns the human-readable name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Datatype => "datatype",
            EntityKind::ObjectProperty => "object property",
            EntityKind::DatatypeProperty => "datatype property",
            EntityKind::TypeOfProperty => "type-of property",
            EntityKind::Individual => "individual",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer identity of a registered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Identity(*const ());

impl Identity {
    fn of<T>(rc: &Rc<T>) -> Self {
        Self(Rc::as_ptr(rc).cast::<()>())
    }
}

/// Shared handle to an entity of any kind.
#[derive(Debug, Clone)]
pub enum EntityRef {
    /// A class node.
    Class(Rc<Class>),
    /// A datatype node.
    Datatype(Rc<Datatype>),
    /// An object property.
    ObjectProperty(Rc<ObjectProperty>),
    /// A datatype property.
    DatatypeProperty(Rc<DatatypeProperty>),
    /// A type-of edge.
    TypeOfProperty(Rc<TypeOfProperty>),
    /// A named individual. Individuals can be numbered through
    /// [`Registry::get_id_for_entity`](crate::Registry::get_id_for_entity)
    /// but are never stored in the unified table.
    Individual(Rc<Individual>),
}

impl EntityRef {
    /// Returns the entity's IRI.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        match self {
            EntityRef::Class(c) => &c.iri,
            EntityRef::Datatype(d) => &d.iri,
            EntityRef::ObjectProperty(p) => &p.iri,
            EntityRef::DatatypeProperty(p) => &p.iri,
            EntityRef::TypeOfProperty(p) => &p.iri,
            EntityRef::Individual(i) => &i.iri,
        }
    }

    /// Returns the entity's kind.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Class(_) => EntityKind::Class,
            EntityRef::Datatype(_) => EntityKind::Datatype,
            EntityRef::ObjectProperty(_) => EntityKind::ObjectProperty,
            EntityRef::DatatypeProperty(_) => EntityKind::DatatypeProperty,
            EntityRef::TypeOfProperty(_) => EntityKind::TypeOfProperty,
            EntityRef::Individual(_) => EntityKind::Individual,
        }
    }

    /// Returns the entity's annotations. Type-of edges carry none.
    #[must_use]
    pub fn annotations(&self) -> Option<&Annotations> {
        match self {
            EntityRef::Class(c) => Some(&c.annotations),
            EntityRef::Datatype(d) => Some(&d.annotations),
            EntityRef::ObjectProperty(p) => Some(&p.annotations),
            EntityRef::DatatypeProperty(p) => Some(&p.annotations),
            EntityRef::TypeOfProperty(_) => None,
            EntityRef::Individual(i) => Some(&i.annotations),
        }
    }

    /// Narrows to the node capability, if the entity is a class or datatype.
    #[must_use]
    pub fn as_node(&self) -> Option<NodeRef> {
        match self {
            EntityRef::Class(c) => Some(NodeRef::Class(Rc::clone(c))),
            EntityRef::Datatype(d) => Some(NodeRef::Datatype(Rc::clone(d))),
            _ => None,
        }
    }

    /// Narrows to the property capability, if the entity is an object or
    /// datatype property.
    #[must_use]
    pub fn as_property(&self) -> Option<PropertyRef> {
        match self {
            EntityRef::ObjectProperty(p) => Some(PropertyRef::Object(Rc::clone(p))),
            EntityRef::DatatypeProperty(p) => Some(PropertyRef::Datatype(Rc::clone(p))),
            _ => None,
        }
    }

    /// Returns true if both handles point to the same entity.
    #[must_use]
    pub fn ptr_eq(&self, other: &EntityRef) -> bool {
        self.identity() == other.identity()
    }

    pub(crate) fn identity(&self) -> Identity {
        match self {
            EntityRef::Class(c) => Identity::of(c),
            EntityRef::Datatype(d) => Identity::of(d),
            EntityRef::ObjectProperty(p) => Identity::of(p),
            EntityRef::DatatypeProperty(p) => Identity::of(p),
            EntityRef::TypeOfProperty(p) => Identity::of(p),
            EntityRef::Individual(i) => Identity::of(i),
        }
    }
}

/// Shared handle to an entity that is a graph vertex.
#[derive(Debug, Clone)]
pub enum NodeRef {
    /// A class node.
    Class(Rc<Class>),
    /// A datatype node.
    Datatype(Rc<Datatype>),
}

impl NodeRef {
    /// Returns the node's IRI.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        match self {
            NodeRef::Class(c) => &c.iri,
            NodeRef::Datatype(d) => &d.iri,
        }
    }

    /// Returns the node's annotations.
    #[must_use]
    pub fn annotations(&self) -> &Annotations {
        match self {
            NodeRef::Class(c) => &c.annotations,
            NodeRef::Datatype(d) => &d.annotations,
        }
    }

    /// Returns the VOWL node type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeRef::Class(c) => c.kind.as_str(),
            NodeRef::Datatype(d) => d.kind.as_str(),
        }
    }
}

/// Shared handle to an entity that is a graph relation.
#[derive(Debug, Clone)]
pub enum PropertyRef {
    /// An object property.
    Object(Rc<ObjectProperty>),
    /// A datatype property.
    Datatype(Rc<DatatypeProperty>),
}

impl PropertyRef {
    /// Returns the property's IRI.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        match self {
            PropertyRef::Object(p) => &p.iri,
            PropertyRef::Datatype(p) => &p.iri,
        }
    }

    /// Returns the property's annotations.
    #[must_use]
    pub fn annotations(&self) -> &Annotations {
        match self {
            PropertyRef::Object(p) => &p.annotations,
            PropertyRef::Datatype(p) => &p.annotations,
        }
    }

    /// Returns the `rdfs:domain` IRIs.
    #[must_use]
    pub fn domains(&self) -> &[Iri] {
        match self {
            PropertyRef::Object(p) => &p.domains,
            PropertyRef::Datatype(p) => &p.domains,
        }
    }

    /// Returns the `rdfs:range` IRIs.
    #[must_use]
    pub fn ranges(&self) -> &[Iri] {
        match self {
            PropertyRef::Object(p) => &p.ranges,
            PropertyRef::Datatype(p) => &p.ranges,
        }
    }

    /// Returns the VOWL property type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyRef::Object(_) => "owl:ObjectProperty",
            PropertyRef::Datatype(_) => "owl:DatatypeProperty",
        }
    }
}

impl From<Rc<Class>> for EntityRef {
    fn from(value: Rc<Class>) -> Self {
        EntityRef::Class(value)
    }
}

impl From<Rc<Datatype>> for EntityRef {
    fn from(value: Rc<Datatype>) -> Self {
        EntityRef::Datatype(value)
    }
}

impl From<Rc<ObjectProperty>> for EntityRef {
    fn from(value: Rc<ObjectProperty>) -> Self {
        EntityRef::ObjectProperty(value)
    }
}

impl From<Rc<DatatypeProperty>> for EntityRef {
    fn from(value: Rc<DatatypeProperty>) -> Self {
        EntityRef::DatatypeProperty(value)
    }
}

impl From<Rc<TypeOfProperty>> for EntityRef {
    fn from(value: Rc<TypeOfProperty>) -> Self {
        EntityRef::TypeOfProperty(value)
    }
}

impl From<Rc<Individual>> for EntityRef {
    fn from(value: Rc<Individual>) -> Self {
        EntityRef::Individual(value)
    }
}

impl From<NodeRef> for EntityRef {
    fn from(value: NodeRef) -> Self {
        match value {
            NodeRef::Class(c) => EntityRef::Class(c),
            NodeRef::Datatype(d) => EntityRef::Datatype(d),
        }
    }
}

impl From<PropertyRef> for EntityRef {
    fn from(value: PropertyRef) -> Self {
        match value {
            PropertyRef::Object(p) => EntityRef::ObjectProperty(p),
            PropertyRef::Datatype(p) => EntityRef::DatatypeProperty(p),
        }
    }
}

impl From<&EntityRef> for EntityRef {
    fn from(value: &EntityRef) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    #[test]
    fn identity_follows_allocation_not_iri() {
        let a = EntityRef::from(Rc::new(Class::new(iri("http://ex#A"), ClassKind::Owl)));
        let twin = EntityRef::from(Rc::new(Class::new(iri("http://ex#A"), ClassKind::Owl)));
        assert!(a.ptr_eq(&a.clone()));
        assert!(!a.ptr_eq(&twin));
    }

    #[test]
    fn capabilities_narrow_by_kind() {
        let class = EntityRef::from(Rc::new(Class::new(iri("http://ex#A"), ClassKind::Owl)));
        assert!(class.as_node().is_some());
        assert!(class.as_property().is_none());

        let prop = EntityRef::from(Rc::new(ObjectProperty::new(iri("http://ex#p"))));
        assert!(prop.as_node().is_none());
        assert_eq!(
            prop.as_property().map(|p| p.type_name()),
            Some("owl:ObjectProperty")
        );

        let edge = EntityRef::from(Rc::new(TypeOfProperty {
            iri: iri("http://owl2vowl.de#0"),
            domain: iri("http://ex#A"),
            range: iri("http://ex#B"),
        }));
        assert!(edge.as_node().is_none());
        assert!(edge.as_property().is_none());
        assert!(edge.annotations().is_none());
    }

    #[test]
    fn kind_names_are_readable() {
        assert_eq!(EntityKind::DatatypeProperty.to_string(), "datatype property");
        assert_eq!(ClassKind::External.as_str(), "owl:Class");
        assert_eq!(DatatypeKind::Literal.as_str(), "rdfs:Literal");
    }
}
