//! Turtle ingestion.
//!
//! The document is parsed into a `TripleIndex` and then walked in a fixed
//! order: language tags, classes, datatypes, properties, referenced but
//! undeclared endpoints, `rdf:type` edges between classes, and finally
//! individuals. Each stage only reads the registry state produced by the
//! stages before it.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, info, warn};

use super::graph::{Node, TripleIndex};
use super::{LoadError, LoadSummary};
use crate::config::DuplicatePolicy;
use crate::entity::{
    Annotations, Characteristic, Class, ClassKind, Datatype, DatatypeKind, DatatypeProperty,
    EntityKind, Individual, ObjectProperty, TypeOfProperty, UNDEFINED_LANGUAGE,
};
use crate::iri::Iri;
use crate::registry::Registry;
use crate::thing::ThingProvider;
use crate::vocab::{
    is_builtin, OWL_CLASS, OWL_COMPLEMENT_OF, OWL_DATATYPE_PROPERTY, OWL_DEPRECATED,
    OWL_DEPRECATED_CLASS, OWL_DEPRECATED_PROPERTY, OWL_DISJOINT_WITH, OWL_EQUIVALENT_CLASS,
    OWL_FUNCTIONAL_PROPERTY, OWL_INTERSECTION_OF, OWL_INVERSE_FUNCTIONAL_PROPERTY,
    OWL_INVERSE_OF, OWL_NAMED_INDIVIDUAL, OWL_OBJECT_PROPERTY, OWL_SYMMETRIC_PROPERTY, OWL_THING,
    OWL_TRANSITIVE_PROPERTY, OWL_UNION_OF, RDFS_CLASS, RDFS_COMMENT, RDFS_DATATYPE, RDFS_DOMAIN,
    RDFS_LABEL, RDFS_LITERAL, RDFS_RANGE, RDFS_SUB_CLASS_OF, RDFS_SUB_PROPERTY_OF,
};

const CLASS_TYPES: [&str; 3] = [OWL_CLASS, RDFS_CLASS, OWL_DEPRECATED_CLASS];
const CLASS_OPERATORS: [&str; 3] = [OWL_UNION_OF, OWL_INTERSECTION_OF, OWL_COMPLEMENT_OF];
const OBJECT_PROPERTY_TYPES: [&str; 4] = [
    OWL_OBJECT_PROPERTY,
    OWL_INVERSE_FUNCTIONAL_PROPERTY,
    OWL_TRANSITIVE_PROPERTY,
    OWL_SYMMETRIC_PROPERTY,
];

/// Reads and ingests a Turtle file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, and otherwise the
/// errors of [`load_str`].
pub fn load_path(
    path: impl AsRef<Path>,
    registry: &mut Registry,
) -> Result<LoadSummary, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read ontology");
    load_str(&source, registry)
}

/// Ingests a Turtle document into `registry`.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed Turtle, [`LoadError::Iri`]
/// for a term that is not an absolute IRI, and [`LoadError::Registry`] if
/// the registry rejects a duplicate.
pub fn load_str(source: &str, registry: &mut Registry) -> Result<LoadSummary, LoadError> {
    let graph = TripleIndex::parse(source)?;
    Ingest::new(&graph, registry).run()?;
    let summary = LoadSummary::from(&*registry);
    info!(
        classes = summary.classes,
        datatypes = summary.datatypes,
        object_properties = summary.object_properties,
        datatype_properties = summary.datatype_properties,
        type_of_properties = summary.type_of_properties,
        individuals = summary.individuals,
        languages = summary.languages,
        "loaded ontology"
    );
    Ok(summary)
}

struct Ingest<'a> {
    graph: &'a TripleIndex,
    registry: &'a mut Registry,
    things: ThingProvider,
    /// Synthetic IRIs of blank-node class expressions, by blank node label.
    anonymous: BTreeMap<String, Iri>,
    referenced_classes: BTreeSet<Iri>,
    referenced_datatypes: BTreeSet<Iri>,
}

impl<'a> Ingest<'a> {
    fn new(graph: &'a TripleIndex, registry: &'a mut Registry) -> Self {
        Self {
            graph,
            registry,
            things: ThingProvider::new(),
            anonymous: BTreeMap::new(),
            referenced_classes: BTreeSet::new(),
            referenced_datatypes: BTreeSet::new(),
        }
    }

    fn run(mut self) -> Result<(), LoadError> {
        for tag in self.graph.language_tags() {
            self.registry.add_language(tag);
        }
        self.name_anonymous_classes();
        self.classes()?;
        self.datatypes()?;
        self.properties()?;
        self.referenced_endpoints()?;
        self.type_of_edges()?;
        self.individuals()
    }

    fn name_anonymous_classes(&mut self) {
        let graph = self.graph;
        for subject in graph.subjects() {
            if let Node::Blank(label) = subject {
                if is_class(graph, subject) {
                    self.anonymous
                        .insert(label.clone(), self.registry.get_new_iri());
                }
            }
        }
    }

    fn classes(&mut self) -> Result<(), LoadError> {
        let graph = self.graph;
        for subject in graph.subjects() {
            if !is_class(graph, subject) {
                continue;
            }
            let Some(iri) = self.reference(subject)? else {
                continue;
            };
            if iri.as_str() != OWL_THING && is_builtin(iri.as_str()) {
                debug!(iri = %iri, "skipping vocabulary class");
                continue;
            }
            let mut class = Class::new(iri, class_kind(graph, subject));
            class.annotations = annotations(graph, subject);
            class.super_classes = self.references(subject, RDFS_SUB_CLASS_OF)?;
            class.equivalents = self.references(subject, OWL_EQUIVALENT_CLASS)?;
            class.disjoints = self.references(subject, OWL_DISJOINT_WITH)?;
            class.members = self.members(subject)?;
            self.referenced_classes.extend(
                class
                    .super_classes
                    .iter()
                    .chain(&class.equivalents)
                    .chain(&class.disjoints)
                    .chain(&class.members)
                    .cloned(),
            );
            self.warn_on_overwrite(&class.iri, EntityKind::Class);
            self.registry.add_class(class)?;
        }
        Ok(())
    }

    fn datatypes(&mut self) -> Result<(), LoadError> {
        let graph = self.graph;
        for subject in graph.subjects() {
            if !graph.has_type(subject, RDFS_DATATYPE) {
                continue;
            }
            let Some(name) = subject.as_iri() else {
                debug!("skipping anonymous datatype");
                continue;
            };
            let iri = Iri::new(name)?;
            let kind = datatype_kind(&iri);
            let mut datatype = Datatype::new(iri, kind);
            datatype.annotations = annotations(graph, subject);
            self.warn_on_overwrite(&datatype.iri, EntityKind::Datatype);
            self.registry.add_datatype(datatype)?;
        }
        Ok(())
    }

    fn properties(&mut self) -> Result<(), LoadError> {
        let graph = self.graph;
        for subject in graph.subjects() {
            let Some(name) = subject.as_iri() else {
                continue;
            };
            if OBJECT_PROPERTY_TYPES
                .iter()
                .any(|t| graph.has_type(subject, t))
            {
                self.object_property(subject, Iri::new(name)?)?;
            } else if graph.has_type(subject, OWL_DATATYPE_PROPERTY) {
                self.datatype_property(subject, Iri::new(name)?)?;
            }
        }
        Ok(())
    }

    fn object_property(&mut self, subject: &Node, iri: Iri) -> Result<(), LoadError> {
        let graph = self.graph;
        let mut property = ObjectProperty::new(iri);
        property.annotations = annotations(graph, subject);
        property.domains = self.references(subject, RDFS_DOMAIN)?;
        property.ranges = self.references(subject, RDFS_RANGE)?;
        property.inverse = graph
            .first_object(subject, OWL_INVERSE_OF)
            .and_then(Node::as_iri)
            .map(Iri::new)
            .transpose()?;
        property.super_properties = named_objects(graph, subject, RDFS_SUB_PROPERTY_OF)?;
        property.characteristics = characteristics(graph, subject);
        self.referenced_classes
            .extend(property.domains.iter().chain(&property.ranges).cloned());

        self.things
            .complete_object_property(&mut property, self.registry)?;
        self.warn_on_overwrite(&property.iri, EntityKind::ObjectProperty);
        self.registry.add_object_property(property)?;
        Ok(())
    }

    fn datatype_property(&mut self, subject: &Node, iri: Iri) -> Result<(), LoadError> {
        let graph = self.graph;
        let mut property = DatatypeProperty::new(iri);
        property.annotations = annotations(graph, subject);
        property.domains = self.references(subject, RDFS_DOMAIN)?;
        property.ranges = named_objects(graph, subject, RDFS_RANGE)?;
        if property.ranges.is_empty() {
            property.ranges.push(Iri::new(RDFS_LITERAL)?);
        }
        property.super_properties = named_objects(graph, subject, RDFS_SUB_PROPERTY_OF)?;
        property.characteristics = characteristics(graph, subject);
        self.referenced_classes.extend(property.domains.iter().cloned());
        self.referenced_datatypes
            .extend(property.ranges.iter().cloned());

        self.things
            .complete_datatype_property(&mut property, self.registry)?;
        self.warn_on_overwrite(&property.iri, EntityKind::DatatypeProperty);
        self.registry.add_datatype_property(property)?;
        Ok(())
    }

    /// Registers endpoints that are referenced but never declared.
    fn referenced_endpoints(&mut self) -> Result<(), LoadError> {
        let graph = self.graph;
        for iri in std::mem::take(&mut self.referenced_classes) {
            if self.registry.get_entity_for_iri(&iri).is_ok() {
                continue;
            }
            let kind = if iri.as_str() == OWL_THING {
                ClassKind::Thing
            } else {
                ClassKind::External
            };
            debug!(iri = %iri, "registering undeclared class");
            let subject = Node::Iri(iri.as_str().to_owned());
            let mut class = Class::new(iri, kind);
            class.annotations = annotations(graph, &subject);
            self.registry.add_class(class)?;
        }
        for iri in std::mem::take(&mut self.referenced_datatypes) {
            if self.registry.get_entity_for_iri(&iri).is_ok() {
                continue;
            }
            debug!(iri = %iri, "registering undeclared datatype");
            let kind = datatype_kind(&iri);
            self.registry.add_datatype(Datatype::new(iri, kind))?;
        }
        Ok(())
    }

    /// Adds an `rdf:type` edge for every class typed with another registered class.
    fn type_of_edges(&mut self) -> Result<(), LoadError> {
        let graph = self.graph;
        let classes: Vec<Rc<Class>> = self.registry.get_class_map().values().cloned().collect();
        for class in classes {
            let subject = Node::Iri(class.iri.as_str().to_owned());
            for type_iri in graph.types(&subject) {
                if is_builtin(type_iri) || type_iri == class.iri.as_str() {
                    continue;
                }
                let range = Iri::new(type_iri)?;
                if self.registry.get_class_for_iri(&range).is_err() {
                    continue;
                }
                let edge = TypeOfProperty {
                    iri: self.registry.get_new_iri(),
                    domain: class.iri.clone(),
                    range,
                };
                debug!(domain = %edge.domain, range = %edge.range, "adding rdf:type edge");
                self.registry.add_type_of_property(edge)?;
            }
        }
        Ok(())
    }

    /// Registers named individuals and instances of registered classes.
    fn individuals(&mut self) -> Result<(), LoadError> {
        let graph = self.graph;
        for subject in graph.subjects() {
            let Some(name) = subject.as_iri() else {
                continue;
            };
            let mut types = Vec::new();
            for type_iri in graph.types(subject).filter(|t| !is_builtin(t)) {
                let type_iri = Iri::new(type_iri)?;
                if self.registry.get_class_for_iri(&type_iri).is_ok() {
                    types.push(type_iri);
                }
            }
            if types.is_empty() && !graph.has_type(subject, OWL_NAMED_INDIVIDUAL) {
                continue;
            }
            let iri = Iri::new(name)?;
            if self.registry.get_entity_for_iri(&iri).is_ok() {
                continue;
            }
            let mut individual = Individual::new(iri);
            individual.annotations = annotations(graph, subject);
            individual.types = types;
            self.registry.add_individual(individual)?;
        }
        Ok(())
    }

    /// Resolves a subject or object to a registrable IRI.
    ///
    /// Blank nodes resolve only if they are class expressions named by
    /// [`Ingest::name_anonymous_classes`]; restrictions and other anonymous
    /// constructs are skipped.
    fn reference(&self, node: &Node) -> Result<Option<Iri>, LoadError> {
        match node {
            Node::Iri(iri) => Ok(Some(Iri::new(iri.as_str())?)),
            Node::Blank(label) => {
                let named = self.anonymous.get(label).cloned();
                if named.is_none() {
                    debug!(label = %label, "skipping unsupported anonymous expression");
                }
                Ok(named)
            }
            Node::Literal(_) => Ok(None),
        }
    }

    fn references(&self, subject: &Node, predicate: &str) -> Result<Vec<Iri>, LoadError> {
        let mut iris = Vec::new();
        for object in self.graph.objects(subject, predicate) {
            if let Some(iri) = self.reference(object)? {
                iris.push(iri);
            }
        }
        Ok(iris)
    }

    fn members(&self, subject: &Node) -> Result<Vec<Iri>, LoadError> {
        let graph = self.graph;
        let operands = [OWL_UNION_OF, OWL_INTERSECTION_OF]
            .iter()
            .find_map(|operator| graph.first_object(subject, operator))
            .map(|head| graph.list(head));
        let operands = match operands {
            Some(items) => items,
            None => graph
                .first_object(subject, OWL_COMPLEMENT_OF)
                .cloned()
                .into_iter()
                .collect(),
        };
        let mut members = Vec::new();
        for operand in &operands {
            if let Some(iri) = self.reference(operand)? {
                members.push(iri);
            }
        }
        Ok(members)
    }

    fn warn_on_overwrite(&self, iri: &Iri, kind: EntityKind) {
        if self.registry.duplicate_policy() != DuplicatePolicy::Overwrite {
            return;
        }
        if let Ok(existing) = self.registry.get_entity_for_iri(iri) {
            warn!(
                iri = %iri,
                existing = %existing.kind(),
                replacement = %kind,
                "IRI defined twice, keeping the later definition"
            );
        }
    }
}

fn is_class(graph: &TripleIndex, subject: &Node) -> bool {
    if graph.has_type(subject, RDFS_DATATYPE) {
        return false;
    }
    CLASS_TYPES.iter().any(|t| graph.has_type(subject, t))
        || CLASS_OPERATORS
            .iter()
            .any(|p| graph.first_object(subject, p).is_some())
}

fn class_kind(graph: &TripleIndex, subject: &Node) -> ClassKind {
    if subject.as_iri() == Some(OWL_THING) {
        ClassKind::Thing
    } else if graph.first_object(subject, OWL_UNION_OF).is_some() {
        ClassKind::Union
    } else if graph.first_object(subject, OWL_INTERSECTION_OF).is_some() {
        ClassKind::Intersection
    } else if graph.first_object(subject, OWL_COMPLEMENT_OF).is_some() {
        ClassKind::Complement
    } else if graph.has_type(subject, OWL_DEPRECATED_CLASS) || is_deprecated(graph, subject) {
        ClassKind::Deprecated
    } else if graph.has_type(subject, OWL_CLASS) {
        ClassKind::Owl
    } else {
        ClassKind::Rdfs
    }
}

fn datatype_kind(iri: &Iri) -> DatatypeKind {
    if iri.as_str() == RDFS_LITERAL {
        DatatypeKind::Literal
    } else {
        DatatypeKind::Datatype
    }
}

fn characteristics(graph: &TripleIndex, subject: &Node) -> Vec<Characteristic> {
    let mut found: Vec<Characteristic> = graph
        .types(subject)
        .filter_map(|t| match t {
            OWL_FUNCTIONAL_PROPERTY => Some(Characteristic::Functional),
            OWL_INVERSE_FUNCTIONAL_PROPERTY => Some(Characteristic::InverseFunctional),
            OWL_TRANSITIVE_PROPERTY => Some(Characteristic::Transitive),
            OWL_SYMMETRIC_PROPERTY => Some(Characteristic::Symmetric),
            OWL_DEPRECATED_PROPERTY => Some(Characteristic::Deprecated),
            _ => None,
        })
        .collect();
    if is_deprecated(graph, subject) {
        found.push(Characteristic::Deprecated);
    }
    found.sort_unstable();
    found.dedup();
    found
}

fn is_deprecated(graph: &TripleIndex, subject: &Node) -> bool {
    graph
        .objects(subject, OWL_DEPRECATED)
        .filter_map(Node::as_literal)
        .any(|literal| matches!(literal.lexical.as_str(), "true" | "1"))
}

/// Labels and comments of `subject`, keyed by language.
fn annotations(graph: &TripleIndex, subject: &Node) -> Annotations {
    let mut annotations = Annotations::default();
    for literal in graph.objects(subject, RDFS_LABEL).filter_map(Node::as_literal) {
        let language = literal.language.as_deref().unwrap_or(UNDEFINED_LANGUAGE);
        annotations.set_label(language, literal.lexical.as_str());
    }
    for literal in graph
        .objects(subject, RDFS_COMMENT)
        .filter_map(Node::as_literal)
    {
        let language = literal.language.as_deref().unwrap_or(UNDEFINED_LANGUAGE);
        annotations.set_comment(language, literal.lexical.as_str());
    }
    annotations
}

/// IRI objects of `(subject, predicate, ?)`; blank nodes and literals are ignored.
fn named_objects(
    graph: &TripleIndex,
    subject: &Node,
    predicate: &str,
) -> Result<Vec<Iri>, LoadError> {
    graph
        .objects(subject, predicate)
        .filter_map(Node::as_iri)
        .map(|iri| Iri::new(iri).map_err(LoadError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::load_str;
    use crate::config::{DuplicatePolicy, RegistryOptions};
    use crate::entity::{Characteristic, ClassKind, DatatypeKind};
    use crate::iri::Iri;
    use crate::loader::LoadError;
    use crate::registry::Registry;
    use crate::RegistryError;

    const PREFIXES: &str = r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
        @prefix ex: <http://example.org/onto#> .
    "#;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    fn load(body: &str) -> Registry {
        let mut registry = Registry::new();
        load_str(&format!("{PREFIXES}{body}"), &mut registry).expect("loads");
        registry
    }

    #[test]
    fn loads_classes_with_annotations() {
        let registry = load(
            r#"
            ex:Person a owl:Class ;
                rdfs:label "Person"@en, "Persona"@es ;
                rdfs:comment "A human being." .
            ex:Student a owl:Class ;
                rdfs:subClassOf ex:Person .
            "#,
        );
        let person = registry
            .get_class_for_iri(&iri("http://example.org/onto#Person"))
            .expect("person");
        assert_eq!(person.kind, ClassKind::Owl);
        assert_eq!(person.annotations.label("es"), Some("Persona"));
        assert_eq!(
            person.annotations.comments.get("undefined").map(String::as_str),
            Some("A human being.")
        );
        let student = registry
            .get_class_for_iri(&iri("http://example.org/onto#Student"))
            .expect("student");
        assert_eq!(student.super_classes, vec![person.iri.clone()]);

        let languages: Vec<&str> = registry.get_languages().iter().map(String::as_str).collect();
        assert_eq!(languages, vec!["en", "es"]);
    }

    #[test]
    fn anonymous_union_gets_synthetic_iri() {
        let registry = load(
            r#"
            ex:Mother a owl:Class .
            ex:Father a owl:Class .
            ex:Parent a owl:Class ;
                owl:equivalentClass [ a owl:Class ; owl:unionOf ( ex:Mother ex:Father ) ] .
            "#,
        );
        let parent = registry
            .get_class_for_iri(&iri("http://example.org/onto#Parent"))
            .expect("parent");
        assert_eq!(parent.equivalents.len(), 1);
        let union = registry
            .get_class_for_iri(&parent.equivalents[0])
            .expect("union registered");
        assert_eq!(union.kind, ClassKind::Union);
        assert!(union.iri.as_str().starts_with(registry.synthetic_prefix()));
        assert_eq!(union.members.len(), 2);
    }

    #[test]
    fn properties_get_endpoints() {
        let registry = load(
            r#"
            ex:Person a owl:Class .
            ex:knows a owl:ObjectProperty, owl:SymmetricProperty ;
                rdfs:domain ex:Person .
            ex:age a owl:DatatypeProperty, owl:FunctionalProperty ;
                rdfs:domain ex:Person ;
                rdfs:range xsd:integer .
            ex:nickname a owl:DatatypeProperty .
            "#,
        );
        let knows = registry
            .get_object_property_for_iri(&iri("http://example.org/onto#knows"))
            .expect("knows");
        assert_eq!(knows.characteristics, vec![Characteristic::Symmetric]);
        let thing = registry.get_class_for_iri(&knows.ranges[0]).expect("thing");
        assert_eq!(thing.kind, ClassKind::Thing);

        let age = registry
            .get_datatype_property_for_iri(&iri("http://example.org/onto#age"))
            .expect("age");
        assert_eq!(age.characteristics, vec![Characteristic::Functional]);
        let integer = registry.get_datatype_for_iri(&age.ranges[0]).expect("xsd:integer");
        assert_eq!(integer.kind, DatatypeKind::Datatype);

        let nickname = registry
            .get_datatype_property_for_iri(&iri("http://example.org/onto#nickname"))
            .expect("nickname");
        let literal = registry
            .get_datatype_for_iri(&nickname.ranges[0])
            .expect("rdfs:Literal");
        assert_eq!(literal.kind, DatatypeKind::Literal);
        assert_eq!(nickname.domains, vec![thing.iri.clone()]);
        assert_eq!(registry.get_class_map().len(), 2);
    }

    #[test]
    fn undeclared_references_become_external_classes() {
        let registry = load(
            r#"
            ex:Dog a owl:Class ; rdfs:subClassOf <http://other.org/Animal> .
            "#,
        );
        let animal = registry
            .get_class_for_iri(&iri("http://other.org/Animal"))
            .expect("external");
        assert_eq!(animal.kind, ClassKind::External);
    }

    #[test]
    fn class_typed_with_class_gets_type_of_edge() {
        let registry = load(
            r#"
            ex:Species a owl:Class .
            ex:Eagle a owl:Class, ex:Species .
            ex:sam a owl:NamedIndividual, ex:Eagle .
            "#,
        );
        let edges = registry.get_type_of_property_map();
        assert_eq!(edges.len(), 1);
        let edge = edges.values().next().expect("edge");
        assert_eq!(edge.domain, iri("http://example.org/onto#Eagle"));
        assert_eq!(edge.range, iri("http://example.org/onto#Species"));
        assert!(registry.get_individual_for_iri(&iri("http://example.org/onto#Eagle")).is_err());

        let sam = registry
            .get_individual_for_iri(&iri("http://example.org/onto#sam"))
            .expect("individual");
        assert_eq!(sam.types, vec![iri("http://example.org/onto#Eagle")]);
        assert!(registry.get_entity_for_iri(&sam.iri).is_err());
    }

    #[test]
    fn deprecated_annotations_are_recognized() {
        let registry = load(
            r#"
            ex:Old a owl:Class ; owl:deprecated true .
            ex:oldLink a owl:ObjectProperty ; owl:deprecated "true"^^xsd:boolean .
            "#,
        );
        let old = registry
            .get_class_for_iri(&iri("http://example.org/onto#Old"))
            .expect("class");
        assert_eq!(old.kind, ClassKind::Deprecated);
        let link = registry
            .get_object_property_for_iri(&iri("http://example.org/onto#oldLink"))
            .expect("property");
        assert_eq!(link.characteristics, vec![Characteristic::Deprecated]);
    }

    #[test]
    fn reject_policy_fails_on_redefinition() {
        let options = RegistryOptions {
            duplicates: DuplicatePolicy::Reject,
            ..RegistryOptions::default()
        };
        let mut registry = Registry::with_options(options).expect("options");
        let source = format!(
            "{PREFIXES} ex:Both a owl:Class . ex:Both a owl:ObjectProperty ."
        );
        let err = load_str(&source, &mut registry).expect_err("duplicate");
        assert!(matches!(
            err,
            LoadError::Registry(RegistryError::Duplicate { .. })
        ));
    }

    #[test]
    fn repeated_triples_register_once() {
        let registry = load(
            r#"
            ex:A a owl:Class .
            ex:M a owl:Class .
            ex:B a owl:Class, ex:M ; rdfs:subClassOf ex:A .
            ex:B rdfs:subClassOf ex:A .
            ex:B a ex:M .
            ex:p a owl:ObjectProperty ; rdfs:domain ex:A ; rdfs:range ex:B .
            ex:p rdfs:domain ex:A .
            "#,
        );
        let b = registry
            .get_class_for_iri(&iri("http://example.org/onto#B"))
            .expect("class");
        assert_eq!(b.super_classes, vec![iri("http://example.org/onto#A")]);
        assert_eq!(registry.get_type_of_property_map().len(), 1);
        let p = registry
            .get_object_property_for_iri(&iri("http://example.org/onto#p"))
            .expect("property");
        assert_eq!(p.domains, vec![iri("http://example.org/onto#A")]);
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let mut registry = Registry::new();
        let err = load_str("ex:A a", &mut registry).expect_err("malformed");
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
