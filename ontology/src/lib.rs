//! OWL entity registry for VOWL graph conversion.
//!
//! The `vowl-ontology` crate indexes the entities of an OWL ontology
//! (classes, datatypes, object and datatype properties, `rdf:type` edges
//! and named individuals) by IRI, keeps a unified lookup table across the
//! graph-relevant kinds, and hands out the compact, run-stable identifiers
//! that a VOWL document uses to reference nodes and edges.
//!
//! # Entry Point
//!
//! ```
//! use vowl_ontology::loader::turtle;
//! use vowl_ontology::Registry;
//!
//! let source = r#"
//!     @prefix owl: <http://www.w3.org/2002/07/owl#> .
//!     <http://ex.org/o#Person> a owl:Class .
//! "#;
//! let mut registry = Registry::new();
//! let summary = turtle::load_str(source, &mut registry)?;
//! assert_eq!(summary.classes, 1);
//! # Ok::<(), vowl_ontology::LoadError>(())
//! ```
//!
//! # Serialization
//!
//! With the `serializers` feature (on by default):
//!
//! ```
//! # let registry = vowl_ontology::Registry::new();
//! let document = vowl_ontology::serializer::vowl::to_vowl_json(&registry)?;
//! assert!(document["class"].is_array());
//! # Ok::<(), vowl_ontology::RegistryError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod entity;
pub mod error;
pub mod iri;
pub mod loader;
pub mod registry;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod thing;
pub mod vocab;

pub use config::{DuplicatePolicy, RegistryOptions};
pub use entity::{
    Annotations, Characteristic, Class, ClassKind, Datatype, DatatypeKind, DatatypeProperty,
    EntityKind, EntityRef, Individual, NodeRef, ObjectProperty, PropertyRef, TypeOfProperty,
};
pub use error::{Lookup, RegistryError};
pub use iri::{Iri, IriError};
pub use loader::{LoadError, LoadSummary};
pub use registry::Registry;
pub use thing::ThingProvider;
