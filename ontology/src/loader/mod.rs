//! Ingestion: populating a [`Registry`](crate::Registry) from a source ontology.

mod graph;
pub mod turtle;

use std::path::PathBuf;

use thiserror::Error;

use crate::error::RegistryError;
use crate::iri::IriError;
use crate::registry::Registry;

/// Errors raised while loading an ontology.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The source is not well-formed Turtle.
    #[error("failed to parse Turtle: {message}")]
    Parse {
        /// Parser diagnostic.
        message: String,
    },
    /// A term in the source is not a valid absolute IRI.
    #[error(transparent)]
    Iri(#[from] IriError),
    /// The registry refused an entity.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Entity counts after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Registered classes, including synthesized ones.
    pub classes: usize,
    /// Registered datatypes.
    pub datatypes: usize,
    /// Registered object properties.
    pub object_properties: usize,
    /// Registered datatype properties.
    pub datatype_properties: usize,
    /// Registered type-of edges.
    pub type_of_properties: usize,
    /// Registered individuals.
    pub individuals: usize,
    /// Distinct language tags.
    pub languages: usize,
}

impl From<&Registry> for LoadSummary {
    fn from(registry: &Registry) -> Self {
        Self {
            classes: registry.get_class_map().len(),
            datatypes: registry.get_datatype_map().len(),
            object_properties: registry.get_object_property_map().len(),
            datatype_properties: registry.get_datatype_property_map().len(),
            type_of_properties: registry.get_type_of_property_map().len(),
            individuals: registry.get_individual_map().len(),
            languages: registry.get_languages().len(),
        }
    }
}
