//! Registry failure conditions.
//!
//! Every failure carries the offending IRI. Lookups never fall back to a
//! default value: a missing or mismatched IRI means an upstream stage
//! referenced something ingestion never produced.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::entity::EntityKind;
use crate::iri::Iri;

/// The table or capability a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The class table.
    Class,
    /// The datatype table.
    Datatype,
    /// The object-property table.
    ObjectProperty,
    /// The datatype-property table.
    DatatypeProperty,
    /// The type-of-property table.
    TypeOfProperty,
    /// The individual table.
    Individual,
    /// The unified entity table.
    Entity,
    /// The unified table, narrowed to properties.
    Property,
    /// The unified table, narrowed to nodes.
    Node,
}

impl Display for Lookup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lookup::Class => "class",
            Lookup::Datatype => "datatype",
            Lookup::ObjectProperty => "object property",
            Lookup::DatatypeProperty => "datatype property",
            Lookup::TypeOfProperty => "type-of property",
            Lookup::Individual => "individual",
            Lookup::Entity => "entity",
            Lookup::Property => "property",
            Lookup::Node => "node",
        })
    }
}

/// Errors raised by [`Registry`](crate::Registry) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The IRI is absent from the queried table.
    #[error("can't find {lookup} for IRI `{iri}`")]
    NotFound {
        /// The table that was queried.
        lookup: Lookup,
        /// The requested IRI.
        iri: Iri,
    },
    /// The IRI resolves, but not to an entity with the requested capability.
    #[error("entity `{iri}` is a {found}, not a {expected}")]
    KindMismatch {
        /// The IRI that was resolved.
        iri: Iri,
        /// The capability the caller asked for.
        expected: Lookup,
        /// The kind actually registered under `iri`.
        found: EntityKind,
    },
    /// The IRI is already registered and duplicates are rejected.
    #[error("{kind} `{iri}` is already registered")]
    Duplicate {
        /// The kind of the entity already registered under `iri`.
        kind: EntityKind,
        /// The duplicated IRI.
        iri: Iri,
    },
}

impl RegistryError {
    pub(crate) fn not_found(lookup: Lookup, iri: &Iri) -> Self {
        Self::NotFound {
            lookup,
            iri: iri.clone(),
        }
    }

    /// Returns the IRI that caused the failure.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        match self {
            Self::NotFound { iri, .. }
            | Self::KindMismatch { iri, .. }
            | Self::Duplicate { iri, .. } => iri,
        }
    }
}
