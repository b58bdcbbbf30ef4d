//! Registry construction options.

use crate::vocab::SYNTHETIC_PREFIX;

/// What a typed insertion does when its IRI is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DuplicatePolicy {
    /// The latest definition replaces the earlier one.
    #[default]
    Overwrite,
    /// The insertion fails with [`RegistryError::Duplicate`](crate::RegistryError::Duplicate).
    Reject,
}

/// Options fixed for the lifetime of one [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RegistryOptions {
    /// Behavior on duplicate IRIs.
    pub duplicates: DuplicatePolicy,
    /// Namespace prefix for synthetic IRIs. Must not overlap any namespace
    /// used by the ingested ontology.
    pub synthetic_prefix: String,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Overwrite,
            synthetic_prefix: SYNTHETIC_PREFIX.to_owned(),
        }
    }
}
