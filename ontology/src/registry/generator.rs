//! Synthetic IRIs for entities the conversion has to invent.

use std::cell::Cell;

use crate::iri::{Iri, IriError};

/// Produces `<prefix>0`, `<prefix>1`, ...
///
/// Uniqueness relies on the prefix namespace never overlapping a real
/// ontology namespace; generated IRIs are not checked against registered
/// ones.
#[derive(Debug)]
pub struct SyntheticIriGenerator {
    prefix: String,
    generations: Cell<u64>,
}

impl SyntheticIriGenerator {
    /// Creates a generator for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`IriError::Invalid`] if `prefix` followed by a number is not
    /// an absolute IRI.
    pub fn new(prefix: impl Into<String>) -> Result<Self, IriError> {
        let prefix = prefix.into();
        Iri::new(format!("{prefix}0"))?;
        Ok(Self::new_unchecked(prefix))
    }

    /// Wraps a prefix that is already known to form valid IRIs.
    pub(crate) fn new_unchecked(prefix: String) -> Self {
        Self {
            prefix,
            generations: Cell::new(0),
        }
    }

    /// Returns the namespace prefix of generated IRIs.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns a fresh IRI and advances the counter.
    pub fn generate(&self) -> Iri {
        let n = self.generations.get();
        self.generations.set(n + 1);
        Iri::new_unchecked(format!("{}{n}", self.prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::SyntheticIriGenerator;
    use crate::vocab::SYNTHETIC_PREFIX;

    #[test]
    fn generates_sequential_suffixes() {
        let generator = SyntheticIriGenerator::new(SYNTHETIC_PREFIX).expect("valid prefix");
        assert_eq!(generator.generate().as_str(), "http://owl2vowl.de#0");
        assert_eq!(generator.generate().as_str(), "http://owl2vowl.de#1");
        assert_eq!(generator.generate().as_str(), "http://owl2vowl.de#2");
    }

    #[test]
    fn rejects_prefix_that_cannot_form_an_iri() {
        assert!(SyntheticIriGenerator::new("no scheme here ").is_err());
    }
}
