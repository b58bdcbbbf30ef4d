//! Validated IRI value object.
//!
//! Every registry table is keyed by [`Iri`]. Two entities are the same
//! entity exactly when their IRIs are equal.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// An absolute IRI naming one source or synthesized entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Validates and constructs a new [`Iri`].
    ///
    /// # Errors
    ///
    /// Returns [`IriError::Invalid`] if `value` is not an absolute IRI.
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        if sophia_iri::Iri::new(value.as_str()).is_err() {
            return Err(IriError::Invalid { value });
        }
        Ok(Self { value })
    }

    /// Wraps text that is already known to be a valid IRI.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self { value }
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the fragment or last path segment, used as a fallback label.
    #[must_use]
    pub fn local_name(&self) -> &str {
        let trimmed = self.value.trim_end_matches(['/', '#']);
        trimmed
            .rfind(['#', '/', ':'])
            .map_or(trimmed, |pos| &trimmed[pos + 1..])
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Iri {
    type Error = IriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Errors produced when validating an [`Iri`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// The provided text could not be parsed as an absolute IRI.
    #[error("invalid IRI: {value}")]
    Invalid {
        /// The rejected text.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Iri, IriError};

    #[test]
    fn accepts_absolute_iri() {
        let iri = Iri::new("http://ex#A").expect("valid IRI");
        assert_eq!(iri.as_str(), "http://ex#A");
        assert_eq!(iri.to_string(), "http://ex#A");
    }

    #[test]
    fn rejects_relative_or_malformed_text() {
        let err = Iri::new("not an iri").expect_err("invalid IRI");
        assert!(matches!(err, IriError::Invalid { value } if value == "not an iri"));
        assert!("relative/path".parse::<Iri>().is_err());
    }

    #[test]
    fn local_name_prefers_fragment() {
        let hash = Iri::new("http://example.org/onto#Person").expect("valid IRI");
        assert_eq!(hash.local_name(), "Person");
        let slash = Iri::new("http://example.org/onto/Person/").expect("valid IRI");
        assert_eq!(slash.local_name(), "Person");
    }
}
