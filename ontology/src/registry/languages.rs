//! Language tags observed on literals.

use std::collections::BTreeSet;

/// Deduplicating set of language tags.
#[derive(Debug, Clone, Default)]
pub struct LanguageTags {
    tags: BTreeSet<String>,
}

impl LanguageTags {
    /// Records `tag`. Returns false if it was already present.
    pub fn add(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    /// Live read-only view of every recorded tag.
    #[must_use]
    pub fn all(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::LanguageTags;

    #[test]
    fn duplicates_collapse() {
        let mut tags = LanguageTags::default();
        assert!(tags.add("en"));
        assert!(!tags.add("en"));
        assert_eq!(tags.all().len(), 1);
        tags.add("de");
        assert_eq!(tags.all().len(), 2);
    }
}
