//! Owned, subject-indexed triples parsed from Turtle.

use std::collections::{BTreeMap, BTreeSet};

use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple;
use sophia_turtle::parser::turtle;

use super::LoadError;
use crate::vocab::{RDF_FIRST, RDF_NIL, RDF_REST, RDF_TYPE};

/// A literal object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Literal {
    pub(crate) lexical: String,
    pub(crate) language: Option<String>,
}

/// An RDF term, detached from the parser's buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Node {
    Iri(String),
    Blank(String),
    Literal(Literal),
}

impl Node {
    fn from_term<T: Term>(term: T) -> Option<Self> {
        match term.kind() {
            TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_owned())),
            TermKind::BlankNode => term
                .bnode_id()
                .map(|id| Node::Blank(id.as_str().to_owned())),
            TermKind::Literal => {
                let lexical = term.lexical_form()?;
                let lexical: &str = &lexical;
                let lexical = lexical.to_owned();
                let language = term.language_tag().map(|tag| tag.as_str().to_owned());
                Some(Node::Literal(Literal { lexical, language }))
            }
            _ => None,
        }
    }

    pub(crate) fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub(crate) fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

/// Triples grouped by subject, in a deterministic order.
#[derive(Debug, Default)]
pub(crate) struct TripleIndex {
    subjects: BTreeMap<Node, Vec<(String, Node)>>,
}

impl TripleIndex {
    /// Parses a Turtle document.
    pub(crate) fn parse(source: &str) -> Result<Self, LoadError> {
        let mut index = TripleIndex::default();
        turtle::parse_str(source)
            .for_each_triple(|triple| {
                let subject = Node::from_term(triple.s());
                let predicate = Node::from_term(triple.p());
                let object = Node::from_term(triple.o());
                if let (Some(subject), Some(Node::Iri(predicate)), Some(object)) =
                    (subject, predicate, object)
                {
                    index.insert(subject, predicate, object);
                }
            })
            .map_err(|err| LoadError::Parse {
                message: err.to_string(),
            })?;
        Ok(index)
    }

    /// Adds a triple. A triple already present is not added again.
    pub(crate) fn insert(&mut self, subject: Node, predicate: String, object: Node) {
        let pairs = self.subjects.entry(subject).or_default();
        if !pairs.iter().any(|(p, o)| *p == predicate && *o == object) {
            pairs.push((predicate, object));
        }
    }

    pub(crate) fn subjects(&self) -> impl Iterator<Item = &Node> {
        self.subjects.keys()
    }

    /// Objects of `(subject, predicate, ?)`, in document order.
    pub(crate) fn objects<'a>(
        &'a self,
        subject: &Node,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.subjects
            .get(subject)
            .into_iter()
            .flatten()
            .filter(move |(p, _)| p == predicate)
            .map(|(_, o)| o)
    }

    pub(crate) fn first_object(&self, subject: &Node, predicate: &str) -> Option<&Node> {
        self.subjects
            .get(subject)?
            .iter()
            .find(|(p, _)| p == predicate)
            .map(|(_, o)| o)
    }

    /// IRIs of the `rdf:type` objects of `subject`.
    pub(crate) fn types<'a>(&'a self, subject: &Node) -> impl Iterator<Item = &'a str> + 'a {
        self.objects(subject, RDF_TYPE).filter_map(Node::as_iri)
    }

    pub(crate) fn has_type(&self, subject: &Node, type_iri: &str) -> bool {
        self.types(subject).any(|t| t == type_iri)
    }

    /// Items of the RDF collection starting at `head`.
    ///
    /// Stops at `rdf:nil`, at a malformed cell, or when a cell repeats.
    pub(crate) fn list(&self, head: &Node) -> Vec<Node> {
        let mut items = Vec::new();
        let mut visited = BTreeSet::new();
        let mut cell = head.clone();
        while cell.as_iri() != Some(RDF_NIL) && visited.insert(cell.clone()) {
            let Some(first) = self.first_object(&cell, RDF_FIRST) else {
                break;
            };
            items.push(first.clone());
            let Some(rest) = self.first_object(&cell, RDF_REST) else {
                break;
            };
            cell = rest.clone();
        }
        items
    }

    /// Every distinct language tag used by a literal object.
    pub(crate) fn language_tags(&self) -> BTreeSet<&str> {
        self.subjects
            .values()
            .flatten()
            .filter_map(|(_, o)| o.as_literal()?.language.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, TripleIndex};
    use crate::vocab::{OWL_CLASS, RDFS_LABEL};

    const SOURCE: &str = r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix ex: <http://example.org/onto#> .

        ex:Person a owl:Class ;
            rdfs:label "Person"@en, "Person"@de .
        ex:Parent a owl:Class ;
            owl:unionOf ( ex:Mother ex:Father ) .
    "#;

    #[test]
    fn indexes_triples_by_subject() {
        let index = TripleIndex::parse(SOURCE).expect("valid turtle");
        let person = Node::Iri("http://example.org/onto#Person".to_owned());
        assert!(index.has_type(&person, OWL_CLASS));
        assert_eq!(index.objects(&person, RDFS_LABEL).count(), 2);
        let tags: Vec<&str> = index.language_tags().into_iter().collect();
        assert_eq!(tags, vec!["de", "en"]);
    }

    #[test]
    fn walks_rdf_collections() {
        let index = TripleIndex::parse(SOURCE).expect("valid turtle");
        let parent = Node::Iri("http://example.org/onto#Parent".to_owned());
        let head = index
            .first_object(&parent, crate::vocab::OWL_UNION_OF)
            .expect("union head")
            .clone();
        let items = index.list(&head);
        let members: Vec<Option<&str>> = items.iter().map(Node::as_iri).collect();
        assert_eq!(
            members,
            vec![
                Some("http://example.org/onto#Mother"),
                Some("http://example.org/onto#Father"),
            ]
        );
    }

    #[test]
    fn repeated_triples_collapse() {
        let source = format!("{SOURCE} ex:Person a owl:Class . ex:Person rdfs:label \"Person\"@en .");
        let index = TripleIndex::parse(&source).expect("valid turtle");
        let person = Node::Iri("http://example.org/onto#Person".to_owned());
        assert_eq!(index.types(&person).count(), 1);
        assert_eq!(index.objects(&person, RDFS_LABEL).count(), 2);
    }

    #[test]
    fn reports_syntax_errors() {
        assert!(TripleIndex::parse("this is not turtle").is_err());
    }
}
