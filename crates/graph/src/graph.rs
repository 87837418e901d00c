//! An ordered collection of triples plus its namespace bindings.

use std::collections::BTreeMap;

use crate::{Iri, Term};

/// A single statement. The predicate is always an IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub s: Term,
    pub p: Iri,
    pub o: Term,
}
impl Triple {
    pub fn new(s: impl Into<Term>, p: impl Into<Iri>, o: impl Into<Term>) -> Self {
        Self {
            s: s.into(),
            p: p.into(),
            o: o.into(),
        }
    }
}

/// In-memory graph.
///
/// Triples keep their insertion order (bag semantics, no deduplication), and
/// the JSON-LD serializer emits nodes and properties in that order. Namespace
/// bindings are kept sorted by prefix so the rendered context is stable.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    namespaces: BTreeMap<String, String>,
}
impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a prefix to a namespace IRI, replacing any previous binding.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.namespaces.insert(prefix.into(), namespace.into());
    }

    pub fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    pub fn add(&mut self, s: impl Into<Term>, p: impl Into<Iri>, o: impl Into<Term>) {
        self.triples.push(Triple::new(s, p, o));
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// All objects of `(subject, predicate, ?)`, in insertion order.
    pub fn objects<'a>(&'a self, subject: &'a Term, predicate: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples.iter().filter(move |t| &t.s == subject && t.p.as_str() == predicate).map(|t| &t.o)
    }

    /// The single object of `(subject, predicate, ?)`, if exactly one exists.
    pub fn object<'a>(&'a self, subject: &'a Term, predicate: &'a str) -> Option<&'a Term> {
        let mut objects = self.objects(subject, predicate);
        let first = objects.next()?;
        objects.next().is_none().then_some(first)
    }
}
impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;
    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
