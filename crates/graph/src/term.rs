//! RDF terms: IRIs, blank nodes and typed literals.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::iri;

static NEXT_BLANK: AtomicU64 = AtomicU64::new(0);

/// An expanded IRI.
///
/// Never stored in prefixed form; compaction happens at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Arc<str>);
impl Iri {
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<{}>", self.0)
    }
}
impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Anonymous node identifier.
///
/// Labels are handed out from a process-wide counter, so two calls to
/// [`BlankId::fresh`] never return the same label. The label carries no
/// meaning; the JSON-LD serializer renumbers blank nodes on output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankId(Arc<str>);
impl BlankId {
    /// Allocate a new, never-before-seen blank node.
    pub fn fresh() -> Self {
        let n = NEXT_BLANK.fetch_add(1, Ordering::Relaxed);
        Self(Arc::from(format!("n{n}")))
    }

    /// Create a blank node from an existing label (without the `_:` prefix).
    pub fn labelled(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl Display for BlankId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "_:{}", self.0)
    }
}

/// The value half of a literal, stored natively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(Arc<str>),
    Integer(i64),
    Boolean(bool),
}
impl LiteralValue {
    /// Lexical form, as it would appear in N-Triples.
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::String(s) => s.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
        }
    }
}

/// A literal with an explicit datatype. There are no untyped literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: LiteralValue,
    pub datatype: Iri,
}
impl Literal {
    pub fn string(value: impl AsRef<str>) -> Self {
        Self {
            value: LiteralValue::String(Arc::from(value.as_ref())),
            datatype: Iri::new(iri::XSD_STRING),
        }
    }

    pub fn integer(value: i64) -> Self {
        Self {
            value: LiteralValue::Integer(value),
            datatype: Iri::new(iri::XSD_INTEGER),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            value: LiteralValue::Boolean(value),
            datatype: Iri::new(iri::XSD_BOOLEAN),
        }
    }

    pub fn is_plain_string(&self) -> bool {
        matches!(self.value, LiteralValue::String(_)) && self.datatype.as_str() == iri::XSD_STRING
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            LiteralValue::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            LiteralValue::Boolean(b) => Some(b),
            _ => None,
        }
    }
}
impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.value.lexical())?;
        if self.datatype.as_str() != iri::XSD_STRING {
            write!(f, "^^{}", self.datatype)?;
        }
        Ok(())
    }
}

/// Any term that can occupy the subject or object position of a triple.
///
/// Literals are only valid as objects; [`crate::Graph::add`] does not check
/// this, the serializer skips literal subjects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(Iri),
    Blank(BlankId),
    Literal(Literal),
}
impl Term {
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::Blank(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}
impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::Blank(id) => id.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}
impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}
impl From<BlankId> for Term {
    fn from(value: BlankId) -> Self {
        Term::Blank(value)
    }
}
impl From<&BlankId> for Term {
    fn from(value: &BlankId) -> Self {
        Term::Blank(value.clone())
    }
}
impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}
