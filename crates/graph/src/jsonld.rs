//! JSON-LD serialization.
//!
//! Formats a [`Graph`] as `{"@context": {...}, "@graph": [...]}`. Nodes are
//! emitted in order of first appearance of their subject, properties in order
//! of first appearance of their predicate, and blank nodes are renumbered
//! `_:b0`, `_:b1`, ... in order of first appearance anywhere in the graph.
//! Two graphs built by the same sequence of calls therefore serialize to the
//! same bytes, whatever labels their blank nodes were allocated with.

use std::collections::{BTreeMap, HashMap};

use exn::ResultExt;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value as JsonValue, json};
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::{BlankId, Graph, Literal, LiteralValue, Term, iri};

/// Options for JSON-LD output.
#[derive(Debug, Clone)]
pub struct JsonLdOptions {
    /// Spaces per indentation level. Zero produces compact, single-line output.
    pub indent: usize,
    /// Context entries added on top of the graph's own namespace bindings.
    /// A graph binding with the same prefix wins.
    pub prefixes: BTreeMap<String, String>,
}
impl Default for JsonLdOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            prefixes: BTreeMap::new(),
        }
    }
}
impl JsonLdOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), namespace.into());
        self
    }
}

/// Prefix table used to shorten IRIs.
struct Compactor {
    context: BTreeMap<String, String>,
}
impl Compactor {
    fn new(graph: &Graph, options: &JsonLdOptions) -> Self {
        let mut context = options.prefixes.clone();
        context.extend(graph.namespaces().iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { context }
    }

    /// Shorten to `prefix:local` using the longest matching namespace.
    fn compact(&self, iri: &str) -> String {
        self.context
            .iter()
            .filter_map(|(prefix, namespace)| {
                iri.strip_prefix(namespace.as_str()).filter(|local| !local.is_empty()).map(|local| (prefix, namespace.len(), local))
            })
            .max_by_key(|(_, len, _)| *len)
            .map(|(prefix, _, local)| format!("{prefix}:{local}"))
            .unwrap_or_else(|| iri.to_string())
    }

    fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.context.iter().map(|(k, v)| (k.clone(), JsonValue::String(v.clone()))).collect())
    }
}

/// Renames blank nodes to `b0`, `b1`, ... in order of first sighting.
#[derive(Default)]
struct BlankRenamer {
    mapping: HashMap<BlankId, String>,
}
impl BlankRenamer {
    fn rename(&mut self, id: &BlankId) -> String {
        let next = self.mapping.len();
        self.mapping.entry(id.clone()).or_insert_with(|| format!("_:b{next}")).clone()
    }
}

/// Convert a graph to a JSON-LD document.
#[instrument(level = "debug", skip_all, fields(triples = graph.len()))]
pub fn to_jsonld(graph: &Graph, options: &JsonLdOptions) -> JsonValue {
    let compactor = Compactor::new(graph, options);
    let mut renamer = BlankRenamer::default();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut nodes: Vec<Map<String, JsonValue>> = Vec::new();

    for triple in graph {
        let id = match &triple.s {
            Term::Iri(iri) => compactor.compact(iri.as_str()),
            Term::Blank(blank) => renamer.rename(blank),
            Term::Literal(literal) => {
                tracing::warn!(subject = %literal, "Skipping triple with a literal subject");
                continue;
            },
        };
        let position = *index.entry(id.clone()).or_insert_with(|| {
            let mut node = Map::new();
            node.insert("@id".to_string(), JsonValue::String(id));
            nodes.push(node);
            nodes.len() - 1
        });
        let node = &mut nodes[position];
        if triple.p.as_str() == iri::RDF_TYPE
            && let Term::Iri(class) = &triple.o
        {
            add_value(node, "@type", JsonValue::String(compactor.compact(class.as_str())));
            continue;
        }
        let key = compactor.compact(triple.p.as_str());
        let value = object_to_json(&triple.o, &compactor, &mut renamer);
        add_value(node, &key, value);
    }

    json!({
        "@context": compactor.to_json(),
        "@graph": nodes.into_iter().map(JsonValue::Object).collect::<Vec<_>>(),
    })
}

/// Serialize a graph to JSON-LD text, pretty-printed per [`JsonLdOptions::indent`].
pub fn to_string(graph: &Graph, options: &JsonLdOptions) -> Result<String> {
    let document = to_jsonld(graph, options);
    if options.indent == 0 {
        return serde_json::to_string(&document).or_raise(|| ErrorKind::Serialize);
    }
    let indent = " ".repeat(options.indent);
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    document.serialize(&mut serializer).or_raise(|| ErrorKind::Serialize)?;
    String::from_utf8(buffer).or_raise(|| ErrorKind::Serialize)
}

fn object_to_json(term: &Term, compactor: &Compactor, renamer: &mut BlankRenamer) -> JsonValue {
    match term {
        Term::Iri(iri) => json!({ "@id": compactor.compact(iri.as_str()) }),
        Term::Blank(blank) => json!({ "@id": renamer.rename(blank) }),
        Term::Literal(literal) => literal_to_json(literal, compactor),
    }
}

fn literal_to_json(literal: &Literal, compactor: &Compactor) -> JsonValue {
    if literal.is_plain_string() {
        return JsonValue::String(literal.value.lexical());
    }
    let value = match &literal.value {
        LiteralValue::String(s) => JsonValue::String(s.to_string()),
        LiteralValue::Integer(i) => json!(i),
        LiteralValue::Boolean(b) => json!(b),
    };
    json!({ "@type": compactor.compact(literal.datatype.as_str()), "@value": value })
}

/// Insert a value, promoting to an array once a key holds more than one value.
fn add_value(node: &mut Map<String, JsonValue>, key: &str, value: JsonValue) {
    match node.get_mut(key) {
        None => {
            node.insert(key.to_string(), value);
        },
        Some(JsonValue::Array(values)) => values.push(value),
        Some(existing) => {
            let previous = std::mem::replace(existing, JsonValue::Null);
            *existing = JsonValue::Array(vec![previous, value]);
        },
    }
}
