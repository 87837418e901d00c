//! Minimal RDF graph model with a JSON-LD serializer.
//!
//! All IRIs are stored expanded; compaction against the bound namespaces only
//! happens when the graph is serialized. Triples keep insertion order, which
//! makes output ordering a property of how the graph was built.
//!
//! ```
//! use exifcase_graph::{BlankId, Graph, JsonLdOptions, Literal};
//!
//! let mut graph = Graph::new();
//! graph.bind("foaf", "http://xmlns.com/foaf/0.1/");
//! let alice = BlankId::fresh();
//! graph.add(&alice, "http://xmlns.com/foaf/0.1/name", Literal::string("Alice"));
//!
//! let json = exifcase_graph::to_jsonld(&graph, &JsonLdOptions::default());
//! assert_eq!(json["@graph"][0]["foaf:name"], "Alice");
//! ```

pub mod error;
mod graph;
mod jsonld;
mod term;

pub use crate::graph::{Graph, Triple};
pub use crate::jsonld::{JsonLdOptions, to_jsonld, to_string};
pub use crate::term::{BlankId, Iri, Literal, LiteralValue, Term};

/// IRIs the graph model itself depends on.
pub mod iri {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}
