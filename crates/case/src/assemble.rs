use std::collections::BTreeMap;

use exifcase_extract::{DisplayText, FileInfo};
use exifcase_graph::{Graph, JsonLdOptions};
use tracing::instrument;

use crate::allocate::{allocate, link_facet};
use crate::error::Result;
use crate::facets::{content_facet, exif_facet, file_facet, raster_facet};
use crate::vocab::Namespace;

/// Base prefix for knowledge-base identifiers in the JSON-LD context.
pub const DEFAULT_KB: &str = "http://example.org/kb/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Build the content data facet and link it from the root.
    pub content_facet: bool,
}

/// Build the observable-object graph for one file.
///
/// Either the whole graph is returned or the first builder error is.
#[instrument(skip_all, fields(path = %info.path.display(), tags = record.len()))]
pub fn assemble<V: DisplayText>(
    record: &BTreeMap<String, V>,
    info: &FileInfo,
    options: &AssembleOptions,
) -> Result<Graph> {
    let mut graph = Graph::new();
    for namespace in Namespace::UCO {
        graph.bind(namespace.prefix(), namespace.iri());
    }

    let nodes = allocate(&mut graph);
    exif_facet(&mut graph, &nodes.exif, record)?;
    file_facet(&mut graph, &nodes.file, info)?;
    raster_facet(&mut graph, &nodes.raster, record, info)?;
    if options.content_facet {
        content_facet(&mut graph, &nodes.content, info);
        link_facet(&mut graph, &nodes.root, &nodes.content);
    }

    tracing::debug!(triples = graph.len(), "Assembled graph");
    Ok(graph)
}

/// Serializer options carrying the context prefixes that are not bound on
/// the graph itself.
pub fn jsonld_options(kb: impl Into<String>, indent: usize) -> JsonLdOptions {
    [Namespace::Rdf, Namespace::Rdfs, Namespace::Xsd]
        .into_iter()
        .fold(JsonLdOptions::default().with_indent(indent).with_prefix("kb", kb), |options, namespace| {
            options.with_prefix(namespace.prefix(), namespace.iri())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_uco_namespaces() {
        let record: BTreeMap<String, String> = BTreeMap::new();
        let graph = assemble(&record, &FileInfo::new("/tmp/photo.jpg"), &AssembleOptions::default()).unwrap();
        let prefixes: Vec<_> = graph.namespaces().keys().map(String::as_str).collect();
        assert_eq!(
            prefixes,
            vec!["uco-core", "uco-location", "uco-observable", "uco-types", "uco-vocabulary"]
        );
    }

    #[test]
    fn options_carry_the_remaining_context() {
        let options = jsonld_options(DEFAULT_KB, 2);
        assert_eq!(options.indent, 2);
        let prefixes: Vec<_> = options.prefixes.keys().map(String::as_str).collect();
        assert_eq!(prefixes, vec!["kb", "rdf", "rdfs", "xsd"]);
        assert_eq!(options.prefixes["kb"], DEFAULT_KB);
    }
}
