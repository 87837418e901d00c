use exifcase_extract::FileInfo;
use exifcase_graph::{BlankId, Graph, Literal};
use tracing::instrument;

use super::file::size_literal;
use crate::vocab::Vocab;

const BYTE_ORDER: &str = "Big-endian";

/// Emit the content data facet.
///
/// The hash node is typed but carries no digest.
#[instrument(level = "trace", skip_all)]
pub fn content_facet(graph: &mut Graph, node: &BlankId, info: &FileInfo) {
    graph.add(node, Vocab::Type, Vocab::ContentDataFacet);

    let byte_order = BlankId::fresh();
    graph.add(node, Vocab::ByteOrder, &byte_order);
    graph.add(&byte_order, Vocab::Type, Vocab::EndiannessTypeVocab);
    graph.add(&byte_order, Vocab::VocabularyValue, Literal::string(BYTE_ORDER));

    if let Some(mime_type) = &info.mime_type {
        graph.add(node, Vocab::MimeType, Literal::string(mime_type));
    }
    if let Some(size) = info.size {
        graph.add(node, Vocab::SizeInBytes, size_literal(size));
    }

    let hash = BlankId::fresh();
    graph.add(node, Vocab::Hash, &hash);
    graph.add(&hash, Vocab::Type, Vocab::HashType);
}
