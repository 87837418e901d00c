use std::collections::BTreeMap;

use exifcase_extract::DisplayText;
use exifcase_graph::{BlankId, Graph, Literal};
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::vocab::Vocab;

/// Emit the EXIF facet: a controlled dictionary holding one entry per tag.
///
/// Entries are emitted in ascending key order. Every value goes through
/// [`DisplayText`] and is written as a plain string literal.
#[instrument(level = "trace", skip_all, fields(entries = record.len()))]
pub fn exif_facet<V: DisplayText>(graph: &mut Graph, node: &BlankId, record: &BTreeMap<String, V>) -> Result<()> {
    let dictionary = BlankId::fresh();
    graph.add(node, Vocab::Type, Vocab::ExifFacet);
    graph.add(node, Vocab::ExifData, &dictionary);
    graph.add(&dictionary, Vocab::Type, Vocab::ControlledDictionary);

    // BTreeMap iteration is already sorted by key.
    for (key, value) in record {
        let value = Literal::string(value.to_display_text());
        if !value.is_plain_string() {
            tracing::error!(key = %key, value = %value, "Dictionary value is not a string literal");
            exn::bail!(ErrorKind::Invariant(format!("value for '{key}' is not a string literal")));
        }
        let entry = BlankId::fresh();
        graph.add(&dictionary, Vocab::Entry, &entry);
        graph.add(&entry, Vocab::Type, Vocab::ControlledDictionaryEntry);
        graph.add(&entry, Vocab::Key, Literal::string(key));
        graph.add(&entry, Vocab::Value, value);
    }
    Ok(())
}
