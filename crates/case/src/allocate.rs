use exifcase_graph::{BlankId, Graph, Literal};
use tracing::instrument;

use crate::vocab::Vocab;

/// The root observable object and one node per facet kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableNodes {
    pub root: BlankId,
    pub exif: BlankId,
    pub raster: BlankId,
    pub file: BlankId,
    /// Allocated but not linked from `root`. See [`link_facet`].
    pub content: BlankId,
}

/// Allocate the root and facet nodes and describe the root.
///
/// Emits the root's type, `hasChanged = false`, and a `hasFacet` link to the
/// EXIF, raster and file facet nodes, in that order. The content facet node
/// is allocated without a link.
#[instrument(level = "trace", skip_all)]
pub fn allocate(graph: &mut Graph) -> ObservableNodes {
    let nodes = ObservableNodes {
        root: BlankId::fresh(),
        exif: BlankId::fresh(),
        raster: BlankId::fresh(),
        file: BlankId::fresh(),
        content: BlankId::fresh(),
    };
    graph.add(&nodes.root, Vocab::Type, Vocab::ObservableObject);
    graph.add(&nodes.root, Vocab::HasChanged, Literal::boolean(false));
    for facet in [&nodes.exif, &nodes.raster, &nodes.file] {
        link_facet(graph, &nodes.root, facet);
    }
    nodes
}

/// Link a facet node to its observable object.
pub fn link_facet(graph: &mut Graph, root: &BlankId, facet: &BlankId) {
    graph.add(root, Vocab::HasFacet, facet);
}
