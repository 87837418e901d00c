use std::path::{Component, Path, PathBuf};

use exifcase_extract::FileInfo;
use exifcase_graph::{BlankId, Graph, Literal};
use exn::ResultExt;
use tracing::instrument;

use super::extension;
use crate::error::{ErrorKind, Result};
use crate::vocab::Vocab;

/// Emit the file facet from the filesystem facts about the file.
///
/// `sizeInBytes` is only emitted when the size is known.
#[instrument(level = "trace", skip_all, fields(path = %info.path.display()))]
pub fn file_facet(graph: &mut Graph, node: &BlankId, info: &FileInfo) -> Result<()> {
    let absolute = absolute_path(&info.path)?;
    let file_name = info
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    graph.add(node, Vocab::Type, Vocab::FileFacet);
    graph.add(node, Vocab::FileName, Literal::string(file_name));
    graph.add(node, Vocab::FilePath, Literal::string(absolute.to_string_lossy()));
    graph.add(node, Vocab::Extension, Literal::string(extension(&info.path)));
    if let Some(size) = info.size {
        graph.add(node, Vocab::SizeInBytes, size_literal(size));
    }
    Ok(())
}

/// Sizes beyond `i64::MAX` cannot come from a real file; saturate rather than wrap.
pub(crate) fn size_literal(size: u64) -> Literal {
    Literal::integer(i64::try_from(size).unwrap_or(i64::MAX))
}

/// Make `path` absolute against the working directory and drop `.` and `..`
/// components without touching the filesystem.
fn absolute_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).or_raise(|| ErrorKind::Path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                normalized.pop();
            },
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
