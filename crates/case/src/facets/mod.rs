//! Facet builders.
//!
//! Each builder takes the node allocated for its facet and emits that facet's
//! triples onto the graph. None of them link the facet to the root; that is
//! the allocator's job.

mod content;
mod exif;
mod file;
mod raster;

use std::path::Path;

pub use self::content::content_facet;
pub use self::exif::exif_facet;
pub use self::file::file_facet;
pub use self::raster::{COMPRESSED_BITS_PER_PIXEL, IMAGE_LENGTH, IMAGE_WIDTH, raster_facet};

/// The text after the last `.` of the file name, or an empty string.
///
/// A leading dot does not start an extension, so `.bashrc` has none.
pub fn extension(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}
