use std::collections::BTreeMap;

use exifcase_extract::{DisplayText, FileInfo};
use exifcase_graph::{BlankId, Graph, Literal};
use exn::OptionExt;
use tracing::instrument;

use super::extension;
use crate::error::{ErrorKind, Result};
use crate::vocab::Vocab;

pub const IMAGE_LENGTH: &str = "EXIF ExifImageLength";
pub const IMAGE_WIDTH: &str = "EXIF ExifImageWidth";
pub const COMPRESSED_BITS_PER_PIXEL: &str = "EXIF CompressedBitsPerPixel";

const PROVENANCE: &str = "Information represented here from exif information not from file system stats except for \
                          extension, which is derived from the file path";

/// Emit the raster picture facet.
///
/// Geometry comes from the EXIF record only; the picture type is the file
/// extension. Absent tags are skipped, non-numeric ones are an error.
#[instrument(level = "trace", skip_all)]
pub fn raster_facet<V: DisplayText>(
    graph: &mut Graph,
    node: &BlankId,
    record: &BTreeMap<String, V>,
    info: &FileInfo,
) -> Result<()> {
    graph.add(node, Vocab::Type, Vocab::RasterPictureFacet);
    graph.add(node, Vocab::PictureType, Literal::string(extension(&info.path)));
    for (tag, property) in [
        (IMAGE_LENGTH, Vocab::PictureHeight),
        (IMAGE_WIDTH, Vocab::PictureWidth),
        (COMPRESSED_BITS_PER_PIXEL, Vocab::BitsPerPixel),
    ] {
        if let Some(value) = record.get(tag) {
            let number = coerce(tag, &value.to_display_text())?;
            graph.add(node, property, Literal::integer(number));
        }
    }
    graph.add(node, Vocab::Comment, Literal::string(PROVENANCE));
    Ok(())
}

/// Read a rendered tag value as a number truncated toward zero.
///
/// Accepts anything `f64` parses as well as `num/den` ratios.
fn coerce(tag: &'static str, text: &str) -> Result<i64> {
    let text = text.trim();
    let number = match text.split_once('/') {
        Some((num, den)) => parse_finite(num).zip(parse_finite(den)).map(|(num, den)| num / den),
        None => parse_finite(text),
    };
    let number = number.filter(|n| n.is_finite()).ok_or_raise(|| ErrorKind::Coercion {
        tag,
        value: text.to_string(),
    })?;
    tracing::trace!(tag, number, "Coerced tag value");
    // `as` saturates at the i64 bounds.
    Ok(number.trunc() as i64)
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
