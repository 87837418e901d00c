//! EXIF decoding into a flat [`MetadataRecord`].
//!
//! Keys are named `"<group> <tag>"`, where the group identifies the IFD the
//! field came from (`Image`, `Thumbnail`, `EXIF`, `GPS`, `Interoperability`).
//! This is the naming scheme most EXIF tooling uses, and the one downstream
//! facet builders look tags up by.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use exif::{Context, Field, In, Reader, Tag, Value};
use exn::ResultExt;
use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::value::{MetadataRecord, Rational, TagValue};

/// Decode the metadata embedded in the file at `path`.
///
/// The file handle is dropped before returning on every path.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn decode_file(path: impl AsRef<Path>) -> Result<MetadataRecord> {
    let file = File::open(path.as_ref()).or_raise(|| ErrorKind::Io)?;
    decode(&mut BufReader::new(file))
}

/// Decode the metadata embedded in an image container (JPEG, TIFF, PNG,
/// WebP, HEIF).
///
/// An image without any EXIF data, an unrecognised container, or a container
/// too broken to locate its metadata produces an empty record. Malformed
/// fields are skipped and the rest of the metadata is kept. Read failures are
/// errors.
pub fn decode<R: BufRead + Seek>(reader: &mut R) -> Result<MetadataRecord> {
    let read = Reader::new()
        .continue_on_error(true)
        .read_from_container(reader)
        .or_else(|err| {
            err.distill_partial_result(|errors| {
                for error in errors {
                    tracing::warn!(%error, "Ignoring malformed metadata");
                }
            })
        });
    let exif = match read {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(container)) => {
            tracing::debug!(container, "No embedded metadata found");
            return Ok(MetadataRecord::new());
        },
        Err(exif::Error::InvalidFormat(reason)) => {
            tracing::debug!(reason, "Unreadable container, treating as having no metadata");
            return Ok(MetadataRecord::new());
        },
        Err(exif::Error::Io(err)) => return Err(err).or_raise(|| ErrorKind::Io),
        Err(err) => return Err(err).or_raise(|| ErrorKind::Decode),
    };
    let mut record = MetadataRecord::new();
    for field in exif.fields() {
        let Some(value) = tag_value(&field.value) else {
            tracing::trace!(tag = %field.tag, "Skipping field with an unknown value type");
            continue;
        };
        // The first occurrence wins, mirroring lookup order within the file.
        record.entry(key(field)).or_insert(value);
    }
    tracing::debug!(tags = record.len(), "Decoded embedded metadata");
    Ok(record)
}

/// Build the `"<group> <tag>"` key for a field.
pub(crate) fn key(field: &Field) -> String {
    format!("{} {}", group(field.tag, field.ifd_num), tag_name(field.tag))
}

fn group(tag: Tag, ifd: In) -> &'static str {
    match tag.context() {
        Context::Tiff if ifd == In::THUMBNAIL => "Thumbnail",
        Context::Tiff => "Image",
        Context::Exif => "EXIF",
        Context::Gps => "GPS",
        Context::Interop => "Interoperability",
        #[allow(unreachable_patterns)]
        _ => "Unknown",
    }
}

fn tag_name(tag: Tag) -> String {
    match tag {
        Tag::PixelXDimension => "ExifImageWidth".to_string(),
        Tag::PixelYDimension => "ExifImageLength".to_string(),
        tag if tag.description().is_none() => format!("Tag 0x{:04X}", tag.number()),
        tag => tag.to_string(),
    }
}

/// Convert a decoder value into a [`TagValue`]. `None` for unknown types.
pub(crate) fn tag_value(value: &Value) -> Option<TagValue> {
    Some(match value {
        Value::Ascii(strings) => TagValue::Text(
            strings
                .iter()
                .map(|s| String::from_utf8_lossy(s).trim_end_matches('\0').trim().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Byte(values) => TagValue::Unsigned(values.iter().map(|&v| u64::from(v)).collect()),
        Value::Short(values) => TagValue::Unsigned(values.iter().map(|&v| u64::from(v)).collect()),
        Value::Long(values) => TagValue::Unsigned(values.iter().map(|&v| u64::from(v)).collect()),
        Value::SByte(values) => TagValue::Signed(values.iter().map(|&v| i64::from(v)).collect()),
        Value::SShort(values) => TagValue::Signed(values.iter().map(|&v| i64::from(v)).collect()),
        Value::SLong(values) => TagValue::Signed(values.iter().map(|&v| i64::from(v)).collect()),
        Value::Rational(values) => {
            TagValue::Rational(values.iter().map(|r| Rational::new(i64::from(r.num), i64::from(r.denom))).collect())
        },
        Value::SRational(values) => {
            TagValue::Rational(values.iter().map(|r| Rational::new(i64::from(r.num), i64::from(r.denom))).collect())
        },
        Value::Float(values) => TagValue::Float(values.iter().map(|&v| f64::from(v)).collect()),
        Value::Double(values) => TagValue::Float(values.clone()),
        Value::Undefined(bytes, _offset) => TagValue::Bytes(bytes.clone()),
        #[allow(unreachable_patterns)]
        _ => return None,
    })
}
