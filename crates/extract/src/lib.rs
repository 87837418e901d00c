//! Extraction of the raw inputs for a CASE graph.
//!
//! Two independent collaborators live here:
//!
//! - [`file_info`] stats, sniffs and hashes the file. It is deliberately
//!   lenient: I/O failures are logged and a partial [`FileInfo`] is returned.
//! - [`decode_file`] reads embedded EXIF metadata into a [`MetadataRecord`],
//!   keyed by `"<group> <tag>"` names. Decode failures are errors.
//!
//! Values are kept as typed [`TagValue`]s; anything that needs them as text
//! goes through [`DisplayText`].

mod decode;
pub mod error;
mod file;
mod mime;
mod value;

pub use crate::decode::{decode, decode_file};
pub use crate::file::{FileInfo, file_info};
pub use crate::mime::MimeType;
pub use crate::value::{DisplayText, MetadataRecord, Rational, TagValue};
