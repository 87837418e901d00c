use std::fmt::{Display, Formatter, Result as FmtResult};

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const TIFF_LE_MAGIC: [u8; 4] = [0x49, 0x49, 0x2A, 0x00];
const TIFF_BE_MAGIC: [u8; 4] = [0x4D, 0x4D, 0x00, 0x2A];
const GIF_MAGIC: [u8; 4] = [0x47, 0x49, 0x46, 0x38];
const RIFF_MAGIC: [u8; 4] = *b"RIFF";
const WEBP_FORMAT: [u8; 4] = *b"WEBP";
const FTYP_BOX: [u8; 4] = *b"ftyp";

/// Image container formats recognised by their leading bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MimeType {
    Jpeg,
    Png,
    Tiff,
    Gif,
    WebP,
    Heic,
    Heif,
    Avif,
}
impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Jpeg => "image/jpeg",
            MimeType::Png => "image/png",
            MimeType::Tiff => "image/tiff",
            MimeType::Gif => "image/gif",
            MimeType::WebP => "image/webp",
            MimeType::Heic => "image/heic",
            MimeType::Heif => "image/heif",
            MimeType::Avif => "image/avif",
        }
    }

    /// Detect the container format from magic bytes.
    ///
    /// Returns `None` if nothing matches or the input is too short.
    #[must_use]
    pub fn from_magic_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&JPEG_MAGIC) {
            return Some(MimeType::Jpeg);
        }
        if bytes.starts_with(&PNG_MAGIC) {
            return Some(MimeType::Png);
        }
        if bytes.starts_with(&TIFF_LE_MAGIC) || bytes.starts_with(&TIFF_BE_MAGIC) {
            return Some(MimeType::Tiff);
        }
        if bytes.starts_with(&GIF_MAGIC) {
            return Some(MimeType::Gif);
        }
        if bytes.starts_with(&RIFF_MAGIC) && bytes.get(8..12) == Some(&WEBP_FORMAT[..]) {
            return Some(MimeType::WebP);
        }
        // ISO-BMFF: box size, then `ftyp`, then the major brand.
        if bytes.get(4..8) == Some(&FTYP_BOX[..]) {
            return match bytes.get(8..12)? {
                b"heic" | b"heix" | b"heim" | b"heis" => Some(MimeType::Heic),
                b"mif1" | b"msf1" => Some(MimeType::Heif),
                b"avif" | b"avis" => Some(MimeType::Avif),
                _ => None,
            };
        }
        None
    }
}
impl Display for MimeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
