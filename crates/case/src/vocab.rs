//! The closed set of ontology terms the mapping emits.
//!
//! Every IRI written to the graph comes from a [`Vocab`] variant, so a typo
//! in a term name is a compile error rather than a silently wrong IRI.

use exifcase_graph::{Iri, Term, iri};

/// Ontology namespaces, with the prefixes used in the JSON-LD context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Rdf,
    Rdfs,
    Xsd,
    UcoCore,
    UcoLocation,
    UcoObservable,
    UcoTypes,
    UcoVocabulary,
}
impl Namespace {
    /// The UCO namespaces bound on every assembled graph.
    pub const UCO: [Namespace; 5] = [
        Namespace::UcoCore,
        Namespace::UcoLocation,
        Namespace::UcoObservable,
        Namespace::UcoTypes,
        Namespace::UcoVocabulary,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Rdf => "rdf",
            Namespace::Rdfs => "rdfs",
            Namespace::Xsd => "xsd",
            Namespace::UcoCore => "uco-core",
            Namespace::UcoLocation => "uco-location",
            Namespace::UcoObservable => "uco-observable",
            Namespace::UcoTypes => "uco-types",
            Namespace::UcoVocabulary => "uco-vocabulary",
        }
    }

    pub fn iri(&self) -> &'static str {
        match self {
            Namespace::Rdf => iri::RDF,
            Namespace::Rdfs => iri::RDFS,
            Namespace::Xsd => iri::XSD,
            Namespace::UcoCore => "https://unifiedcyberontology.org/ontology/uco/core#",
            Namespace::UcoLocation => "https://unifiedcyberontology.org/ontology/uco/location#",
            Namespace::UcoObservable => "https://unifiedcyberontology.org/ontology/uco/observable#",
            Namespace::UcoTypes => "https://unifiedcyberontology.org/ontology/uco/types#",
            Namespace::UcoVocabulary => "https://unifiedcyberontology.org/ontology/uco/vocabulary#",
        }
    }
}

/// An ontology class or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocab {
    // rdf / rdfs
    Type,
    Comment,
    // uco-core
    HasFacet,
    // uco-observable classes
    ObservableObject,
    FileFacet,
    RasterPictureFacet,
    ExifFacet,
    ContentDataFacet,
    // uco-observable properties
    HasChanged,
    FileName,
    FilePath,
    Extension,
    SizeInBytes,
    PictureType,
    PictureHeight,
    PictureWidth,
    BitsPerPixel,
    ExifData,
    ByteOrder,
    MimeType,
    Hash,
    // uco-types
    ControlledDictionary,
    ControlledDictionaryEntry,
    Entry,
    Key,
    Value,
    HashType,
    // uco-vocabulary
    EndiannessTypeVocab,
    VocabularyValue,
}
impl Vocab {
    pub fn namespace(&self) -> Namespace {
        match self {
            Vocab::Type => Namespace::Rdf,
            Vocab::Comment => Namespace::Rdfs,
            Vocab::HasFacet => Namespace::UcoCore,
            Vocab::ObservableObject
            | Vocab::FileFacet
            | Vocab::RasterPictureFacet
            | Vocab::ExifFacet
            | Vocab::ContentDataFacet
            | Vocab::HasChanged
            | Vocab::FileName
            | Vocab::FilePath
            | Vocab::Extension
            | Vocab::SizeInBytes
            | Vocab::PictureType
            | Vocab::PictureHeight
            | Vocab::PictureWidth
            | Vocab::BitsPerPixel
            | Vocab::ExifData
            | Vocab::ByteOrder
            | Vocab::MimeType
            | Vocab::Hash => Namespace::UcoObservable,
            Vocab::ControlledDictionary
            | Vocab::ControlledDictionaryEntry
            | Vocab::Entry
            | Vocab::Key
            | Vocab::Value
            | Vocab::HashType => Namespace::UcoTypes,
            Vocab::EndiannessTypeVocab | Vocab::VocabularyValue => Namespace::UcoVocabulary,
        }
    }

    /// The term's name within its namespace.
    pub fn local_name(&self) -> &'static str {
        match self {
            Vocab::Type => "type",
            Vocab::Comment => "comment",
            Vocab::HasFacet => "hasFacet",
            Vocab::ObservableObject => "ObservableObject",
            Vocab::FileFacet => "FileFacet",
            Vocab::RasterPictureFacet => "RasterPictureFacet",
            Vocab::ExifFacet => "EXIFFacet",
            Vocab::ContentDataFacet => "ContentDataFacet",
            Vocab::HasChanged => "hasChanged",
            Vocab::FileName => "fileName",
            Vocab::FilePath => "filePath",
            Vocab::Extension => "extension",
            Vocab::SizeInBytes => "sizeInBytes",
            Vocab::PictureType => "pictureType",
            Vocab::PictureHeight => "pictureHeight",
            Vocab::PictureWidth => "pictureWidth",
            Vocab::BitsPerPixel => "bitsPerPixel",
            Vocab::ExifData => "exifData",
            Vocab::ByteOrder => "byteOrder",
            Vocab::MimeType => "mimeType",
            Vocab::Hash => "hash",
            Vocab::ControlledDictionary => "ControlledDictionary",
            Vocab::ControlledDictionaryEntry => "ControlledDictionaryEntry",
            Vocab::Entry => "entry",
            Vocab::Key => "key",
            Vocab::Value => "value",
            Vocab::HashType => "Hash",
            Vocab::EndiannessTypeVocab => "EndiannessTypeVocab",
            Vocab::VocabularyValue => "value",
        }
    }

    pub fn iri(&self) -> Iri {
        Iri::new(format!("{}{}", self.namespace().iri(), self.local_name()))
    }
}
impl From<Vocab> for Iri {
    fn from(value: Vocab) -> Self {
        value.iri()
    }
}
impl From<Vocab> for Term {
    fn from(value: Vocab) -> Self {
        Term::Iri(value.iri())
    }
}
