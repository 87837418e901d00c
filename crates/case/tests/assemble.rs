use std::collections::BTreeMap;

use exifcase_case::facets::{IMAGE_LENGTH, IMAGE_WIDTH};
use exifcase_case::{AssembleOptions, DEFAULT_KB, Vocab, assemble, error::ErrorKind, jsonld_options};
use exifcase_extract::{FileInfo, MetadataRecord, Rational, TagValue};
use exifcase_graph::{Graph, Term};
use serde_json::{Value, json};

const COMMENT: &str = "Information represented here from exif information not from file system stats except for \
                       extension, which is derived from the file path";

fn photo_record() -> MetadataRecord {
    BTreeMap::from([
        (IMAGE_WIDTH.to_string(), TagValue::Unsigned(vec![1920])),
        (IMAGE_LENGTH.to_string(), TagValue::Unsigned(vec![1080])),
    ])
}

fn photo_info() -> FileInfo {
    FileInfo::new("/images/photo.jpg").with_size(50_000)
}

fn render(graph: &Graph, indent: usize) -> String {
    exifcase_graph::to_string(graph, &jsonld_options(DEFAULT_KB, indent)).unwrap()
}

fn nodes_of_type<'a>(document: &'a Value, class: &str) -> Vec<&'a Value> {
    document["@graph"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|node| node["@type"] == class)
        .collect()
}

#[test]
fn end_to_end_document() {
    let graph = assemble(&photo_record(), &photo_info(), &AssembleOptions::default()).unwrap();
    let expected = json!({
        "@context": {
            "kb": "http://example.org/kb/",
            "rdf": "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
            "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
            "uco-core": "https://unifiedcyberontology.org/ontology/uco/core#",
            "uco-location": "https://unifiedcyberontology.org/ontology/uco/location#",
            "uco-observable": "https://unifiedcyberontology.org/ontology/uco/observable#",
            "uco-types": "https://unifiedcyberontology.org/ontology/uco/types#",
            "uco-vocabulary": "https://unifiedcyberontology.org/ontology/uco/vocabulary#",
            "xsd": "http://www.w3.org/2001/XMLSchema#",
        },
        "@graph": [
            {
                "@id": "_:b0",
                "@type": "uco-observable:ObservableObject",
                "uco-observable:hasChanged": {"@type": "xsd:boolean", "@value": false},
                "uco-core:hasFacet": [{"@id": "_:b1"}, {"@id": "_:b2"}, {"@id": "_:b3"}],
            },
            {
                "@id": "_:b1",
                "@type": "uco-observable:EXIFFacet",
                "uco-observable:exifData": {"@id": "_:b4"},
            },
            {
                "@id": "_:b4",
                "@type": "uco-types:ControlledDictionary",
                "uco-types:entry": [{"@id": "_:b5"}, {"@id": "_:b6"}],
            },
            {
                "@id": "_:b5",
                "@type": "uco-types:ControlledDictionaryEntry",
                "uco-types:key": "EXIF ExifImageLength",
                "uco-types:value": "1080",
            },
            {
                "@id": "_:b6",
                "@type": "uco-types:ControlledDictionaryEntry",
                "uco-types:key": "EXIF ExifImageWidth",
                "uco-types:value": "1920",
            },
            {
                "@id": "_:b3",
                "@type": "uco-observable:FileFacet",
                "uco-observable:fileName": "photo.jpg",
                "uco-observable:filePath": "/images/photo.jpg",
                "uco-observable:extension": "jpg",
                "uco-observable:sizeInBytes": {"@type": "xsd:integer", "@value": 50000},
            },
            {
                "@id": "_:b2",
                "@type": "uco-observable:RasterPictureFacet",
                "uco-observable:pictureType": "jpg",
                "uco-observable:pictureHeight": {"@type": "xsd:integer", "@value": 1080},
                "uco-observable:pictureWidth": {"@type": "xsd:integer", "@value": 1920},
                "rdfs:comment": COMMENT,
            },
        ],
    });
    assert_eq!(render(&graph, 0), serde_json::to_string(&expected).unwrap());
}

#[test]
fn output_is_byte_identical_across_runs() {
    let record = photo_record();
    let info = photo_info();
    let first = assemble(&record, &info, &AssembleOptions::default()).unwrap();
    let second = assemble(&record, &info, &AssembleOptions::default()).unwrap();
    assert_eq!(render(&first, 4), render(&second, 4));
}

#[test]
fn dictionary_entries_are_strictly_ascending() {
    let record: MetadataRecord = BTreeMap::from([
        ("Image Software".to_string(), TagValue::from("GIMP")),
        ("GPS GPSLatitudeRef".to_string(), TagValue::from("N")),
        ("EXIF FNumber".to_string(), TagValue::Rational(vec![Rational::new(28, 10)])),
        ("Image Orientation".to_string(), TagValue::Unsigned(vec![1])),
        ("EXIF ExposureBiasValue".to_string(), TagValue::Signed(vec![-1])),
    ]);
    let graph = assemble(&record, &photo_info(), &AssembleOptions::default()).unwrap();
    let document: Value = serde_json::from_str(&render(&graph, 4)).unwrap();
    let keys: Vec<&str> = nodes_of_type(&document, "uco-types:ControlledDictionaryEntry")
        .iter()
        .map(|entry| entry["uco-types:key"].as_str().unwrap())
        .collect();
    assert_eq!(keys.len(), record.len());
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn every_value_is_a_plain_string() {
    let record: MetadataRecord = BTreeMap::from([
        ("EXIF FNumber".to_string(), TagValue::Rational(vec![Rational::new(28, 10)])),
        ("EXIF ExposureBiasValue".to_string(), TagValue::Signed(vec![-1])),
        ("Image XResolution".to_string(), TagValue::Float(vec![72.0])),
        ("EXIF MakerNote".to_string(), TagValue::Bytes(vec![0, 1, 2])),
    ]);
    let graph = assemble(&record, &photo_info(), &AssembleOptions::default()).unwrap();
    let document: Value = serde_json::from_str(&render(&graph, 4)).unwrap();
    let values: Vec<&Value> = nodes_of_type(&document, "uco-types:ControlledDictionaryEntry")
        .iter()
        .map(|entry| &entry["uco-types:value"])
        .collect();
    assert_eq!(values, vec!["-1", "14/5", "[0, 1, 2]", "72"]);
}

#[test]
fn geometry_from_ratio_text() {
    let record: MetadataRecord = BTreeMap::from([(IMAGE_WIDTH.to_string(), TagValue::from("3264/1"))]);
    let graph = assemble(&record, &photo_info(), &AssembleOptions::default()).unwrap();
    let document: Value = serde_json::from_str(&render(&graph, 4)).unwrap();
    let raster = nodes_of_type(&document, "uco-observable:RasterPictureFacet");
    assert_eq!(raster[0]["uco-observable:pictureWidth"]["@value"], 3264);
    assert!(raster[0].get("uco-observable:pictureHeight").is_none());
    assert!(raster[0].get("uco-observable:bitsPerPixel").is_none());
}

#[test]
fn unparseable_geometry_aborts() {
    let record: MetadataRecord = BTreeMap::from([(IMAGE_LENGTH.to_string(), TagValue::from("unknown"))]);
    let err = assemble(&record, &photo_info(), &AssembleOptions::default()).unwrap_err();
    assert!(matches!(&*err, ErrorKind::Coercion { tag: IMAGE_LENGTH, .. }));
}

#[test]
fn missing_file_details_are_tolerated() {
    let record = MetadataRecord::new();
    let graph = assemble(&record, &FileInfo::new("relative/noext"), &AssembleOptions::default()).unwrap();
    let document: Value = serde_json::from_str(&render(&graph, 4)).unwrap();
    let file = nodes_of_type(&document, "uco-observable:FileFacet");
    assert_eq!(file[0]["uco-observable:extension"], "");
    assert_eq!(file[0]["uco-observable:fileName"], "noext");
    assert!(file[0].get("uco-observable:sizeInBytes").is_none());
    let path = file[0]["uco-observable:filePath"].as_str().unwrap();
    assert!(std::path::Path::new(path).is_absolute());
    assert!(path.ends_with("relative/noext"));
}

#[test]
fn content_facet_is_unlinked_by_default() {
    let info = photo_info().with_mime_type("image/jpeg");
    let graph = assemble(&photo_record(), &info, &AssembleOptions::default()).unwrap();
    let content = Vocab::ContentDataFacet.iri();
    assert!(graph.iter().all(|t| t.o != Term::from(content.clone())));
    assert_eq!(graph.iter().filter(|t| t.p == Vocab::HasFacet.iri()).count(), 3);
}

#[test]
fn content_facet_is_linked_when_requested() {
    let info = photo_info().with_mime_type("image/jpeg");
    let options = AssembleOptions { content_facet: true };
    let graph = assemble(&photo_record(), &info, &options).unwrap();
    let document: Value = serde_json::from_str(&render(&graph, 4)).unwrap();

    let content = nodes_of_type(&document, "uco-observable:ContentDataFacet");
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["uco-observable:mimeType"], "image/jpeg");
    assert_eq!(
        content[0]["uco-observable:sizeInBytes"],
        json!({"@type": "xsd:integer", "@value": 50000})
    );

    let roots = nodes_of_type(&document, "uco-observable:ObservableObject");
    let facets = roots[0]["uco-core:hasFacet"].as_array().unwrap();
    assert_eq!(facets.len(), 4);
    assert_eq!(facets[3]["@id"], content[0]["@id"]);

    let byte_order = nodes_of_type(&document, "uco-vocabulary:EndiannessTypeVocab");
    assert_eq!(byte_order[0]["uco-vocabulary:value"], "Big-endian");
    assert_eq!(nodes_of_type(&document, "uco-types:Hash").len(), 1);
}
