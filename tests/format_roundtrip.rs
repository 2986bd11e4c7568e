//! Writing transcoded documents and reading them back in every format

mod common;

use common::open_sources_fixture;
use debsrc::formats::{
    DocumentReader, DocumentWriter, Format, JsonLinesReader, MessagePackReader, MessagePackWriter,
};
use debsrc::{transcode, SourcePackage, TranscodeError};
use std::io::Cursor;

fn fixture_documents() -> Vec<SourcePackage> {
    open_sources_fixture()
        .map(|record| transcode(&record.unwrap()).unwrap())
        .collect()
}

#[test]
fn test_every_format_preserves_documents() {
    let documents = fixture_documents();
    assert_eq!(documents.len(), 3);

    for format in Format::ALL {
        let mut buffer = Vec::new();
        {
            let mut writer = format.writer(&mut buffer);
            writer.write_batch(&documents).unwrap();
            writer.finish().unwrap();
            assert_eq!(writer.documents_written(), 3, "{format}");
        }

        let mut reader = format.reader(Cursor::new(buffer));
        assert_eq!(reader.read_all().unwrap(), documents, "{format}");
        assert_eq!(reader.documents_read(), 3, "{format}");
    }
}

#[test]
fn test_messagepack_uses_named_fields() {
    let documents = fixture_documents();
    let mut writer = MessagePackWriter::new(Vec::new());
    writer.write_document(&documents[0]).unwrap();
    let bytes = writer.into_inner().unwrap();

    // A map keyed by field name, not a positional array
    let value: serde_json::Value = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(value["package"], "alien-arena");
    assert_eq!(value["priority"], "Source");
    assert_eq!(value["vcs"][0]["vcs_type"], "Browser");
    assert!(value["original_maintainer"].is_null());
}

#[test]
fn test_messagepack_reader_stops_cleanly() {
    let documents = fixture_documents();
    let mut writer = MessagePackWriter::new(Vec::new());
    writer.write_document(&documents[2]).unwrap();
    let bytes = writer.into_inner().unwrap();

    let mut reader = MessagePackReader::new(Cursor::new(bytes));
    assert_eq!(reader.read_document().unwrap().as_ref(), Some(&documents[2]));
    assert!(reader.read_document().unwrap().is_none());
    assert!(reader.read_document().unwrap().is_none());
}

#[test]
fn test_json_lines_rejects_unknown_enum_token() {
    let documents = fixture_documents();
    let mut value = serde_json::to_value(&documents[0]).unwrap();
    value["format"] = serde_json::Value::from("Bzr3dot0");
    let line = format!("{value}\n");

    let mut reader = JsonLinesReader::new(Cursor::new(line));
    assert!(matches!(
        reader.read_document(),
        Err(TranscodeError::Decode(_))
    ));
}
