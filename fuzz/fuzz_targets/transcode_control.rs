#![no_main]

use debsrc::control::parse_records;
use debsrc::formats::{DocumentReader, DocumentWriter, MessagePackReader, MessagePackWriter};
use debsrc::{ControlReader, Transcoder};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Streaming and in-memory parsing see the same paragraphs
    if let Ok(text) = std::str::from_utf8(data) {
        let streamed: Vec<String> = ControlReader::new(Cursor::new(text))
            .map(|r| format!("{r:?}"))
            .collect();
        let in_memory: Vec<String> = parse_records(text).iter().map(|r| format!("{r:?}")).collect();
        assert_eq!(streamed, in_memory);
    }

    let transcoder = Transcoder::default();
    for record in ControlReader::new(Cursor::new(data)) {
        let Ok(record) = record else { continue };
        let Ok(transcoded) = transcoder.transcode(&record) else {
            continue;
        };

        // Anything that transcodes must survive encoding
        let mut writer = MessagePackWriter::new(Vec::new());
        writer.write_document(&transcoded.document).unwrap();
        let bytes = writer.into_inner().unwrap();
        let decoded = MessagePackReader::new(Cursor::new(bytes))
            .read_document()
            .unwrap();
        assert_eq!(decoded.as_ref(), Some(&transcoded.document));
    }
});
