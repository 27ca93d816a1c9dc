#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmeamodem::{
    DecodedSentence, DecoderOptions, ExtractorOptions, Registry, SentenceDescriptor,
    SentenceExtractor, check,
};

const TYPES: [&str; 5] = ["RMC", "GGA", "GSA", "VTG", "GLL"];
const FIELD_CHARS: &[u8] = b"0123456789ABCDEFNSEW.-";

#[derive(Debug, Arbitrary)]
enum Segment {
    /// A well-formed sentence built from the given pieces.
    Sentence {
        kind: u8,
        fields: Vec<Vec<u8>>,
        checksum: u16,
    },
    /// Anything at all, including `$`, `*` and line breaks.
    Bytes(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u16,
    keep_partial: bool,
    segments: Vec<Segment>,
}

fn sentence(kind: u8, fields: &[Vec<u8>], checksum: u16) -> String {
    let mut line = format!("$GP{}", TYPES[usize::from(kind) % TYPES.len()]);
    for f in fields {
        line.push(',');
        line.extend(
            f.iter()
                .map(|&b| char::from(FIELD_CHARS[usize::from(b) % FIELD_CHARS.len()])),
        );
    }
    line.push_str(&format!("*{:02X}", checksum & 0xFF));
    line
}

fn run(input: &Input) {
    let mut raw = Vec::new();
    let mut sentences = Vec::new();
    for seg in &input.segments {
        match seg {
            Segment::Sentence {
                kind,
                fields,
                checksum,
            } => {
                let line = sentence(*kind, fields, *checksum);
                raw.extend_from_slice(line.as_bytes());
                raw.extend_from_slice(b"\r\n");
                sentences.push(line);
            }
            Segment::Bytes(bytes) => raw.extend_from_slice(bytes),
        }
    }

    let extractor = SentenceExtractor::new(ExtractorOptions {
        capacity: usize::from(input.capacity),
        keep_partial: input.keep_partial,
        ..Default::default()
    })
    .expect("default talker lead");
    let out = match extractor.extract(&raw) {
        Ok(out) => out,
        Err(_) => return,
    };

    for line in out.lines() {
        assert!(line.starts_with("$G"), "line without sentence start: {line:?}");
        assert!(line.matches('*').count() <= 1, "line with two tails: {line:?}");
    }

    let again = extractor
        .extract(out.as_bytes())
        .expect("normalized output fits its own capacity");
    assert_eq!(out.as_bytes(), again.as_bytes(), "re-extraction changed output");

    let registry = Registry::with_catalog();
    let options = DecoderOptions {
        max_lines: usize::from(u16::MAX),
    };
    for descriptor in &registry {
        for line in out.lines() {
            let _ = check(line, descriptor);
        }
        let mut decoded = DecodedSentence::with_options(descriptor, options);
        if decoded.find(out.as_str(), 1).is_ok() {
            assert_eq!(decoded.fields().len(), descriptor.field_count());
        }
    }

    // Generated sentences always decode against a layout built from
    // themselves.
    for line in &sentences {
        let commas = line.bytes().filter(|&b| b == b',').count();
        let descriptor = SentenceDescriptor::new(
            &line[1..6],
            "",
            (0..commas + 2).map(|i| format!("F{i}")),
            line.as_str(),
        )
        .expect("generated layout");
        let mut decoded = DecodedSentence::new(&descriptor);
        decoded.set(line);
        decoded.parse().expect("generated sentence");
        assert_eq!(decoded.fields().len(), commas + 2);
    }
}

fuzz_target!(|input: Input| run(&input));
