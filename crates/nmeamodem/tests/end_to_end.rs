#![expect(missing_docs)]

mod common;

use nmeamodem::{
    DecodedSentence, ErrorKind, NormalizedBuffer, RawBuffer, Registry, SentenceDescriptor,
    SentenceExtractor, catalog, count,
};
use rstest::rstest;

use crate::common::{GGA, GSA, RMC, VTG, receiver_read};

#[test]
fn receiver_read_decodes_each_type() {
    let lines = SentenceExtractor::default()
        .extract(&receiver_read())
        .unwrap();
    let registry = Registry::with_catalog();

    let mut rmc = DecodedSentence::new(registry.get("GPRMC"));
    rmc.find(lines.as_str(), 1).unwrap();
    assert_eq!(rmc.sentence(), RMC);
    assert_eq!(rmc.fields().len(), 15);
    assert_eq!(rmc.field(0), Some("$GPRMC"));
    assert_eq!(rmc.field_by_name("Status"), Some("A"));
    assert_eq!(rmc.field_by_name("Mag Variation"), Some(""));
    assert_eq!(rmc.field_by_name("Navigational Status"), Some("V"));
    assert_eq!(rmc.field_by_name("Checksum"), Some("3C"));

    let mut gsa = DecodedSentence::new(registry.get("GPGSA"));
    gsa.find(lines.as_str(), 1).unwrap();
    assert_eq!(gsa.sentence(), GSA);
    assert_eq!(gsa.field_by_name("PDOP"), Some("2.5"));
    assert_eq!(gsa.field_by_name("SV 3"), Some(""));

    let mut gga = DecodedSentence::new(registry.get("GPGGA"));
    gga.find(lines.as_str(), 1).unwrap();
    assert_eq!(gga.sentence(), GGA);
    assert_eq!(gga.field_by_name("Altitude"), Some("545.4"));

    let mut vtg = DecodedSentence::new(registry.get("GPVTG"));
    let err = vtg.find(lines.as_str(), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!vtg.is_parsed());
}

#[test]
fn new_sentence_start_discards_interrupted_one() {
    let mut raw = b"$GPGGA,123519,4807.0".to_vec();
    raw.extend_from_slice(RMC.as_bytes());
    raw.extend_from_slice(b"\r\n");
    let lines = SentenceExtractor::default().extract(&raw).unwrap();

    assert_eq!(count(lines.as_str(), &catalog::gpgga()), Ok(0));
    assert_eq!(count(lines.as_str(), &catalog::gprmc()), Ok(1));
}

#[rstest]
#[case::second_of_two("GPRMC", 2, None)]
#[case::zero("GPRMC", 0, Some(ErrorKind::Capacity))]
#[case::third_of_two("GPRMC", 3, Some(ErrorKind::NotFound))]
#[case::absent("GPGLL", 1, Some(ErrorKind::NotFound))]
#[case::truncated("GPVTG", 1, Some(ErrorKind::Structural))]
fn lookup_errors_fall_into_families(
    #[case] name: &str,
    #[case] occurrence: usize,
    #[case] kind: Option<ErrorKind>,
) {
    let mut raw = receiver_read();
    raw.extend_from_slice(RMC.as_bytes());
    raw.extend_from_slice(b"\r\n$GPVTG,054.7,T,034.4");
    let lines = SentenceExtractor::default().extract(&raw).unwrap();

    let registry = Registry::with_catalog();
    let mut decoded = DecodedSentence::new(registry.get(name));
    let result = decoded.find(lines.as_str(), occurrence);
    assert_eq!(result.as_ref().err().map(|e| e.kind()), kind);
    assert_eq!(decoded.is_parsed(), kind.is_none());
}

#[test]
fn transport_loop_carries_unread_tail_to_next_cycle() {
    let mut stream = receiver_read();
    stream.extend_from_slice(VTG.as_bytes());
    stream.extend_from_slice(b"\r\n");

    let extractor = SentenceExtractor::default();
    let mut raw = RawBuffer::with_capacity(96);
    let mut lines = NormalizedBuffer::with_capacity(256);
    let mut seen = Vec::new();
    let mut pending = stream.as_slice();

    while !pending.is_empty() {
        raw.clear();
        let taken = raw.fill(pending);
        pending = &pending[taken..];
        extractor.extract_into(raw.as_bytes(), &mut lines).unwrap();
        seen.extend(
            lines
                .lines()
                .filter(|l| l.contains('*'))
                .map(String::from),
        );
    }

    // GSA and GGA straddle a read boundary and are lost in both reads.
    assert_eq!(seen, [RMC, VTG]);
}

#[test]
fn cycle_isolates_one_report() {
    let mut raw = receiver_read();
    raw.extend_from_slice(b"\x00\x00");
    raw.extend_from_slice(RMC.as_bytes());
    raw.extend_from_slice(b"\r\n");
    raw.extend_from_slice(GSA.as_bytes());
    let lines = SentenceExtractor::default().extract(&raw).unwrap();

    let cycle = lines.cycle("$GPRMC").unwrap();
    assert_eq!(cycle, format!("{RMC}\n{GSA}\n{GGA}\n"));
    assert_eq!(lines.cycle("$GPVTG"), None);

    let gga = catalog::gpgga();
    assert_eq!(count(cycle, &gga), Ok(1));
}

#[test]
fn custom_descriptor_decodes_other_talker() {
    let mut registry = Registry::with_catalog();
    let gnrmc = SentenceDescriptor::new(
        "GNRMC",
        "Recommended minimum data, combined constellations",
        catalog::RMC_FIELDS,
        RMC.replacen("$GP", "$GN", 1),
    )
    .unwrap();
    assert_eq!(registry.add(gnrmc), 6);

    let raw = format!("{}\r\n{RMC}\r\n", RMC.replacen("$GP", "$GN", 1));
    let lines = SentenceExtractor::default().extract(raw.as_bytes()).unwrap();

    let mut decoded = DecodedSentence::new(registry.get("GNRMC"));
    decoded.find(lines.as_str(), 1).unwrap();
    assert_eq!(decoded.field(0), Some("$GNRMC"));
    assert_eq!(decoded.field_by_name("Date"), Some("020723"));
    assert_eq!(decoded.count(lines.as_str()), Ok(1));
}

#[test]
fn unregistered_type_falls_back_to_dummy() {
    let registry = Registry::new();
    let lines = SentenceExtractor::default()
        .extract(&receiver_read())
        .unwrap();

    let dummy = registry.get("GPRMC");
    assert!(dummy.is_dummy());
    assert_eq!(count(lines.as_str(), dummy), Ok(0));
    let mut decoded = DecodedSentence::new(dummy);
    assert_eq!(
        decoded.find(lines.as_str(), 1).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}
