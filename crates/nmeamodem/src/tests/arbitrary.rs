use alloc::{format, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// One piece of a simulated receiver stream.
#[derive(Debug, Clone)]
pub(crate) enum Segment {
    /// A complete `$G...*CC\r\n` sentence.
    Sentence(Sentence),
    /// The head of a sentence whose tail was lost.
    Fragment(String),
    /// Bytes of some other protocol. Never contains `*`, and every `$` in
    /// it is followed by a printable byte other than the talker lead.
    Noise(Vec<u8>),
}

/// A well-formed sentence: header, data fields and a hex checksum tail.
#[derive(Debug, Clone)]
pub(crate) struct Sentence {
    pub header: String,
    pub fields: Vec<String>,
    pub checksum: String,
}

impl Sentence {
    /// The sentence without its line terminator.
    pub fn line(&self) -> String {
        let mut line = self.header.clone();
        for f in &self.fields {
            line.push(',');
            line.push_str(f);
        }
        line.push('*');
        line.push_str(&self.checksum);
        line
    }

    /// Talker and type, without `$`.
    pub fn name(&self) -> &str {
        &self.header[1..]
    }
}

const TALKERS: &[&str] = &["GP", "GN", "GL", "GA"];
const TYPES: &[&str] = &["RMC", "GGA", "GSA", "VTG", "GLL"];
const FIELD_CHARS: &[u8] = b"0123456789ABCDEFNSEW.-";
const HEX: &[u8] = b"0123456789ABCDEF";

fn pick<'a, T>(g: &mut Gen, from: &'a [T]) -> &'a T {
    &from[usize::arbitrary(g) % from.len()]
}

fn field(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 8;
    (0..len).map(|_| char::from(*pick(g, FIELD_CHARS))).collect()
}

/// Removes `*` and any `G` that would complete a `$G` start, and drops a
/// `$` left dangling at the end where the next segment could complete it.
fn noise(bytes: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    // Start of a run of `$` still waiting for a printable byte.
    let mut dollar = None;
    for b in bytes {
        match b {
            b'*' => continue,
            b'G' if dollar.is_some() => continue,
            b'$' => {
                dollar.get_or_insert(out.len());
            }
            _ if b.is_ascii_graphic() || b == b'\r' || b == b'\n' => dollar = None,
            _ => {}
        }
        out.push(b);
    }
    if let Some(at) = dollar {
        out.truncate(at);
    }
    out
}

impl Arbitrary for Sentence {
    fn arbitrary(g: &mut Gen) -> Self {
        let header = format!("${}{}", pick(g, TALKERS), pick(g, TYPES));
        let fields = (0..usize::arbitrary(g) % 20).map(|_| field(g)).collect();
        let checksum = (0..2).map(|_| char::from(*pick(g, HEX))).collect();
        Sentence {
            header,
            fields,
            checksum,
        }
    }
}

impl Arbitrary for Segment {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 4 {
            0 | 1 => Segment::Sentence(Sentence::arbitrary(g)),
            2 => {
                let line = Sentence::arbitrary(g).line();
                let cut = line.find('*').unwrap_or(line.len());
                let keep = 2 + usize::arbitrary(g) % (cut - 1);
                Segment::Fragment(String::from(&line[..keep.min(cut)]))
            }
            _ => Segment::Noise(noise(Vec::arbitrary(g))),
        }
    }
}

/// A raw receiver buffer built from segments.
#[derive(Debug, Clone)]
pub(crate) struct Stream(pub Vec<Segment>);

impl Stream {
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for seg in &self.0 {
            match seg {
                Segment::Sentence(s) => {
                    out.extend_from_slice(s.line().as_bytes());
                    out.extend_from_slice(b"\r\n");
                }
                Segment::Fragment(f) => out.extend_from_slice(f.as_bytes()),
                Segment::Noise(n) => out.extend_from_slice(n),
            }
        }
        out
    }

    /// The complete sentences, in order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.0.iter().filter_map(|seg| match seg {
            Segment::Sentence(s) => Some(s),
            _ => None,
        })
    }
}

impl Arbitrary for Stream {
    fn arbitrary(g: &mut Gen) -> Self {
        Stream(Vec::arbitrary(g))
    }
}

#[test]
fn noise_keeps_stray_dollars_but_never_a_start() {
    assert_eq!(noise(b"a$b$$c*".to_vec()), b"a$b$$c");
    assert_eq!(noise(b"$G$\x00Gx".to_vec()), b"$$\x00x");
    assert_eq!(noise(b"xy$\x01".to_vec()), b"xy");
    assert_eq!(noise(b"$$".to_vec()), b"");
}
