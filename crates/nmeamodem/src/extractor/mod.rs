//! Sentence extractor: recovers NMEA sentences from a noisy byte run.
//!
//! What it does
//! - Scans the raw bytes once, left to right, and copies every sentence that
//!   starts with `$` plus the talker lead (`G` by default) into a
//!   [`NormalizedBuffer`], one sentence per line.
//! - Everything between sentences is dropped: binary frames of other
//!   protocols sharing the port (UBX, RTCM), line terminators, stray bytes.
//! - A sentence ends two bytes after its `*`. The two checksum bytes are
//!   copied as they are; their value is never checked, but they must be
//!   printable and neither `$` nor `*`.
//!
//! Interruptions
//! - A new `$G` before the checksum tail means bytes were lost. The partial
//!   sentence is discarded and the new one starts in its place. Inside the
//!   tail any `$` discards it.
//! - A line break, or an unprintable byte or `*` inside the checksum tail,
//!   ends the line early. The partial sentence is kept or dropped per
//!   [`ExtractorOptions::keep_partial`], as is a sentence still open when
//!   the input runs out.
//!
//! Invariants
//! - Every non-empty output line begins with `$G` and holds at most one `*`.
//! - Output bytes are printable ASCII or `\n` after the final scrub pass.
//! - Nothing is written past the output capacity. On overflow the output
//!   keeps the whole sentences written so far.
//! - Extracting an extractor's own output yields the same bytes.


use crate::{
    buffer::NormalizedBuffer,
    error::{CapacityError, OptionsError},
    options::ExtractorOptions,
};

// States are named for what was *last seen*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any sentence.
    Searching,
    /// `$` outside a sentence; the talker lead must follow.
    Dollar,
    /// Inside a sentence, before `*`.
    Body,
    /// `$` inside a sentence; a talker lead restarts the sentence.
    BodyDollar,
    /// The `*` opening the checksum tail.
    Star,
    /// First checksum byte.
    Checksum1,
}

/// Single-pass extractor of NMEA-0183 sentences.
///
/// The extractor keeps no state between calls: each call to
/// [`extract`](SentenceExtractor::extract) handles one complete raw buffer.
///
/// ```rust
/// use nmeamodem::SentenceExtractor;
///
/// let raw = b"\xb5\x62\x01\x07$GPGLL,4916.45,N*5C\r\n$GPRMC,A,B$GPGSA,C*11\n";
/// let out = SentenceExtractor::default().extract(raw).unwrap();
/// assert_eq!(out.as_str(), "$GPGLL,4916.45,N*5C\n$GPGSA,C*11\n");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceExtractor {
    options: ExtractorOptions,
}

impl SentenceExtractor {
    /// Creates an extractor with the given options.
    ///
    /// # Errors
    ///
    /// [`OptionsError::InvalidTalkerLead`] unless
    /// [`ExtractorOptions::talker_lead`] is printable ASCII other than `$`
    /// and `*`.
    pub fn new(options: ExtractorOptions) -> Result<Self, OptionsError> {
        let lead = options.talker_lead;
        if !lead.is_ascii_graphic() || lead == b'$' || lead == b'*' {
            return Err(OptionsError::InvalidTalkerLead { lead });
        }
        Ok(Self { options })
    }

    /// The options this extractor was created with.
    #[must_use]
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extracts the sentences in `raw` into a new buffer of
    /// [`ExtractorOptions::capacity`] bytes.
    ///
    /// # Errors
    ///
    /// [`CapacityError::BufferFull`] if the sentences do not fit. Use
    /// [`extract_into`](SentenceExtractor::extract_into) to keep the part
    /// that did.
    pub fn extract(&self, raw: &[u8]) -> Result<NormalizedBuffer, CapacityError> {
        let mut out = NormalizedBuffer::with_capacity(self.options.capacity);
        self.extract_into(raw, &mut out)?;
        Ok(out)
    }

    /// Clears `out` and extracts the sentences in `raw` into it, returning
    /// the number of complete sentences written.
    ///
    /// The capacity of `out` applies, not [`ExtractorOptions::capacity`].
    ///
    /// # Errors
    ///
    /// [`CapacityError::BufferFull`] if the sentences do not fit. `out` then
    /// holds every whole sentence that fit, normalized.
    pub fn extract_into(
        &self,
        raw: &[u8],
        out: &mut NormalizedBuffer,
    ) -> Result<usize, CapacityError> {
        out.truncate(0);
        let mut pass = Pass {
            lead: self.options.talker_lead,
            keep_partial: self.options.keep_partial,
            out,
            state: State::Searching,
            start: 0,
            sentences: 0,
            discarded: 0,
        };

        let result = raw
            .iter()
            .try_for_each(|&b| pass.step(b))
            .and_then(|()| pass.finish());

        if let Err(err) = result {
            log::warn!(
                "extractor output full after {} sentences: {err}",
                pass.sentences
            );
            pass.rewind();
        }

        let sentences = pass.sentences;
        let discarded = pass.discarded;
        out.scrub();
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            out.is_terminated()
                && out
                    .as_bytes()
                    .iter()
                    .all(|&b| b == b'\n' || b.is_ascii_graphic()),
            "Internal error: extractor left unclean output"
        );
        log::debug!(
            "extracted {sentences} sentences ({} bytes in, {} bytes out, {discarded} discarded)",
            raw.len(),
            out.len(),
        );
        result.map(|()| sentences)
    }
}

/// State of one extraction run.
struct Pass<'a> {
    lead: u8,
    keep_partial: bool,
    out: &'a mut NormalizedBuffer,
    state: State,
    /// Output offset where the open sentence begins.
    start: usize,
    sentences: usize,
    discarded: usize,
}

impl Pass<'_> {
    fn step(&mut self, b: u8) -> Result<(), CapacityError> {
        match self.state {
            State::Searching => {
                if b == b'$' {
                    self.state = State::Dollar;
                }
            }
            State::Dollar => {
                if b == self.lead {
                    self.open()?;
                } else if b != b'$' {
                    self.state = State::Searching;
                }
            }
            State::Body => self.body(b)?,
            State::BodyDollar => {
                if b == self.lead {
                    log::trace!("sentence interrupted by a new start, discarding");
                    self.discarded += 1;
                    self.out.truncate(self.start);
                    self.open()?;
                } else if b == b'$' {
                    self.out.push(b'$')?;
                } else if !b.is_ascii_graphic() && b != b'\r' && b != b'\n' {
                    // Would be scrubbed anyway; must not split `$` from the lead.
                } else {
                    self.out.push(b'$')?;
                    self.state = State::Body;
                    self.body(b)?;
                }
            }
            State::Star | State::Checksum1 => self.tail(b)?,
        }
        Ok(())
    }

    fn tail(&mut self, b: u8) -> Result<(), CapacityError> {
        if b == b'$' {
            log::trace!("checksum tail interrupted by '$', discarding");
            self.discarded += 1;
            self.out.truncate(self.start);
            self.state = State::Dollar;
            return Ok(());
        }
        if b == b'*' || !b.is_ascii_graphic() {
            log::trace!("checksum tail cut short by {b:#04x}");
            self.close_partial()?;
            self.state = State::Searching;
            return Ok(());
        }
        self.out.push(b)?;
        if self.state == State::Star {
            self.state = State::Checksum1;
        } else {
            self.out.push(b'\n')?;
            self.sentences += 1;
            self.state = State::Searching;
        }
        Ok(())
    }

    fn body(&mut self, b: u8) -> Result<(), CapacityError> {
        match b {
            b'*' => {
                self.out.push(b)?;
                self.state = State::Star;
            }
            b'$' => self.state = State::BodyDollar,
            b'\r' | b'\n' => {
                log::trace!("sentence cut short by a line break");
                self.close_partial()?;
                self.state = State::Searching;
            }
            _ => self.out.push(b)?,
        }
        Ok(())
    }

    /// Starts a sentence with `$` and the talker lead.
    fn open(&mut self) -> Result<(), CapacityError> {
        self.start = self.out.len();
        self.out.push(b'$')?;
        self.out.push(self.lead)?;
        self.state = State::Body;
        Ok(())
    }

    /// Terminates, or drops, a sentence that never reached its tail.
    fn close_partial(&mut self) -> Result<(), CapacityError> {
        if self.keep_partial {
            self.out.push(b'\n')?;
        } else {
            self.discarded += 1;
            self.out.truncate(self.start);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CapacityError> {
        match self.state {
            State::Searching | State::Dollar => {}
            State::BodyDollar => {
                self.out.push(b'$')?;
                self.close_partial()?;
            }
            State::Body | State::Star | State::Checksum1 => {
                log::trace!("input ended inside a sentence");
                self.close_partial()?;
            }
        }
        self.state = State::Searching;
        if !self.out.is_terminated() {
            self.out.push(b'\n')?;
        }
        Ok(())
    }

    /// Drops whatever follows the last complete line.
    fn rewind(&mut self) {
        if self.state != State::Searching && self.state != State::Dollar {
            self.out.truncate(self.start);
        }
        while self.out.last().is_some_and(|b| b != b'\n') {
            self.out.truncate(self.out.len() - 1);
        }
    }
}
