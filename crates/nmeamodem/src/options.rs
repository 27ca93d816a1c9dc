/// Configuration options for [`SentenceExtractor`](crate::SentenceExtractor).
///
/// # Examples
///
/// ```rust
/// use nmeamodem::{ExtractorOptions, SentenceExtractor};
///
/// let extractor = SentenceExtractor::new(ExtractorOptions {
///     capacity: 1024,
///     ..Default::default()
/// })
/// .unwrap();
/// let out = extractor.extract(b"noise$GPGLL,1,N*00\r\n").unwrap();
/// assert_eq!(out.as_str(), "$GPGLL,1,N*00\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractorOptions {
    /// Capacity of the normalized output buffer, in bytes.
    ///
    /// Extraction stops with
    /// [`CapacityError::BufferFull`](crate::CapacityError::BufferFull) when a
    /// sentence would not fit. Sentences already written are kept.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) (4096)
    pub capacity: usize,

    /// The byte that must follow `$` for it to count as a sentence start.
    ///
    /// Receivers that emit several constellations use talker IDs such as
    /// `GP`, `GN`, `GL` or `GA`, which all share the leading `G`. A `$`
    /// followed by anything else is treated as noise. Must be printable
    /// ASCII other than `$` and `*`; see
    /// [`SentenceExtractor::new`](crate::SentenceExtractor::new).
    ///
    /// # Default
    ///
    /// `b'G'`
    pub talker_lead: u8,

    /// Whether a sentence cut short before its checksum tail is kept.
    ///
    /// A sentence is cut short by a line break or by the end of the input.
    /// When `true` it is written out up to that point and closed with a line
    /// feed. It lacks a checksum tail, so [`check`](crate::check) rejects it;
    /// the next read cycle carries the complete copy. When `false` it is
    /// dropped. A sentence interrupted by a new `$G` is always dropped.
    ///
    /// # Default
    ///
    /// `true`
    pub keep_partial: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            capacity: crate::DEFAULT_CAPACITY,
            talker_lead: b'G',
            keep_partial: true,
        }
    }
}

/// Configuration options for the line-oriented decoder operations
/// ([`count`](crate::count) and [`DecodedSentence::find`](crate::DecodedSentence::find)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Maximum number of non-empty lines a buffer may be split into.
    ///
    /// Buffers with more lines are rejected with
    /// [`CapacityError::TooManyLines`](crate::CapacityError::TooManyLines)
    /// rather than silently truncated. It also bounds the occurrence that
    /// `find` accepts.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_LINES`](crate::DEFAULT_MAX_LINES) (64)
    pub max_lines: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_lines: crate::DEFAULT_MAX_LINES,
        }
    }
}
