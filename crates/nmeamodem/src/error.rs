//! Error taxonomy for the extractor and the field decoder.
//!
//! Failures fall into three families which callers usually treat
//! differently: a sentence that is malformed ([`StructuralError`]), a request
//! or input that exceeds a fixed bound ([`CapacityError`]), and a sentence
//! type that simply is not present ([`NotFoundError`]). Decoder operations
//! return the umbrella [`DecodeError`]; [`DecodeError::kind`] recovers the
//! family without matching on every variant.

use alloc::string::String;

use thiserror::Error;

/// The sentence text does not have the shape its descriptor promises.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// The line starts with neither `NAME` nor `$NAME`.
    #[error("sentence does not start with '{expected}' or '${expected}'")]
    InvalidHeader {
        /// Talker and type the descriptor expects, e.g. `GPRMC`.
        expected: String,
    },
    /// Wrong number of `,` separators.
    #[error("expected {expected} commas, found {found}")]
    CommaCount {
        /// `field_count - 2` of the descriptor.
        expected: usize,
        /// Commas actually present in the line.
        found: usize,
    },
    /// No `*` introduces a checksum tail.
    #[error("no checksum marker '*' in sentence")]
    MissingChecksum,
    /// A `,` follows the `*`, so the tail would swallow a field.
    #[error("comma inside checksum tail")]
    CommaInChecksum,
}

/// A fixed bound was reached. Nothing was written past it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// A bounded buffer cannot take more bytes.
    #[error("buffer capacity of {capacity} bytes exceeded")]
    BufferFull {
        /// Capacity of the buffer that overflowed.
        capacity: usize,
    },
    /// The requested occurrence is `0` or above the line cap.
    #[error("occurrence {requested} is outside 1..={max}")]
    OccurrenceOutOfRange {
        /// The occurrence that was asked for.
        requested: usize,
        /// Largest occurrence that can ever be satisfied.
        max: usize,
    },
    /// The buffer holds more lines than the decoder is allowed to split.
    #[error("buffer holds more than {max} lines")]
    TooManyLines {
        /// The configured line cap.
        max: usize,
    },
}

/// The sentence type was not found often enough.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No line of this type is present at all.
    #[error("no {name} sentence in buffer")]
    Absent {
        /// Talker and type that was searched for.
        name: String,
    },
    /// Some lines match, but fewer than requested.
    #[error("requested {name} occurrence {requested}, only {found} present")]
    NotEnoughOccurrences {
        /// Talker and type that was searched for.
        name: String,
        /// The 1-based occurrence asked for.
        requested: usize,
        /// Number of matching lines present.
        found: usize,
    },
}

/// Error returned by the decoder operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// See [`StructuralError`].
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),
    /// See [`CapacityError`].
    #[error("capacity error: {0}")]
    Capacity(#[from] CapacityError),
    /// See [`NotFoundError`].
    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),
}

/// Coarse family of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed sentence.
    Structural,
    /// A bound was exceeded.
    Capacity,
    /// Sentence type missing or too rare.
    NotFound,
}

impl DecodeError {
    /// Returns the family this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Structural(_) => ErrorKind::Structural,
            DecodeError::Capacity(_) => ErrorKind::Capacity,
            DecodeError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// [`ExtractorOptions`](crate::ExtractorOptions) the extractor cannot honour.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    /// The talker lead would let a line break, a second `*` or a bare `$`
    /// into the output.
    #[error("talker lead {lead:#04x} must be printable ASCII other than '$' and '*'")]
    InvalidTalkerLead {
        /// The rejected byte.
        lead: u8,
    },
}

/// A [`SentenceDescriptor`](crate::SentenceDescriptor) could not be built
/// because its parts disagree with each other.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// The name is empty.
    #[error("descriptor name is empty")]
    EmptyName,
    /// `field_names` and `field_count` disagree.
    #[error("{names} field names given for {field_count} fields")]
    FieldNameCount {
        /// Declared field count.
        field_count: usize,
        /// Number of labels supplied.
        names: usize,
    },
    /// The sample does not have `field_count - 2` commas.
    #[error("sample has {commas} commas, {field_count} fields need {}", .field_count.saturating_sub(2))]
    SampleCommaCount {
        /// Declared field count.
        field_count: usize,
        /// Commas found in the sample.
        commas: usize,
    },
}
