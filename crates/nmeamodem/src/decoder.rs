//! Field decoder: validates one sentence against its descriptor and splits
//! it into fields.
//!
//! A sentence `$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C` decodes into the
//! header `$GPGLL`, the data fields, and the two-character checksum tail
//! `5C` as the last field. The last data field and the tail are separated
//! by `*`, not `,`, so a descriptor with `n` fields expects `n - 2` commas.
//!
//! The checksum value is never verified, only its presence.

use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Range};

use crate::{
    descriptor::SentenceDescriptor,
    error::{CapacityError, DecodeError, NotFoundError, StructuralError},
    options::DecoderOptions,
};

/// Checks that `line` has the shape `descriptor` promises.
///
/// The line must start with the descriptor's name (with or without `$`),
/// contain exactly `field_count - 2` commas, and contain a `*` with no comma
/// after it.
///
/// The last rule is stricter than a plain presence check for `*`: a comma in
/// the tail would otherwise pass the comma count while shifting every field
/// after it, so [`DecodedSentence::parse`] could not yield exactly
/// `field_count` fields.
///
/// # Errors
///
/// The first [`StructuralError`] found, in the order listed above.
pub fn check(line: &str, descriptor: &SentenceDescriptor) -> Result<(), StructuralError> {
    if !descriptor.matches(line) {
        log::debug!("{}: invalid header in {line:?}", descriptor.name());
        return Err(StructuralError::InvalidHeader {
            expected: descriptor.name().into(),
        });
    }

    let expected = descriptor.field_count().saturating_sub(2);
    let found = line.bytes().filter(|&b| b == b',').count();
    if found != expected {
        log::debug!("{}: {found} commas, expected {expected}", descriptor.name());
        return Err(StructuralError::CommaCount { expected, found });
    }

    let Some(star) = line.find('*') else {
        log::debug!("{}: no checksum in {line:?}", descriptor.name());
        return Err(StructuralError::MissingChecksum);
    };
    if line[star..].contains(',') {
        log::debug!("{}: comma after checksum marker", descriptor.name());
        return Err(StructuralError::CommaInChecksum);
    }

    Ok(())
}

/// Counts the lines of `buffer` that start with the descriptor's name, with
/// or without `$`. Uses the default [`DecoderOptions`].
///
/// # Errors
///
/// [`CapacityError::TooManyLines`] if `buffer` has more non-empty lines than
/// [`DecoderOptions::max_lines`].
pub fn count(buffer: &str, descriptor: &SentenceDescriptor) -> Result<usize, CapacityError> {
    count_with(buffer, descriptor, &DecoderOptions::default())
}

/// [`count`] with explicit options.
///
/// # Errors
///
/// As [`count`].
pub fn count_with(
    buffer: &str,
    descriptor: &SentenceDescriptor,
    options: &DecoderOptions,
) -> Result<usize, CapacityError> {
    let lines = split_lines(buffer, options.max_lines)?;
    let n = lines.iter().filter(|l| descriptor.matches(l)).count();
    log::debug!("found {n} {} lines", descriptor.name());
    Ok(n)
}

/// Splits `buffer` into its non-empty lines, refusing more than `max`.
fn split_lines(buffer: &str, max: usize) -> Result<Vec<&str>, CapacityError> {
    let mut lines = Vec::new();
    for line in buffer.lines().filter(|l| !l.is_empty()) {
        if lines.len() == max {
            log::warn!("buffer has more than {max} lines");
            return Err(CapacityError::TooManyLines { max });
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Byte ranges of the fields of a sentence that passed [`check`].
fn split_fields(line: &str) -> Vec<Range<usize>> {
    let mut fields = Vec::new();
    let mut start = 0;
    for (i, b) in line.bytes().enumerate() {
        match b {
            b',' => {
                fields.push(start..i);
                start = i + 1;
            }
            b'*' => {
                fields.push(start..i);
                fields.push(i + 1..line.len());
                return fields;
            }
            _ => {}
        }
    }
    fields.push(start..line.len());
    fields
}

/// The most recent sentence of one type and its decoded fields.
///
/// Bound to a descriptor for its whole life. [`set`](DecodedSentence::set)
/// stores a sentence, [`parse`](DecodedSentence::parse) splits it, and
/// [`find`](DecodedSentence::find) does both for the n-th matching line of
/// a buffer.
///
/// A failed `parse` clears the fields, so stale values from an earlier
/// sentence are never served after an error.
///
/// ```rust
/// use nmeamodem::{DecodedSentence, catalog};
///
/// let gll = catalog::gpgll();
/// let mut decoded = DecodedSentence::new(&gll);
/// decoded.set("$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C");
/// decoded.parse().unwrap();
/// assert_eq!(decoded.field_by_name("Latitude"), Some("4916.45"));
/// assert_eq!(decoded.field(8), Some("5C"));
/// ```
#[derive(Debug, Clone)]
pub struct DecodedSentence<'d> {
    descriptor: &'d SentenceDescriptor,
    options: DecoderOptions,
    sentence: String,
    fields: Vec<Range<usize>>,
}

impl<'d> DecodedSentence<'d> {
    /// Creates an empty record for `descriptor`.
    #[must_use]
    pub fn new(descriptor: &'d SentenceDescriptor) -> Self {
        Self::with_options(descriptor, DecoderOptions::default())
    }

    /// Creates an empty record for `descriptor` with explicit options.
    #[must_use]
    pub fn with_options(descriptor: &'d SentenceDescriptor, options: DecoderOptions) -> Self {
        Self {
            descriptor,
            options,
            sentence: String::new(),
            fields: Vec::with_capacity(descriptor.field_count()),
        }
    }

    /// The descriptor this record is bound to.
    #[must_use]
    pub fn descriptor(&self) -> &'d SentenceDescriptor {
        self.descriptor
    }

    /// Replaces the stored sentence and clears the fields.
    pub fn set(&mut self, line: &str) {
        log::trace!("{}: set {line:?}", self.descriptor.name());
        self.sentence.clear();
        self.sentence.push_str(line);
        self.fields.clear();
    }

    /// Checks the stored sentence and splits it into fields.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Structural`] if [`check`] fails. The fields are
    /// cleared.
    pub fn parse(&mut self) -> Result<(), DecodeError> {
        self.fields.clear();
        check(&self.sentence, self.descriptor)?;
        self.fields = split_fields(&self.sentence);
        debug_assert_eq!(self.fields.len(), self.descriptor.field_count());
        Ok(())
    }

    /// Finds the `occurrence`-th line (1-based) of this type in `buffer`,
    /// stores it and parses it.
    ///
    /// # Errors
    ///
    /// - [`CapacityError::OccurrenceOutOfRange`] if `occurrence` is `0` or
    ///   above [`DecoderOptions::max_lines`].
    /// - [`CapacityError::TooManyLines`] if `buffer` has too many lines.
    /// - [`NotFoundError::Absent`] if no line matches, or
    ///   [`NotFoundError::NotEnoughOccurrences`] if fewer than `occurrence`
    ///   do. The record is left untouched in these cases.
    /// - [`DecodeError::Structural`] if the line is found but malformed.
    pub fn find(&mut self, buffer: &str, occurrence: usize) -> Result<(), DecodeError> {
        let max = self.options.max_lines;
        if occurrence == 0 || occurrence > max {
            return Err(CapacityError::OccurrenceOutOfRange {
                requested: occurrence,
                max,
            }
            .into());
        }

        let lines = split_lines(buffer, max)?;
        let mut found = 0;
        for line in lines {
            if self.descriptor.matches(line) {
                found += 1;
                if found == occurrence {
                    log::debug!("{}: found occurrence {occurrence}", self.descriptor.name());
                    self.set(line);
                    return self.parse();
                }
            }
        }

        let name: String = self.descriptor.name().into();
        log::debug!("{name}: wanted occurrence {occurrence}, {found} present");
        Err(if found == 0 {
            NotFoundError::Absent { name }
        } else {
            NotFoundError::NotEnoughOccurrences {
                name,
                requested: occurrence,
                found,
            }
        }
        .into())
    }

    /// Counts the lines of this type in `buffer`; see [`count`].
    ///
    /// # Errors
    ///
    /// As [`count`].
    pub fn count(&self, buffer: &str) -> Result<usize, CapacityError> {
        count_with(buffer, self.descriptor, &self.options)
    }

    /// The sentence last passed to [`set`](DecodedSentence::set).
    #[must_use]
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Whether the stored sentence has been parsed successfully.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        !self.fields.is_empty()
    }

    /// The value of field `index`, if parsed.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|r| &self.sentence[r.clone()])
    }

    /// The value of the field labelled `name`, if parsed.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&str> {
        self.field(self.descriptor.field_index(name)?)
    }

    /// The parsed field values in order; empty if not parsed.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &str> {
        self.fields.iter().map(|r| &self.sentence[r.clone()])
    }
}

impl fmt::Display for DecodedSentence<'_> {
    /// Prints the type and one `label: value` line per field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {}",
            self.descriptor.name(),
            self.descriptor.description()
        )?;
        for (i, label) in self.descriptor.field_names().iter().enumerate() {
            writeln!(f, "  {label}: {}", self.field(i).unwrap_or_default())?;
        }
        Ok(())
    }
}
