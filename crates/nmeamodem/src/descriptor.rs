//! Static description of one sentence type.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::error::DescriptorError;

/// Name of the placeholder descriptor returned for unregistered types.
pub const DUMMY_NAME: &str = "DUMMY";

/// Metadata for one sentence type: its talker+type name, how many fields it
/// has and what they are called.
///
/// `field_count` counts the header (`$GPRMC`) and the checksum tail as
/// fields of their own. Because the last data field and the checksum are
/// joined by `*` instead of `,`, a well-formed sentence has exactly
/// `field_count - 2` commas. [`SentenceDescriptor::new`] checks this against
/// the sample.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDescriptor"))]
pub struct SentenceDescriptor {
    name: String,
    description: String,
    field_count: usize,
    field_names: Vec<String>,
    sample: String,
}

impl SentenceDescriptor {
    /// Builds a descriptor with one field per entry of `field_names`, after
    /// checking the sample against it.
    ///
    /// # Errors
    ///
    /// - [`DescriptorError::EmptyName`] if `name` is empty.
    /// - [`DescriptorError::SampleCommaCount`] unless `sample` has
    ///   `field_names.len() - 2` commas.
    pub fn new<N, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        field_names: N,
        sample: impl Into<String>,
    ) -> Result<Self, DescriptorError>
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        let field_names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        let field_count = field_names.len();
        let sample = sample.into();
        let commas = sample.bytes().filter(|&b| b == b',').count();
        if commas + 2 != field_count {
            return Err(DescriptorError::SampleCommaCount {
                field_count,
                commas,
            });
        }
        Ok(Self {
            name,
            description: description.into(),
            field_count,
            field_names,
            sample,
        })
    }

    /// Like [`new`](SentenceDescriptor::new), with the field count stated
    /// separately so a mismatched name list is caught.
    ///
    /// # Errors
    ///
    /// As [`new`](SentenceDescriptor::new), plus
    /// [`DescriptorError::FieldNameCount`] when `field_names` does not have
    /// `field_count` entries.
    pub fn with_field_count<N, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        field_count: usize,
        field_names: N,
        sample: impl Into<String>,
    ) -> Result<Self, DescriptorError>
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field_names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        if field_names.len() != field_count {
            return Err(DescriptorError::FieldNameCount {
                field_count,
                names: field_names.len(),
            });
        }
        Self::new(name, description, field_names, sample)
    }

    /// Builds a descriptor from constant parts without validating them.
    pub(crate) fn from_static(
        name: &str,
        description: &str,
        field_names: &[&str],
        sample: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            field_count: field_names.len(),
            field_names: field_names.iter().map(ToString::to_string).collect(),
            sample: sample.to_string(),
        }
    }

    /// The placeholder handed out for sentence types nobody registered.
    ///
    /// Its name never appears in real traffic, so it matches nothing.
    #[must_use]
    pub fn dummy() -> Self {
        Self::from_static(
            DUMMY_NAME,
            "No sentence types registered; add at least one descriptor.",
            &crate::catalog::RMC_FIELDS,
            "$DUMMY,120556.096,V,123.456,N,123.456,E,1.23,123.45,020723,1.9,W,N,V*33",
        )
    }

    /// Talker and type, e.g. `GPRMC`, without the leading `$`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description of the sentence type.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of fields including the header and the checksum tail.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Field labels, one per field, in sentence order.
    #[must_use]
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// An example sentence of this type.
    #[must_use]
    pub fn sample(&self) -> &str {
        &self.sample
    }

    /// Whether this is the [`dummy`](SentenceDescriptor::dummy) placeholder.
    #[must_use]
    pub fn is_dummy(&self) -> bool {
        self.name == DUMMY_NAME
    }

    /// Position of the field labelled `name`, or `None` if no field has that
    /// label.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|n| n == name)
    }

    /// Whether `line` starts with this type's name, with or without `$`.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        line.strip_prefix('$').unwrap_or(line).starts_with(&*self.name)
    }
}

/// Unchecked wire form; deserialization goes through
/// [`SentenceDescriptor::with_field_count`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDescriptor {
    name: String,
    description: String,
    field_count: usize,
    field_names: Vec<String>,
    sample: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDescriptor> for SentenceDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        Self::with_field_count(
            raw.name,
            raw.description,
            raw.field_count,
            raw.field_names,
            raw.sample,
        )
    }
}
