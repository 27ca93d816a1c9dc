//! Recovers NMEA-0183 sentences from a noisy GNSS byte stream and splits
//! them into named fields.
//!
//! Two stages:
//!
//! 1. [`SentenceExtractor`] scans a raw buffer (which may interleave NMEA
//!    text with binary protocol frames, dropped bytes and control noise)
//!    and writes one `$G...*CC` sentence per line into a
//!    [`NormalizedBuffer`].
//! 2. [`DecodedSentence`] validates a line against a [`SentenceDescriptor`]
//!    and splits it into fields, optionally picking the n-th sentence of its
//!    type out of a normalized buffer.
//!
//! ```rust
//! use nmeamodem::{DecodedSentence, Registry, SentenceExtractor};
//!
//! let raw = b"\x01\x02$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
//! let lines = SentenceExtractor::default().extract(raw).unwrap();
//!
//! let registry = Registry::with_catalog();
//! let mut gga = DecodedSentence::new(registry.get("GPGGA"));
//! gga.find(lines.as_str(), 1).unwrap();
//! assert_eq!(gga.field_by_name("Satellites"), Some("08"));
//! ```
//!
//! The crate is `no_std` and needs `alloc`. It logs through the [`log`]
//! facade; nothing is printed unless the application installs a logger.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
pub mod catalog;
mod decoder;
mod descriptor;
mod error;
mod extractor;
mod options;
mod registry;

#[cfg(test)]
mod tests;

pub use buffer::{DEFAULT_CAPACITY, NormalizedBuffer, RawBuffer};
pub use decoder::{DecodedSentence, check, count, count_with};
pub use descriptor::{DUMMY_NAME, SentenceDescriptor};
pub use error::{
    CapacityError, DecodeError, DescriptorError, ErrorKind, NotFoundError, OptionsError,
    StructuralError,
};
pub use extractor::SentenceExtractor;
pub use options::{DecoderOptions, ExtractorOptions};
pub use registry::Registry;

/// Default line cap for [`count`] and [`DecodedSentence::find`].
pub const DEFAULT_MAX_LINES: usize = 64;
