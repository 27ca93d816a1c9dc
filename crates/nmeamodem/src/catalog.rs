//! Descriptors for the sentence types a GPS receiver emits by default.
//!
//! Names use the `GP` talker. For multi-constellation receivers that report
//! as `GN`, build the same layout with [`SentenceDescriptor::new`] and the
//! field lists exported here.

use alloc::vec::Vec;

use crate::descriptor::SentenceDescriptor;

/// Field labels of an RMC sentence.
pub const RMC_FIELDS: [&str; 15] = [
    "Header",
    "UTC",
    "Status",
    "Latitude",
    "Latitude Direction",
    "Longitude",
    "Longitude Direction",
    "Speed",
    "Course",
    "Date",
    "Mag Variation",
    "Mag Variation Direction",
    "Mode",
    "Navigational Status",
    "Checksum",
];

/// Field labels of a GGA sentence.
pub const GGA_FIELDS: [&str; 16] = [
    "Header",
    "UTC",
    "Latitude",
    "Latitude Direction",
    "Longitude",
    "Longitude Direction",
    "Fix Quality",
    "Satellites",
    "HDOP",
    "Altitude",
    "Altitude Units",
    "Geoid Separation",
    "Geoid Separation Units",
    "DGPS Age",
    "DGPS Station",
    "Checksum",
];

/// Field labels of a GSA sentence.
pub const GSA_FIELDS: [&str; 19] = [
    "Header",
    "Mode",
    "Fix Type",
    "SV 1",
    "SV 2",
    "SV 3",
    "SV 4",
    "SV 5",
    "SV 6",
    "SV 7",
    "SV 8",
    "SV 9",
    "SV 10",
    "SV 11",
    "SV 12",
    "PDOP",
    "HDOP",
    "VDOP",
    "Checksum",
];

/// Field labels of a VTG sentence.
pub const VTG_FIELDS: [&str; 11] = [
    "Header",
    "True Course",
    "True Course Reference",
    "Magnetic Course",
    "Magnetic Course Reference",
    "Speed Knots",
    "Speed Knots Unit",
    "Speed Kmh",
    "Speed Kmh Unit",
    "Mode",
    "Checksum",
];

/// Field labels of a GLL sentence.
pub const GLL_FIELDS: [&str; 9] = [
    "Header",
    "Latitude",
    "Latitude Direction",
    "Longitude",
    "Longitude Direction",
    "UTC",
    "Status",
    "Mode",
    "Checksum",
];

/// `GPRMC`: recommended minimum navigation data.
#[must_use]
pub fn gprmc() -> SentenceDescriptor {
    // Checked by `catalog_entries_are_consistent`.
    SentenceDescriptor::from_static(
        "GPRMC",
        "Recommended minimum specific GNSS data",
        &RMC_FIELDS,
        "$GPRMC,120556.096,V,123.456,N,123.456,E,1.23,123.45,020723,1.9,W,N,V*33",
    )
}

/// `GPGGA`: fix data.
#[must_use]
pub fn gpgga() -> SentenceDescriptor {
    SentenceDescriptor::from_static(
        "GPGGA",
        "Global positioning system fix data",
        &GGA_FIELDS,
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
    )
}

/// `GPGSA`: DOP and active satellites.
#[must_use]
pub fn gpgsa() -> SentenceDescriptor {
    SentenceDescriptor::from_static(
        "GPGSA",
        "GNSS DOP and active satellites",
        &GSA_FIELDS,
        "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
    )
}

/// `GPVTG`: course over ground and ground speed.
#[must_use]
pub fn gpvtg() -> SentenceDescriptor {
    SentenceDescriptor::from_static(
        "GPVTG",
        "Course over ground and ground speed",
        &VTG_FIELDS,
        "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25",
    )
}

/// `GPGLL`: geographic position.
#[must_use]
pub fn gpgll() -> SentenceDescriptor {
    SentenceDescriptor::from_static(
        "GPGLL",
        "Geographic position, latitude and longitude",
        &GLL_FIELDS,
        "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C",
    )
}

/// Every descriptor in the catalog, in the order a receiver usually sends
/// them.
#[must_use]
pub fn all() -> Vec<SentenceDescriptor> {
    alloc::vec![gprmc(), gpvtg(), gpgga(), gpgsa(), gpgll()]
}
