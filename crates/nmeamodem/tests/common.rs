#![allow(missing_docs, dead_code)]

pub const RMC: &str =
    "$GPRMC,120556.096,A,4807.038,N,01131.000,E,0.02,31.66,020723,,,A,V*3C";
pub const GSA: &str = "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39";
pub const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
pub const VTG: &str = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25";

/// A UBX-NAV-PVT header: binary traffic sharing the port with NMEA.
pub const UBX: &[u8] = b"\xb5\x62\x01\x07\x5c\x00\x10\x27\x00\x00";

/// One receiver read: binary noise, an RMC, a stray control byte, a GSA and
/// a GGA, each NMEA sentence terminated by CRLF.
pub fn receiver_read() -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(UBX);
    raw.extend_from_slice(RMC.as_bytes());
    raw.extend_from_slice(b"\r\n\x01");
    raw.extend_from_slice(GSA.as_bytes());
    raw.extend_from_slice(b"\r\n");
    raw.extend_from_slice(GGA.as_bytes());
    raw.extend_from_slice(b"\r\n");
    raw
}
