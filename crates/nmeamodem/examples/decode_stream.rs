//! Pulls position fixes out of a receiver that mixes NMEA text with binary
//! UBX frames on the same serial line.
//!
//! Each loop iteration stands for one read of the serial port: the bytes go
//! into a bounded [`RawBuffer`], the extractor turns them into clean
//! sentences, and the decoders pick out the RMC and GGA of that read. Reads
//! are canned here; on a device they would come from the UART driver.
//!
//! Run with
//!
//! ```bash
//! cargo run -p nmeamodem --example decode_stream
//! ```

use nmeamodem::{DecodedSentence, ErrorKind, RawBuffer, Registry, SentenceExtractor};

fn main() {
    let reads: [&[u8]; 3] = [
        b"\xb5\x62\x01\x07\x5c\x00\x10\x27\x00\x00\
          $GPRMC,120556.096,A,4807.038,N,01131.000,E,0.02,31.66,020723,,,A,V*3C\r\n\
          $GPGGA,120556.096,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*6B\r\n",
        // The GGA is cut off by the end of the read.
        b"$GPRMC,120557.096,A,4807.040,N,01131.002,E,0.03,31.70,020723,,,A,V*38\r\n\
          \x01\x02$GPGGA,120557.096,4807.0",
        // Receiver lost its fix; only binary traffic arrives.
        b"\xb5\x62\x01\x07\x5c\x00\x10\x27\x00\x00\xb5\x62\x01\x35",
    ];

    let registry = Registry::with_catalog();
    let extractor = SentenceExtractor::default();
    let mut raw = RawBuffer::new();

    for (n, read) in reads.iter().enumerate() {
        raw.clear();
        raw.fill(read);
        let lines = match extractor.extract(raw.as_bytes()) {
            Ok(lines) => lines,
            Err(err) => {
                eprintln!("read {n}: {err}");
                continue;
            }
        };

        let mut rmc = DecodedSentence::new(registry.get("GPRMC"));
        let mut gga = DecodedSentence::new(registry.get("GPGGA"));

        match rmc.find(lines.as_str(), 1) {
            Ok(()) => println!(
                "read {n}: {} {} {}{} {}{}",
                rmc.field_by_name("Date").unwrap_or_default(),
                rmc.field_by_name("UTC").unwrap_or_default(),
                rmc.field_by_name("Latitude").unwrap_or_default(),
                rmc.field_by_name("Latitude Direction").unwrap_or_default(),
                rmc.field_by_name("Longitude").unwrap_or_default(),
                rmc.field_by_name("Longitude Direction").unwrap_or_default(),
            ),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                println!("read {n}: no position");
                continue;
            }
            Err(err) => {
                eprintln!("read {n}: bad RMC: {err}");
                continue;
            }
        }

        match gga.find(lines.as_str(), 1) {
            Ok(()) => println!(
                "read {n}:   {} satellites, altitude {} {}",
                gga.field_by_name("Satellites").unwrap_or_default(),
                gga.field_by_name("Altitude").unwrap_or_default(),
                gga.field_by_name("Altitude Units").unwrap_or_default(),
            ),
            Err(err) => println!("read {n}:   no altitude ({err})"),
        }
    }
}
