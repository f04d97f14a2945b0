use time::Time;

use crate::error::Defect;
use crate::sentence::Sentence;
use crate::sentences::parse::{AngleAxis, FieldReader};
use crate::sentences::{Angle, Quality, SentenceData, ValidationOutcome, decoded};

/// GGA - positioning system fix data.
///
/// ```text
///         1      2        3 4         5 6 7  8   9     10 11   12 13 14
///         |      |        | |         | | |  |   |     |  |    |  |  |
///  $GPGGA,hhmmss,ddmm.mmm,a,dddmm.mmm,a,x,xx,x.x,x.x,  M, x.x, M, x, x,*hh
/// ```
///
/// Time, position, fix quality, satellite count, HDOP, altitude and geoid
/// height (both in meters), differential age and station. Every field is
/// optional; a present field is validated against the bounds above its
/// position in [`parse_fix_data`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixData<'a> {
    /// UTC time the fix was taken.
    pub fix_time: Option<Time>,
    /// Latitude with hemisphere.
    pub latitude: Option<Angle<'a>>,
    /// Longitude with hemisphere.
    pub longitude: Option<Angle<'a>>,
    /// Quality of the fix.
    pub quality: Option<Quality>,
    /// Number of satellites being tracked, at most 12.
    pub satellites_in_use: Option<u8>,
    /// Horizontal dilution of precision, as written.
    pub hdop: Option<&'a str>,
    /// Altitude above mean sea level in meters, as written.
    pub altitude: Option<&'a str>,
    /// Height of the geoid above the WGS84 ellipsoid in meters, as written.
    pub geoid_height: Option<&'a str>,
    /// Seconds since the last differential update.
    pub dgps_age: Option<u32>,
    /// Differential reference station ID.
    pub station_id: Option<u32>,
}

/// Validates and decodes a `$GPGGA` sentence.
///
/// The sentence must carry the full tag; the first field starts immediately
/// after it. Validation stops at the first defective field.
pub fn parse_fix_data(sentence: &Sentence) -> ValidationOutcome<'_> {
    decoded(fields(sentence), SentenceData::FixData)
}

fn fields(sentence: &Sentence) -> Result<(FixData<'_>, bool), Defect> {
    let mut reader = FieldReader::new(sentence);

    let fix_time = reader.time("fix time")?;
    let latitude = reader.packed_angle("latitude", AngleAxis::Latitude)?;
    let longitude = reader.packed_angle("longitude", AngleAxis::Longitude)?;
    let quality = reader.code("fix quality", Quality::from_code)?;
    let satellites_in_use = reader
        .bounded_int("satellites in use", 12)?
        .map(|count| count as u8);
    let hdop = reader.magnitude("HDOP")?;
    let altitude = reader.measure("altitude", 'M')?;
    let geoid_height = reader.measure("geoid height", 'M')?;
    let dgps_age = reader.integer("DGPS age")?;
    let station_id = reader.integer("station id")?;

    Ok((
        FixData {
            fix_time,
            latitude,
            longitude,
            quality,
            satellites_in_use,
            hdop,
            altitude,
            geoid_height,
            dgps_age,
            station_id,
        },
        reader.terminator_present(),
    ))
}
