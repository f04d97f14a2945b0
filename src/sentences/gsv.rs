use crate::error::Defect;
use crate::sentence::Sentence;
use crate::sentences::parse::FieldReader;
use crate::sentences::{SentenceData, ValidationOutcome, decoded};

/// Elevation, azimuth, and signal strength for one satellite in view.
///
/// Any slot may be empty; a satellite can be tracked without a usable SNR,
/// and a sentence can carry fewer than four satellites by leaving whole
/// quadruples empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteInfo {
    /// Satellite PRN number.
    pub prn: Option<u32>,
    /// Elevation in degrees, at most 90.
    pub elevation: Option<u8>,
    /// Azimuth in degrees from true north, 0 to 359.
    pub azimuth: Option<u16>,
    /// Signal-to-noise ratio, 0 to 99.
    pub snr: Option<u8>,
}

/// GSV - satellites in view.
///
/// ```text
///         1 2 3 4 5 6  7   ...        19
///         | | | | | |  |               |
///  $GPGSV,x,x,x,x,x,xxx,xx,(3 more sets),*hh
/// ```
///
/// Message bookkeeping (fields 1–3) followed by four repeated
/// PRN/elevation/azimuth/SNR quadruples.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatellitesInView {
    /// How many GSV sentences make up this reporting cycle.
    pub total_messages: Option<u32>,
    /// Which sentence of the cycle this is.
    pub message_number: Option<u32>,
    /// Total satellites in view, at most 12.
    pub satellites_in_view: Option<u8>,
    /// The four satellite-info quadruples, in sentence order.
    pub satellites: [SatelliteInfo; 4],
}

/// Validates and decodes a `$GPGSV` sentence.
///
/// The quadruple block keeps walking across empty slots but rejects the
/// sentence at the first slot whose value is malformed or out of range.
pub fn parse_satellites_in_view(sentence: &Sentence) -> ValidationOutcome<'_> {
    decoded(fields(sentence), SentenceData::SatellitesInView)
}

fn fields(sentence: &Sentence) -> Result<(SatellitesInView, bool), Defect> {
    let mut reader = FieldReader::new(sentence);

    let total_messages = reader.integer("total message count")?;
    let message_number = reader.integer("message number")?;
    let satellites_in_view = reader
        .bounded_int("satellites in view", 12)?
        .map(|count| count as u8);

    let mut satellites = [SatelliteInfo::default(); 4];
    for info in &mut satellites {
        info.prn = reader.integer("satellite PRN")?;
        info.elevation = reader
            .bounded_int("satellite elevation", 90)?
            .map(|deg| deg as u8);
        info.azimuth = reader
            .bounded_int("satellite azimuth", 359)?
            .map(|deg| deg as u16);
        info.snr = reader.bounded_int("satellite SNR", 99)?.map(|snr| snr as u8);
    }

    Ok((
        SatellitesInView {
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
        },
        reader.terminator_present(),
    ))
}
