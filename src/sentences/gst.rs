use time::Time;

use crate::error::Defect;
use crate::sentence::Sentence;
use crate::sentences::parse::FieldReader;
use crate::sentences::{SentenceData, ValidationOutcome, decoded};

/// GST - pseudorange noise statistics.
///
/// ```text
///         1      2   3   4   5     6   7   8
///         |      |   |   |   |     |   |   |
///  $GPGST,hhmmss,x.x,x.x,x.x,x.x,  x.x,x.x,x.x,*hh
/// ```
///
/// One-sigma error estimates for the fix: the RMS of the pseudorange
/// residuals, the error ellipse (semi-major, semi-minor, orientation), and
/// the per-axis errors. All magnitudes are in meters and kept as written.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudorangeStatistics<'a> {
    /// UTC time of the fix the statistics describe.
    pub fix_time: Option<Time>,
    /// RMS value of the pseudorange residuals.
    pub rms_residual: Option<&'a str>,
    /// Error ellipse semi-major axis one-sigma error.
    pub sigma_major: Option<&'a str>,
    /// Error ellipse semi-minor axis one-sigma error.
    pub sigma_minor: Option<&'a str>,
    /// Error ellipse orientation in degrees from true north, 0 to 359.
    pub ellipse_orientation: Option<&'a str>,
    /// Latitude one-sigma error.
    pub sigma_latitude: Option<&'a str>,
    /// Longitude one-sigma error.
    pub sigma_longitude: Option<&'a str>,
    /// Height one-sigma error.
    pub sigma_height: Option<&'a str>,
}

/// Validates and decodes a `$GPGST` sentence.
pub fn parse_pseudorange_statistics(sentence: &Sentence) -> ValidationOutcome<'_> {
    decoded(fields(sentence), SentenceData::PseudorangeStatistics)
}

fn fields(sentence: &Sentence) -> Result<(PseudorangeStatistics<'_>, bool), Defect> {
    let mut reader = FieldReader::new(sentence);

    let fix_time = reader.time("fix time")?;
    let rms_residual = reader.magnitude("RMS residual")?;
    let sigma_major = reader.magnitude("sigma major")?;
    let sigma_minor = reader.magnitude("sigma minor")?;
    let ellipse_orientation = reader.bearing_magnitude("ellipse orientation", 359)?;
    let sigma_latitude = reader.magnitude("sigma latitude")?;
    let sigma_longitude = reader.magnitude("sigma longitude")?;
    let sigma_height = reader.magnitude("sigma height")?;

    Ok((
        PseudorangeStatistics {
            fix_time,
            rms_residual,
            sigma_major,
            sigma_minor,
            ellipse_orientation,
            sigma_latitude,
            sigma_longitude,
            sigma_height,
        },
        reader.terminator_present(),
    ))
}
