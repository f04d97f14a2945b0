//! # Sentence Grammars
//!
//! The five supported grammars, their decoded data types, and the dispatcher
//! that selects a parser by tag.
//!
//! Every parser follows the same policy:
//! - an empty field is "not specified" (`None` in the decoded data), never
//!   an error;
//! - the first non-empty field that fails its shape, range, or enumeration
//!   check rejects the whole sentence with a located [`Defect`];
//! - counted repetition blocks (the twelve PRN slots, the four
//!   satellite-info quadruples) keep walking across empty slots but fail
//!   fast on an out-of-range one;
//! - after the last data field the next character must be the checksum
//!   marker `*`; its absence is reported in the decoded result rather than
//!   rejecting the fields already validated. The marker's hexadecimal value
//!   is classified by the pre-validation scan but never compared against a
//!   computed checksum.

pub(crate) mod parse;

mod gga;
mod gll;
mod gsa;
mod gst;
mod gsv;

pub use gga::{FixData, parse_fix_data};
pub use gll::{GeoPosition, parse_geo_position};
pub use gsa::{ActiveSatellites, parse_active_satellites};
pub use gst::{PseudorangeStatistics, parse_pseudorange_statistics};
pub use gsv::{SatelliteInfo, SatellitesInView, parse_satellites_in_view};

use core::fmt;

use crate::error::{Defect, DefectKind};
use crate::prescan::pre_validate;
use crate::sentence::{Sentence, SentenceTag, TAG_LEN};

/// The decoded content of one sentence, tagged by grammar.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum SentenceData<'a> {
    /// `$GPGGA` - positioning system fix data.
    FixData(FixData<'a>),
    /// `$GPGSV` - satellites in view.
    SatellitesInView(SatellitesInView),
    /// `$GPGSA` - DOP and active satellites.
    ActiveSatellites(ActiveSatellites<'a>),
    /// `$GPGST` - pseudorange error statistics.
    PseudorangeStatistics(PseudorangeStatistics<'a>),
    /// `$GPGLL` - geographic position and time.
    GeoPosition(GeoPosition<'a>),
}

/// The result of validating one sentence, produced exactly once per parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome<'a> {
    /// Every field passed its checks; the decoded values are exposed so the
    /// report sink can render more than a pass/fail bit.
    Decoded {
        /// The decoded fields.
        data: SentenceData<'a>,
        /// Whether the checksum marker `*` followed the last data field.
        /// The fields above are valid either way.
        terminator_present: bool,
    },

    /// The sentence was rejected at the located defect; no fields past it
    /// were decoded.
    Rejected(Defect),
}

impl<'a> ValidationOutcome<'a> {
    /// True when the sentence decoded successfully.
    pub fn is_decoded(&self) -> bool {
        matches!(self, ValidationOutcome::Decoded { .. })
    }

    /// The defect that rejected the sentence, if any.
    pub fn defect(&self) -> Option<&Defect> {
        match self {
            ValidationOutcome::Rejected(defect) => Some(defect),
            ValidationOutcome::Decoded { .. } => None,
        }
    }
}

/// Wraps a per-grammar parse result into a [`ValidationOutcome`].
fn decoded<'a, T>(
    result: Result<(T, bool), Defect>,
    wrap: impl FnOnce(T) -> SentenceData<'a>,
) -> ValidationOutcome<'a> {
    match result {
        Ok((data, terminator_present)) => ValidationOutcome::Decoded {
            data: wrap(data),
            terminator_present,
        },
        Err(defect) => ValidationOutcome::Rejected(defect),
    }
}

/// Validates one sentence end to end.
///
/// Runs the pre-validation scan over the payload after the tag; a
/// character-class defect rejects the sentence (rebased to an absolute
/// offset) without invoking any per-type parser. Otherwise the tag is
/// matched exactly against the five supported grammars and the matching
/// parser consumes the sentence.
///
/// # Examples
///
/// ```rust
/// use nmea0183_validator::{Sentence, SentenceData, ValidationOutcome, parse_sentence};
///
/// let sentence = Sentence::new("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,*39").unwrap();
///
/// match parse_sentence(&sentence) {
///     ValidationOutcome::Decoded { data: SentenceData::ActiveSatellites(gsa), .. } => {
///         assert_eq!(gsa.pdop, Some("2.5"));
///     }
///     outcome => panic!("unexpected outcome: {outcome:?}"),
/// }
/// ```
pub fn parse_sentence(sentence: &Sentence) -> ValidationOutcome<'_> {
    let text = sentence.as_str();
    if text.len() < TAG_LEN {
        return ValidationOutcome::Rejected(Defect::at(text.len(), None, DefectKind::Truncated));
    }

    if let Some(at) = pre_validate(&text[TAG_LEN..]) {
        // The scan reports 1-based offsets relative to the payload; rebase
        // past the tag to an absolute sentence offset.
        return ValidationOutcome::Rejected(Defect::at(
            TAG_LEN + at - 1,
            None,
            DefectKind::PreValidation,
        ));
    }

    match sentence.tag() {
        Some(SentenceTag::FixData) => parse_fix_data(sentence),
        Some(SentenceTag::SatellitesInView) => parse_satellites_in_view(sentence),
        Some(SentenceTag::ActiveSatellites) => parse_active_satellites(sentence),
        Some(SentenceTag::PseudorangeStatistics) => parse_pseudorange_statistics(sentence),
        Some(SentenceTag::GeoPosition) => parse_geo_position(sentence),
        None => ValidationOutcome::Rejected(Defect::at(0, None, DefectKind::UnrecognizedTag)),
    }
}

/// Quality of the reported fix, from the `$GPGGA` quality field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// 0 - fix not available.
    NoFix,
    /// 1 - GPS fix.
    GpsFix,
    /// 2 - differential GPS fix.
    DgpsFix,
}

impl Quality {
    pub(crate) fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Quality::NoFix),
            1 => Some(Quality::GpsFix),
            2 => Some(Quality::DgpsFix),
            _ => None,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quality::NoFix => "invalid fix",
            Quality::GpsFix => "GPS fix",
            Quality::DgpsFix => "DGPS fix",
        })
    }
}

/// Fix dimensionality, from the `$GPGSA` fix-mode field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    /// 1 - no fix.
    NoFix,
    /// 2 - 2D fix.
    Fix2D,
    /// 3 - 3D fix.
    Fix3D,
}

impl FixMode {
    pub(crate) fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(FixMode::NoFix),
            2 => Some(FixMode::Fix2D),
            3 => Some(FixMode::Fix3D),
            _ => None,
        }
    }
}

impl fmt::Display for FixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FixMode::NoFix => "no fix",
            FixMode::Fix2D => "2D fix",
            FixMode::Fix3D => "3D fix",
        })
    }
}

/// How the receiver chooses between 2D and 3D operation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// `A` - automatic selection.
    Automatic,
    /// `M` - manual selection.
    Manual,
}

impl SelectionMode {
    pub(crate) fn from_field(text: &str) -> Option<Self> {
        match text {
            "A" => Some(SelectionMode::Automatic),
            "M" => Some(SelectionMode::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionMode::Automatic => "auto selection",
            SelectionMode::Manual => "manual selection",
        })
    }
}

/// Data-validity status, from the `$GPGLL` status field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `A` - data valid.
    Valid,
    /// `V` - data void.
    Void,
}

impl Status {
    pub(crate) fn from_field(text: &str) -> Option<Self> {
        match text {
            "A" => Some(Status::Valid),
            "V" => Some(Status::Void),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Valid => "data valid",
            Status::Void => "void",
        })
    }
}

/// Compass direction attached to a packed angle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// The single-letter sentence representation.
    pub fn as_char(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A decoded latitude or longitude.
///
/// The sentence packs whole degrees and decimal minutes into one numeral
/// (`4807.038` = 48° 07.038′). Decoding splits out the degrees and keeps the
/// minutes as their original text - two digits plus fraction - since no unit
/// conversion is performed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Angle<'a> {
    /// Whole degrees (≤ 90 for latitudes, ≤ 180 for longitudes).
    pub degrees: u16,
    /// Minutes with fraction, exactly as written, e.g. `07.038`.
    pub minutes: &'a str,
    /// Which side of the equator or prime meridian.
    pub hemisphere: Hemisphere,
}

impl fmt::Display for Angle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} deg {}' {}", self.degrees, self.minutes, self.hemisphere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defect_of(line: &str) -> Option<Defect> {
        let sentence = Sentence::new(line).unwrap();
        parse_sentence(&sentence).defect().copied()
    }

    #[test]
    fn accepts_well_formed_sentences_of_every_grammar() {
        let lines = [
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,,*47",
            "$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45,*75",
            "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,*39",
            "$GPGST,172814,0.006,0.023,0.020,273.6,0.023,0.020,0.031,*6A",
            "$GPGLL,4916.45,N,12311.12,W,225444,A,*34",
            // All-empty variants: every optional field absent.
            "$GPGGA,,,,,,,,,,,,,,*47",
            "$GPGSA,,,,,,,,,,,,,,,,,*39",
            "$GPGST,,,,,,,,*6A",
            "$GPGLL,,,,,,*34",
        ];

        for line in lines {
            let sentence = Sentence::new(line).unwrap();
            let outcome = parse_sentence(&sentence);
            assert!(outcome.is_decoded(), "rejected {line:?}: {outcome:?}");
        }
    }

    #[test]
    fn pre_validation_supersedes_the_parsers() {
        // 'G' can never be legal; payload offset 4, absolute offset 9.
        assert_eq!(
            defect_of("$GPGGA,12G519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,,*47"),
            Some(Defect::at(9, None, DefectKind::PreValidation))
        );

        // The scan runs even for tags no parser supports.
        assert_eq!(
            defect_of("$GPXYZ,12..3").map(|d| d.kind),
            Some(DefectKind::PreValidation)
        );
    }

    #[test]
    fn rejects_unsupported_tags() {
        assert_eq!(
            defect_of("$GPRMC,123519,A,4807.038,N,01131.000,E,*6A"),
            Some(Defect::at(0, None, DefectKind::UnrecognizedTag))
        );
    }

    #[test]
    fn rejects_sentences_shorter_than_a_tag() {
        assert_eq!(
            defect_of("$GPG"),
            Some(Defect::at(4, None, DefectKind::Truncated))
        );
    }

    #[test]
    fn located_defects_by_kind() {
        let cases: &[(&str, DefectKind)] = &[
            // Hour 24 in the time field.
            (
                "$GPGGA,243519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,,*47",
                DefectKind::Range,
            ),
            // Latitude hemisphere letter from the wrong axis.
            (
                "$GPGGA,123519,4807.038,E,01131.000,E,1,08,0.9,545.4,M,46.9,M,,,*47",
                DefectKind::Enumeration,
            ),
            // Unknown fix-quality code.
            (
                "$GPGGA,123519,4807.038,N,01131.000,E,9,08,0.9,545.4,M,46.9,M,,,*47",
                DefectKind::Enumeration,
            ),
            // Thirteen satellites in use.
            (
                "$GPGGA,123519,4807.038,N,01131.000,E,1,13,0.9,545.4,M,46.9,M,,,*47",
                DefectKind::Range,
            ),
            // Fix mode outside {1,2,3}.
            (
                "$GPGSA,A,4,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,*39",
                DefectKind::Enumeration,
            ),
            // Selection mode letter outside {A,M}.
            (
                "$GPGSA,N,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,*39",
                DefectKind::Enumeration,
            ),
            // Status letter outside {A,V}.
            (
                "$GPGLL,4916.45,N,12311.12,W,225444,M,*34",
                DefectKind::Enumeration,
            ),
            // Last field runs to the end with no delimiter.
            (
                "$GPGLL,4916.45,N,12311.12,W,225444,A",
                DefectKind::MissingDelimiter,
            ),
            // Sentence ends in the middle of the grammar.
            ("$GPGGA,123519,", DefectKind::Truncated),
        ];

        for &(line, kind) in cases {
            assert_eq!(
                defect_of(line).map(|d| d.kind),
                Some(kind),
                "wrong kind for {line:?}"
            );
        }
    }

    #[test]
    fn missing_terminator_reports_but_still_decodes() {
        let sentence = Sentence::new("$GPGLL,4916.45,N,12311.12,W,225444,A,").unwrap();
        match parse_sentence(&sentence) {
            ValidationOutcome::Decoded {
                terminator_present, ..
            } => assert!(!terminator_present),
            other => panic!("expected decode, got {other:?}"),
        }
    }
}
