use crate::error::Defect;
use crate::sentence::Sentence;
use crate::sentences::parse::FieldReader;
use crate::sentences::{FixMode, SelectionMode, SentenceData, ValidationOutcome, decoded};

/// GSA - DOP and active satellites.
///
/// ```text
///         1 2 3  4  5 ...       14 15  16  17
///         | | |  |  |            |  |   |   |
///  $GPGSA,a,x,xx,xx,xx,.........xx,x.x,x.x,x.x,*hh
/// ```
///
/// Selection mode, fix mode, the twelve PRN slots of the satellites used in
/// the fix, and the three dilution-of-precision figures.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSatellites<'a> {
    /// Automatic or manual 2D/3D selection.
    pub selection_mode: Option<SelectionMode>,
    /// Dimensionality of the fix.
    pub fix_mode: Option<FixMode>,
    /// The twelve PRN slots, in sentence order. Unused slots stay `None`;
    /// positions are preserved rather than compacted.
    pub satellite_prns: [Option<u32>; 12],
    /// Position dilution of precision, as written.
    pub pdop: Option<&'a str>,
    /// Horizontal dilution of precision, as written.
    pub hdop: Option<&'a str>,
    /// Vertical dilution of precision, as written.
    pub vdop: Option<&'a str>,
}

/// Validates and decodes a `$GPGSA` sentence.
pub fn parse_active_satellites(sentence: &Sentence) -> ValidationOutcome<'_> {
    decoded(fields(sentence), SentenceData::ActiveSatellites)
}

fn fields(sentence: &Sentence) -> Result<(ActiveSatellites<'_>, bool), Defect> {
    let mut reader = FieldReader::new(sentence);

    let selection_mode = reader.letter("selection mode", SelectionMode::from_field)?;
    let fix_mode = reader.code("fix mode", FixMode::from_code)?;

    let mut satellite_prns = [None; 12];
    for slot in &mut satellite_prns {
        *slot = reader.integer("satellite PRN")?;
    }

    let pdop = reader.magnitude("PDOP")?;
    let hdop = reader.magnitude("HDOP")?;
    let vdop = reader.magnitude("VDOP")?;

    Ok((
        ActiveSatellites {
            selection_mode,
            fix_mode,
            satellite_prns,
            pdop,
            hdop,
            vdop,
        },
        reader.terminator_present(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DefectKind;

    #[test]
    fn decodes_with_slot_positions_preserved() {
        let sentence =
            Sentence::new("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,*39").unwrap();

        match parse_active_satellites(&sentence) {
            ValidationOutcome::Decoded {
                data: SentenceData::ActiveSatellites(gsa),
                terminator_present,
            } => {
                assert_eq!(gsa.selection_mode, Some(SelectionMode::Automatic));
                assert_eq!(gsa.fix_mode, Some(FixMode::Fix3D));
                assert_eq!(
                    gsa.satellite_prns,
                    [
                        Some(4),
                        Some(5),
                        None,
                        Some(9),
                        Some(12),
                        None,
                        None,
                        Some(24),
                        None,
                        None,
                        None,
                        None,
                    ]
                );
                assert_eq!(gsa.pdop, Some("2.5"));
                assert_eq!(gsa.hdop, Some("1.3"));
                assert_eq!(gsa.vdop, Some("2.1"));
                assert!(terminator_present);
            }
            outcome => panic!("unexpected outcome: {outcome:?}"),
        }
    }

    #[test]
    fn rejects_a_non_numeric_prn() {
        let sentence =
            Sentence::new("$GPGSA,A,3,04,x5,,09,12,,,24,,,,,2.5,1.3,2.1,*39").unwrap();
        let defect = parse_active_satellites(&sentence).defect().copied().unwrap();
        assert_eq!(defect.kind, DefectKind::Format);
        assert_eq!(defect.field, Some("satellite PRN"));
        assert_eq!(defect.offset, 14);
    }

    #[test]
    fn rejects_a_malformed_dop() {
        let sentence =
            Sentence::new("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3.0,2.1,*39").unwrap();
        let defect = parse_active_satellites(&sentence).defect().copied().unwrap();
        assert_eq!(defect.kind, DefectKind::Format);
        assert_eq!(defect.field, Some("HDOP"));
    }

    #[test]
    fn manual_mode_and_no_fix() {
        let sentence =
            Sentence::new("$GPGSA,M,1,,,,,,,,,,,,,99.9,99.9,99.9,*39").unwrap();

        match parse_active_satellites(&sentence) {
            ValidationOutcome::Decoded {
                data: SentenceData::ActiveSatellites(gsa),
                ..
            } => {
                assert_eq!(gsa.selection_mode, Some(SelectionMode::Manual));
                assert_eq!(gsa.fix_mode, Some(FixMode::NoFix));
                assert_eq!(gsa.satellite_prns, [None; 12]);
            }
            outcome => panic!("unexpected outcome: {outcome:?}"),
        }
    }
}
