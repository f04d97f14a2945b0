use time::Time;

use crate::error::Defect;
use crate::sentence::Sentence;
use crate::sentences::parse::{AngleAxis, FieldReader};
use crate::sentences::{Angle, SentenceData, Status, ValidationOutcome, decoded};

/// GLL - geographic position, latitude/longitude, and time.
///
/// ```text
///         1        2 3         4 5      6
///         |        | |         | |      |
///  $GPGLL,ddmm.mmm,a,dddmm.mmm,a,hhmmss,a,*hh
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition<'a> {
    /// Latitude with hemisphere.
    pub latitude: Option<Angle<'a>>,
    /// Longitude with hemisphere.
    pub longitude: Option<Angle<'a>>,
    /// UTC time of the position.
    pub fix_time: Option<Time>,
    /// Whether the data is valid or void.
    pub status: Option<Status>,
}

/// Validates and decodes a `$GPGLL` sentence.
pub fn parse_geo_position(sentence: &Sentence) -> ValidationOutcome<'_> {
    decoded(fields(sentence), SentenceData::GeoPosition)
}

fn fields(sentence: &Sentence) -> Result<(GeoPosition<'_>, bool), Defect> {
    let mut reader = FieldReader::new(sentence);

    let latitude = reader.packed_angle("latitude", AngleAxis::Latitude)?;
    let longitude = reader.packed_angle("longitude", AngleAxis::Longitude)?;
    let fix_time = reader.time("fix time")?;
    let status = reader.letter("status", Status::from_field)?;

    Ok((
        GeoPosition {
            latitude,
            longitude,
            fix_time,
            status,
        },
        reader.terminator_present(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DefectKind;
    use crate::sentences::Hemisphere;

    #[test]
    fn decodes_the_full_sentence() {
        let sentence = Sentence::new("$GPGLL,4916.45,N,12311.12,W,225444,A,*34").unwrap();

        match parse_geo_position(&sentence) {
            ValidationOutcome::Decoded {
                data: SentenceData::GeoPosition(gll),
                terminator_present,
            } => {
                assert_eq!(
                    gll.latitude,
                    Some(Angle {
                        degrees: 49,
                        minutes: "16.45",
                        hemisphere: Hemisphere::North,
                    })
                );
                assert_eq!(
                    gll.longitude,
                    Some(Angle {
                        degrees: 123,
                        minutes: "11.12",
                        hemisphere: Hemisphere::West,
                    })
                );
                assert_eq!(gll.fix_time, Time::from_hms(22, 54, 44).ok());
                assert_eq!(gll.status, Some(Status::Valid));
                assert!(terminator_present);
            }
            outcome => panic!("unexpected outcome: {outcome:?}"),
        }
    }

    #[test]
    fn void_status_is_data_not_an_error() {
        let sentence = Sentence::new("$GPGLL,4916.45,N,12311.12,W,225444,V,*34").unwrap();

        match parse_geo_position(&sentence) {
            ValidationOutcome::Decoded {
                data: SentenceData::GeoPosition(gll),
                ..
            } => assert_eq!(gll.status, Some(Status::Void)),
            outcome => panic!("unexpected outcome: {outcome:?}"),
        }
    }

    #[test]
    fn longitude_bound_is_wider_than_latitude() {
        let ok = Sentence::new("$GPGLL,,,18000.00,W,,,*34").unwrap();
        assert!(parse_geo_position(&ok).is_decoded());

        let bad = Sentence::new("$GPGLL,,,18100.00,W,,,*34").unwrap();
        let defect = parse_geo_position(&bad).defect().copied().unwrap();
        assert_eq!(defect.kind, DefectKind::Range);
        assert_eq!(defect.field, Some("longitude"));
        assert_eq!(defect.offset, 9);
    }

    #[test]
    fn packed_minutes_above_59_reject() {
        let sentence = Sentence::new("$GPGLL,4961.00,N,12311.12,W,225444,A,*34").unwrap();
        let defect = parse_geo_position(&sentence).defect().copied().unwrap();
        assert_eq!(defect.kind, DefectKind::Range);
        assert_eq!(defect.field, Some("latitude"));
        assert_eq!(defect.offset, 7);
    }
}
