//! Shared field-walking machinery for the per-grammar parsers.
//!
//! [`FieldReader`] drives a [`FieldCursor`] through one sentence and owns
//! the single implementation of the extract → classify → validate step.
//! Each grammar is then a fixed sequence of typed reads with its bounds
//! passed as data, rather than five copies of the walking logic.

use time::Time;

use crate::classify::{is_all_digits, is_decimal_magnitude};
use crate::cursor::{FieldCursor, FieldResult};
use crate::error::{Defect, DefectKind};
use crate::sentence::{Sentence, TAG_LEN};
use crate::sentences::{Angle, Hemisphere};

/// Which axis a packed angle belongs to; fixes the degree bound and the
/// legal hemisphere letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AngleAxis {
    Latitude,
    Longitude,
}

impl AngleAxis {
    fn degree_bound(self) -> u32 {
        match self {
            AngleAxis::Latitude => 90,
            AngleAxis::Longitude => 180,
        }
    }

    fn hemisphere(self, text: &str) -> Option<Hemisphere> {
        match (self, text) {
            (AngleAxis::Latitude, "N") => Some(Hemisphere::North),
            (AngleAxis::Latitude, "S") => Some(Hemisphere::South),
            (AngleAxis::Longitude, "E") => Some(Hemisphere::East),
            (AngleAxis::Longitude, "W") => Some(Hemisphere::West),
            _ => None,
        }
    }
}

/// One extracted field: either absent or its text with the offset where it
/// starts.
enum Raw<'a> {
    Missing { start: usize },
    Text { text: &'a str, start: usize },
}

/// Walks one sentence field by field, applying the shared validation policy.
///
/// Every read method returns `Ok(None)` for an empty field ("not
/// specified"), `Ok(Some(..))` for a validated value, and `Err` with a
/// located [`Defect`] the moment a non-empty field fails a check.
pub(crate) struct FieldReader<'a> {
    cursor: FieldCursor<'a>,
}

impl<'a> FieldReader<'a> {
    /// Positions the cursor on the first field, just past the tag and its
    /// trailing comma.
    pub fn new(sentence: &'a Sentence) -> Self {
        FieldReader {
            cursor: FieldCursor::new(sentence.as_str(), TAG_LEN + 1),
        }
    }

    /// The one extraction step every typed read goes through.
    fn raw(&mut self, field: &'static str) -> Result<Raw<'a>, Defect> {
        match self.cursor.next_field() {
            FieldResult::Empty { start } => Ok(Raw::Missing { start }),
            FieldResult::Value { text, start } => Ok(Raw::Text { text, start }),
            FieldResult::EndOfSentence { start } => {
                Err(Defect::at(start, Some(field), DefectKind::MissingDelimiter))
            }
            FieldResult::Exhausted { at } => {
                Err(Defect::at(at, Some(field), DefectKind::Truncated))
            }
        }
    }

    /// A UTC time of day packed as exactly six digits `hhmmss`.
    pub fn time(&mut self, field: &'static str) -> Result<Option<Time>, Defect> {
        let (text, start) = match self.raw(field)? {
            Raw::Missing { .. } => return Ok(None),
            Raw::Text { text, start } => (text, start),
        };

        if text.len() != 6 || !is_all_digits(text) {
            return Err(Defect::at(start, Some(field), DefectKind::Format));
        }

        let format = |_| Defect::at(start, Some(field), DefectKind::Format);
        let hour: u8 = text[..2].parse().map_err(format)?;
        let minute: u8 = text[2..4].parse().map_err(format)?;
        let second: u8 = text[4..6].parse().map_err(format)?;

        if hour > 23 || minute > 59 || second > 59 {
            return Err(Defect::at(start, Some(field), DefectKind::Range));
        }

        Time::from_hms(hour, minute, second)
            .map(Some)
            .map_err(|_| Defect::at(start, Some(field), DefectKind::Range))
    }

    /// A packed `DD[D]MM.MMM` angle and its paired hemisphere field.
    ///
    /// Consumes two fields. When the angle is empty the hemisphere field is
    /// consumed without validation and the pair decodes to "not specified";
    /// when the angle is present the hemisphere must be exactly one of the
    /// axis's two letters.
    pub fn packed_angle(
        &mut self,
        field: &'static str,
        axis: AngleAxis,
    ) -> Result<Option<Angle<'a>>, Defect> {
        let (text, start) = match self.raw(field)? {
            Raw::Missing { .. } => {
                self.raw(field)?;
                return Ok(None);
            }
            Raw::Text { text, start } => (text, start),
        };

        if !is_decimal_magnitude(text) {
            return Err(Defect::at(start, Some(field), DefectKind::Format));
        }
        // At least two minute digits must precede the decimal point, or the
        // degree/minute split would be wrong.
        let dot = text
            .find('.')
            .ok_or(Defect::at(start, Some(field), DefectKind::Format))?;
        if dot < 2 {
            return Err(Defect::at(start, Some(field), DefectKind::Format));
        }

        let packed: u32 = text[..dot]
            .parse()
            .map_err(|_| Defect::at(start, Some(field), DefectKind::Range))?;
        let degrees = packed / 100;
        let minutes_whole = packed % 100;

        if degrees > axis.degree_bound() || minutes_whole > 59 {
            return Err(Defect::at(start, Some(field), DefectKind::Range));
        }

        let minutes = &text[dot - 2..];

        let hemisphere = match self.raw(field)? {
            Raw::Missing { start } => {
                return Err(Defect::at(start, Some(field), DefectKind::Enumeration));
            }
            Raw::Text { text, start } => axis
                .hemisphere(text)
                .ok_or(Defect::at(start, Some(field), DefectKind::Enumeration))?,
        };

        Ok(Some(Angle {
            degrees: degrees as u16,
            minutes,
            hemisphere,
        }))
    }

    /// A plain unsigned integer with no upper bound.
    pub fn integer(&mut self, field: &'static str) -> Result<Option<u32>, Defect> {
        let (text, start) = match self.raw(field)? {
            Raw::Missing { .. } => return Ok(None),
            Raw::Text { text, start } => (text, start),
        };

        if !is_all_digits(text) {
            return Err(Defect::at(start, Some(field), DefectKind::Format));
        }

        text.parse()
            .map(Some)
            .map_err(|_| Defect::at(start, Some(field), DefectKind::Range))
    }

    /// An unsigned integer with an inclusive upper bound.
    pub fn bounded_int(&mut self, field: &'static str, max: u32) -> Result<Option<u32>, Defect> {
        let start = self.cursor.offset();
        match self.integer(field)? {
            Some(value) if value > max => Err(Defect::at(start, Some(field), DefectKind::Range)),
            other => Ok(other),
        }
    }

    /// A decimal magnitude, kept as its original text.
    pub fn magnitude(&mut self, field: &'static str) -> Result<Option<&'a str>, Defect> {
        let (text, start) = match self.raw(field)? {
            Raw::Missing { .. } => return Ok(None),
            Raw::Text { text, start } => (text, start),
        };

        if !is_decimal_magnitude(text) {
            return Err(Defect::at(start, Some(field), DefectKind::Format));
        }

        Ok(Some(text))
    }

    /// A decimal magnitude whose whole part is bounded, such as a bearing in
    /// degrees from true north.
    pub fn bearing_magnitude(
        &mut self,
        field: &'static str,
        max: u32,
    ) -> Result<Option<&'a str>, Defect> {
        let start = self.cursor.offset();
        let Some(text) = self.magnitude(field)? else {
            return Ok(None);
        };

        let whole = &text[..text.find('.').unwrap_or(text.len())];
        let value: u32 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| Defect::at(start, Some(field), DefectKind::Range))?
        };

        if value > max {
            return Err(Defect::at(start, Some(field), DefectKind::Range));
        }

        Ok(Some(text))
    }

    /// A decimal magnitude and its paired unit-letter field.
    ///
    /// Consumes two fields. When the value is empty the unit field is
    /// consumed without validation; when the value is present the unit field
    /// must be exactly `unit`.
    pub fn measure(
        &mut self,
        field: &'static str,
        unit: char,
    ) -> Result<Option<&'a str>, Defect> {
        let (text, start) = match self.raw(field)? {
            Raw::Missing { .. } => {
                self.raw(field)?;
                return Ok(None);
            }
            Raw::Text { text, start } => (text, start),
        };

        if !is_decimal_magnitude(text) {
            return Err(Defect::at(start, Some(field), DefectKind::Format));
        }

        match self.raw(field)? {
            Raw::Missing { start } => Err(Defect::at(start, Some(field), DefectKind::Enumeration)),
            Raw::Text { text: u, start } => {
                if u.len() == 1 && u.starts_with(unit) {
                    Ok(Some(text))
                } else {
                    Err(Defect::at(start, Some(field), DefectKind::Enumeration))
                }
            }
        }
    }

    /// A field whose whole text must be a single letter from a fixed set.
    pub fn letter<T>(
        &mut self,
        field: &'static str,
        decode: fn(&str) -> Option<T>,
    ) -> Result<Option<T>, Defect> {
        match self.raw(field)? {
            Raw::Missing { .. } => Ok(None),
            Raw::Text { text, start } => decode(text)
                .map(Some)
                .ok_or(Defect::at(start, Some(field), DefectKind::Enumeration)),
        }
    }

    /// A numeric code from a fixed set, such as a fix quality.
    pub fn code<T>(
        &mut self,
        field: &'static str,
        decode: fn(u32) -> Option<T>,
    ) -> Result<Option<T>, Defect> {
        let (text, start) = match self.raw(field)? {
            Raw::Missing { .. } => return Ok(None),
            Raw::Text { text, start } => (text, start),
        };

        if !is_all_digits(text) {
            return Err(Defect::at(start, Some(field), DefectKind::Format));
        }

        let value: u32 = text
            .parse()
            .map_err(|_| Defect::at(start, Some(field), DefectKind::Range))?;

        decode(value)
            .map(Some)
            .ok_or(Defect::at(start, Some(field), DefectKind::Enumeration))
    }

    /// Whether the checksum marker `*` sits at the cursor, immediately after
    /// the last consumed field. Peeks without advancing.
    pub fn terminator_present(&self) -> bool {
        self.cursor.remaining().starts_with('*')
    }
}
