//! # Sentence Envelope
//!
//! An owned, bounded NMEA sentence line and the tag that selects its grammar.
//!
//! A [`Sentence`] is built once per input line and owns its text; nothing is
//! shared or reused between lines. Construction enforces the sanitizer
//! contract - ASCII only, no embedded whitespace, at most
//! [`MAX_SENTENCE_LEN`] characters, leading `$` - so the field-validation
//! core never observes input that violates it.

use nom::{
    Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::value,
    sequence::preceded,
};

use crate::error::SentenceError;

/// Maximum sentence length in bytes, including the leading `$`.
pub const MAX_SENTENCE_LEN: usize = 200;

/// Length of the sentence tag, e.g. `$GPGGA`.
pub const TAG_LEN: usize = 6;

/// One complete sentence line: tag, comma-delimited fields, checksum marker.
///
/// The text is stored inline in a fixed-capacity buffer, so each line is an
/// independent value with no heap allocation and no state surviving from the
/// previous line.
///
/// # Examples
///
/// ```rust
/// use nmea0183_validator::Sentence;
///
/// let sentence = Sentence::new("$GPGLL,4916.45,N,12311.12,W,225444,A,*34").unwrap();
/// assert_eq!(&sentence.as_str()[..6], "$GPGLL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: heapless::String<MAX_SENTENCE_LEN>,
}

impl Sentence {
    /// Builds a sentence from an already-sanitized line.
    ///
    /// # Errors
    ///
    /// Returns a [`SentenceError`] if the line is longer than
    /// [`MAX_SENTENCE_LEN`] bytes, contains non-ASCII bytes or whitespace,
    /// or does not begin with `$`.
    pub fn new(line: &str) -> Result<Self, SentenceError> {
        if !line.is_ascii() {
            return Err(SentenceError::NotAscii);
        }
        if line.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(SentenceError::Whitespace);
        }
        if !line.starts_with('$') {
            return Err(SentenceError::MissingStart);
        }

        let mut text = heapless::String::new();
        text.push_str(line)
            .map_err(|_| SentenceError::TooLong { len: line.len() })?;

        Ok(Sentence { text })
    }

    /// Builds a sentence from a raw line, stripping ASCII whitespace first.
    ///
    /// Serial and file sources commonly deliver lines with trailing CR/LF or
    /// stray blanks; this constructor removes them before applying the same
    /// checks as [`Sentence::new`].
    ///
    /// # Errors
    ///
    /// Returns a [`SentenceError`] if the stripped line is too long, not
    /// ASCII, or does not begin with `$`.
    pub fn sanitized(raw: &str) -> Result<Self, SentenceError> {
        if !raw.is_ascii() {
            return Err(SentenceError::NotAscii);
        }

        let mut text = heapless::String::new();
        let mut kept = 0usize;
        for ch in raw.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            kept += 1;
            text.push(ch)
                .map_err(|_| SentenceError::TooLong { len: kept })?;
        }

        if !text.starts_with('$') {
            return Err(SentenceError::MissingStart);
        }

        Ok(Sentence { text })
    }

    /// The sentence text, starting with `$`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Sentence length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when the sentence holds nothing beyond the mandatory `$`.
    pub fn is_empty(&self) -> bool {
        self.text.len() <= 1
    }

    /// The grammar named by the first six characters, if supported.
    pub fn tag(&self) -> Option<SentenceTag> {
        SentenceTag::of(self.as_str())
    }
}

/// Identifies which of the five supported grammars applies to a sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceTag {
    /// `$GPGGA` - positioning system fix data.
    FixData,
    /// `$GPGSV` - satellites in view.
    SatellitesInView,
    /// `$GPGSA` - DOP and active satellites.
    ActiveSatellites,
    /// `$GPGST` - pseudorange error statistics.
    PseudorangeStatistics,
    /// `$GPGLL` - geographic position and time.
    GeoPosition,
}

impl SentenceTag {
    /// Matches the first six characters of `text` against the supported
    /// tags. Matching is exact: no prefix, talker, or case folding.
    pub fn of(text: &str) -> Option<Self> {
        let mut parser = preceded(
            char::<_, nom::error::Error<&str>>('$'),
            alt((
                value(SentenceTag::FixData, tag("GPGGA")),
                value(SentenceTag::SatellitesInView, tag("GPGSV")),
                value(SentenceTag::ActiveSatellites, tag("GPGSA")),
                value(SentenceTag::PseudorangeStatistics, tag("GPGST")),
                value(SentenceTag::GeoPosition, tag("GPGLL")),
            )),
        );

        parser.parse(text).ok().map(|(_, tag)| tag)
    }

    /// The literal six-character tag, including the `$`.
    pub fn as_str(self) -> &'static str {
        match self {
            SentenceTag::FixData => "$GPGGA",
            SentenceTag::SatellitesInView => "$GPGSV",
            SentenceTag::ActiveSatellites => "$GPGSA",
            SentenceTag::PseudorangeStatistics => "$GPGST",
            SentenceTag::GeoPosition => "$GPGLL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_clean_line() {
        let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,,*47";
        let sentence = Sentence::new(line).unwrap();
        assert_eq!(sentence.as_str(), line);
        assert_eq!(sentence.len(), line.len());
        assert_eq!(sentence.tag(), Some(SentenceTag::FixData));
    }

    #[test]
    fn rejects_violations_of_the_sanitizer_contract() {
        assert_eq!(
            Sentence::new("GPGGA,123519,*47"),
            Err(SentenceError::MissingStart)
        );
        assert_eq!(
            Sentence::new("$GPGGA,123 519,*47"),
            Err(SentenceError::Whitespace)
        );
        assert_eq!(Sentence::new("$GPGGA,12ß,*47"), Err(SentenceError::NotAscii));

        let long = format!("$GPGGA,{}", "1".repeat(MAX_SENTENCE_LEN));
        assert!(matches!(
            Sentence::new(&long),
            Err(SentenceError::TooLong { .. })
        ));
    }

    #[test]
    fn sanitized_strips_whitespace() {
        let sentence = Sentence::sanitized(" $GPGLL,4916.45,N,12311.12,W,225444,A,*34\r\n").unwrap();
        assert_eq!(sentence.as_str(), "$GPGLL,4916.45,N,12311.12,W,225444,A,*34");
        assert_eq!(sentence.tag(), Some(SentenceTag::GeoPosition));
    }

    #[test]
    fn tag_matching_is_exact() {
        assert_eq!(SentenceTag::of("$GPGGA,"), Some(SentenceTag::FixData));
        assert_eq!(SentenceTag::of("$GPGSV,"), Some(SentenceTag::SatellitesInView));
        assert_eq!(SentenceTag::of("$GPGSA,"), Some(SentenceTag::ActiveSatellites));
        assert_eq!(SentenceTag::of("$GPGST,"), Some(SentenceTag::PseudorangeStatistics));
        assert_eq!(SentenceTag::of("$GPGLL,"), Some(SentenceTag::GeoPosition));

        assert_eq!(SentenceTag::of("$GPRMC,"), None);
        assert_eq!(SentenceTag::of("$gpgga,"), None);
        assert_eq!(SentenceTag::of("GPGGA,"), None);
        assert_eq!(SentenceTag::of("$GPGG"), None);
    }

    #[test]
    fn tag_round_trips_through_its_text() {
        for tag in [
            SentenceTag::FixData,
            SentenceTag::SatellitesInView,
            SentenceTag::ActiveSatellites,
            SentenceTag::PseudorangeStatistics,
            SentenceTag::GeoPosition,
        ] {
            assert_eq!(SentenceTag::of(tag.as_str()), Some(tag));
            assert_eq!(tag.as_str().len(), TAG_LEN);
        }
    }
}
