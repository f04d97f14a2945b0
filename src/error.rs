//! # Error Types
//!
//! This module defines the structured failure values produced while building
//! a [`Sentence`](crate::Sentence) and while validating its fields.
//!
//! A parse never panics and never aborts a stream: a malformed sentence is
//! reported as a single [`Defect`] carrying the kind of violation and the
//! byte offset where it was found, and the caller moves on to the next line.

use core::fmt;

/// Classifies the first violation found in a sentence.
///
/// The two structural variants ([`Truncated`](DefectKind::Truncated) and
/// [`MissingDelimiter`](DefectKind::MissingDelimiter)) cover sentences that
/// end before their grammar does; the remaining variants describe fields that
/// were present but illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectKind {
    /// The sentence ended before a mandatory field could be read.
    Truncated,

    /// No field delimiter was found where the grammar requires one.
    MissingDelimiter,

    /// The field text has the wrong shape: non-numeric characters where a
    /// number was required, a second decimal point, a time field that is not
    /// six digits, or a packed angle without a decimal point at position two
    /// or later.
    Format,

    /// A syntactically valid number lies outside the field's legal bounds,
    /// such as hour 24, latitude degrees 91, or azimuth 400.
    Range,

    /// A value outside the field's fixed legal set: an unknown fix-quality
    /// code, a mode letter other than `A`/`M`, or a hemisphere letter that
    /// does not belong to the field's axis.
    Enumeration,

    /// A character-class violation found by the pre-validation scan, before
    /// any per-type parsing was attempted.
    PreValidation,

    /// The first six characters do not name a supported sentence grammar.
    UnrecognizedTag,
}

impl DefectKind {
    /// True for the variants that describe a sentence ending too early
    /// rather than a bad field value.
    pub fn is_structural(self) -> bool {
        matches!(self, DefectKind::Truncated | DefectKind::MissingDelimiter)
    }
}

/// The first violation found in a sentence, located by byte offset.
///
/// `offset` is a 0-based byte offset into the full sentence text, including
/// the leading `$` and the six-character tag. For field-level defects it
/// points at the first byte of the offending field; for pre-validation
/// defects it points at the offending character itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defect {
    /// 0-based byte offset into the full sentence.
    pub offset: usize,
    /// Name of the field being read when the defect was found, if any.
    pub field: Option<&'static str>,
    /// What went wrong.
    pub kind: DefectKind,
}

impl Defect {
    pub(crate) fn at(offset: usize, field: Option<&'static str>, kind: DefectKind) -> Self {
        Defect {
            offset,
            field,
            kind,
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            DefectKind::Truncated => "sentence ended early",
            DefectKind::MissingDelimiter => "missing field delimiter",
            DefectKind::Format => "malformed value",
            DefectKind::Range => "value out of range",
            DefectKind::Enumeration => "value outside its legal set",
            DefectKind::PreValidation => "illegal character",
            DefectKind::UnrecognizedTag => "unrecognized sentence tag",
        };

        match self.field {
            Some(field) => write!(f, "{what} in {field} at offset {}", self.offset),
            None => write!(f, "{what} at offset {}", self.offset),
        }
    }
}

impl std::error::Error for Defect {}

/// Why a raw line could not become a [`Sentence`](crate::Sentence).
///
/// These are collaborator-boundary errors: a line source that honors the
/// sanitizer contract (ASCII, no whitespace, bounded length) never produces
/// them, and the field-validation core is never invoked on such input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceError {
    /// The line exceeds the 200-character sentence bound.
    TooLong {
        /// Length of the rejected line in bytes.
        len: usize,
    },

    /// The line contains a non-ASCII byte.
    NotAscii,

    /// The line contains embedded whitespace.
    Whitespace,

    /// The line does not begin with `$`.
    MissingStart,
}

impl fmt::Display for SentenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceError::TooLong { len } => {
                write!(
                    f,
                    "line of {len} bytes exceeds the {} character sentence bound",
                    crate::MAX_SENTENCE_LEN
                )
            }
            SentenceError::NotAscii => f.write_str("sentence contains non-ASCII characters"),
            SentenceError::Whitespace => f.write_str("sentence contains embedded whitespace"),
            SentenceError::MissingStart => f.write_str("sentence does not begin with '$'"),
        }
    }
}

impl std::error::Error for SentenceError {}
