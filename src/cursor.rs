//! # Field Cursor
//!
//! The minimal parsing primitive behind every per-type parser: an explicit
//! byte index into an immutable sentence plus a view of the unread
//! remainder. A field is the text between two delimiters - `,`, or the
//! checksum marker `*` which ends the data section. Reading a
//! comma-delimited field advances past the text and its comma; reading up to
//! the `*` leaves the cursor on the marker so the terminator check can see
//! it, and every later read reports an empty field from there. The offset
//! never decreases, and each grammar reads a fixed number of fields, so a
//! parse cannot loop.
//!
//! Field text is returned as a borrowed subslice of the sentence; nothing is
//! copied and there is no auxiliary buffer to overrun or truncate into.

/// Result of one field read.
///
/// An [`Empty`](FieldResult::Empty) field is meaningful data ("not
/// specified") and is distinct from the two terminal results, which mean the
/// sentence ran out before the grammar did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldResult<'a> {
    /// A zero-length field: a delimiter arrived immediately. The cursor has
    /// advanced past a `,`; it stays put on a `*`.
    Empty {
        /// Byte offset where the field would have started.
        start: usize,
    },

    /// A non-empty field. The cursor has advanced past the text, and past
    /// its trailing `,` if that was the delimiter.
    Value {
        /// The field text, borrowed from the sentence.
        text: &'a str,
        /// Byte offset of the first character of `text` in the sentence.
        start: usize,
    },

    /// Characters remain but no delimiter follows them; the sentence is
    /// structurally malformed for any grammar that expects another field.
    /// The cursor does not advance.
    EndOfSentence {
        /// Byte offset where the undelimited run begins.
        start: usize,
    },

    /// The cursor was already at or past the end of the sentence.
    Exhausted {
        /// The cursor's offset when the read was attempted.
        at: usize,
    },
}

/// Mutable parse state for one sentence: the sentence text and the offset of
/// the next unread byte.
///
/// A cursor is owned by exactly one parse call and is discarded when it
/// returns; nothing about it survives to the next sentence.
#[derive(Debug)]
pub struct FieldCursor<'a> {
    sentence: &'a str,
    offset: usize,
}

impl<'a> FieldCursor<'a> {
    /// Creates a cursor over `sentence`, positioned at `offset`.
    pub fn new(sentence: &'a str, offset: usize) -> Self {
        FieldCursor { sentence, offset }
    }

    /// The offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unread remainder of the sentence, without advancing.
    ///
    /// Used for the checks that look ahead without consuming a field, such
    /// as the terminal `*` marker.
    pub fn remaining(&self) -> &'a str {
        self.sentence.get(self.offset..).unwrap_or("")
    }

    /// Reads the next field.
    pub fn next_field(&mut self) -> FieldResult<'a> {
        let start = self.offset;
        if start >= self.sentence.len() {
            return FieldResult::Exhausted { at: start };
        }

        let rest = &self.sentence[start..];
        let comma = rest.find(',');
        let star = rest.find('*');

        let (len, delimiter_consumed) = match (comma, star) {
            (Some(c), Some(s)) if s < c => (s, 0),
            (Some(c), _) => (c, 1),
            (None, Some(s)) => (s, 0),
            (None, None) => return FieldResult::EndOfSentence { start },
        };

        self.offset = start + len + delimiter_consumed;
        if len == 0 {
            FieldResult::Empty { start }
        } else {
            FieldResult::Value {
                text: &rest[..len],
                start,
            }
        }
    }
}
