//! # NMEA 0183 Validator
//!
//! This library validates and decodes the five positional-reporting
//! sentence grammars `$GPGGA`, `$GPGSV`, `$GPGSA`, `$GPGST`, and `$GPGLL`.
//! A sentence either decodes - with every present field range-checked and
//! exposed as a typed value - or is rejected with the kind of the first
//! defect and the exact byte offset where it was found.
//!
//! Parsing is organized in layers:
//! - a [`Sentence`] is an owned, bounded, ASCII line built once per input
//!   line ([`Sentence::sanitized`] strips stray whitespace first);
//! - [`pre_validate`] makes one pass over the payload as a character-class
//!   state machine and rejects lines whose character mix cannot belong to
//!   any legal field, before per-type parsing begins;
//! - [`parse_sentence`] dispatches on the exact six-character tag to one of
//!   the five grammar parsers, each of which walks the line field by field
//!   with a [`FieldCursor`] and stops at the first defect.
//!
//! The checksum marker `*` is required after the last data field, but its
//! hexadecimal value is never compared against a computed checksum; a
//! missing marker is reported alongside the decoded fields rather than
//! discarding them.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_validator::{Sentence, SentenceData, ValidationOutcome, parse_sentence};
//!
//! let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,,*47";
//! let sentence = Sentence::new(line).unwrap();
//!
//! match parse_sentence(&sentence) {
//!     ValidationOutcome::Decoded { data: SentenceData::FixData(fix), .. } => {
//!         assert_eq!(fix.satellites_in_use, Some(8));
//!         assert_eq!(fix.altitude, Some("545.4"));
//!     }
//!     ValidationOutcome::Decoded { .. } => unreachable!(),
//!     ValidationOutcome::Rejected(defect) => {
//!         eprintln!("rejected: {defect}");
//!     }
//! }
//! ```
//!
//! Sentences are independent of one another: no state is shared between
//! parse calls, and distinct sentences may be validated from different
//! threads without synchronization.

pub mod classify;
mod cursor;
pub mod error;
mod prescan;
mod sentence;
mod sentences;

pub use cursor::{FieldCursor, FieldResult};
pub use error::{Defect, DefectKind, SentenceError};
pub use prescan::pre_validate;
pub use sentence::{MAX_SENTENCE_LEN, Sentence, SentenceTag, TAG_LEN};
pub use sentences::{
    ActiveSatellites, Angle, FixData, FixMode, GeoPosition, Hemisphere, PseudorangeStatistics,
    Quality, SatelliteInfo, SatellitesInView, SelectionMode, SentenceData, Status,
    ValidationOutcome, parse_active_satellites, parse_fix_data, parse_geo_position,
    parse_pseudorange_statistics, parse_satellites_in_view, parse_sentence,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
