//! # Pre-Validation Scanner
//!
//! A single-pass character-class check over the sentence payload (everything
//! after the six-character tag), run before any per-type parsing. It knows
//! nothing about individual grammars; it only rejects payloads whose
//! character mix could not belong to any legal field: a letter glued to
//! digits, a second decimal point, a third checksum digit, and so on.
//!
//! The scan is a small state machine. Five counters describe the field being
//! scanned - digits seen, decimal point seen, checksum (`*`) seen, checksum
//! hex digits seen, direction letter seen - and all of them reset at every
//! `,`. One flag spans the whole payload: whether a free-standing mode
//! letter `A` has already appeared.

/// Per-field scanner state, reset at every field boundary.
#[derive(Default)]
struct FieldState {
    digits: u32,
    dot: bool,
    direction: bool,
    star: bool,
    /// Digits and hex letters seen since the `*` of this field.
    hex: u32,
    unit: bool,
    status: bool,
}

impl FieldState {
    /// No class has fired yet in this field.
    fn untouched(&self) -> bool {
        self.digits == 0 && self.hex == 0 && !self.direction && !self.dot && !self.star
    }
}

/// Scans the payload after the tag and returns the 1-based offset of the
/// first illegal character, or `None` when the payload is clean.
///
/// The offset is relative to the scanned substring; callers that report
/// against the full sentence rebase it past the stripped tag. The scan is
/// pure: the same payload always yields the same answer.
///
/// The very first character must be the `,` separating the tag from the
/// first field; anything else (including an empty payload) is rejected at
/// offset 1.
///
/// # Examples
///
/// ```rust
/// use nmea0183_validator::pre_validate;
///
/// assert_eq!(pre_validate(",4916.45,N,12311.12,W,225444,A,*34"), None);
/// assert_eq!(pre_validate(",49G6.45,N"), Some(4));
/// assert_eq!(pre_validate("4916.45"), Some(1));
/// ```
pub fn pre_validate(payload: &str) -> Option<usize> {
    if payload.as_bytes().first() != Some(&b',') {
        return Some(1);
    }

    let mut field = FieldState::default();
    let mut mode_letter_seen = false;

    for (i, b) in payload.bytes().enumerate() {
        let at = i + 1;
        match b {
            b'0'..=b'9' => {
                if field.direction {
                    return Some(at);
                }
                if field.star {
                    if field.hex >= 2 {
                        return Some(at);
                    }
                    field.hex += 1;
                } else {
                    field.digits += 1;
                }
            }

            b'.' => {
                if field.dot {
                    return Some(at);
                }
                field.dot = true;
            }

            b',' => field = FieldState::default(),

            b'*' => {
                if field.star {
                    return Some(at);
                }
                field.star = true;
                field.digits = 0;
            }

            // A free-standing mode selector, or a checksum hex digit.
            b'A' | b'a' => {
                if field.untouched() && !mode_letter_seen {
                    mode_letter_seen = true;
                } else if field.star && field.hex < 2 {
                    field.hex += 1;
                } else {
                    return Some(at);
                }
            }

            // Hex digits with no second reading; only legal after '*'.
            b'B'..=b'D' | b'F' | b'b'..=b'd' | b'f' => {
                if !field.star || field.hex >= 2 {
                    return Some(at);
                }
                field.hex += 1;
            }

            // 'E' is a hex digit in the checksum section, a compass letter
            // elsewhere.
            b'E' | b'e' => {
                if field.star {
                    if field.hex >= 2 {
                        return Some(at);
                    }
                    field.hex += 1;
                } else if field.digits == 0 && field.hex == 0 && !field.direction {
                    field.direction = true;
                } else {
                    return Some(at);
                }
            }

            // Unit or manual-mode letter, one per otherwise untouched field.
            b'M' | b'm' => {
                if !field.untouched() || field.unit {
                    return Some(at);
                }
                field.unit = true;
            }

            // Status letter, one per otherwise untouched field.
            b'V' | b'v' => {
                if !field.untouched() || field.status {
                    return Some(at);
                }
                field.status = true;
            }

            b'N' | b'S' | b'W' => {
                if field.digits != 0 || field.hex != 0 || field.star || field.direction {
                    return Some(at);
                }
                field.direction = true;
            }

            _ => return Some(at),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_clean_payloads() {
        let payloads = [
            ",123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,,*47",
            ",2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45,*75",
            ",A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1,*39",
            ",172814,0.006,0.023,0.020,273.6,0.023,0.020,0.031,*6A",
            ",4916.45,N,12311.12,W,225444,A,*34",
            ",,,,,,,,,,,,,,*47",
            ",A,M,V,E,N,S,W",
            ",*ff",
        ];

        for payload in payloads {
            assert_eq!(pre_validate(payload), None, "rejected: {payload:?}");
        }
    }

    #[test]
    fn first_character_must_open_a_field() {
        assert_eq!(pre_validate(""), Some(1));
        assert_eq!(pre_validate("123519,"), Some(1));
        assert_eq!(pre_validate("*47"), Some(1));
    }

    #[test]
    fn locates_the_first_illegal_character() {
        // A letter that is never legal.
        assert_eq!(pre_validate(",12X519"), Some(4));
        // Second decimal point in one field.
        assert_eq!(pre_validate(",4807.0.38"), Some(8));
        // Third checksum digit.
        assert_eq!(pre_validate(",*471"), Some(5));
        assert_eq!(pre_validate(",*FFF"), Some(5));
        // Digit after a direction letter, and the reverse.
        assert_eq!(pre_validate(",N12"), Some(3));
        assert_eq!(pre_validate(",12N"), Some(4));
        assert_eq!(pre_validate(",5E"), Some(3));
        // Second '*' in one field.
        assert_eq!(pre_validate(",**"), Some(3));
        // Hex letter outside the checksum section.
        assert_eq!(pre_validate(",abc"), Some(3));
        // Second free-standing mode letter in the payload.
        assert_eq!(pre_validate(",A,A"), Some(4));
    }

    #[test]
    fn direction_letters_are_one_per_field() {
        assert_eq!(pre_validate(",NS"), Some(3));
        assert_eq!(pre_validate(",N,S,E,W"), None);
        assert_eq!(pre_validate(",EN"), Some(3));
    }

    #[test]
    fn is_idempotent() {
        for payload in [",4916.45,N,12311.12,W,225444,A,*34", ",49G6.45,N", ""] {
            assert_eq!(pre_validate(payload), pre_validate(payload));
        }
    }
}
