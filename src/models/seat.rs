use serde::{Deserialize, Serialize};
use std::fmt;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// State of a single seat as stored in the chart document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeatState {
    #[default]
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "BOOKED")]
    Booked,
}

impl SeatState {
    pub fn is_booked(self) -> bool {
        self == SeatState::Booked
    }
}

/// Row label for a zero-based row index, `0 -> 'A'`.
pub fn row_label(index: usize) -> Option<char> {
    ALPHABET.get(index).map(|&b| b as char)
}

/// Zero-based row index for a label. Lowercase letters map to their uppercase row.
pub fn row_index(label: char) -> Option<usize> {
    let upper = label.to_ascii_uppercase();
    ALPHABET.iter().position(|&b| b as char == upper)
}

/// Contiguous block of seats within one row: `[start, start + len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRange {
    pub row: char,
    pub start: usize,
    pub len: usize,
}

impl SeatRange {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }
}

impl fmt::Display for SeatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}+{}", self.row, self.start, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_state_uses_document_markers() {
        assert_eq!(serde_json::to_string(&SeatState::Empty).unwrap(), r#""""#);
        assert_eq!(serde_json::to_string(&SeatState::Booked).unwrap(), r#""BOOKED""#);

        let parsed: Vec<SeatState> = serde_json::from_str(r#"["", "BOOKED"]"#).unwrap();
        assert_eq!(parsed, vec![SeatState::Empty, SeatState::Booked]);
    }

    #[test]
    fn unknown_marker_is_rejected() {
        assert!(serde_json::from_str::<SeatState>(r#""RESERVED""#).is_err());
    }

    #[test]
    fn row_mapping_goes_both_ways() {
        for i in 0..26 {
            let label = row_label(i).unwrap();
            assert!(label.is_ascii_uppercase());
            assert_eq!(row_index(label), Some(i));
        }
        assert_eq!(row_label(26), None);
    }

    #[test]
    fn row_index_is_case_insensitive() {
        assert_eq!(row_index('a'), Some(0));
        assert_eq!(row_index('t'), Some(19));
        assert_eq!(row_index('1'), None);
        assert_eq!(row_index('É'), None);
    }

    #[test]
    fn range_covers_len_seats() {
        let range = SeatRange { row: 'B', start: 2, len: 3 };
        assert_eq!(range.indices().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(range.to_string(), "B2+3");
    }
}
