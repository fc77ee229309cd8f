use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::seat::{row_index, row_label, SeatRange, SeatState};
use crate::config::ChartLayout;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("row key {0:?} is not a row label of this chart")]
    UnexpectedRow(String),

    #[error("row {0} is missing")]
    MissingRow(char),

    #[error("row {row} has {actual} seats, expected {expected}")]
    WrongWidth {
        row: String,
        actual: usize,
        expected: usize,
    },
}

/// Row label -> seats. Keys are kept sorted so the document is written in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatingChart {
    rows: BTreeMap<String, Vec<SeatState>>,
}

impl SeatingChart {
    /// Fresh chart: `num_rows` rows labelled from 'A', every seat empty.
    pub fn create_empty(layout: ChartLayout) -> Self {
        let rows = (0..layout.num_rows)
            .filter_map(row_label)
            .map(|label| (label.to_string(), vec![SeatState::Empty; layout.seats_per_row]))
            .collect();
        Self { rows }
    }

    pub fn row(&self, label: char) -> Option<&[SeatState]> {
        self.rows.get(label.encode_utf8(&mut [0; 4]) as &str).map(Vec::as_slice)
    }

    fn row_mut(&mut self, label: char) -> Option<&mut Vec<SeatState>> {
        self.rows.get_mut(label.encode_utf8(&mut [0; 4]) as &str)
    }

    pub fn contains_row(&self, label: char) -> bool {
        self.row(label).is_some()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[SeatState])> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn booked_count(&self) -> usize {
        self.rows
            .values()
            .flatten()
            .filter(|seat| seat.is_booked())
            .count()
    }

    pub fn is_range_free(&self, range: &SeatRange) -> bool {
        self.row(range.row)
            .and_then(|seats| seats.get(range.indices()))
            .map(|seats| !seats.iter().any(|seat| seat.is_booked()))
            .unwrap_or(false)
    }

    /// Sets every seat of the range to `state`. Returns false if the range is not inside the chart.
    pub fn fill(&mut self, range: &SeatRange, state: SeatState) -> bool {
        match self
            .row_mut(range.row)
            .and_then(|seats| seats.get_mut(range.indices()))
        {
            Some(seats) => {
                seats.fill(state);
                true
            }
            None => false,
        }
    }

    /// Checks that the chart has exactly the rows and row width of `layout`.
    pub fn check_shape(&self, layout: ChartLayout) -> Result<(), ShapeError> {
        for (key, seats) in self.rows() {
            let mut chars = key.chars();
            let label = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_uppercase() => c,
                _ => return Err(ShapeError::UnexpectedRow(key.to_string())),
            };
            match row_index(label) {
                Some(i) if i < layout.num_rows => {}
                _ => return Err(ShapeError::UnexpectedRow(key.to_string())),
            }
            if seats.len() != layout.seats_per_row {
                return Err(ShapeError::WrongWidth {
                    row: key.to_string(),
                    actual: seats.len(),
                    expected: layout.seats_per_row,
                });
            }
        }

        if let Some(missing) = (0..layout.num_rows)
            .filter_map(row_label)
            .find(|label| !self.contains_row(*label))
        {
            return Err(ShapeError::MissingRow(missing));
        }

        Ok(())
    }
}
