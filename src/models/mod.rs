pub mod chart;
pub mod seat;

pub use chart::{SeatingChart, ShapeError};
pub use seat::{row_index, row_label, SeatRange, SeatState};
