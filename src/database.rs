use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ChartLayout;
use crate::models::{SeatingChart, ShapeError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access seating chart {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("seating chart {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("seating chart {path} does not match the configured layout: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: ShapeError,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// JSON document holding the whole seating chart. Every write replaces the file.
#[derive(Debug, Clone)]
pub struct ChartStore {
    path: PathBuf,
    layout: ChartLayout,
}

impl ChartStore {
    pub fn new(path: impl Into<PathBuf>, layout: ChartLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    // Создает пустую схему, перезаписывая существующий файл
    pub fn initialize(&self) -> StoreResult<SeatingChart> {
        let chart = SeatingChart::create_empty(self.layout);
        self.save(&chart)?;
        info!(
            "Initialized seating chart at {} ({} rows x {} seats)",
            self.path.display(),
            self.layout.num_rows,
            self.layout.seats_per_row
        );
        Ok(chart)
    }

    pub fn load_or_init(&self) -> StoreResult<SeatingChart> {
        if !self.exists() {
            info!("Seating chart {} not found, creating it", self.path.display());
            self.initialize()?;
        }
        self.load()
    }

    pub fn load(&self) -> StoreResult<SeatingChart> {
        let raw = fs::read(&self.path).map_err(|source| self.io_error(source))?;
        let chart: SeatingChart =
            serde_json::from_slice(&raw).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        chart
            .check_shape(self.layout)
            .map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded seating chart, {} seats booked", chart.booked_count());
        Ok(chart)
    }

    pub fn save(&self, chart: &SeatingChart) -> StoreResult<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        chart.serialize(&mut ser).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, buf).map_err(|source| self.io_error(source))?;
        debug!("Saved seating chart to {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SeatRange, SeatState};

    fn store_in(dir: &tempfile::TempDir) -> ChartStore {
        ChartStore::new(dir.path().join("seats.json"), ChartLayout::default())
    }

    #[test]
    fn load_or_init_creates_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.exists());

        let chart = store.load_or_init().unwrap();

        assert!(store.exists());
        assert_eq!(chart, SeatingChart::create_empty(ChartLayout::default()));
    }

    #[test]
    fn load_or_init_keeps_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut chart = store.initialize().unwrap();
        chart.fill(&SeatRange { row: 'C', start: 0, len: 2 }, SeatState::Booked);
        store.save(&chart).unwrap();

        assert_eq!(store.load_or_init().unwrap(), chart);
    }

    #[test]
    fn initialize_overwrites_existing_bookings() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut chart = store.initialize().unwrap();
        chart.fill(&SeatRange { row: 'A', start: 1, len: 3 }, SeatState::Booked);
        store.save(&chart).unwrap();
        assert_eq!(store.load().unwrap().booked_count(), 3);

        let fresh = store.initialize().unwrap();

        assert_eq!(fresh, SeatingChart::create_empty(ChartLayout::default()));
        assert_eq!(store.load().unwrap(), fresh);
    }

    #[test]
    fn document_is_indented_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChartStore::new(
            dir.path().join("seats.json"),
            ChartLayout::new(2, 1).unwrap(),
        );
        store.initialize().unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "{\n    \"A\": [\n        \"\"\n    ],\n    \"B\": [\n        \"\"\n    ]\n}");
    }

    #[test]
    fn invalid_json_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Json { .. })));
    }

    #[test]
    fn wrong_width_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let narrow = ChartStore::new(dir.path().join("seats.json"), ChartLayout::new(20, 6).unwrap());
        narrow.initialize().unwrap();

        let wide = ChartStore::new(narrow.path(), ChartLayout::new(20, 8).unwrap());
        assert!(matches!(wide.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ChartStore::new(dir.path(), ChartLayout::default());

        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }
}
