use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

// Максимум рядов - буквы латинского алфавита
pub const MAX_ROWS: usize = 26;
pub const MAX_SEATS_PER_ROW: usize = 64;

pub const DEFAULT_DB_FILE: &str = "seats.json";
pub const DEFAULT_NUM_ROWS: usize = 20;
pub const DEFAULT_SEATS_PER_ROW: usize = 6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid number, got {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("NUM_ROWS must be between 1 and {MAX_ROWS}, got {0}")]
    RowsOutOfRange(usize),

    #[error("SEATS_PER_ROW must be at least 1")]
    EmptyRow,

    #[error("SEATS_PER_ROW must be at most {MAX_SEATS_PER_ROW}, got {0}")]
    RowTooWide(usize),
}

// Главная структура конфигурации
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub chart: ChartConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Настройки схемы мест и файла хранения
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    pub db_path: PathBuf,
    pub layout: ChartLayout,
}

/// Shape of the seating chart. Shared by the initializer and the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ChartLayout {
    pub num_rows: usize,
    pub seats_per_row: usize,
}

impl ChartLayout {
    pub fn new(num_rows: usize, seats_per_row: usize) -> Result<Self, ConfigError> {
        if num_rows == 0 || num_rows > MAX_ROWS {
            return Err(ConfigError::RowsOutOfRange(num_rows));
        }
        if seats_per_row == 0 {
            return Err(ConfigError::EmptyRow);
        }
        if seats_per_row > MAX_SEATS_PER_ROW {
            return Err(ConfigError::RowTooWide(seats_per_row));
        }
        Ok(Self { num_rows, seats_per_row })
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            num_rows: DEFAULT_NUM_ROWS,
            seats_per_row: DEFAULT_SEATS_PER_ROW,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let num_rows = parse_var("NUM_ROWS", DEFAULT_NUM_ROWS)?;
        let seats_per_row = parse_var("SEATS_PER_ROW", DEFAULT_SEATS_PER_ROW)?;

        Ok(Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_reservation=info".to_string()),
            },
            chart: ChartConfig {
                db_path: env::var("SEATS_DB_FILE")
                    .unwrap_or_else(|_| DEFAULT_DB_FILE.to_string())
                    .into(),
                layout: ChartLayout::new(num_rows, seats_per_row)?,
            },
        })
    }
}

fn parse_var<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_twenty_rows_of_six() {
        let layout = ChartLayout::default();
        assert_eq!(layout.num_rows, 20);
        assert_eq!(layout.seats_per_row, 6);
    }

    #[test]
    fn layout_rejects_more_rows_than_letters() {
        assert!(matches!(
            ChartLayout::new(27, 6),
            Err(ConfigError::RowsOutOfRange(27))
        ));
        assert!(ChartLayout::new(26, 8).is_ok());
    }

    #[test]
    fn layout_rejects_zero_sized_charts() {
        assert!(matches!(ChartLayout::new(0, 6), Err(ConfigError::RowsOutOfRange(0))));
        assert!(matches!(ChartLayout::new(20, 0), Err(ConfigError::EmptyRow)));
    }

    #[test]
    fn layout_rejects_huge_rows() {
        assert!(matches!(
            ChartLayout::new(20, usize::MAX),
            Err(ConfigError::RowTooWide(usize::MAX))
        ));
        assert!(matches!(
            ChartLayout::new(20, MAX_SEATS_PER_ROW + 1),
            Err(ConfigError::RowTooWide(_))
        ));
        assert!(ChartLayout::new(20, MAX_SEATS_PER_ROW).is_ok());
    }
}
