pub mod config;
pub mod controllers;
pub mod database;
pub mod models;
pub mod services;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::database::ChartStore;
use crate::services::ReservationEngine;

// Состояние одного запуска: конфигурация и движок бронирования
pub struct AppState {
    pub config: Config,
    pub engine: ReservationEngine,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = ChartStore::new(config.chart.db_path.clone(), config.chart.layout);
        Self {
            engine: ReservationEngine::new(store),
            config,
        }
    }
}

// Логи идут в stderr, stdout остается для SUCCESS/FAIL
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
