//! Creates an empty seating chart, overwriting any existing document.

use anyhow::Context;

use seat_reservation::{config::Config, init_tracing, AppState};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;
    init_tracing(&config);

    let app = AppState::new(config);
    app.engine
        .store()
        .initialize()
        .context("failed to write seating chart")?;

    Ok(())
}
