use anyhow::Context;
use clap::Parser;
use tracing::debug;

use seat_reservation::{config::Config, controllers::Cli, init_tracing, AppState};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env().context("invalid configuration")?;

    init_tracing(&config);

    let app = AppState::new(config);
    debug!(
        "Using seating chart {} ({} rows x {} seats)",
        app.config.chart.db_path.display(),
        app.config.chart.layout.num_rows,
        app.config.chart.layout.seats_per_row
    );
    let outcome = cli
        .run(&app.engine)
        .context("seat reservation failed")?;

    println!("{}", outcome);
    Ok(())
}
