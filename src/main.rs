#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use std::io;

use bracket_ledger::{
    cli::{CliArgs, Report},
    csv::{self, CsvActionRecord},
    init_tracing,
    query::account::{write_account_csv, write_daily_csv},
    replay::Replay,
    store::Store,
};
use color_eyre::eyre::{Result, eyre};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing("warn");

    let cli_args = CliArgs::load()?;

    // Each run starts from the seed data; nothing outlives the process.
    let store = Store::with_seed_data().await.map_err(|e| eyre!(e))?;
    let replay = Replay::new(&store);

    let rows = csv::read_input::<CsvActionRecord>(&cli_args.input_file_path)?;

    for row_result in rows {
        match row_result {
            Ok(row) => {
                let _ = replay
                    .handle(row)
                    .await
                    .inspect_err(|e| debug!("Error processing row: {}", e));
            }
            Err(e) => debug!("Error parsing row: {}", e),
        }
    }

    let state = store.state().map_err(|e| eyre!(e))?;
    match cli_args.report {
        Report::Account => write_account_csv(io::stdout(), &state)?,
        Report::Daily => write_daily_csv(io::stdout(), &state)?,
    }

    Ok(())
}
