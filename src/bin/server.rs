#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]

use bracket_ledger::{cli::ServerArgs, init_tracing, remote};
use color_eyre::eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing("info");

    let args = ServerArgs::load()?;
    remote::serve(args.port).await
}
