#![allow(clippy::doc_markdown)]

mod api;
mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Mode, charging, sorted, summary},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let on = args.date();
    let provider = args.provider.try_new_client()?;

    match args.mode() {
        Mode::Summary => summary(&provider, args.zone, on).await?,
        Mode::Sorted => sorted(&provider, args.zone, on).await?,
        Mode::Charging(duration) => charging(&provider, args.zone, on, duration).await?,
    }

    info!("done!");
    Ok(())
}
