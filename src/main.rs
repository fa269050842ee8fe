use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod services;

/// Every external call goes through one shared client and its timeout.
const HTTP_TIMEOUT_SECONDS: u64 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting restaurant finder backend in {} mode", config.environment);

    let http_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECONDS))
        .build()
        .context("Failed to build the shared HTTP client")?;

    controller::serve(http_client, &config).await
}
