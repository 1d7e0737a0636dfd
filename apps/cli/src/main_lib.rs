use std::sync::Arc;

use crate::config::{Config, LogFormat};
use anyhow::Context;
use blocksquare_tvl::{AddressBook, Balances, BlocksquareAdapter, EnvioPropertySource};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr; stdout is reserved for the balances document.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_adapter(config: &Config) -> anyhow::Result<BlocksquareAdapter> {
    let address_book = match &config.address_book_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading address book {}", path.display()))?;
            let book = AddressBook::from_json_str(&json)?;
            tracing::info!("Address book loaded from {}", path.display());
            book
        }
        None => AddressBook::new(),
    };

    let source = EnvioPropertySource::with_endpoint(&config.endpoint, config.request_timeout);
    tracing::info!("Property source endpoint: {}", source.endpoint());

    Ok(BlocksquareAdapter::new(
        Arc::new(source),
        Arc::new(address_book),
    ))
}

pub async fn run(config: &Config) -> anyhow::Result<Balances> {
    let adapter = build_adapter(config)?;
    tracing::info!("Methodology: {}", adapter.methodology());

    let balances = adapter.tvl(&config.chain).await.map_err(|e| {
        tracing::error!(kind = %e.kind(), "TVL computation failed: {}", e);
        e
    })?;

    for (address, amount) in balances.iter() {
        tracing::info!("{} TVL: {} -> {}", config.chain, address, amount);
    }
    Ok(balances)
}
