mod request;

use std::io::Read;

use anyhow::Context;
use recurra_core::config::load_config;
use recurra_pattern::ExpansionOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use crate::request::QueryRequest;

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let input = read_input(std::env::args().nth(1).as_deref())?;
    let request: QueryRequest =
        serde_json::from_str(&input).context("failed to parse query document")?;

    let response = request::run(
        request,
        ExpansionOptions::from(&config.expansion),
        config.expansion.default_limit,
    )?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Reads the query document from `path`, or stdin when absent or `-`.
fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read query document from stdin")?;
            Ok(input)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read query document {path}")),
    }
}
