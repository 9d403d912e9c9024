// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_mcp::{CommandLineInput, NotionHttpClient, NotionMcpServer, ServerConfig};
use rmcp::{transport::stdio, ServiceExt};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
///
/// Stdout carries the MCP transport, so console logging goes to stderr.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_mcp.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stderr", Box::new(stderr_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("failed to initialize logging")?;

    let config = ServerConfig::resolve(cli).context("invalid configuration")?;
    log::info!(
        "Starting notion-mcp (api: {}, database scope: {})",
        config.api_base_url,
        config
            .database_id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "workspace".to_string())
    );

    let client = NotionHttpClient::new(&config).context("failed to build Notion client")?;
    let server = NotionMcpServer::new(Arc::new(client));

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| log::error!("Failed to start MCP service: {}", e))?;
    service.waiting().await?;

    log::info!("MCP client disconnected, shutting down");
    Ok(())
}
