// src/config.rs
use crate::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, NOTION_API_BASE_URL};
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId};
use clap::Parser;
use std::time::Duration;
use url::Url;

/// Command-line and environment input for the server.
#[derive(Parser, Debug)]
#[command(author, version, about = "MCP server exposing Notion search and article retrieval", long_about = None)]
pub struct CommandLineInput {
    /// Notion integration token
    #[arg(long, env = "NOTION_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Restrict searches to the pages of this database
    #[arg(long, env = "NOTION_DATABASE_ID")]
    pub database_id: Option<String>,

    /// Root of the Notion REST API
    #[arg(long, env = "NOTION_API_URL", default_value = NOTION_API_BASE_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "NOTION_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved server configuration, validated once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_key: ApiKey,
    pub database_id: Option<DatabaseId>,
    pub api_base_url: Url,
    pub request_timeout: Duration,
    pub verbose: bool,
}

impl ServerConfig {
    /// Configuration with defaults for everything but the credential.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            database_id: None,
            api_base_url: default_base_url(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            verbose: false,
        }
    }

    pub fn with_base_url(mut self, url: Url) -> Self {
        self.api_base_url = url;
        self
    }

    pub fn with_database(mut self, database_id: DatabaseId) -> Self {
        self.database_id = Some(database_id);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = cli.api_token.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
            AppError::MissingConfiguration(
                "NOTION_API_TOKEN environment variable (or --api-token) not set".to_string(),
            )
        })?;
        let api_key = ApiKey::new(token)?;

        let database_id = cli
            .database_id
            .filter(|id| !id.trim().is_empty())
            .map(|id| DatabaseId::parse(&id))
            .transpose()?;

        let api_base_url = Url::parse(cli.api_url.trim_end_matches('/')).map_err(|e| {
            crate::types::ValidationError::InvalidUrl {
                url: cli.api_url.clone(),
                reason: e.to_string(),
            }
        })?;

        if cli.timeout_secs == 0 {
            return Err(crate::types::ValidationError::OutOfBounds {
                value: 0,
                min: 1,
                max: u64::MAX,
            }
            .into());
        }

        Ok(ServerConfig {
            api_key,
            database_id,
            api_base_url,
            request_timeout: Duration::from_secs(cli.timeout_secs),
            verbose: cli.verbose,
        })
    }
}

fn default_base_url() -> Url {
    Url::parse(NOTION_API_BASE_URL).expect("NOTION_API_BASE_URL should be a valid URL")
}
