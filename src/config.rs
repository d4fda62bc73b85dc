use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::errors::AppError;

/// Validated settings for one run. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub company: String,
    pub serpapi_key: String,
    pub serpapi_base_url: String,
    pub dehashed_email: String,
    pub dehashed_key: String,
    pub dehashed_base_url: String,
    pub output: PathBuf,
    pub request_timeout: Duration,
    pub concurrency: usize,
}

fn non_blank(name: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Config(format!("{} cannot be empty", name)));
    }
    Ok(value)
}

fn http_url(name: &str, value: String) -> Result<String, AppError> {
    let value = non_blank(name, value)?;
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(AppError::Config(format!(
            "{} must start with http:// or https://",
            name
        )));
    }
    Ok(value.trim_end_matches('/').to_string())
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        if cli.timeout_secs == 0 {
            return Err(AppError::Config(
                "--timeout-secs must be at least 1".to_string(),
            ));
        }
        if cli.concurrency == 0 {
            return Err(AppError::Config(
                "--concurrency must be at least 1".to_string(),
            ));
        }
        if cli.output.as_os_str().is_empty() {
            return Err(AppError::Config("--output cannot be empty".to_string()));
        }

        let config = Self {
            company: non_blank("--company", cli.company)?,
            serpapi_key: non_blank("--serpapi", cli.serpapi)?,
            serpapi_base_url: http_url("SERPAPI_BASE_URL", cli.serpapi_base_url)?,
            dehashed_email: non_blank("--dehashed_email", cli.dehashed_email)?,
            dehashed_key: non_blank("--dehashed_key", cli.dehashed_key)?,
            dehashed_base_url: http_url("DEHASHED_BASE_URL", cli.dehashed_base_url)?,
            output: cli.output,
            request_timeout: Duration::from_secs(cli.timeout_secs),
            concurrency: cli.concurrency,
        };

        // Log successful configuration load (without sensitive values)
        tracing::debug!("Company: {}", config.company);
        tracing::debug!("SerpAPI Base URL: {}", config.serpapi_base_url);
        tracing::debug!("DeHashed Base URL: {}", config.dehashed_base_url);
        tracing::debug!(
            "Timeout: {:?}, concurrency: {}",
            config.request_timeout,
            config.concurrency
        );

        Ok(config)
    }
}
