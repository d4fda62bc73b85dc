use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::models::{LookupResult, PROFILES_FIELD};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Builds the shared HTTP client with a bounded per-request timeout.
pub fn build_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))
}

// ============ SerpAPI LinkedIn Search ============

pub struct SearchService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SearchService {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.serpapi_base_url.clone(),
            api_key: config.serpapi_key.clone(),
        }
    }

    /// Lists employee names for `company` via the SerpAPI LinkedIn engine.
    ///
    /// Fails fast: a transport error, a non-success status, or a body that is
    /// not JSON aborts the run, since no partial list can be trusted.
    ///
    /// A non-success reply is fatal even when its body is JSON. It is not read
    /// as an empty profile list, so a rejected key never produces an empty
    /// results file.
    pub async fn list_employees(&self, company: &str) -> Result<Vec<String>, AppError> {
        let query = format!("{} employees", company);
        let url = Url::parse_with_params(
            &format!("{}/search.json", self.base_url),
            &[
                ("engine", "linkedin"),
                ("q", query.as_str()),
                ("api_key", self.api_key.as_str()),
            ],
        )
        .map_err(|e| AppError::SearchFailed(format!("Failed to build URL: {}", e)))?;

        tracing::info!("SerpAPI: Searching LinkedIn for '{}'", query);
        // Redact key from logs to prevent credential exposure
        tracing::debug!(
            "SerpAPI URL: {}/search.json?engine=linkedin&q={}&api_key=[REDACTED]",
            self.base_url,
            query
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("SerpAPI request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::SearchFailed(format!(
                "SerpAPI returned status {}: {}",
                status, error_text
            )));
        }

        let data: Value = response
            .json()
            .await
            .context("Failed to parse SerpAPI response")?;

        if let Some(message) = data.get("error").and_then(Value::as_str) {
            tracing::warn!("SerpAPI reported an error: {}", message);
        }

        let names = extract_employee_names(&data);
        tracing::info!("SerpAPI: Found {} profiles with a name", names.len());
        Ok(names)
    }
}

/// Pulls `name` out of every profile record under `linkedin_profiles`.
///
/// A missing or non-array field means no employees. Records without a string
/// `name` are skipped.
pub fn extract_employee_names(data: &Value) -> Vec<String> {
    let Some(profiles) = data.get(PROFILES_FIELD).and_then(Value::as_array) else {
        return Vec::new();
    };

    profiles
        .iter()
        .filter_map(|profile| profile.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

// ============ DeHashed Lookup ============

pub struct LookupService {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl LookupService {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.dehashed_base_url.clone(),
            username: config.dehashed_email.clone(),
            password: config.dehashed_key.clone(),
        }
    }

    /// Queries DeHashed for `name`. Never fails: every outcome is a
    /// `LookupResult`.
    ///
    /// Transport errors and undecodable 200 bodies become error records
    /// instead of aborting the run.
    pub async fn lookup(&self, name: &str) -> LookupResult {
        let url = match Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[("query", name)],
        ) {
            Ok(url) => url,
            Err(e) => return LookupResult::request_failure(name, e),
        };

        tracing::debug!("DeHashed: Querying {}", url);

        let response = match self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("DeHashed request for '{}' failed: {}", name, e);
                return LookupResult::request_failure(name, e);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("DeHashed returned {} for '{}'", status, name);
            return LookupResult::status_failure(name, status.as_u16());
        }

        match response.json::<Value>().await {
            Ok(body) => LookupResult::Found(body),
            Err(e) => {
                tracing::warn!("Failed to parse DeHashed response for '{}': {}", name, e);
                LookupResult::invalid_response(name, e)
            }
        }
    }
}
