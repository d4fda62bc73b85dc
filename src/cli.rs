use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";
pub const DEFAULT_DEHASHED_BASE_URL: &str = "https://api.dehashed.com";

#[derive(Parser, Debug, Clone)]
#[command(name = "osint-scrubber")]
#[command(about = "Scrape LinkedIn and check DeHashed for employees.")]
pub struct Cli {
    /// Company name to search on LinkedIn
    #[arg(long)]
    pub company: String,

    /// SerpAPI key for LinkedIn scraping
    #[arg(long)]
    pub serpapi: String,

    /// DeHashed account email
    #[arg(long = "dehashed_email")]
    pub dehashed_email: String,

    /// DeHashed API key
    #[arg(long = "dehashed_key")]
    pub dehashed_key: String,

    /// Output file to store results
    #[arg(long)]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Number of DeHashed lookups kept in flight
    #[arg(long, env = "LOOKUP_CONCURRENCY", default_value_t = 1)]
    pub concurrency: usize,

    #[arg(long, env = "SERPAPI_BASE_URL", default_value = DEFAULT_SERPAPI_BASE_URL, hide = true)]
    pub serpapi_base_url: String,

    #[arg(long, env = "DEHASHED_BASE_URL", default_value = DEFAULT_DEHASHED_BASE_URL, hide = true)]
    pub dehashed_base_url: String,
}
