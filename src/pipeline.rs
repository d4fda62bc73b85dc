//! Two-stage run: list employees, look each one up, write the mapping.

use futures::stream::{self, StreamExt};

use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::models::{LookupResult, ResultMapping, RunSummary};
use crate::output;
use crate::services::{build_client, LookupService, SearchService};

/// Looks up every name, keeping at most `concurrency` requests in flight.
///
/// Results are folded in input order, so a repeated name always ends up with
/// the result of its last occurrence.
pub async fn aggregate(
    lookup: &LookupService,
    names: &[String],
    concurrency: usize,
) -> ResultMapping {
    let total = names.len();
    let mut results = stream::iter(names.iter().enumerate())
        .map(|(idx, name)| async move {
            println!("[*] Querying DeHashed for {}... ({}/{})", name, idx + 1, total);
            (name, lookup.lookup(name).await)
        })
        .buffered(concurrency.max(1));

    let mut mapping = ResultMapping::new();
    while let Some((name, result)) = results.next().await {
        if let LookupResult::Failed { error } = &result {
            tracing::debug!("{}", error);
        }
        mapping.insert(name.clone(), result);
    }
    mapping
}

/// Runs the full pipeline for one configuration.
pub async fn run(config: &Config) -> Result<RunSummary, AppError> {
    let client = build_client(config.request_timeout)?;
    let search = SearchService::new(client.clone(), config);
    let lookup = LookupService::new(client, config);

    println!("[+] Scraping LinkedIn for employees at {}...", config.company);
    let names = search
        .list_employees(&config.company)
        .await
        .with_context(|| format!("Listing employees of {}", config.company))?;
    println!("[+] Found {} employee names.", names.len());

    let mapping = aggregate(&lookup, &names, config.concurrency).await;

    output::write_json(&config.output, &mapping).await?;
    println!("[+] Results saved to {}", config.output.display());

    let summary = RunSummary {
        names_found: names.len(),
        entries: mapping.len(),
        failed_lookups: mapping.failures(),
        output: config.output.clone(),
    };
    tracing::info!(
        names_found = summary.names_found,
        entries = summary.entries,
        failed_lookups = summary.failed_lookups,
        "Run complete"
    );
    Ok(summary)
}
