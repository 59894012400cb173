mod client;

pub use client::{ApiClient, FetchError};

use crate::config::Config;
use crate::output;

/// Runs the whole tool: one GET, print the result, save it to disk.
///
/// Either the complete artifact is written or nothing is. Every failure
/// along the way surfaces as a single [`FetchError`] for the caller to
/// report; there is no retry.
pub async fn fetch_and_persist(config: Config) -> Result<(), FetchError> {
    let api_client = ApiClient::new(config)?;
    let result = api_client.fetch_instances().await?;

    // Round-trip the payload unchanged apart from indentation. The console
    // and the file receive the exact same text.
    let rendered = output::to_pretty_json(&result).map_err(FetchError::Parse)?;
    println!("{rendered}");

    output::persist(api_client.output_path(), &rendered).map_err(FetchError::Write)?;
    println!("\nSaved → {}", api_client.output_path().display());

    Ok(())
}
