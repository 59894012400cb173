use pollctl::api::{self, FetchError};
use pollctl::config::Config;

#[tokio::main]
async fn main() {
    // Failures are reported, not raised: the process exits 0 either way.
    if let Err(error) = run().await {
        println!("Error fetching poll-info: {error}");
    }
}

async fn run() -> Result<(), FetchError> {
    let config = Config::from_env().map_err(FetchError::Config)?;
    api::fetch_and_persist(config).await
}
