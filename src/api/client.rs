use std::fmt;
use std::io;

use reqwest::{header, StatusCode};
use url::Url;

use crate::config::{Config, ConfigError};

/// Everything that can go wrong between startup and the artifact landing on
/// disk. The caller reports all of these the same way, but keeping the
/// variants apart means the message can at least say what actually happened.
#[derive(Debug)]
pub enum FetchError {
    /// The environment did not provide a usable configuration.
    Config(ConfigError),
    /// The HTTP client itself could not be constructed.
    Client(reqwest::Error),
    /// The configured host and object identifier do not form a URL.
    Endpoint(url::ParseError),
    /// The request never produced a response.
    Request(reqwest::Error),
    /// The service answered outside the 2xx range.
    Status(StatusCode),
    /// The response body was not valid JSON.
    Parse(serde_json::Error),
    /// The artifact could not be written.
    Write(io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(error) => write!(f, "{error}"),
            FetchError::Client(error) => write!(f, "could not build HTTP client: {error}"),
            FetchError::Endpoint(error) => write!(f, "could not build query URL: {error}"),
            FetchError::Request(error) => write!(f, "{error}"),
            FetchError::Status(status) => write!(f, "server responded with {status}"),
            FetchError::Parse(error) => write!(f, "response body is not valid JSON: {error}"),
            FetchError::Write(error) => write!(f, "could not write output file: {error}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Config(error) => Some(error),
            FetchError::Client(error) | FetchError::Request(error) => Some(error),
            FetchError::Endpoint(error) => Some(error),
            FetchError::Status(_) => None,
            FetchError::Parse(error) => Some(error),
            FetchError::Write(error) => Some(error),
        }
    }
}

/// A thin client around the poll-info query endpoint.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: Url,
    config: Config,
}

impl ApiClient {
    /// Creates a client for the configured deployment.
    ///
    /// When `insecure_tls` is set we explicitly accept any server
    /// certificate. The known deployment is reached by IP and serves a
    /// certificate the standard trust chain cannot validate, and that is the
    /// only reason this knob exists.
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if config.insecure_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(FetchError::Client)?;

        // A bare host or IP is assumed to be HTTPS; a full scheme://host
        // base is taken as-is.
        let host = &config.host;
        let base = if host.contains("://") {
            host.clone()
        } else {
            format!("https://{host}")
        };
        let endpoint = Url::parse(&format!(
            "{base}/api/v1/query/objects/{}/instances",
            config.object_id
        ))
        .map_err(FetchError::Endpoint)?;

        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    /// The fully interpolated query URL for the configured object.
    pub fn instances_url(&self) -> &Url {
        &self.endpoint
    }

    /// Performs the one GET this tool exists for.
    ///
    /// No timeout is configured, so an unreachable host blocks until the
    /// TCP layer itself gives up.
    pub async fn fetch_instances(&self) -> Result<serde_json::Value, FetchError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.bearer_token),
            )
            // The service's authentication layer wants a session token as a
            // cookie alongside the bearer token.
            .header(
                header::COOKIE,
                format!("client.id={}", self.config.client_id),
            )
            .send()
            .await
            .map_err(FetchError::Request)?;

        // Anything outside 2xx is a failure, full stop. There is no retry
        // and no partial result to salvage.
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await.map_err(FetchError::Request)?;
        serde_json::from_str(body.as_str()).map_err(FetchError::Parse)
    }

    /// Where the fetched artifact should land.
    pub fn output_path(&self) -> &std::path::Path {
        &self.config.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_for_host(host: &str) -> Config {
        Config {
            host: host.to_string(),
            object_id: "42".to_string(),
            bearer_token: "test-token".to_string(),
            client_id: "test-cookie".to_string(),
            output_path: PathBuf::from("poll_info.json"),
            insecure_tls: false,
        }
    }

    #[test]
    fn bare_host_is_assumed_https() {
        let client = ApiClient::new(config_for_host("172.30.113.15")).expect("should build");
        assert_eq!(
            client.instances_url().as_str(),
            "https://172.30.113.15/api/v1/query/objects/42/instances"
        );
    }

    #[test]
    fn explicit_scheme_is_preserved() {
        let client =
            ApiClient::new(config_for_host("http://127.0.0.1:8080")).expect("should build");
        assert_eq!(
            client.instances_url().as_str(),
            "http://127.0.0.1:8080/api/v1/query/objects/42/instances"
        );
    }
}
