use std::env;
use std::fmt;
use std::path::PathBuf;

/// The host queried when no override is provided.
/// This is an internal, IP-addressed deployment, hence the insecure TLS knob below.
const DEFAULT_HOST: &str = "172.30.113.15";

/// The monitored object whose instances we poll by default.
const DEFAULT_OBJECT_ID: &str = "88194348894";

/// Where the fetched poll info lands on disk.
const DEFAULT_OUTPUT: &str = "poll_info.json";

/// Everything a single fetch needs, resolved once at startup.
///
/// Credential material (the bearer token and the `client.id` cookie value)
/// must come from the environment. We deliberately refuse to ship defaults
/// for either of them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Either a bare host/IP (assumed `https://`) or a full `scheme://host` base.
    pub host: String,
    /// The object identifier interpolated into the query path.
    pub object_id: String,
    /// An opaque personal access token, sent as `Authorization: Bearer <token>`.
    pub bearer_token: String,
    /// The session token the service expects as a `client.id` cookie.
    pub client_id: String,
    /// Where to write the fetched poll info.
    pub output_path: PathBuf,
    /// Skip certificate verification when connecting.
    ///
    /// The known deployment serves a certificate that cannot be validated
    /// through the standard trust chain (it is addressed by IP), so this
    /// exists as an explicit opt-out. It always defaults to off.
    pub insecure_tls: bool,
}

/// Problems resolving the configuration from the environment.
#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVariable(name) => {
                write!(f, "missing required environment variable {name}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves the configuration through the given lookup.
    ///
    /// Tests use this directly so they never have to touch the
    /// process-global environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bearer_token = lookup("POLLCTL_BEARER_TOKEN")
            .ok_or(ConfigError::MissingVariable("POLLCTL_BEARER_TOKEN"))?;
        let client_id =
            lookup("POLLCTL_CLIENT_ID").ok_or(ConfigError::MissingVariable("POLLCTL_CLIENT_ID"))?;

        Ok(Self {
            host: lookup("POLLCTL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            object_id: lookup("POLLCTL_OBJECT_ID").unwrap_or_else(|| DEFAULT_OBJECT_ID.to_string()),
            bearer_token,
            client_id,
            output_path: lookup("POLLCTL_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            insecure_tls: lookup("POLLCTL_INSECURE_TLS")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        })
    }
}

/// Interprets an environment flag. Anything other than an affirmative is off.
fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "yes")
}
