//! Configuration for a `create-job` run.
//!
//! Everything the run needs is resolved here, before any network
//! activity: the node base URL and login credentials come from the
//! environment, the initiator endpoint and address from the command line.

use std::ffi::OsString;
use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::ConfigError;

/// Env var holding the Chainlink node base URL.
pub const ENV_CHAINLINK_URL: &str = "CHAINLINK_URL";
/// Env var overriding the login e-mail.
pub const ENV_CHAINLINK_EMAIL: &str = "CHAINLINK_EMAIL";
/// Env var overriding the login password.
pub const ENV_CHAINLINK_PASSWORD: &str = "CHAINLINK_PASSWORD";
/// Env var overriding the per-request HTTP timeout.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";

/// Node development login, used when no override is set.
pub const DEFAULT_EMAIL: &str = "notreal@fakeemail.ch";
pub const DEFAULT_PASSWORD: &str = "twochains";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Login fields POSTed to the node's `/sessions` endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

/// Connection settings for the target node.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://localhost:6688`. Parsed by the client.
    pub base_url: String,
    pub credentials: Credentials,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                |
    /// |------------------------|------------------------|
    /// | `CHAINLINK_URL`        | required               |
    /// | `CHAINLINK_EMAIL`      | `notreal@fakeemail.ch` |
    /// | `CHAINLINK_PASSWORD`   | `twochains`            |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = var(ENV_CHAINLINK_URL).ok_or(ConfigError::MissingVar(ENV_CHAINLINK_URL))?;

        let defaults = Credentials::default();
        let credentials = Credentials {
            email: var(ENV_CHAINLINK_EMAIL).unwrap_or(defaults.email),
            password: var(ENV_CHAINLINK_PASSWORD).unwrap_or(defaults.password),
        };

        let timeout_secs = match var(ENV_REQUEST_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidVar {
                    name: ENV_REQUEST_TIMEOUT_SECS,
                    reason: format!("{raw:?} is not a whole number of seconds ({e})"),
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: base_url.trim().to_string(),
            credentials,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Positional command-line values fed into the job specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobArgs {
    /// Name of the external-initiator endpoint the job listens on.
    pub endpoint: String,
    /// Address the initiator watches.
    pub address: String,
}

impl JobArgs {
    /// Parse `<endpoint> <address>` from arguments with the program
    /// name already stripped. Values are kept verbatim; extra trailing
    /// arguments are ignored. Accepts `std::env::args_os()` so arguments
    /// that are not UTF-8 become a usage error instead of a panic.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let endpoint = next_arg(&mut args, "endpoint")?;
        let address = next_arg(&mut args, "address")?;
        Ok(Self { endpoint, address })
    }
}

fn next_arg(
    args: &mut impl Iterator<Item = OsString>,
    name: &'static str,
) -> Result<String, ConfigError> {
    let raw = args.next().ok_or(ConfigError::MissingArgument(name))?;
    raw.into_string()
        .map_err(|raw| ConfigError::InvalidArgument {
            name,
            lossy: raw.to_string_lossy().into_owned(),
        })
}
