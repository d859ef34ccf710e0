#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Required env var {0} not set")]
    MissingVar(&'static str),

    #[error("Invalid value for env var {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[error("Missing argument <{0}> (usage: create-job <endpoint> <address>)")]
    MissingArgument(&'static str),

    #[error("Argument <{name}> is not valid UTF-8: {lossy:?}")]
    InvalidArgument { name: &'static str, lossy: String },
}
