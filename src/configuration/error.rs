use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine the home directory")]
    HomeDirectory,

    #[error("failed to serialize default configuration: {0}")]
    Defaults(#[source] serde_yaml::Error),

    #[error("failed to read config file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config from {origin} is not a mapping")]
    NotAMapping { origin: String },

    #[error("environment variable {var} does not contain valid unicode")]
    EnvNotUnicode { var: String },

    #[error("failed to unmarshal config: {0}")]
    Unmarshal(#[source] serde_yaml::Error),

    #[error("machine #{index} has an empty name")]
    EmptyMachineName { index: usize },
}
