//! Error taxonomy for loading resources and building graphs.

/// Errors surfaced while reading resources, parsing options or building the graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported graph layout: {0}")]
    UnsupportedLayout(String),

    #[error("invalid key/value pair: {0}")]
    InvalidKeyValue(String),

    #[error("cannot read origin of {resource}: {source}")]
    Origin {
        resource: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document {index}: {message}")]
    Parse { index: usize, message: String },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
