use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad policy parameters: negative, zero, or more than one mode requested.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The two-letter suffix scheme cannot name a shard at this index.
    #[error("shard index {index} exceeds the naming limit of {limit} shards")]
    ShardLimitExceeded { index: usize, limit: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A core error prefixed with where it was raised.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Wrap `self` under `context`. Classification and suggestions still come
    /// from the wrapped error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self) as Box<dyn std::error::Error + Send + Sync>,
        }
    }

    /// True for bad parameters, including a request past the shard limit.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidArgument(_) | Error::ShardLimitExceeded { .. } => true,
            Error::Context { source, .. } => source
                .downcast_ref::<Error>()
                .map(Error::is_invalid_argument)
                .unwrap_or(false),
            Error::Config(_) => false,
        }
    }

    /// Get suggestions for common errors.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Error::InvalidArgument(msg) => {
                if msg.contains("one of") || msg.contains("more than one") {
                    vec!["Specify exactly one of -l, -n or -b with a positive value".into()]
                } else if msg.contains("exceeds the number of lines") {
                    vec![
                        "Ask for fewer output files than the input has lines".into(),
                        "Use -l to control the number of lines per file instead".into(),
                    ]
                } else {
                    vec!["Size parameters must be positive integers".into()]
                }
            }
            Error::ShardLimitExceeded { limit, .. } => {
                vec![
                    format!("At most {} shards can be named with a two-letter suffix", limit),
                    "Increase the lines or bytes per file so fewer shards are needed".into(),
                ]
            }
            Error::Config(msg) => {
                if msg.contains("buffer") || msg.contains("chunk") {
                    vec!["Check SPLITR_READ_CHUNK_BYTES and SPLITR_WRITE_BUFFER_BYTES".into()]
                } else {
                    vec![]
                }
            }
            Error::Context { source, .. } => source
                .downcast_ref::<Error>()
                .map(Error::suggestions)
                .unwrap_or_default(),
        }
    }
}
