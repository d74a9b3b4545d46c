//! Unified startup error type.

/// The error type returned by listd's fallible startup operations.
///
/// Per-request failures (404, 405, 422) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// what should stop the process: a bad route table, a bad configuration value,
/// or a failure binding the listener.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid route `{pattern}`: {source}")]
    InvalidRoute {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid value for {key}: `{value}`")]
    Config { key: &'static str, value: String },
}
