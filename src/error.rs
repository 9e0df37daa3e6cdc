//! Startup and serve failures for the host binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Config { var: &'static str, value: String },

    /// `[package.metadata.leptos]` or `LEPTOS_*` settings could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
