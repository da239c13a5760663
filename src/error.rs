use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the library side of the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Permutations were requested for a word with no characters.
    #[error("cannot permute an empty word")]
    EmptyInput,

    /// Sampling was requested from a collection with no elements.
    #[error("cannot sample from an empty collection")]
    EmptyPopulation,

    #[error("Unsupported file extension. Please provide a .txt file.")]
    UnsupportedExtension(PathBuf),

    #[error("The file '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),

    /// A temperature line did not match `<number>C` or `<...>F`.
    #[error("Unexpected string format: '{line}'. Expected format is a numeric value followed by {expected}.")]
    UnexpectedFormat { line: String, expected: &'static str },

    #[error("Not enough disk space to save the output file ({needed} bytes needed, {available} available).")]
    InsufficientSpace { needed: u64, available: u64 },

    #[error("Permission denied: '{}'. Please check your permissions.", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type ToolResult<T> = Result<T, ToolError>;
