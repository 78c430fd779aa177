use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unrecognized file type '{0}'.")]
    UnrecognizedFileType(char),

    #[error("Unrecognized timestamp type '{0}'.")]
    UnrecognizedTimestampType(char),

    #[error("Failed to parse date/time '{value}' with culture '{culture}'.")]
    DateTimeParse { value: String, culture: String },

    #[error("Unknown culture '{0}'.")]
    UnknownCulture(String),

    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Unrecognized argument '{argument}' at index {index}.")]
    UnrecognizedArgument { argument: String, index: usize },

    #[error("Failed to set timestamps on {path:?}: {source}")]
    SetTimestamps {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
