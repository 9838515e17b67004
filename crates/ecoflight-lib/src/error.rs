use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the EcoFlight library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Network data failed validation while it was being loaded.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Raised when an airport code could not be found in the network.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when an aircraft model could not be found in the catalog.
    #[error("unknown aircraft: {name}{}", format_suggestions(.suggestions))]
    UnknownAircraft {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a mode string is not one of `eco`, `balanced`, `fast`.
    #[error("invalid optimization mode '{mode}'; expected one of: eco, balanced, fast")]
    InvalidMode { mode: String },

    /// Raised when the origin and destination of a request are the same airport.
    #[error("origin and destination must differ (both are {code})")]
    SameOriginDestination { code: String },

    /// Raised when no path connects origin and destination.
    #[error("no path found between {origin} and {destination}")]
    NoPath { origin: String, destination: String },

    /// Raised when a search expands more nodes than its budget allows.
    #[error("search exceeded the expansion limit of {limit} nodes")]
    ExpansionLimitExceeded { limit: usize },

    /// Raised when a caller cancelled an in-flight search.
    #[error("search was cancelled")]
    Cancelled,

    /// Dataset file could not be located at the resolved path.
    #[error("dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    DataDirUnavailable,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Load-time inconsistencies in airport, route, or aircraft records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StructuralError {
    #[error("duplicate airport code: {code}")]
    DuplicateAirport { code: String },

    #[error("invalid airport {code}: {message}")]
    InvalidAirport { code: String, message: String },

    /// A route references an airport that is not part of the airport set.
    #[error("route {origin} -> {destination} references unknown airport {code}")]
    UnknownRouteEndpoint {
        origin: String,
        destination: String,
        code: String,
    },

    #[error("route {code} -> {code} is a self-loop")]
    SelfLoop { code: String },

    #[error("invalid route {origin} -> {destination}: {message}")]
    InvalidRoute {
        origin: String,
        destination: String,
        message: String,
    },

    #[error("duplicate aircraft model: {name}")]
    DuplicateAircraft { name: String },

    #[error("invalid aircraft data: {message}")]
    InvalidAircraft { message: String },
}

/// Coarse classification of [`Error`] values for callers that map errors to
/// status codes or retry policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Structural,
    NotFound,
    InvalidRequest,
    InvalidMode,
    NoPath,
    ExpansionLimitExceeded,
    Cancelled,
    Dataset,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Structural(_) => ErrorKind::Structural,
            Error::UnknownAirport { .. } | Error::UnknownAircraft { .. } => ErrorKind::NotFound,
            Error::SameOriginDestination { .. } => ErrorKind::InvalidRequest,
            Error::InvalidMode { .. } => ErrorKind::InvalidMode,
            Error::NoPath { .. } => ErrorKind::NoPath,
            Error::ExpansionLimitExceeded { .. } => ErrorKind::ExpansionLimitExceeded,
            Error::Cancelled => ErrorKind::Cancelled,
            Error::DatasetNotFound { .. }
            | Error::DataDirUnavailable
            | Error::Csv(_)
            | Error::Io(_) => ErrorKind::Dataset,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
