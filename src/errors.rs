use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Record {index} has no '{field}' field")]
    MissingDiscriminant { index: usize, field: String },

    #[error("Record {index} has a non-string '{field}' field: {found}")]
    NonStringDiscriminant {
        index: usize,
        field: String,
        found: String,
    },

    #[error("Record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("Input is neither a JSON array nor newline-delimited JSON objects")]
    NotAnArray,
}

// Define a convenient Result type
pub type Result<T> = std::result::Result<T, GroupError>;
