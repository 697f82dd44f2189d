use thiserror::Error;

#[derive(Debug, Error)]
pub enum TidyError {
    #[error("unknown status '{0}': expected EXPIRED_OBJECT, EXPIRED_TAG, or ILLEGAL_TAG")]
    UnknownStatus(String),

    #[error("statement failed against the warehouse: {statement}: {message}")]
    Execution { statement: String, message: String },

    #[error("failed to append audit record to {table}: {message}")]
    LogAppend { table: String, message: String },

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("object type '{0}' is not a valid DDL verb")]
    InvalidObjectType(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TidyError>;
