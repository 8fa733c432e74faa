use std::path::PathBuf;

/// Error type reported by the underlying SQL client.
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("invalid database name '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: &'static str },

    #[error("failed to connect to PostgreSQL server at {target}: {source}")]
    Connection {
        target: String,
        #[source]
        source: DriverError,
    },

    #[error("failed to create user '{username}': {source}")]
    CreateUser {
        username: String,
        #[source]
        source: DriverError,
    },

    #[error("failed to create database '{db_name}': {source}")]
    CreateDatabase {
        db_name: String,
        #[source]
        source: DriverError,
    },

    #[error("failed to drop database '{db_name}': {source}")]
    Delete {
        db_name: String,
        #[source]
        source: DriverError,
    },

    #[error("failed to drop owner role '{username}' of database '{db_name}': {source}")]
    DropOwner {
        db_name: String,
        username: String,
        #[source]
        source: DriverError,
    },

    #[error("failed to look up database '{db_name}': {source}")]
    Lookup {
        db_name: String,
        #[source]
        source: DriverError,
    },

    #[error("database '{db_name}' does not exist: no rows in pg_catalog.pg_database")]
    NotFound { db_name: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read state file '{}': {source}", .path.display())]
    ReadState {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse state file '{}': {source}", .path.display())]
    ParseState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing master password: set `postgres.master_password` or the {0} environment variable")]
    MissingMasterPassword(&'static str),
}
