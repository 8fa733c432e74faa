// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;
use serde::Deserialize;
use std::{env, fs, path::Path};

use crate::database::ConnectionParams;
use crate::error::ConfigError;
use crate::resource::{DatabaseResource, OwnerRolePolicy};

pub const MASTER_PASSWORD_ENV: &str = "PGMULTI_MASTER_PASSWORD";

/// Desired state of one database resource.
#[derive(Deserialize, Debug)]
pub struct Config {
    pub postgres: PostgresConfig,
    pub database: DatabaseConfig,
}

#[derive(Clone, Deserialize)]
pub struct PostgresConfig {
    pub hostname: String,
    pub port: u16,
    pub master_username: String,
    pub master_password: Option<String>,
}

impl std::fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("master_username", &self.master_username)
            .field(
                "master_password",
                &self.master_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct DatabaseConfig {
    pub db_name: String,
    #[serde(default)]
    pub owner_role_policy: OwnerRolePolicy,
}

impl PostgresConfig {
    /// Falls back to `PGMULTI_MASTER_PASSWORD` when the file has no password.
    pub fn connection_params(&self) -> Result<ConnectionParams, ConfigError> {
        let password = match &self.master_password {
            Some(password) => password.clone(),
            None => env::var(MASTER_PASSWORD_ENV)
                .map_err(|_| ConfigError::MissingMasterPassword(MASTER_PASSWORD_ENV))?,
        };

        Ok(ConnectionParams::new(
            &self.hostname,
            self.port,
            &self.master_username,
            &password,
        ))
    }
}

pub fn read_config(config_path: &Path) -> Result<Config, ConfigError> {
    debug!("Reading config at: {}", config_path.display());

    let config_data = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;

    Ok(serde_yaml::from_str(&config_data)?)
}

/// Reads the state a previous `create` produced.
pub fn read_state(state_path: &Path) -> Result<DatabaseResource, ConfigError> {
    debug!("Reading state at: {}", state_path.display());

    let state_data = fs::read_to_string(state_path).map_err(|source| ConfigError::ReadState {
        path: state_path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&state_data).map_err(|source| ConfigError::ParseState {
        path: state_path.to_path_buf(),
        source,
    })
}
