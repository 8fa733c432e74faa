// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

//! Provisioning of isolated PostgreSQL databases, each owned by a dedicated
//! generated role, on a shared server.

pub mod config;
pub mod credentials;
pub mod database;
pub mod error;
pub mod identifier;
pub mod lifecycle;
pub mod resource;

pub use credentials::{CredentialGenerator, Credentials};
pub use database::{AdminConnection, ConnectionParams, Connector, PostgresConnector};
pub use error::{ConfigError, LifecycleError};
pub use lifecycle::{get_oid, DatabaseManager};
pub use resource::{DatabaseResource, OwnerRolePolicy};
