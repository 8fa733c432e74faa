#![allow(dead_code)]

use std::env::temp_dir;
use std::fs::File;
use std::io::Write;

use pgmulti::ConnectionParams;
use postgres::{Client, NoTls};
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::runners::SyncRunner;
use testcontainers_modules::testcontainers::{Container, ImageExt};

pub(crate) const MASTER_USERNAME: &str = "root";
pub(crate) const MASTER_PASSWORD: &str = "12345";

/// Debian based image; it ships the `en_US.utf8` locale new databases use.
pub(crate) fn postgres_container() -> Container<Postgres> {
    Postgres::default()
        .with_tag("16")
        .with_env_var("POSTGRES_USER", MASTER_USERNAME)
        .with_env_var("POSTGRES_PASSWORD", MASTER_PASSWORD)
        .with_env_var("POSTGRES_DB", "postgres")
        .start()
        .expect("Failed to launch PostgreSQL database")
}

pub(crate) fn host_port(container: &Container<Postgres>) -> u16 {
    container
        .get_host_port_ipv4(5432)
        .expect("Failed to read PostgreSQL port")
}

pub(crate) fn admin_params(container: &Container<Postgres>) -> ConnectionParams {
    ConnectionParams::new(
        "127.0.0.1",
        host_port(container),
        MASTER_USERNAME,
        MASTER_PASSWORD,
    )
}

pub(crate) fn connect(port: u16, database: &str, user: &str, password: &str) -> Client {
    Client::connect(
        format!("host=127.0.0.1 port={port} dbname={database} user={user} password={password}")
            .as_str(),
        NoTls,
    )
    .expect("Failed to build PostgreSQL connection")
}

pub(crate) fn admin_client(container: &Container<Postgres>) -> Client {
    connect(
        host_port(container),
        "postgres",
        MASTER_USERNAME,
        MASTER_PASSWORD,
    )
}

pub(crate) fn database_exists(admin: &mut Client, db_name: &str) -> bool {
    admin
        .query_opt(
            "SELECT oid FROM pg_catalog.pg_database WHERE datname = $1",
            &[&db_name],
        )
        .expect("Failed to query pg_database")
        .is_some()
}

pub(crate) fn role_exists(admin: &mut Client, role: &str) -> bool {
    admin
        .query_opt(
            "SELECT oid FROM pg_catalog.pg_roles WHERE rolname = $1",
            &[&role],
        )
        .expect("Failed to query pg_roles")
        .is_some()
}

pub(crate) fn write_string_to_tempfile(content: &str) -> String {
    let mut dir = temp_dir();
    let filename = format!("temp_file_{}", rand::random::<u64>());

    dir.push(filename);

    let mut file = File::create(dir.clone()).expect("Failed to create tmp file");

    file.write_all(content.as_bytes())
        .expect("Failed to write into tmp file");

    dir.to_string_lossy().to_string()
}
