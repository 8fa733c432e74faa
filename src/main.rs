// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::error::Error;
use std::process::exit;

use clap::Parser;
use env_logger::Env;
use log::debug;
use serde::Serialize;

use pgmulti::config::{read_config, read_state, Config};
use pgmulti::DatabaseManager;

use crate::cli::{BaseArgs, CliArgs, Command, StateArgs};

mod cli;

const LOG_LEVEL_ENV: &str = "PGMULTI_LOG_LEVEL";

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV, "warn")).init();

    let args: CliArgs = CliArgs::parse();
    debug!("CLI args: {:?}", args);

    if let Err(err) = run(args.command) {
        eprintln!("Error: {err}");
        exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Create(base) => {
            let (config, mut manager) = manager_for(&base)?;
            let resource = manager.create(&config.database.db_name)?;
            print_json(&resource)
        }
        Command::Read(state_args) => {
            let (_, manager) = manager_for(&state_args.base)?;
            let state = read_state(&state_args.state_path)?;
            print_json(&manager.read(&state)?)
        }
        Command::Update(state_args) => update(&state_args),
        Command::Delete(state_args) => {
            let (_, manager) = manager_for(&state_args.base)?;
            let state = read_state(&state_args.state_path)?;
            manager.delete(&state)?;
            println!("Successfully dropped database '{}'", state.db_name);
            Ok(())
        }
    }
}

fn update(state_args: &StateArgs) -> Result<(), Box<dyn Error>> {
    let (config, manager) = manager_for(&state_args.base)?;
    let state = read_state(&state_args.state_path)?;

    if state.requires_replacement(&config.database.db_name) {
        return Err(format!(
            "database name changed from '{}' to '{}': the resource must be replaced, not updated",
            state.db_name, config.database.db_name
        )
        .into());
    }

    print_json(&manager.update(state))
}

fn manager_for(base: &BaseArgs) -> Result<(Config, DatabaseManager), Box<dyn Error>> {
    let config = read_config(&base.config_path)?;
    let params = config.postgres.connection_params()?;
    let manager =
        DatabaseManager::for_server(params).with_owner_role_policy(config.database.owner_role_policy);

    Ok((config, manager))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
