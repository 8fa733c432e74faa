use clap::{Parser, Subcommand};

/// pgmulti - Isolated PostgreSQL databases on a shared server.
///
/// Provisions databases with dedicated owner credentials on behalf of an infrastructure-as-code orchestrator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))] // Require at least one subcommand
#[command(propagate_version = true)] // Display version in subcommand help
pub(crate) struct CliArgs {
    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create a database owned by a freshly generated role.
    ///
    /// Prints the resulting resource state, including the generated owner credentials, as JSON.
    Create(BaseArgs),

    /// Refresh the state of a previously created database.
    ///
    /// Prints the refreshed state as JSON, or `null` if the database no longer exists.
    Read(StateArgs),

    /// Apply an in-place update; nothing about a database can change in place.
    ///
    /// Prints the unchanged state, or fails if the database name changed and a replacement is needed.
    Update(StateArgs),

    /// Drop a previously created database.
    ///
    /// The owner role is kept unless the configuration asks to drop it.
    Delete(StateArgs),
}

/// Base arguments for subcommands that share common parameters.
#[derive(Parser, Debug)]
pub(crate) struct BaseArgs {
    /// Path to the configuration file (default: pgmulti.yml).
    #[clap(short, long, default_value = "pgmulti.yml")]
    pub(crate) config_path: std::path::PathBuf,
}

/// Arguments for subcommands operating on existing state.
#[derive(Parser, Debug)]
pub(crate) struct StateArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,

    /// Path to the JSON state written by a previous `create`
    #[clap(short, long, default_value = "pgmulti.state.json")]
    pub(crate) state_path: std::path::PathBuf,
}
