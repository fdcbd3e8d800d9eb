//! CLI argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

use urus_core::ResourceSchema;

use crate::commands;

/// CLI tool for the admin API.
#[derive(Parser, Debug)]
#[command(name = "urus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a page of a collection
    List(commands::list::ListArgs),

    /// Update one record's fields
    Update(commands::update::UpdateArgs),

    /// Delete one record
    Delete(commands::delete::DeleteArgs),
}

/// Connection settings shared by every command.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// API base URL
    #[arg(long, env = "URUS_API_BASE")]
    pub api_base: String,

    /// Bearer token for authentication
    #[arg(long, env = "URUS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Resource collection to operate on
    #[arg(long, value_enum)]
    pub resource: Resource,
}

/// The builtin admin collections.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Resource {
    Banner,
    Component,
    NewsEvent,
}

impl Resource {
    pub fn schema(self) -> ResourceSchema {
        match self {
            Resource::Banner => ResourceSchema::banner(),
            Resource::Component => ResourceSchema::component(),
            Resource::NewsEvent => ResourceSchema::news_event(),
        }
    }
}
