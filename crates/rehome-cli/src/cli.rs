//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{breeds, browse, login, logout, matchmake, search, whoami};

/// CLI for browsing and matching adoptable dogs.
#[derive(Parser, Debug)]
#[command(name = "rehome")]
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
    /// Create a session with the adoption service (login)
    Login(login::LoginArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// List the known breed names
    Breeds(breeds::BreedsArgs),

    /// Run a one-shot search against the dog catalog
    Search(search::SearchArgs),

    /// Submit favorite ids and display the matched dog
    Match(matchmake::MatchArgs),

    /// Interactively search, filter, favorite, and match
    Browse(browse::BrowseArgs),

    /// End the session
    Logout(logout::LogoutArgs),
}
