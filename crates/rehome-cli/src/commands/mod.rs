//! Subcommand implementations.

pub mod breeds;
pub mod browse;
pub mod login;
pub mod logout;
pub mod matchmake;
pub mod search;
pub mod whoami;

use anyhow::Result;

use crate::cli::Commands;

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args).await,
        Commands::Whoami(args) => whoami::run(args).await,
        Commands::Breeds(args) => breeds::run(args).await,
        Commands::Search(args) => search::run(args).await,
        Commands::Match(args) => matchmake::run(args).await,
        Commands::Browse(args) => browse::run(args).await,
        Commands::Logout(args) => logout::run(args).await,
    }
}
