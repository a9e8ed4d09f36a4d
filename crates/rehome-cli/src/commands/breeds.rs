//! Breeds command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use rehome_core::traits::Session;

use crate::session;

#[derive(Args, Debug)]
pub struct BreedsArgs {}

pub async fn run(_args: BreedsArgs) -> Result<()> {
    let active = session::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'rehome login' first.")?;

    let breeds = active.breeds().await.context("Failed to list breeds")?;

    if breeds.is_empty() {
        eprintln!("{}", "No breeds available.".dimmed());
        return Ok(());
    }

    for breed in &breeds {
        println!("{breed}");
    }

    Ok(())
}
