//! Match command implementation.

use anyhow::{Context, Result};
use clap::Args;

use rehome_core::traits::Session;
use rehome_core::DogId;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Favorite dog ids to choose from
    #[arg(required = true)]
    pub ids: Vec<String>,
}

pub async fn run(args: MatchArgs) -> Result<()> {
    let active = session::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'rehome login' first.")?;

    let favorites = args
        .ids
        .iter()
        .map(|id| DogId::new(id.as_str()))
        .collect::<rehome_core::Result<Vec<_>>>()?;

    let winner = active
        .find_match(&favorites)
        .await
        .context("Match request failed")?;

    // The winner always comes from the submitted candidate set, so its
    // record is among the favorites' records.
    let dogs = active
        .dogs(&favorites)
        .await
        .context("Failed to fetch dog records")?;

    output::success("Match found!");
    println!();

    match dogs.iter().find(|dog| dog.id == winner) {
        Some(dog) => output::dog_card(dog),
        None => output::field("Match", winner.as_str()),
    }

    Ok(())
}
