//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use rehome_core::traits::Session;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    // Best-effort: the server call's outcome never blocks local cleanup.
    if let Some(active) = session::load_session()
        .await
        .context("Failed to load session")?
    {
        if let Err(error) = active.logout().await {
            tracing::warn!(%error, "logout request failed");
        }
    }

    session::clear_session()
        .await
        .context("Failed to clear session")?;

    output::success("Logged out");

    Ok(())
}
