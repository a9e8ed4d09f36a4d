//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use rehome_core::traits::Session;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let active = session::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'rehome login' first.")?;

    output::field("Service", active.service().as_str());
    if let Ok(path) = session::session_path() {
        output::field("Session file", &path.display().to_string());
    }

    Ok(())
}
