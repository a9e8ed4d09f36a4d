//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use rehome_core::traits::AdoptionService;
use rehome_core::traits::Session;
use rehome_core::{Credentials, ServiceUrl};
use rehome_http::HttpService;

use crate::output;
use crate::session;

/// Default adoption service base URL.
pub const DEFAULT_SERVICE: &str = "https://frontend-take-home-service.fetch.com";

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Display name to register the session under
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Adoption service base URL
    #[arg(long, default_value = DEFAULT_SERVICE)]
    pub service: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let url = ServiceUrl::new(&args.service).context("Invalid service URL")?;
    let credentials = Credentials::new(&args.name, &args.email)?;

    eprintln!("{}", "Logging in...".dimmed());

    let service = HttpService::new(url.clone());
    let active = service.login(credentials).await.context("Login failed")?;

    // Save session
    session::save_session(&url, active.cookie())
        .await
        .context("Failed to save session")?;

    // Print success
    output::success("Logged in successfully");
    println!();
    output::field("Service", url.as_str());

    Ok(())
}
