//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use rehome_core::traits::Session;
use rehome_core::{PageCursor, SearchQuery, Sort, SortDirection, SortField};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Breed filter; repeat the flag for multiple breeds
    #[arg(long = "breed")]
    pub breeds: Vec<String>,

    /// Minimum age in years
    #[arg(long)]
    pub age_min: Option<u8>,

    /// Maximum age in years
    #[arg(long)]
    pub age_max: Option<u8>,

    /// Postal code filter
    #[arg(long)]
    pub zip: Option<String>,

    /// Sort field (breed, name, age)
    #[arg(long, default_value = "breed")]
    pub sort: String,

    /// Sort direction (asc, desc)
    #[arg(long, default_value = "asc")]
    pub direction: String,

    /// Pagination cursor printed by a previous search
    #[arg(long)]
    pub from: Option<String>,

    /// Output records as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs) -> Result<()> {
    let active = session::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'rehome login' first.")?;

    let field: SortField = args.sort.parse()?;
    let direction: SortDirection = args.direction.parse()?;

    let query = SearchQuery {
        breeds: args.breeds,
        age_min: args.age_min,
        age_max: args.age_max,
        zip_code: args.zip,
        sort: Sort { field, direction },
        from: args.from.map(PageCursor::new),
    };

    let page = active.search(&query).await.context("Search failed")?;

    if page.is_empty() {
        eprintln!("{}", "No dogs found matching your criteria.".dimmed());
        return Ok(());
    }

    let dogs = active
        .dogs(&page.result_ids)
        .await
        .context("Failed to fetch dog records")?;

    if args.json {
        for dog in &dogs {
            output::json(dog)?;
        }
    } else {
        for dog in &dogs {
            output::dog_card(dog);
            println!();
        }
    }

    println!(
        "{}",
        format!("Showing {} of {} dogs", dogs.len(), page.total).dimmed()
    );

    if let Some(prev) = &page.prev {
        eprintln!("{}: {}", "Prev cursor".dimmed(), prev);
    }
    if let Some(next) = &page.next {
        eprintln!("{}: {}", "Next cursor".dimmed(), next);
    }

    Ok(())
}
