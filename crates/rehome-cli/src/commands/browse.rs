//! Interactive browse command implementation.
//!
//! Drives a [`Browser`] from line commands: the search-and-favorites view
//! of the adoption flow, adapted to a terminal. Filter changes never query
//! the service by themselves; an explicit `search` applies them.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::io::AsyncBufReadExt;

use rehome_core::traits::Session;
use rehome_core::{Browser, Error, MatchOutcome, Sort};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct BrowseArgs {}

pub async fn run(_args: BrowseArgs) -> Result<()> {
    let active = session::load_session()
        .await
        .context("Failed to load session")?
        .context("No active session. Run 'rehome login' first.")?;

    let mut browser = Browser::new(active);

    // Breed catalog load is soft; browsing works without it
    browser.load_breeds().await;

    eprintln!("{}", "Type 'help' for commands.".dimmed());
    eprintln!();

    match browser.search().await {
        Ok(()) => render(&browser),
        Err(error) => output::error(&format!("Search failed: {error}")),
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("{} ", "rehome>".bold());
        use std::io::Write;
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["help"] => print_help(),
            ["show"] => render(&browser),

            ["search"] => match browser.search().await {
                Ok(()) => render(&browser),
                Err(error) => output::error(&format!("Search failed: {error}")),
            },
            ["next"] => match browser.next_page().await {
                Ok(true) => render(&browser),
                Ok(false) => eprintln!("{}", "No next page.".dimmed()),
                Err(error) => output::error(&format!("Search failed: {error}")),
            },
            ["prev"] => match browser.prev_page().await {
                Ok(true) => render(&browser),
                Ok(false) => eprintln!("{}", "No previous page.".dimmed()),
                Err(error) => output::error(&format!("Search failed: {error}")),
            },

            ["breeds"] => list_breeds(&browser, None),
            ["breeds", prefix] => list_breeds(&browser, Some(prefix)),
            ["breed"] => {
                let selected = &browser.filters().breeds;
                if selected.is_empty() {
                    eprintln!("{}", "No breed filter set.".dimmed());
                } else {
                    println!("{}", selected.join(", "));
                }
            }
            ["breed", rest @ ..] => {
                let name = rest.join(" ");
                let known = browser.breeds().is_empty()
                    || browser.breeds().iter().any(|b| b == &name);
                let added = browser.filters_mut().toggle_breed(&name);
                if added {
                    println!("Breed filter: added {name}");
                    if !known {
                        eprintln!("{}", "(not in the known breed catalog)".dimmed());
                    }
                } else {
                    println!("Breed filter: removed {name}");
                }
                filters_pending();
            }

            ["age", "clear"] => {
                let filters = browser.filters_mut();
                filters.age_min = None;
                filters.age_max = None;
                filters_pending();
            }
            ["age", min, max] => match (min.parse(), max.parse()) {
                (Ok(min), Ok(max)) => {
                    let filters = browser.filters_mut();
                    filters.age_min = Some(min);
                    filters.age_max = Some(max);
                    filters_pending();
                }
                _ => output::error("Ages must be whole numbers, e.g. 'age 2 7'"),
            },
            ["age", min] => match min.parse() {
                Ok(min) => {
                    browser.filters_mut().age_min = Some(min);
                    filters_pending();
                }
                Err(_) => output::error("Ages must be whole numbers, e.g. 'age 2'"),
            },

            ["zip", "clear"] => {
                browser.filters_mut().zip_code = None;
                filters_pending();
            }
            ["zip", code] => {
                browser.filters_mut().zip_code = Some((*code).to_string());
                filters_pending();
            }

            ["sort", field] => set_sort(&mut browser, field, None),
            ["sort", field, direction] => set_sort(&mut browser, field, Some(direction)),

            ["fav", index] => toggle_favorite(&mut browser, index),
            ["favs"] => list_favorites(&browser),

            ["match"] => run_match(&mut browser).await,

            ["logout"] => {
                browser.logout().await;
                session::clear_session()
                    .await
                    .context("Failed to clear session")?;
                output::success("Logged out");
                return Ok(());
            }
            ["quit"] | ["exit"] => break,

            _ => eprintln!("{}", "Unknown command; type 'help'.".dimmed()),
        }
    }

    Ok(())
}

/// Render the current page of dogs plus the result summary.
fn render<S: Session>(browser: &Browser<S>) {
    let Some(page) = browser.page() else {
        return;
    };

    if browser.dogs().is_empty() {
        println!("{}", "No dogs found matching your criteria.".dimmed());
        println!("{}", "Try adjusting your filters and search again.".dimmed());
        return;
    }

    for (index, dog) in browser.dogs().iter().enumerate() {
        let heart = if browser.favorites().contains(&dog.id) {
            "♥".red().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{:>2}. {} {} ({}, {} years, {})",
            index + 1,
            heart,
            dog.name.bold(),
            dog.breed,
            dog.age,
            dog.zip_code
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "Showing {} of {} dogs. {} favorites.",
            browser.dogs().len(),
            page.total,
            browser.favorites().len()
        )
        .dimmed()
    );
    if page.next.is_some() || page.prev.is_some() {
        println!("{}", "Use 'next' / 'prev' to page through results.".dimmed());
    }
}

fn list_breeds<S: Session>(browser: &Browser<S>, prefix: Option<&str>) {
    let mut shown = 0;
    for breed in browser.breeds() {
        if prefix.is_none_or(|p| breed.to_lowercase().starts_with(&p.to_lowercase())) {
            println!("{breed}");
            shown += 1;
        }
    }
    if shown == 0 {
        eprintln!("{}", "No breeds available.".dimmed());
    }
}

fn set_sort<S: Session>(browser: &mut Browser<S>, field: &str, direction: Option<&str>) {
    let parsed_field = match field.parse() {
        Ok(f) => f,
        Err(error) => return output::error(&format!("{error}")),
    };
    let parsed_direction = match direction {
        Some(d) => match d.parse() {
            Ok(d) => d,
            Err(error) => return output::error(&format!("{error}")),
        },
        None => browser.filters().sort.direction,
    };
    browser.filters_mut().sort = Sort {
        field: parsed_field,
        direction: parsed_direction,
    };
    filters_pending();
}

fn toggle_favorite<S: Session>(browser: &mut Browser<S>, index: &str) {
    let Ok(index) = index.parse::<usize>() else {
        return output::error("Use the number shown next to a dog, e.g. 'fav 3'");
    };
    let Some(dog) = browser.dogs().get(index.wrapping_sub(1)) else {
        return output::error("No dog with that number on the current page");
    };

    let (id, name) = (dog.id.clone(), dog.name.clone());
    if browser.toggle_favorite(id) {
        println!(
            "Added {} to favorites ({} total)",
            name.bold(),
            browser.favorites().len()
        );
    } else {
        println!(
            "Removed {} from favorites ({} total)",
            name.bold(),
            browser.favorites().len()
        );
    }
}

fn list_favorites<S: Session>(browser: &Browser<S>) {
    if browser.favorites().is_empty() {
        eprintln!("{}", "No favorites yet. Use 'fav <n>' to add some.".dimmed());
        return;
    }
    for id in browser.favorites().ids() {
        match browser.dogs().iter().find(|dog| dog.id == id) {
            Some(dog) => println!("{} ({})", dog.name, id),
            None => println!("{id}"),
        }
    }
}

async fn run_match<S: Session>(browser: &mut Browser<S>) {
    match browser.request_match().await {
        Ok(MatchOutcome::Found(dog)) => {
            println!();
            output::success("Your perfect match!");
            output::dog_card(&dog);
        }
        Ok(MatchOutcome::OffPage(id)) => {
            output::error(&format!(
                "Matched dog {id} is not on the current page; search again to view it"
            ));
        }
        Err(Error::InvalidInput(_)) => {
            output::error("No favorites yet. Use 'fav <n>' to add some first.");
        }
        Err(error) => output::error(&format!("Match failed: {error}")),
    }
}

fn filters_pending() {
    eprintln!("{}", "Filters updated. Run 'search' to apply.".dimmed());
}

fn print_help() {
    println!("Commands:");
    println!("  search                 run a search with the current filters");
    println!("  next / prev            page through the current results");
    println!("  show                   re-print the current page");
    println!("  breeds [prefix]        list known breed names");
    println!("  breed <name>           toggle a breed filter");
    println!("  age <min> [max]        set the age range; 'age clear' resets");
    println!("  zip <code>             set the postal code; 'zip clear' resets");
    println!("  sort <field> [dir]     breed/name/age, asc/desc");
    println!("  fav <n>                toggle favorite for dog number n");
    println!("  favs                   list favorites");
    println!("  match                  let the service pick from your favorites");
    println!("  logout                 end the session and exit");
    println!("  quit                   exit, keeping the session");
}
