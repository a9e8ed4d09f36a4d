//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use rehome_core::Dog;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a dog record as a card.
pub fn dog_card(dog: &Dog) {
    println!("{}", dog.name.bold());
    field("Breed", &dog.breed);
    field("Age", &format!("{} years", dog.age));
    field("Location", &dog.zip_code);
    field("Photo", &dog.img);
    field("Id", dog.id.as_str());
}
