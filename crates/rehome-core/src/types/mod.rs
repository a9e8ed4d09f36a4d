//! Core domain types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod cursor;
mod dog_id;
mod service_url;

pub use cursor::PageCursor;
pub use dog_id::DogId;
pub use service_url::ServiceUrl;
