//! Trait seam between the domain logic and the service transport.

mod service;
mod session;

pub use service::AdoptionService;
pub use session::Session;
