//! rehome-http - reqwest-backed implementation of the adoption-service traits.

mod client;
mod endpoints;
mod service;
mod session;

pub use service::HttpService;
pub use session::HttpSession;
