//! Typed envelope bodies.
//!
//! Field names follow the server's camelCase wire convention via serde
//! renames; the Rust structs stay snake_case.

mod handshake;
mod request;

pub use handshake::{Challenge, Hello, Identify};
pub use request::{Request, RequestResponse, RequestStatus};
