//! Stagelink Authentication Primitives
//!
//! This crate derives the challenge-response token that proves knowledge of
//! the shared secret without transmitting it.
//!
//! # Design
//!
//! All functions in this crate are pure - they have no side effects and
//! produce deterministic outputs given the same inputs. The server-issued
//! salt and challenge are passed in by the caller, enabling:
//!
//! - Deterministic testing against pinned vectors
//! - Sans-IO architecture compatibility
//! - No coupling to transport or session state
//!
//! # Security Properties
//!
//! - The secret never leaves the process: only `SHA-256` digests of it travel
//!   on the wire, salted with per-session server nonces
//! - Tokens are single-session: a fresh challenge pair invalidates any
//!   previously derived token

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod token;

pub use token::{Secret, derive_auth_token, secret_hash};
