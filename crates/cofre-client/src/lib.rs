//! # Cofre Client
//!
//! Async client for the remote Vigenere cipher service the Cofre
//! application delegates classical-cipher requests to. The service is an
//! opaque external collaborator; this crate only implements its JSON wire
//! protocol and error mapping.

pub mod client;
pub mod config;
pub mod error;

pub use client::VigenereClient;
pub use config::Config;
pub use error::{ClientError, Result};
