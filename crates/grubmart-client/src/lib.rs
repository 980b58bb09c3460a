//! Async REST client for the GrubMart backend
//!
//! Thin wrapper around the backend resource endpoints (`/api/food/*`,
//! `/api/orders/*`) exposing the uniform `{success, data|message}` envelope
//! as typed results. No retry, no caching; credentials travel as cookies.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]

pub mod client;
pub mod error;
pub mod food;
pub mod orders;

// Re-export commonly used types
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use food::{ImageUpload, NewFood};
