//! Core types and utilities for the GrubMart admin console
//!
//! Shared data model (food items, orders, the backend response envelope),
//! configuration loading, and the text helpers used by the add-item form.
//! This crate performs no I/O.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use types::{
    ApiResponse, Category, FoodId, FoodItem, Order, OrderAction, OrderId, OrderStatus, PrepTime,
    StatusUpdate,
};
