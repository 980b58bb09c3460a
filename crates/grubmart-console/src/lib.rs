//! Vendor admin console for the GrubMart backend
//!
//! View-model layer over the REST client: a menu view with add and remove
//! flows, active and completed order views with the vendor workflow
//! (accept, reject, complete), and a background poller that refreshes the
//! order views on an interval. Rendering is plain text so the views stay
//! testable without a terminal.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]

pub mod error;
pub mod form;
pub mod history;
pub mod menu;
pub mod notify;
pub mod orders;
pub mod poller;
pub mod render;

// Re-export commonly used types
pub use error::{ConsoleError, Result};
pub use form::{AddItemForm, PrepTimeMode};
pub use history::CompletedOrdersView;
pub use menu::MenuView;
pub use notify::{NoticeLevel, Notification};
pub use orders::ActiveOrdersView;
pub use poller::OrderPoller;
