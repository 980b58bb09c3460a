//! Menu list view with remove flow

use crate::error::Result;
use crate::notify::Notification;
use grubmart_client::ApiClient;
use grubmart_core::types::{FoodId, FoodItem};
use tracing::debug;

/// Refreshable copy of the backend menu
#[derive(Debug, Default)]
pub struct MenuView {
    /// Current menu items, in backend order
    pub items: Vec<FoodItem>,

    /// Whether a refresh is in flight
    pub loading: bool,

    deleting: Option<FoodId>,
    notices: Vec<Notification>,
}

impl MenuView {
    /// Create an empty view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the item whose removal is in flight, if any
    #[must_use]
    pub fn deleting(&self) -> Option<&FoodId> {
        self.deleting.as_ref()
    }

    /// Notifications emitted so far, newest last
    #[must_use]
    pub fn notices(&self) -> &[Notification] {
        &self.notices
    }

    /// Drain accumulated notifications
    pub fn take_notices(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notices)
    }

    /// Replace the item list from a fresh fetch
    pub fn apply_snapshot(&mut self, items: Vec<FoodItem>) {
        debug!(count = items.len(), "menu snapshot applied");
        self.items = items;
    }

    /// Fetch the menu and replace the local copy
    ///
    /// On failure the current items are kept and an error notice is
    /// recorded.
    ///
    /// # Errors
    ///
    /// Returns the client error that aborted the refresh.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<()> {
        self.loading = true;
        let result = client.list_food().await;
        self.loading = false;

        match result {
            Ok(items) => {
                self.apply_snapshot(items);
                Ok(())
            }
            Err(error) => {
                self.notices.push(Notification::error(error.to_string()));
                Err(error.into())
            }
        }
    }

    /// Remove an item, keeping the list unchanged until the backend confirms
    ///
    /// At most one removal runs at a time; a request for another item while
    /// one is in flight is ignored.
    ///
    /// # Errors
    ///
    /// Returns the client error if the backend rejects the removal.
    pub async fn delete(&mut self, client: &ApiClient, id: &FoodId) -> Result<()> {
        if self.deleting.is_some() {
            debug!(%id, "removal already in flight, ignoring");
            return Ok(());
        }

        self.deleting = Some(id.clone());
        let result = client.remove_food(id).await;
        self.deleting = None;

        match result {
            Ok(()) => {
                self.items.retain(|item| &item.id != id);
                self.notices
                    .push(Notification::success("Product removed successfully"));
                Ok(())
            }
            Err(error) => {
                self.notices.push(Notification::error(error.to_string()));
                Err(error.into())
            }
        }
    }
}
