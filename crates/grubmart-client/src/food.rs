//! Menu endpoints: add, list, and remove food items

use crate::client::ApiClient;
use crate::error::ClientResult;
use grubmart_core::types::{Category, FoodId, FoodItem, PrepTime};
use reqwest::multipart::{Form, Part};
use serde_json::json;

/// Image payload attached to a new menu item
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Filename sent to the backend, which prefixes it with a timestamp
    pub filename: String,
    /// MIME type, e.g. `image/png`
    pub content_type: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

/// A fully validated menu item ready to submit
#[derive(Debug, Clone)]
pub struct NewFood {
    /// Product name
    pub name: String,
    /// Short description
    pub description: String,
    /// Price in KSH, positive
    pub price: i64,
    /// Menu category
    pub category: Category,
    /// Optional preparation time
    pub prep_time: Option<PrepTime>,
    /// Product image
    pub image: ImageUpload,
}

impl NewFood {
    fn into_form(self) -> ClientResult<Form> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("description", self.description)
            .text("price", self.price.to_string())
            .text("category", self.category.as_str());

        if let Some(prep_time) = self.prep_time {
            form = form.text("prepTime", prep_time.to_string());
        }

        let part = Part::bytes(self.image.bytes)
            .file_name(self.image.filename)
            .mime_str(&self.image.content_type)?;

        Ok(form.part("image", part))
    }
}

impl ApiClient {
    /// Submit a new menu item as a multipart form
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or
    /// a `success: false` envelope.
    pub async fn add_food(&self, food: NewFood) -> ClientResult<()> {
        let form = food.into_form()?;
        let envelope = self
            .post_multipart::<serde_json::Value>("/api/food/add", form)
            .await?;
        Self::into_ack(envelope)
    }

    /// Fetch the full menu
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or
    /// a `success: false` envelope.
    pub async fn list_food(&self) -> ClientResult<Vec<FoodItem>> {
        let envelope = self.get_envelope("/api/food/list").await?;
        Self::into_data(envelope)
    }

    /// Remove a menu item by identifier
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or
    /// a `success: false` envelope.
    pub async fn remove_food(&self, id: &FoodId) -> ClientResult<()> {
        let envelope = self
            .post_envelope::<_, serde_json::Value>("/api/food/remove", &json!({ "id": id }))
            .await?;
        Self::into_ack(envelope)
    }
}
