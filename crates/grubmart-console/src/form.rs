//! Add-item form state and validation

use crate::error::{ConsoleError, Result};
use crate::notify::Notification;
use grubmart_client::{ApiClient, ImageUpload, NewFood};
use grubmart_core::config::MenuConfig;
use grubmart_core::types::{Category, PrepTime};
use grubmart_core::utils::{clamp_words, digits_only, remaining_words};

/// How the preparation time is being entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrepTimeMode {
    /// A single number of minutes
    #[default]
    Absolute,
    /// A min-max range of minutes
    Range,
}

/// State of the add-item form
///
/// Field setters apply the same input constraints the form enforces while
/// typing: the description is clamped to the configured word limit and the
/// price and prep-time fields only accept digits. Validation happens again
/// on submit, before any network traffic.
#[derive(Debug)]
pub struct AddItemForm {
    max_description_words: usize,

    /// Product name
    pub name: String,

    /// Product description, clamped to the word limit
    pub description: String,

    /// Price input, digits only
    pub price: String,

    /// Selected category
    pub category: Option<Category>,

    prep_mode: PrepTimeMode,
    prep_minutes: String,
    prep_min: String,
    prep_max: String,

    /// Attached product image
    pub image: Option<ImageUpload>,

    submitting: bool,
    notices: Vec<Notification>,
}

impl AddItemForm {
    /// Create an empty form using the configured word limit
    #[must_use]
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            max_description_words: config.max_description_words,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: None,
            prep_mode: PrepTimeMode::default(),
            prep_minutes: String::new(),
            prep_min: String::new(),
            prep_max: String::new(),
            image: None,
            submitting: false,
            notices: Vec::new(),
        }
    }

    /// Set the product name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Set the description, clamped to the word limit
    pub fn set_description(&mut self, description: &str) {
        self.description = clamp_words(description, self.max_description_words);
    }

    /// Words still available in the description field
    #[must_use]
    pub fn remaining_words(&self) -> usize {
        remaining_words(&self.description, self.max_description_words)
    }

    /// Set the price, keeping digits only
    pub fn set_price(&mut self, price: &str) {
        self.price = digits_only(price);
    }

    /// Select a category
    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    /// Current prep-time entry mode
    #[must_use]
    pub const fn prep_mode(&self) -> PrepTimeMode {
        self.prep_mode
    }

    /// Switch prep-time entry mode, discarding any previously entered values
    pub fn set_prep_mode(&mut self, mode: PrepTimeMode) {
        if self.prep_mode != mode {
            self.prep_mode = mode;
            self.prep_minutes.clear();
            self.prep_min.clear();
            self.prep_max.clear();
        }
    }

    /// Set the absolute prep-time minutes, digits only
    pub fn set_prep_minutes(&mut self, minutes: &str) {
        self.prep_minutes = digits_only(minutes);
    }

    /// Set the range lower bound, digits only
    pub fn set_prep_range_min(&mut self, min: &str) {
        self.prep_min = digits_only(min);
    }

    /// Set the range upper bound, digits only
    pub fn set_prep_range_max(&mut self, max: &str) {
        self.prep_max = digits_only(max);
    }

    /// Attach a product image
    pub fn set_image(&mut self, image: ImageUpload) {
        self.image = Some(image);
    }

    /// Whether a submit is currently in flight
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
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

    fn prep_time(&self) -> Result<Option<PrepTime>> {
        match self.prep_mode {
            PrepTimeMode::Absolute => {
                if self.prep_minutes.is_empty() {
                    return Ok(None);
                }
                let minutes: u32 = self.prep_minutes.parse().map_err(|_| {
                    ConsoleError::validation("prepTime", "Please enter a valid prep time")
                })?;
                if minutes == 0 {
                    return Err(ConsoleError::validation(
                        "prepTime",
                        "Prep time must be greater than zero",
                    ));
                }
                Ok(Some(PrepTime::Minutes(minutes)))
            }
            PrepTimeMode::Range => {
                if self.prep_min.is_empty() && self.prep_max.is_empty() {
                    return Ok(None);
                }
                let parse = |value: &str| -> Result<u32> {
                    value.parse().map_err(|_| {
                        ConsoleError::validation("prepTime", "Please enter a valid prep time range")
                    })
                };
                let min = parse(&self.prep_min)?;
                let max = parse(&self.prep_max)?;
                if min >= max {
                    return Err(ConsoleError::validation(
                        "prepTime",
                        "Prep time range must increase",
                    ));
                }
                Ok(Some(PrepTime::Range { min, max }))
            }
        }
    }

    /// Validate the form and build the submission payload
    ///
    /// Checks run in display order: image, name, description, price,
    /// category, prep time. The first failure wins.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first invalid field.
    pub fn validate(&self) -> Result<NewFood> {
        let Some(image) = &self.image else {
            return Err(ConsoleError::validation(
                "image",
                "Please upload a product image",
            ));
        };

        if self.name.trim().is_empty() {
            return Err(ConsoleError::validation(
                "name",
                "Please enter a product name",
            ));
        }

        if self.description.trim().is_empty() {
            return Err(ConsoleError::validation(
                "description",
                "Please enter a product description",
            ));
        }

        let price: i64 = self.price.parse().map_err(|_| {
            ConsoleError::validation("price", "Please enter a valid price")
        })?;
        if price <= 0 {
            return Err(ConsoleError::validation(
                "price",
                "Price must be greater than zero",
            ));
        }

        let Some(category) = self.category else {
            return Err(ConsoleError::validation(
                "category",
                "Please select a category",
            ));
        };

        Ok(NewFood {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            category,
            prep_time: self.prep_time()?,
            image: image.clone(),
        })
    }

    /// Validate and submit the form
    ///
    /// Validation failures never reach the network. On success the form is
    /// reset for the next item; on failure all entered values are preserved.
    /// A second call while a submit is in flight is ignored.
    ///
    /// # Errors
    ///
    /// Returns the validation or client error; a matching error notice is
    /// recorded either way.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<()> {
        if self.submitting {
            return Ok(());
        }

        let food = match self.validate() {
            Ok(food) => food,
            Err(error) => {
                self.notices.push(Notification::error(error.to_string()));
                return Err(error);
            }
        };

        self.submitting = true;
        let result = client.add_food(food).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.reset();
                self.notices
                    .push(Notification::success("Product added successfully"));
                Ok(())
            }
            Err(error) => {
                self.notices.push(Notification::error(error.to_string()));
                Err(error.into())
            }
        }
    }

    /// Clear all fields back to the initial state
    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
        self.price.clear();
        self.category = None;
        self.prep_mode = PrepTimeMode::default();
        self.prep_minutes.clear();
        self.prep_min.clear();
        self.prep_max.clear();
        self.image = None;
    }
}
