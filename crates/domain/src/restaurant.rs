//! Restaurant — a venue that offers pizzas at venue-specific prices.

use serde::{Deserialize, Serialize};

use crate::error::{PizzeriaError, ValidationError};
use crate::id::RestaurantId;

/// A restaurant as stored, with its database-assigned id.
///
/// Serializing this struct directly yields the shallow view
/// (`id`, `name`, `address` — no relation collections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

/// Insertion payload for a restaurant; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    /// Create an insertion payload.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when `name` or `address` is
    /// empty.
    pub fn validate(&self) -> Result<(), PizzeriaError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        if self.address.is_empty() {
            return Err(ValidationError::EmptyField("address").into());
        }
        Ok(())
    }
}
