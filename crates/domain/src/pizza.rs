//! Pizza — a recipe with a free-form ingredient description.

use serde::{Deserialize, Serialize};

use crate::error::{PizzeriaError, ValidationError};
use crate::id::PizzaId;

/// A pizza as stored, with its database-assigned id.
///
/// This struct is the only serialized form of a pizza in any response:
/// `id`, `name`, `ingredients`. It never embeds restaurants or offerings,
/// which is what keeps the mutual references between record types from
/// cycling in a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
}

/// Insertion payload for a pizza; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

impl NewPizza {
    /// Create an insertion payload.
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when `name` or `ingredients`
    /// is empty.
    pub fn validate(&self) -> Result<(), PizzeriaError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        if self.ingredients.is_empty() {
            return Err(ValidationError::EmptyField("ingredients").into());
        }
        Ok(())
    }
}
