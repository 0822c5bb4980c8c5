//! RestaurantPizza — the priced offering linking a restaurant to a pizza.
//!
//! Restaurant and Pizza are many-to-many through this association entity,
//! which carries its own attribute (`price`) beyond the two foreign keys.

use serde::{Deserialize, Serialize};

use crate::error::{PizzeriaError, ValidationError};
use crate::id::{PizzaId, RestaurantId, RestaurantPizzaId};

/// Lowest accepted offering price, inclusive.
pub const PRICE_MIN: i64 = 1;
/// Highest accepted offering price, inclusive.
pub const PRICE_MAX: i64 = 30;

/// Check a candidate price against the allowed range.
///
/// Shared by the request-validation layer and [`NewRestaurantPizza::validate`]
/// so both enforce the same bounds.
#[must_use]
pub fn price_in_range(price: i64) -> bool {
    (PRICE_MIN..=PRICE_MAX).contains(&price)
}

/// A priced offering as stored, with its database-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: RestaurantPizzaId,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
    pub price: i64,
}

/// Insertion payload for an offering; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewRestaurantPizza {
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
    pub price: i64,
}

impl NewRestaurantPizza {
    /// Create an insertion payload.
    #[must_use]
    pub fn new(restaurant_id: RestaurantId, pizza_id: PizzaId, price: i64) -> Self {
        Self {
            restaurant_id,
            pizza_id,
            price,
        }
    }

    /// Check domain invariants.
    ///
    /// The price is accepted or rejected unchanged — never coerced or
    /// rounded into range.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when `price` is outside
    /// `1..=30`.
    pub fn validate(&self) -> Result<(), PizzeriaError> {
        if !price_in_range(self.price) {
            return Err(ValidationError::PriceOutOfRange.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(price: i64) -> NewRestaurantPizza {
        NewRestaurantPizza::new(RestaurantId::from(1), PizzaId::from(1), price)
    }

    #[test]
    fn should_accept_boundary_prices() {
        assert!(payload(PRICE_MIN).validate().is_ok());
        assert!(payload(PRICE_MAX).validate().is_ok());
        assert!(payload(3).validate().is_ok());
    }

    #[test]
    fn should_reject_price_just_below_range() {
        assert!(matches!(
            payload(0).validate(),
            Err(PizzeriaError::Validation(
                ValidationError::PriceOutOfRange
            ))
        ));
    }

    #[test]
    fn should_reject_price_just_above_range() {
        assert!(matches!(
            payload(31).validate(),
            Err(PizzeriaError::Validation(
                ValidationError::PriceOutOfRange
            ))
        ));
    }

    #[test]
    fn should_reject_negative_price() {
        assert!(payload(-5).validate().is_err());
    }
}
