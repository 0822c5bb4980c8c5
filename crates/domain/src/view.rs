//! Response views — the per-endpoint serialization shapes.
//!
//! Each (record, view) pair is its own serde struct, so the set of embedded
//! relations is fixed by the type rather than chosen at call sites. The
//! mutual references between [`Restaurant`], [`RestaurantPizza`], and
//! [`Pizza`] can never cycle in a response: an offering nested under a
//! restaurant embeds only its pizza, and a pizza never embeds anything.
//!
//! The shallow view of a restaurant is the [`Restaurant`] struct itself.

use serde::Serialize;

use crate::pizza::Pizza;
use crate::restaurant::Restaurant;
use crate::restaurant_pizza::RestaurantPizza;

/// An offering with its pizza embedded — the shape nested under a
/// restaurant's deep view. The parent restaurant is deliberately absent:
/// it is the enclosing context.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPizzaDetail {
    #[serde(flatten)]
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}

/// A restaurant with its offerings and derived pizza list — the deep view
/// served by the single-restaurant endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<RestaurantPizzaDetail>,
    pub pizzas: Vec<Pizza>,
}

impl RestaurantDetail {
    /// Assemble the deep view from a restaurant and its offerings.
    ///
    /// The `pizzas` collection is derived by walking the offerings and
    /// keeping the first occurrence of each pizza id, so a pizza offered
    /// at several prices still appears once.
    #[must_use]
    pub fn assemble(restaurant: Restaurant, restaurant_pizzas: Vec<RestaurantPizzaDetail>) -> Self {
        let mut pizzas: Vec<Pizza> = Vec::new();
        for detail in &restaurant_pizzas {
            if !pizzas.iter().any(|p| p.id == detail.pizza.id) {
                pizzas.push(detail.pizza.clone());
            }
        }
        Self {
            restaurant,
            restaurant_pizzas,
            pizzas,
        }
    }
}

/// The creation response for an offering: its fields plus the embedded
/// pizza and the full deep view of the restaurant it belongs to.
#[derive(Debug, Serialize)]
pub struct RestaurantPizzaCreated {
    #[serde(flatten)]
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
    pub restaurant: RestaurantDetail,
}
