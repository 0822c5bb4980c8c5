//! Storage port — repository traits for persistence.

use std::future::Future;

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::{PizzaId, RestaurantId};
use pizzeria_domain::pizza::{NewPizza, Pizza};
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};
use pizzeria_domain::view::RestaurantPizzaDetail;

/// Persistence operations for restaurants.
pub trait RestaurantRepository {
    /// Insert a new restaurant and return it with its assigned id.
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send;

    /// Fetch a restaurant by id.
    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send;

    /// Fetch all restaurants in creation order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send;

    /// Delete a restaurant together with its offerings.
    ///
    /// Both deletions happen in one transaction; no orphaned offering row
    /// may survive the restaurant it references.
    fn delete(&self, id: RestaurantId)
    -> impl Future<Output = Result<(), PizzeriaError>> + Send;
}

/// Persistence operations for pizzas.
pub trait PizzaRepository {
    /// Insert a new pizza and return it with its assigned id.
    fn create(&self, pizza: NewPizza)
    -> impl Future<Output = Result<Pizza, PizzeriaError>> + Send;

    /// Fetch a pizza by id.
    fn get_by_id(
        &self,
        id: PizzaId,
    ) -> impl Future<Output = Result<Option<Pizza>, PizzeriaError>> + Send;

    /// Fetch all pizzas in creation order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pizza>, PizzeriaError>> + Send;
}

/// Persistence operations for restaurant-pizza offerings.
pub trait RestaurantPizzaRepository {
    /// Insert a new offering in a single transaction.
    ///
    /// The referenced restaurant is checked inside the same transaction;
    /// when it does not exist the insert is rolled back and
    /// [`PizzeriaError::NotFound`] is returned.
    fn create(
        &self,
        offering: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send;

    /// Fetch a restaurant's offerings with their pizzas embedded, in
    /// creation order.
    fn list_for_restaurant(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizzaDetail>, PizzeriaError>> + Send;
}
