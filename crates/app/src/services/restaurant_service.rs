//! Restaurant service — use-cases for listing, inspecting, and removing
//! restaurants.

use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
use pizzeria_domain::view::RestaurantDetail;

use crate::ports::{RestaurantPizzaRepository, RestaurantRepository};

/// Application service for restaurant use-cases.
///
/// Holds the restaurant repository and the offering repository: the deep
/// view joins a restaurant with its offerings, so both ports are needed.
pub struct RestaurantService<R, O> {
    restaurants: R,
    offerings: O,
}

impl<R: RestaurantRepository, O: RestaurantPizzaRepository> RestaurantService<R, O> {
    /// Create a new service backed by the given repositories.
    pub fn new(restaurants: R, offerings: O) -> Self {
        Self {
            restaurants,
            offerings,
        }
    }

    /// Create a new restaurant after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_restaurant(
        &self,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant, PizzeriaError> {
        restaurant.validate()?;
        self.restaurants.create(restaurant).await
    }

    /// List all restaurants in creation order, as shallow records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, PizzeriaError> {
        self.restaurants.get_all().await
    }

    /// Look up a restaurant by id and assemble its deep view: the offering
    /// list with embedded pizzas, plus the derived pizza collection.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no restaurant with `id`
    /// exists, or a storage error from the repositories.
    pub async fn get_restaurant(&self, id: RestaurantId) -> Result<RestaurantDetail, PizzeriaError> {
        let restaurant = self.restaurants.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Restaurant",
                id: id.to_string(),
            }
        })?;
        let offerings = self.offerings.list_for_restaurant(id).await?;
        Ok(RestaurantDetail::assemble(restaurant, offerings))
    }

    /// Delete a restaurant and its offerings.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no restaurant with `id`
    /// exists, or a storage error from the repository.
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<(), PizzeriaError> {
        if self.restaurants.get_by_id(id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Restaurant",
                id: id.to_string(),
            }
            .into());
        }
        tracing::debug!(%id, "deleting restaurant and its offerings");
        self.restaurants.delete(id).await
    }
}
