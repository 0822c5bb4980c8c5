//! Shared application state for axum handlers.

use std::sync::Arc;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<RR, PR, OR> {
    /// Restaurant use-cases (list, deep lookup, cascade delete).
    pub restaurant_service: Arc<RestaurantService<RR, OR>>,
    /// Pizza use-cases (list, lookup).
    pub pizza_service: Arc<PizzaService<PR>>,
    /// Offering creation use-case.
    pub restaurant_pizza_service: Arc<RestaurantPizzaService<OR>>,
}

impl<RR, PR, OR> Clone for AppState<RR, PR, OR> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
            pizza_service: Arc::clone(&self.pizza_service),
            restaurant_pizza_service: Arc::clone(&self.restaurant_pizza_service),
        }
    }
}

impl<RR, PR, OR> AppState<RR, PR, OR>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        restaurant_service: RestaurantService<RR, OR>,
        pizza_service: PizzaService<PR>,
        restaurant_pizza_service: RestaurantPizzaService<OR>,
    ) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
            pizza_service: Arc::new(pizza_service),
            restaurant_pizza_service: Arc::new(restaurant_pizza_service),
        }
    }
}
