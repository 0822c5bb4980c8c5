//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod pizzas;
#[allow(clippy::missing_errors_doc)]
pub mod restaurant_pizzas;
#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::{get, post};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<RR, PR, OR>() -> Router<AppState<RR, PR, OR>>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    Router::new()
        // Restaurants
        .route("/restaurants", get(restaurants::list::<RR, PR, OR>))
        .route(
            "/restaurants/{id}",
            get(restaurants::get::<RR, PR, OR>).delete(restaurants::delete::<RR, PR, OR>),
        )
        // Pizzas
        .route("/pizzas", get(pizzas::list::<RR, PR, OR>))
        .route("/pizzas/{id}", get(pizzas::get::<RR, PR, OR>))
        // Offerings
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizzas::create::<RR, PR, OR>),
        )
}
