//! JSON REST handler for creating restaurant-pizza offerings.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::error::{PizzeriaError, ValidationError};
use pizzeria_domain::id::{PizzaId, RestaurantId};
use pizzeria_domain::restaurant_pizza::{self, NewRestaurantPizza};
use pizzeria_domain::view::RestaurantPizzaCreated;

use crate::error::WriteError;
use crate::state::AppState;

/// Request body for creating an offering.
///
/// Every field is required; options are used so absence maps onto the
/// `Missing data` envelope instead of a serde-level rejection.
#[derive(Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    pub restaurant_id: Option<i64>,
    pub pizza_id: Option<i64>,
    pub price: Option<i64>,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<RestaurantPizzaCreated>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /restaurant_pizzas`
pub async fn create<RR, PR, OR>(
    State(state): State<AppState<RR, PR, OR>>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<CreateResponse, WriteError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    // A body that is not a JSON object gets the same envelope as absent
    // fields.
    let Ok(Json(req)) = payload else {
        return Err(WriteError::from(PizzeriaError::Validation(
            ValidationError::MissingData,
        )));
    };
    let (Some(restaurant_id), Some(pizza_id), Some(price)) =
        (req.restaurant_id, req.pizza_id, req.price)
    else {
        return Err(WriteError::from(PizzeriaError::Validation(
            ValidationError::MissingData,
        )));
    };

    // Request-level range check, ahead of the domain-level one that runs
    // inside the service.
    if !restaurant_pizza::price_in_range(price) {
        return Err(WriteError::from(PizzeriaError::Validation(
            ValidationError::PriceOutOfRange,
        )));
    }

    let offering = NewRestaurantPizza::new(
        RestaurantId::from(restaurant_id),
        PizzaId::from(pizza_id),
        price,
    );
    let created = state
        .restaurant_pizza_service
        .create_offering(offering)
        .await?;

    // Re-read the referenced records to embed them. A restaurant that no
    // longer resolves is reported as not found, never as a partial 201.
    let restaurant = state
        .restaurant_service
        .get_restaurant(created.restaurant_id)
        .await?;
    let pizza = state.pizza_service.get_pizza(created.pizza_id).await?;

    Ok(CreateResponse::Created(Json(RestaurantPizzaCreated {
        restaurant_pizza: created,
        pizza,
        restaurant,
    })))
}
