//! JSON REST handlers for pizzas.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::id::PizzaId;
use pizzeria_domain::pizza::Pizza;

use crate::error::ApiError;
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<PizzaId, ApiError> {
    PizzaId::from_str(raw).map_err(|_| {
        ApiError::from(PizzeriaError::NotFound(NotFoundError {
            entity: "Pizza",
            id: raw.to_string(),
        }))
    })
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Pizza>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Pizza>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /pizzas`
pub async fn list<RR, PR, OR>(
    State(state): State<AppState<RR, PR, OR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let pizzas = state.pizza_service.list_pizzas().await?;
    Ok(ListResponse::Ok(Json(pizzas)))
}

/// `GET /pizzas/:id`
pub async fn get<RR, PR, OR>(
    State(state): State<AppState<RR, PR, OR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let pizza_id = parse_id(&id)?;
    let pizza = state.pizza_service.get_pizza(pizza_id).await?;
    Ok(GetResponse::Ok(Json(pizza)))
}
