//! JSON REST handlers for restaurants.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::restaurant::Restaurant;
use pizzeria_domain::view::RestaurantDetail;

use crate::error::ApiError;
use crate::state::AppState;

/// Parse a path segment into a restaurant id.
///
/// A malformed id behaves like a missing restaurant, not a framework-level
/// rejection.
fn parse_id(raw: &str) -> Result<RestaurantId, ApiError> {
    RestaurantId::from_str(raw).map_err(|_| {
        ApiError::from(PizzeriaError::NotFound(NotFoundError {
            entity: "Restaurant",
            id: raw.to_string(),
        }))
    })
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// Shallow views only — no relation collections.
    Ok(Json<Vec<Restaurant>>),
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
    Ok(Json<RestaurantDetail>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /restaurants`
pub async fn list<RR, PR, OR>(
    State(state): State<AppState<RR, PR, OR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurants = state.restaurant_service.list_restaurants().await?;
    Ok(ListResponse::Ok(Json(restaurants)))
}

/// `GET /restaurants/:id`
pub async fn get<RR, PR, OR>(
    State(state): State<AppState<RR, PR, OR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    let detail = state.restaurant_service.get_restaurant(restaurant_id).await?;
    Ok(GetResponse::Ok(Json(detail)))
}

/// `DELETE /restaurants/:id`
pub async fn delete<RR, PR, OR>(
    State(state): State<AppState<RR, PR, OR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    let restaurant_id = parse_id(&id)?;
    state
        .restaurant_service
        .delete_restaurant(restaurant_id)
        .await?;
    Ok(DeleteResponse::NoContent)
}
