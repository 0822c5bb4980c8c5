//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use pizzeria_app::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API at the root and includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<RR, PR, OR>(state: AppState<RR, PR, OR>) -> Router
where
    RR: RestaurantRepository + Send + Sync + 'static,
    PR: PizzaRepository + Send + Sync + 'static,
    OR: RestaurantPizzaRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use pizzeria_app::services::pizza_service::PizzaService;
    use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
    use pizzeria_app::services::restaurant_service::RestaurantService;
    use pizzeria_domain::error::PizzeriaError;
    use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
    use pizzeria_domain::pizza::{NewPizza, Pizza};
    use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};
    use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};
    use pizzeria_domain::view::RestaurantPizzaDetail;
    use tower::ServiceExt;

    struct StubRestaurantRepo;
    struct StubPizzaRepo;
    struct StubOfferingRepo;

    impl RestaurantRepository for StubRestaurantRepo {
        async fn create(&self, _restaurant: NewRestaurant) -> Result<Restaurant, PizzeriaError> {
            Ok(Restaurant {
                id: RestaurantId::from(1),
                name: "Karen's Pizza Shack".to_string(),
                address: "address1".to_string(),
            })
        }
        async fn get_by_id(&self, _id: RestaurantId) -> Result<Option<Restaurant>, PizzeriaError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Restaurant>, PizzeriaError> {
            Ok(vec![])
        }
        async fn delete(&self, _id: RestaurantId) -> Result<(), PizzeriaError> {
            Ok(())
        }
    }

    impl PizzaRepository for StubPizzaRepo {
        async fn create(&self, _pizza: NewPizza) -> Result<Pizza, PizzeriaError> {
            Ok(Pizza {
                id: PizzaId::from(1),
                name: "Emma".to_string(),
                ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
            })
        }
        async fn get_by_id(&self, _id: PizzaId) -> Result<Option<Pizza>, PizzeriaError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Pizza>, PizzeriaError> {
            Ok(vec![])
        }
    }

    impl RestaurantPizzaRepository for StubOfferingRepo {
        async fn create(
            &self,
            offering: NewRestaurantPizza,
        ) -> Result<RestaurantPizza, PizzeriaError> {
            Ok(RestaurantPizza {
                id: RestaurantPizzaId::from(1),
                restaurant_id: offering.restaurant_id,
                pizza_id: offering.pizza_id,
                price: offering.price,
            })
        }
        async fn list_for_restaurant(
            &self,
            _id: RestaurantId,
        ) -> Result<Vec<RestaurantPizzaDetail>, PizzeriaError> {
            Ok(vec![])
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            RestaurantService::new(StubRestaurantRepo, StubOfferingRepo),
            PizzaService::new(StubPizzaRepo),
            RestaurantPizzaService::new(StubOfferingRepo),
        ))
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_restaurants() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/restaurants")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_json_envelope_when_restaurant_missing() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/restaurants/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["error"],
            "Restaurant not found"
        );
    }

    #[tokio::test]
    async fn should_return_json_envelope_when_path_id_is_not_numeric() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/restaurants/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["error"],
            "Restaurant not found"
        );
    }

    #[tokio::test]
    async fn should_return_missing_data_when_offering_field_absent() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/restaurant_pizzas")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"restaurant_id":1,"pizza_id":1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Missing data");
    }

    #[tokio::test]
    async fn should_return_errors_array_when_offering_price_out_of_range() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/restaurant_pizzas")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"restaurant_id":1,"pizza_id":1,"price":40}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["errors"],
            serde_json::json!(["Price must be between 1 and 30"])
        );
    }
}
