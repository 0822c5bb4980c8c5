//! Restaurant-pizza service — validated creation of priced offerings.

use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};

use crate::ports::RestaurantPizzaRepository;

/// Application service for offering creation.
pub struct RestaurantPizzaService<O> {
    offerings: O,
}

impl<O: RestaurantPizzaRepository> RestaurantPizzaService<O> {
    /// Create a new service backed by the given repository.
    pub fn new(offerings: O) -> Self {
        Self { offerings }
    }

    /// Create a new offering after validating the price invariant.
    ///
    /// Validation runs here, before any storage call, so every code path
    /// that constructs an offering goes through the same price check.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] when the price is outside
    /// `1..=30`, [`PizzeriaError::NotFound`] when the referenced restaurant
    /// does not exist, or a storage error from the repository.
    pub async fn create_offering(
        &self,
        offering: NewRestaurantPizza,
    ) -> Result<RestaurantPizza, PizzeriaError> {
        offering.validate()?;
        tracing::debug!(
            restaurant_id = %offering.restaurant_id,
            pizza_id = %offering.pizza_id,
            price = offering.price,
            "creating offering"
        );
        self.offerings.create(offering).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_domain::error::ValidationError;
    use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
    use pizzeria_domain::pizza::Pizza;
    use pizzeria_domain::view::RestaurantPizzaDetail;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryOfferingRepo {
        store: Mutex<(i64, Vec<RestaurantPizza>)>,
    }

    impl RestaurantPizzaRepository for InMemoryOfferingRepo {
        fn create(
            &self,
            offering: NewRestaurantPizza,
        ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.0 += 1;
            let created = RestaurantPizza {
                id: RestaurantPizzaId::from(store.0),
                restaurant_id: offering.restaurant_id,
                pizza_id: offering.pizza_id,
                price: offering.price,
            };
            store.1.push(created.clone());
            async { Ok(created) }
        }

        fn list_for_restaurant(
            &self,
            id: RestaurantId,
        ) -> impl Future<Output = Result<Vec<RestaurantPizzaDetail>, PizzeriaError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<RestaurantPizzaDetail> = store
                .1
                .iter()
                .filter(|o| o.restaurant_id == id)
                .map(|o| RestaurantPizzaDetail {
                    restaurant_pizza: o.clone(),
                    pizza: Pizza {
                        id: o.pizza_id,
                        name: "Emma".to_string(),
                        ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
                    },
                })
                .collect();
            async { Ok(result) }
        }
    }

    fn make_service() -> RestaurantPizzaService<InMemoryOfferingRepo> {
        RestaurantPizzaService::new(InMemoryOfferingRepo::default())
    }

    fn payload(price: i64) -> NewRestaurantPizza {
        NewRestaurantPizza::new(RestaurantId::from(1), PizzaId::from(1), price)
    }

    #[tokio::test]
    async fn should_create_offering_when_price_in_range() {
        let svc = make_service();
        let created = svc.create_offering(payload(3)).await.unwrap();
        assert_eq!(created.price, 3);
        assert_eq!(created.restaurant_id, RestaurantId::from(1));
        assert_eq!(created.pizza_id, PizzaId::from(1));
    }

    #[tokio::test]
    async fn should_accept_boundary_prices() {
        let svc = make_service();
        assert!(svc.create_offering(payload(1)).await.is_ok());
        assert!(svc.create_offering(payload(30)).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_price_below_range_without_storing() {
        let svc = make_service();
        let result = svc.create_offering(payload(0)).await;
        assert!(matches!(
            result,
            Err(PizzeriaError::Validation(
                ValidationError::PriceOutOfRange
            ))
        ));
        assert!(svc.offerings.store.lock().unwrap().1.is_empty());
    }

    #[tokio::test]
    async fn should_reject_price_above_range_without_storing() {
        let svc = make_service();
        let result = svc.create_offering(payload(31)).await;
        assert!(matches!(
            result,
            Err(PizzeriaError::Validation(
                ValidationError::PriceOutOfRange
            ))
        ));
        assert!(svc.offerings.store.lock().unwrap().1.is_empty());
    }
}
