//! `SQLite` implementation of [`RestaurantPizzaRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pizzeria_app::ports::RestaurantPizzaRepository;
use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::id::{PizzaId, RestaurantId, RestaurantPizzaId};
use pizzeria_domain::pizza::Pizza;
use pizzeria_domain::restaurant_pizza::{NewRestaurantPizza, RestaurantPizza};
use pizzeria_domain::view::RestaurantPizzaDetail;

use crate::error::StorageError;

/// Wrapper for converting joined rows into [`RestaurantPizzaDetail`].
struct DetailWrapper(RestaurantPizzaDetail);

impl<'r> FromRow<'r, SqliteRow> for DetailWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let pizza_id = PizzaId::from(row.try_get::<i64, _>("pizza_id")?);
        let restaurant_pizza = RestaurantPizza {
            id: RestaurantPizzaId::from(row.try_get::<i64, _>("id")?),
            restaurant_id: RestaurantId::from(row.try_get::<i64, _>("restaurant_id")?),
            pizza_id,
            price: row.try_get("price")?,
        };
        let pizza = Pizza {
            id: pizza_id,
            name: row.try_get("pizza_name")?,
            ingredients: row.try_get("pizza_ingredients")?,
        };

        Ok(Self(RestaurantPizzaDetail {
            restaurant_pizza,
            pizza,
        }))
    }
}

const RESTAURANT_EXISTS: &str = "SELECT 1 FROM restaurants WHERE id = ?";
const INSERT: &str =
    "INSERT INTO restaurant_pizzas (restaurant_id, pizza_id, price) VALUES (?, ?, ?)";
const SELECT_FOR_RESTAURANT: &str = "\
SELECT rp.id, rp.restaurant_id, rp.pizza_id, rp.price, \
       p.name AS pizza_name, p.ingredients AS pizza_ingredients \
FROM restaurant_pizzas rp \
JOIN pizzas p ON p.id = rp.pizza_id \
WHERE rp.restaurant_id = ? \
ORDER BY rp.id";

/// `SQLite`-backed offering repository.
pub struct SqliteRestaurantPizzaRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantPizzaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantPizzaRepository for SqliteRestaurantPizzaRepository {
    fn create(
        &self,
        offering: NewRestaurantPizza,
    ) -> impl Future<Output = Result<RestaurantPizza, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            // Check the restaurant inside the transaction so the insert and
            // the referential check commit or roll back together.
            let restaurant_row = sqlx::query(RESTAURANT_EXISTS)
                .bind(offering.restaurant_id.as_i64())
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            if restaurant_row.is_none() {
                return Err(NotFoundError {
                    entity: "Restaurant",
                    id: offering.restaurant_id.to_string(),
                }
                .into());
            }

            let result = sqlx::query(INSERT)
                .bind(offering.restaurant_id.as_i64())
                .bind(offering.pizza_id.as_i64())
                .bind(offering.price)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(RestaurantPizza {
                id: RestaurantPizzaId::from(result.last_insert_rowid()),
                restaurant_id: offering.restaurant_id,
                pizza_id: offering.pizza_id,
                price: offering.price,
            })
        }
    }

    fn list_for_restaurant(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Vec<RestaurantPizzaDetail>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<DetailWrapper> = sqlx::query_as(SELECT_FOR_RESTAURANT)
                .bind(id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza_repo::SqlitePizzaRepository;
    use crate::pool::Config;
    use crate::restaurant_repo::SqliteRestaurantRepository;
    use pizzeria_app::ports::{PizzaRepository, RestaurantRepository};
    use pizzeria_domain::pizza::NewPizza;
    use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};

    struct Repos {
        pool: SqlitePool,
        restaurants: SqliteRestaurantRepository,
        pizzas: SqlitePizzaRepository,
        offerings: SqliteRestaurantPizzaRepository,
    }

    async fn setup() -> Repos {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();
        Repos {
            restaurants: SqliteRestaurantRepository::new(pool.clone()),
            pizzas: SqlitePizzaRepository::new(pool.clone()),
            offerings: SqliteRestaurantPizzaRepository::new(pool.clone()),
            pool,
        }
    }

    async fn seed(repos: &Repos) -> (Restaurant, Pizza) {
        let restaurant = repos
            .restaurants
            .create(NewRestaurant::new("Karen's Pizza Shack", "address1"))
            .await
            .unwrap();
        let pizza = repos
            .pizzas
            .create(NewPizza::new("Emma", "Dough, Tomato Sauce, Cheese"))
            .await
            .unwrap();
        (restaurant, pizza)
    }

    #[tokio::test]
    async fn should_create_offering_and_list_with_embedded_pizza() {
        let repos = setup().await;
        let (restaurant, pizza) = seed(&repos).await;

        let created = repos
            .offerings
            .create(NewRestaurantPizza::new(restaurant.id, pizza.id, 10))
            .await
            .unwrap();
        assert_eq!(created.price, 10);

        let listed = repos
            .offerings
            .list_for_restaurant(restaurant.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].restaurant_pizza.id, created.id);
        assert_eq!(listed[0].pizza.id, pizza.id);
        assert_eq!(listed[0].pizza.name, "Emma");
        assert_eq!(
            listed[0].pizza.ingredients,
            "Dough, Tomato Sauce, Cheese"
        );
    }

    #[tokio::test]
    async fn should_list_offerings_in_creation_order() {
        let repos = setup().await;
        let (restaurant, pizza) = seed(&repos).await;
        let other_pizza = repos
            .pizzas
            .create(NewPizza::new(
                "Geri",
                "Dough, Tomato Sauce, Cheese, Pepperoni",
            ))
            .await
            .unwrap();

        repos
            .offerings
            .create(NewRestaurantPizza::new(restaurant.id, pizza.id, 5))
            .await
            .unwrap();
        repos
            .offerings
            .create(NewRestaurantPizza::new(restaurant.id, other_pizza.id, 7))
            .await
            .unwrap();

        let listed = repos
            .offerings
            .list_for_restaurant(restaurant.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].restaurant_pizza.price, 5);
        assert_eq!(listed[1].restaurant_pizza.price, 7);
    }

    #[tokio::test]
    async fn should_roll_back_insert_when_restaurant_missing() {
        let repos = setup().await;
        let (_, pizza) = seed(&repos).await;

        let result = repos
            .offerings
            .create(NewRestaurantPizza::new(RestaurantId::from(0), pizza.id, 10))
            .await;
        assert!(matches!(result, Err(PizzeriaError::NotFound(_))));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
            .fetch_one(&repos.pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn should_fail_with_storage_error_when_pizza_missing() {
        let repos = setup().await;
        let (restaurant, _) = seed(&repos).await;

        let result = repos
            .offerings
            .create(NewRestaurantPizza::new(
                restaurant.id,
                PizzaId::from(999),
                10,
            ))
            .await;
        assert!(matches!(result, Err(PizzeriaError::Storage(_))));
    }

    #[tokio::test]
    async fn should_return_empty_list_for_restaurant_without_offerings() {
        let repos = setup().await;
        let (restaurant, _) = seed(&repos).await;

        let listed = repos
            .offerings
            .list_for_restaurant(restaurant.id)
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}
