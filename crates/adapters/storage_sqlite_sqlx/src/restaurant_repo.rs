//! `SQLite` implementation of [`RestaurantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pizzeria_app::ports::RestaurantRepository;
use pizzeria_domain::error::PizzeriaError;
use pizzeria_domain::id::RestaurantId;
use pizzeria_domain::restaurant::{NewRestaurant, Restaurant};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Restaurant`].
struct Wrapper(Restaurant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Restaurant> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let address: String = row.try_get("address")?;

        Ok(Self(Restaurant {
            id: RestaurantId::from(id),
            name,
            address,
        }))
    }
}

const INSERT: &str = "INSERT INTO restaurants (name, address) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM restaurants WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM restaurants ORDER BY id";
const DELETE_OFFERINGS: &str = "DELETE FROM restaurant_pizzas WHERE restaurant_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM restaurants WHERE id = ?";

/// `SQLite`-backed restaurant repository.
pub struct SqliteRestaurantRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantRepository for SqliteRestaurantRepository {
    fn create(
        &self,
        restaurant: NewRestaurant,
    ) -> impl Future<Output = Result<Restaurant, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&restaurant.name)
                .bind(&restaurant.address)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Restaurant {
                id: RestaurantId::from(result.last_insert_rowid()),
                name: restaurant.name,
                address: restaurant.address,
            })
        }
    }

    fn get_by_id(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<Option<Restaurant>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Restaurant>, PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(
        &self,
        id: RestaurantId,
    ) -> impl Future<Output = Result<(), PizzeriaError>> + Send {
        let pool = self.pool.clone();
        async move {
            // The offering rows and the restaurant row go together or not
            // at all.
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(DELETE_OFFERINGS)
                .bind(id.as_i64())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(())
        }
    }
}
