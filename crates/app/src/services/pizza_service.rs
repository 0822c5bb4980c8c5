//! Pizza service — use-cases for listing and inspecting pizzas.

use pizzeria_domain::error::{NotFoundError, PizzeriaError};
use pizzeria_domain::id::PizzaId;
use pizzeria_domain::pizza::{NewPizza, Pizza};

use crate::ports::PizzaRepository;

/// Application service for pizza use-cases.
pub struct PizzaService<P> {
    pizzas: P,
}

impl<P: PizzaRepository> PizzaService<P> {
    /// Create a new service backed by the given repository.
    pub fn new(pizzas: P) -> Self {
        Self { pizzas }
    }

    /// Create a new pizza after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_pizza(&self, pizza: NewPizza) -> Result<Pizza, PizzeriaError> {
        pizza.validate()?;
        self.pizzas.create(pizza).await
    }

    /// List all pizzas in creation order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, PizzeriaError> {
        self.pizzas.get_all().await
    }

    /// Look up a pizza by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PizzeriaError::NotFound`] when no pizza with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_pizza(&self, id: PizzaId) -> Result<Pizza, PizzeriaError> {
        self.pizzas.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Pizza",
                id: id.to_string(),
            }
            .into()
        })
    }
}
