//! # pizzeria-domain
//!
//! Pure domain model for the pizzeria catalogue service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Restaurants** (venues with a name and address)
//! - Define **Pizzas** (recipes with a name and an ingredient list)
//! - Define **RestaurantPizzas** (the priced offering linking a restaurant
//!   to a pizza — a proper association entity, not a bare link table)
//! - Contain all invariant enforcement (price bounds, non-empty text)
//! - Define the **response views**: the per-endpoint serialization shapes
//!   with their cycle-breaking relation exclusions
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;
pub mod view;
