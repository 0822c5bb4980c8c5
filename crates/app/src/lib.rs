//! # pizzeria-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven ports):
//!   - `RestaurantRepository` — insert, lookups, cascading delete
//!   - `PizzaRepository` — insert and lookups
//!   - `RestaurantPizzaRepository` — transactional insert, per-restaurant listing
//! - Define use-case services (driving ports):
//!   - `RestaurantService` — list (shallow), deep lookup, cascade delete
//!   - `PizzaService` — list, lookup
//!   - `RestaurantPizzaService` — validated offering creation
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `pizzeria-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
