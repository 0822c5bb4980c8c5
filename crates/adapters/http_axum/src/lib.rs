//! # pizzeria-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API (`/restaurants`, `/pizzas`,
//!   `/restaurant_pizzas`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses; every failure
//!   becomes a JSON error envelope, never a framework default error page
//!
//! ## Dependency rule
//! Depends on `pizzeria-app` (for port traits and services) and
//! `pizzeria-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
