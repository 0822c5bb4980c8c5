//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic
//! parameters (constructor injection), keeping this layer decoupled from
//! concrete adapters.

pub mod pizza_service;
pub mod restaurant_pizza_service;
pub mod restaurant_service;
