//! ECS resources made available to the slot systems.
//!
//! Overview
//! - `worldtime` – simulation time and delta, with time scaling
//! - `barconfig` – overlay display defaults loaded from an INI file
//! - `iconstore` – icon definitions keyed by string IDs

pub mod barconfig;
pub mod iconstore;
pub mod worldtime;
