//! Storefront application layer: remote API client, auth form
//! controllers, profile view state, configuration and logging.

pub mod api;
pub mod auth;
pub mod config;
pub mod observability;
pub mod profile;
