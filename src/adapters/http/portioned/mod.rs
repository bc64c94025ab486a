//! Portioned product and entry endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use routes::{entry_routes, product_routes};
