//! User-store access grant endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use routes::routes;
