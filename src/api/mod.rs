//! API layer: DTOs, handlers, extraction, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
