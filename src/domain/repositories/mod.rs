//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; concrete implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated via `mockall`
//! for service-level tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
