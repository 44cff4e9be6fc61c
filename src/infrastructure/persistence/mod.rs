//! Concrete repository implementations.
//!
//! Two backends satisfy [`crate::domain::repositories::LinkRepository`]:
//!
//! - [`MemoryLinkRepository`] - lock-guarded in-process map, selected when no
//!   database is configured
//! - [`PgLinkRepository`] - PostgreSQL via SQLx, transactional writes

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
