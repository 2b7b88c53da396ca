//! In-memory project storage.

mod repository;

pub use repository::InMemoryProjectRepository;
