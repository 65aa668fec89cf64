pub mod memory_sessions;
pub mod static_catalog;

pub use memory_sessions::InMemorySessionStore;
pub use static_catalog::StaticCatalog;
