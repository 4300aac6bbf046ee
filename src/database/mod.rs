pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use store::{Document, DocumentStore};
