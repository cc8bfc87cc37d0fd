//! Key-value storage — the local-storage surface the rest of the app sits on.

mod libsql_backend;
mod memory;
mod traits;

pub use libsql_backend::LibSqlStorage;
pub use memory::MemoryStorage;
pub use traits::Storage;
