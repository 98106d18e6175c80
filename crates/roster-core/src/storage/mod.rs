//! Storage abstraction and backends.
//!
//! - **traits**: the `KeyValueStorage` slot interface
//! - **memory**: `HashMap`-backed fake for tests and embedding
//! - **file**: one JSON file per slot under a data directory

mod file;
mod memory;
pub mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;
