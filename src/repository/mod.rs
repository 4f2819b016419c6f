//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
pub mod db;
mod memory_store;
mod local_store;
mod remote_store;
mod synced_store;

#[cfg(test)]
pub(crate) mod testing;

pub use traits::RecordStore;
pub use db::{init_db, DbState};
pub use memory_store::MemoryStore;
pub use local_store::{partition_key, LocalStore};
pub use remote_store::RemoteStore;
pub use synced_store::{ReadPolicy, SyncedStore};
