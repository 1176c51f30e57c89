//! Database layer (in-process concurrent store).

pub mod memory;

pub use memory::MemoryDb;
