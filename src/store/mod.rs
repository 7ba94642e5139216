//! Data store subsystem for orgdb
//!
//! Holds the canonical in-memory state of all four entity collections.
//!
//! # Design Principles
//!
//! - Identifier-keyed BTreeMaps: iteration order is deterministic
//! - Referential integrity is checked at insertion, never re-validated per query
//! - Records are immutable once inserted
//! - `reset` is the only destructive operation, an administrative one-shot
//!
//! # Invariants Enforced
//!
//! - Every employee's department reference resolves
//! - A manager reference, when present, resolves to an existing employee
//! - Assignment references resolve; the (employee, project) pair is unique

mod errors;
mod loader;
mod store;

pub use errors::{StoreError, StoreResult};
pub use loader::{load_dataset, Dataset};
pub use store::DataStore;
