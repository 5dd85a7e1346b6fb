//! Vidport Media Store
//!
//! Sole owner of the persisted media collection: a UTF-8 JSON array of
//! records, re-read on every operation and rewritten wholesale on every
//! mutation. Writes go through an atomic temp-file-then-rename protocol and
//! a per-store write lock, so a failed write leaves the previous file
//! intact. Cross-process writers remain uncoordinated.

mod error;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::MediaStore;
