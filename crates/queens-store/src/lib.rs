//! Persistent placement store for the N-Queens solver.
//!
//! Placements are kept in a JSON-lines file with one record per queen,
//! `{"id": .., "N": .., "row": .., "column": ..}`. Records sharing an `id`
//! form one placement. [`PlacementStore`] implements
//! [`queens_core::PlacementCache`], so callers can consult it before invoking
//! a solver.

mod error;
mod store;

pub use error::StoreError;
pub use store::{PlacementStore, StoredQueen, STORE_FILE_NAME};
