//! cursor-collections: sequence and hash containers with explicit,
//! runtime-validated cursors.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: three classic containers (a growable `Vector`, a sentinel-based
//!   `LinkedList`, a chained-bucket `UnorderedMap`) whose positions are
//!   first-class cursor values validated against their owner at each use,
//!   so misuse surfaces as a `ContainerError` instead of undefined
//!   behavior.
//! - Layers:
//!   - raw_buf::RawBuf<T>: owned buffer of possibly-uninitialized slots;
//!     the only module with raw-pointer code. `Vector` tracks the live
//!     prefix on top of it.
//!   - LinkedList<T> and UnorderedMap<K, V, S>: node containers over a
//!     generational `SlotMap` arena, so erased nodes invalidate their
//!     cursors detectably rather than dangling.
//!
//! Cursor model
//! - A cursor is a small Copy value (an index for `Vector`, an arena key
//!   for the node containers) resolved against a borrowed container at the
//!   point of use: `cursor.value(&list)`, `map.erase(cursor)`.
//! - The borrow checker rules out use-after-free; staleness (the position
//!   no longer existing) is caught at runtime via bounds or arena
//!   generations and reported as `ContainerError`.
//! - The half-open convention holds everywhere: `begin()` addresses the
//!   first element, `end()` the position one past the last, and `end()` is
//!   never dereferenceable.
//!
//! Error policy
//! - Fallible operations return `Result<_, ContainerError>`; nothing is
//!   recovered from internally. Checked access (`at`) coexists with
//!   unchecked indexing (`Index`, which panics) on `Vector`.
//! - Duplicate-key insertion into the map is a normal outcome, reported as
//!   `(existing_cursor, false)`, not an error.
//!
//! Notes and non-goals
//! - Single-threaded containers; share across threads by external
//!   synchronization if at all.
//! - Map iteration order is bucket index then insertion order, and is not
//!   meaningful across rehashes; `rehash` invalidates every map cursor.
//! - Node cursors survive unrelated mutation (list insert/erase elsewhere,
//!   map insert below the load factor); `Vector` cursors are positional
//!   and simply address whatever occupies the index.

mod config;
mod error;
pub mod linked_list;
mod raw_buf;
pub mod unordered_map;
pub mod vector;

mod linked_list_proptest;
mod unordered_map_proptest;
mod vector_proptest;

// Public surface
pub use config::{
    MAP_DEFAULT_MAX_LOAD_FACTOR, MAP_GROWTH_FACTOR, MAP_INIT_BUCKET_COUNT, VECTOR_GROWTH_FACTOR,
    VECTOR_INIT_CAPACITY,
};
pub use error::ContainerError;
pub use linked_list::{LinkedList, ListCursor};
pub use unordered_map::{MapCursor, UnorderedMap};
pub use vector::{VecCursor, Vector};
