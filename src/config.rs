//! Tunables read by the containers at construction and growth time.
//!
//! These are compile-time constants rather than a mutable global store: the
//! containers only ever read them, and per-instance knobs (such as the map's
//! max load factor) have their own setters.

/// Capacity allocated by `Vector::new`.
pub const VECTOR_INIT_CAPACITY: usize = 2;

/// Multiplier applied to a full vector's capacity before appending.
pub const VECTOR_GROWTH_FACTOR: f64 = 2.0;

/// Bucket count allocated by `UnorderedMap::new`.
pub const MAP_INIT_BUCKET_COUNT: usize = 16;

/// Max load factor a freshly constructed map starts with.
pub const MAP_DEFAULT_MAX_LOAD_FACTOR: f64 = 1.0;

/// Multiplier applied to the bucket count when an insert would push the
/// load factor past the maximum.
pub const MAP_GROWTH_FACTOR: usize = 2;
