//! custom-collections: a growable array list and a fixed-bucket chained
//! hash map, each built by hand on top of primitive storage.
//!
//! Internal Design:
//!
//! Summary
//! - Two independent, single-threaded containers:
//!   - ArrayList<T>: boxed slot array plus a length. Doubling growth,
//!     explicit element shifting for positional insert/remove, and an
//!     in-place Lomuto quicksort.
//!   - ChainedHashMap<K, V, S>: sixteen buckets, each the head of a singly
//!     linked chain whose nodes live in a `SlotMap` arena; bucket index is
//!     the masked `u64` hash from `S: BuildHasher`.
//!
//! Constraints
//! - Single-threaded: no locking; mutation requires `&mut self`.
//! - ArrayList slots `[0, len)` are always occupied and `[len, capacity)`
//!   always vacant. Growth never happens on `remove`/`clear`, and `clear`
//!   keeps the storage.
//! - ChainedHashMap keys are unique per chain; the bucket count is fixed
//!   for the life of the map (no rehashing), so a key's bucket never moves.
//!
//! Error model
//! - Out-of-range positions on ArrayList return `Error::IndexOutOfBounds`
//!   carrying the index and the current length; the list is unchanged.
//! - Absent keys on ChainedHashMap are `None`, never an error.
//!
//! Reentrancy policy
//! - ChainedHashMap runs user `Hash`/`Eq` while walking chains. A
//!   debug-only guard panics if that code re-enters the same map. Removed
//!   keys and values are returned after the chain is relinked and the guard
//!   is released, so their `Drop` may touch the map.
//!
//! Notes and non-goals
//! - No iteration-order promise for the map; ArrayList iterates in index
//!   order.
//! - No resizing of the map's bucket table.
//! - Sorting is not stable and is quadratic on already-sorted input.

pub mod array_list;
mod array_list_proptest;
pub mod chained_hash_map;
mod chained_hash_map_proptest;
mod chain_walk;
mod error;

// Public surface
pub use array_list::ArrayList;
pub use chained_hash_map::ChainedHashMap;
pub use error::Error;
