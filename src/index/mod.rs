// =====================================================================
// File: index/mod.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
//! The `index` module contains the two-level parcel index: a fixed-size
//! hash table whose buckets each root a binary search tree ordered by
//! parcel weight.
//!
//! Structure:
//! - `hash.rs`  : djb2 country hash and the bucket count.
//! - `node.rs`  : Defines the [`ParcelNode`] structure.
//! - `tree.rs`  : Defines the [`BucketTree`] and its traversals
//!                (insert, in-order, filters, aggregates).
//! - `table.rs` : Defines the [`ParcelIndex`] and the per-country queries.
//! - `tests.rs` : Unit tests (compiled only in test mode).
//!
//! There is no delete operation and no rebalancing; the index is built
//! once from the data file and then only read.
// =====================================================================

pub mod hash;
pub mod node;
pub mod table;
pub mod tree;

pub use self::hash::{BUCKET_COUNT, hash_country};
pub use self::node::ParcelNode;
pub use self::table::{IndexStats, ParcelIndex};
pub use self::tree::{BucketTree, Extremes, InOrder, Totals, WeightFilter, WeightFiltered};


#[cfg(test)]
mod proptests;
