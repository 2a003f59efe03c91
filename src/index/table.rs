// =====================================================================
// File: index/table.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Implements the two-level index (`ParcelIndex`): a fixed array of 127
//   bucket slots, each optionally owning a `BucketTree`. A country name
//   picks the slot through `hash_country`, and the slot's tree answers
//   the per-country queries.
//
// Notes:
//   * Insertion is the only mutator. Nothing ever moves between slots.
//   * Queries are bucket-scoped: two countries that hash to the same slot
//     share one tree and their parcels are reported together. This is
//     a known gap, pinned by a test in `tests.rs`.
//   * Each query returns `None` when the bucket is empty, so callers can
//     report "no parcels" instead of printing zeros.
// =====================================================================
use super::{
    BUCKET_COUNT, BucketTree, Extremes, InOrder, Totals, WeightFilter, WeightFiltered, hash_country,
};
use crate::{Parcel, normalize_country};
use tracing::trace;

/// Summary of the index shape, used by the `STATS` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub records: usize,
    pub occupied_buckets: usize,
    /// `(slot, depth)` of the deepest bucket tree, if any.
    pub deepest_bucket: Option<(usize, usize)>,
}


/// Hash table of BST roots keyed by destination country.
#[derive(Debug)]
pub struct ParcelIndex {
    buckets: [Option<BucketTree>; BUCKET_COUNT],
    len: usize,
}


impl Default for ParcelIndex {
    fn default() -> Self {
        Self::new()
    }
}


impl ParcelIndex {
    /// Create an index with every slot empty.
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    /// Normalize `country`, then insert a parcel into its bucket.
    ///
    /// # Example
    /// ```
    /// use parcelindex::ParcelIndex;
    ///
    /// let mut index = ParcelIndex::new();
    /// index.insert("Canada", 500.0, 100.0);
    /// index.insert("canada", 200.0, 50.0);
    ///
    /// let weights: Vec<f64> = index
    ///     .list_all("CANADA")
    ///     .unwrap()
    ///     .map(|p| p.weight())
    ///     .collect();
    /// assert_eq!(weights, vec![200.0, 500.0]);
    /// ```
    pub fn insert(&mut self, country: &str, weight: f64, value: f64) {
        self.insert_parcel(Parcel::new(country, weight, value));
    }

    /// Insert an already-built parcel.
    pub fn insert_parcel(&mut self, parcel: Parcel) {
        let slot = hash_country(parcel.country());
        trace!(country = parcel.country(), slot, weight = parcel.weight(), "insert parcel");

        let bucket = &mut self.buckets[slot];
        match bucket {
            Some(tree) => tree.insert(parcel),
            None => *bucket = Some(BucketTree::new(parcel)),
        }
        self.len += 1;
    }

    /// Tree for the bucket `country` hashes to, or `None` if that bucket
    /// is empty.
    pub fn lookup_bucket(&self, country: &str) -> Option<&BucketTree> {
        let slot = hash_country(&normalize_country(country));
        self.buckets[slot].as_ref()
    }

    /// Tree stored at a raw slot number. Out-of-range slots are empty.
    pub fn bucket(&self, slot: usize) -> Option<&BucketTree> {
        self.buckets.get(slot)?.as_ref()
    }

    /// Occupied slots with their trees, in slot order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &BucketTree)> {
        self.buckets
            .iter()
            .enumerate()
            .filter_map(|(slot, bucket)| bucket.as_ref().map(|tree| (slot, tree)))
    }

    /// Total number of parcels across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn occupied_buckets(&self) -> usize {
        self.buckets().count()
    }

    pub fn stats(&self) -> IndexStats {
        let deepest_bucket = self
            .buckets()
            .map(|(slot, tree)| (slot, tree.depth()))
            // Lowest slot wins among equally deep buckets
            .fold(None, |best: Option<(usize, usize)>, (slot, depth)| match best {
                Some((_, best_depth)) if best_depth >= depth => best,
                _ => Some((slot, depth)),
            });

        IndexStats {
            records: self.len,
            occupied_buckets: self.occupied_buckets(),
            deepest_bucket,
        }
    }

    // =========================
    // Query family
    // =========================

    /// Every parcel in the country's bucket, lightest first.
    pub fn list_all(&self, country: &str) -> Option<InOrder<'_>> {
        self.lookup_bucket(country).map(BucketTree::iter)
    }

    /// Parcels in the country's bucket strictly heavier or lighter than
    /// `threshold`, lightest first.
    ///
    /// # Arguments
    ///
    /// * `country` - Country name in any case; normalized before hashing.
    /// * `threshold` - Weight to compare against. Equal weights never match.
    /// * `filter` - Which side of `threshold` to keep.
    ///
    /// # Returns
    ///
    /// `None` when the bucket is empty. `Some` with a possibly empty
    /// iterator otherwise, which also yields parcels of any other country
    /// sharing the bucket.
    pub fn list_by_weight(
        &self,
        country: &str,
        threshold: f64,
        filter: WeightFilter,
    ) -> Option<WeightFiltered<'_>> {
        self.lookup_bucket(country)
            .map(|tree| tree.filter_by_weight(threshold, filter))
    }

    /// Total weight and value of the country's bucket.
    pub fn totals(&self, country: &str) -> Option<Totals> {
        self.lookup_bucket(country).map(BucketTree::totals)
    }

    /// Cheapest and most expensive parcel in the country's bucket.
    pub fn value_extremes(&self, country: &str) -> Option<Extremes<'_>> {
        self.lookup_bucket(country).map(BucketTree::value_extremes)
    }

    /// Lightest and heaviest parcel in the country's bucket.
    pub fn weight_extremes(&self, country: &str) -> Option<Extremes<'_>> {
        self.lookup_bucket(country).map(BucketTree::weight_extremes)
    }
}
