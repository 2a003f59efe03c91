// =====================================================================
// File: index/hash.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Maps a country name to one of the 127 hash buckets using a djb2
//   string hash. The hash works on raw bytes and uses 32-bit unsigned
//   wraparound, so bucket assignment is stable across runs and platforms.
// =====================================================================

/// Number of slots in the hash table.
pub const BUCKET_COUNT: usize = 127;

const DJB2_SEED: u32 = 5381;


/// djb2 hash of `country`, reduced into `[0, BUCKET_COUNT)`.
///
/// The input is hashed as given; callers normalize first.
///
/// # Example
/// ```
/// use parcelindex::index::{hash_country, BUCKET_COUNT};
/// let slot = hash_country("canada");
/// assert!(slot < BUCKET_COUNT);
/// assert_eq!(slot, hash_country("canada"));
/// ```
pub fn hash_country(country: &str) -> usize {
    let hash = country
        .bytes()
        .fold(DJB2_SEED, |h, byte| h.wrapping_mul(33).wrapping_add(u32::from(byte)));
    (hash % BUCKET_COUNT as u32) as usize
}
