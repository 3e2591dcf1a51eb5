//! Key hashing and bucket addressing.
//!
//! The hash is the classic multiplicative string hash with multiplier
//! 65599, accumulated over the key's bytes with wrapping `u64` arithmetic.
//! It is fixed rather than pluggable: bucket placement of concrete keys is
//! part of the observable contract (see the collision tests below).

/// Multiplier applied to the running hash before adding each byte.
pub const HASH_MULTIPLIER: u64 = 65599;

/// Full 64-bit hash of `key`. The empty string hashes to 0.
#[inline]
pub fn hash_key(key: &str) -> u64 {
    key.bytes().fold(0u64, |h, b| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(b))
    })
}

/// Bucket index of a full hash under `bucket_count` buckets.
#[inline]
pub fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    (hash % bucket_count as u64) as usize
}
