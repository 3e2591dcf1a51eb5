//! Bucket-count growth policies.

/// Bucket counts used by [`PrimeGrowth`], ascending. The last entry is the
/// maximum; a table never grows past it.
pub const PRIME_BUCKET_COUNTS: [usize; 8] = [509, 1021, 2039, 4093, 8191, 16381, 32749, 65521];

/// Decides how many buckets a table starts with and what it grows to.
///
/// `next_buckets` returns a count strictly larger than `current`, or `None`
/// when the table should stop growing. A table ignores any other answer and
/// keeps its current bucket count.
pub trait GrowthPolicy {
    fn initial_buckets(&self) -> usize;

    fn next_buckets(&self, current: usize) -> Option<usize>;
}

/// Walks [`PRIME_BUCKET_COUNTS`]; the default policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PrimeGrowth;

impl GrowthPolicy for PrimeGrowth {
    fn initial_buckets(&self) -> usize {
        PRIME_BUCKET_COUNTS[0]
    }

    fn next_buckets(&self, current: usize) -> Option<usize> {
        let pos = PRIME_BUCKET_COUNTS.iter().position(|&n| n == current)?;
        PRIME_BUCKET_COUNTS.get(pos + 1).copied()
    }
}

/// A constant bucket count; the table never grows and chains get longer
/// instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FixedBuckets(pub usize);

impl Default for FixedBuckets {
    fn default() -> Self {
        FixedBuckets(PRIME_BUCKET_COUNTS[0])
    }
}

impl GrowthPolicy for FixedBuckets {
    fn initial_buckets(&self) -> usize {
        self.0.max(1)
    }

    fn next_buckets(&self, _current: usize) -> Option<usize> {
        None
    }
}
