//! SymTable: separately chained hash table over a slot arena.

use crate::error::{AllocError, InsertError};
use crate::growth::{GrowthPolicy, PrimeGrowth};
use crate::hash::{bucket_index, hash_key};
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Binding<V> {
    key: Box<str>,
    value: V,
    hash: u64,
    next: Option<DefaultKey>, // next binding in the same chain
}

/// String-keyed table with unique keys and opaque values.
///
/// Bindings live in a slot arena and are threaded into per-bucket chains
/// by arena key. The bucket count follows the growth policy `G`; with the
/// default [`PrimeGrowth`] it starts at 509 and walks the prime sequence up
/// to 65521 as the table fills.
pub struct SymTable<V, G = PrimeGrowth> {
    growth: G,
    buckets: Vec<Option<DefaultKey>>, // chain heads
    bindings: SlotMap<DefaultKey, Binding<V>>,
}

/// Copies `key` into a fresh exact-size allocation.
pub(crate) fn copy_key(key: &str) -> Result<Box<str>, AllocError> {
    let mut owned = String::new();
    owned.try_reserve_exact(key.len())?;
    owned.push_str(key);
    Ok(owned.into_boxed_str())
}

fn empty_buckets(count: usize) -> Result<Vec<Option<DefaultKey>>, AllocError> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(count)?;
    buckets.resize(count, None);
    Ok(buckets)
}

impl<V> SymTable<V> {
    pub fn new() -> Self {
        Self::with_growth(PrimeGrowth)
    }

    /// Like [`SymTable::new`], but reports allocation failure instead of
    /// aborting.
    pub fn try_new() -> Result<Self, AllocError> {
        Self::try_with_growth(PrimeGrowth)
    }
}

impl<V> Default for SymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over bindings in bucket then chain order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Option<DefaultKey>>,
    bindings: &'a SlotMap<DefaultKey, Binding<V>>,
    chain: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.chain {
                let bindings: &'a SlotMap<DefaultKey, Binding<V>> = self.bindings;
                let b = &bindings[k];
                self.chain = b.next;
                self.remaining -= 1;
                return Some((&*b.key, &b.value));
            }
            self.chain = *self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Iterator over bindings with mutable access to values.
pub struct IterMut<'a, V> {
    it: slotmap::basic::IterMut<'a, DefaultKey, Binding<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, b)| (&*b.key, &mut b.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

impl<V, G> SymTable<V, G>
where
    G: GrowthPolicy,
{
    pub fn with_growth(growth: G) -> Self {
        let buckets = vec![None; growth.initial_buckets().max(1)];
        Self {
            growth,
            buckets,
            bindings: SlotMap::with_key(),
        }
    }

    pub fn try_with_growth(growth: G) -> Result<Self, AllocError> {
        let buckets = empty_buckets(growth.initial_buckets().max(1))?;
        Ok(Self {
            growth,
            buckets,
            bindings: SlotMap::with_key(),
        })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Current length of the bucket array.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn find(&self, hash: u64, key: &str) -> Option<DefaultKey> {
        let mut cur = self.buckets[bucket_index(hash, self.buckets.len())];
        while let Some(k) = cur {
            let b = &self.bindings[k];
            if b.hash == hash && *b.key == *key {
                return Some(k);
            }
            cur = b.next;
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(hash_key(key), key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let k = self.find(hash_key(key), key)?;
        Some(&self.bindings[k].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let k = self.find(hash_key(key), key)?;
        Some(&mut self.bindings[k].value)
    }

    /// Binds `key` to `value` if `key` is not bound yet.
    ///
    /// The key is copied; the caller's buffer is not retained. On a
    /// duplicate key the existing value is kept and `value` is dropped. On
    /// any error the table is left exactly as it was.
    ///
    /// The key copy and any bucket growth are fallible and reported as
    /// [`InsertError::Alloc`]. The binding record itself is stored in the
    /// arena through the global allocator, which aborts on exhaustion. That
    /// store happens after every fallible step.
    pub fn put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        let hash = hash_key(key);
        if self.find(hash, key).is_some() {
            return Err(InsertError::DuplicateKey);
        }

        let key = copy_key(key).map_err(|e| {
            log::debug!("could not copy {}-byte key: {e}", key.len());
            e
        })?;

        // Full means this binding would bring the count up to the bucket count.
        if self.bindings.len() + 1 >= self.buckets.len() {
            let current = self.buckets.len();
            if let Some(next) = self.growth.next_buckets(current).filter(|&n| n > current) {
                self.grow(next)?;
            }
        }

        let index = bucket_index(hash, self.buckets.len());
        let next = self.buckets[index];
        let k = self.bindings.insert(Binding {
            key,
            value,
            hash,
            next,
        });
        self.buckets[index] = Some(k);
        Ok(())
    }

    /// Relinks every binding into a fresh array of `count` buckets.
    /// Leaves the table untouched when the array cannot be allocated.
    fn grow(&mut self, count: usize) -> Result<(), AllocError> {
        let mut buckets = empty_buckets(count).map_err(|e| {
            log::debug!("could not grow to {count} buckets: {e}");
            e
        })?;

        for (k, b) in self.bindings.iter_mut() {
            let index = bucket_index(b.hash, count);
            b.next = buckets[index];
            buckets[index] = Some(k);
        }

        log::trace!(
            "grew symbol table from {} to {count} buckets ({} bindings)",
            self.buckets.len(),
            self.bindings.len()
        );
        self.buckets = buckets;
        Ok(())
    }

    /// Swaps in `value` for an existing binding and returns the old value.
    /// Returns `None` and drops `value` when `key` is not bound.
    pub fn replace(&mut self, key: &str, value: V) -> Option<V> {
        let k = self.find(hash_key(key), key)?;
        Some(std::mem::replace(&mut self.bindings[k].value, value))
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let hash = hash_key(key);
        let index = bucket_index(hash, self.buckets.len());

        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[index];
        while let Some(k) = cur {
            let b = &self.bindings[k];
            if b.hash == hash && *b.key == *key {
                let next = b.next;
                match prev {
                    None => self.buckets[index] = next,
                    Some(p) => self.bindings[p].next = next,
                }
                return self.bindings.remove(k).map(|b| b.value);
            }
            prev = cur;
            cur = b.next;
        }
        None
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            bindings: &self.bindings,
            chain: None,
            remaining: self.bindings.len(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.bindings.iter_mut(),
        }
    }

    /// Calls `f` once per binding, in unspecified order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        for (k, v) in self.iter() {
            f(k, v);
        }
    }

    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut V),
    {
        for (k, v) in self.iter_mut() {
            f(k, v);
        }
    }

    /// Walks every chain and checks placement, uniqueness and the count.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let mut seen = std::collections::HashSet::new();
        let mut reachable = 0;
        for (index, head) in self.buckets.iter().enumerate() {
            let mut cur = *head;
            while let Some(k) = cur {
                let b = self.bindings.get(k).expect("chain link to live slot");
                assert_eq!(b.hash, hash_key(&b.key), "stale stored hash");
                assert_eq!(bucket_index(b.hash, self.buckets.len()), index, "misplaced binding");
                assert!(seen.insert(b.key.clone()), "duplicate key {:?}", b.key);
                reachable += 1;
                cur = b.next;
            }
        }
        assert_eq!(reachable, self.bindings.len(), "unreachable bindings");
    }
}

impl<'a, V, G> IntoIterator for &'a SymTable<V, G>
where
    G: GrowthPolicy,
{
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V, G> core::fmt::Debug for SymTable<V, G>
where
    V: core::fmt::Debug,
    G: GrowthPolicy,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
