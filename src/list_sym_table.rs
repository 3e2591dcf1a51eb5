//! ListSymTable: linear baseline with the same interface as `SymTable`.
//!
//! Every operation scans all bindings. There is no hashing and no growth
//! policy; it exists to check and measure the hashed table against.

use crate::error::InsertError;
use crate::sym_table::copy_key;

#[derive(Debug)]
pub struct ListSymTable<V> {
    bindings: Vec<(Box<str>, V)>,
}

impl<V> ListSymTable<V> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.bindings.iter().position(|(k, _)| **k == *key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|i| &self.bindings[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = self.position(key)?;
        Some(&mut self.bindings[i].1)
    }

    pub fn put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if self.contains(key) {
            return Err(InsertError::DuplicateKey);
        }
        let key = copy_key(key)?;
        self.bindings.try_reserve(1)?;
        self.bindings.push((key, value));
        Ok(())
    }

    pub fn replace(&mut self, key: &str, value: V) -> Option<V> {
        let i = self.position(key)?;
        Some(std::mem::replace(&mut self.bindings[i].1, value))
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let i = self.position(key)?;
        Some(self.bindings.swap_remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.bindings.iter().map(|(k, v)| (&**k, v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> {
        self.bindings.iter_mut().map(|(k, v)| (&**k, v))
    }

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
}

impl<V> Default for ListSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
