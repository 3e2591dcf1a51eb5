//! The operations shared by both table backends.

use crate::error::InsertError;
use crate::growth::GrowthPolicy;
use crate::list_sym_table::ListSymTable;
use crate::sym_table::SymTable;

/// A string-keyed table with unique keys whose values are stored and
/// returned verbatim.
pub trait SymbolTable<V> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a binding; fails without side effects on a duplicate key or
    /// allocation failure.
    fn put(&mut self, key: &str, value: V) -> Result<(), InsertError>;

    /// Swaps the value of an existing binding; never inserts.
    fn replace(&mut self, key: &str, value: V) -> Option<V>;

    fn contains(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<&V>;

    fn remove(&mut self, key: &str) -> Option<V>;

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&str, &V);
}

impl<V, G> SymbolTable<V> for SymTable<V, G>
where
    G: GrowthPolicy,
{
    fn len(&self) -> usize {
        SymTable::len(self)
    }

    fn put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        SymTable::put(self, key, value)
    }

    fn replace(&mut self, key: &str, value: V) -> Option<V> {
        SymTable::replace(self, key, value)
    }

    fn contains(&self, key: &str) -> bool {
        SymTable::contains(self, key)
    }

    fn get(&self, key: &str) -> Option<&V> {
        SymTable::get(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        SymTable::remove(self, key)
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&str, &V),
    {
        SymTable::for_each(self, f)
    }
}

impl<V> SymbolTable<V> for ListSymTable<V> {
    fn len(&self) -> usize {
        ListSymTable::len(self)
    }

    fn put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        ListSymTable::put(self, key, value)
    }

    fn replace(&mut self, key: &str, value: V) -> Option<V> {
        ListSymTable::replace(self, key, value)
    }

    fn contains(&self, key: &str) -> bool {
        ListSymTable::contains(self, key)
    }

    fn get(&self, key: &str) -> Option<&V> {
        ListSymTable::get(self, key)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        ListSymTable::remove(self, key)
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&str, &V),
    {
        ListSymTable::for_each(self, f)
    }
}
