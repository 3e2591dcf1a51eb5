//! symtable: a string-keyed symbol table built as a separately chained
//! hash table that grows through a fixed sequence of prime bucket counts.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: unique string keys bound to caller values, with O(1) expected
//!   lookup and growth that never leaves a binding in a stale bucket.
//! - Layers:
//!   - `hash`: the 65599 multiplicative string hash and bucket addressing.
//!   - `growth`: `GrowthPolicy` picks the initial and next bucket counts;
//!     `PrimeGrowth` walks 509, 1021, ... 65521.
//!   - `SymTable<V, G>`: bucket array of chain heads over a slot arena of
//!     bindings. Chains link arena keys, never raw pointers.
//!   - `ListSymTable<V>`: linear baseline with the same operations.
//!   - `SymbolTable<V>`: the shared trait over both backends.
//!
//! Constraints
//! - Single-threaded; mutation requires `&mut self`.
//! - Keys are copied on insert; the caller's buffer is never retained.
//! - Values are opaque: stored, returned and dropped exactly like any other
//!   `V`. A value may itself be a table (or a reference to one).
//! - Duplicate inserts fail and keep the existing value.
//! - Failed inserts (duplicate or allocation) leave the table unchanged.
//!
//! Hashing and rehashing invariants
//! - Each binding stores its full 64-bit hash; growth relinks bindings using
//!   the stored hash and the new bucket count without rehashing key bytes.
//! - A table is full when an insert would bring the binding count up to the
//!   bucket count. Growth happens before the new binding is linked, so the
//!   new binding's bucket is computed against the new count.
//! - Bindings never move in the arena during growth; only chain links change.
//!
//! Notes and non-goals
//! - The table never shrinks.
//! - Visitors passed to `for_each` cannot mutate the table; the borrow
//!   checker rejects it.
//! - `Drop` releases every key copy, binding and the bucket array.

mod error;
pub mod growth;
pub mod hash;
mod list_sym_table;
mod sym_table;
mod sym_table_proptest;
mod symbol_table;

// Public surface
pub use error::{AllocError, InsertError};
pub use growth::{FixedBuckets, GrowthPolicy, PrimeGrowth};
pub use list_sym_table::ListSymTable;
pub use sym_table::{Iter, IterMut, SymTable};
pub use symbol_table::SymbolTable;
