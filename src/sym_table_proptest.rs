#![cfg(test)]

// Property tests for SymTable kept inside the crate so they can call the
// structural invariant checker.

use crate::error::InsertError;
use crate::growth::{FixedBuckets, GrowthPolicy};
use crate::sym_table::SymTable;
use hashbrown::HashMap;
use proptest::prelude::*;
use std::collections::BTreeSet;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Replace(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z0-9]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Replace(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z0-9]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Applies `ops` to a table and to a hashbrown model in lockstep.
// Invariants exercised across random operation sequences:
// - Duplicate keys are rejected and keep the first value.
// - `replace` never inserts; it returns the model's previous value.
// - `remove` returns the model's value and unbinds the key.
// - `for_each` visits the model's key set exactly once per key.
// - Chains stay consistent: placement, uniqueness, reachable count == len.
fn run_state_machine<G: GrowthPolicy>(
    mut sut: SymTable<i32, G>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let already = model.contains_key(k);
                match sut.put(k, v) {
                    Ok(()) => {
                        prop_assert!(!already, "put must fail on duplicate");
                        model.insert(k.clone(), v);
                    }
                    Err(InsertError::DuplicateKey) => {
                        prop_assert!(already, "duplicate error only when key exists");
                    }
                    Err(e) => prop_assert!(false, "unexpected error: {e}"),
                }
            }
            OpI::Replace(i, v) => {
                let k = &pool[i];
                let expected = model.get_mut(k).map(|mv| std::mem::replace(mv, v));
                prop_assert_eq!(sut.replace(k, v), expected);
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k));
                prop_assert!(!sut.contains(k));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains(&s), model.contains_key(&s));
            }
            OpI::Iterate => {
                let mut visited = Vec::new();
                sut.for_each(|k, v| visited.push((k.to_string(), *v)));
                let keys: BTreeSet<_> = visited.iter().map(|(k, _)| k.clone()).collect();
                prop_assert_eq!(keys.len(), visited.len(), "key visited twice");
                for (k, v) in &visited {
                    prop_assert_eq!(model.get(k), Some(v));
                }
                prop_assert_eq!(visited.len(), model.len());
            }
        }

        sut.check_invariants();
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_state_machine(SymTable::new(), &pool, ops)?;
    }
}

// Same invariants with every key in one chain, stressing head, middle and
// tail unlinking.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_single_chain((pool, ops) in arb_scenario()) {
        run_state_machine(SymTable::with_growth(FixedBuckets(1)), &pool, ops)?;
    }
}

// Growth preserves every binding: after inserting `n` distinct keys the
// table holds exactly them, with their values, at a bucket count from the
// prime sequence no smaller than the binding count (below the maximum).
proptest! {
    #![proptest_config(ProptestConfig { cases: 16, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_keeps_bindings(n in 0usize..2500, salt in "[a-z]{0,3}") {
        let mut t: SymTable<usize> = SymTable::new();
        for i in 0..n {
            t.put(&format!("{salt}{i}"), i).unwrap();
        }
        t.check_invariants();
        prop_assert_eq!(t.len(), n);
        prop_assert!(crate::growth::PRIME_BUCKET_COUNTS.contains(&t.bucket_count()));
        prop_assert!(t.bucket_count() > n);
        for i in 0..n {
            prop_assert_eq!(t.get(&format!("{salt}{i}")), Some(&i));
        }
    }
}
