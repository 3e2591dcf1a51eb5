// SymTable-specific behavior: growth, bucket placement, borrowed values.
use symtable::growth::PRIME_BUCKET_COUNTS;
use symtable::hash::{bucket_index, hash_key};
use symtable::{FixedBuckets, InsertError, SymTable};
use test_log::test;

// Test: growth correctness.
// Verifies: 509 distinct puts grow a fresh table exactly once, to 1021
// buckets, on the 509th put; every earlier binding keeps its value.
#[test]
fn grows_once_on_509th_put() {
    let mut t: SymTable<usize> = SymTable::new();
    let mut growths = 0;
    let mut last = t.bucket_count();
    for i in 0..509 {
        t.put(&format!("key{i}"), i).unwrap();
        if t.bucket_count() != last {
            growths += 1;
            assert_eq!(i, 508, "growth must happen on the 509th put");
            last = t.bucket_count();
        }
    }
    assert_eq!(growths, 1);
    assert_eq!(t.bucket_count(), 1021);
    for i in 0..509 {
        assert_eq!(t.get(&format!("key{i}")), Some(&i));
    }
}

// Test: the bucket count walks the prime sequence in order as the table
// fills, never skipping a size.
#[test]
fn walks_prime_sequence() {
    let mut t: SymTable<()> = SymTable::new();
    let mut seen = vec![t.bucket_count()];
    for i in 0..9000 {
        t.put(&i.to_string(), ()).unwrap();
        if *seen.last().unwrap() != t.bucket_count() {
            seen.push(t.bucket_count());
        }
    }
    assert_eq!(seen, PRIME_BUCKET_COUNTS[..6].to_vec());
    assert_eq!(t.len(), 9000);
}

// Test: removals never shrink the bucket array.
#[test]
fn never_shrinks() {
    let mut t: SymTable<usize> = SymTable::new();
    for i in 0..600 {
        t.put(&i.to_string(), i).unwrap();
    }
    assert_eq!(t.bucket_count(), 1021);
    for i in 0..600 {
        assert_eq!(t.remove(&i.to_string()), Some(i));
    }
    assert!(t.is_empty());
    assert_eq!(t.bucket_count(), 1021);
}

// Test: collision chain survives growth.
// Verifies: keys sharing bucket 123 at 509 buckets are spread by the new
// count after growth and stay retrievable.
#[test]
fn colliding_keys_survive_growth() {
    let colliding = ["250", "469", "947", "1303", "2016"];
    for k in colliding {
        assert_eq!(bucket_index(hash_key(k), 509), 123);
    }

    let mut t: SymTable<&str> = SymTable::new();
    for k in colliding {
        t.put(k, k).unwrap();
    }
    let mut i = 0;
    while t.bucket_count() == 509 {
        let filler = format!("filler{i}");
        t.put(&filler, "filler").unwrap();
        i += 1;
    }
    for k in colliding {
        assert_eq!(t.get(k), Some(&k));
    }
    assert_eq!(t.remove("947"), Some("947"));
    assert_eq!(t.get("469"), Some(&"469"));
}

// Test: value opacity with borrowed tables.
// Verifies: the outer table hands back the identical inner table, and
// dropping the outer table leaves the inner tables usable.
#[test]
fn table_of_borrowed_tables() {
    let mut first: SymTable<&str> = SymTable::new();
    first.put("Jeter", "Shortstop").unwrap();
    let mut second: SymTable<&str> = SymTable::new();
    second.put("Mantle", "CenterField").unwrap();

    {
        let mut outer: SymTable<&SymTable<&str>> = SymTable::new();
        outer.put("first table", &first).unwrap();
        outer.put("second table", &second).unwrap();

        let got = *outer.get("first table").unwrap();
        assert!(std::ptr::eq(got, &first));
        assert_eq!(got.get("Jeter"), Some(&"Shortstop"));
        let got = *outer.get("second table").unwrap();
        assert!(std::ptr::eq(got, &second));
        assert_eq!(got.get("Mantle"), Some(&"CenterField"));
    }

    assert_eq!(first.get("Jeter"), Some(&"Shortstop"));
    assert_eq!(second.get("Mantle"), Some(&"CenterField"));
    first.put("Gehrig", "First Base").unwrap();
    assert_eq!(first.len(), 2);
}

// Test: an inner table that grows while stored in an outer table is the
// same instance the outer table returns.
#[test]
fn owned_inner_table_grows_in_place() {
    let mut outer: SymTable<SymTable<usize>> = SymTable::new();
    outer.put("inner", SymTable::new()).unwrap();

    let inner = outer.get_mut("inner").unwrap();
    for i in 0..1000 {
        inner.put(&i.to_string(), i).unwrap();
    }
    let inner = outer.get("inner").unwrap();
    assert_eq!(inner.len(), 1000);
    assert_eq!(inner.bucket_count(), 1021);
    assert_eq!(outer.len(), 1);
    assert_eq!(outer.bucket_count(), 509);
}

// Test: independent instances stay isolated while one of them grows.
#[test]
fn instances_are_isolated() {
    let mut small: SymTable<&str> = SymTable::new();
    small.put("xxx", "xxx").unwrap();
    small.put("yyy", "yyy").unwrap();

    let mut big: SymTable<usize> = SymTable::new();
    for i in 0..5000 {
        big.put(&i.to_string(), i).unwrap();
    }
    assert_eq!(big.bucket_count(), 8191);
    assert_eq!(small.bucket_count(), 509);
    assert_eq!(small.len(), 2);
    assert_eq!(small.get("xxx"), Some(&"xxx"));
    assert_eq!(small.get("yyy"), Some(&"yyy"));
}

// Test: a fixed policy keeps accepting bindings in longer chains.
#[test]
fn fixed_buckets_chain_without_growth() {
    let mut t: SymTable<usize, FixedBuckets> = SymTable::with_growth(FixedBuckets(13));
    for i in 0..500 {
        t.put(&i.to_string(), i).unwrap();
    }
    assert_eq!(t.bucket_count(), 13);
    for i in (0..500).step_by(7) {
        assert_eq!(t.remove(&i.to_string()), Some(i));
    }
    for i in 0..500 {
        assert_eq!(t.contains(&i.to_string()), i % 7 != 0);
    }
}

#[test]
fn fallible_constructors() {
    let t: SymTable<u8> = SymTable::try_new().unwrap();
    assert_eq!(t.bucket_count(), 509);
    let t: SymTable<u8, FixedBuckets> = SymTable::try_with_growth(FixedBuckets(31)).unwrap();
    assert_eq!(t.bucket_count(), 31);
}

// Test: a rejected duplicate drops the offered value and keeps the bound one.
#[test]
fn duplicate_put_drops_offered_value() {
    use std::rc::Rc;

    let kept = Rc::new(1);
    let offered = Rc::new(2);
    let mut t: SymTable<Rc<i32>> = SymTable::new();
    t.put("k", kept.clone()).unwrap();
    let res = t.put("k", offered.clone());
    assert_eq!(res, Err(InsertError::DuplicateKey));
    assert_eq!(Rc::strong_count(&offered), 1);
    assert!(Rc::ptr_eq(t.get("k").unwrap(), &kept));

    // replace on a missing key drops the offered value as well.
    assert_eq!(t.replace("missing", offered.clone()), None);
    assert_eq!(Rc::strong_count(&offered), 1);

    drop(t);
    assert_eq!(Rc::strong_count(&kept), 1);
}

#[test]
fn into_iterator_for_ref() {
    let mut t: SymTable<i32> = SymTable::new();
    t.put("a", 1).unwrap();
    t.put("b", 2).unwrap();
    let mut sum = 0;
    for (_, v) in &t {
        sum += v;
    }
    assert_eq!(sum, 3);
}
