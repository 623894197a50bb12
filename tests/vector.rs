// Vector public-surface test suite (consolidated).
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Sequence: elements keep insertion order under push/insert/erase.
// - Capacity: capacity >= len always; growth is geometric, erase never
//   shrinks, shrink_to_fit reallocates to exactly len.
// - Cursors: positional indices validated at use; insert accepts
//   [begin, end], erase accepts [begin, end).
// - Errors: checked accessors return OutOfRange/InvalidIterator rather
//   than corrupting state; the failed call has no effect.
use cursor_collections::{ContainerError, VecCursor, Vector, VECTOR_INIT_CAPACITY};

// Test: a push/pop workload behaves as a stack on the back.
// Assumes: pop_back returns the most recent push.
// Verifies: LIFO order and the OutOfRange error once drained.
#[test]
fn push_pop_workload() {
    let mut v = Vector::new();
    for i in 0..50 {
        v.push_back(i);
    }
    for i in (0..50).rev() {
        assert_eq!(v.pop_back(), Ok(i));
    }
    assert!(v.is_empty());
    assert_eq!(v.pop_back(), Err(ContainerError::OutOfRange { container: "Vector" }));
}

// Test: geometric growth from the configured initial capacity.
// Assumes: reallocation happens only when len would exceed capacity.
// Verifies: capacity doubles along a push-only workload.
#[test]
fn growth_is_geometric() {
    let mut v = Vector::new();
    assert_eq!(v.capacity(), VECTOR_INIT_CAPACITY);
    let mut caps = vec![v.capacity()];
    for i in 0..100 {
        v.push_back(i);
        if v.capacity() != *caps.last().unwrap() {
            caps.push(v.capacity());
        }
    }
    for pair in caps.windows(2) {
        assert_eq!(pair[1], pair[0] * 2);
    }
}

// Test: mixed insert/erase editing session against a known script.
// Assumes: insert shifts the tail right, erase shifts it left.
// Verifies: the final sequence and that intermediate cursors returned by
// erase name the element after the removed one.
#[test]
fn editing_session() {
    let mut v: Vector<i32> = (0..6).collect(); // [0,1,2,3,4,5]
    v.insert(v.begin().advance(3), 99).unwrap(); // [0,1,2,99,3,4,5]
    let next = v.erase(v.begin()).unwrap(); // [1,2,99,3,4,5]
    assert_eq!(next.get(&v), Some(&1));
    v.erase_range(v.begin().advance(1), v.begin().advance(3)).unwrap(); // [1,3,4,5]
    v.insert_slice(v.end(), &[7, 8]).unwrap();
    assert_eq!(v.as_slice(), &[1, 3, 4, 5, 7, 8]);
}

// Test: self-range insert against the documented overlap semantics.
// Assumes: sources at or after the insertion point are read from their
// post-shift location, recovering the original values.
// Verifies: duplicating the whole vector into its own middle.
#[test]
fn self_range_insert_into_middle() {
    let mut v = Vector::from([10, 20, 30]);
    v.insert_within(v.begin().advance(1), v.begin(), v.end())
        .unwrap();
    assert_eq!(v.as_slice(), &[10, 10, 20, 30, 20, 30]);
}

// Test: a failed operation has no effect.
// Assumes: validation happens before any element is moved.
// Verifies: contents, len and capacity are untouched after rejected
// insert/erase/at calls.
#[test]
fn failed_calls_have_no_effect() {
    let mut v = Vector::from([1, 2, 3]);
    let cap = v.capacity();
    let past = v.end().advance(5);

    assert!(v.insert(past, 9).is_err());
    assert!(v.erase(past).is_err());
    assert!(v.erase_range(v.begin().advance(2), v.begin()).is_err());
    assert!(v.at(3).is_err());

    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert_eq!(v.capacity(), cap);
}

// Test: owned element lifecycle through a reference-counted probe.
// Assumes: erase and clear drop removed elements exactly once; clone
// performs deep copies.
// Verifies: strong counts at each stage.
#[test]
fn element_drop_discipline() {
    use std::rc::Rc;
    let probe = Rc::new(());
    let mut v = Vector::new();
    for _ in 0..4 {
        v.push_back(Rc::clone(&probe));
    }
    assert_eq!(Rc::strong_count(&probe), 5);

    let copy = v.clone();
    assert_eq!(Rc::strong_count(&probe), 9);
    drop(copy);
    assert_eq!(Rc::strong_count(&probe), 5);

    v.erase_range(v.begin(), v.begin().advance(2)).unwrap();
    assert_eq!(Rc::strong_count(&probe), 3);
    v.clear();
    assert_eq!(Rc::strong_count(&probe), 1);
}

// Test: resize round trip per the documented contract scenario.
// Assumes: growth appends copies, truncation drops the tail.
// Verifies: {1,2,3} -> pad to 6 with defaults -> pad to 9 with 5s ->
// truncate back to 6.
#[test]
fn resize_round_trip() {
    let mut v = Vector::from([1, 2, 3]);
    v.resize_default(6).unwrap();
    v.resize(9, 5).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0, 0, 5, 5, 5]);
    v.resize(6, 5).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3, 0, 0, 0]);
}

// Test: cursor arithmetic is pure index math, independent of the vector.
// Assumes: cursors are positional, not identity-bound.
// Verifies: a cursor held across a mutation addresses whatever occupies
// its index afterwards.
#[test]
fn cursors_are_positional() {
    let mut v = Vector::from([1, 2, 3]);
    let c: VecCursor = v.begin().advance(1);
    assert_eq!(c.get(&v), Some(&2));
    v.erase(v.begin()).unwrap();
    // Same index, different element after the shift.
    assert_eq!(c.get(&v), Some(&3));
    v.pop_back().unwrap();
    v.pop_back().unwrap();
    assert_eq!(c.get(&v), None);
}

// Test: iteration interoperates with std adapters.
// Assumes: iter/iter_mut expose slice iterators over the live prefix.
// Verifies: sums and in-place mutation through the iterator.
#[test]
fn iteration_interop() {
    let mut v: Vector<i32> = (1..=5).collect();
    assert_eq!(v.iter().sum::<i32>(), 15);
    for x in v.iter_mut() {
        *x *= 2;
    }
    assert_eq!(v.as_slice(), &[2, 4, 6, 8, 10]);
    let doubled: Vec<i32> = (&v).into_iter().copied().collect();
    assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
}

// Test: shrink_to_fit after a large transient workload.
// Assumes: shrink reallocates to exactly len and preserves contents.
// Verifies: capacity == len == 3 after building up and draining.
#[test]
fn shrink_after_drain() {
    let mut v: Vector<i32> = (0..100).collect();
    v.erase_range(v.begin().advance(3), v.end()).unwrap();
    assert!(v.capacity() >= 100);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 3);
    assert_eq!(v.as_slice(), &[0, 1, 2]);
}
