#![cfg(test)]

// Property tests for Vector kept inside the crate so they do not require
// feature gates to access internal modules.

use crate::vector::Vector;
use proptest::prelude::*;

// Raw positions and counts are clamped against the live length when an op
// is applied, so every generated op is exercisable and op lists shrink
// cleanly.
#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    PopBack,
    Insert(usize, i32),
    InsertSlice(usize, Vec<i32>),
    InsertWithin(usize, usize, usize),
    Erase(usize),
    EraseRange(usize, usize),
    Resize(usize, i32),
    Reserve(usize),
    ShrinkToFit,
    Find(i32),
    Clear,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => any::<i32>().prop_map(Op::PushBack),
        2 => Just(Op::PopBack),
        3 => (0..64usize, any::<i32>()).prop_map(|(p, v)| Op::Insert(p, v)),
        2 => (0..64usize, proptest::collection::vec(any::<i32>(), 0..6))
            .prop_map(|(p, vs)| Op::InsertSlice(p, vs)),
        2 => (0..64usize, 0..64usize, 0..8usize)
            .prop_map(|(p, f, c)| Op::InsertWithin(p, f, c)),
        2 => (0..64usize).prop_map(Op::Erase),
        1 => (0..64usize, 0..8usize).prop_map(|(f, c)| Op::EraseRange(f, c)),
        1 => (0..48usize, any::<i32>()).prop_map(|(n, v)| Op::Resize(n, v)),
        1 => (0..96usize).prop_map(Op::Reserve),
        1 => Just(Op::ShrinkToFit),
        1 => any::<i32>().prop_map(Op::Find),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..80)
}

// Property: State-machine equivalence against std::vec::Vec.
// Invariants exercised across random operation sequences:
// - The visible sequence matches the model after every op.
// - Insert/erase at arbitrary positions shift exactly the tail.
// - Self-range insert behaves as copying the original source values.
// - `capacity >= len` at all times; `shrink_to_fit` makes them equal.
// - Pops on an empty vector fail instead of corrupting state.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in arb_ops()) {
        let mut sut: Vector<i32> = Vector::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::PushBack(v) => {
                    sut.push_back(v);
                    model.push(v);
                }
                Op::PopBack => {
                    match model.pop() {
                        Some(mv) => prop_assert_eq!(sut.pop_back(), Ok(mv)),
                        None => prop_assert!(sut.pop_back().is_err()),
                    }
                }
                Op::Insert(p, v) => {
                    let at = p % (model.len() + 1);
                    let c = sut.insert(sut.begin().advance(at), v).expect("position in bounds");
                    model.insert(at, v);
                    prop_assert_eq!(c.get(&sut), Some(&v));
                }
                Op::InsertSlice(p, vs) => {
                    let at = p % (model.len() + 1);
                    sut.insert_slice(sut.begin().advance(at), &vs).expect("position in bounds");
                    model.splice(at..at, vs);
                }
                Op::InsertWithin(p, f, c) => {
                    let len = model.len();
                    let at = p % (len + 1);
                    let first = f % (len + 1);
                    let count = c % (len - first + 1);
                    sut.insert_within(
                        sut.begin().advance(at),
                        sut.begin().advance(first),
                        sut.begin().advance(first + count),
                    )
                    .expect("range in bounds");
                    let copied: Vec<i32> = model[first..first + count].to_vec();
                    model.splice(at..at, copied);
                }
                Op::Erase(p) => {
                    if model.is_empty() {
                        prop_assert!(sut.erase(sut.begin()).is_err());
                    } else {
                        let at = p % model.len();
                        let next = sut.erase(sut.begin().advance(at)).expect("position in bounds");
                        model.remove(at);
                        prop_assert_eq!(next.index(), at);
                    }
                }
                Op::EraseRange(f, c) => {
                    let len = model.len();
                    let first = f % (len + 1);
                    let count = c % (len - first + 1);
                    sut.erase_range(
                        sut.begin().advance(first),
                        sut.begin().advance(first + count),
                    )
                    .expect("range in bounds");
                    model.drain(first..first + count);
                }
                Op::Resize(n, v) => {
                    sut.resize(n, v).expect("resize never fails in bounds");
                    model.resize(n, v);
                }
                Op::Reserve(n) => {
                    sut.reserve(n);
                    prop_assert!(sut.capacity() >= n);
                }
                Op::ShrinkToFit => {
                    sut.shrink_to_fit();
                    prop_assert_eq!(sut.capacity(), sut.len());
                }
                Op::Find(v) => {
                    let pos = sut.find(&v).map(|c| c.index());
                    prop_assert_eq!(pos, model.iter().position(|mv| *mv == v));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.as_slice(), model.as_slice());
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert!(sut.capacity() >= sut.len());
        }
    }
}
