#![cfg(test)]

// Property tests for LinkedList kept inside the crate so they do not
// require feature gates to access internal modules.

use crate::linked_list::{LinkedList, ListCursor};
use proptest::prelude::*;
use std::collections::VecDeque;

// Raw positions are clamped against the live length when an op is
// applied, so every generated op is exercisable and op lists shrink
// cleanly.
#[derive(Clone, Debug)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(usize, i32),
    Erase(usize),
    EraseRange(usize, usize),
    Resize(usize, i32),
    Find(i32),
    Clear,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        3 => any::<i32>().prop_map(Op::PushFront),
        3 => any::<i32>().prop_map(Op::PushBack),
        2 => Just(Op::PopFront),
        2 => Just(Op::PopBack),
        3 => (0..64usize, any::<i32>()).prop_map(|(p, v)| Op::Insert(p, v)),
        2 => (0..64usize).prop_map(Op::Erase),
        1 => (0..64usize, 0..8usize).prop_map(|(f, c)| Op::EraseRange(f, c)),
        1 => (0..32usize, any::<i32>()).prop_map(|(n, v)| Op::Resize(n, v)),
        1 => any::<i32>().prop_map(Op::Find),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..80)
}

// Property: State-machine equivalence against std::collections::VecDeque.
// Invariants exercised across random operation sequences:
// - The visible sequence matches the model after every op.
// - Insert returns the new node's cursor; erase returns the follow cursor.
// - Cursors of erased nodes never resolve again, across arbitrary later
//   mutation and arena slot reuse.
// - Pops on an empty list fail instead of corrupting the chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in arb_ops()) {
        let mut sut: LinkedList<i32> = LinkedList::new();
        let mut model: VecDeque<i32> = VecDeque::new();
        let mut stale: Vec<ListCursor> = Vec::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    sut.push_front(v);
                    model.push_front(v);
                }
                Op::PushBack(v) => {
                    sut.push_back(v);
                    model.push_back(v);
                }
                Op::PopFront => {
                    match model.pop_front() {
                        Some(mv) => prop_assert_eq!(sut.pop_front(), Ok(mv)),
                        None => prop_assert!(sut.pop_front().is_err()),
                    }
                }
                Op::PopBack => {
                    match model.pop_back() {
                        Some(mv) => prop_assert_eq!(sut.pop_back(), Ok(mv)),
                        None => prop_assert!(sut.pop_back().is_err()),
                    }
                }
                Op::Insert(p, v) => {
                    let at = p % (model.len() + 1);
                    let pos = sut.begin().advance(&sut, at).expect("position in bounds");
                    let c = sut.insert(pos, v).expect("live position");
                    prop_assert_eq!(c.value(&sut), Some(&v));
                    model.insert(at, v);
                }
                Op::Erase(p) => {
                    if model.is_empty() {
                        prop_assert!(sut.erase(sut.begin()).is_err());
                    } else {
                        let at = p % model.len();
                        let pos = sut.begin().advance(&sut, at).expect("position in bounds");
                        let next = sut.erase(pos).expect("live position");
                        model.remove(at);
                        stale.push(pos);
                        match model.get(at) {
                            Some(mv) => prop_assert_eq!(next.value(&sut), Some(mv)),
                            None => prop_assert_eq!(next, sut.end()),
                        }
                    }
                }
                Op::EraseRange(f, c) => {
                    let len = model.len();
                    let first = f % (len + 1);
                    let count = c % (len - first + 1);
                    let first_cur = sut.begin().advance(&sut, first).expect("in bounds");
                    let last_cur = first_cur.advance(&sut, count).expect("in bounds");
                    sut.erase_range(first_cur, last_cur).expect("range in bounds");
                    model.drain(first..first + count);
                }
                Op::Resize(n, v) => {
                    sut.resize(n, v).expect("resize in bounds");
                    model.resize(n, v);
                }
                Op::Find(v) => {
                    let pos = sut
                        .find(&v)
                        .map(|c| c.distance(&sut, sut.begin()).expect("reachable"));
                    prop_assert_eq!(pos, model.iter().position(|mv| *mv == v));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                    // The arena bumps generations on clear; old cursors are
                    // stale, not aliased.
                }
            }

            // Post-conditions after each op
            // 1) Cursors of erased nodes must never resolve
            for c in &stale {
                prop_assert!(c.value(&sut).is_none());
            }
            // 2) Sequence and size parity
            let seq: Vec<i32> = sut.iter().copied().collect();
            let mseq: Vec<i32> = model.iter().copied().collect();
            prop_assert_eq!(seq, mseq);
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}
