#![cfg(test)]

// Property tests for ArrayList against a Vec model, kept inside the crate so
// they can check the vacant tail of the slot array.

use crate::array_list::{ArrayList, DEFAULT_CAPACITY};
use crate::error::Error;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Add(i16),
    Insert(usize, i16),
    Get(usize),
    Remove(usize),
    Contains(i16),
    Clear,
    Sort,
}

// Indices range a little past any reachable length so out-of-range paths
// are exercised as often as valid ones.
fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        6 => any::<i16>().prop_map(Op::Add),
        3 => (0usize..48, any::<i16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        3 => (0usize..48).prop_map(Op::Get),
        3 => (0usize..48).prop_map(Op::Remove),
        2 => (-4i16..4).prop_map(Op::Contains),
        1 => Just(Op::Clear),
        1 => Just(Op::Sort),
    ];
    proptest::collection::vec(op, 1..120)
}

// Smallest capacity reachable from DEFAULT_CAPACITY by doubling that holds
// `peak` elements.
fn expected_capacity(peak: usize) -> usize {
    let mut cap = DEFAULT_CAPACITY;
    while cap < peak {
        cap *= 2;
    }
    cap
}

// Property: State-machine equivalence against Vec.
// Invariants exercised across random operation sequences:
// - len tracks net insertions; get(i) matches the model for every i < len.
// - Out-of-range insert/get/remove return IndexOutOfBounds with the current
//   length and leave the list unchanged.
// - Capacity only ever grows, by doubling, and is never released by
//   remove/clear.
// - quick_sort agrees with the model's sort.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in arb_ops()) {
        let mut sut: ArrayList<i16> = ArrayList::new();
        let mut model: Vec<i16> = Vec::new();
        let mut peak = 0usize;

        for op in ops {
            match op {
                Op::Add(v) => {
                    sut.add(v);
                    model.push(v);
                }
                Op::Insert(i, v) => {
                    if i <= model.len() {
                        prop_assert_eq!(sut.insert(i, v), Ok(()));
                        model.insert(i, v);
                    } else {
                        prop_assert_eq!(
                            sut.insert(i, v),
                            Err(Error::IndexOutOfBounds { index: i, len: model.len() })
                        );
                    }
                }
                Op::Get(i) => {
                    match model.get(i) {
                        Some(v) => prop_assert_eq!(sut.get(i), Ok(v)),
                        None => prop_assert_eq!(
                            sut.get(i),
                            Err(Error::IndexOutOfBounds { index: i, len: model.len() })
                        ),
                    }
                }
                Op::Remove(i) => {
                    if i < model.len() {
                        prop_assert_eq!(sut.remove(i), Ok(model.remove(i)));
                    } else {
                        prop_assert_eq!(
                            sut.remove(i),
                            Err(Error::IndexOutOfBounds { index: i, len: model.len() })
                        );
                    }
                }
                Op::Contains(v) => {
                    prop_assert_eq!(sut.contains(&v), model.contains(&v));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
                Op::Sort => {
                    sut.quick_sort();
                    model.sort();
                }
            }

            peak = peak.max(model.len());
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.capacity(), expected_capacity(peak));
            prop_assert!(sut.iter().eq(model.iter()));
            prop_assert!(sut.slots_vacant_from_len());
        }
    }
}

// Property: sorting is idempotent and yields a permutation of the input,
// including inputs dominated by duplicates.
proptest! {
    #[test]
    fn prop_quick_sort_idempotent_permutation(values in proptest::collection::vec(-8i32..8, 0..200)) {
        let mut sut = ArrayList::new();
        for &v in &values {
            sut.add(v);
        }
        sut.quick_sort();
        let once: Vec<i32> = sut.iter().copied().collect();
        sut.quick_sort();
        let twice: Vec<i32> = sut.iter().copied().collect();
        prop_assert_eq!(&once, &twice);

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(once, expected);
    }
}
