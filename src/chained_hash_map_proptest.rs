#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can read
// per-bucket chain lengths.

use crate::chained_hash_map::{ChainedHashMap, BUCKET_COUNT};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hasher};

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Pool-indexed operations so shrinking converges on earlier keys.
#[derive(Clone, Debug)]
enum Op {
    Put(usize, i32),
    Get(usize),
    GetStr(String),
    Remove(usize),
    Keys,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Put(i, v)),
            2 => idx.clone().prop_map(Op::Get),
            1 => "[a-z]{0,5}".prop_map(Op::GetStr),
            2 => idx.clone().prop_map(Op::Remove),
            1 => Just(Op::Keys),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// State-machine equivalence against std::collections::HashMap:
// - put returns the previous value and only grows len for new keys.
// - get/remove agree with the model for present and absent keys.
// - keys()/key_set() yield exactly the model's key set.
// - chain lengths sum to len after every step.
fn run_scenario<S>(sut: &mut ChainedHashMap<Key, i32, S>, pool: &[String], ops: Vec<Op>) -> Result<(), TestCaseError>
where
    S: BuildHasher,
{
    let mut model: HashMap<Key, i32> = HashMap::new();
    for op in ops {
        match op {
            Op::Put(i, v) => {
                let k = Key(pool[i].clone());
                prop_assert_eq!(sut.put(k.clone(), v), model.insert(k, v));
            }
            Op::Get(i) => {
                let k = Key(pool[i].clone());
                prop_assert_eq!(sut.get(&k), model.get(&k));
            }
            Op::GetStr(s) => {
                prop_assert_eq!(sut.get(s.as_str()), model.get(&Key(s.clone())));
            }
            Op::Remove(i) => {
                let k = Key(pool[i].clone());
                prop_assert_eq!(sut.remove(pool[i].as_str()), model.remove(&k));
                prop_assert!(sut.get(&k).is_none());
            }
            Op::Keys => {
                let s_keys: BTreeSet<Key> = sut.keys().cloned().collect();
                let m_keys: BTreeSet<Key> = model.keys().cloned().collect();
                prop_assert_eq!(&s_keys, &m_keys);
                prop_assert_eq!(sut.key_set().len(), model.len());
            }
        }

        let chained: usize = (0..BUCKET_COUNT).map(|b| sut.chain_len(b)).sum();
        prop_assert_eq!(chained, model.len());
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ChainedHashMap<Key, i32> = ChainedHashMap::new();
        run_scenario(&mut sut, &pool, ops)?;
    }
}

// Collision variant: a constant hasher puts every key in one chain, which
// stresses head/middle/tail unlinking.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let mut sut: ChainedHashMap<Key, i32, ConstBuildHasher> =
            ChainedHashMap::with_hasher(ConstBuildHasher);
        run_scenario(&mut sut, &pool, ops)?;
        prop_assert_eq!(sut.chain_len(0), sut.len());
    }
}
