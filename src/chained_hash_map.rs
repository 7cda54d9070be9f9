//! ChainedHashMap: fixed bucket table of singly linked chains.
//!
//! Entries live in a `SlotMap` arena. Each bucket stores the key of its chain
//! head and each entry stores the key of its successor, so a chain is a
//! linked list without raw pointers. The table has `BUCKET_COUNT` buckets for
//! the lifetime of the map; it is never resized.

use crate::chain_walk::WalkFlag;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use slotmap::SlotMap;
use std::collections::hash_map::RandomState;

/// Number of buckets in every map. Must stay a power of two so the bucket
/// index can be taken with a mask.
pub const BUCKET_COUNT: usize = 16;
const BUCKET_MASK: usize = BUCKET_COUNT - 1;

slotmap::new_key_type! {
    struct EntryKey;
}

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    next: Option<EntryKey>,
}

pub struct ChainedHashMap<K, V, S = RandomState> {
    hasher: S,
    buckets: [Option<EntryKey>; BUCKET_COUNT], // chain heads
    entries: SlotMap<EntryKey, Entry<K, V>>,
    walk: WalkFlag,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            buckets: [None; BUCKET_COUNT],
            entries: SlotMap::with_key(),
            walk: WalkFlag::new(),
        }
    }

    // The hash is unsigned, so masking always lands inside the table.
    fn bucket_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        (self.hasher.hash_one(q) as usize) & BUCKET_MASK
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `key -> value`.
    ///
    /// A key already present keeps its position in the chain and has its
    /// value replaced; the previous value is returned and `len` is
    /// unchanged. A new key is appended at the tail of its chain.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let _g = self.walk.begin();
        let bucket = self.bucket_of(&key);

        let mut tail = None;
        let mut cursor = self.buckets[bucket];
        while let Some(k) = cursor {
            let entry = &mut self.entries[k];
            if entry.key == key {
                return Some(mem::replace(&mut entry.value, value));
            }
            tail = Some(k);
            cursor = entry.next;
        }

        let k = self.entries.insert(Entry {
            key,
            value,
            next: None,
        });
        match tail {
            None => self.buckets[bucket] = Some(k),
            Some(t) => self.entries[t].next = Some(k),
        }
        None
    }

    /// Value for the first entry in the key's chain that compares equal.
    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.walk.begin();
        let k = self.find(q)?;
        Some(&self.entries[k].value)
    }

    /// Remove `q` and return its value. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(q).map(|(_k, v)| v)
    }

    /// Remove `q` and return the owned key and value.
    ///
    /// The chain is relinked before this returns, so `Drop` for the returned
    /// key and value may use the map again.
    pub fn remove_entry<Q>(&mut self, q: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let entry = self.unlink(q)?;
        Some((entry.key, entry.value))
    }

    fn unlink<Q>(&mut self, q: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.walk.begin();
        let bucket = self.bucket_of(q);

        let mut prev: Option<EntryKey> = None;
        let mut cursor = self.buckets[bucket];
        while let Some(k) = cursor {
            let entry = &self.entries[k];
            if entry.key.borrow() == q {
                let next = entry.next;
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(p) => self.entries[p].next = next,
                }
                return self.entries.remove(k);
            }
            prev = Some(k);
            cursor = entry.next;
        }
        None
    }

    fn find<Q>(&self, q: &Q) -> Option<EntryKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let mut cursor = self.buckets[self.bucket_of(q)];
        while let Some(k) = cursor {
            let entry = &self.entries[k];
            if entry.key.borrow() == q {
                return Some(k);
            }
            cursor = entry.next;
        }
        None
    }

    /// Every distinct key in the map.
    pub fn key_set(&self) -> hashbrown::HashSet<&K> {
        self.keys().collect()
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Keys in bucket order, then chain order. No ordering is promised.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { it: self.iter() }
    }

    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: &self.buckets,
            entries: &self.entries,
            bucket: 0,
            cursor: None,
            remaining: self.entries.len(),
        }
    }

    #[cfg(test)]
    pub(crate) fn chain_len(&self, bucket: usize) -> usize {
        let mut n = 0;
        let mut cursor = self.buckets[bucket];
        while let Some(k) = cursor {
            n += 1;
            cursor = self.entries[k].next;
        }
        n
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Walks every chain, bucket by bucket.
pub(crate) struct Iter<'a, K, V> {
    buckets: &'a [Option<EntryKey>; BUCKET_COUNT],
    entries: &'a SlotMap<EntryKey, Entry<K, V>>,
    bucket: usize,
    cursor: Option<EntryKey>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cursor {
                let entries = self.entries;
                let entry = &entries[k];
                self.cursor = entry.next;
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            if self.bucket == BUCKET_COUNT {
                return None;
            }
            self.cursor = self.buckets[self.bucket];
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Iterator over the keys of a [`ChainedHashMap`].
pub struct Keys<'a, K, V> {
    it: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, _v)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
