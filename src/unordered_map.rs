//! Chained hash map over a generational node arena.
//!
//! Layout: entry nodes live in a `SlotMap` and form one global
//! doubly-linked sequence terminated by a shared sentinel node. A bucket
//! array layered on top stores `(head, tail)` chain boundaries per bucket;
//! each key lives in exactly one bucket, `hash(key) % bucket_count`. Because
//! the per-bucket chains concatenate into the one global sequence, a full
//! scan from `begin` to `end` visits every entry exactly once — bucket
//! index first, insertion order within a bucket — without per-bucket
//! re-dispatch.
//!
//! `rehash` builds a fresh map and swaps storage wholesale, so observers
//! never see a partially rehashed map. All cursors are invalidated by a
//! rehash: afterwards they may resolve to nothing or to an arbitrary entry
//! of the rebuilt map, but never dangle.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

use slotmap::{DefaultKey, SlotMap};

use crate::config::{MAP_DEFAULT_MAX_LOAD_FACTOR, MAP_GROWTH_FACTOR, MAP_INIT_BUCKET_COUNT};
use crate::error::ContainerError;

const CONTAINER: &str = "UnorderedMap";

#[derive(Debug)]
struct MapNode<K, V> {
    /// `None` only for the sentinel.
    entry: Option<(K, V)>,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

/// Chain boundaries of one bucket within the global sequence.
#[derive(Copy, Clone, Debug, Default)]
struct Bucket {
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

/// A position within an `UnorderedMap`, bound to an entry's identity.
///
/// Stays valid while its entry lives; erasing the entry makes the cursor
/// stale (detected by the arena's generation), and `rehash` invalidates all
/// cursors wholesale.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MapCursor(DefaultKey);

impl MapCursor {
    pub fn key<'a, K, V, S>(&self, map: &'a UnorderedMap<K, V, S>) -> Option<&'a K> {
        map.nodes
            .get(self.0)
            .and_then(|n| n.entry.as_ref())
            .map(|(k, _)| k)
    }

    pub fn value<'a, K, V, S>(&self, map: &'a UnorderedMap<K, V, S>) -> Option<&'a V> {
        map.nodes
            .get(self.0)
            .and_then(|n| n.entry.as_ref())
            .map(|(_, v)| v)
    }

    pub fn value_mut<'a, K, V, S>(&self, map: &'a mut UnorderedMap<K, V, S>) -> Option<&'a mut V> {
        map.nodes
            .get_mut(self.0)
            .and_then(|n| n.entry.as_mut())
            .map(|(_, v)| v)
    }

    /// Step towards `end` along the global sequence.
    pub fn next<K, V, S>(
        &self,
        map: &UnorderedMap<K, V, S>,
    ) -> Result<MapCursor, ContainerError> {
        let node = map
            .nodes
            .get(self.0)
            .ok_or(ContainerError::invalid_iterator(CONTAINER))?;
        node.next
            .map(MapCursor)
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    /// Step towards `begin` along the global sequence.
    pub fn prev<K, V, S>(
        &self,
        map: &UnorderedMap<K, V, S>,
    ) -> Result<MapCursor, ContainerError> {
        let node = map
            .nodes
            .get(self.0)
            .ok_or(ContainerError::invalid_iterator(CONTAINER))?;
        node.prev
            .map(MapCursor)
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }
}

pub struct UnorderedMap<K, V, S = RandomState> {
    nodes: SlotMap<DefaultKey, MapNode<K, V>>,
    buckets: Vec<Bucket>,
    /// First node in global order; the sentinel when empty.
    head: DefaultKey,
    /// Shared terminal node; `entry` is `None` and `next` is `None`.
    sentinel: DefaultKey,
    len: usize,
    max_load_factor: f64,
    hasher: S,
}

impl<K, V> UnorderedMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_bucket_count(MAP_INIT_BUCKET_COUNT)
    }
}

impl<K, V, S> UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self::with_bucket_count_and_hasher(bucket_count, S::default())
    }
}

impl<K, V, S> UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_bucket_count_and_hasher(MAP_INIT_BUCKET_COUNT, hasher)
    }

    pub fn with_bucket_count_and_hasher(bucket_count: usize, hasher: S) -> Self {
        let mut nodes = SlotMap::with_key();
        let sentinel = nodes.insert(MapNode {
            entry: None,
            prev: None,
            next: None,
        });
        Self {
            nodes,
            buckets: vec![Bucket::default(); bucket_count.max(1)],
            head: sentinel,
            sentinel,
            len: 0,
            max_load_factor: MAP_DEFAULT_MAX_LOAD_FACTOR,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    pub fn begin(&self) -> MapCursor {
        MapCursor(self.head)
    }

    pub fn end(&self) -> MapCursor {
        MapCursor(self.sentinel)
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.bucket_count() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Set the max load factor; growth is re-examined on the next insert.
    pub fn set_max_load_factor(&mut self, factor: f64) -> Result<(), ContainerError> {
        if !(factor > 0.0) {
            return Err(ContainerError::InvalidLoadFactor { value: factor });
        }
        self.max_load_factor = factor;
        Ok(())
    }

    /// Insert `(key, value)`. A duplicate key is a normal outcome, not an
    /// error: the existing entry keeps its value and is returned with
    /// `false`. Growth to keep `load_factor <= max_load_factor` happens
    /// before the insert completes.
    pub fn insert(&mut self, key: K, value: V) -> (MapCursor, bool) {
        if let Some(existing) = self.find_node(&key) {
            return (MapCursor(existing), false);
        }
        if (self.len + 1) as f64 / self.bucket_count() as f64 > self.max_load_factor {
            self.rehash(self.bucket_count() * MAP_GROWTH_FACTOR);
        }
        let bucket = self.bucket_of(&key);
        let node = self.link_into_bucket(bucket, (key, value));
        (MapCursor(node), true)
    }

    /// Cursor to `query`'s entry, or the `end` cursor when absent. Walks
    /// only the target bucket's chain.
    pub fn find<Q>(&self, query: &Q) -> MapCursor
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_node(query)
            .map(MapCursor)
            .unwrap_or_else(|| self.end())
    }

    pub fn contains_key<Q>(&self, query: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_node(query).is_some()
    }

    pub fn get<Q>(&self, query: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.find_node(query)?;
        self.nodes[node].entry.as_ref().map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, query: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.find_node(query)?;
        self.nodes[node].entry.as_mut().map(|(_, v)| v)
    }

    /// Checked mapped-value access; OutOfRange when the key is absent.
    pub fn at<Q>(&self, query: &Q) -> Result<&V, ContainerError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(query)
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    pub fn at_mut<Q>(&mut self, query: &Q) -> Result<&mut V, ContainerError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_mut(query)
            .ok_or(ContainerError::out_of_range(CONTAINER))
    }

    /// Mapped value for `key`, inserting a default-constructed one first
    /// when absent.
    pub fn entry_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let node = match self.find_node(&key) {
            Some(node) => node,
            None => {
                let (cursor, inserted) = self.insert(key, V::default());
                debug_assert!(inserted);
                cursor.0
            }
        };
        self.nodes[node]
            .entry
            .as_mut()
            .map(|(_, v)| v)
            .expect("value node")
    }

    /// Remove the entry at `cursor`, fixing its bucket's chain boundaries;
    /// returns the cursor past it in global order. Stale and `end` cursors
    /// are InvalidIterator.
    pub fn erase(&mut self, cursor: MapCursor) -> Result<MapCursor, ContainerError> {
        let node = self
            .nodes
            .get(cursor.0)
            .ok_or(ContainerError::invalid_iterator(CONTAINER))?;
        let (key, _) = node
            .entry
            .as_ref()
            .ok_or(ContainerError::invalid_iterator(CONTAINER))?;
        let bucket = self.bucket_of(key);

        let node = self.nodes.remove(cursor.0).expect("checked above");
        let next = node.next.expect("value node links to the sentinel");
        match node.prev {
            Some(p) => self.nodes[p].next = Some(next),
            None => self.head = next,
        }
        self.nodes[next].prev = node.prev;

        let b = &mut self.buckets[bucket];
        if b.head == Some(cursor.0) && b.tail == Some(cursor.0) {
            *b = Bucket::default();
        } else if b.head == Some(cursor.0) {
            b.head = Some(next);
        } else if b.tail == Some(cursor.0) {
            b.tail = node.prev;
        }
        self.len -= 1;
        Ok(MapCursor(next))
    }

    /// Remove by key; returns the number of entries erased (0 or 1).
    pub fn erase_key<Q>(&mut self, query: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.find_node(query) {
            Some(node) => {
                self.erase(MapCursor(node)).expect("live node");
                1
            }
            None => 0,
        }
    }

    /// Rebuild with `bucket_count` buckets by reinserting every entry into
    /// a fresh map, then swap storage wholesale. Invalidates all cursors.
    pub fn rehash(&mut self, bucket_count: usize) {
        let mut fresh = Self::with_bucket_count_and_hasher(bucket_count, self.hasher.clone());
        fresh.max_load_factor = self.max_load_factor;
        let mut cur = self.head;
        while cur != self.sentinel {
            let node = self.nodes.get_mut(cur).expect("chain node");
            let (key, value) = node.entry.take().expect("value node");
            cur = node.next.expect("value node links to the sentinel");
            fresh.insert(key, value);
        }
        core::mem::swap(self, &mut fresh);
    }

    /// Grow the bucket array so `additional_total` entries fit within the
    /// max load factor.
    pub fn reserve(&mut self, additional_total: usize) {
        let needed = (additional_total as f64 / self.max_load_factor).ceil() as usize;
        if needed > self.bucket_count() {
            self.rehash(needed);
        }
    }

    /// Drop every entry; bucket count is unchanged.
    pub fn clear(&mut self) {
        self.nodes.clear();
        let sentinel = self.nodes.insert(MapNode {
            entry: None,
            prev: None,
            next: None,
        });
        self.head = sentinel;
        self.sentinel = sentinel;
        self.buckets.fill(Bucket::default());
        self.len = 0;
    }

    /// O(1) exchange of storage with `other`; the primitive under rehash.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Iterate all entries in global order: bucket index, then insertion
    /// order within the bucket. The order is not meaningful across
    /// rehashes.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
        }
    }

    fn bucket_of<Q>(&self, query: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        (self.hasher.hash_one(query) % self.bucket_count() as u64) as usize
    }

    fn find_node<Q>(&self, query: &Q) -> Option<DefaultKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let bucket = self.buckets[self.bucket_of(query)];
        let mut cur = bucket.head?;
        loop {
            let node = &self.nodes[cur];
            let (key, _) = node.entry.as_ref().expect("bucket chains hold value nodes");
            if key.borrow() == query {
                return Some(cur);
            }
            if Some(cur) == bucket.tail {
                return None;
            }
            cur = node.next.expect("value node links to the sentinel");
        }
    }

    /// Link a fresh node at `bucket`'s chain tail. The global predecessor
    /// is the bucket's tail, or the nearest preceding non-empty bucket's
    /// tail when this bucket is empty.
    fn link_into_bucket(&mut self, bucket: usize, entry: (K, V)) -> DefaultKey {
        let prev = self.buckets[bucket]
            .tail
            .or_else(|| self.buckets[..bucket].iter().rev().find_map(|b| b.tail));
        let next = match prev {
            Some(p) => self.nodes[p].next.expect("value node links onward"),
            None => self.head,
        };
        let new = self.nodes.insert(MapNode {
            entry: Some(entry),
            prev,
            next: Some(next),
        });
        self.nodes[next].prev = Some(new);
        match prev {
            Some(p) => self.nodes[p].next = Some(new),
            None => self.head = new,
        }
        let b = &mut self.buckets[bucket];
        if b.head.is_none() {
            b.head = Some(new);
        }
        b.tail = Some(new);
        self.len += 1;
        new
    }
}

impl<K, V, S> Default for UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn default() -> Self {
        Self::with_bucket_count(MAP_INIT_BUCKET_COUNT)
    }
}

impl<K, V, S> Clone for UnorderedMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut fresh =
            Self::with_bucket_count_and_hasher(self.bucket_count(), self.hasher.clone());
        fresh.max_load_factor = self.max_load_factor;
        for (k, v) in self.iter() {
            fresh.insert(k.clone(), v.clone());
        }
        fresh
    }
}

impl<K, V, S> core::fmt::Debug for UnorderedMap<K, V, S>
where
    K: Eq + Hash + core::fmt::Debug,
    V: core::fmt::Debug,
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> PartialEq for UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |ov| ov == v))
    }
}

impl<K, V, S> FromIterator<(K, V)> for UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_bucket_count(MAP_INIT_BUCKET_COUNT);
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for UnorderedMap<K, V>
where
    K: Eq + Hash,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Iterator over entries in global (bucket, then insertion) order.
pub struct Iter<'a, K, V> {
    nodes: &'a SlotMap<DefaultKey, MapNode<K, V>>,
    cur: DefaultKey,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cur)?;
        let (k, v) = node.entry.as_ref()?;
        self.cur = node.next.expect("value node links to the sentinel");
        Some((k, v))
    }
}

impl<'a, K, V, S> IntoIterator for &'a UnorderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
