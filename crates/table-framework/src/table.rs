//! # Chained Hash Table
//!
//! `HashTable<T>` is the storage engine behind every store: a fixed number of buckets, each
//! owning a chain of the records whose keys hash to it. New records are prepended, so a
//! chain always lists its most recent insert first.
//!
//! Mutation takes `&mut self`, so the borrow checker enforces the single-writer rule; there
//! is no internal locking. Lookups that cross tables (a menu checking its foods) receive the
//! other table through the entity's [`Context`](crate::TableEntity::Context).

use crate::entity::{entity_name, TableEntity};
use crate::error::TableError;
use crate::search::SortedSnapshot;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// A chained hash table keyed by `T::Key`.
///
/// ## Operations
///
/// * **Insert**: rejects a key that is already stored, builds the record with
///   `T::from_create_params`, runs `on_create` against the context, then prepends the
///   record to its bucket.
/// * **Get**: walks the target bucket's chain.
/// * **Update**: runs `on_update` on a copy and swaps the copy in only on success.
/// * **Remove**: unlinks the record from its chain and hands it back. Nothing referencing
///   the key elsewhere is touched.
/// * **Snapshot**: owned copy of every record, bucket order then chain order.
#[derive(Debug, Clone)]
pub struct HashTable<T: TableEntity> {
    buckets: Vec<VecDeque<T>>,
    len: usize,
}

impl<T: TableEntity> HashTable<T> {
    /// Creates a table with `bucket_count` empty buckets.
    ///
    /// A store cannot run without its buckets, so this never reports failure: allocation
    /// failure aborts the process, and a zero bucket count is a programming error.
    ///
    /// # Panics
    /// Panics if `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "a table needs at least one bucket");
        let buckets = (0..bucket_count).map(|_| VecDeque::new()).collect();
        debug!(entity_type = entity_name::<T>(), bucket_count, "Table created");
        Self { buckets, len: 0 }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket a key hashes to.
    pub fn bucket_of(&self, key: T::Key) -> usize {
        let index = T::bucket_index(key, self.buckets.len());
        debug_assert!(index < self.buckets.len(), "bucket index out of range");
        index
    }

    /// Inserts a new record under `key`.
    ///
    /// Fails with [`TableError::DuplicateKey`] if the key is taken, or with whatever the
    /// entity's validation returns. The table is unchanged on failure.
    pub fn insert(
        &mut self,
        key: T::Key,
        params: T::Create,
        ctx: T::Context<'_>,
    ) -> Result<T::Key, T::Error> {
        let entity_type = entity_name::<T>();
        debug!(entity_type, %key, ?params, "Insert");

        if self.contains(key) {
            warn!(entity_type, %key, "Duplicate key");
            return Err(TableError::DuplicateKey(key.to_string()).into());
        }

        let item = T::from_create_params(key, params).map_err(|e| {
            warn!(entity_type, %key, error = %e, "Insert rejected");
            e
        })?;
        if let Err(e) = item.on_create(ctx) {
            warn!(entity_type, %key, error = %e, "on_create failed");
            return Err(e);
        }

        let index = self.bucket_of(key);
        self.buckets[index].push_front(item);
        self.len += 1;
        info!(entity_type, %key, bucket = index, size = self.len, "Inserted");
        Ok(key)
    }

    /// Looks up a record by key.
    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|item| item.key() == key)
    }

    pub fn contains(&self, key: T::Key) -> bool {
        self.get(key).is_some()
    }

    /// Applies `update` to the record stored under `key` and returns the new state.
    pub fn update(
        &mut self,
        key: T::Key,
        update: T::Update,
        ctx: T::Context<'_>,
    ) -> Result<&T, T::Error> {
        let entity_type = entity_name::<T>();
        debug!(entity_type, %key, ?update, "Update");

        let index = self.bucket_of(key);
        let Some(slot) = self.buckets[index].iter_mut().find(|item| item.key() == key) else {
            warn!(entity_type, %key, "Not found");
            return Err(TableError::NotFound(key.to_string()).into());
        };

        let mut next = slot.clone();
        if let Err(e) = next.on_update(update, ctx) {
            warn!(entity_type, %key, error = %e, "Update failed");
            return Err(e);
        }
        debug_assert!(next.key() == key, "on_update must not change the key");
        *slot = next;
        info!(entity_type, %key, "Updated");
        Ok(&*slot)
    }

    /// Unlinks the record stored under `key` and returns it.
    pub fn remove(&mut self, key: T::Key) -> Result<T, T::Error> {
        let entity_type = entity_name::<T>();
        let index = self.bucket_of(key);
        let chain = &mut self.buckets[index];
        let Some(position) = chain.iter().position(|item| item.key() == key) else {
            warn!(entity_type, %key, "Not found");
            return Err(TableError::NotFound(key.to_string()).into());
        };

        let removed = chain.remove(position).ok_or_else(|| TableError::NotFound(key.to_string()))?;
        self.len -= 1;
        info!(entity_type, %key, size = self.len, "Deleted");
        Ok(removed)
    }

    /// Total number of records across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates records in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buckets.iter().flatten()
    }

    /// Non-empty buckets with their chains, in bucket order.
    pub fn chains(&self) -> impl Iterator<Item = (usize, &VecDeque<T>)> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, chain)| !chain.is_empty())
    }

    /// Owned copy of every record. Mutating the copy never affects the table.
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Snapshot sorted by key, ready for binary search.
    pub fn sorted_by_key(&self) -> SortedSnapshot<T> {
        SortedSnapshot::by_key(self.snapshot())
    }

    /// Drops every record and the bucket array, returning how many records were released.
    ///
    /// Consumes the table, so it cannot be used afterwards.
    pub fn release(self) -> usize {
        let released = self.len;
        info!(entity_type = entity_name::<T>(), released, "Table released");
        released
    }
}

impl<T: TableEntity> Default for HashTable<T> {
    fn default() -> Self {
        Self::new(crate::hashing::DEFAULT_BUCKETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::modulo;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: i32,
        label: String,
    }

    #[derive(Debug)]
    struct TagUpdate {
        label: String,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum TagError {
        #[error(transparent)]
        Table(#[from] TableError),
        #[error("empty label")]
        EmptyLabel,
        #[error("label {0} is reserved")]
        Reserved(String),
    }

    /// Labels listed in the context are refused on create.
    impl TableEntity for Tag {
        type Key = i32;
        type Create = String;
        type Update = TagUpdate;
        type Context<'a> = &'a [&'a str];
        type Error = TagError;

        fn key(&self) -> i32 {
            self.id
        }

        fn bucket_index(key: i32, bucket_count: usize) -> usize {
            modulo(key, bucket_count)
        }

        fn from_create_params(id: i32, label: String) -> Result<Self, TagError> {
            if label.is_empty() {
                return Err(TagError::EmptyLabel);
            }
            Ok(Self { id, label })
        }

        fn on_create(&self, reserved: Self::Context<'_>) -> Result<(), TagError> {
            if reserved.contains(&self.label.as_str()) {
                return Err(TagError::Reserved(self.label.clone()));
            }
            Ok(())
        }

        fn on_update(&mut self, update: TagUpdate, _: Self::Context<'_>) -> Result<(), TagError> {
            if update.label.is_empty() {
                return Err(TagError::EmptyLabel);
            }
            self.label = update.label;
            Ok(())
        }
    }

    const NONE: &[&str] = &[];

    fn tag(id: i32, label: &str) -> Tag {
        Tag { id, label: label.to_string() }
    }

    #[test]
    fn insert_then_get_returns_record() {
        let mut table = HashTable::<Tag>::new(8);
        assert_eq!(table.insert(3, "red".into(), NONE), Ok(3));
        assert_eq!(table.get(3), Some(&tag(3, "red")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn duplicate_insert_keeps_original() {
        let mut table = HashTable::<Tag>::new(8);
        table.insert(3, "red".into(), NONE).unwrap();
        let err = table.insert(3, "blue".into(), NONE).unwrap_err();
        assert_eq!(err, TagError::Table(TableError::DuplicateKey("3".into())));
        assert_eq!(table.get(3).unwrap().label, "red");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn rejected_create_leaves_table_empty() {
        let mut table = HashTable::<Tag>::new(8);
        assert_eq!(table.insert(1, String::new(), NONE), Err(TagError::EmptyLabel));
        assert_eq!(
            table.insert(1, "admin".into(), &["admin"]),
            Err(TagError::Reserved("admin".into()))
        );
        assert!(table.is_empty());
        assert!(table.get(1).is_none());
    }

    #[test]
    fn colliding_keys_are_chained_most_recent_first() {
        let mut table = HashTable::<Tag>::new(4);
        for id in [1, 5, 9] {
            table.insert(id, format!("t{id}"), NONE).unwrap();
        }
        let chains: Vec<_> = table.chains().collect();
        assert_eq!(chains.len(), 1);
        let (bucket, chain) = &chains[0];
        assert_eq!(*bucket, 1);
        let ids: Vec<i32> = chain.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![9, 5, 1]);
    }

    #[test]
    fn snapshot_follows_bucket_then_chain_order() {
        let mut table = HashTable::<Tag>::new(4);
        for id in [2, 1, 6, 0] {
            table.insert(id, format!("t{id}"), NONE).unwrap();
        }
        let ids: Vec<i32> = table.snapshot().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 6, 2]);
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let mut table = HashTable::<Tag>::new(4);
        table.insert(1, "red".into(), NONE).unwrap();
        let mut copy = table.snapshot();
        copy[0].label = "changed".into();
        assert_eq!(table.get(1).unwrap().label, "red");
    }

    #[test]
    fn failed_update_is_not_partially_applied() {
        let mut table = HashTable::<Tag>::new(4);
        table.insert(1, "red".into(), NONE).unwrap();
        let err = table.update(1, TagUpdate { label: String::new() }, NONE);
        assert_eq!(err.unwrap_err(), TagError::EmptyLabel);
        assert_eq!(table.get(1).unwrap().label, "red");

        let updated = table.update(1, TagUpdate { label: "green".into() }, NONE).unwrap();
        assert_eq!(updated.label, "green");
    }

    #[test]
    fn missing_key_update_and_remove_fail_with_not_found() {
        let mut table = HashTable::<Tag>::new(4);
        let not_found = TagError::Table(TableError::NotFound("42".into()));
        assert_eq!(
            table.update(42, TagUpdate { label: "x".into() }, NONE).unwrap_err(),
            not_found
        );
        assert_eq!(table.remove(42).unwrap_err(), not_found);
    }

    #[test]
    fn remove_unlinks_from_middle_of_chain() {
        let mut table = HashTable::<Tag>::new(4);
        for id in [1, 5, 9] {
            table.insert(id, format!("t{id}"), NONE).unwrap();
        }
        assert_eq!(table.remove(5).unwrap(), tag(5, "t5"));
        assert!(table.get(5).is_none());
        assert!(table.get(1).is_some());
        assert!(table.get(9).is_some());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn negative_keys_are_stored_and_found() {
        let mut table = HashTable::<Tag>::new(64);
        table.insert(-1, "neg".into(), NONE).unwrap();
        assert_eq!(table.bucket_of(-1), 63);
        assert_eq!(table.get(-1).unwrap().label, "neg");
    }

    #[test]
    fn release_reports_record_count() {
        let mut table = HashTable::<Tag>::new(4);
        for id in 0..10 {
            table.insert(id, format!("t{id}"), NONE).unwrap();
        }
        assert_eq!(table.release(), 10);
    }

    #[test]
    #[should_panic(expected = "at least one bucket")]
    fn zero_buckets_panics() {
        let _ = HashTable::<Tag>::new(0);
    }
}
