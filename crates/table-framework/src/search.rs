//! # Parallel Ordering & Search
//!
//! Sorting and lookup over a *snapshot* of a table. Nothing here touches a live table, so
//! the parallel region never races with a writer.
//!
//! ## Sort
//!
//! [`parallel_quicksort`] partitions around the element in the last slot, after moving the
//! median of first/middle/last there. The partition is three-way, so runs of equal keys are
//! settled in one pass. The two outer parts are disjoint sub-slices (`split_at_mut`), sorted
//! as fork-join tasks on scoped threads with no locking; the scope is the join barrier. Once
//! the spawn budget (derived from available parallelism) is spent, the current thread recurses
//! into the smaller part and loops on the larger one.
//!
//! ## Search
//!
//! [`parallel_binary_search`] splits the sorted slice into one window per worker. Each worker
//! binary-searches its own window; the worker that finds the key writes the index into a
//! mutex-guarded slot. With unique keys at most one worker can match.
//!
//! [`SortedSnapshot`] ties the two together: it can only be built by sorting on the entity's
//! key, so searching it by key is always valid.

use crate::entity::{entity_name, TableEntity};
use crate::error::TableError;
use std::sync::{Mutex, PoisonError};
use std::thread;
use tracing::debug;

/// Number of workers used when none is configured.
pub fn default_workers() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

/// Runs a sort or search on Tokio's blocking pool.
///
/// Both block on scoped threads, which must not happen on an async worker thread.
pub async fn run_blocking<R, F>(job: F) -> Result<R, TableError>
where
    R: Send + 'static,
    F: FnOnce() -> R + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| TableError::BlockingTask(e.to_string()))
}

/// How many levels of the recursion may fork, so that at most ~2× the available cores are
/// busy at once.
fn spawn_depth() -> u32 {
    let cores = default_workers();
    usize::BITS - cores.saturating_sub(1).leading_zeros() + 1
}

/// Sorts `items` ascending by `key` using fork-join quicksort.
///
/// Items with equal keys may be reordered.
pub fn parallel_quicksort<T, K, F>(items: &mut [T], key: F)
where
    T: Send,
    K: PartialOrd,
    F: Fn(&T) -> K + Sync,
{
    quicksort(items, &key, spawn_depth());
}

fn quicksort<T, K, F>(mut items: &mut [T], key: &F, mut depth: u32)
where
    T: Send,
    K: PartialOrd,
    F: Fn(&T) -> K + Sync,
{
    // Past the fork budget only the smaller side recurses, so the stack stays O(log n).
    while items.len() >= 2 {
        let (less, greater) = partition(items, key);
        let current = std::mem::take(&mut items);
        let (left, rest) = current.split_at_mut(less);
        let right = &mut rest[greater - less..];
        let (smaller, larger) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };

        if depth > 0 && smaller.len() >= 2 {
            depth -= 1;
            thread::scope(|scope| {
                scope.spawn(move || quicksort(smaller, key, depth));
                quicksort(larger, key, depth);
            });
            return;
        }

        quicksort(smaller, key, depth);
        items = larger;
    }
}

/// Moves the median of the first, middle and last elements into the last slot.
fn median_to_last<T, K, F>(items: &mut [T], key: &F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let (first, mid, last) = (0, items.len() / 2, items.len() - 1);
    if key(&items[mid]) < key(&items[first]) {
        items.swap(first, mid);
    }
    if key(&items[last]) < key(&items[first]) {
        items.swap(first, last);
    }
    if key(&items[mid]) < key(&items[last]) {
        items.swap(mid, last);
    }
}

/// Three-way partition around the last element.
///
/// Returns `(less, greater)`: `items[..less]` sorts before the pivot, `items[greater..]`
/// after it, and everything in between compares equal to it.
fn partition<T, K, F>(items: &mut [T], key: &F) -> (usize, usize)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    median_to_last(items, key);
    let pivot = key(&items[items.len() - 1]);
    let (mut less, mut index, mut greater) = (0, 0, items.len());
    while index < greater {
        let current = key(&items[index]);
        if current < pivot {
            items.swap(less, index);
            less += 1;
            index += 1;
        } else if current > pivot {
            greater -= 1;
            items.swap(index, greater);
        } else {
            index += 1;
        }
    }
    (less, greater)
}

/// Finds the index of `target` in `items`, which must be sorted ascending by `key`.
///
/// Returns `None` when the key is absent (including on an empty slice).
pub fn parallel_binary_search<T, K, F>(
    items: &[T],
    target: &K,
    key: F,
    workers: usize,
) -> Option<usize>
where
    T: Sync,
    K: Ord + Sync,
    F: Fn(&T) -> K + Sync,
{
    if items.is_empty() {
        return None;
    }

    let workers = workers.clamp(1, items.len());
    if workers == 1 {
        return binary_search_window(items, target, &key);
    }

    let window = items.len().div_ceil(workers);
    let found = Mutex::new(None);
    thread::scope(|scope| {
        for (worker, chunk) in items.chunks(window).enumerate() {
            let found = &found;
            let key = &key;
            scope.spawn(move || {
                if let Some(offset) = binary_search_window(chunk, target, key) {
                    let mut slot = found.lock().unwrap_or_else(PoisonError::into_inner);
                    *slot = Some(worker * window + offset);
                }
            });
        }
    });
    found.into_inner().unwrap_or_else(PoisonError::into_inner)
}

fn binary_search_window<T, K, F>(items: &[T], target: &K, key: &F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match key(&items[mid]).cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    None
}

/// A snapshot sorted ascending by the entity key.
#[derive(Debug, Clone)]
pub struct SortedSnapshot<T: TableEntity> {
    items: Vec<T>,
    workers: usize,
}

impl<T: TableEntity> SortedSnapshot<T> {
    /// Sorts `items` by key with [`parallel_quicksort`].
    pub fn by_key(mut items: Vec<T>) -> Self {
        debug!(entity_type = entity_name::<T>(), size = items.len(), "Sorting by key");
        parallel_quicksort(&mut items, T::key);
        Self {
            items,
            workers: default_workers(),
        }
    }

    /// Sets the number of search workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Index of the record with `key`, or `None`.
    pub fn search(&self, key: T::Key) -> Option<usize> {
        let index = parallel_binary_search(&self.items, &key, T::key, self.workers);
        debug!(entity_type = entity_name::<T>(), %key, ?index, "Search");
        index
    }

    /// The record with `key`, or `None`.
    pub fn find(&self, key: T::Key) -> Option<&T> {
        self.search(key).map(|index| &self.items[index])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Deterministic shuffle (xorshift) so the fixed-size cases need no RNG crate.
    fn shuffled(n: usize, seed: u64) -> Vec<i64> {
        let mut values: Vec<i64> = (0..n as i64).map(|v| v * 3 - 7).collect();
        let mut state = seed | 1;
        for i in (1..values.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            values.swap(i, (state % (i as u64 + 1)) as usize);
        }
        values
    }

    #[test]
    fn sort_matches_sequential_sort_for_reference_sizes() {
        for n in [0, 1, 2, 50, 1000] {
            let mut values = shuffled(n, 0x5eed + n as u64);
            let mut expected = values.clone();
            expected.sort_unstable();
            parallel_quicksort(&mut values, |v| *v);
            assert_eq!(values, expected, "n = {n}");
        }
    }

    #[test]
    fn sort_handles_already_sorted_and_reversed_input() {
        let mut ascending: Vec<i32> = (0..1000).collect();
        let mut descending: Vec<i32> = (0..1000).rev().collect();
        parallel_quicksort(&mut ascending, |v| *v);
        parallel_quicksort(&mut descending, |v| *v);
        assert_eq!(ascending, descending);
        assert!(ascending.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sort_by_float_field() {
        let mut prices = vec![(1, 9.5), (2, 0.25), (3, 4.0), (4, 0.25)];
        parallel_quicksort(&mut prices, |p| p.1);
        let ordered: Vec<f64> = prices.iter().map(|p| p.1).collect();
        assert_eq!(ordered, vec![0.25, 0.25, 4.0, 9.5]);
    }

    #[test]
    fn search_finds_every_key_at_its_index() {
        let values: Vec<i32> = (0..257).map(|v| v * 2).collect();
        for workers in [1, 2, 3, 8, 1000] {
            for (index, value) in values.iter().enumerate() {
                assert_eq!(
                    parallel_binary_search(&values, value, |v| *v, workers),
                    Some(index)
                );
            }
        }
    }

    #[test]
    fn search_misses_return_none() {
        let values: Vec<i32> = (0..100).map(|v| v * 2).collect();
        for missing in [-1, 1, 99, 199, 1000] {
            assert_eq!(parallel_binary_search(&values, &missing, |v| *v, 4), None);
        }
        let empty: Vec<i32> = Vec::new();
        assert_eq!(parallel_binary_search(&empty, &0, |v| *v, 4), None);
    }

    #[test]
    fn sort_survives_large_runs_of_equal_keys() {
        let mut prices = vec![2.5f64; 200_000];
        parallel_quicksort(&mut prices, |p| *p);
        assert!(prices.iter().all(|p| *p == 2.5));

        let mut mixed: Vec<i32> = (0..200_000).map(|v| v % 3).collect();
        parallel_quicksort(&mut mixed, |v| *v);
        assert!(mixed.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sort_survives_large_presorted_input() {
        let mut ascending: Vec<i64> = (0..200_000).collect();
        parallel_quicksort(&mut ascending, |v| *v);
        assert!(ascending.windows(2).all(|w| w[0] < w[1]));

        let mut descending: Vec<i64> = (0..200_000).rev().collect();
        parallel_quicksort(&mut descending, |v| *v);
        assert_eq!(descending, ascending);
    }

    proptest! {
        #[test]
        fn sort_agrees_with_std(mut values in prop::collection::vec(any::<i32>(), 0..400)) {
            let mut expected = values.clone();
            expected.sort_unstable();
            parallel_quicksort(&mut values, |v| *v);
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn sorted_unique_keys_are_found(
            keys in prop::collection::btree_set(-10_000i32..10_000, 0..300),
            workers in 1usize..9,
            probe in -10_000i32..10_000,
        ) {
            let mut values: Vec<i32> = keys.iter().rev().copied().collect();
            parallel_quicksort(&mut values, |v| *v);
            for (index, key) in values.iter().enumerate() {
                prop_assert_eq!(parallel_binary_search(&values, key, |v| *v, workers), Some(index));
            }
            let expected = values.binary_search(&probe).ok();
            prop_assert_eq!(parallel_binary_search(&values, &probe, |v| *v, workers), expected);
        }
    }
}
