//! # Bucket Hash Functions
//!
//! Two key-to-bucket mappings are available and each record kind picks one in
//! [`TableEntity::bucket_index`](crate::TableEntity::bucket_index):
//!
//! - [`mid_square`] squares the key and keeps a slice of middle bits, which spreads
//!   sequential ids across buckets instead of walking them one by one.
//! - [`modulo`] is the plain remainder.
//!
//! Both are total over `i32`. Negative keys are well defined: the square of a negative key
//! is positive, and [`modulo`] uses the Euclidean remainder, so `-1` lands in the last bucket.

/// Number of buckets every table starts with unless configured otherwise.
pub const DEFAULT_BUCKETS: usize = 64;

/// Bit offset of the slice taken from the squared key.
const MID_SQUARE_SHIFT: u32 = 10;
/// Width of the slice taken from the squared key (64 distinct values).
const MID_SQUARE_BITS: u32 = 6;

/// Mid-square hash: `((key²) >> 10) & 0b11_1111`, reduced modulo `bucket_count`.
///
/// # Panics
/// Panics if `bucket_count` is zero.
pub fn mid_square(key: i32, bucket_count: usize) -> usize {
    assert!(bucket_count > 0, "bucket_count must be non-zero");
    // |i32::MIN|² = 2^62, so the square always fits in an i64 and is never negative.
    let square = (i64::from(key) * i64::from(key)) as u64;
    let mid_bits = (square >> MID_SQUARE_SHIFT) & ((1 << MID_SQUARE_BITS) - 1);
    (mid_bits as usize) % bucket_count
}

/// Modulo hash using the Euclidean remainder, so negative keys map into range as well.
///
/// # Panics
/// Panics if `bucket_count` is zero.
pub fn modulo(key: i32, bucket_count: usize) -> usize {
    assert!(bucket_count > 0, "bucket_count must be non-zero");
    i64::from(key).rem_euclid(bucket_count as i64) as usize
}
