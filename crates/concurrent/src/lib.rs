//! Thread-safe ordered containers.
//!
//! [`ConcurrentOrderedMap`] couples a [`BTreeMap`](std::collections::BTreeMap)
//! with a single reader/writer lock. Every operation takes the lock for its
//! own duration only, so compound read-then-write sequences must go through
//! [`ConcurrentOrderedMap::with_mut`] or a write guard to stay atomic.

pub mod map;

pub use map::ConcurrentOrderedMap;
