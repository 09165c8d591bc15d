//! Terminal consumption of sequences.
//!
//! Both pipeline families are consumed through the same functions, which
//! only ever see an [`Enumerable`]. Whatever difference shows up between a
//! lazy chain and a materialized array comes from how elements are
//! produced, never from how they are visited.
//!
//! - [`take_first`] stops after `k` elements. On a lazy chain, elements
//!   past the `k`-th match are never produced.
//! - [`consume_twice`] visits everything, then everything again. On a lazy
//!   chain, the second visit re-runs every stage.

use crate::lazy::{Cursor, Enumerable};
use std::hint::black_box;

/// Sink for consumed elements.
///
/// Every element handed to the consumer goes through
/// [`black_box`] so the optimizer cannot skip producing it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Consumer {
    consumed: u64,
}

impl Consumer {
    /// Creates a consumer that has seen nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts one element.
    #[inline]
    pub fn consume<T>(&mut self, item: T) {
        black_box(item);
        self.consumed += 1;
    }

    /// Returns the number of elements accepted so far.
    #[must_use]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Forgets everything accepted so far.
    pub fn reset(&mut self) {
        self.consumed = 0;
    }
}

/// Collects at most the first `k` elements of a fresh enumeration of `seq`.
///
/// A `k` larger than the sequence yields everything and returns normally.
/// A `k` of zero pulls nothing.
pub fn take_first<E>(seq: &E, k: usize, consumer: &mut Consumer) -> Vec<E::Item>
where
    E: Enumerable + ?Sized,
{
    let mut taken = Vec::with_capacity(k.min(64));
    if k == 0 {
        return taken;
    }

    let mut cursor = seq.cursor();
    while let Some(item) = cursor.try_next() {
        consumer.consume(&item);
        taken.push(item);
        if taken.len() >= k {
            break;
        }
    }
    taken
}

/// Visits every element of one fresh enumeration of `seq`.
///
/// Returns the number of elements visited.
pub fn consume_all<E>(seq: &E, consumer: &mut Consumer) -> usize
where
    E: Enumerable + ?Sized,
{
    let mut visited = 0;
    let mut cursor = seq.cursor();
    while let Some(item) = cursor.try_next() {
        consumer.consume(item);
        visited += 1;
    }
    visited
}

/// Visits every element of `seq`, then does it again.
///
/// Returns the total number of elements visited across both passes.
pub fn consume_twice<E>(seq: &E, consumer: &mut Consumer) -> usize
where
    E: Enumerable + ?Sized,
{
    consume_all(seq, consumer) + consume_all(seq, consumer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eager::map_array;
    use crate::lazy::{lazy, EnumerableExt};
    use std::cell::Cell;

    #[test]
    fn take_first_stops_early() {
        let data = [10, 20, 30, 40];
        let mut consumer = Consumer::new();
        let out = take_first(&lazy(&data), 2, &mut consumer);
        assert_eq!(out, vec![&10, &20]);
        assert_eq!(consumer.consumed(), 2);
    }

    #[test]
    fn take_first_beyond_length() {
        let data = [1, 2];
        let mut consumer = Consumer::new();
        let out = take_first(&lazy(&data), 50, &mut consumer);
        assert_eq!(out, vec![&1, &2]);
    }

    #[test]
    fn take_zero_pulls_nothing() {
        let calls = Cell::new(0);
        let data = [1, 2, 3];
        let seq = lazy(&data).map_lazy(|x| {
            calls.set(calls.get() + 1);
            *x
        });
        let mut consumer = Consumer::new();
        assert!(take_first(&seq, 0, &mut consumer).is_empty());
        assert_eq!(calls.get(), 0);
        assert_eq!(consumer.consumed(), 0);
    }

    #[test]
    fn consume_twice_reruns_lazy_chain() {
        let calls = Cell::new(0);
        let data = [1, 2, 3, 4];
        let seq = lazy(&data).map_lazy(|x| {
            calls.set(calls.get() + 1);
            *x
        });
        let mut consumer = Consumer::new();
        assert_eq!(consume_twice(&seq, &mut consumer), 8);
        assert_eq!(calls.get(), 8);
        assert_eq!(consumer.consumed(), 8);
    }

    #[test]
    fn consume_twice_reuses_materialized() {
        let calls = Cell::new(0);
        let stored = map_array(&[1, 2, 3, 4], |x| {
            calls.set(calls.get() + 1);
            *x
        });
        let mut consumer = Consumer::new();
        assert_eq!(consume_twice(&stored, &mut consumer), 8);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn consumer_reset() {
        let mut consumer = Consumer::new();
        consumer.consume(1u8);
        consumer.consume("x");
        assert_eq!(consumer.consumed(), 2);
        consumer.reset();
        assert_eq!(consumer, Consumer::new());
    }
}
