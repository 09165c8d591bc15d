//! Deferred, pull-based sequences.
//!
//! A lazy pipeline is a chain of [`Enumerable`] values. None of them hold
//! elements; each one remembers its upstream and a predicate or transform.
//! Work happens only when a [`Cursor`] is pulled, one element at a time.
//!
//! # Re-enumeration
//!
//! Every call to [`Enumerable::cursor`] starts from the beginning of the
//! chain and re-runs every predicate and transform. Nothing is cached.
//! Consuming a lazy pipeline twice costs twice the work; that is the
//! behavior being measured, so it is kept as is.
//!
//! # Example
//!
//! ```rust
//! use seqpipe_core::lazy::{lazy, EnumerableExt};
//! use seqpipe_core::consume::{take_first, Consumer};
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let evens = lazy(&data).filter_lazy(|x| **x % 2 == 0).map_lazy(|x| x * 10);
//!
//! let mut consumer = Consumer::new();
//! assert_eq!(take_first(&evens, 2, &mut consumer), vec![20, 40]);
//! ```

use crate::eager::{to_array, Materialized};

/// A stateful position in a sequence.
///
/// `try_next` produces the next element, or `None` once the sequence is
/// exhausted. Cursors in this module are fused: after the first `None`
/// every further call returns `None` without touching upstream.
pub trait Cursor {
    /// The element type produced.
    type Item;

    /// Produces the next element, if any.
    fn try_next(&mut self) -> Option<Self::Item>;

    /// Bounds on the number of elements left, as [`Iterator::size_hint`].
    ///
    /// Never pulls anything.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Adapts the cursor into a standard [`Iterator`].
    fn pulled(self) -> Pulled<Self>
    where
        Self: Sized,
    {
        Pulled { cursor: self }
    }
}

/// A sequence that can be enumerated any number of times.
///
/// Each call to [`cursor`](Enumerable::cursor) returns an independent
/// cursor positioned before the first element.
pub trait Enumerable {
    /// The element type produced by cursors.
    type Item;

    /// The cursor type, borrowing the sequence for `'s`.
    type Cursor<'s>: Cursor<Item = Self::Item>
    where
        Self: 's;

    /// Starts a fresh enumeration.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Starts a fresh enumeration as a standard [`Iterator`].
    fn iter(&self) -> Pulled<Self::Cursor<'_>> {
        self.cursor().pulled()
    }
}

/// [`Iterator`] adapter over a [`Cursor`].
#[derive(Debug, Clone)]
pub struct Pulled<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for Pulled<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.cursor.try_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

// === Source ===

/// A lazy view over a borrowed slice.
///
/// This is where every lazy chain starts. It yields references, so
/// enumerating it never copies the underlying elements.
#[derive(Debug)]
pub struct LazySource<'a, T> {
    items: &'a [T],
}

impl<T> Clone for LazySource<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LazySource<'_, T> {}

impl<'a, T> LazySource<'a, T> {
    /// Wraps `items`.
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Returns the number of underlying elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no underlying elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Starts a lazy chain over `items`.
#[must_use]
pub const fn lazy<T>(items: &[T]) -> LazySource<'_, T> {
    LazySource::new(items)
}

/// Cursor over a [`LazySource`].
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn try_next(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.pos;
        (left, Some(left))
    }
}

impl<'a, T> Enumerable for LazySource<'a, T> {
    type Item = &'a T;
    type Cursor<'s>
        = SliceCursor<'a, T>
    where
        Self: 's;

    fn cursor(&self) -> SliceCursor<'a, T> {
        SliceCursor {
            items: self.items,
            pos: 0,
        }
    }
}

// === Filter ===

/// Lazy filter stage. Built by [`filter_lazy`].
pub struct FilterLazy<S, P> {
    source: S,
    predicate: P,
}

/// Keeps the elements of `source` for which `predicate` returns true.
///
/// Nothing is evaluated until the result is pulled.
pub fn filter_lazy<S, P>(source: S, predicate: P) -> FilterLazy<S, P>
where
    S: Enumerable,
    P: Fn(&S::Item) -> bool,
{
    FilterLazy { source, predicate }
}

/// Cursor over a [`FilterLazy`].
pub struct FilterCursor<'s, C, P> {
    upstream: C,
    predicate: &'s P,
    done: bool,
}

impl<C, P> Cursor for FilterCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn try_next(&mut self) -> Option<C::Item> {
        if self.done {
            return None;
        }
        while let Some(item) = self.upstream.try_next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.upstream.size_hint().1)
        }
    }
}

impl<S, P> Enumerable for FilterLazy<S, P>
where
    S: Enumerable,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'s>
        = FilterCursor<'s, S::Cursor<'s>, P>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            upstream: self.source.cursor(),
            predicate: &self.predicate,
            done: false,
        }
    }
}

// === Map ===

/// Lazy projection stage. Built by [`map_lazy`].
pub struct MapLazy<S, F> {
    source: S,
    transform: F,
}

/// Applies `transform` to each element of `source`, one per pull.
pub fn map_lazy<S, F, R>(source: S, transform: F) -> MapLazy<S, F>
where
    S: Enumerable,
    F: Fn(S::Item) -> R,
{
    MapLazy { source, transform }
}

/// Cursor over a [`MapLazy`].
pub struct MapCursor<'s, C, F> {
    upstream: C,
    transform: &'s F,
}

impl<C, F, R> Cursor for MapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    #[inline]
    fn try_next(&mut self) -> Option<R> {
        self.upstream.try_next().map(|item| (self.transform)(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<S, F, R> Enumerable for MapLazy<S, F>
where
    S: Enumerable,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type Cursor<'s>
        = MapCursor<'s, S::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            upstream: self.source.cursor(),
            transform: &self.transform,
        }
    }
}

// === Chaining ===

/// Method-call chaining for any [`Enumerable`].
pub trait EnumerableExt: Enumerable + Sized {
    /// See [`filter_lazy`].
    fn filter_lazy<P>(self, predicate: P) -> FilterLazy<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        filter_lazy(self, predicate)
    }

    /// See [`map_lazy`].
    fn map_lazy<F, R>(self, transform: F) -> MapLazy<Self, F>
    where
        F: Fn(Self::Item) -> R,
    {
        map_lazy(self, transform)
    }

    /// Runs the chain once and stores the results. See [`to_array`].
    fn to_array(&self) -> Materialized<Self::Item> {
        to_array(self)
    }
}

impl<E: Enumerable> EnumerableExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn source_yields_in_order() {
        let data = [3, 1, 2];
        let seq = lazy(&data);
        let out: Vec<i32> = seq.iter().copied().collect();
        assert_eq!(out, vec![3, 1, 2]);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn filter_preserves_order() {
        let data = [5, 2, 8, 1, 4];
        let seq = lazy(&data).filter_lazy(|x| **x > 2);
        let out: Vec<i32> = seq.iter().copied().collect();
        assert_eq!(out, vec![5, 8, 4]);
    }

    #[test]
    fn map_is_one_to_one() {
        let data = ["a", "bb", "ccc"];
        let seq = lazy(&data).map_lazy(|s| s.len());
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn building_a_chain_evaluates_nothing() {
        let calls = Cell::new(0);
        let data = [1, 2, 3];
        let _seq = lazy(&data)
            .filter_lazy(|_| {
                calls.set(calls.get() + 1);
                true
            })
            .map_lazy(|x| {
                calls.set(calls.get() + 1);
                *x
            });
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn pulling_stops_upstream_work() {
        let calls = Cell::new(0);
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let seq = lazy(&data).filter_lazy(|x| {
            calls.set(calls.get() + 1);
            **x % 2 == 0
        });

        let mut cursor = seq.cursor();
        assert_eq!(cursor.try_next(), Some(&2));
        assert_eq!(calls.get(), 2);
        assert_eq!(cursor.try_next(), Some(&4));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn exhausted_cursor_stays_exhausted() {
        let calls = Cell::new(0);
        let data = [1, 3];
        let seq = lazy(&data).filter_lazy(|x| {
            calls.set(calls.get() + 1);
            **x % 2 == 0
        });

        let mut cursor = seq.cursor();
        assert_eq!(cursor.try_next(), None);
        assert_eq!(cursor.try_next(), None);
        assert_eq!(cursor.try_next(), None);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn each_cursor_reruns_the_chain() {
        let calls = Cell::new(0);
        let data = [1, 2, 3];
        let seq = lazy(&data).map_lazy(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });

        assert_eq!(seq.iter().sum::<i32>(), 12);
        assert_eq!(calls.get(), 3);
        assert_eq!(seq.iter().sum::<i32>(), 12);
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn size_hints_track_remaining_work() {
        let data = [1, 2, 3, 4, 5];

        let mut source = lazy(&data).cursor();
        assert_eq!(source.size_hint(), (5, Some(5)));
        source.try_next();
        assert_eq!(source.size_hint(), (4, Some(4)));

        let mapped = lazy(&data).map_lazy(|x| x * 2);
        assert_eq!(mapped.cursor().size_hint(), (5, Some(5)));
        assert_eq!(mapped.iter().size_hint(), (5, Some(5)));

        let filtered = lazy(&data).filter_lazy(|x| **x > 10);
        let mut cursor = filtered.cursor();
        assert_eq!(cursor.size_hint(), (0, Some(5)));
        assert_eq!(cursor.try_next(), None);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[test]
    fn empty_source() {
        let data: [u8; 0] = [];
        let seq = lazy(&data).filter_lazy(|_| true).map_lazy(|x| *x);
        assert!(lazy(&data).is_empty());
        assert_eq!(seq.cursor().try_next(), None);
    }

    #[test]
    fn free_functions_match_methods() {
        let data = [1, 2, 3, 4];
        let a = map_lazy(filter_lazy(lazy(&data), |x| **x > 1), |x| x + 1);
        let b = lazy(&data).filter_lazy(|x| **x > 1).map_lazy(|x| x + 1);
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }
}
