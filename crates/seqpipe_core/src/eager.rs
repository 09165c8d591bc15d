//! Materialized arrays and the combinators that build them.
//!
//! Every function here consumes its whole input before returning and
//! hands back an owned [`Materialized`] array. Chaining them means each
//! stage is fully computed and stored before the next one starts, even
//! if the caller only needs the first few results.
//!
//! [`filter_array`] reserves room for every input element up front and
//! shrinks the buffer to the match count afterwards. That second
//! allocation is part of the cost profile under measurement and must not
//! be replaced by a count-then-allocate pass.

use crate::lazy::{lazy, Cursor, Enumerable, LazySource};
use tracing::trace;

/// An owned, fully evaluated array.
///
/// Its contents never change after construction. Enumerating it any
/// number of times runs no predicate or transform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Materialized<T> {
    items: Box<[T]>,
}

impl<T> Materialized<T> {
    /// Wraps an already evaluated buffer.
    #[must_use]
    pub fn new(items: Box<[T]>) -> Self {
        Self { items }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Starts a lazy chain over the stored elements.
    #[must_use]
    pub fn lazy(&self) -> LazySource<'_, T> {
        lazy(&self.items)
    }

    /// See [`filter_array`].
    pub fn filter_array<P>(&self, predicate: P) -> Materialized<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        filter_array(&self.items, predicate)
    }

    /// See [`map_array`].
    pub fn map_array<F, R>(&self, transform: F) -> Materialized<R>
    where
        F: Fn(&T) -> R,
    {
        map_array(&self.items, transform)
    }

    /// Unwraps the stored buffer.
    #[must_use]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.items
    }
}

impl<T> From<Vec<T>> for Materialized<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items.into_boxed_slice())
    }
}

impl<T> From<Box<[T]>> for Materialized<T> {
    fn from(items: Box<[T]>) -> Self {
        Self::new(items)
    }
}

impl<T> AsRef<[T]> for Materialized<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

/// Cursor over a [`Materialized`] array. Clones each element out.
#[derive(Debug, Clone)]
pub struct ArrayCursor<'s, T> {
    items: &'s [T],
    pos: usize,
}

impl<T: Clone> Cursor for ArrayCursor<'_, T> {
    type Item = T;

    #[inline]
    fn try_next(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?;
        self.pos += 1;
        Some(item.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.pos;
        (left, Some(left))
    }
}

impl<T: Clone> Enumerable for Materialized<T> {
    type Item = T;
    type Cursor<'s>
        = ArrayCursor<'s, T>
    where
        Self: 's;

    fn cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor {
            items: &self.items,
            pos: 0,
        }
    }
}

/// Copies the elements of `source` that satisfy `predicate` into a new array.
///
/// The buffer starts at `source.len()` capacity, matches are written
/// densely from the front, then the buffer is shrunk to the match count.
/// No matches yields an empty array.
pub fn filter_array<T, P>(source: &[T], predicate: P) -> Materialized<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let mut results = Vec::with_capacity(source.len());
    for item in source {
        if predicate(item) {
            results.push(item.clone());
        }
    }

    trace!(
        reserved = results.capacity(),
        kept = results.len(),
        "shrinking filtered array"
    );
    Materialized::new(results.into_boxed_slice())
}

/// Applies `transform` to every element of `source`, in order, into a new array.
///
/// The result has exactly `source.len()` elements.
pub fn map_array<T, F, R>(source: &[T], transform: F) -> Materialized<R>
where
    F: Fn(&T) -> R,
{
    let mut results = Vec::with_capacity(source.len());
    for item in source {
        results.push(transform(item));
    }
    Materialized::new(results.into_boxed_slice())
}

/// Drains one cursor of `seq` into a new array.
///
/// The buffer starts at the cursor's lower size bound. Over a slice or a
/// projection of one that is the exact length, so the copy is a single
/// allocation; after a filter the buffer grows as it fills.
pub fn to_array<E>(seq: &E) -> Materialized<E::Item>
where
    E: Enumerable + ?Sized,
{
    let mut cursor = seq.cursor();
    let mut results = Vec::with_capacity(cursor.size_hint().0);
    while let Some(item) = cursor.try_next() {
        results.push(item);
    }
    Materialized::from(results)
}
