use alloc::vec::Vec;

use crate::{Filter, Iter, Map, ReadOnlyIterator, SliceCursor, Skip, Take, TryIter};

/// A lazy, repeatable sequence.
///
/// `iterator()` has no side effect on the stream. Each call hands out an
/// independent cursor positioned at the start of the sequence; advancing one
/// cursor never affects another.
pub trait Stream {
    type Item;

    /// Returns a fresh cursor over the whole sequence.
    fn iterator(&self) -> impl ReadOnlyIterator<Item = Self::Item> + '_;

    /// Returns a fresh cursor wrapped as a standard [`Iterator`].
    fn iter(&self) -> Iter<impl ReadOnlyIterator<Item = Self::Item> + '_> {
        self.iterator().into_std()
    }

    /// Returns a fresh cursor wrapped as an [`Iterator`] over `Result`s.
    fn try_iter(&self) -> TryIter<impl ReadOnlyIterator<Item = Self::Item> + '_> {
        self.iterator().into_try_std()
    }

    /// Lazily applies `f` to every element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Lazily keeps the elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields at most the first `count` elements.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Drops the first `count` elements.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }
}

impl<S: Stream + ?Sized> Stream for &S {
    type Item = S::Item;

    fn iterator(&self) -> impl ReadOnlyIterator<Item = Self::Item> + '_ {
        (**self).iterator()
    }
}

/// A stream over an owned list of values, yielding clones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Values<T> {
    items: Vec<T>,
}

/// Creates a stream over the given values.
///
/// ```
/// use solid_stream::{Stream, of};
///
/// let words = of(["a", "b"]);
/// assert_eq!(words.iter().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub fn of<T: Clone>(items: impl Into<Vec<T>>) -> Values<T> {
    Values {
        items: items.into(),
    }
}

impl<T: Clone> Stream for Values<T> {
    type Item = T;

    fn iterator(&self) -> impl ReadOnlyIterator<Item = T> + '_ {
        SliceCursor::new(&self.items)
    }
}
