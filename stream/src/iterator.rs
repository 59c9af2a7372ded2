//! The traversal contract shared by every stream.

use alloc::boxed::Box;

use crate::StreamError;

/// A single-pass forward cursor that can never mutate what it traverses.
///
/// A cursor is not meant to be shared between threads: it carries its own
/// position and belongs to one traversal at a time.
pub trait ReadOnlyIterator {
    type Item;

    /// Returns `true` while at least one more element is available.
    ///
    /// Implementations may look ahead and cache one element (see
    /// [`Filter`](crate::Filter)), but repeated calls always give the same
    /// answer and never skip or duplicate an element.
    fn has_next(&mut self) -> bool;

    /// Yields the next element and advances by exactly one position.
    ///
    /// Fails with [`StreamError::Exhausted`] once `has_next()` is `false`.
    fn next(&mut self) -> Result<Self::Item, StreamError>;

    /// Adapts this cursor into a standard [`Iterator`].
    fn into_std(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter { cursor: self }
    }

    /// Adapts this cursor into a standard [`Iterator`] over `Result`s.
    fn into_try_std(self) -> TryIter<Self>
    where
        Self: Sized,
    {
        TryIter {
            cursor: self,
            failed: false,
        }
    }
}

/// Removal through a read-only cursor.
///
/// Implemented for every [`ReadOnlyIterator`] by a blanket impl, so no cursor
/// can make removal succeed.
pub trait ReadOnlyIteratorExt: ReadOnlyIterator {
    /// Always fails with [`StreamError::UnsupportedMutation`].
    fn remove(&mut self) -> Result<(), StreamError> {
        Err(StreamError::UnsupportedMutation { operation: "remove" })
    }
}

impl<I: ReadOnlyIterator + ?Sized> ReadOnlyIteratorExt for I {}

impl<I: ReadOnlyIterator + ?Sized> ReadOnlyIterator for &mut I {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, StreamError> {
        (**self).next()
    }
}

impl<I: ReadOnlyIterator + ?Sized> ReadOnlyIterator for Box<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, StreamError> {
        (**self).next()
    }
}

/// A standard [`Iterator`] over a [`ReadOnlyIterator`].
///
/// Ends as soon as the cursor reports `has_next() == false`. A cursor that
/// claims another element and then fails to yield it also ends the iteration;
/// use [`TryIter`] when such failures must reach the caller.
#[derive(Debug, Clone)]
pub struct Iter<I> {
    cursor: I,
}

impl<I> Iter<I> {
    pub fn into_inner(self) -> I {
        self.cursor
    }
}

impl<I: ReadOnlyIterator> Iterator for Iter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_next() {
            return None;
        }
        self.cursor.next().ok()
    }
}

/// A standard [`Iterator`] that yields every cursor failure.
///
/// Yields `Err` once when the cursor fails, then ends.
#[derive(Debug, Clone)]
pub struct TryIter<I> {
    cursor: I,
    failed: bool,
}

impl<I: ReadOnlyIterator> Iterator for TryIter<I> {
    type Item = Result<I::Item, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.cursor.has_next() {
            return None;
        }
        let item = self.cursor.next();
        self.failed = item.is_err();
        Some(item)
    }
}

/// Cursor over a borrowed slice, yielding clones.
///
/// Used by every stream whose elements already live in a contiguous buffer.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, index: 0 }
    }
}

impl<T: Clone> ReadOnlyIterator for SliceCursor<'_, T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.index < self.items.len()
    }

    fn next(&mut self) -> Result<T, StreamError> {
        let item = self.items.get(self.index).ok_or(StreamError::Exhausted {
            position: self.index,
        })?;
        self.index += 1;
        Ok(item.clone())
    }
}
