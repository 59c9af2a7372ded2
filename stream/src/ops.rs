//! Lazy operators composed over the [`Stream`] contract.
//!
//! Each operator's `iterator()` wraps a fresh source cursor and does its work
//! per call to `has_next()`/`next()`. Nothing is buffered beyond the single
//! lookahead slot [`Filter`] needs.

use core::fmt::{self, Debug};

use crate::{ReadOnlyIterator, Stream, StreamError};

// =============================================================================
// Map
// =============================================================================

/// Stream returned by [`Stream::map`].
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S: Debug, F> Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .field("f", &core::any::type_name::<F>())
            .finish()
    }
}

impl<S, F, U> Stream for Map<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn iterator(&self) -> impl ReadOnlyIterator<Item = U> + '_ {
        MapCursor {
            inner: self.source.iterator(),
            f: &self.f,
        }
    }
}

struct MapCursor<'f, I, F> {
    inner: I,
    f: &'f F,
}

impl<I, F, U> ReadOnlyIterator for MapCursor<'_, I, F>
where
    I: ReadOnlyIterator,
    F: Fn(I::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Result<U, StreamError> {
        self.inner.next().map(self.f)
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Stream returned by [`Stream::filter`].
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S: Debug, P> Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .field("predicate", &core::any::type_name::<P>())
            .finish()
    }
}

impl<S, P> Stream for Filter<S, P>
where
    S: Stream,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn iterator(&self) -> impl ReadOnlyIterator<Item = S::Item> + '_ {
        FilterCursor {
            inner: self.source.iterator(),
            predicate: &self.predicate,
            peeked: None,
            yielded: 0,
        }
    }
}

struct FilterCursor<'p, I: ReadOnlyIterator, P> {
    inner: I,
    predicate: &'p P,
    // Holds the next matching element, or the upstream failure to report.
    peeked: Option<Result<I::Item, StreamError>>,
    yielded: usize,
}

impl<I, P> ReadOnlyIterator for FilterCursor<'_, I, P>
where
    I: ReadOnlyIterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }
        while self.inner.has_next() {
            match self.inner.next() {
                Ok(item) if !(self.predicate)(&item) => {}
                found => {
                    self.peeked = Some(found);
                    return true;
                }
            }
        }
        false
    }

    fn next(&mut self) -> Result<I::Item, StreamError> {
        if !self.has_next() {
            return Err(StreamError::Exhausted {
                position: self.yielded,
            });
        }
        let item = self.peeked.take().ok_or(StreamError::Exhausted {
            position: self.yielded,
        })??;
        self.yielded += 1;
        Ok(item)
    }
}

// =============================================================================
// Take / Skip
// =============================================================================

/// Stream returned by [`Stream::take`].
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Stream> Stream for Take<S> {
    type Item = S::Item;

    fn iterator(&self) -> impl ReadOnlyIterator<Item = S::Item> + '_ {
        TakeCursor {
            inner: self.source.iterator(),
            remaining: self.count,
            yielded: 0,
        }
    }
}

struct TakeCursor<I> {
    inner: I,
    remaining: usize,
    yielded: usize,
}

impl<I: ReadOnlyIterator> ReadOnlyIterator for TakeCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.remaining > 0 && self.inner.has_next()
    }

    fn next(&mut self) -> Result<I::Item, StreamError> {
        if self.remaining == 0 {
            return Err(StreamError::Exhausted {
                position: self.yielded,
            });
        }
        let item = self.inner.next()?;
        self.remaining -= 1;
        self.yielded += 1;
        Ok(item)
    }
}

/// Stream returned by [`Stream::skip`].
#[derive(Debug, Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Stream> Stream for Skip<S> {
    type Item = S::Item;

    fn iterator(&self) -> impl ReadOnlyIterator<Item = S::Item> + '_ {
        SkipCursor {
            inner: self.source.iterator(),
            pending: self.count,
            failure: None,
        }
    }
}

struct SkipCursor<I> {
    inner: I,
    pending: usize,
    failure: Option<StreamError>,
}

impl<I: ReadOnlyIterator> SkipCursor<I> {
    // Runs on the first has_next()/next(); creating the cursor reads nothing.
    fn skip_pending(&mut self) {
        while self.pending > 0 && self.inner.has_next() {
            self.pending -= 1;
            if let Err(error) = self.inner.next() {
                self.failure = Some(error);
                break;
            }
        }
        self.pending = 0;
    }
}

impl<I: ReadOnlyIterator> ReadOnlyIterator for SkipCursor<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.skip_pending();
        self.failure.is_some() || self.inner.has_next()
    }

    fn next(&mut self) -> Result<I::Item, StreamError> {
        self.skip_pending();
        match self.failure.take() {
            Some(error) => Err(error),
            None => self.inner.next(),
        }
    }
}
