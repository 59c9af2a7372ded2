use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::ops::{Bound, Deref, RangeBounds};

use solid_stream::{ReadOnlyIterator, SliceCursor, Stream, StreamError};

use crate::{DecodeError, Marshal, Reader};

/// An immutable ordered list.
///
/// The elements are a snapshot taken when the list was built and never change
/// afterwards; there is no mutating API. Cloning shares the snapshot.
///
/// Equality, ordering and hashing are structural: two lists are equal iff they
/// have the same length and pairwise-equal elements in the same order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolidList<T> {
    items: Arc<[T]>,
}

static_assertions::assert_eq_size!(SolidList<u8>, [usize; 2]);
static_assertions::assert_impl_all!(SolidList<i32>: Send, Sync, Clone, Eq, core::hash::Hash);

// ============================================================================
// Clone, Default, Debug
// ============================================================================

impl<T> Clone for SolidList<T> {
    fn clone(&self) -> Self {
        SolidList {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for SolidList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Debug> Debug for SolidList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

// ============================================================================
// Construction
// ============================================================================

impl<T> SolidList<T> {
    pub fn empty() -> Self {
        SolidList {
            items: Arc::from(Vec::new()),
        }
    }

    /// Drain `stream` into a new list.
    ///
    /// Consumes one fresh cursor to exhaustion, in order. The returned list
    /// owns its elements and keeps no reference to the stream.
    pub fn collect<S: Stream<Item = T>>(stream: S) -> Result<Self, StreamError> {
        let mut cursor = stream.iterator();
        let mut items = Vec::new();
        while cursor.has_next() {
            items.push(cursor.next()?);
        }
        tracing::trace!(len = items.len(), "collected SolidList");
        Ok(SolidList::from(items))
    }
}

// ============================================================================
// Read-only access
// ============================================================================

impl<T> SolidList<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|x| x == item)
    }

    /// Position of the last element equal to `item`.
    pub fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|x| x == item)
    }

    /// A new list holding a copy of `range`.
    ///
    /// Returns `None` if the range is inverted or extends past the end.
    pub fn sub_list(&self, range: impl RangeBounds<usize>) -> Option<Self>
    where
        T: Clone,
    {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        self.items.get(bounds).map(SolidList::from)
    }
}

impl<T> Deref for SolidList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for SolidList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

// ============================================================================
// Marshalling
// ============================================================================

impl<T: Marshal> SolidList<T> {
    /// Encode this list using the [`Marshal`](crate::Marshal) framing.
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.len() * T::MIN_WIDTH);
        self.marshal_into(&mut out);
        out
    }

    /// Decode a list produced by [`SolidList::marshal`].
    ///
    /// The whole input must be consumed; trailing bytes are an error.
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(bytes);
        Self::unmarshal_from(&mut reader)
            .and_then(|list| reader.finish().map(|()| list))
            .inspect_err(|error| {
                tracing::debug!(
                    %error,
                    offset = reader.offset(),
                    input_len = bytes.len(),
                    "failed to unmarshal SolidList"
                );
            })
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T> From<Vec<T>> for SolidList<T> {
    fn from(items: Vec<T>) -> Self {
        SolidList {
            items: Arc::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for SolidList<T> {
    fn from(items: &[T]) -> Self {
        SolidList {
            items: Arc::from(items),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SolidList<T> {
    fn from(items: [T; N]) -> Self {
        SolidList::from(Vec::from(items))
    }
}

impl<T> FromIterator<T> for SolidList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SolidList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SolidList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// Stream
// ============================================================================

impl<T: Clone> Stream for SolidList<T> {
    type Item = T;

    fn iterator(&self) -> impl ReadOnlyIterator<Item = T> + '_ {
        SliceCursor::new(&self.items)
    }
}

/// `collect_solid()` on any [`Stream`].
pub trait CollectSolid: Stream + Sized {
    fn collect_solid(self) -> Result<SolidList<Self::Item>, StreamError> {
        SolidList::collect(self)
    }
}

impl<S: Stream> CollectSolid for S {}
