//! Primitive arrays exposed as streams.
//!
//! [`PrimitiveArray`] wraps any `S: AsRef<[P]>` (a `Vec`, a boxed slice, a
//! fixed-size array, a borrowed slice, an `Rc<[P]>`) without copying it. The
//! element is read out of the buffer only when a cursor yields it.
//!
//! The named constructors ([`integers`], [`longs`], ...) cover each primitive
//! kind:
//!
//! ```
//! use solid_stream::{ReadOnlyIterator, Stream, integers};
//!
//! let numbers = integers(vec![5]);
//! let mut cursor = numbers.iterator();
//! assert_eq!(cursor.next(), Ok(5));
//! assert!(!cursor.has_next());
//! assert!(cursor.next().is_err());
//! ```

use core::fmt::Debug;
use core::marker::PhantomData;

use crate::{ReadOnlyIterator, Stream, StreamError};

mod sealed {
    pub trait Sealed {}
}

/// Element kinds a [`PrimitiveArray`] can hold.
pub trait Primitive: Copy + Debug + PartialEq + sealed::Sealed + 'static {}

macro_rules! primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Primitive for $ty {}
        )*
    };
}

primitive!(
    bool, char, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64,
);

/// A fixed-length primitive buffer viewed as a [`Stream`].
///
/// The adapter never writes to the buffer. Cursors track a single index in
/// `0..=len`.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveArray<S, P> {
    data: S,
    _marker: PhantomData<P>,
}

impl<S: AsRef<[P]>, P: Primitive> PrimitiveArray<S, P> {
    pub fn new(data: S) -> Self {
        Self {
            data,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked random access.
    pub fn get(&self, index: usize) -> Result<P, StreamError> {
        let data = self.data.as_ref();
        data.get(index)
            .copied()
            .ok_or(StreamError::IndexOutOfBounds {
                index,
                len: data.len(),
            })
    }

    pub fn into_inner(self) -> S {
        self.data
    }
}

impl<S: AsRef<[P]>, P: Primitive> Stream for PrimitiveArray<S, P> {
    type Item = P;

    fn iterator(&self) -> impl ReadOnlyIterator<Item = P> + '_ {
        ArrayCursor {
            array: self,
            index: 0,
        }
    }
}

struct ArrayCursor<'a, S, P> {
    array: &'a PrimitiveArray<S, P>,
    index: usize,
}

impl<S: AsRef<[P]>, P: Primitive> ReadOnlyIterator for ArrayCursor<'_, S, P> {
    type Item = P;

    fn has_next(&mut self) -> bool {
        self.index < self.array.len()
    }

    fn next(&mut self) -> Result<P, StreamError> {
        let value = self.array.get(self.index).map_err(|_| StreamError::Exhausted {
            position: self.index,
        })?;
        self.index += 1;
        Ok(value)
    }
}

macro_rules! converters {
    ($($(#[$doc:meta])* $name:ident, $alias:ident => $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub type $alias<S> = PrimitiveArray<S, $ty>;

            $(#[$doc])*
            pub fn $name<S: AsRef<[$ty]>>(data: S) -> $alias<S> {
                PrimitiveArray::new(data)
            }
        )*
    };
}

converters! {
    /// Stream over an `i32` buffer.
    integers, Integers => i32;
    /// Stream over an `i64` buffer.
    longs, Longs => i64;
    /// Stream over an `i16` buffer.
    shorts, Shorts => i16;
    /// Stream over an `i8` buffer.
    bytes, Bytes => i8;
    /// Stream over an `f32` buffer.
    floats, Floats => f32;
    /// Stream over an `f64` buffer.
    doubles, Doubles => f64;
    /// Stream over a `bool` buffer.
    booleans, Booleans => bool;
    /// Stream over a `char` buffer.
    characters, Characters => char;
}

static_assertions::assert_impl_all!(Integers<alloc::vec::Vec<i32>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Doubles<&'static [f64]>: Send, Sync, Copy);
