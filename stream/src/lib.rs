//! Lazy, repeatable sequences.
//!
//! A [`Stream`] is a sequence *factory*: it holds no cursor state, and every
//! call to [`Stream::iterator`] returns a fresh [`ReadOnlyIterator`] that
//! replays the whole sequence from the start. Operators such as
//! [`Stream::map`] and [`Stream::filter`] wrap the source cursor and do their
//! work one element at a time, so nothing is materialized until a terminal
//! operation drains a cursor.
//!
//! # Example
//!
//! ```
//! use solid_stream::{Stream, integers};
//!
//! let odd_squares = integers([1, 2, 3, 4, 5])
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x);
//!
//! assert_eq!(odd_squares.iter().collect::<Vec<_>>(), vec![1, 9, 25]);
//! // Streams are repeatable.
//! assert_eq!(odd_squares.iter().sum::<i32>(), 35);
//! ```
//!
//! # Threading
//!
//! Streams are immutable once built and can be shared across threads when
//! their backing data can. A single cursor carries mutable position state and
//! belongs to exactly one traversal at a time.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

mod error;
mod iterator;
mod ops;
mod primitive;
mod stream;

pub use error::StreamError;
pub use iterator::{Iter, ReadOnlyIterator, ReadOnlyIteratorExt, SliceCursor, TryIter};
pub use ops::{Filter, Map, Skip, Take};
pub use primitive::{
    Booleans, Bytes, Characters, Doubles, Floats, Integers, Longs, Primitive, PrimitiveArray,
    Shorts, booleans, bytes, characters, doubles, floats, integers, longs, shorts,
};
pub use stream::{Stream, Values, of};
