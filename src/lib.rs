//! Solid - lazy streams and immutable, marshallable lists
//!
//! # Overview
//!
//! Solid gives application code functional-style pipelines over in-memory
//! data without intermediate allocation:
//!
//! - [`Stream`]: a lazy, repeatable sequence. Operators like `map` and
//!   `filter` wrap the source cursor and run one element at a time.
//! - [`PrimitiveArray`]: exposes a primitive buffer as a stream without
//!   copying it ([`integers`], [`doubles`], ...).
//! - [`SolidList`]: the eager end of a pipeline, an immutable snapshot with
//!   value equality that round-trips through a plain binary encoding.
//!
//! # Quick Start
//!
//! ```
//! use solid::prelude::*;
//!
//! let evens = integers([1, 2, 3, 4, 5, 6])
//!     .filter(|x| x % 2 == 0)
//!     .collect_solid()?;
//! assert_eq!(evens, SolidList::from([2, 4, 6]));
//!
//! // Hand the list to another process as an opaque blob.
//! let blob = evens.marshal();
//! let received = SolidList::<i32>::unmarshal(&blob)?;
//! assert_eq!(received, evens);
//! # Ok::<(), solid::Error>(())
//! ```

mod error;

pub use error::{Error, Result};

// Re-export the stream layer
pub use solid_stream::{
    Booleans, Bytes, Characters, Doubles, Filter, Floats, Integers, Iter, Longs, Map, Primitive,
    PrimitiveArray, ReadOnlyIterator, ReadOnlyIteratorExt, Shorts, Skip, SliceCursor, Stream,
    StreamError, Take, TryIter, Values, booleans, bytes, characters, doubles, floats, integers, longs, of, shorts,
};

// Re-export the collection layer
pub use solid_collections::{CollectSolid, DecodeError, Marshal, Reader, SolidList, write_len};

/// The traits and constructors most pipelines need.
pub mod prelude {
    pub use solid_collections::{CollectSolid, SolidList};
    pub use solid_stream::{
        ReadOnlyIterator, ReadOnlyIteratorExt, Stream, booleans, bytes, characters, doubles, floats, integers, longs,
        of, shorts,
    };
}
