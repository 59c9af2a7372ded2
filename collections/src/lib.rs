//! Immutable, value-comparable lists materialized from streams.
//!
//! [`SolidList`] is the single eager point of a pipeline: [`SolidList::collect`]
//! drains a [`Stream`](solid_stream::Stream) once and keeps an owned snapshot.
//! Lists compare and hash by content and round-trip through a plain binary
//! encoding (see [`Marshal`]) so they can be handed across a process boundary
//! as an opaque blob.
//!
//! ```
//! use solid_collections::{CollectSolid, SolidList};
//! use solid_stream::{Stream, integers};
//!
//! let list = integers([1, 2, 3]).map(|x| x * 2).collect_solid().unwrap();
//! assert_eq!(list, SolidList::from(vec![2, 4, 6]));
//!
//! let bytes = list.marshal();
//! assert_eq!(SolidList::<i32>::unmarshal(&bytes).unwrap(), list);
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

mod error;
mod list;
mod marshal;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::DecodeError;
pub use list::{CollectSolid, SolidList};
pub use marshal::{Marshal, Reader, write_len};
