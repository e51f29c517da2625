//! A module containing [`MapSet`] and associated types.
//!
//! [`Iter`] and [`IntoIter`] provide borrowed and owned iteration over a set's elements. The
//! algebraic iterators over two sets live with the [`Set`](crate::traits::Set) trait, which
//! `MapSet` implements.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating an element
//! in place would change its hash and corrupt the backing map.
//!
//! [`MapSet`] is also re-exported at the crate root.

#[cfg(feature = "channel")]
mod channel;
mod iter;
mod map_set;

pub use iter::*;
pub use map_set::*;
