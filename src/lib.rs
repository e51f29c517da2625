//! A generic Set abstract data type backed by a hash table.
//!
//! # Purpose
//! This crate provides [`MapSet`], a collection of distinct elements built over a mapping from
//! element to a zero-size marker, together with [`Set`], the trait describing the ADT itself:
//! membership management (insert/remove/contains/len/clear) and the classic set algebra (equality,
//! subset, union, intersection, difference). The trait carries the contract; `MapSet` is the one
//! implementation you'd actually reach for.
//!
//! # Design
//! `MapSet<T>` wraps [`HashMap<T, ()>`](std::collections::HashMap), so anything `Hash + Eq` can be
//! an element and membership operations stay O(1) amortized. The unit value makes the map behave
//! as a set without spending a byte per entry. Callers that genuinely need mixed-type sets can use
//! [`Value`], a tagged element type with a defined equality and hashing contract, rather than
//! giving up static typing on the container.
//!
//! The algebraic operations come in two shapes: lazy borrowed iterators on the trait
//! ([`union`](Set::union), [`intersection`](Set::intersection) and friends) and operators on
//! `&MapSet` (`|`, `&`, `^`, `-`) which collect into a fresh set. The operators never touch their
//! operands; mutation in place is only available through the explicit `|=`-style assign forms.
//!
//! # Iteration Order
//! Element order is unspecified, inherited from the backing map's hasher. No API in this crate
//! promises an order, including the [`Display`] rendering and the [`to_vec`](MapSet::to_vec)
//! snapshot; tests should only ever assert membership.
//!
//! [`Display`]: std::fmt::Display
//!
//! # Concurrency
//! The set itself makes no thread-safety guarantees beyond what `&`/`&mut` already enforce; wrap
//! it in a lock if it must be shared. The optional `channel` feature (on by default) adds
//! [`channel`](MapSet::channel) and [`into_channel`](MapSet::into_channel), which hand a snapshot
//! of the elements to a consumer over a rendezvous channel from a producer thread, for feeding
//! consumer-driven pipelines.

#![warn(clippy::unwrap_used)]
#![warn(clippy::missing_panics_doc)]
#![allow(clippy::module_inception)]

pub mod set;
pub mod traits;
pub mod value;

#[cfg(test)]
pub(crate) mod util;

#[doc(inline)]
pub use set::MapSet;
#[doc(inline)]
pub use traits::Set;
#[doc(inline)]
pub use value::Value;
