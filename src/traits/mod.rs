//! The [`Set`] trait, describing the set ADT itself, along with the generic iterator types
//! returned by its algebraic methods.
//!
//! Any collection of distinct elements which can report membership and iterate its contents gets
//! the whole set algebra for free from the default implementations: equality, subset testing and
//! the lazy union / intersection / difference iterators all build on [`contains`](Set::contains)
//! and [`iter`](Set::iter).

mod set;

pub use set::*;
