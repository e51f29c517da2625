use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use crate::traits::Set;
use super::Iter;

/// A set of distinct elements, stored as the keys of a [`HashMap`].
///
/// The map's value type is `()`, which has zero width, so the map behaves as a set without
/// spending anything per entry beyond the element itself. Elements must be `Hash + Eq`; iteration
/// order is unspecified.
pub struct MapSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> MapSet<T> {
    /// Creates an empty MapSet using the default hasher.
    pub fn new() -> MapSet<T> {
        MapSet {
            inner: HashMap::new(),
        }
    }

    /// Creates an empty MapSet with at least the provided `cap`acity, allowing insertions without
    /// reallocation.
    pub fn with_cap(cap: usize) -> MapSet<T> {
        MapSet {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> MapSet<T, B> {
    /// Creates an empty MapSet using the provided `hasher`.
    pub fn with_hasher(hasher: B) -> MapSet<T, B> {
        MapSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty MapSet with at least the provided `cap`acity, using the provided `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> MapSet<T, B> {
        MapSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the cardinality of the set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current capacity of the set.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Inserts `item` into the set. Returns true if the element was newly inserted, or false if
    /// the set already contained it.
    ///
    /// As with the standard library, an already-present element isn't replaced.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Removes `item` from the set. Returns true if the element was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes `item` from the set, returning the stored element if it was present.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|entry| entry.0)
    }

    /// Returns true if the set contains `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Removes every element from the set, keeping the allocated capacity. Returns true if the
    /// set held at least one element beforehand, so a second consecutive call always returns
    /// false.
    pub fn clear(&mut self) -> bool {
        if self.inner.is_empty() {
            return false;
        }
        self.inner.clear();
        true
    }

    /// Increases the capacity of the set to ensure that `extra` further elements will fit.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Returns an iterator over all elements in the set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a snapshot of the set's elements as a [`Vec`], cloning each element exactly once.
    /// The order of the snapshot is unspecified.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for MapSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, item: &T) -> bool {
        self.inner.contains_key(item)
    }

    fn insert(&mut self, item: T) -> bool {
        MapSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        MapSet::remove(self, item)
    }

    fn clear(&mut self) -> bool {
        MapSet::clear(self)
    }

    fn iter<'a>(&'a self) -> Iter<'a, T> {
        MapSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for MapSet<T, B> {
    fn default() -> Self {
        MapSet {
            inner: HashMap::default(),
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for MapSet<T, B> {
    fn clone(&self) -> Self {
        MapSet {
            inner: self.inner.clone(),
        }
    }
}

/// Two sets are equal iff they have the same cardinality and every element of one is contained in
/// the other. The hashers may differ in state; only membership matters.
impl<T: Hash + Eq, B: BuildHasher> PartialEq for MapSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for MapSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for MapSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = MapSet::with_cap_and_hasher(iter.size_hint().0, B::default());

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for MapSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for MapSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &MapSet<T, B> {
    type Output = MapSet<T, B>;

    /// Returns the union of the two sets as a fresh set. Neither operand is modified.
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for MapSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.reserve(rhs.len());
        for item in rhs {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &MapSet<T, B> {
    type Output = MapSet<T, B>;

    /// Returns the intersection of the two sets as a fresh set. Neither operand is modified.
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for MapSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.inner.retain(|item, _| rhs.contains(item));
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &MapSet<T, B> {
    type Output = MapSet<T, B>;

    /// Returns the symmetric difference of the two sets - the elements in exactly one of them -
    /// as a fresh set. Neither operand is modified.
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for MapSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &MapSet<T, B> {
    type Output = MapSet<T, B>;

    /// Returns the relative complement of `rhs` in `self` as a fresh set. Neither operand is
    /// modified.
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for MapSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for MapSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `{ e1, e2, ... }` for debugging and logging. The element order is
/// unspecified and must not be relied upon.
impl<T: Hash + Eq + Display, B: BuildHasher> Display for MapSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "{{ {} }}",
            self.iter()
                .map(|item| item.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
