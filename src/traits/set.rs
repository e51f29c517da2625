use std::iter::{Chain, FusedIterator};
use std::marker::PhantomData;

/// A collection of distinct elements.
///
/// The required methods cover membership management; everything algebraic is provided on top of
/// [`contains`](Set::contains), [`iter`](Set::iter) and [`len`](Set::len). Implementations must
/// uphold distinctness: after `insert(e)`, a second `insert(e)` returns false and leaves the
/// cardinality unchanged.
pub trait Set<T>: IntoIterator<Item = T> + Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the cardinality of the set: the number of distinct elements.
    fn len(&self) -> usize;

    /// Returns true if the set contains `item`.
    fn contains(&self, item: &T) -> bool;

    /// Inserts `item` into the set. Returns true if the element was newly inserted, or false if
    /// the set already contained it (in which case the set is unchanged).
    fn insert(&mut self, item: T) -> bool;

    /// Removes `item` from the set. Returns true if the element was present, or false if the set
    /// did not contain it.
    fn remove(&mut self, item: &T) -> bool;

    /// Removes every element from the set. Returns true if the set held at least one element
    /// beforehand, or false if it was already empty. A second consecutive call therefore always
    /// returns false.
    fn clear(&mut self) -> bool;

    /// Returns an iterator over all elements in the set, as references. Calling this again
    /// restarts iteration from the beginning.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `self` and `other` have the same cardinality and every element of `self`
    /// is contained in `other` - which, at equal cardinality, makes the two sets equal. Symmetric
    /// by construction.
    fn set_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    ///
    /// A set with greater cardinality can't be a subset, so that case is rejected without
    /// scanning. The empty set is a subset of every set, itself included.
    fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        for item in self.iter() {
            if !other.contains(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates an owned iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    fn into_difference(self, other: Self) -> IntoDifference<Self, T> {
        IntoDifference {
            inner: self.into_iter(),
            other,
            _phantom: PhantomData,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, Self, T> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates an owned iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    fn into_intersection(self, other: Self) -> IntoIntersection<Self, T> {
        IntoIntersection {
            inner: self.into_iter(),
            other,
            _phantom: PhantomData,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`, yielding
    /// elements common to both exactly once. (`self ∪ other`)
    fn union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }
}

pub struct Difference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anything from none to all of the underlying elements may survive the filter.
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Difference<'a, S, T> {}

pub struct IntoDifference<S: Set<T>, T> {
    pub(crate) inner: S::IntoIter,
    pub(crate) other: S,
    // We need the type parameter T for Set, despite not directly owning any T.
    pub(crate) _phantom: PhantomData<T>,
}

impl<S: Set<T>, T> Iterator for IntoDifference<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<S: Set<T>, T> FusedIterator for IntoDifference<S, T> {}

pub struct SymmetricDifference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for SymmetricDifference<'a, S, T> {}

pub struct Intersection<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Intersection<'a, S, T> {}

pub struct IntoIntersection<S: Set<T>, T> {
    pub(crate) inner: S::IntoIter,
    pub(crate) other: S,
    // We need the type parameter T for Set, despite not directly owning any T.
    pub(crate) _phantom: PhantomData<T>,
}

impl<S: Set<T>, T> Iterator for IntoIntersection<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<S: Set<T>, T> FusedIterator for IntoIntersection<S, T> {}

pub struct Union<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Union<'a, S, T> {}
