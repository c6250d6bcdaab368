//! Enumeration of all bijections of a finite set.
use std::slice;

use num_traits::{CheckedMul, FromPrimitive, One};

use crate::bijection::Bijection;

/// The set of all bijections of a finite domain onto itself.
///
/// For a domain of n elements this set has n! elements and is the carrier of
/// the symmetric group on that domain. Elements are pairwise distinct under
/// mapping equality; the enumeration guarantees this constructively rather
/// than by deduplication.
///
/// The set also records the canonical domain ordering every enumerated
/// bijection was built against.
#[derive(Clone, Debug)]
pub struct PermutationSet<T> {
    domain: Vec<T>,
    perms: Vec<Bijection<T>>,
}

impl<T> PermutationSet<T> {
    /// Number of bijections, always n! for a domain of n elements.
    pub fn len(&self) -> usize {
        self.perms.len()
    }

    /// Always false: even the empty domain has its empty bijection.
    pub fn is_empty(&self) -> bool {
        self.perms.is_empty()
    }

    /// The domain, duplicate-free, in canonical order.
    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Iterate over the bijections.
    pub fn iter(&self) -> slice::Iter<Bijection<T>> {
        self.perms.iter()
    }
}

impl<T> PermutationSet<T>
where
    T: Eq,
{
    /// Membership test under mapping equality.
    pub fn contains(&self, f: &Bijection<T>) -> bool {
        self.perms.iter().any(|g| g == f)
    }
}

impl<'a, T> IntoIterator for &'a PermutationSet<T> {
    type Item = &'a Bijection<T>;
    type IntoIter = slice::Iter<'a, Bijection<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.perms.iter()
    }
}

impl<T> IntoIterator for PermutationSet<T> {
    type Item = Bijection<T>;
    type IntoIter = std::vec::IntoIter<Bijection<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.perms.into_iter()
    }
}

/// Enumerate every bijection of a finite set onto itself.
///
/// Duplicates in the input collapse before enumeration begins; the first
/// occurrence of each element fixes the canonical domain ordering. The i-th
/// enumerated ordering becomes the bijection sending the i-th canonical
/// domain element to the i-th ordering element.
///
/// The returned set has exactly n! elements for a deduplicated domain of n
/// elements. The empty domain yields exactly one (empty) bijection and a
/// singleton domain yields only the identity.
///
/// ```
/// use symmetric::bijections_of;
///
/// let bijections = bijections_of(vec![1, 2, 3]);
/// assert_eq!(bijections.len(), 6);
/// ```
pub fn bijections_of<T, I>(domain: I) -> PermutationSet<T>
where
    T: Clone + Eq,
    I: IntoIterator<Item = T>,
{
    let mut canonical: Vec<T> = Vec::new();
    for x in domain {
        if !canonical.contains(&x) {
            canonical.push(x);
        }
    }

    let perms = orderings(&canonical)
        .into_iter()
        .map(|image| Bijection::from_parts("bijection", canonical.clone(), image))
        .collect();

    PermutationSet {
        domain: canonical,
        perms,
    }
}

/// All orderings of a slice, by recursive insertion.
///
/// Splitting off the head and inserting it at every position of every
/// ordering of the tail produces n * (n-1)! = n! orderings, all distinct and
/// all present by induction on the slice length. The input is never mutated;
/// each recursion level works on a subslice of the caller's data.
fn orderings<T>(elements: &[T]) -> Vec<Vec<T>>
where
    T: Clone,
{
    let (head, rest) = match elements.split_first() {
        Some(split) => split,
        None => return vec![vec![]],
    };

    let sub = orderings(rest);
    let mut result = Vec::with_capacity(sub.len() * elements.len());

    for perm in &sub {
        for position in 0..=perm.len() {
            let mut extended = perm.clone();
            extended.insert(position, head.clone());
            result.push(extended);
        }
    }

    result
}

/// n! with overflow checking, in any integer type that can represent it.
///
/// Returns `None` when n! overflows `N`. Useful as the expected carrier size
/// of [`bijections_of`] before paying for the enumeration.
pub fn factorial<N>(n: usize) -> Option<N>
where
    N: CheckedMul + FromPrimitive + One,
{
    let mut acc = N::one();
    for k in 1..=n {
        acc = acc.checked_mul(&N::from_usize(k)?)?;
    }
    Some(acc)
}
