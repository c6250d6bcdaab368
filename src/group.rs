//! Symmetric groups discovered by exhaustive search.
use num_integer::Integer;

use crate::bijection::{Bijection, NotInDomain};
use crate::enumerate::{bijections_of, PermutationSet};

/// The symmetric group on a finite domain.
///
/// The carrier set is enumerated once at construction and never mutated
/// afterwards, so a group can be shared freely between threads. The group
/// operations deliberately discover structure by exhaustive search over the
/// carrier instead of computing it in closed form: [`identity`] scans for the
/// element fixing every domain value and [`inverse_of`] scans for the element
/// undoing its argument pointwise. Every search compares elements by value.
///
/// [`identity`]: BijectionGroup::identity
/// [`inverse_of`]: BijectionGroup::inverse_of
#[derive(Clone, Debug)]
pub struct BijectionGroup<T> {
    carrier: PermutationSet<T>,
}

/// The symmetric group over a finite set.
///
/// Enumerates all n! bijections of the (deduplicated) domain up front; the
/// factorial blowup is the accepted cost of the search-based design.
///
/// ```
/// use symmetric::group_over;
///
/// let group = group_over(vec![1, 2, 3]);
/// assert_eq!(group.order(), 6);
/// ```
pub fn group_over<T, I>(domain: I) -> BijectionGroup<T>
where
    T: Clone + Eq,
    I: IntoIterator<Item = T>,
{
    BijectionGroup {
        carrier: bijections_of(domain),
    }
}

impl<T> BijectionGroup<T> {
    /// The enumerated carrier set.
    pub fn carrier(&self) -> &PermutationSet<T> {
        &self.carrier
    }

    /// The order of the group, n! for a domain of n elements.
    pub fn order(&self) -> usize {
        self.carrier.len()
    }

    /// The domain, duplicate-free, in canonical order.
    pub fn domain(&self) -> &[T] {
        self.carrier.domain()
    }
}

impl<T> BijectionGroup<T>
where
    T: Clone + Eq,
{
    /// Compose two bijections, right to left: the result maps x to f(g(x)).
    ///
    /// The composite is a fresh bijection evaluated over the group's domain,
    /// not a reference into the carrier; compare it to carrier elements with
    /// `==` (mapping equality), never by identity or name.
    ///
    /// Errors when either argument cannot be applied over the whole domain or
    /// the composite escapes it, which only happens for bijections drawn from
    /// a different group.
    pub fn compose(
        &self,
        f: &Bijection<T>,
        g: &Bijection<T>,
    ) -> Result<Bijection<T>, NotInDomain> {
        let domain = self.carrier.domain().to_vec();
        let mut image = Vec::with_capacity(domain.len());
        for x in &domain {
            image.push(f.apply(g.apply(x)?)?.clone());
        }
        Bijection::new("composition", domain, image).ok_or(NotInDomain)
    }

    /// Find the identity element by scanning the carrier for the bijection
    /// that fixes every domain value.
    ///
    /// `None` only if the carrier holds no such element, which cannot happen
    /// for a correctly enumerated carrier; the contract still signals absence
    /// instead of panicking.
    pub fn identity(&self) -> Option<&Bijection<T>> {
        self.carrier.iter().find(|b| b.is_identity())
    }

    /// Find the inverse of a bijection by scanning the carrier for the
    /// element g with g(f(x)) = x for every domain value x.
    ///
    /// `None` when no carrier element matches, the escape hatch for arguments
    /// that do not actually act on this group's domain.
    pub fn inverse_of(&self, f: &Bijection<T>) -> Option<&Bijection<T>> {
        let mut mapped = Vec::with_capacity(self.carrier.domain().len());
        for x in self.carrier.domain() {
            mapped.push(f.apply(x).ok()?);
        }

        self.carrier.iter().find(|g| {
            mapped
                .iter()
                .zip(self.carrier.domain())
                .all(|(&y, x)| g.apply(y) == Ok(x))
        })
    }

    /// Raise a bijection to an integer power by repeated squaring.
    ///
    /// Negative exponents go through [`inverse_of`][BijectionGroup::inverse_of]
    /// first, so f.pow(-1) is the searched inverse and f.pow(0) the searched
    /// identity. `None` when either search fails or the argument is not
    /// compatible with this group's domain.
    pub fn pow<E>(&self, f: &Bijection<T>, exponent: E) -> Option<Bijection<T>>
    where
        E: Integer + Clone,
    {
        if exponent < E::zero() {
            let inverse = self.inverse_of(f)?.clone();
            // Fixed-width exponents cannot negate their minimum value, but
            // exponent + 1 is always safely negatable; peel one inverse
            // application off to compensate.
            let rest = E::zero() - (exponent + E::one());
            let powered = self.pow(&inverse, rest)?;
            return self.compose(&inverse, &powered).ok();
        }

        let mut result = self.identity()?.clone();
        let mut base = f.clone();
        let mut exp = exponent;
        let two = E::one() + E::one();

        while exp > E::zero() {
            if exp.is_odd() {
                result = self.compose(&base, &result).ok()?;
            }
            exp = exp / two.clone();
            if exp > E::zero() {
                base = self.compose(&base, &base).ok()?;
            }
        }

        Some(result)
    }
}
