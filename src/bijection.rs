//! Bijections of finite sets.
use std::error::Error;
use std::fmt;

/// Applying a bijection to a value outside its domain.
///
/// Bijections are total over their domain and undefined everywhere else, so
/// this is always a caller error rather than a property of the bijection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotInDomain;

impl fmt::Display for NotInDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("value is not in the bijection's domain")
    }
}

impl Error for NotInDomain {}

/// A bijection from a finite set onto itself.
///
/// A bijection maps every element of its domain to a distinct element of the
/// same domain, hitting every element exactly once. The domain can hold values
/// of any type `T`; only value equality is assumed, never any ordering or
/// hashing structure.
///
/// Internally a bijection is stored as a canonical ordering of the domain
/// together with the image of each domain element in that order. The name is
/// informational only and takes no part in equality: two bijections are equal
/// exactly when they have the same domain set and agree pointwise.
#[derive(Clone, Debug)]
pub struct Bijection<T> {
    name: String,
    domain: Vec<T>,
    image: Vec<T>,
}

impl<T> Bijection<T> {
    /// The display name of this bijection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The domain, duplicate-free, in canonical order.
    pub fn input(&self) -> &[T] {
        &self.domain
    }

    /// The image of every domain element, in canonical domain order.
    ///
    /// For a well-formed bijection this is always exactly the result of
    /// applying the map to every element of [`input`][Bijection::input], and
    /// contains the same elements as the domain.
    pub fn output(&self) -> &[T] {
        &self.image
    }

    /// Iterate over the `(domain element, image element)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&T, &T)> {
        self.domain.iter().zip(self.image.iter())
    }
}

impl<T> Bijection<T>
where
    T: Eq,
{
    /// Create a bijection from a domain ordering and the image of each domain
    /// element.
    ///
    /// Returns `None` unless the mapping is a true bijection: the domain must
    /// be duplicate-free and the image must be a rearrangement of the domain.
    pub fn new(name: impl Into<String>, domain: Vec<T>, image: Vec<T>) -> Option<Bijection<T>> {
        if Self::well_formed(&domain, &image) {
            Some(Bijection {
                name: name.into(),
                domain,
                image,
            })
        } else {
            None
        }
    }

    /// Construct without validation. Callers guarantee well-formedness.
    pub(crate) fn from_parts(name: &str, domain: Vec<T>, image: Vec<T>) -> Bijection<T> {
        debug_assert!(Self::well_formed(&domain, &image));
        Bijection {
            name: name.into(),
            domain,
            image,
        }
    }

    // Only `Eq` is available for `T`, so membership checks are linear scans.
    fn well_formed(domain: &[T], image: &[T]) -> bool {
        if domain.len() != image.len() {
            return false;
        }
        for (i, x) in domain.iter().enumerate() {
            if domain[..i].contains(x) {
                return false;
            }
        }
        for (i, y) in image.iter().enumerate() {
            if !domain.contains(y) || image[..i].contains(y) {
                return false;
            }
        }
        true
    }

    /// Apply the bijection to a value.
    ///
    /// Total over the domain; applying to any other value is an error.
    pub fn apply(&self, x: &T) -> Result<&T, NotInDomain> {
        match self.domain.iter().position(|d| d == x) {
            Some(i) => Ok(&self.image[i]),
            None => Err(NotInDomain),
        }
    }

    /// Whether this bijection fixes every element of its domain.
    pub fn is_identity(&self) -> bool {
        self.pairs().all(|(x, y)| x == y)
    }
}

/// Mapping equality: same domain set, pointwise agreeing map. Names are
/// ignored, as is the canonical ordering either side happens to store.
impl<T> PartialEq for Bijection<T>
where
    T: Eq,
{
    fn eq(&self, other: &Bijection<T>) -> bool {
        self.domain.len() == other.domain.len()
            && self.pairs().all(|(x, y)| other.apply(x) == Ok(y))
    }
}

impl<T> Eq for Bijection<T> where T: Eq {}

impl<T> fmt::Display for Bijection<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.domain.is_empty() {
            return f.write_str("()");
        }
        let mut first = true;
        for (x, y) in self.pairs() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{} -> {}", x, y)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_bijections() {
        assert!(Bijection::new("id", vec![1, 2, 3], vec![1, 2, 3]).is_some());
        assert!(Bijection::new("cycle", vec![1, 2, 3], vec![2, 3, 1]).is_some());
        assert!(Bijection::new("empty", Vec::<u32>::new(), vec![]).is_some());
    }

    #[test]
    fn new_rejects_non_bijections() {
        // length mismatch
        assert!(Bijection::new("f", vec![1, 2, 3], vec![1, 2]).is_none());
        // duplicate in the domain
        assert!(Bijection::new("f", vec![1, 1, 2], vec![1, 1, 2]).is_none());
        // image element outside the domain
        assert!(Bijection::new("f", vec![1, 2, 3], vec![1, 2, 4]).is_none());
        // image not injective
        assert!(Bijection::new("f", vec![1, 2, 3], vec![1, 2, 2]).is_none());
    }

    #[test]
    fn apply_is_total_over_the_domain() {
        let f = Bijection::new("f", vec![1, 2, 3], vec![2, 3, 1]).unwrap();
        assert_eq!(f.apply(&1), Ok(&2));
        assert_eq!(f.apply(&2), Ok(&3));
        assert_eq!(f.apply(&3), Ok(&1));
        assert_eq!(f.apply(&4), Err(NotInDomain));
    }

    #[test]
    fn equality_ignores_name_and_ordering() {
        let f = Bijection::new("f", vec![1, 2, 3], vec![2, 3, 1]).unwrap();
        let g = Bijection::new("g", vec![3, 1, 2], vec![1, 2, 3]).unwrap();
        let h = Bijection::new("h", vec![1, 2, 3], vec![3, 1, 2]).unwrap();
        assert_eq!(f, g);
        assert_ne!(f, h);
    }

    #[test]
    fn equality_requires_same_domain() {
        let f = Bijection::new("f", vec![1, 2], vec![2, 1]).unwrap();
        let g = Bijection::new("g", vec![1, 3], vec![3, 1]).unwrap();
        assert_ne!(f, g);
    }

    #[test]
    fn fmt_empty() {
        let f = Bijection::new("empty", Vec::<u32>::new(), vec![]).unwrap();
        assert_eq!(format!("{}", f), "()");
    }

    #[test]
    fn fmt_pairs() {
        let f = Bijection::new("f", vec![1, 2, 3], vec![2, 3, 1]).unwrap();
        assert_eq!(format!("{}", f), "1 -> 2; 2 -> 3; 3 -> 1");
    }

    #[test]
    fn output_is_image_of_input() {
        let f = Bijection::new("f", vec![1, 2, 3], vec![3, 1, 2]).unwrap();
        let image: Vec<_> = f.input().iter().map(|x| *f.apply(x).unwrap()).collect();
        assert_eq!(f.output(), &image[..]);
    }

    #[test]
    fn heap_allocated_elements_compare_by_value() {
        let domain: Vec<String> = vec!["a".into(), "b".into()];
        let image: Vec<String> = vec!["b".into(), "a".into()];
        let f = Bijection::new("swap", domain, image).unwrap();
        // a fresh allocation, equal by value only
        assert_eq!(f.apply(&"a".to_string()), Ok(&"b".to_string()));
    }
}
