//! A finite symmetric group library
//!
//! This crate enumerates all bijections of a finite set onto itself and equips the enumerated set
//! with the symmetric group structure: composition, identity lookup and inverse lookup.
//!
//! The group operations are discovered by exhaustive search over the enumerated carrier set rather
//! than computed in closed form. This keeps the crate a reference implementation for small domains;
//! the n! carrier is materialized in memory and nothing is done to avoid that.
//!
//! ```
//! use symmetric::{bijections_of, group_over};
//!
//! let bijections = bijections_of(vec![1, 2, 3]);
//! assert_eq!(bijections.len(), 6);
//!
//! let group = group_over(vec![1, 2, 3]);
//! let id = group.identity().unwrap();
//! for f in group.carrier() {
//!     let inv = group.inverse_of(f).unwrap();
//!     assert_eq!(&group.compose(f, inv).unwrap(), id);
//! }
//! ```
pub mod bijection;
pub mod enumerate;
pub mod group;

pub use bijection::{Bijection, NotInDomain};
pub use enumerate::{bijections_of, factorial, PermutationSet};
pub use group::{group_over, BijectionGroup};
