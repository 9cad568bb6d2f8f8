//! This crate provides sequence algorithms over immutable packs of items.
//!
//! A [`Pack`] is an ordered list of items tagged with a container [`Kind`].
//! Items are usually [`Token`]s, that is Rust types seen as values, but any
//! cloneable type works. No algorithm mutates its input: every operation
//! returns a new pack (or an index, count, or boolean).
//!
//! ```
//! use pack_algorithms::prelude::*;
//!
//! let sorted = lits![3, 1, 4, 1, 5].sort();
//! assert_eq!(sorted, lits![1, 1, 3, 4, 5]);
//!
//! let types = tokens![i32, char, (), f64];
//! assert_eq!(types.erase(1).unwrap(), tokens![i32, (), f64]);
//! assert_eq!(types.rotate(2).unwrap(), tokens![(), f64, i32, char]);
//! ```
//!
//! All algorithms are pure and evaluate predicates independently per item,
//! so a pack can be given a parallel scheduling [`Policy`].
#![warn(clippy::all)]
#![deny(missing_docs)]

/// Algorithms, implemented as methods on `Pack`.
pub(crate) mod algorithms;
/// Precondition errors.
pub mod error;
pub use error::{Error, Result};
/// Predicate and comparator builders.
pub mod functional;
mod kinds;
pub use kinds::{Kind, Plain, Tuple};
/// Keyed maps.
pub mod map;
pub use map::{KeyVal, Map};
mod sequence;
pub use sequence::{Pack, Sequence};
mod policy;
pub use policy::Policy;
mod predicate;
pub use predicate::PredicateMask;
/// Import all common items.
pub mod prelude;
mod token;
pub use token::{Lit, Token};
