//! Import everything needed to build and query packs.
pub use crate::functional::{equals, less, negate};
pub use crate::{Kind, Map, Pack, Plain, Policy, PredicateMask, Sequence, Token, Tuple};
pub use crate::{kind, lits, pack, tokens};
