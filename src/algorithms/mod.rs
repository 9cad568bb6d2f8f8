//! Algorithms on packs.
//!
//! Each module adds methods to [`Pack`](crate::Pack), higher ones being
//! written in terms of lower ones.

pub(crate) mod filtering;
pub(crate) mod ordering;
pub(crate) mod positional;
pub(crate) mod search;
pub(crate) mod structural;
