//! Scheduling policies.
//!
//! A policy never changes what an algorithm returns, only how the work is
//! spread. Predicates are evaluated independently per item so any policy may
//! evaluate them in any order.
use rayon::prelude::*;
use std::ops::Range;
use tracing::trace;

/// All available scheduling policies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Do all computations sequentially.
    Sequential,
    /// Recursively cut in two with join until given block size.
    Join(usize),
    /// Hand everything to rayon's own scheduler.
    Rayon,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Sequential
    }
}

impl Policy {
    /// Apply `op` to every index of `0..len`, collecting results in order.
    pub(crate) fn map_indices<U, F>(self, len: usize, op: F) -> Vec<U>
    where
        U: Send,
        F: Fn(usize) -> U + Sync,
    {
        match self {
            Policy::Sequential => (0..len).map(op).collect(),
            Policy::Rayon => (0..len).into_par_iter().map(&op).collect(),
            Policy::Join(block) => {
                let mut output = Vec::with_capacity(len);
                join_blocks(0..len, block.max(1), &op, &mut output);
                output
            }
        }
    }

    /// Run two independent computations on `len` items in total.
    pub(crate) fn join<A, B, RA, RB>(self, len: usize, left: A, right: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let parallel = match self {
            Policy::Sequential => false,
            Policy::Join(block) => len > block.max(1),
            Policy::Rayon => true,
        };
        if parallel {
            rayon::join(left, right)
        } else {
            (left(), right())
        }
    }
}

fn join_blocks<U, F>(range: Range<usize>, block: usize, op: &F, output: &mut Vec<U>)
where
    U: Send,
    F: Fn(usize) -> U + Sync,
{
    if range.len() <= block {
        output.extend(range.map(op));
        return;
    }
    let middle = range.start + range.len() / 2;
    trace!(start = range.start, middle, end = range.end, "dividing");
    let (mut left, right) = rayon::join(
        || {
            let mut left = Vec::with_capacity(middle - range.start);
            join_blocks(range.start..middle, block, op, &mut left);
            left
        },
        || {
            let mut right = Vec::with_capacity(range.end - middle);
            join_blocks(middle..range.end, block, op, &mut right);
            right
        },
    );
    output.append(&mut left);
    output.extend(right);
}
