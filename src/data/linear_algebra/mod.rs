//! # Linear algebra primitives
//!
//! Sparse data is represented as (index, value) tuples.

/// A single nonzero value: index and value.
pub type SparseTuple<F> = (usize, F);
