//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs, their solutions
//! and the reductions applied to them.

pub mod linear_program;
pub mod linear_algebra;
