//! # Reduction rules
//!
//! Each submodule contains a rule: a method on the session that rewrites the problem and pushes a
//! record, and the function that undoes it during postsolve.
//!
//! The methods check their preconditions with assertions; calling a rule on a row or column that
//! is not eligible is a programming error. The rules that can detect infeasibility check for it
//! before changing anything.
pub(super) mod bounded_column;
pub(super) mod double_bounded_column;
pub(super) mod empty;
pub(super) mod fixed_column;
pub(super) mod free_column;
pub(super) mod free_row;
pub(super) mod inequality_row;
pub(super) mod singleton_row;
