//! # Representing linear programs
//!
//! A `Problem` is modified in place by the rules of a `Presolve` session, after which a
//! `Solution` to the reduced problem can be turned into one for the original problem.
pub mod elements;
pub mod presolve;
pub mod problem;
pub mod solution;
