//! # Presolving linear programs
//!
//! Linear programs are reduced before they are handed to a solver: rows and columns that can be
//! eliminated are removed, and what remains is brought in standard form. Every reduction is
//! recorded, such that a solution to the reduced problem can be turned into a solution to the
//! original problem.
#![warn(missing_docs)]

pub mod data;
