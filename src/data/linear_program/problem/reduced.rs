//! # Compact copies of a problem
//!
//! After presolving, the remaining problem has gaps in its ordinals. Solvers work with
//! contiguous indices, so the remaining problem is copied together with a map back.
use crate::data::linear_program::problem::Problem;

/// A problem with contiguous row and column indices, and where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedProblem {
    problem: Problem,
    /// For each compact row index, the ordinal in the problem it was copied from.
    row_origin: Vec<usize>,
    /// For each compact column index, the ordinal in the problem it was copied from.
    column_origin: Vec<usize>,
}

impl ReducedProblem {
    pub(super) fn new(problem: Problem, row_origin: Vec<usize>, column_origin: Vec<usize>) -> Self {
        debug_assert_eq!(problem.nr_row_slots(), row_origin.len());
        debug_assert_eq!(problem.nr_column_slots(), column_origin.len());
        debug_assert!(row_origin.is_sorted() && column_origin.is_sorted());

        Self { problem, row_origin, column_origin }
    }

    /// The problem to be solved.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }
    /// Ordinals, in the presolved problem, of the rows of the compact problem.
    pub fn row_origin(&self) -> &[usize] {
        &self.row_origin
    }
    /// Ordinals, in the presolved problem, of the columns of the compact problem.
    pub fn column_origin(&self) -> &[usize] {
        &self.column_origin
    }
    /// Number of rows in the compact problem.
    pub fn nr_rows(&self) -> usize {
        self.row_origin.len()
    }
    /// Number of columns in the compact problem.
    pub fn nr_columns(&self) -> usize {
        self.column_origin.len()
    }

    /// Take the problem out.
    pub fn into_problem(self) -> Problem {
        self.problem
    }
}
