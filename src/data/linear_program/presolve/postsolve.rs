//! # Postsolve
//!
//! While replaying the stack, values for rows and columns become known one reduction at a time.
//! The workspace in this module tracks which values are known, such that a read of a value that
//! was never seeded or recovered is caught immediately. Such a read means the records were
//! replayed out of order.
use crate::data::linear_program::elements::{SolutionKind, Status};
use crate::data::linear_program::solution::Solution;

/// Partially known status, primal and dual values, indexed by ordinal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SolutionArrays {
    kind: SolutionKind,

    row_status: Vec<Option<Status>>,
    row_primal: Vec<Option<f64>>,
    row_dual: Vec<Option<f64>>,

    column_status: Vec<Option<Status>>,
    column_primal: Vec<Option<f64>>,
    column_dual: Vec<Option<f64>>,
}

/// Read a value that should be known at this point of the replay.
fn known<T: Copy>(values: &[Option<T>], index: usize, field: &str, entity: &str) -> T {
    match values.get(index) {
        Some(Some(value)) => *value,
        _ => panic!("{field} of {entity} {index} is not known, records were replayed out of order"),
    }
}

impl SolutionArrays {
    /// All values unknown.
    pub(crate) fn new(kind: SolutionKind, nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            kind,
            row_status: vec![None; nr_rows],
            row_primal: vec![None; nr_rows],
            row_dual: vec![None; nr_rows],
            column_status: vec![None; nr_columns],
            column_primal: vec![None; nr_columns],
            column_dual: vec![None; nr_columns],
        }
    }

    /// Which values should be reconstructed.
    pub(crate) fn kind(&self) -> SolutionKind {
        self.kind
    }

    /// Copy a solution to a compact problem in.
    ///
    /// # Arguments
    ///
    /// * `solution`: Solution with contiguous indices.
    /// * `row_origin`: Ordinal of each row of the solution.
    /// * `column_origin`: Ordinal of each column of the solution.
    pub(crate) fn seed(&mut self, solution: &Solution, row_origin: &[usize], column_origin: &[usize]) {
        debug_assert_eq!(solution.kind(), self.kind);
        assert_eq!(solution.nr_rows(), row_origin.len(), "solution doesn't match the reduced problem");
        assert_eq!(solution.nr_columns(), column_origin.len(), "solution doesn't match the reduced problem");

        for (compact, &i) in row_origin.iter().enumerate() {
            self.row_primal[i] = Some(solution.row_primal()[compact]);
            if self.kind.has_status() {
                self.row_status[i] = Some(solution.row_status()[compact]);
            }
            if self.kind.has_dual() {
                self.row_dual[i] = Some(solution.row_dual()[compact]);
            }
        }
        for (compact, &j) in column_origin.iter().enumerate() {
            self.column_primal[j] = Some(solution.column_primal()[compact]);
            if self.kind.has_status() {
                self.column_status[j] = Some(solution.column_status()[compact]);
            }
            if self.kind.has_dual() {
                self.column_dual[j] = Some(solution.column_dual()[compact]);
            }
        }
    }

    pub(crate) fn row_status(&self, row: usize) -> Status {
        debug_assert!(self.kind.has_status());
        known(&self.row_status, row, "status", "row")
    }
    pub(crate) fn row_primal(&self, row: usize) -> f64 {
        known(&self.row_primal, row, "primal value", "row")
    }
    pub(crate) fn row_dual(&self, row: usize) -> f64 {
        debug_assert!(self.kind.has_dual());
        known(&self.row_dual, row, "dual value", "row")
    }
    pub(crate) fn column_status(&self, column: usize) -> Status {
        debug_assert!(self.kind.has_status());
        known(&self.column_status, column, "status", "column")
    }
    pub(crate) fn column_primal(&self, column: usize) -> f64 {
        known(&self.column_primal, column, "primal value", "column")
    }
    pub(crate) fn column_dual(&self, column: usize) -> f64 {
        debug_assert!(self.kind.has_dual());
        known(&self.column_dual, column, "dual value", "column")
    }

    pub(crate) fn set_row_status(&mut self, row: usize, status: Status) {
        debug_assert!(self.kind.has_status());
        self.row_status[row] = Some(status);
    }
    pub(crate) fn set_row_primal(&mut self, row: usize, value: f64) {
        self.row_primal[row] = Some(value);
    }
    pub(crate) fn set_row_dual(&mut self, row: usize, value: f64) {
        debug_assert!(self.kind.has_dual());
        self.row_dual[row] = Some(value);
    }
    pub(crate) fn set_column_status(&mut self, column: usize, status: Status) {
        debug_assert!(self.kind.has_status());
        self.column_status[column] = Some(status);
    }
    pub(crate) fn set_column_primal(&mut self, column: usize, value: f64) {
        self.column_primal[column] = Some(value);
    }
    pub(crate) fn set_column_dual(&mut self, column: usize, value: f64) {
        debug_assert!(self.kind.has_dual());
        self.column_dual[column] = Some(value);
    }

    /// Add to the activity of a row that is already known.
    pub(crate) fn add_to_row_primal(&mut self, row: usize, delta: f64) {
        let value = self.row_primal(row);
        self.set_row_primal(row, value + delta);
    }

    /// Keep only the first rows and columns, all of which should be known by now.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows in the original problem.
    /// * `nr_columns`: Number of columns in the original problem.
    pub(crate) fn into_solution(self, nr_rows: usize, nr_columns: usize) -> Solution {
        let rows = 0..nr_rows;
        let columns = 0..nr_columns;
        let row_primal = rows.clone().map(|i| known(&self.row_primal, i, "primal value", "row")).collect();
        let column_primal = columns.clone().map(|j| known(&self.column_primal, j, "primal value", "column")).collect();

        match self.kind {
            SolutionKind::Basic => Solution::basic(
                rows.clone().map(|i| known(&self.row_status, i, "status", "row")).collect(),
                row_primal,
                rows.map(|i| known(&self.row_dual, i, "dual value", "row")).collect(),
                columns.clone().map(|j| known(&self.column_status, j, "status", "column")).collect(),
                column_primal,
                columns.map(|j| known(&self.column_dual, j, "dual value", "column")).collect(),
            ),
            SolutionKind::InteriorPoint => Solution::interior_point(
                row_primal,
                rows.map(|i| known(&self.row_dual, i, "dual value", "row")).collect(),
                column_primal,
                columns.map(|j| known(&self.column_dual, j, "dual value", "column")).collect(),
            ),
            SolutionKind::Integer => Solution::integer(row_primal, column_primal),
        }
    }
}
