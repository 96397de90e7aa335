//! # Free rows
//!
//! A row without any finite bound doesn't constrain anything and can be dropped.
use log::debug;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::Status;
use crate::data::linear_program::presolve::Presolve;
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::stack::Record;

impl Presolve {
    /// Remove a row that has no finite bounds.
    ///
    /// # Arguments
    ///
    /// * `row`: Ordinal of an active row with bounds `(-inf, inf)`.
    pub fn free_row(&mut self, row: usize) {
        assert!(self.problem.row(row).is_free(), "row {row} has a finite bound");

        let removed = self.problem.remove_row(row);
        let coefficients = self.stack.allocate(removed.iter().copied());
        debug!("removed free row {row} with {} coefficients", removed.degree());
        self.stack.push(Record::FreeRow { row, coefficients });
    }
}

/// The row's activity follows from the columns, its multiplier is zero.
pub(in crate::data::linear_program::presolve) fn recover(
    row: usize,
    coefficients: &[SparseTuple<f64>],
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        arrays.set_row_status(row, Status::Basic);
    }
    let activity = coefficients.iter()
        .map(|&(j, value)| value * arrays.column_primal(j))
        .sum::<f64>();
    arrays.set_row_primal(row, activity);
    if arrays.kind().has_dual() {
        arrays.set_row_dual(row, 0_f64);
    }
}
