//! # Free columns
//!
//! A column without finite bounds is written as the difference of two nonnegative columns.
use log::debug;

use crate::data::linear_program::elements::Status;
use crate::data::linear_program::presolve::Presolve;
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::stack::Record;

impl Presolve {
    /// Substitute `x = x+ - x-` with `x+, x- >= 0`.
    ///
    /// The positive part keeps the ordinal of the column. The negative part is a new column with
    /// negated cost and coefficients.
    ///
    /// # Arguments
    ///
    /// * `column`: Ordinal of an active column with bounds `(-inf, inf)`.
    ///
    /// # Return value
    ///
    /// The ordinal of the negative part.
    pub fn free_column(&mut self, column: usize) -> usize {
        let variable = self.problem.column(column);
        assert!(variable.is_free(), "column {column} has a finite bound");
        let (variable_type, cost) = (variable.variable_type(), variable.cost());
        let coefficients = variable.coefficients().to_vec();

        self.problem.set_column_bounds(column, 0_f64, f64::INFINITY);
        let negative_part = self.problem.append_column(0_f64, f64::INFINITY, variable_type, -cost);
        for (row, value) in coefficients {
            self.problem.insert_coefficient(row, negative_part, -value);
        }

        debug!("split free column {column}, negative part is column {negative_part}");
        self.stack.push(Record::FreeColumn { column, negative_part });
        negative_part
    }
}

/// `x = x+ - x-`, nonbasic only if both parts are.
pub(in crate::data::linear_program::presolve) fn recover(
    column: usize,
    negative_part: usize,
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        let both_nonbasic = arrays.column_status(column).is_nonbasic()
            && arrays.column_status(negative_part).is_nonbasic();
        let status = if both_nonbasic { Status::NonBasicFree } else { Status::Basic };
        arrays.set_column_status(column, status);
    }
    let value = arrays.column_primal(column) - arrays.column_primal(negative_part);
    arrays.set_column_primal(column, value);
    if arrays.kind().has_dual() {
        arrays.set_column_dual(column, 0_f64);
    }
}
