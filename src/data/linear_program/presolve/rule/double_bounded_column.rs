//! # Double bounded columns
//!
//! The upper bound of a column `0 <= x <= u` is replaced by a row `x + x' = u` with a new column
//! `x' >= 0`, such that no column has an upper bound anymore.
use log::debug;

use crate::data::linear_program::elements::{Status, VariableType};
use crate::data::linear_program::presolve::Presolve;
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::stack::Record;

impl Presolve {
    /// Replace the upper bound of a nonnegative column by a companion column and a row.
    ///
    /// # Arguments
    ///
    /// * `column`: Ordinal of an active column with bounds `[0, u]`, `u` finite.
    ///
    /// # Return value
    ///
    /// The ordinals of the companion column and of the new row.
    pub fn double_bounded_column(&mut self, column: usize) -> (usize, usize) {
        let variable = self.problem.column(column);
        let upper = variable.upper();
        assert_eq!(variable.lower(), 0_f64, "column {column} is not nonnegative");
        assert!(upper.is_finite(), "column {column} has no finite upper bound");

        self.problem.set_column_bounds(column, 0_f64, f64::INFINITY);
        let companion = self.problem.append_column(0_f64, f64::INFINITY, VariableType::Continuous, 0_f64);
        let row = self.problem.append_row(upper, upper);
        self.problem.insert_coefficient(row, column, 1_f64);
        self.problem.insert_coefficient(row, companion, 1_f64);

        debug!("upper bound {upper} of column {column} moved to row {row} with companion column {companion}");
        self.stack.push(Record::DoubleBoundedColumn { column, companion });
        (companion, row)
    }
}

/// The column is at its upper bound exactly when the companion is at zero.
pub(in crate::data::linear_program::presolve) fn recover(
    column: usize,
    companion: usize,
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        let status = combined_status(arrays.column_status(column), arrays.column_status(companion));
        arrays.set_column_status(column, status);
    }
    if arrays.kind().has_dual() {
        // The multiplier of the extra row is minus the reduced cost of the companion
        arrays.set_column_dual(column, arrays.column_dual(column) - arrays.column_dual(companion));
    }
}

/// Status of `0 <= x <= u` given the statuses of `x >= 0` and `x' >= 0` in `x + x' = u`.
///
/// # Panics
///
/// If either part has a status other than basic or at its lower bound; both parts are
/// nonnegative without an upper bound.
fn combined_status(column: Status, companion: Status) -> Status {
    match (column, companion) {
        (Status::NonBasicLower, Status::Basic | Status::NonBasicLower) => Status::NonBasicLower,
        (Status::Basic, Status::NonBasicLower) => Status::NonBasicUpper,
        (Status::Basic, Status::Basic) => Status::Basic,
        (column, companion) => unreachable!(
            "statuses {column:?} and {companion:?} are impossible for a column and its companion",
        ),
    }
}
