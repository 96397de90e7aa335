//! # Singleton rows
//!
//! An equality row with a single coefficient determines the value of its column. The row is
//! removed and the column is fixed at that value.
use log::{debug, warn};

use crate::data::linear_program::elements::Status;
use crate::data::linear_program::presolve::{Infeasibility, Presolve};
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::stack::Record;

impl Presolve {
    /// Remove an equality row `a x = b` and fix `x` at `b / a`.
    ///
    /// # Arguments
    ///
    /// * `row`: Ordinal of an active equality row with exactly one coefficient.
    ///
    /// # Return value
    ///
    /// An error if the implied value violates a bound of the column by more than the tolerance
    /// for that bound, or if it is not a finite number. In that case, nothing was changed.
    pub fn singleton_row(&mut self, row: usize) -> Result<(), Infeasibility> {
        let constraint = self.problem.row(row);
        assert!(constraint.is_equality(), "row {row} is not an equality");
        assert_eq!(constraint.degree(), 1, "row {row} doesn't have a single coefficient");
        let (column, coefficient) = constraint.coefficients()[0];
        let value = constraint.lower() / coefficient;

        let variable = self.problem.column(column);
        let (lower, upper) = (variable.lower(), variable.upper());
        let overflow = !value.is_finite();
        let below = lower.is_finite() && value < lower - self.settings.bound_tolerance(lower);
        let above = upper.is_finite() && value > upper + self.settings.bound_tolerance(upper);
        if overflow || below || above {
            warn!("singleton row {row} implies value {value} for column {column}, outside of [{lower}, {upper}]");
            return Err(Infeasibility::SingletonRow { row, column, value, lower, upper });
        }

        debug!("singleton row {row} fixes column {column} at {value}");
        self.stack.push(Record::SingletonRow { row, column, coefficient });
        self.problem.remove_row(row);
        self.problem.set_column_bounds(column, value, value);
        self.fixed_column(column);
        Ok(())
    }
}

/// Replayed after the fixed column record of the column.
///
/// The row is what pinned the column, so the row becomes nonbasic and the column basic. The
/// reduced cost that the fixed column recovery computed belongs to the row.
pub(in crate::data::linear_program::presolve) fn recover(
    row: usize,
    column: usize,
    coefficient: f64,
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        debug_assert_eq!(arrays.column_status(column), Status::NonBasicFixed);
        arrays.set_column_status(column, Status::Basic);
        arrays.set_row_status(row, Status::NonBasicFixed);
    }
    arrays.set_row_primal(row, coefficient * arrays.column_primal(column));
    if arrays.kind().has_dual() {
        arrays.set_row_dual(row, arrays.column_dual(column) / coefficient);
        arrays.set_column_dual(column, 0_f64);
    }
}
