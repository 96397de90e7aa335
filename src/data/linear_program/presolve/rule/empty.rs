//! # Empty rows and columns
//!
//! A row without coefficients is either redundant or infeasible. A column without coefficients can
//! be fixed at its best bound, unless that bound is missing.
use log::{debug, warn};

use crate::data::linear_program::elements::Status;
use crate::data::linear_program::presolve::{Infeasibility, Presolve};
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::stack::Record;

impl Presolve {
    /// Remove a row without coefficients.
    ///
    /// # Arguments
    ///
    /// * `row`: Ordinal of an active row without coefficients.
    ///
    /// # Return value
    ///
    /// An error if zero is not within the bounds of the row, up to the feasibility tolerance. In
    /// that case, nothing was changed.
    pub fn empty_row(&mut self, row: usize) -> Result<(), Infeasibility> {
        let constraint = self.problem.row(row);
        assert_eq!(constraint.degree(), 0, "row {row} is not empty");
        let (lower, upper) = (constraint.lower(), constraint.upper());

        let tolerance = self.settings.feasibility_tolerance;
        if lower > tolerance || upper < -tolerance {
            warn!("empty row {row} with bounds [{lower}, {upper}] is infeasible");
            return Err(Infeasibility::EmptyRow { row, lower, upper });
        }

        self.problem.remove_row(row);
        debug!("removed empty row {row}");
        self.stack.push(Record::EmptyRow { row });
        Ok(())
    }

    /// Fix a column without coefficients at the bound that its cost prefers.
    ///
    /// The substitution itself is done by the fixed column rule.
    ///
    /// # Arguments
    ///
    /// * `column`: Ordinal of an active column without coefficients.
    ///
    /// # Return value
    ///
    /// An error if the cost pushes the column towards a bound that is missing, beyond the
    /// feasibility tolerance. In that case, nothing was changed.
    pub fn empty_column(&mut self, column: usize) -> Result<(), Infeasibility> {
        let variable = self.problem.column(column);
        assert_eq!(variable.degree(), 0, "column {column} is not empty");
        let (lower, upper, cost) = (variable.lower(), variable.upper(), variable.cost());

        let tolerance = self.settings.feasibility_tolerance;
        if (cost > tolerance && lower == f64::NEG_INFINITY) || (cost < -tolerance && upper == f64::INFINITY) {
            warn!("empty column {column} with cost {cost} makes the problem unbounded");
            return Err(Infeasibility::EmptyColumn { column, cost });
        }

        let (value, status) = fix_empty(lower, upper, cost);
        debug!("fixing empty column {column} at {value}");
        self.stack.push(Record::EmptyColumn { column, status });
        self.problem.set_column_bounds(column, value, value);
        self.fixed_column(column);
        Ok(())
    }
}

/// Value and status for a column without coefficients that can be fixed.
fn fix_empty(lower: f64, upper: f64, cost: f64) -> (f64, Status) {
    match (lower.is_finite(), upper.is_finite()) {
        (false, false) => (0_f64, Status::NonBasicFree),
        (true, false) => (lower, Status::NonBasicLower),
        (false, true) => (upper, Status::NonBasicUpper),
        (true, true) => {
            if lower == upper {
                (lower, Status::NonBasicFixed)
            } else if cost > 0_f64 {
                (lower, Status::NonBasicLower)
            } else if cost < 0_f64 {
                (upper, Status::NonBasicUpper)
            } else if lower.abs() <= upper.abs() {
                (lower, Status::NonBasicLower)
            } else {
                (upper, Status::NonBasicUpper)
            }
        },
    }
}

pub(in crate::data::linear_program::presolve) fn recover_row(row: usize, arrays: &mut SolutionArrays) {
    if arrays.kind().has_status() {
        arrays.set_row_status(row, Status::Basic);
    }
    arrays.set_row_primal(row, 0_f64);
    if arrays.kind().has_dual() {
        arrays.set_row_dual(row, 0_f64);
    }
}

/// Replayed after the fixed column record, only the status differs.
pub(in crate::data::linear_program::presolve) fn recover_column(
    column: usize,
    status: Status,
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        arrays.set_column_status(column, status);
    }
}
