//! # Inequality rows
//!
//! Rows of the form `l <= <a, x> <= u` with `l < u` are made equalities by adding a nonnegative
//! column. The range `u - l` becomes the upper bound of that column.
use log::debug;

use crate::data::linear_program::elements::VariableType;
use crate::data::linear_program::presolve::Presolve;
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::stack::Record;

impl Presolve {
    /// Rewrite `l <= <a, x> <= u` as `<a, x> - s = l` with `0 <= s <= u - l`.
    ///
    /// # Arguments
    ///
    /// * `row`: Ordinal of an active row with a finite lower bound that is not an equality.
    ///
    /// # Return value
    ///
    /// The ordinal of the surplus column.
    pub fn greater_row(&mut self, row: usize) -> usize {
        let constraint = self.problem.row(row);
        let (lower, upper) = (constraint.lower(), constraint.upper());
        assert!(lower.is_finite(), "row {row} has no finite lower bound");
        assert!(lower < upper, "row {row} is an equality");

        let surplus = self.problem.append_column(0_f64, upper - lower, VariableType::Continuous, 0_f64);
        self.problem.insert_coefficient(row, surplus, -1_f64);
        self.problem.set_row_bounds(row, lower, lower);

        debug!("row {row} made an equality with surplus column {surplus}");
        self.stack.push(Record::GreaterRow { row, surplus });
        surplus
    }

    /// Rewrite `l <= <a, x> <= u` as `<a, x> + s = u` with `0 <= s <= u - l`.
    ///
    /// # Arguments
    ///
    /// * `row`: Ordinal of an active row with a finite upper bound that is not an equality.
    ///
    /// # Return value
    ///
    /// The ordinal of the slack column.
    pub fn less_row(&mut self, row: usize) -> usize {
        let constraint = self.problem.row(row);
        let (lower, upper) = (constraint.lower(), constraint.upper());
        assert!(upper.is_finite(), "row {row} has no finite upper bound");
        assert!(lower < upper, "row {row} is an equality");

        let slack = self.problem.append_column(0_f64, upper - lower, VariableType::Continuous, 0_f64);
        self.problem.insert_coefficient(row, slack, 1_f64);
        self.problem.set_row_bounds(row, upper, upper);

        debug!("row {row} made an equality with slack column {slack}");
        self.stack.push(Record::LessRow { row, slack });
        slack
    }
}

/// The activity is `l + s`: the row is at a bound when the surplus is.
pub(in crate::data::linear_program::presolve) fn recover_greater(
    row: usize,
    surplus: usize,
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        arrays.set_row_status(row, arrays.column_status(surplus));
    }
    arrays.add_to_row_primal(row, arrays.column_primal(surplus));
    if arrays.kind().has_dual() {
        // The reduced cost of the surplus is `0 - (-1) * y`
        arrays.set_row_dual(row, arrays.column_dual(surplus));
    }
}

/// The activity is `u - s`: the bounds of the slack are mirrored.
pub(in crate::data::linear_program::presolve) fn recover_less(
    row: usize,
    slack: usize,
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        arrays.set_row_status(row, arrays.column_status(slack).mirrored());
    }
    arrays.add_to_row_primal(row, -arrays.column_primal(slack));
    if arrays.kind().has_dual() {
        arrays.set_row_dual(row, -arrays.column_dual(slack));
    }
}
