//! # Shifting columns to a bound
//!
//! A column with a finite bound is substituted by its distance to that bound, such that the new
//! column is nonnegative. The constant part of the substitution moves into the row bounds and the
//! fixed cost.
use log::debug;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::presolve::Presolve;
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::stack::Record;

impl Presolve {
    /// Substitute `x = l + x'` with `0 <= x' <= u - l`.
    ///
    /// # Arguments
    ///
    /// * `column`: Ordinal of an active column with a finite lower bound.
    pub fn lower_bounded_column(&mut self, column: usize) {
        let variable = self.problem.column(column);
        let (lower, upper, cost) = (variable.lower(), variable.upper(), variable.cost());
        assert!(lower.is_finite(), "column {column} has no finite lower bound");
        let coefficients = variable.coefficients().to_vec();

        self.substitute_constant(&coefficients, cost, lower);
        self.problem.set_column_bounds(column, 0_f64, upper - lower);

        debug!("column {column} shifted by its lower bound {lower}");
        let coefficients = self.stack.allocate(coefficients);
        self.stack.push(Record::LowerBoundedColumn { column, bound: lower, coefficients });
    }

    /// Substitute `x = u - x'` with `0 <= x' <= u - l`.
    ///
    /// The cost and the coefficients of the column are negated in place.
    ///
    /// # Arguments
    ///
    /// * `column`: Ordinal of an active column with a finite upper bound.
    pub fn upper_bounded_column(&mut self, column: usize) {
        let variable = self.problem.column(column);
        let (lower, upper, cost) = (variable.lower(), variable.upper(), variable.cost());
        assert!(upper.is_finite(), "column {column} has no finite upper bound");
        let coefficients = variable.coefficients().to_vec();

        self.substitute_constant(&coefficients, cost, upper);
        self.problem.set_cost(column, -cost);
        self.problem.negate_column(column);
        self.problem.set_column_bounds(column, 0_f64, upper - lower);

        debug!("column {column} flipped around its upper bound {upper}");
        let coefficients = self.stack.allocate(coefficients);
        self.stack.push(Record::UpperBoundedColumn { column, bound: upper, coefficients });
    }

    /// Move the constant part `value` of a column into the row bounds and the fixed cost.
    pub(super) fn substitute_constant(&mut self, coefficients: &[SparseTuple<f64>], cost: f64, value: f64) {
        debug_assert!(value.is_finite());

        for &(row, coefficient) in coefficients {
            self.problem.shift_row_bounds(row, coefficient * value);
        }
        self.problem.add_to_fixed_cost(cost * value);
    }
}

/// Add the constant part of a substitution back to the activities of the rows.
pub(super) fn add_to_activities(coefficients: &[SparseTuple<f64>], value: f64, arrays: &mut SolutionArrays) {
    for &(row, coefficient) in coefficients {
        arrays.add_to_row_primal(row, coefficient * value);
    }
}

/// `x = l + x'`, the status and reduced cost of `x'` carry over.
pub(in crate::data::linear_program::presolve) fn recover_lower(
    column: usize,
    bound: f64,
    coefficients: &[SparseTuple<f64>],
    arrays: &mut SolutionArrays,
) {
    arrays.set_column_primal(column, bound + arrays.column_primal(column));
    add_to_activities(coefficients, bound, arrays);
}

/// `x = u - x'`, so the status is mirrored and the reduced cost negated.
pub(in crate::data::linear_program::presolve) fn recover_upper(
    column: usize,
    bound: f64,
    coefficients: &[SparseTuple<f64>],
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        arrays.set_column_status(column, arrays.column_status(column).mirrored());
    }
    arrays.set_column_primal(column, bound - arrays.column_primal(column));
    add_to_activities(coefficients, bound, arrays);
    if arrays.kind().has_dual() {
        arrays.set_column_dual(column, -arrays.column_dual(column));
    }
}
