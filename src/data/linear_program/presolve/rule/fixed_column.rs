//! # Fixed columns
//!
//! A column whose bounds coincide is substituted by its value and removed.
use log::debug;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::Status;
use crate::data::linear_program::presolve::Presolve;
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::rule::bounded_column::add_to_activities;
use crate::data::linear_program::presolve::stack::Record;

impl Presolve {
    /// Substitute a fixed column in the rows and the fixed cost, and remove it.
    ///
    /// # Arguments
    ///
    /// * `column`: Ordinal of an active column with equal, finite, bounds.
    pub fn fixed_column(&mut self, column: usize) {
        assert!(self.problem.column(column).is_fixed(), "column {column} is not fixed");

        let removed = self.problem.remove_column(column);
        let (value, cost) = (removed.lower(), removed.cost());
        self.substitute_constant(removed.coefficients(), cost, value);

        debug!("substituted fixed column {column} with value {value}");
        let coefficients = self.stack.allocate(removed.iter().copied());
        self.stack.push(Record::FixedColumn { column, value, cost, coefficients });
    }
}

/// The value is known; the reduced cost follows from the multipliers of the rows.
pub(in crate::data::linear_program::presolve) fn recover(
    column: usize,
    value: f64,
    cost: f64,
    coefficients: &[SparseTuple<f64>],
    arrays: &mut SolutionArrays,
) {
    if arrays.kind().has_status() {
        arrays.set_column_status(column, Status::NonBasicFixed);
    }
    arrays.set_column_primal(column, value);
    add_to_activities(coefficients, value, arrays);
    if arrays.kind().has_dual() {
        let reduced_cost = cost - coefficients.iter()
            .map(|&(row, coefficient)| coefficient * arrays.row_dual(row))
            .sum::<f64>();
        arrays.set_column_dual(column, reduced_cost);
    }
}
