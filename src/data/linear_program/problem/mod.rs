//! # Linear programs under reduction
//!
//! A sparse problem store in which rows and columns can be appended and removed while the
//! coefficient matrix is kept available both by row and by column.
//!
//! Rows and columns are addressed by their ordinal: the index of their slot. Removing a row or a
//! column empties the slot, such that the ordinals of all other rows and columns remain valid.
//! This is what allows presolve records to refer to rows and columns of the original problem by
//! index only.
use itertools::Itertools;
use thiserror::Error;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::{BoundDirection, Objective, VariableType};

pub use reduced::ReducedProblem;

mod reduced;

/// A linear program with the constraint matrix stored both row and column wise.
///
/// Each row reads `lower <= <a, x> <= upper`, each column `lower <= x <= upper`. A bound that is
/// absent is represented by an infinite value of the right sign.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Which direction does the objective function go?
    objective: Objective,
    /// Constant in the cost function.
    fixed_cost: f64,

    /// Slots for all rows ever created, `None` if the row was removed.
    rows: Vec<Option<Row>>,
    /// Slots for all columns ever created, `None` if the column was removed.
    columns: Vec<Option<Column>>,

    nr_active_rows: usize,
    nr_active_columns: usize,
}

/// A constraint `lower <= <a, x> <= upper`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    lower: f64,
    upper: f64,
    /// (column ordinal, value) tuples in order of insertion.
    coefficients: Vec<SparseTuple<f64>>,
}

/// A variable `lower <= x <= upper` with a cost coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    lower: f64,
    upper: f64,
    variable_type: VariableType,
    cost: f64,
    /// (row ordinal, value) tuples in order of insertion.
    coefficients: Vec<SparseTuple<f64>>,
}

/// Invalid input while building a `Problem`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProblemError {
    /// Row bounds are NaN, cross, exclude every finite value, or are too far apart.
    #[error("row bounds [{lower}, {upper}] are invalid")]
    InvalidRowBounds {
        /// Lower bound that was provided.
        lower: f64,
        /// Upper bound that was provided.
        upper: f64,
    },
    /// Column bounds are NaN, cross, exclude every finite value, or are too far apart.
    #[error("column bounds [{lower}, {upper}] are invalid")]
    InvalidColumnBounds {
        /// Lower bound that was provided.
        lower: f64,
        /// Upper bound that was provided.
        upper: f64,
    },
    /// Cost coefficient is not a finite number.
    #[error("cost coefficient {0} is not finite")]
    InvalidCost(f64),
    /// Row index does not refer to an existing row.
    #[error("row {0} does not exist")]
    UnknownRow(usize),
    /// Column index does not refer to an existing column.
    #[error("column {0} does not exist")]
    UnknownColumn(usize),
    /// Coefficients should be finite and nonzero.
    #[error("coefficient {value} at ({row}, {column}) is zero or not finite")]
    InvalidCoefficient {
        /// Row of the coefficient.
        row: usize,
        /// Column of the coefficient.
        column: usize,
        /// Value that was provided.
        value: f64,
    },
    /// A coefficient was already set for this row and column.
    #[error("coefficient at ({row}, {column}) was already set")]
    DuplicateCoefficient {
        /// Row of the coefficient.
        row: usize,
        /// Column of the coefficient.
        column: usize,
    },
}

/// Bounds shouldn't cross, and a lower bound of `+inf` or an upper bound of `-inf` is meaningless.
///
/// Two finite bounds need a finite distance, as that distance becomes the upper bound of a column
/// when the row or column is brought in standard form.
fn are_valid_bounds(lower: f64, upper: f64) -> bool {
    let range_is_finite = !(lower.is_finite() && upper.is_finite()) || (upper - lower).is_finite();

    lower <= upper && lower != f64::INFINITY && upper != f64::NEG_INFINITY && range_is_finite
}

impl Row {
    /// Lower bound on the activity, possibly `-inf`.
    pub fn lower(&self) -> f64 {
        self.lower
    }
    /// Upper bound on the activity, possibly `+inf`.
    pub fn upper(&self) -> f64 {
        self.upper
    }
    /// Bound in a direction.
    pub fn bound(&self, direction: BoundDirection) -> f64 {
        match direction {
            BoundDirection::Lower => self.lower,
            BoundDirection::Upper => self.upper,
        }
    }
    /// Whether the row has no finite bound at all.
    pub fn is_free(&self) -> bool {
        self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY
    }
    /// Whether the row is an equality constraint.
    pub fn is_equality(&self) -> bool {
        self.lower == self.upper
    }
    /// Number of nonzero coefficients.
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }
    /// Iterate over the (column ordinal, value) tuples of this row.
    pub fn iter(&self) -> impl Iterator<Item = &SparseTuple<f64>> {
        self.coefficients.iter()
    }
    pub(crate) fn coefficients(&self) -> &[SparseTuple<f64>] {
        &self.coefficients
    }
}

impl Column {
    /// Lower bound, possibly `-inf`.
    pub fn lower(&self) -> f64 {
        self.lower
    }
    /// Upper bound, possibly `+inf`.
    pub fn upper(&self) -> f64 {
        self.upper
    }
    /// Bound in a direction.
    pub fn bound(&self, direction: BoundDirection) -> f64 {
        match direction {
            BoundDirection::Lower => self.lower,
            BoundDirection::Upper => self.upper,
        }
    }
    /// Continuous or integer.
    pub fn variable_type(&self) -> VariableType {
        self.variable_type
    }
    /// Coefficient in the objective function.
    pub fn cost(&self) -> f64 {
        self.cost
    }
    /// Whether the variable has no finite bound at all.
    pub fn is_free(&self) -> bool {
        self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY
    }
    /// Whether lower and upper bound coincide.
    pub fn is_fixed(&self) -> bool {
        self.lower == self.upper
    }
    /// Number of nonzero coefficients.
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }
    /// Iterate over the (row ordinal, value) tuples of this column.
    pub fn iter(&self) -> impl Iterator<Item = &SparseTuple<f64>> {
        self.coefficients.iter()
    }
    pub(crate) fn coefficients(&self) -> &[SparseTuple<f64>] {
        &self.coefficients
    }
}

impl Problem {
    /// Create an empty problem.
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            fixed_cost: 0_f64,
            rows: Vec::new(),
            columns: Vec::new(),
            nr_active_rows: 0,
            nr_active_columns: 0,
        }
    }

    /// Add a row `lower <= <a, x> <= upper`.
    ///
    /// # Return value
    ///
    /// Ordinal of the new row, or an error if the bounds are invalid.
    pub fn add_row(&mut self, lower: f64, upper: f64) -> Result<usize, ProblemError> {
        if are_valid_bounds(lower, upper) {
            Ok(self.append_row(lower, upper))
        } else {
            Err(ProblemError::InvalidRowBounds { lower, upper })
        }
    }

    /// Add a column `lower <= x <= upper` with the given cost.
    ///
    /// # Return value
    ///
    /// Ordinal of the new column, or an error if the bounds or the cost are invalid.
    pub fn add_column(
        &mut self,
        lower: f64,
        upper: f64,
        variable_type: VariableType,
        cost: f64,
    ) -> Result<usize, ProblemError> {
        if !are_valid_bounds(lower, upper) {
            return Err(ProblemError::InvalidColumnBounds { lower, upper });
        }
        if !cost.is_finite() {
            return Err(ProblemError::InvalidCost(cost));
        }

        Ok(self.append_column(lower, upper, variable_type, cost))
    }

    /// Set the coefficient of a column in a row.
    ///
    /// Each coefficient can be set only once and must be finite and nonzero.
    pub fn set_coefficient(&mut self, row: usize, column: usize, value: f64) -> Result<(), ProblemError> {
        if !self.is_row_active(row) {
            return Err(ProblemError::UnknownRow(row));
        }
        if !self.is_column_active(column) {
            return Err(ProblemError::UnknownColumn(column));
        }
        if value == 0_f64 || !value.is_finite() {
            return Err(ProblemError::InvalidCoefficient { row, column, value });
        }
        if self.column(column).iter().any(|&(i, _)| i == row) {
            return Err(ProblemError::DuplicateCoefficient { row, column });
        }

        self.insert_coefficient(row, column, value);
        Ok(())
    }

    /// Set the constant in the objective function.
    pub fn set_fixed_cost(&mut self, value: f64) {
        self.fixed_cost = value;
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }
    /// Constant in the objective function.
    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }
    /// Number of rows that were not removed.
    pub fn nr_active_rows(&self) -> usize {
        self.nr_active_rows
    }
    /// Number of columns that were not removed.
    pub fn nr_active_columns(&self) -> usize {
        self.nr_active_columns
    }
    /// Number of row ordinals handed out, removed rows included.
    pub fn nr_row_slots(&self) -> usize {
        self.rows.len()
    }
    /// Number of column ordinals handed out, removed columns included.
    pub fn nr_column_slots(&self) -> usize {
        self.columns.len()
    }
    /// Whether a row exists and was not removed.
    pub fn is_row_active(&self, row: usize) -> bool {
        self.rows.get(row).is_some_and(Option::is_some)
    }
    /// Whether a column exists and was not removed.
    pub fn is_column_active(&self, column: usize) -> bool {
        self.columns.get(column).is_some_and(Option::is_some)
    }

    /// Get a row that is still active.
    ///
    /// # Panics
    ///
    /// If the row doesn't exist or was removed.
    pub fn row(&self, row: usize) -> &Row {
        match self.rows.get(row) {
            Some(Some(row)) => row,
            _ => panic!("row {row} is not active"),
        }
    }
    /// Get a column that is still active.
    ///
    /// # Panics
    ///
    /// If the column doesn't exist or was removed.
    pub fn column(&self, column: usize) -> &Column {
        match self.columns.get(column) {
            Some(Some(column)) => column,
            _ => panic!("column {column} is not active"),
        }
    }

    fn row_mut(&mut self, row: usize) -> &mut Row {
        match self.rows.get_mut(row) {
            Some(Some(row)) => row,
            _ => panic!("row {row} is not active"),
        }
    }
    fn column_mut(&mut self, column: usize) -> &mut Column {
        match self.columns.get_mut(column) {
            Some(Some(column)) => column,
            _ => panic!("column {column} is not active"),
        }
    }

    /// Iterate over all active rows in order of their ordinal.
    pub fn iter_active_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().enumerate()
            .filter_map(|(i, row)| row.as_ref().map(|row| (i, row)))
    }
    /// Iterate over all active columns in order of their ordinal.
    pub fn iter_active_columns(&self) -> impl Iterator<Item = (usize, &Column)> {
        self.columns.iter().enumerate()
            .filter_map(|(j, column)| column.as_ref().map(|column| (j, column)))
    }

    /// Append a row without coefficients.
    ///
    /// # Return value
    ///
    /// The ordinal of the new row, which is larger than those of all existing rows.
    pub(crate) fn append_row(&mut self, lower: f64, upper: f64) -> usize {
        debug_assert!(are_valid_bounds(lower, upper));

        self.rows.push(Some(Row { lower, upper, coefficients: Vec::new() }));
        self.nr_active_rows += 1;
        self.rows.len() - 1
    }

    /// Append a column without coefficients.
    ///
    /// # Return value
    ///
    /// The ordinal of the new column, which is larger than those of all existing columns.
    pub(crate) fn append_column(
        &mut self,
        lower: f64,
        upper: f64,
        variable_type: VariableType,
        cost: f64,
    ) -> usize {
        debug_assert!(are_valid_bounds(lower, upper));

        self.columns.push(Some(Column { lower, upper, variable_type, cost, coefficients: Vec::new() }));
        self.nr_active_columns += 1;
        self.columns.len() - 1
    }

    /// Insert a coefficient in both the row and the column.
    ///
    /// The caller guarantees that the value is nonzero and that no value is present yet for this
    /// row and column.
    pub(crate) fn insert_coefficient(&mut self, row: usize, column: usize, value: f64) {
        debug_assert_ne!(value, 0_f64);
        debug_assert!(self.column(column).iter().all(|&(i, _)| i != row));

        self.row_mut(row).coefficients.push((column, value));
        self.column_mut(column).coefficients.push((row, value));
    }

    /// Remove a row and unlink all of its coefficients from their columns.
    ///
    /// # Return value
    ///
    /// The removed row, with its coefficients.
    pub(crate) fn remove_row(&mut self, row: usize) -> Row {
        let removed = match self.rows.get_mut(row).and_then(Option::take) {
            Some(removed) => removed,
            None => panic!("row {row} is not active"),
        };
        self.nr_active_rows -= 1;

        for &(j, _) in &removed.coefficients {
            let coefficients = &mut self.column_mut(j).coefficients;
            let position = coefficients.iter().position(|&(i, _)| i == row);
            debug_assert!(position.is_some());
            if let Some(position) = position {
                coefficients.remove(position);
            }
        }

        removed
    }

    /// Remove a column and unlink all of its coefficients from their rows.
    ///
    /// # Return value
    ///
    /// The removed column, with its coefficients.
    pub(crate) fn remove_column(&mut self, column: usize) -> Column {
        let removed = match self.columns.get_mut(column).and_then(Option::take) {
            Some(removed) => removed,
            None => panic!("column {column} is not active"),
        };
        self.nr_active_columns -= 1;

        for &(i, _) in &removed.coefficients {
            let coefficients = &mut self.row_mut(i).coefficients;
            let position = coefficients.iter().position(|&(j, _)| j == column);
            debug_assert!(position.is_some());
            if let Some(position) = position {
                coefficients.remove(position);
            }
        }

        removed
    }

    /// Multiply all coefficients of a column by `-1`, in the column as well as in the rows.
    pub(crate) fn negate_column(&mut self, column: usize) {
        let rows = self.column(column).iter().map(|&(i, _)| i).collect::<Vec<_>>();
        for (_, value) in &mut self.column_mut(column).coefficients {
            *value = -*value;
        }
        for i in rows {
            for (j, value) in &mut self.row_mut(i).coefficients {
                if *j == column {
                    *value = -*value;
                }
            }
        }
    }

    pub(crate) fn set_row_bounds(&mut self, row: usize, lower: f64, upper: f64) {
        debug_assert!(are_valid_bounds(lower, upper));

        let row = self.row_mut(row);
        row.lower = lower;
        row.upper = upper;
    }

    /// Subtract a finite value from both bounds of a row.
    ///
    /// Infinite bounds stay infinite, and an equality row stays an equality row.
    pub(crate) fn shift_row_bounds(&mut self, row: usize, by: f64) {
        debug_assert!(by.is_finite());

        let row = self.row_mut(row);
        row.lower -= by;
        row.upper -= by;
    }

    pub(crate) fn set_column_bounds(&mut self, column: usize, lower: f64, upper: f64) {
        debug_assert!(are_valid_bounds(lower, upper));

        let column = self.column_mut(column);
        column.lower = lower;
        column.upper = upper;
    }

    pub(crate) fn set_cost(&mut self, column: usize, cost: f64) {
        debug_assert!(cost.is_finite());

        self.column_mut(column).cost = cost;
    }

    pub(crate) fn add_to_fixed_cost(&mut self, delta: f64) {
        self.fixed_cost += delta;
    }

    /// Turn a maximization problem into a minimization problem by negating the cost function.
    ///
    /// # Return value
    ///
    /// Whether the problem was a maximization problem.
    pub(crate) fn make_minimization_problem(&mut self) -> bool {
        if self.objective == Objective::Minimize {
            return false;
        }

        self.objective = Objective::Minimize;
        self.fixed_cost = -self.fixed_cost;
        for column in self.columns.iter_mut().flatten() {
            column.cost = -column.cost;
        }

        true
    }

    /// Copy the active part of the problem with contiguous indices.
    ///
    /// Rows and columns keep their relative order.
    pub fn compact(&self) -> ReducedProblem {
        let row_origin = self.iter_active_rows().map(|(i, _)| i).collect::<Vec<_>>();
        let column_origin = self.iter_active_columns().map(|(j, _)| j).collect::<Vec<_>>();

        let mut new_row_index = vec![None; self.nr_row_slots()];
        for (compact, &ordinal) in row_origin.iter().enumerate() {
            new_row_index[ordinal] = Some(compact);
        }

        let mut problem = Problem::new(self.objective);
        problem.fixed_cost = self.fixed_cost;
        for &i in &row_origin {
            let row = self.row(i);
            problem.append_row(row.lower, row.upper);
        }
        for &j in &column_origin {
            let column = self.column(j);
            let compact = problem.append_column(column.lower, column.upper, column.variable_type, column.cost);
            for &(i, value) in column.coefficients.iter().sorted_by_key(|&&(i, _)| i) {
                match new_row_index[i] {
                    Some(compact_row) => problem.insert_coefficient(compact_row, compact, value),
                    None => unreachable!("coefficient refers to removed row {i}"),
                }
            }
        }

        debug_assert!(is_consistent(&problem));
        ReducedProblem::new(problem, row_origin, column_origin)
    }
}

/// Check whether the row and column representations of the `Problem` agree.
///
/// This method is expensive, use it in debugging only. It can be viewed as a piece of
/// documentation on the requirements of a `Problem` struct.
pub(crate) fn is_consistent(problem: &Problem) -> bool {
    let counters = problem.iter_active_rows().count() == problem.nr_active_rows
        && problem.iter_active_columns().count() == problem.nr_active_columns;

    let bounds = problem.iter_active_rows().all(|(_, row)| are_valid_bounds(row.lower, row.upper))
        && problem.iter_active_columns().all(|(_, column)| are_valid_bounds(column.lower, column.upper));

    let rows_mirrored = problem.iter_active_rows().all(|(i, row)| {
        row.coefficients.iter().all(|&(j, value)| {
            value != 0_f64 && problem.is_column_active(j)
                && problem.column(j).coefficients.iter().filter(|&&(k, v)| k == i && v == value).count() == 1
        })
    });
    let columns_mirrored = problem.iter_active_columns().all(|(j, column)| {
        column.coefficients.iter().all(|&(i, value)| {
            value != 0_f64 && problem.is_row_active(i)
                && problem.row(i).coefficients.iter().filter(|&&(k, v)| k == j && v == value).count() == 1
        })
    });
    let no_duplicates = problem.iter_active_columns()
        .all(|(_, column)| column.coefficients.iter().map(|&(i, _)| i).all_unique());

    [counters, bounds, rows_mirrored, columns_mirrored, no_duplicates].iter().all(|v| *v)
}
