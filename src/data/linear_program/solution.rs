//! # Representation of solutions
//!
//! A solver hands in a solution to the reduced problem; after postsolve, a solution to the original
//! problem is handed out. Both are represented with the same struct, which contains the values
//! appropriate for the kind of solver that was used.
use crate::data::linear_program::elements::{SolutionKind, Status};

/// Status, primal values and dual values for all rows and columns of a problem.
///
/// Row primal values are activities `<a, x>`, row dual values are the Lagrange multipliers of the
/// constraints and column dual values are the reduced costs.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    kind: SolutionKind,
    /// Including the fixed cost; only known after postsolve.
    objective_value: Option<f64>,

    row_status: Vec<Status>,
    row_primal: Vec<f64>,
    row_dual: Vec<f64>,

    column_status: Vec<Status>,
    column_primal: Vec<f64>,
    column_dual: Vec<f64>,
}

impl Solution {
    /// A solution from the simplex method, with all values.
    ///
    /// # Panics
    ///
    /// If the row or column vectors differ in length.
    pub fn basic(
        row_status: Vec<Status>,
        row_primal: Vec<f64>,
        row_dual: Vec<f64>,
        column_status: Vec<Status>,
        column_primal: Vec<f64>,
        column_dual: Vec<f64>,
    ) -> Self {
        assert_eq!(row_status.len(), row_primal.len());
        assert_eq!(row_dual.len(), row_primal.len());
        assert_eq!(column_status.len(), column_primal.len());
        assert_eq!(column_dual.len(), column_primal.len());

        Self {
            kind: SolutionKind::Basic,
            objective_value: None,
            row_status,
            row_primal,
            row_dual,
            column_status,
            column_primal,
            column_dual,
        }
    }

    /// A solution from an interior point method, without statuses.
    ///
    /// # Panics
    ///
    /// If the row or column vectors differ in length.
    pub fn interior_point(
        row_primal: Vec<f64>,
        row_dual: Vec<f64>,
        column_primal: Vec<f64>,
        column_dual: Vec<f64>,
    ) -> Self {
        assert_eq!(row_dual.len(), row_primal.len());
        assert_eq!(column_dual.len(), column_primal.len());

        Self {
            kind: SolutionKind::InteriorPoint,
            objective_value: None,
            row_status: Vec::new(),
            row_primal,
            row_dual,
            column_status: Vec::new(),
            column_primal,
            column_dual,
        }
    }

    /// A solution from branch and bound, primal values only.
    pub fn integer(row_primal: Vec<f64>, column_primal: Vec<f64>) -> Self {
        Self {
            kind: SolutionKind::Integer,
            objective_value: None,
            row_status: Vec::new(),
            row_primal,
            row_dual: Vec::new(),
            column_status: Vec::new(),
            column_primal,
            column_dual: Vec::new(),
        }
    }

    pub(crate) fn with_objective_value(mut self, value: f64) -> Self {
        self.objective_value = Some(value);
        self
    }

    /// Which values this solution contains.
    pub fn kind(&self) -> SolutionKind {
        self.kind
    }
    /// Objective value including the fixed cost, if computed.
    pub fn objective_value(&self) -> Option<f64> {
        self.objective_value
    }
    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.row_primal.len()
    }
    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.column_primal.len()
    }

    /// Row statuses, empty unless this is a basic solution.
    pub fn row_status(&self) -> &[Status] {
        &self.row_status
    }
    /// Row activities.
    pub fn row_primal(&self) -> &[f64] {
        &self.row_primal
    }
    /// Row dual values, empty for integer solutions.
    pub fn row_dual(&self) -> &[f64] {
        &self.row_dual
    }
    /// Column statuses, empty unless this is a basic solution.
    pub fn column_status(&self) -> &[Status] {
        &self.column_status
    }
    /// Column values.
    pub fn column_primal(&self) -> &[f64] {
        &self.column_primal
    }
    /// Reduced costs, empty for integer solutions.
    pub fn column_dual(&self) -> &[f64] {
        &self.column_dual
    }

    /// Negate all dual values.
    ///
    /// Dual values of a maximization problem are the negation of those of the equivalent
    /// minimization problem.
    pub(crate) fn negate_duals(&mut self) {
        for value in self.row_dual.iter_mut().chain(self.column_dual.iter_mut()) {
            *value = -*value;
        }
    }
}
