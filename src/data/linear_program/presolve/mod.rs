//! # Presolving linear programs
//!
//! A `Problem` is presolved by repeatedly applying reduction rules to it. Each rule rewrites the
//! problem in place and pushes a record on a stack. After the reduced problem has been solved,
//! the records are replayed in reverse to reconstruct a solution to the original problem.
//!
//! A session can be driven in two ways: either call `Presolve::presolve`, which eliminates what
//! it can and then brings the problem in standard form, or apply rules one by one.
use enum_map::EnumMap;
use log::{debug, info};
use thiserror::Error;

use crate::data::linear_program::elements::BoundDirection;
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::queues::{Candidate, Queues};
use crate::data::linear_program::presolve::stack::Stack;
use crate::data::linear_program::problem::{is_consistent, Problem, ReducedProblem};
use crate::data::linear_program::solution::Solution;

pub use settings::{PresolveSettings, PresolveSettingsBuilder, PresolveSettingsBuilderError, SettingsError};
pub use stack::Reduction;

mod postsolve;
mod queues;
mod rule;
mod settings;
mod stack;

#[cfg(test)]
mod test;

/// A presolve session: the problem being reduced and everything needed to undo the reductions.
#[derive(Debug)]
pub struct Presolve {
    /// Problem in its current, reduced, state. Always a minimization problem.
    problem: Problem,
    /// Records of all reductions applied so far.
    stack: Stack,
    settings: PresolveSettings,

    nr_original_rows: usize,
    nr_original_columns: usize,
    /// Costs as provided, for reconstructing the objective value.
    original_costs: Vec<f64>,
    original_fixed_cost: f64,
    /// Whether the costs were negated at the start of the session.
    is_maximization: bool,
}

/// The reduction of a problem showed that it has no optimal solution.
///
/// This is returned by the reduction that detected it; the problem was left as it was before that
/// reduction was attempted.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Infeasibility {
    /// A row without coefficients has bounds that don't contain zero.
    #[error("row {row} has no coefficients, but its bounds [{lower}, {upper}] don't contain zero")]
    EmptyRow {
        /// Ordinal of the row.
        row: usize,
        /// Lower bound of the row.
        lower: f64,
        /// Upper bound of the row.
        upper: f64,
    },
    /// A column without coefficients has a cost that pushes it towards a missing bound.
    #[error("column {column} has no coefficients, and cost {cost} pushes it towards a missing bound")]
    EmptyColumn {
        /// Ordinal of the column.
        column: usize,
        /// Cost of the column, in the minimization form of the problem.
        cost: f64,
    },
    /// An equality row with a single coefficient implies a value outside the column's bounds.
    #[error("row {row} implies value {value} for column {column}, outside of [{lower}, {upper}]")]
    SingletonRow {
        /// Ordinal of the row.
        row: usize,
        /// Ordinal of the column.
        column: usize,
        /// Value implied by the row.
        value: f64,
        /// Lower bound of the column.
        lower: f64,
        /// Upper bound of the column.
        upper: f64,
    },
}

/// Size of the problem before and after presolving, and the reductions that were applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PresolveSummary {
    /// Number of rows of the problem provided.
    pub nr_original_rows: usize,
    /// Number of columns of the problem provided.
    pub nr_original_columns: usize,
    /// Number of rows of the reduced problem.
    pub nr_rows: usize,
    /// Number of columns of the reduced problem.
    pub nr_columns: usize,
    /// How often each reduction was applied.
    pub reductions: EnumMap<Reduction, usize>,
}

impl Presolve {
    /// Start a session.
    ///
    /// A maximization problem is immediately turned into a minimization problem; dual values are
    /// turned back during postsolve.
    pub fn new(mut problem: Problem, settings: PresolveSettings) -> Self {
        debug_assert!(is_consistent(&problem));

        let nr_original_rows = problem.nr_row_slots();
        let nr_original_columns = problem.nr_column_slots();
        let original_costs = (0..nr_original_columns)
            .map(|j| if problem.is_column_active(j) { problem.column(j).cost() } else { 0_f64 })
            .collect();
        let original_fixed_cost = problem.fixed_cost();
        let is_maximization = problem.make_minimization_problem();

        Self {
            problem,
            stack: Stack::new(),
            settings,

            nr_original_rows,
            nr_original_columns,
            original_costs,
            original_fixed_cost,
            is_maximization,
        }
    }

    /// Reduce the problem as far as the settings allow.
    ///
    /// First, rows and columns are eliminated where possible. Then, if enabled, the remaining
    /// problem is brought in standard form: equality rows and nonnegative columns only.
    ///
    /// # Return value
    ///
    /// A summary of the reductions, or the first infeasibility that was found. In the latter
    /// case, the problem has no optimal solution and there is no need to solve it.
    pub fn presolve(&mut self) -> Result<PresolveSummary, Infeasibility> {
        self.eliminate()?;
        if self.settings.standardize {
            self.standardize();
        }
        debug_assert!(is_consistent(&self.problem));

        let summary = self.summary();
        info!(
            "presolve reduced {}x{} to {}x{} with {} reductions",
            summary.nr_original_rows, summary.nr_original_columns,
            summary.nr_rows, summary.nr_columns,
            self.stack.len(),
        );
        Ok(summary)
    }

    /// Remove rows and columns until no rule applies anymore.
    ///
    /// Rows and columns whose degree changed are queued again.
    fn eliminate(&mut self) -> Result<(), Infeasibility> {
        let mut queues = Queues::new(&self.problem);

        while let Some(candidate) = queues.pop() {
            match candidate {
                Candidate::Row(row) => self.eliminate_row(row, &mut queues)?,
                Candidate::Column(column) => self.eliminate_column(column, &mut queues)?,
            }
        }

        Ok(())
    }

    fn eliminate_row(&mut self, row: usize, queues: &mut Queues) -> Result<(), Infeasibility> {
        if !self.problem.is_row_active(row) {
            return Ok(());
        }

        let constraint = self.problem.row(row);
        if constraint.degree() == 0 && self.settings.remove_empty {
            self.empty_row(row)
        } else if constraint.is_free() {
            let columns = constraint.iter().map(|&(j, _)| j).collect::<Vec<_>>();
            self.free_row(row);
            queues.extend_columns(columns);
            Ok(())
        } else if constraint.degree() == 1 && constraint.is_equality() && self.settings.remove_singleton_rows {
            let (column, _) = constraint.coefficients()[0];
            let rows = self.problem.column(column).iter()
                .map(|&(i, _)| i)
                .filter(|&i| i != row)
                .collect::<Vec<_>>();
            self.singleton_row(row)?;
            queues.extend_rows(rows);
            Ok(())
        } else {
            Ok(())
        }
    }

    fn eliminate_column(&mut self, column: usize, queues: &mut Queues) -> Result<(), Infeasibility> {
        if !self.problem.is_column_active(column) {
            return Ok(());
        }

        let variable = self.problem.column(column);
        if variable.degree() == 0 && self.settings.remove_empty {
            self.empty_column(column)
        } else if variable.is_fixed() {
            let rows = variable.iter().map(|&(i, _)| i).collect::<Vec<_>>();
            self.fixed_column(column);
            queues.extend_rows(rows);
            Ok(())
        } else {
            Ok(())
        }
    }

    /// Make all rows equalities, and all columns nonnegative.
    ///
    /// Columns added in the process satisfy this already, except for the upper bounds that are
    /// optionally split off in a final pass.
    fn standardize(&mut self) {
        let inequalities = self.problem.iter_active_rows()
            .filter(|(_, row)| !row.is_equality())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        for row in inequalities {
            let constraint = self.problem.row(row);
            if constraint.is_free() {
                self.free_row(row);
            } else if constraint.bound(BoundDirection::Lower).is_finite() {
                self.greater_row(row);
            } else {
                self.less_row(row);
            }
        }

        let columns = self.problem.iter_active_columns().map(|(j, _)| j).collect::<Vec<_>>();
        for column in columns {
            let variable = self.problem.column(column);
            if variable.is_free() {
                self.free_column(column);
            } else if variable.lower().is_finite() {
                if variable.lower() != 0_f64 {
                    self.lower_bounded_column(column);
                }
            } else {
                self.upper_bounded_column(column);
            }
        }

        if self.settings.split_double_bounded {
            let double_bounded = self.problem.iter_active_columns()
                .filter(|(_, column)| column.upper().is_finite())
                .map(|(j, _)| j)
                .collect::<Vec<_>>();
            for column in double_bounded {
                self.double_bounded_column(column);
            }
        }
    }

    /// Current size of the problem and counts of the reductions applied so far.
    pub fn summary(&self) -> PresolveSummary {
        PresolveSummary {
            nr_original_rows: self.nr_original_rows,
            nr_original_columns: self.nr_original_columns,
            nr_rows: self.problem.nr_active_rows(),
            nr_columns: self.problem.nr_active_columns(),
            reductions: self.stack.counts().clone(),
        }
    }

    /// The problem in its current state, indexed by ordinal.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// The problem in its current state with contiguous indices, to be handed to a solver.
    pub fn reduced_problem(&self) -> ReducedProblem {
        self.problem.compact()
    }

    /// Settings of this session.
    pub fn settings(&self) -> &PresolveSettings {
        &self.settings
    }

    /// Reconstruct a solution to the original problem.
    ///
    /// # Arguments
    ///
    /// * `reduced`: Solution to the problem returned by `reduced_problem`, in its indices. Which
    /// values get reconstructed depends on the kind of this solution.
    ///
    /// # Return value
    ///
    /// Solution of the same kind, to the problem that the session was started with, including its
    /// objective value.
    ///
    /// # Panics
    ///
    /// If the solution doesn't match the reduced problem in size.
    pub fn postsolve(self, reduced: &Solution) -> Solution {
        let row_origin = self.problem.iter_active_rows().map(|(i, _)| i).collect::<Vec<_>>();
        let column_origin = self.problem.iter_active_columns().map(|(j, _)| j).collect::<Vec<_>>();

        let mut arrays = SolutionArrays::new(
            reduced.kind(),
            self.problem.nr_row_slots(),
            self.problem.nr_column_slots(),
        );
        arrays.seed(reduced, &row_origin, &column_origin);
        debug!("replaying {} records for a solution of kind {:?}", self.stack.len(), arrays.kind());
        self.stack.replay(&mut arrays);

        let mut solution = arrays.into_solution(self.nr_original_rows, self.nr_original_columns);
        if self.is_maximization {
            solution.negate_duals();
        }

        let objective_value = self.original_fixed_cost
            + self.original_costs.iter()
                .zip(solution.column_primal())
                .map(|(cost, value)| cost * value)
                .sum::<f64>();
        info!("postsolve complete, objective value {objective_value}");

        solution.with_objective_value(objective_value)
    }
}
