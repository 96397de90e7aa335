//! # Queues
//!
//! Rows and columns to check for applicable elimination rules.
use fifo_set::FIFOSet;

use crate::data::linear_program::problem::Problem;

/// Which rows and columns should still be checked.
///
/// A row or column can be queued only once at a time. It might have been removed by the time it
/// is popped, callers should check whether it is still active.
pub(super) struct Queues {
    /// All rows at the start, later rows whose degree decreased.
    rows: FIFOSet<usize>,
    /// All columns at the start, later columns whose degree decreased.
    columns: FIFOSet<usize>,
}

/// Next row or column to check.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum Candidate {
    Row(usize),
    Column(usize),
}

impl Queues {
    /// Queue every active row and column.
    pub(super) fn new(problem: &Problem) -> Self {
        Self {
            rows: problem.iter_active_rows().map(|(i, _)| i).collect(),
            columns: problem.iter_active_columns().map(|(j, _)| j).collect(),
        }
    }

    /// Take the next candidate.
    ///
    /// Rows go first: removing a row only ever simplifies the columns in it.
    pub(super) fn pop(&mut self) -> Option<Candidate> {
        self.rows.pop().map(Candidate::Row)
            .or_else(|| self.columns.pop().map(Candidate::Column))
    }

    pub(super) fn extend_rows(&mut self, rows: impl IntoIterator<Item = usize>) {
        for row in rows {
            self.rows.push(row);
        }
    }

    pub(super) fn extend_columns(&mut self, columns: impl IntoIterator<Item = usize>) {
        for column in columns {
            self.columns.push(column);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{Objective, VariableType};
    use crate::data::linear_program::presolve::queues::{Candidate, Queues};
    use crate::data::linear_program::problem::Problem;

    #[test]
    fn order_and_uniqueness() {
        let mut problem = Problem::new(Objective::Minimize);
        problem.add_row(0_f64, 1_f64).unwrap();
        problem.add_column(0_f64, 1_f64, VariableType::Continuous, 0_f64).unwrap();
        problem.add_column(0_f64, 1_f64, VariableType::Continuous, 0_f64).unwrap();

        let mut queues = Queues::new(&problem);
        assert_eq!(queues.pop(), Some(Candidate::Row(0)));
        queues.extend_columns([1, 0]);
        assert_eq!(queues.pop(), Some(Candidate::Column(0)));
        queues.extend_rows([0]);
        assert_eq!(queues.pop(), Some(Candidate::Row(0)));
        assert_eq!(queues.pop(), Some(Candidate::Column(1)));
        assert_eq!(queues.pop(), None);
    }
}
