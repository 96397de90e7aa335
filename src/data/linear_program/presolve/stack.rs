//! # Elimination records
//!
//! Every reduction pushes a record containing exactly the information needed to undo it. Records
//! are never removed during presolving; during postsolve, they are replayed from the last one
//! pushed to the first one.
//!
//! The records satisfy a topological ordering: every row or column that a record refers to is
//! either still present in the final reduced problem, or removed by a record pushed later. As
//! records are replayed in reverse, all values a record needs are known by the time it is
//! replayed.
use std::ops::Range;

use enum_map::{Enum, EnumMap};

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::Status;
use crate::data::linear_program::presolve::postsolve::SolutionArrays;
use crate::data::linear_program::presolve::rule::{
    bounded_column,
    double_bounded_column,
    empty,
    fixed_column,
    free_column,
    free_row,
    inequality_row,
    singleton_row,
};

/// The reductions that can be applied, one per record variant.
#[allow(missing_docs)]
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Reduction {
    FreeRow,
    GreaterRow,
    LessRow,
    FreeColumn,
    LowerBoundedColumn,
    UpperBoundedColumn,
    DoubleBoundedColumn,
    FixedColumn,
    EmptyRow,
    EmptyColumn,
    SingletonRow,
}

/// Location of a list of coefficients in the arena of the stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct ArenaRange {
    start: usize,
    end: usize,
}

impl ArenaRange {
    fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Information to undo a single reduction.
///
/// All rows and columns are referred to by ordinal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Record {
    /// A row without finite bounds was removed.
    FreeRow {
        row: usize,
        /// (column, value) tuples of the row when it was removed.
        coefficients: ArenaRange,
    },
    /// A surplus column `-s`, `s >= 0`, was added to make the row an equality at its lower bound.
    GreaterRow {
        row: usize,
        surplus: usize,
    },
    /// A slack column `s >= 0` was added to make the row an equality at its upper bound.
    LessRow {
        row: usize,
        slack: usize,
    },
    /// A free column `x` was split as `x = x+ - x-` with `x+` keeping the ordinal of `x`.
    FreeColumn {
        column: usize,
        negative_part: usize,
    },
    /// A column was shifted, `x = l + x'`.
    LowerBoundedColumn {
        column: usize,
        bound: f64,
        /// (row, value) tuples of the column when it was shifted.
        coefficients: ArenaRange,
    },
    /// A column was flipped and shifted, `x = u - x'`.
    UpperBoundedColumn {
        column: usize,
        bound: f64,
        /// (row, value) tuples of the column before it was negated.
        coefficients: ArenaRange,
    },
    /// The upper bound `u` of `0 <= x <= u` was replaced by a companion column and a row
    /// `x + x' = u`.
    DoubleBoundedColumn {
        column: usize,
        companion: usize,
    },
    /// A column with equal bounds was substituted and removed.
    FixedColumn {
        column: usize,
        value: f64,
        cost: f64,
        /// (row, value) tuples of the column when it was removed.
        coefficients: ArenaRange,
    },
    /// A row without coefficients was removed.
    EmptyRow {
        row: usize,
    },
    /// A column without coefficients was fixed, a `FixedColumn` record follows this one.
    EmptyColumn {
        column: usize,
        status: Status,
    },
    /// An equality row with a single coefficient was removed, a `FixedColumn` record for the
    /// column follows this one.
    SingletonRow {
        row: usize,
        column: usize,
        coefficient: f64,
    },
}

impl Record {
    /// Which reduction created this record.
    pub(crate) fn reduction(&self) -> Reduction {
        match self {
            Record::FreeRow { .. } => Reduction::FreeRow,
            Record::GreaterRow { .. } => Reduction::GreaterRow,
            Record::LessRow { .. } => Reduction::LessRow,
            Record::FreeColumn { .. } => Reduction::FreeColumn,
            Record::LowerBoundedColumn { .. } => Reduction::LowerBoundedColumn,
            Record::UpperBoundedColumn { .. } => Reduction::UpperBoundedColumn,
            Record::DoubleBoundedColumn { .. } => Reduction::DoubleBoundedColumn,
            Record::FixedColumn { .. } => Reduction::FixedColumn,
            Record::EmptyRow { .. } => Reduction::EmptyRow,
            Record::EmptyColumn { .. } => Reduction::EmptyColumn,
            Record::SingletonRow { .. } => Reduction::SingletonRow,
        }
    }

    /// Undo this reduction in the solution arrays.
    ///
    /// # Arguments
    ///
    /// * `arena`: Coefficient lists referred to by the records.
    /// * `arrays`: Values known so far, to be extended with the values for the rows and columns
    /// that this record removed or changed.
    fn recover(&self, arena: &[SparseTuple<f64>], arrays: &mut SolutionArrays) {
        match *self {
            Record::FreeRow { row, coefficients } => {
                free_row::recover(row, &arena[coefficients.range()], arrays)
            },
            Record::GreaterRow { row, surplus } => inequality_row::recover_greater(row, surplus, arrays),
            Record::LessRow { row, slack } => inequality_row::recover_less(row, slack, arrays),
            Record::FreeColumn { column, negative_part } => {
                free_column::recover(column, negative_part, arrays)
            },
            Record::LowerBoundedColumn { column, bound, coefficients } => {
                bounded_column::recover_lower(column, bound, &arena[coefficients.range()], arrays)
            },
            Record::UpperBoundedColumn { column, bound, coefficients } => {
                bounded_column::recover_upper(column, bound, &arena[coefficients.range()], arrays)
            },
            Record::DoubleBoundedColumn { column, companion } => {
                double_bounded_column::recover(column, companion, arrays)
            },
            Record::FixedColumn { column, value, cost, coefficients } => {
                fixed_column::recover(column, value, cost, &arena[coefficients.range()], arrays)
            },
            Record::EmptyRow { row } => empty::recover_row(row, arrays),
            Record::EmptyColumn { column, status } => empty::recover_column(column, status, arrays),
            Record::SingletonRow { row, column, coefficient } => {
                singleton_row::recover(row, column, coefficient, arrays)
            },
        }
    }
}

/// Records of a presolve session, in the order in which they were created.
///
/// Coefficient lists of all records are stored in a single arena. Nothing is freed before the
/// stack itself is dropped.
#[derive(Debug, Default)]
pub(crate) struct Stack {
    records: Vec<Record>,
    arena: Vec<SparseTuple<f64>>,
    counts: EnumMap<Reduction, usize>,
}

impl Stack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Copy a list of coefficients into the arena.
    ///
    /// # Return value
    ///
    /// Location of the copy, to be stored in a record.
    pub(crate) fn allocate(&mut self, values: impl IntoIterator<Item = SparseTuple<f64>>) -> ArenaRange {
        let start = self.arena.len();
        self.arena.extend(values);
        ArenaRange { start, end: self.arena.len() }
    }

    /// Add a record on top of the stack.
    pub(crate) fn push(&mut self, record: Record) {
        self.counts[record.reduction()] += 1;
        self.records.push(record);
    }

    /// Number of records.
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// How many records were pushed for each reduction.
    pub(crate) fn counts(&self) -> &EnumMap<Reduction, usize> {
        &self.counts
    }

    /// Undo all reductions, last one first.
    ///
    /// # Panics
    ///
    /// If a record needs a value that is neither present in the arrays, nor computed by a record
    /// replayed earlier.
    pub(crate) fn replay(&self, arrays: &mut SolutionArrays) {
        for record in self.records.iter().rev() {
            record.recover(&self.arena, arrays);
        }
    }

    #[cfg(test)]
    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    #[cfg(test)]
    pub(crate) fn coefficients(&self, range: ArenaRange) -> &[SparseTuple<f64>] {
        &self.arena[range.range()]
    }

    /// Replay in the wrong order, to check that this gets detected.
    #[cfg(test)]
    pub(crate) fn replay_in_creation_order(&self, arrays: &mut SolutionArrays) {
        for record in &self.records {
            record.recover(&self.arena, arrays);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{SolutionKind, Status};
    use crate::data::linear_program::presolve::postsolve::SolutionArrays;
    use crate::data::linear_program::presolve::stack::{Record, Reduction, Stack};

    #[test]
    fn arena() {
        let mut stack = Stack::new();
        let first = stack.allocate([(0, 1_f64), (3, 2_f64)]);
        let second = stack.allocate([]);
        let third = stack.allocate([(1, -1_f64)]);
        assert_eq!(stack.coefficients(first), &[(0, 1_f64), (3, 2_f64)]);
        assert!(stack.coefficients(second).is_empty());
        assert_eq!(stack.coefficients(third), &[(1, -1_f64)]);
    }

    #[test]
    fn counts() {
        let mut stack = Stack::new();
        stack.push(Record::EmptyRow { row: 0 });
        stack.push(Record::EmptyRow { row: 1 });
        stack.push(Record::EmptyColumn { column: 0, status: Status::NonBasicLower });
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.counts()[Reduction::EmptyRow], 2);
        assert_eq!(stack.counts()[Reduction::EmptyColumn], 1);
        assert_eq!(stack.counts()[Reduction::FixedColumn], 0);
    }

    /// A singleton row is replayed after the fixed column it delegated to.
    #[test]
    fn replay_is_reversed() {
        let mut stack = Stack::new();
        stack.push(Record::SingletonRow { row: 0, column: 0, coefficient: 2_f64 });
        let coefficients = stack.allocate([]);
        stack.push(Record::FixedColumn { column: 0, value: 3_f64, cost: 4_f64, coefficients });

        let mut arrays = SolutionArrays::new(SolutionKind::Basic, 1, 1);
        stack.replay(&mut arrays);

        assert_eq!(arrays.column_status(0), Status::Basic);
        assert_eq!(arrays.column_primal(0), 3_f64);
        assert_eq!(arrays.column_dual(0), 0_f64);
        assert_eq!(arrays.row_status(0), Status::NonBasicFixed);
        assert_eq!(arrays.row_primal(0), 6_f64);
        assert_eq!(arrays.row_dual(0), 2_f64);
    }

    #[test]
    #[should_panic(expected = "column 0")]
    fn replay_in_wrong_order_is_detected() {
        let mut stack = Stack::new();
        stack.push(Record::SingletonRow { row: 0, column: 0, coefficient: 2_f64 });
        let coefficients = stack.allocate([]);
        stack.push(Record::FixedColumn { column: 0, value: 3_f64, cost: 4_f64, coefficients });

        let mut arrays = SolutionArrays::new(SolutionKind::Basic, 1, 1);
        stack.replay_in_creation_order(&mut arrays);
    }
}
