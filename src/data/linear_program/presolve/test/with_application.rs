use approx::assert_abs_diff_eq;

use crate::data::linear_program::elements::{Objective, Status, VariableType};
use crate::data::linear_program::presolve::{Infeasibility, Presolve, PresolveSettings, PresolveSettingsBuilder, Reduction};
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;

const INF: f64 = f64::INFINITY;

fn problem(
    objective: Objective,
    rows: &[(f64, f64)],
    columns: &[(f64, f64, f64)],
    coefficients: &[(usize, usize, f64)],
) -> Problem {
    let mut problem = Problem::new(objective);
    for &(lower, upper) in rows {
        problem.add_row(lower, upper).unwrap();
    }
    for &(lower, upper, cost) in columns {
        problem.add_column(lower, upper, VariableType::Continuous, cost).unwrap();
    }
    for &(i, j, value) in coefficients {
        problem.set_coefficient(i, j, value).unwrap();
    }
    problem
}

/// MIN Z = x0 + 2x1 + 3x2 - x3
/// subject to
/// 2x0 = 4
/// x0 + x1 >= 3
/// x1 + x2 free
/// -1 <= 0 <= 1
/// 0 <= x0 <= 10, x1 >= 0, x2 = 1, x3 <= 5
///
/// Everything but the second row and `x1` gets eliminated; that row gets a surplus column.
#[test]
fn eliminate_and_standardize() {
    let initial = problem(
        Objective::Minimize,
        &[(4_f64, 4_f64), (3_f64, INF), (-INF, INF), (-1_f64, 1_f64)],
        &[(0_f64, 10_f64, 1_f64), (0_f64, INF, 2_f64), (1_f64, 1_f64, 3_f64), (-INF, 5_f64, -1_f64)],
        &[(0, 0, 2_f64), (1, 0, 1_f64), (1, 1, 1_f64), (2, 1, 1_f64), (2, 2, 1_f64)],
    );
    let mut presolve = Presolve::new(initial, PresolveSettings::default());
    let summary = presolve.presolve().unwrap();

    assert_eq!((summary.nr_original_rows, summary.nr_original_columns), (4, 4));
    assert_eq!((summary.nr_rows, summary.nr_columns), (1, 2));
    assert_eq!(summary.reductions[Reduction::SingletonRow], 1);
    assert_eq!(summary.reductions[Reduction::FixedColumn], 3);
    assert_eq!(summary.reductions[Reduction::FreeRow], 1);
    assert_eq!(summary.reductions[Reduction::EmptyRow], 1);
    assert_eq!(summary.reductions[Reduction::EmptyColumn], 2);
    assert_eq!(summary.reductions[Reduction::GreaterRow], 1);
    assert_eq!(summary.reductions[Reduction::LessRow], 0);

    let reduced = presolve.reduced_problem();
    assert_eq!(reduced.row_origin(), &[1]);
    assert_eq!(reduced.column_origin(), &[1, 4]);
    let compact = reduced.problem();
    assert_eq!(compact.fixed_cost(), 0_f64);
    assert_eq!(compact.row(0).coefficients(), &[(0, 1_f64), (1, -1_f64)]);
    assert_eq!((compact.row(0).lower(), compact.row(0).upper()), (1_f64, 1_f64));

    // MIN 2x1 s.t. x1 - s = 1 is solved by x1 = 1 with multiplier 2
    let solution = presolve.postsolve(&Solution::basic(
        vec![Status::NonBasicFixed], vec![1_f64], vec![2_f64],
        vec![Status::Basic, Status::NonBasicLower], vec![1_f64, 0_f64], vec![0_f64, 2_f64],
    ));

    assert_eq!(solution.column_primal(), &[2_f64, 1_f64, 1_f64, 5_f64]);
    assert_eq!(
        solution.column_status(),
        &[Status::Basic, Status::Basic, Status::NonBasicFixed, Status::NonBasicUpper],
    );
    assert_eq!(solution.column_dual(), &[0_f64, 0_f64, 3_f64, -1_f64]);
    assert_eq!(solution.row_primal(), &[4_f64, 3_f64, 2_f64, 0_f64]);
    assert_eq!(
        solution.row_status(),
        &[Status::NonBasicFixed, Status::NonBasicLower, Status::Basic, Status::Basic],
    );
    assert_eq!(solution.row_dual(), &[-0.5, 2_f64, 0_f64, 0_f64]);
    assert_eq!(solution.objective_value(), Some(2_f64));
}

/// MAX Z = 3x0 + 2x1
/// subject to
/// x0 + x1 <= 4
/// x0 + 3x1 <= 9
/// 0 <= x0 <= 3, x1 >= 0
///
/// The upper bound of `x0` is split off, so the reduced problem has three rows.
#[test]
fn maximize_with_split_bounds() {
    let initial = problem(
        Objective::Maximize,
        &[(-INF, 4_f64), (-INF, 9_f64)],
        &[(0_f64, 3_f64, 3_f64), (0_f64, INF, 2_f64)],
        &[(0, 0, 1_f64), (0, 1, 1_f64), (1, 0, 1_f64), (1, 1, 3_f64)],
    );
    let settings = PresolveSettingsBuilder::default()
        .split_double_bounded(true)
        .build()
        .unwrap();
    let mut presolve = Presolve::new(initial, settings);
    let summary = presolve.presolve().unwrap();

    assert_eq!((summary.nr_rows, summary.nr_columns), (3, 5));
    assert_eq!(summary.reductions[Reduction::LessRow], 2);
    assert_eq!(summary.reductions[Reduction::DoubleBoundedColumn], 1);
    let reduced = presolve.reduced_problem();
    assert_eq!(reduced.problem().objective(), Objective::Minimize);
    assert!(reduced.problem().iter_active_rows().all(|(_, row)| row.is_equality()));
    assert!(reduced.problem().iter_active_columns()
        .all(|(_, column)| column.lower() == 0_f64 && column.upper() == INF));

    // MIN -3x0 - 2x1
    // x0 + x1 + s2 = 4
    // x0 + 3x1 + s3 = 9
    // x0 + x4 = 3
    // with basis x0, x1, s3
    let solution = presolve.postsolve(&Solution::basic(
        vec![Status::NonBasicFixed; 3], vec![4_f64, 9_f64, 3_f64], vec![-2_f64, 0_f64, -1_f64],
        vec![Status::Basic, Status::Basic, Status::NonBasicLower, Status::Basic, Status::NonBasicLower],
        vec![3_f64, 1_f64, 0_f64, 3_f64, 0_f64],
        vec![0_f64, 0_f64, 2_f64, 0_f64, 1_f64],
    ));

    assert_eq!(solution.column_primal(), &[3_f64, 1_f64]);
    assert_eq!(solution.column_status(), &[Status::NonBasicUpper, Status::Basic]);
    assert_eq!(solution.column_dual(), &[1_f64, 0_f64]);
    assert_eq!(solution.row_primal(), &[4_f64, 6_f64]);
    assert_eq!(solution.row_status(), &[Status::NonBasicUpper, Status::Basic]);
    assert_eq!(solution.row_dual(), &[2_f64, 0_f64]);
    assert_eq!(solution.objective_value(), Some(11_f64));
}

/// MIN Z = x0 + 2x1 - x2
/// subject to
/// x0 + x1 + x2 = 5
/// x0 free, x1 >= 1, x2 <= 2
#[test]
fn shift_flip_and_split_interior_point() {
    let initial = problem(
        Objective::Minimize,
        &[(5_f64, 5_f64)],
        &[(-INF, INF, 1_f64), (1_f64, INF, 2_f64), (-INF, 2_f64, -1_f64)],
        &[(0, 0, 1_f64), (0, 1, 1_f64), (0, 2, 1_f64)],
    );
    let mut presolve = Presolve::new(initial, PresolveSettings::default());
    let summary = presolve.presolve().unwrap();

    assert_eq!(summary.reductions[Reduction::FreeColumn], 1);
    assert_eq!(summary.reductions[Reduction::LowerBoundedColumn], 1);
    assert_eq!(summary.reductions[Reduction::UpperBoundedColumn], 1);
    let reduced = presolve.reduced_problem();
    let compact = reduced.problem();
    assert_eq!(compact.row(0).coefficients(), &[(0, 1_f64), (1, 1_f64), (2, -1_f64), (3, -1_f64)]);
    assert_eq!(compact.row(0).lower(), 2_f64);
    assert_eq!(
        compact.iter_active_columns().map(|(_, column)| column.cost()).collect::<Vec<_>>(),
        vec![1_f64, 2_f64, 1_f64, -1_f64],
    );

    // x0+ = 2 with multiplier 1
    let solution = presolve.postsolve(&Solution::interior_point(
        vec![2_f64], vec![1_f64],
        vec![2_f64, 0_f64, 0_f64, 0_f64], vec![0_f64, 1_f64, 2_f64, 0_f64],
    ));

    assert!(solution.column_status().is_empty());
    assert_eq!(solution.column_primal(), &[2_f64, 1_f64, 2_f64]);
    assert_eq!(solution.column_dual(), &[0_f64, 1_f64, -2_f64]);
    assert_eq!(solution.row_primal(), &[5_f64]);
    assert_eq!(solution.row_dual(), &[1_f64]);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 2_f64);
}

#[test]
fn only_elimination() {
    let initial = problem(
        Objective::Minimize,
        &[(1_f64, 2_f64), (-INF, INF)],
        &[(-1_f64, 1_f64, 1_f64), (0_f64, 0_f64, 1_f64)],
        &[(0, 0, 1_f64), (1, 0, 1_f64), (1, 1, 1_f64)],
    );
    let settings = PresolveSettingsBuilder::default().standardize(false).build().unwrap();
    let mut presolve = Presolve::new(initial, settings);
    let summary = presolve.presolve().unwrap();

    assert_eq!((summary.nr_rows, summary.nr_columns), (1, 1));
    let row = presolve.problem().row(0);
    assert_eq!((row.lower(), row.upper()), (1_f64, 2_f64));
    assert_eq!(presolve.problem().column(0).lower(), -1_f64);
}

#[test]
fn infeasible_empty_row() {
    let initial = problem(Objective::Minimize, &[(1_f64, 2_f64)], &[(0_f64, 1_f64, 1_f64)], &[]);
    let mut presolve = Presolve::new(initial, PresolveSettings::default());
    assert_eq!(presolve.presolve(), Err(Infeasibility::EmptyRow { row: 0, lower: 1_f64, upper: 2_f64 }));
}

#[test]
fn infeasible_singleton_row() {
    let initial = problem(
        Objective::Minimize,
        &[(6_f64, 6_f64)],
        &[(4_f64, 5_f64, 1_f64)],
        &[(0, 0, 2_f64)],
    );
    let mut presolve = Presolve::new(initial, PresolveSettings::default());
    assert!(matches!(presolve.presolve(), Err(Infeasibility::SingletonRow { row: 0, column: 0, .. })));
    assert_eq!(presolve.problem().nr_active_rows(), 1);
}
