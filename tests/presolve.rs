//! # Integration tests
//!
//! All code in this file could be written by an external user of the crate.
use approx::assert_abs_diff_eq;

use lp_presolve::data::linear_program::elements::{Objective, SolutionKind, Status, VariableType};
use lp_presolve::data::linear_program::presolve::{Infeasibility, Presolve, PresolveSettings, PresolveSettingsBuilder};
use lp_presolve::data::linear_program::problem::{Problem, ProblemError};
use lp_presolve::data::linear_program::solution::Solution;

/// MIN Z = x0 + 2x1 - x2
/// subject to
/// x0 + x1 + x2 = 5
/// x0 free, x1 >= 1, x2 <= 2
fn shifted() -> Problem {
    let mut problem = Problem::new(Objective::Minimize);
    let row = problem.add_row(5_f64, 5_f64).unwrap();
    let x0 = problem.add_column(f64::NEG_INFINITY, f64::INFINITY, VariableType::Continuous, 1_f64).unwrap();
    let x1 = problem.add_column(1_f64, f64::INFINITY, VariableType::Continuous, 2_f64).unwrap();
    let x2 = problem.add_column(f64::NEG_INFINITY, 2_f64, VariableType::Continuous, -1_f64).unwrap();
    for column in [x0, x1, x2] {
        problem.set_coefficient(row, column, 1_f64).unwrap();
    }
    problem
}

#[test]
fn round_trip_basic_solution() {
    let mut presolve = Presolve::new(shifted(), PresolveSettings::default());
    let summary = presolve.presolve().unwrap();
    assert_eq!((summary.nr_rows, summary.nr_columns), (1, 4));

    let reduced = presolve.reduced_problem();
    assert_eq!(reduced.nr_rows(), 1);
    assert_eq!(reduced.nr_columns(), 4);

    // x0+ = 2 is basic with multiplier 1, all other columns at zero
    let solution = presolve.postsolve(&Solution::basic(
        vec![Status::NonBasicFixed], vec![2_f64], vec![1_f64],
        vec![Status::Basic, Status::NonBasicLower, Status::NonBasicLower, Status::NonBasicLower],
        vec![2_f64, 0_f64, 0_f64, 0_f64],
        vec![0_f64, 1_f64, 2_f64, 0_f64],
    ));

    assert_eq!(solution.kind(), SolutionKind::Basic);
    assert_eq!(solution.column_status(), &[Status::Basic, Status::NonBasicLower, Status::NonBasicUpper]);
    assert_eq!(solution.column_primal(), &[2_f64, 1_f64, 2_f64]);
    assert_eq!(solution.column_dual(), &[0_f64, 1_f64, -2_f64]);
    assert_eq!(solution.row_status(), &[Status::NonBasicFixed]);
    assert_eq!(solution.row_primal(), &[5_f64]);
    assert_abs_diff_eq!(solution.objective_value().unwrap(), 2_f64);
}

#[test]
fn standard_form_only_on_request() {
    let settings = PresolveSettingsBuilder::default().standardize(false).build().unwrap();
    let mut presolve = Presolve::new(shifted(), settings);
    let summary = presolve.presolve().unwrap();

    assert_eq!(summary.nr_columns, 3);
    assert!(summary.reductions.values().all(|&count| count == 0));
    assert!(presolve.problem().column(0).is_free());
}

#[test]
fn infeasible() {
    // 2x = 6 with 4 <= x <= 5
    let mut problem = Problem::new(Objective::Maximize);
    let row = problem.add_row(6_f64, 6_f64).unwrap();
    let column = problem.add_column(4_f64, 5_f64, VariableType::Integer, 1_f64).unwrap();
    problem.set_coefficient(row, column, 2_f64).unwrap();

    let mut presolve = Presolve::new(problem, PresolveSettings::default());
    let error = presolve.presolve().unwrap_err();
    assert_eq!(
        error,
        Infeasibility::SingletonRow { row: 0, column: 0, value: 3_f64, lower: 4_f64, upper: 5_f64 },
    );
    assert!(error.to_string().contains("column 0"));
}

#[test]
fn invalid_input() {
    let mut problem = Problem::new(Objective::Minimize);
    assert_eq!(
        problem.add_row(f64::INFINITY, f64::INFINITY),
        Err(ProblemError::InvalidRowBounds { lower: f64::INFINITY, upper: f64::INFINITY }),
    );
    assert!(PresolveSettingsBuilder::default().feasibility_tolerance(f64::INFINITY).build().is_err());
}
