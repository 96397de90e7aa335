//! # Presolve settings
//!
//! Tolerances and switches for the reduction driver. Build them with `PresolveSettingsBuilder`,
//! or use the defaults.
use derive_builder::Builder;
use thiserror::Error;

/// Tolerances and rule selection for presolving.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PresolveSettings {
    /// Absolute tolerance for the feasibility of empty rows, the dual feasibility of empty columns
    /// and the absolute part of the singleton row bound check.
    #[builder(default = "1e-6")]
    pub feasibility_tolerance: f64,

    /// Relative part of the singleton row bound check: a bound `b` is violated only beyond
    /// `feasibility_tolerance + relative_bound_tolerance * |b|`.
    #[builder(default = "1e-9")]
    pub relative_bound_tolerance: f64,

    /// Remove empty rows and columns.
    #[builder(default = "true")]
    pub remove_empty: bool,

    /// Remove equality rows with a single coefficient, fixing the column.
    #[builder(default = "true")]
    pub remove_singleton_rows: bool,

    /// Bring the problem in standard form: equality rows only, nonnegative columns only.
    #[builder(default = "true")]
    pub standardize: bool,

    /// In standard form, also replace column upper bounds by an extra column and row.
    #[builder(default = "false")]
    pub split_double_bounded: bool,
}

impl Default for PresolveSettings {
    fn default() -> PresolveSettings {
        PresolveSettingsBuilder::default().build().unwrap()
    }
}

/// Error type returned by settings validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A tolerance was negative, infinite or NaN.
    #[error("Bad value for tolerance {0}")]
    BadTolerance(&'static str),
}

impl From<SettingsError> for PresolveSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        PresolveSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl PresolveSettingsBuilder {
    /// Check that the tolerances that were set are usable.
    fn validate(&self) -> Result<(), SettingsError> {
        let is_valid = |value: &Option<f64>| value.is_none_or(|v| v.is_finite() && v >= 0_f64);

        if !is_valid(&self.feasibility_tolerance) {
            return Err(SettingsError::BadTolerance("feasibility_tolerance"));
        }
        if !is_valid(&self.relative_bound_tolerance) {
            return Err(SettingsError::BadTolerance("relative_bound_tolerance"));
        }

        Ok(())
    }
}

impl PresolveSettings {
    /// Width of the tolerance band around a bound for the singleton row check.
    pub(crate) fn bound_tolerance(&self, bound: f64) -> f64 {
        self.feasibility_tolerance + self.relative_bound_tolerance * bound.abs()
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::data::linear_program::presolve::settings::{PresolveSettings, PresolveSettingsBuilder};

    #[test]
    fn defaults() {
        let settings = PresolveSettings::default();
        assert_eq!(settings.feasibility_tolerance, 1e-6);
        assert_eq!(settings.relative_bound_tolerance, 1e-9);
        assert!(settings.remove_empty);
        assert!(settings.standardize);
        assert!(!settings.split_double_bounded);
        assert_abs_diff_eq!(settings.bound_tolerance(-1000_f64), 2e-6, epsilon = 1e-15);
    }

    #[test]
    fn builder() {
        let settings = PresolveSettingsBuilder::default()
            .split_double_bounded(true)
            .feasibility_tolerance(1e-8)
            .build()
            .unwrap();
        assert!(settings.split_double_bounded);
        assert_eq!(settings.feasibility_tolerance, 1e-8);
    }

    #[test]
    fn validation() {
        assert!(PresolveSettingsBuilder::default().feasibility_tolerance(-1_f64).build().is_err());
        assert!(PresolveSettingsBuilder::default().relative_bound_tolerance(f64::NAN).build().is_err());
    }
}
