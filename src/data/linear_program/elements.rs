//! # Building blocks to describe linear programs and their solutions.
/// Direction of a bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// Bound from below, `l <= x`.
    Lower,
    /// Bound from above, `x <= u`.
    Upper,
}

/// A variable is either continuous or integer.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VariableType {
    Continuous,
    Integer,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

/// Status of a row or column in a basic solution.
///
/// For a row, the status describes its auxiliary variable, that is, the activity `<a, x>`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// Variable is in the basis.
    Basic,
    /// Not in the basis, at its lower bound.
    NonBasicLower,
    /// Not in the basis, at its upper bound.
    NonBasicUpper,
    /// Not in the basis, free and (by convention) at zero.
    NonBasicFree,
    /// Not in the basis, lower and upper bound coincide.
    NonBasicFixed,
}

impl Status {
    /// Whether the status is any of the nonbasic variants.
    pub fn is_nonbasic(self) -> bool {
        !matches!(self, Status::Basic)
    }

    /// Exchange the lower and upper bound.
    ///
    /// Used when a variable gets replaced by its negation: being at the lower bound of `-x` is
    /// being at the upper bound of `x`.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Status::NonBasicLower => Status::NonBasicUpper,
            Status::NonBasicUpper => Status::NonBasicLower,
            other => other,
        }
    }
}

/// Which kind of solution was produced by the solver of the reduced problem.
///
/// Determines which values are to be reconstructed for the original problem.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SolutionKind {
    /// Simplex method: statuses, primal values and dual values.
    Basic,
    /// Interior point method: primal values and dual values.
    InteriorPoint,
    /// Branch and bound: primal values only.
    Integer,
}

impl SolutionKind {
    /// Whether solutions of this kind contain a row and column status.
    pub fn has_status(self) -> bool {
        matches!(self, SolutionKind::Basic)
    }

    /// Whether solutions of this kind contain dual values and reduced costs.
    pub fn has_dual(self) -> bool {
        matches!(self, SolutionKind::Basic | SolutionKind::InteriorPoint)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mirrored() {
        assert_eq!(Status::NonBasicLower.mirrored(), Status::NonBasicUpper);
        assert_eq!(Status::NonBasicUpper.mirrored(), Status::NonBasicLower);
        assert_eq!(Status::Basic.mirrored(), Status::Basic);
        assert_eq!(Status::NonBasicFixed.mirrored(), Status::NonBasicFixed);
    }

    #[test]
    fn solution_kind_fields() {
        assert!(SolutionKind::Basic.has_status());
        assert!(!SolutionKind::InteriorPoint.has_status());
        assert!(SolutionKind::InteriorPoint.has_dual());
        assert!(!SolutionKind::Integer.has_dual());
        assert!(!SolutionKind::Integer.has_status());
    }

    #[test]
    fn default_objective() {
        assert_eq!(Objective::default(), Objective::Minimize);
    }
}
