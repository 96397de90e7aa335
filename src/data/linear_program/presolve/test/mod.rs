//! Round trips through reduction, a solve by hand and postsolve.
//!
//! Reduced solutions in these tests are optimal for the reduced problem; they were computed by
//! hand and are documented in the tests.
mod with_application;
