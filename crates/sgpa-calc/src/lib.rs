//! Grading engine for first-year CIE/SEE marks.
//!
//! The `grading` tree holds the pure computation: rubric reducers, the score combiner,
//! pass rules, grade bands, SGPA aggregation, the required-SEE solver and the target
//! forecast. `config`, `error` and `telemetry` carry the ambient pieces used by the CLI.

pub mod config;
pub mod error;
pub mod grading;
pub mod telemetry;
