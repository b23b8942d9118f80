//! Property-based tests for the docstring converter
//!
//! These complement the unit and fixture tests by checking properties that
//! must hold for any input, not just for hand-picked docstrings.

mod generators;
mod invariants;
