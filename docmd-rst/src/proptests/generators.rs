//! Input generators for property-based testing
#![allow(clippy::expect_used)]
use proptest::prelude::*;

/// Any string at all, including control characters and multi-byte text.
pub fn any_docstring() -> impl Strategy<Value = String> {
    prop::string::string_regex(".*").expect("Failed to create any string strategy")
}

/// Docstring lines drawn from the constructs the converter reacts to, mixed
/// with filler prose. None of them contains a backtick.
pub fn structured_docstring() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(">>> x = 1".to_string()),
            Just("... y".to_string()),
            Just("Example ::".to_string()),
            Just("Usage::".to_string()),
            Just("    indented code".to_string()),
            Just("\tx".to_string()),
            Just(String::new()),
            Just(".. math::".to_string()),
            Just(".. note::".to_string()),
            Just(".. warning::".to_string()),
            Just(".. code-block:: rust".to_string()),
            Just(".. productionlist::".to_string()),
            Just(".. autosummary::".to_string()),
            Just(".. highlight:: c".to_string()),
            Just(".. versionadded:: 1.0".to_string()),
            Just("Parameters".to_string()),
            Just("----------".to_string()),
            Just("n : int".to_string()),
            Just("**kwargs".to_string()),
            Just("x1, x2, ... : float".to_string()),
            prop::string::string_regex(r"[a-z ]{0,20}").expect("Failed to create filler line"),
        ],
        0..30,
    )
    .prop_map(|lines| lines.join("\n"))
}

/// Prose that no rule or block parser can react to.
pub fn plain_prose() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex(r"[a-zA-Z ,.]{0,40}").expect("Failed to create prose line"),
        0..10,
    )
    .prop_map(|lines| lines.join("\n"))
}
