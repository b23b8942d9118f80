//! Converter invariants checked with property-based testing

use proptest::prelude::*;

use crate::{convert, looks_like_structured_markup};

use super::generators::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    /// Conversion is total: malformed markup is passed through, never fatal.
    #[test]
    fn converter_never_panics(input in any_docstring()) {
        let _ = convert(&input);
    }

    #[test]
    fn classifier_never_panics(input in any_docstring()) {
        let _ = looks_like_structured_markup(&input);
    }

    /// Every opened code fence is closed again, including the block that is
    /// still open when the input ends.
    #[test]
    fn fences_are_balanced(input in structured_docstring()) {
        let markdown = convert(&input);
        prop_assert_eq!(markdown.matches("```").count() % 2, 0, "unbalanced fences in {:?}", markdown);
    }

    #[test]
    fn plain_prose_is_unchanged(input in plain_prose()) {
        prop_assert_eq!(convert(&input), input);
    }
}
