//! Property-based tests for random suffix generation.

use super::{string_with_charset, DEFAULT_CHARSET};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Output length always equals the requested length
    #[test]
    fn generated_length_matches_request(length in 0usize..64) {
        let s = string_with_charset(length, DEFAULT_CHARSET).unwrap();
        prop_assert_eq!(s.chars().count(), length);
    }

    // Every generated character belongs to the charset
    #[test]
    fn generated_chars_come_from_charset(
        length in 1usize..32,
        charset in "[a-zA-Z0-9]{1,20}",
    ) {
        let s = string_with_charset(length, &charset).unwrap();
        for c in s.chars() {
            prop_assert!(charset.contains(c), "{} not in {}", c, charset);
        }
    }

    // A single-symbol charset is fully determined
    #[test]
    fn single_symbol_charset_repeats(length in 0usize..32, symbol in "[a-z]") {
        let s = string_with_charset(length, &symbol).unwrap();
        prop_assert_eq!(s, symbol.repeat(length));
    }
}
