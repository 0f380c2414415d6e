//! Property-based tests for source precedence.

use std::collections::HashMap;

use super::{resolve_owner, resolve_uid, ValueSource, DEFAULT_OWNER, USER_ENV};
use crate::random::OsEntropy;
use proptest::prelude::*;

fn optional_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z0-9]{1,12}".prop_map(Some),
    ]
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

proptest! {
    // The owner is the first non-empty source, never empty itself
    #[test]
    fn owner_follows_precedence(
        cli in optional_value(),
        file in optional_value(),
        user in optional_value(),
    ) {
        let env: HashMap<String, String> = user
            .clone()
            .map(|u| HashMap::from([(USER_ENV.to_string(), u)]))
            .unwrap_or_default();

        let owner = resolve_owner(cli.as_deref(), file.as_deref(), &env);
        prop_assert!(!owner.value.is_empty());

        let expected = present(cli.as_ref())
            .map(|v| (v, ValueSource::CommandLine))
            .or_else(|| present(file.as_ref()).map(|v| (v, ValueSource::OptionsFile)))
            .or_else(|| present(user.as_ref()).map(|v| (v, ValueSource::Environment)))
            .unwrap_or((DEFAULT_OWNER, ValueSource::Default));

        prop_assert_eq!(owner.value.as_str(), expected.0);
        prop_assert_eq!(owner.source, expected.1);
    }

    // A supplied uid is returned verbatim
    #[test]
    fn supplied_uid_is_exact(cli in optional_value(), file in optional_value()) {
        let uid = resolve_uid(cli.as_deref(), file.as_deref(), &OsEntropy).unwrap();
        match present(cli.as_ref()).or_else(|| present(file.as_ref())) {
            Some(expected) => prop_assert_eq!(uid.value.as_str(), expected),
            None => prop_assert_eq!(uid.source, ValueSource::Generated),
        }
    }
}
