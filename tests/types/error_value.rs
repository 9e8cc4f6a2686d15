use std::collections::HashMap;

use error_or::{ErrorCategory, ErrorValue, Metadata};

use super::hash_of;

fn foo_bar() -> HashMap<&'static str, &'static str> {
    HashMap::from([("foo", "bar"), ("baz", "qux")])
}

#[test]
fn factories_supply_category_defaults() {
    let cases = [
        (ErrorValue::failure(), ErrorCategory::Failure, "General.Failure", "A failure has occurred."),
        (
            ErrorValue::unexpected(),
            ErrorCategory::Unexpected,
            "General.Unexpected",
            "An unexpected error has occurred.",
        ),
        (
            ErrorValue::validation(),
            ErrorCategory::Validation,
            "General.Validation",
            "A validation error has occurred.",
        ),
        (
            ErrorValue::conflict(),
            ErrorCategory::Conflict,
            "General.Conflict",
            "A conflict error has occurred.",
        ),
        (
            ErrorValue::not_found(),
            ErrorCategory::NotFound,
            "General.NotFound",
            "A 'Not Found' error has occurred.",
        ),
        (
            ErrorValue::unauthorized(),
            ErrorCategory::Unauthorized,
            "General.Unauthorized",
            "An 'Unauthorized' error has occurred.",
        ),
        (
            ErrorValue::forbidden(),
            ErrorCategory::Forbidden,
            "General.Forbidden",
            "A 'Forbidden' error has occurred.",
        ),
    ];

    for (error, category, code, description) in cases {
        assert_eq!(error.category(), category);
        assert_eq!(error.numeric_category(), category.as_numeric());
        assert_eq!(error.code(), code);
        assert_eq!(error.description(), description);
        assert!(error.metadata().is_none());
    }
}

#[test]
fn builders_override_code_and_description() {
    let error = ErrorValue::conflict()
        .with_code("Order.Duplicate")
        .with_description("order was already placed");

    assert_eq!(error.category(), ErrorCategory::Conflict);
    assert_eq!(error.code(), "Order.Duplicate");
    assert_eq!(error.description(), "order was already placed");
}

#[test]
fn custom_accepts_any_numeric_category() {
    let error = ErrorValue::custom(3215, "CodeB", "DescriptionB");
    assert_eq!(error.category(), ErrorCategory::Custom(3215));
    assert_eq!(error.numeric_category(), 3215);

    let negative = ErrorValue::custom(-20, "Neg", "negative category");
    assert_eq!(negative.category(), ErrorCategory::Custom(-20));
}

#[test]
fn custom_with_built_in_number_decodes_to_built_in() {
    let error = ErrorValue::custom(1, "CodeA", "DescriptionA");
    assert_eq!(error.category(), ErrorCategory::Unexpected);
    assert_eq!(error.numeric_category(), 1);
}

#[test]
fn equal_when_fields_match_without_metadata() {
    let error1 = ErrorValue::custom(1, "CodeA", "DescriptionA");
    let error2 = ErrorValue::custom(1, "CodeA", "DescriptionA");

    assert_eq!(error1, error2);
    assert_eq!(hash_of(&error1), hash_of(&error2));
}

#[test]
fn equal_when_metadata_is_an_independent_copy() {
    let metadata = foo_bar();
    let cloned = metadata.clone();

    let error1 = ErrorValue::custom(3215, "CodeB", "DescriptionB").with_metadata(metadata);
    let error2 = ErrorValue::custom(3215, "CodeB", "DescriptionB").with_metadata(cloned);

    assert_eq!(error1, error2);
    assert_eq!(hash_of(&error1), hash_of(&error2));
}

#[test]
fn equal_when_metadata_is_the_same_instance() {
    let metadata: Metadata = [("foo", "bar")].into_iter().collect();

    let error1 = ErrorValue::custom(1, "Code", "Description").with_metadata_map(metadata.clone());
    let error2 = ErrorValue::custom(1, "Code", "Description").with_metadata_map(metadata);

    assert_eq!(error1, error2);
}

#[test]
fn metadata_insertion_order_does_not_affect_equality_or_hash() {
    let error1 = ErrorValue::failure().with_metadata([("a", 1), ("b", 2), ("c", 3)]);
    let error2 = ErrorValue::failure().with_metadata([("c", 3), ("a", 1), ("b", 2)]);

    assert_eq!(error1, error2);
    assert_eq!(hash_of(&error1), hash_of(&error2));
}

#[test]
fn different_values_are_not_equal() {
    let cases = [
        (ErrorValue::failure(), ErrorValue::forbidden()),
        (
            ErrorValue::not_found(),
            ErrorValue::not_found().with_metadata([("Foo", "Bar")]),
        ),
        (
            ErrorValue::unexpected().with_metadata([("baz", "qux")]),
            ErrorValue::unexpected(),
        ),
        (
            ErrorValue::failure().with_metadata([("baz", "qux")]),
            ErrorValue::failure().with_metadata([("Foo", "Bar"), ("baz", "qux")]),
        ),
        (
            ErrorValue::failure().with_metadata([("baz", "qux")]),
            ErrorValue::failure().with_metadata([("baz", "gorge")]),
        ),
        (
            ErrorValue::custom(1, "CodeA", "DescA").with_metadata([("foo", "bar")]),
            ErrorValue::custom(1, "CodeA", "DescA").with_metadata([("foo", "baz")]),
        ),
        (ErrorValue::failure().with_code("A"), ErrorValue::failure().with_code("B")),
        (
            ErrorValue::failure().with_description("A"),
            ErrorValue::failure().with_description("B"),
        ),
    ];

    for (error1, error2) in cases {
        assert_ne!(error1, error2);
        assert_ne!(hash_of(&error1), hash_of(&error2));
    }
}

#[test]
fn absent_and_empty_metadata_are_distinct() {
    let absent = ErrorValue::validation();
    let empty = ErrorValue::validation().with_metadata(Vec::<(String, String)>::new());

    assert!(absent.metadata().is_none());
    assert!(empty.metadata().is_some_and(Metadata::is_empty));
    assert_ne!(absent, empty);
}

#[test]
fn metadata_is_a_snapshot_of_the_caller_map() {
    let mut source = foo_bar();
    let error = ErrorValue::failure().with_metadata(source.clone());

    source.insert("foo", "changed");
    source.insert("extra", "entry");

    let metadata = error.metadata().unwrap();
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.get("foo").unwrap().to_string(), "bar");
    assert!(!metadata.contains_key("extra"));
}

#[test]
fn display_shows_code_and_description() {
    let error = ErrorValue::not_found()
        .with_code("User.NotFound")
        .with_description("no such user");

    assert_eq!(error.to_string(), "User.NotFound: no such user");
}

#[test]
fn error_value_is_a_std_error() {
    fn boxed() -> Result<(), Box<dyn std::error::Error>> {
        Err::<(), _>(ErrorValue::unexpected())?;
        Ok(())
    }

    let err = boxed().unwrap_err();
    assert_eq!(err.to_string(), "General.Unexpected: An unexpected error has occurred.");
}

#[test]
fn error_value_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ErrorValue>();
}
