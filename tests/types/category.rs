use error_or::ErrorCategory;

#[test]
fn built_in_categories_round_trip_through_numeric_encoding() {
    for (expected, category) in ErrorCategory::BUILT_IN.iter().enumerate() {
        assert_eq!(category.as_numeric(), expected as i32);
        assert_eq!(ErrorCategory::from_numeric(expected as i32), *category);
        assert!(!category.is_custom());
    }
}

#[test]
fn numbers_outside_built_in_range_become_custom() {
    assert_eq!(ErrorCategory::from_numeric(-1), ErrorCategory::Custom(-1));
    assert_eq!(ErrorCategory::from_numeric(7), ErrorCategory::Custom(7));
    assert_eq!(ErrorCategory::from_numeric(i32::MAX).as_numeric(), i32::MAX);
    assert!(ErrorCategory::Custom(3215).is_custom());
}

#[test]
fn custom_variant_inside_built_in_range_is_not_custom() {
    assert!(!ErrorCategory::Custom(2).is_custom());
    assert_eq!(ErrorCategory::Custom(2).to_string(), "Validation");
    assert_eq!(
        ErrorCategory::Custom(2).defaults(),
        ErrorCategory::Validation.defaults()
    );
}

#[test]
fn defaults_exist_only_for_built_ins() {
    assert_eq!(
        ErrorCategory::NotFound.defaults(),
        Some(("General.NotFound", "A 'Not Found' error has occurred."))
    );
    assert_eq!(ErrorCategory::Custom(99).defaults(), None);
}

#[test]
fn display_names_categories() {
    assert_eq!(ErrorCategory::Unauthorized.to_string(), "Unauthorized");
    assert_eq!(ErrorCategory::Custom(42).to_string(), "Custom(42)");
}

#[test]
fn integer_conversions_match_numeric_encoding() {
    let category: ErrorCategory = 5.into();
    assert_eq!(category, ErrorCategory::Unauthorized);
    assert_eq!(i32::from(ErrorCategory::Forbidden), 6);
}
