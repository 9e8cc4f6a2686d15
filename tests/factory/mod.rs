use error_or::factory;
use error_or::{ErrorValue, ResultOrErrors};

#[test]
fn from_value_matches_direct_construction() {
    let via_factory = factory::from_value(12);
    let direct = ResultOrErrors::from_value(12);

    assert_eq!(via_factory.is_error(), direct.is_error());
    assert_eq!(via_factory.value(), direct.value());
    assert_eq!(via_factory, direct);
}

#[test]
fn from_error_matches_direct_construction() {
    let via_factory = factory::from_error::<i32>(ErrorValue::not_found());
    assert_eq!(via_factory, ResultOrErrors::from_error(ErrorValue::not_found()));
}

#[test]
fn from_errors_matches_direct_construction() {
    let errors = vec![ErrorValue::conflict(), ErrorValue::failure(), ErrorValue::conflict()];

    let via_factory = factory::from_errors::<(), _>(errors.clone());
    let direct = ResultOrErrors::<()>::from_errors(errors);

    assert_eq!(via_factory.errors(), direct.errors());
}

#[test]
#[should_panic(expected = "empty collection of errors")]
fn from_errors_rejects_empty() {
    let _ = factory::from_errors::<(), _>(Vec::<ErrorValue>::new());
}
