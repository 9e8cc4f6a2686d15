use error_or::{errors, ErrorValue, ResultOrErrors};

#[test]
fn errors_macro_builds_error_state() {
    let result: ResultOrErrors<i32> = errors![ErrorValue::conflict(), ErrorValue::not_found()];

    assert!(result.is_error());
    assert_eq!(result.errors(), &[ErrorValue::conflict(), ErrorValue::not_found()]);
}

#[test]
fn errors_macro_accepts_trailing_comma_and_duplicates() {
    let e = ErrorValue::validation().with_code("Dup");
    let result: ResultOrErrors<()> = errors![e.clone(), e.clone(),];

    assert_eq!(result.errors(), &[e.clone(), e]);
}

#[test]
fn errors_macro_works_as_return_expression() {
    fn check(age: i32) -> ResultOrErrors<i32> {
        if age < 0 {
            return errors![ErrorValue::validation().with_code("Age.Negative")];
        }
        ResultOrErrors::from_value(age)
    }

    assert_eq!(check(-1).first_error().code(), "Age.Negative");
    assert_eq!(*check(30).value(), 30);
}

#[test]
#[should_panic(expected = "empty collection of errors")]
fn empty_errors_macro_panics() {
    let _: ResultOrErrors<i32> = errors![];
}
