use error_or::{ErrorValue, MetadataValue, ResultOrErrors};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Account {
    id: u32,
}

#[test]
fn value_state_round_trips() {
    let result = ResultOrErrors::from_value(Account { id: 7 });
    let json = serde_json::to_string(&result).unwrap();
    let back: ResultOrErrors<Account> = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn error_state_keeps_metadata() {
    let result = ResultOrErrors::<Account>::from_errors([
        ErrorValue::validation().with_metadata([("field", "id")]),
        ErrorValue::custom(1001, "Billing.Hold", "account is on hold"),
    ]);

    let json = serde_json::to_string(&result).unwrap();
    let back: ResultOrErrors<Account> = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn absent_metadata_is_omitted() {
    let json = serde_json::to_value(ErrorValue::not_found()).unwrap();
    assert!(json.get("metadata").is_none());
    assert_eq!(json["code"], "General.NotFound");
    assert_eq!(json["numeric_category"], 4);
}

#[test]
fn empty_error_list_is_rejected() {
    let parsed: Result<ResultOrErrors<Account>, _> = serde_json::from_str(r#"{"Errors":[]}"#);
    let message = parsed.unwrap_err().to_string();
    assert!(message.contains("empty collection of errors"));
}

#[test]
fn typed_metadata_round_trips_unchanged() {
    let err = ErrorValue::validation()
        .with_metadata([
            ("attempt", MetadataValue::from(3_u32)),
            ("offset", MetadataValue::from(-3_i64)),
            ("ratio", MetadataValue::from(0.25_f64)),
            ("strict", MetadataValue::from(true)),
            ("tags", MetadataValue::from(vec![1_u8, 2])),
        ]);

    let json = serde_json::to_string(&err).unwrap();
    let back: ErrorValue = serde_json::from_str(&json).unwrap();

    assert_eq!(err, back);
    let metadata = back.metadata().unwrap();
    assert_eq!(metadata.get("attempt"), Some(&MetadataValue::UInt(3)));
    assert_eq!(metadata.get("offset"), Some(&MetadataValue::Int(-3)));
    assert_eq!(
        metadata.get("tags"),
        Some(&MetadataValue::List(vec![MetadataValue::UInt(1), MetadataValue::UInt(2)]))
    );
}

#[test]
fn unsigned_and_signed_metadata_stay_distinct_after_round_trip() {
    let unsigned = ErrorValue::conflict().with_metadata([("n", 3_u64)]);
    let signed = ErrorValue::conflict().with_metadata([("n", 3_i64)]);

    let unsigned_back: ErrorValue =
        serde_json::from_str(&serde_json::to_string(&unsigned).unwrap()).unwrap();
    let signed_back: ErrorValue =
        serde_json::from_str(&serde_json::to_string(&signed).unwrap()).unwrap();

    assert_eq!(unsigned_back, unsigned);
    assert_eq!(signed_back, signed);
    assert_ne!(unsigned_back, signed_back);
}
