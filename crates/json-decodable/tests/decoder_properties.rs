mod common;

use common::Person;
use json_decodable::{from_json, DecodeError, Decoder, JsonKind, Map, Value};
use proptest::prelude::*;
use serde_json::json;

fn key() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

fn path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key(), 0..4)
}

fn non_integer() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        "[ -~]{0,16}".prop_map(Value::String),
        Just(json!([1, 2])),
        Just(json!({"nested": true})),
        Just(json!(0.5)),
    ]
}

fn other_fields() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(key(), any::<i64>(), 0..6).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect()
    })
}

proptest! {
    #[test]
    fn missing_key_reports_the_resolved_path(
        prefix in path(),
        missing in key(),
        fields in other_fields(),
    ) {
        let mut json = fields;
        json.remove(&missing);
        let decoder = Decoder::with_path(&json, prefix.clone());
        let mut expected = prefix;
        expected.push(missing.clone());
        prop_assert_eq!(
            decoder.lookup::<i64>(&missing).unwrap_err(),
            DecodeError::MissingKey(expected.join("."))
        );
        prop_assert_eq!(decoder.optional::<i64>(&missing).unwrap(), None);
    }

    #[test]
    fn wrong_type_is_never_suppressed(
        prefix in path(),
        field in key(),
        value in non_integer(),
    ) {
        let actual = JsonKind::of(&value);
        let mut json = Map::new();
        json.insert(field.clone(), value);
        let decoder = Decoder::with_path(&json, prefix);
        let expected = DecodeError::WrongType {
            key: decoder.resolved_path(&field),
            expected: "i64",
            actual,
        };
        prop_assert_eq!(decoder.lookup::<i64>(&field).unwrap_err(), expected.clone());
        prop_assert_eq!(decoder.optional::<i64>(&field).unwrap_err(), expected);
    }

    #[test]
    fn well_formed_people_round_trip(
        first in "[A-Za-z]{1,10}",
        second in "[A-Za-z]{1,10}",
        age in any::<i64>(),
        email in prop::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
    ) {
        let mut value = json!({
            "name": {"first": first, "second": second},
            "age": age,
        });
        if let Some(email) = &email {
            value["email"] = json!(email);
        }
        let json = value.as_object().cloned().unwrap();
        let person: Person = from_json(&json).unwrap();
        prop_assert_eq!(person.name.first, first);
        prop_assert_eq!(person.name.second, second);
        prop_assert_eq!(person.age, age);
        prop_assert_eq!(person.email, email);
    }

    #[test]
    fn arrays_keep_length_and_order(ages in prop::collection::vec(any::<i64>(), 0..8)) {
        let people: Vec<Value> = ages
            .iter()
            .enumerate()
            .map(|(i, age)| json!({
                "name": {"first": format!("p{i}"), "second": "x"},
                "age": age,
            }))
            .collect();
        let json = json!({"people": people}).as_object().cloned().unwrap();
        let decoded: Vec<Person> = Decoder::new(&json).lookup_array("people").unwrap();
        prop_assert_eq!(decoded.len(), ages.len());
        for (i, (person, age)) in decoded.iter().zip(&ages).enumerate() {
            prop_assert_eq!(&person.name.first, &format!("p{i}"));
            prop_assert_eq!(person.age, *age);
        }
    }
}
