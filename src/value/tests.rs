#![cfg(test)]

use super::*;
use crate::MapSet;

#[test]
fn test_conversions() {
    assert_eq!(Value::from(7), Value::Int(7));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from('x'), Value::Char('x'));
    assert_eq!(Value::from("seven"), Value::Str("seven".into()));
    assert_eq!(Value::from(String::from("seven")), Value::Str("seven".into()));

    let int: Result<i64, _> = Value::from(7).try_into();
    assert_eq!(
        int.expect("An Int should convert back to i64."),
        7,
        "The round-tripped payload should be unchanged."
    );

    let wrong: Result<i64, _> = Value::from(true).try_into();
    assert!(
        wrong.is_err(),
        "Extracting a payload through the wrong tag should err."
    );
}

#[test]
fn test_predicates() {
    assert!(Value::from(7).is_int());
    assert!(Value::from(true).is_bool());
    assert!(Value::from('x').is_char());
    assert!(Value::from("x").is_str());
    assert!(
        !Value::from("7").is_int(),
        "A string payload should not report as an integer."
    );
}

#[test]
fn test_display() {
    assert_eq!(Value::from(5).to_string(), "5");
    assert_eq!(Value::from(false).to_string(), "false");
    assert_eq!(Value::from('e').to_string(), "e");
    assert_eq!(Value::from("five").to_string(), "five");
}

#[test]
fn test_heterogeneous_set() {
    let mut set = MapSet::new();

    assert!(set.insert(Value::from(1)));
    assert!(
        set.insert(Value::from("1")),
        "A string rendering of an existing integer should be a distinct element."
    );
    assert!(set.insert(Value::from('1')));
    assert!(
        !set.insert(Value::from(1)),
        "An equal tagged value should be a duplicate."
    );

    assert_eq!(set.len(), 3);
    assert!(set.contains(&Value::Int(1)));
    assert!(set.contains(&Value::Str("1".into())));
    assert!(set.remove(&Value::Char('1')));
    assert_eq!(set.len(), 2);
}
