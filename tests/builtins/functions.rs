//! Integration tests for builtin functions
//!
//! Tests `len`, `range`, `sum`, `min`/`max`, `sorted`, conversions, and the
//! `set`/`list` constructors as a transpiled program would call them.

use pyvalue_builtins::{
    abs, bool_of, float_of, int_of, len, list_from, max, min, range, range_from, range_step,
    set_from, sorted, str_of, sum, sum_with, type_of,
};
use pyvalue_foundation::{ErrorKind, Value};

fn ints(items: &[i64]) -> Value {
    Value::new_list(items.iter().copied().map(Value::Int))
}

#[test]
fn set_of_list_has_unique_size() {
    let set = set_from(&ints(&[1, 1, 2])).unwrap();
    assert_eq!(len(&set).unwrap(), Value::Int(2));
}

#[test]
fn set_of_dict_uses_keys() {
    let dict = Value::new_dict([("a", Value::Int(1)), ("b", Value::Int(1))]);
    assert_eq!(
        set_from(&dict).unwrap(),
        Value::new_set([Value::from("a"), Value::from("b")])
    );
}

#[test]
fn range_feeds_sum() {
    let total = sum(&range(&Value::Int(101)).unwrap()).unwrap();
    assert_eq!(total, Value::Int(5050));
}

#[test]
fn range_with_negative_step() {
    let values = range_step(&Value::Int(5), &Value::Int(-1), &Value::Int(-2)).unwrap();
    assert_eq!(values, ints(&[5, 3, 1]));
    assert_eq!(range_from(&Value::Int(5), &Value::Int(5)).unwrap(), ints(&[]));
}

#[test]
fn range_zero_step_is_value_error() {
    let err = range_step(&Value::Int(0), &Value::Int(1), &Value::Int(0)).unwrap_err();
    assert_eq!(err.python_name(), "ValueError");
}

#[test]
fn sum_with_string_start_concatenates() {
    let words = Value::new_list([Value::from("a"), Value::Int(1)]);
    assert_eq!(sum_with(&words, &Value::from(">")).unwrap(), Value::from(">a1"));
}

#[test]
fn min_max_over_sets() {
    let set = Value::new_set([Value::Int(4), Value::Float(-2.0), Value::Int(9)]);
    assert_eq!(min(&set).unwrap(), Value::Float(-2.0));
    assert_eq!(max(&set).unwrap(), Value::Int(9));
    assert!(matches!(
        max(&Value::new_set([])).unwrap_err().kind,
        ErrorKind::EmptySequence("max")
    ));
}

#[test]
fn sorted_leaves_input_untouched() {
    let list = ints(&[3, 1, 2]);
    assert_eq!(sorted(&list).unwrap(), ints(&[1, 2, 3]));
    assert_eq!(list, ints(&[3, 1, 2]));
}

#[test]
fn list_of_string_splits_chars() {
    assert_eq!(len(&list_from(&Value::from("héllo")).unwrap()).unwrap(), Value::Int(5));
}

#[test]
fn conversion_builtins_compose() {
    // int(str(float("2.75")) [0]) style chains
    let f = float_of(&Value::from("2.75")).unwrap();
    assert_eq!(str_of(&f), Value::from("2.75"));
    assert_eq!(int_of(&f).unwrap(), Value::Int(2));
    assert_eq!(bool_of(&int_of(&Value::from("0")).unwrap()), Value::Bool(false));
    assert_eq!(type_of(&f), Value::from("float"));
    assert_eq!(abs(&Value::Int(-3)).unwrap(), Value::Int(3));
}
