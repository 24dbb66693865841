//! Integration tests for the container API
//!
//! Tests list, dict, and set operations through `Value`, including value
//! semantics of clones.

use pyvalue_foundation::{ErrorCategory, ErrorKind, Kind, Value};

fn ints(items: &[i64]) -> Value {
    Value::new_list(items.iter().copied().map(Value::Int))
}

// =============================================================================
// List
// =============================================================================

#[test]
fn list_append_and_index() {
    let mut list = Value::new_list([]);
    for i in 0..4 {
        list.append(Value::Int(i * i)).unwrap();
    }
    assert_eq!(list, ints(&[0, 1, 4, 9]));
    assert_eq!(list.get_item(&Value::Int(-2)).unwrap(), Value::Int(4));
}

#[test]
fn list_remove_at_negative() {
    let mut list = ints(&[1, 2, 3]);
    assert_eq!(list.remove_at(-3).unwrap(), Value::Int(1));
    assert!(list.remove_at(-3).is_err());
    assert_eq!(list, ints(&[2, 3]));
}

#[test]
fn sublist_negative_index_law() {
    let list = ints(&[5, 6, 7, 8]);
    let n = 4;
    assert_eq!(list.sublist(-1, n).unwrap(), list.sublist(n - 1, n).unwrap());
}

#[test]
fn sublist_errors_are_bounds_failures() {
    let list = ints(&[1, 2, 3]);
    for (start, end) in [(2, 1), (0, 4), (-4, 1)] {
        let err = list.sublist(start, end).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Bounds);
        assert_eq!(err.python_name(), "IndexError");
    }
    let err = list.sublist_step(0, 3, 0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ZeroStep));
}

#[test]
fn slice_matches_python() {
    let list = ints(&[0, 1, 2, 3, 4, 5]);
    assert_eq!(list.slice(Some(1), Some(-1), Some(2)).unwrap(), ints(&[1, 3]));
    assert_eq!(list.slice(None, Some(-4), Some(-1)).unwrap(), ints(&[5, 4, 3]));
    assert_eq!(list.slice(Some(10), Some(20), None).unwrap(), ints(&[]));
}

#[test]
fn list_contains_uses_structural_equality() {
    let list = Value::new_list([ints(&[1, 2]), Value::from("x")]);
    assert!(list.contains(&ints(&[1, 2])).unwrap());
    assert!(!list.contains(&ints(&[2, 1])).unwrap());
}

#[test]
fn list_clone_has_value_semantics() {
    let mut a = ints(&[1]);
    let b = a.clone();
    a.append(Value::Int(2)).unwrap();
    a.set_item(&Value::Int(0), Value::Int(100)).unwrap();
    assert_eq!(b, ints(&[1]));
    assert_eq!(a, ints(&[100, 2]));
}

#[test]
fn nested_list_is_copied_on_write() {
    let inner = ints(&[1]);
    let mut outer = Value::new_list([inner.clone()]);
    let mut taken = outer.get_item(&Value::Int(0)).unwrap();
    taken.append(Value::Int(2)).unwrap();
    assert_eq!(outer.get_item(&Value::Int(0)).unwrap(), inner);

    outer.set_item(&Value::Int(0), taken).unwrap();
    assert_eq!(outer.get_item(&Value::Int(0)).unwrap(), ints(&[1, 2]));
}

// =============================================================================
// Dict
// =============================================================================

#[test]
fn dict_set_get_remove() {
    let mut dict = Value::new_dict::<&str>([]);
    dict.set(&Value::from("x"), Value::Int(1)).unwrap();
    dict.set(&Value::Float(2.5), Value::Int(2)).unwrap();
    dict.set(&Value::None, Value::Int(3)).unwrap();

    assert_eq!(dict.get(&Value::from("2.5")).unwrap(), Value::Int(2));
    assert_eq!(dict.get(&Value::from("None")).unwrap(), Value::Int(3));
    assert_eq!(dict.len().unwrap(), 3);

    assert_eq!(dict.remove_key(&Value::from("x")).unwrap(), Value::Int(1));
    let err = dict.remove_key(&Value::from("x")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Key);
    assert_eq!(err.python_name(), "KeyError");
}

#[test]
fn dict_rejects_container_keys() {
    let mut dict = Value::new_dict::<&str>([]);
    let err = dict.set(&Value::new_set([]), Value::None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhashable(Kind::Set)));
    assert_eq!(err.python_name(), "TypeError");
}

#[test]
fn dict_views_snapshot() {
    let mut dict = Value::new_dict([("one", Value::Int(1))]);
    let items = dict.items().unwrap();
    dict.set(&Value::from("two"), Value::Int(2)).unwrap();

    assert_eq!(items.len().unwrap(), 1);
    assert_eq!(dict.keys().unwrap().len().unwrap(), 2);
    assert_eq!(dict.values().unwrap(), ints(&[1, 2]));
}

#[test]
fn dict_operations_reject_other_kinds() {
    let mut list = ints(&[]);
    assert!(list.set(&Value::from("k"), Value::None).is_err());
    assert!(list.keys().is_err());
    assert!(Value::Int(1).get(&Value::from("k")).is_err());
}

// =============================================================================
// Set
// =============================================================================

#[test]
fn set_add_remove_contains() {
    let mut set = Value::new_set([]);
    set.add_element(Value::from("a")).unwrap();
    set.add_element(Value::from("a")).unwrap();
    set.add_element(ints(&[1])).unwrap();

    assert_eq!(set.len().unwrap(), 2);
    assert!(set.contains(&ints(&[1])).unwrap());

    set.remove(&Value::from("a")).unwrap();
    let err = set.remove(&Value::from("a")).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ElementNotFound {
            container: Kind::Set,
            ..
        }
    ));
}

#[test]
fn set_distinguishes_int_and_float() {
    let set = Value::new_set([Value::Int(1), Value::Float(1.0), Value::Bool(true)]);
    assert_eq!(set.len().unwrap(), 3);
}

#[test]
fn set_algebra_returns_new_sets() {
    let a = Value::new_set((1..=4).map(Value::Int));
    let b = Value::new_set((3..=6).map(Value::Int));
    assert_eq!(a.intersection(&b).unwrap().to_repr(), "{3, 4}");
    assert_eq!(a.difference(&b).unwrap().to_repr(), "{1, 2}");
    assert_eq!(a.union(&b).unwrap().len().unwrap(), 6);
    assert_eq!(a.len().unwrap(), 4);
}
