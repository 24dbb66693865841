//! Integration tests for operators
//!
//! Tests arithmetic promotion, division rules, comparisons, and the
//! `std::ops` impls on `&Value`.

use pyvalue_foundation::{ErrorCategory, ErrorKind, Value, ZeroDivision};

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn int_arithmetic_stays_int() {
    assert_eq!(Value::Int(7).sub(&Value::Int(10)).unwrap(), Value::Int(-3));
    assert_eq!(Value::Int(6).mul(&Value::Int(7)).unwrap(), Value::Int(42));
}

#[test]
fn float_operand_promotes() {
    assert_eq!(Value::Int(1).add(&Value::Float(0.5)).unwrap(), Value::Float(1.5));
    assert_eq!(Value::Float(2.0).mul(&Value::Int(3)).unwrap(), Value::Float(6.0));
}

#[test]
fn bool_counts_as_int() {
    assert_eq!(Value::Bool(true).add(&Value::Int(1)).unwrap(), Value::Int(2));
    assert_eq!(Value::Bool(true).add(&Value::Bool(true)).unwrap(), Value::Int(2));
}

#[test]
fn string_concatenation_renders_other_side() {
    assert_eq!(Value::from("n=").add(&Value::Int(4)).unwrap(), Value::from("n=4"));
    assert_eq!(Value::Float(1.5).add(&Value::from("!")).unwrap(), Value::from("1.5!"));
    assert_eq!(Value::from("x").add(&Value::None).unwrap(), Value::from("xNone"));
}

#[test]
fn string_repetition_edge_cases() {
    assert_eq!(Value::Int(2).mul(&Value::from("ha")).unwrap(), Value::from("haha"));
    assert_eq!(Value::from("ha").mul(&Value::Int(0)).unwrap(), Value::from(""));
    assert_eq!(Value::from("ha").mul(&Value::Int(-4)).unwrap(), Value::from(""));
}

#[test]
fn list_repetition() {
    let list = Value::new_list([Value::Int(0)]);
    assert_eq!(
        list.mul(&Value::Int(3)).unwrap(),
        Value::new_list([Value::Int(0), Value::Int(0), Value::Int(0)])
    );
}

#[test]
fn incompatible_operands_are_type_errors() {
    let err = Value::new_list([]).sub(&Value::Int(1)).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeMismatch);
    assert!(Value::None.add(&Value::Int(1)).is_err());
    assert!(Value::new_set([]).add(&Value::new_set([])).is_err());
}

#[test]
fn integer_overflow_is_reported() {
    let err = Value::Int(i64::MIN).neg().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IntegerOverflow { .. }));
    assert!(Value::Int(i64::MAX).mul(&Value::Int(2)).is_err());
}

// =============================================================================
// Division
// =============================================================================

#[test]
fn true_division_is_float() {
    assert_eq!(Value::Int(7).div(&Value::Int(2)).unwrap(), Value::Float(3.5));
    assert_eq!(Value::Int(4).div(&Value::Int(2)).unwrap(), Value::Float(2.0));
}

#[test]
fn division_by_zero_never_yields_infinity() {
    for divisor in [Value::Int(0), Value::Float(0.0), Value::Float(-0.0), Value::Bool(false)] {
        let err = Value::Int(5).div(&divisor).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::DivisionByZero(ZeroDivision::Division)));
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
    }
    let err = Value::Int(5).rem(&Value::Int(0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DivisionByZero(ZeroDivision::Modulo)));
    let err = Value::Int(5).floor_div(&Value::Int(0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DivisionByZero(ZeroDivision::FloorDivision)));
}

#[test]
fn floor_division_rounds_down() {
    assert_eq!(Value::Int(7).floor_div(&Value::Int(2)).unwrap(), Value::Int(3));
    assert_eq!(Value::Int(-7).floor_div(&Value::Int(2)).unwrap(), Value::Int(-4));
    assert_eq!(Value::Int(7).floor_div(&Value::Int(-2)).unwrap(), Value::Int(-4));
    assert_eq!(Value::Float(-7.0).floor_div(&Value::Int(2)).unwrap(), Value::Float(-4.0));
}

#[test]
fn modulo_takes_divisor_sign() {
    assert_eq!(Value::Int(-7).rem(&Value::Int(3)).unwrap(), Value::Int(2));
    assert_eq!(Value::Int(7).rem(&Value::Int(-3)).unwrap(), Value::Int(-2));
    assert_eq!(Value::Int(6).rem(&Value::Int(3)).unwrap(), Value::Int(0));
}

#[test]
fn power_is_float() {
    assert_eq!(Value::Int(2).pow(&Value::Int(-1)).unwrap(), Value::Float(0.5));
    assert!(Value::from("2").pow(&Value::Int(2)).is_err());
}

// =============================================================================
// Unary, Logical, Comparison
// =============================================================================

#[test]
fn unary_operators() {
    assert_eq!(Value::Float(1.5).neg().unwrap(), Value::Float(-1.5));
    assert_eq!(Value::Int(3).pos().unwrap(), Value::Int(3));
    assert!(Value::from("a").neg().is_err());
    assert_eq!(Value::new_list([]).logical_not(), Value::Bool(true));
}

#[test]
fn logical_operators_use_truthiness() {
    assert_eq!(Value::Int(1).logical_and(&Value::from("")), Value::Bool(false));
    assert_eq!(Value::None.logical_or(&Value::Float(0.1)), Value::Bool(true));
}

#[test]
fn comparison_operators_return_bools() {
    let one = Value::Int(1);
    let half = Value::Float(1.5);
    assert_eq!(one.less_than(&half), Value::Bool(true));
    assert_eq!(one.less_equal(&one), Value::Bool(true));
    assert_eq!(half.greater_than(&one), Value::Bool(true));
    assert_eq!(one.greater_equal(&half), Value::Bool(false));
    assert_eq!(one.equals(&Value::Float(1.0)), Value::Bool(false));
    assert_eq!(one.not_equals(&Value::Float(1.0)), Value::Bool(true));
}

#[test]
fn operator_impls_on_references() {
    let a = Value::Int(9);
    let b = Value::Int(4);
    assert_eq!((&a + &b).unwrap(), Value::Int(13));
    assert_eq!((&a - &b).unwrap(), Value::Int(5));
    assert_eq!((&a * &b).unwrap(), Value::Int(36));
    assert_eq!((&a / &b).unwrap(), Value::Float(2.25));
    assert_eq!((&a % &b).unwrap(), Value::Int(1));
    assert_eq!((-&a).unwrap(), Value::Int(-9));
    assert_eq!(!&a, Value::Bool(false));
}

#[test]
fn operands_are_not_mutated() {
    let a = Value::new_list([Value::Int(1)]);
    let b = Value::new_list([Value::Int(2)]);
    let _ = a.add(&b).unwrap();
    assert_eq!(a.len().unwrap(), 1);
    assert_eq!(b.len().unwrap(), 1);
}
