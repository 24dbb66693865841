//! Integration tests for Error types
//!
//! Tests error categories, Python exception names, display, and context.

use pyvalue_foundation::{Error, ErrorCategory, ErrorContext, ErrorKind, Kind, Value};

// =============================================================================
// Categories and Python Names
// =============================================================================

#[test]
fn category_and_python_name_table() {
    let cases: Vec<(Error, ErrorCategory, &str)> = vec![
        (
            Value::from("a").sub(&Value::Int(1)).unwrap_err(),
            ErrorCategory::TypeMismatch,
            "TypeError",
        ),
        (
            Value::from("x").to_float().unwrap_err(),
            ErrorCategory::Conversion,
            "ValueError",
        ),
        (
            Value::Float(1e300).to_int().unwrap_err(),
            ErrorCategory::Conversion,
            "OverflowError",
        ),
        (
            Value::Int(1).floor_div(&Value::Int(0)).unwrap_err(),
            ErrorCategory::Arithmetic,
            "ZeroDivisionError",
        ),
        (
            Value::new_list([]).remove_at(0).unwrap_err(),
            ErrorCategory::Bounds,
            "IndexError",
        ),
        (
            Value::new_dict::<&str>([])
                .get_item(&Value::from("k"))
                .unwrap_err(),
            ErrorCategory::Key,
            "KeyError",
        ),
        (Error::new(ErrorKind::Eof), ErrorCategory::Io, "EOFError"),
    ];
    for (err, category, name) in cases {
        assert_eq!(err.category(), category, "{err}");
        assert_eq!(err.python_name(), name, "{err}");
    }
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_names_operand_types() {
    let err = Value::new_list([]).add(&Value::Int(1)).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("list"));
    assert!(msg.contains("int"));
}

#[test]
fn display_of_bounds_error() {
    let err = Value::new_list([Value::None]).remove_at(4).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('4'));
    assert!(msg.contains('1'));
}

#[test]
fn display_of_missing_list_element() {
    let err = Value::new_list([]).remove(&Value::Int(3)).unwrap_err();
    assert_eq!(err.to_string(), "3 not in list");
}

#[test]
fn unhashable_reports_kind() {
    let err = Value::new_dict::<&str>([])
        .contains(&Value::new_list([]))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unhashable(Kind::List)));
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_renders_like_a_traceback() {
    let ctx = ErrorContext::new()
        .at("prog.py", 12)
        .with_frame("main")
        .with_frame("helper");
    let err = Value::Int(1)
        .div(&Value::Int(0))
        .unwrap_err()
        .with_context(ctx);

    let rendered = err.context.as_ref().unwrap().to_string();
    assert!(rendered.starts_with("File \"prog.py\", line 12, in helper"));
    assert!(rendered.contains("called from main"));
}

#[test]
fn io_errors_convert() {
    let err: Error = std::io::Error::other("disk full").into();
    assert_eq!(err.category(), ErrorCategory::Io);
    assert_eq!(err.python_name(), "OSError");
}
