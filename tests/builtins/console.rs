//! Integration tests for console I/O
//!
//! Drives `Console` with in-memory buffers the way generated `main`
//! functions drive stdin and stdout.

use std::io::Cursor;

use pyvalue_builtins::{Console, RuntimeConfig, format_line, int_of};
use pyvalue_foundation::{ErrorKind, Value};

#[test]
fn echo_program() {
    // name = input("name: ")
    // n = int(input())
    // print("hi", name, n * 2)
    let mut console = Console::new(Vec::new(), Cursor::new(b"ada\n21\n".to_vec()));
    let name = console.input(Some(&Value::from("name: "))).unwrap();
    let n = int_of(&console.input(None).unwrap()).unwrap();
    let doubled = n.mul(&Value::Int(2)).unwrap();
    console.print(&[Value::from("hi"), name, doubled]).unwrap();

    let (out, _) = console.into_parts();
    assert_eq!(String::from_utf8(out).unwrap(), "name: hi ada 42\n");
}

#[test]
fn print_renders_containers() {
    let mut console = Console::new(Vec::new(), Cursor::new(Vec::new()));
    let values = [
        Value::new_list([Value::Int(1), Value::from("a")]),
        Value::new_dict([("k", Value::None)]),
        Value::Bool(true),
    ];
    console.print(&values).unwrap();

    let (out, _) = console.into_parts();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "[1, a] {'k': None} True\n");
    assert_eq!(text, format_line(&values));
}

#[test]
fn reading_past_the_end_fails() {
    let mut console = Console::with_config(
        Vec::new(),
        Cursor::new(b"only\n".to_vec()),
        RuntimeConfig::batch(),
    );
    assert_eq!(console.input(None).unwrap(), Value::from("only"));
    assert!(matches!(console.input(None).unwrap_err().kind, ErrorKind::Eof));
}

#[test]
fn interactive_config_flushes() {
    let console = Console::with_config(
        Vec::new(),
        Cursor::new(Vec::new()),
        RuntimeConfig::interactive(),
    );
    assert!(console.config().flush_each_print);
}
