use yini::{to_string, yini, Document, Value};

#[test]
fn test_macro_builds_scalars() {
    assert_eq!(yini!(true), Value::Bool(true));
    assert_eq!(yini!(false), Value::Bool(false));
    assert_eq!(yini!(7), Value::Int(7));
    assert_eq!(yini!(2.5), Value::Float(2.5));
    assert_eq!(yini!("text"), Value::String("text".to_string()));
}

#[test]
fn test_macro_builds_arrays() {
    assert_eq!(yini!([]), Value::Array(vec![]));

    let mixed = yini!([1, "two", true, 4.0]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::Int(1),
            Value::String("two".to_string()),
            Value::Bool(true),
            Value::Float(4.0),
        ])
    );
}

#[test]
fn test_macro_nested_arrays() {
    let nested = yini!([[1, 2], []]);
    match nested {
        Value::Array(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0], Value::Array(vec![Value::Int(1), Value::Int(2)]));
            assert_eq!(items[1], Value::Array(vec![]));
        }
        _ => panic!("Expected array"),
    }
}

#[test]
fn test_macro_values_serialize() {
    let mut doc = Document::new();
    doc.set("ports", yini!([8080, 8443]));
    doc.set("verbose", yini!(true));

    assert_eq!(to_string(&doc), "ports = [8080, 8443]\nverbose = true\n");
}

#[test]
fn test_macro_accepts_expressions() {
    let limit = 3 * 7;
    assert_eq!(yini!(limit), Value::Int(21));

    let name = String::from("dyn");
    assert_eq!(yini!(name), Value::String("dyn".to_string()));
}
