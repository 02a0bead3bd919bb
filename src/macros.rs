#[macro_export]
macro_rules! yini {
    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::yini!($elem)),*])
    };

    // Fallback for any expression with a Value conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_yini_macro_primitives() {
        assert_eq!(yini!(true), Value::Bool(true));
        assert_eq!(yini!(false), Value::Bool(false));
        assert_eq!(yini!(42), Value::Int(42));
        assert_eq!(yini!(3.5), Value::Float(3.5));
        assert_eq!(yini!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_yini_macro_arrays() {
        assert_eq!(yini!([]), Value::Array(vec![]));

        let arr = yini!([1, 2, 3]);
        match arr {
            Value::Array(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Value::Int(1));
                assert_eq!(items[2], Value::Int(3));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_yini_macro_nested_arrays() {
        let arr = yini!([[1, 2], [3]]);
        match arr {
            Value::Array(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0], Value::Array(vec![Value::Int(1), Value::Int(2)]));
            }
            _ => panic!("Expected array"),
        }
    }
}
