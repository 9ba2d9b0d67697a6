/// One classified input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Str(String),
}

/// Classify a trimmed, non-empty line.
///
/// The integer parse runs first, then the float parse, then the string
/// fallback: "3.0" is a float, "abc" is a string. A whole number too large
/// for `i64` still parses as `f64` and lands in the float category. Parse
/// failures are control flow here, never errors.
pub fn classify(line: &str) -> Value {
    if let Ok(i) = line.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = line.parse::<f64>() {
        return Value::Float(f);
    }
    Value::Str(line.to_string())
}
