use super::*;
use oinf_value::ObjectValue;
use pretty_assertions::assert_eq;

// Kind → message agreement

#[test]
fn test_message_matches_kind_display() {
    let err = invalid_arg_type("path", "string", Value::from(1));
    assert_eq!(err.message, err.kind.to_string());
    assert_eq!(err.to_string(), err.message);
}

// Arguments

#[test]
fn test_invalid_arg_value_default_reason() {
    let err = invalid_arg_value("mode", Value::string("rwx"), None);
    assert_eq!(err.code(), ErrorCode::InvalidArgValue);
    assert_eq!(err.message, "The ‘mode’ argument is invalid. Received ‘rwx’");
}

#[test]
fn test_invalid_arg_value_custom_reason() {
    let err = invalid_arg_value("port", Value::from(-1), Some("must be >= 0"));
    assert_eq!(err.message, "The ‘port’ argument must be >= 0. Received ‘-1’");
}

#[test]
fn test_invalid_arg_value_strips_container_delimiters() {
    let value = Value::object(ObjectValue::plain().with_property("a", Value::from(1)));
    let err = invalid_arg_value("opts", value, None);
    assert_eq!(err.message, "The ‘opts’ argument is invalid. Received ‘a: 1’");
}

#[test]
fn test_invalid_arg_value_escapes_string_dump() {
    let err = invalid_arg_value("sep", Value::string("\r\n"), None);
    assert_eq!(err.message, "The ‘sep’ argument is invalid. Received ‘\\r\\n’");
    assert!(!err.message.contains('\n'));
}

#[test]
fn test_invalid_arg_value_truncates_at_128() {
    let err = invalid_arg_value("data", Value::string("y".repeat(200)), None);
    let expected = format!(
        "The ‘data’ argument is invalid. Received ‘{}…’",
        "y".repeat(128)
    );
    assert_eq!(err.message, expected);
}

#[test]
fn test_invalid_arg_type_message() {
    let err = invalid_arg_type("name", "string", Value::from(42));
    assert_eq!(err.code(), ErrorCode::InvalidArgType);
    assert_eq!(
        err.message,
        "The ‘name’ argument must be of type ‘string’. Received type ‘number’ (‘42’)"
    );
    assert_eq!(
        err.kind,
        ValidationErrorKind::InvalidArgType {
            arg_name: "name".to_string(),
            expected: ExpectedSet::from("string"),
            actual: Value::from(42),
        }
    );
}

#[test]
fn test_invalid_arg_type_with_instances() {
    let err = invalid_arg_type("buf", ["string", "Buffer", "Uint8Array"], Value::Null);
    assert_eq!(
        err.message,
        "The ‘buf’ argument must be of type ‘string’ or an instance of ‘Buffer’ or ‘Uint8Array’. Received ‘null’"
    );
}

#[test]
fn test_invalid_args_number_message() {
    let err = invalid_args_number("add", 2, 3);
    assert_eq!(err.code(), ErrorCode::InvalidArgsNumber);
    assert_eq!(
        err.message,
        "The number of arguments expected by function ‘add’ is 2, but 3 were passed"
    );
}

#[test]
fn test_missing_args_single() {
    let err = missing_args(["name"]);
    assert_eq!(
        err.map(|e| e.message),
        Ok("The ‘name’ argument must be specified".to_string())
    );
}

#[test]
fn test_missing_args_pair() {
    let err = missing_args(["a", "b"]);
    assert_eq!(
        err.map(|e| e.message),
        Ok("The ‘a’ and ‘b’ arguments must be specified".to_string())
    );
}

#[test]
fn test_missing_args_many_with_alternatives() {
    let err = missing_args([
        MissingArg::from("a"),
        MissingArg::any_of(["b", "c"]),
        MissingArg::from("d"),
    ]);
    assert_eq!(
        err.map(|e| e.message),
        Ok("The ‘a’, ‘b’ or ‘c’, and ‘d’ arguments must be specified".to_string())
    );
}

#[test]
fn test_missing_args_empty_is_invariant_violation() {
    let err = missing_args(Vec::<MissingArg>::new());
    assert_eq!(err, Err(InvariantViolation::NoMissingArgs));
}

// Properties / options

#[test]
fn test_invalid_property_value_message() {
    let err = invalid_property_value("options", "encoding", Value::string("utf9"));
    assert_eq!(err.code(), ErrorCode::InvalidPropertyValue);
    assert_eq!(
        err.message,
        "Invalid value for property ‘encoding’ of object ‘options’. Received ‘utf9’"
    );
}

#[test]
fn test_invalid_property_type_message() {
    let err = invalid_property_type("options", "signal", "AbortSignal", Value::Bool(true));
    assert_eq!(err.code(), ErrorCode::InvalidPropertyType);
    assert_eq!(
        err.message,
        "The ‘signal’ property of object ‘options’ must be an instance of ‘AbortSignal’. Received type ‘boolean’ (‘true’)"
    );
}

#[test]
fn test_missing_option_message() {
    let err = missing_option("root");
    assert_eq!(err.code(), ErrorCode::MissingOption);
    assert_eq!(err.message, "‘root’ is a missing option that is required");
}

// Return values

#[test]
fn test_invalid_return_property_value_uses_string_coercion() {
    let err = invalid_return_property_value("url", "resolve", "href", Value::plain_object());
    assert_eq!(
        err.message,
        "Expected a valid ‘url’ to be returned for the ‘href’ from the ‘resolve’ function, but got ‘[object Object]’"
    );
}

#[test]
fn test_invalid_return_property_type_reports_instance() {
    let err = invalid_return_property_type("string", "load", "source", Value::from(5));
    assert_eq!(
        err.message,
        "Expected ‘string’ to be returned for the ‘source’ from the ‘load’ function, but got ‘instance of Number’"
    );
}

#[test]
fn test_invalid_return_property_type_reports_type_for_falsy() {
    let err = invalid_return_property_type("string", "load", "source", Value::from(0));
    assert!(err.message.ends_with("but got ‘type number’"));
    let err = invalid_return_property_type("string", "load", "source", Value::Undefined);
    assert!(err.message.ends_with("but got ‘type undefined’"));
}

#[test]
fn test_invalid_return_value_message() {
    let err = invalid_return_value("Promise", "load", Value::Undefined);
    assert_eq!(err.code(), ErrorCode::InvalidReturnValue);
    assert_eq!(
        err.message,
        "Expected a valid ‘Promise’ to be returned from the ‘load’ function, but got ‘undefined’"
    );
}

#[test]
fn test_invalid_return_type_message() {
    let value = Value::object(ObjectValue::instance_of("Map"));
    let err = invalid_return_type("Promise", "load", value);
    assert_eq!(err.code(), ErrorCode::InvalidReturnType);
    assert_eq!(
        err.message,
        "Expected ‘Promise’ to be returned from the ‘load’ function but got ‘instance of Map’"
    );
}

// Generic

#[test]
fn test_unhandled_error_messages() {
    assert_eq!(unhandled_error(None).message, "Unhandled error.");
    assert_eq!(
        unhandled_error(Some("boom")).message,
        "Unhandled error. (boom)"
    );
    assert_eq!(unhandled_error(None).code(), ErrorCode::UnhandledError);
}

// Diagnostic surface

#[test]
fn test_diagnostic_trait_exposes_code_name_message() {
    let err = missing_option("root");
    let diag: &dyn Diagnostic = &err;
    assert_eq!(diag.code(), ErrorCode::MissingOption);
    assert_eq!(diag.name(), "MissingOptionError");
    assert_eq!(diag.message(), err.message);
}

#[test]
fn test_every_kind_has_distinct_code() {
    let errors = [
        invalid_arg_value("a", Value::Null, None),
        invalid_arg_type("a", "string", Value::Null),
        invalid_args_number("f", 1, 2),
        invalid_property_value("o", "p", Value::Null),
        invalid_property_type("o", "p", "string", Value::Null),
        missing_option("o"),
        invalid_return_property_value("i", "n", "p", Value::Null),
        invalid_return_property_type("i", "n", "p", Value::Null),
        invalid_return_value("i", "n", Value::Null),
        invalid_return_type("i", "n", Value::Null),
        unhandled_error(None),
    ];
    let codes: std::collections::HashSet<_> = errors.iter().map(Diagnostic::code).collect();
    assert_eq!(codes.len(), errors.len());
}
