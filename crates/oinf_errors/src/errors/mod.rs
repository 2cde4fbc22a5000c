//! Validation error types.
//!
//! # Structured Error Kinds
//!
//! [`ValidationErrorKind`] carries the inputs of each error as structured
//! data. Factory functions (e.g. [`invalid_arg_type()`]) are the public API:
//! they build the kind and compute the message once, from the kind's
//! `Display` impl, so `err.message` and `err.kind.to_string()` always agree.
//!
//! Every kind maps to exactly one [`ErrorCode`]; the [`Diagnostic`] trait
//! exposes code, name and message uniformly.

use std::fmt;

use oinf_value::{inspect, InspectOptions, Value};
use thiserror::Error;
use tracing::debug;

use crate::expected::ExpectedSet;
use crate::render::render;
use crate::text::{curly_quote, ellipsify, join_list, VALUE_DUMP_MAX_LEN};
use crate::{ErrorCode, InvariantViolation};

/// Common surface of every error this crate produces.
pub trait Diagnostic: std::error::Error {
    /// Stable machine-readable code.
    fn code(&self) -> ErrorCode;

    /// Class-style error name, e.g. `InvalidArgTypeError`.
    fn name(&self) -> &'static str {
        self.code().error_name()
    }

    /// Human-readable message.
    fn message(&self) -> &str;
}

/// One entry of a missing-arguments error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissingArg {
    /// A single argument name.
    Name(String),
    /// Alternatives, any one of which would have satisfied the call.
    AnyOf(Vec<String>),
}

impl MissingArg {
    pub fn any_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MissingArg::AnyOf(names.into_iter().map(Into::into).collect())
    }

    /// `‘a’` for a name, `‘a’ or ‘b’` for alternatives.
    fn render(&self) -> String {
        match self {
            MissingArg::Name(name) => curly_quote(name),
            MissingArg::AnyOf(names) => names
                .iter()
                .map(|name| curly_quote(name))
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }
}

impl From<&str> for MissingArg {
    fn from(name: &str) -> Self {
        MissingArg::Name(name.to_string())
    }
}

impl From<String> for MissingArg {
    fn from(name: String) -> Self {
        MissingArg::Name(name)
    }
}

/// Typed error category.
///
/// Each variant keeps the values its message was built from, so callers can
/// inspect them without parsing the message.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationErrorKind {
    // Arguments
    InvalidArgValue {
        name: String,
        value: Value,
        reason: String,
    },
    InvalidArgType {
        arg_name: String,
        expected: ExpectedSet,
        actual: Value,
    },
    InvalidArgsNumber {
        func_name: String,
        expected: usize,
        actual: usize,
    },
    MissingArgs {
        args: Vec<MissingArg>,
    },

    // Properties / options
    InvalidPropertyValue {
        obj_name: String,
        prop_name: String,
        value: Value,
    },
    InvalidPropertyType {
        obj_name: String,
        prop_name: String,
        expected: ExpectedSet,
        actual: Value,
    },
    MissingOption {
        opt_name: String,
    },

    // Return values of function options
    InvalidReturnPropertyValue {
        input: String,
        name: String,
        prop: String,
        value: Value,
    },
    InvalidReturnPropertyType {
        input: String,
        name: String,
        prop: String,
        value: Value,
    },
    InvalidReturnValue {
        input: String,
        name: String,
        value: Value,
    },
    InvalidReturnType {
        input: String,
        name: String,
        value: Value,
    },

    // Generic
    UnhandledError {
        err: Option<String>,
    },
}

impl ValidationErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgValue { .. } => ErrorCode::InvalidArgValue,
            Self::InvalidArgType { .. } => ErrorCode::InvalidArgType,
            Self::InvalidArgsNumber { .. } => ErrorCode::InvalidArgsNumber,
            Self::MissingArgs { .. } => ErrorCode::MissingArgs,
            Self::InvalidPropertyValue { .. } => ErrorCode::InvalidPropertyValue,
            Self::InvalidPropertyType { .. } => ErrorCode::InvalidPropertyType,
            Self::MissingOption { .. } => ErrorCode::MissingOption,
            Self::InvalidReturnPropertyValue { .. } => ErrorCode::InvalidReturnPropertyValue,
            Self::InvalidReturnPropertyType { .. } => ErrorCode::InvalidReturnPropertyType,
            Self::InvalidReturnValue { .. } => ErrorCode::InvalidReturnValue,
            Self::InvalidReturnType { .. } => ErrorCode::InvalidReturnType,
            Self::UnhandledError { .. } => ErrorCode::UnhandledError,
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Arguments
            Self::InvalidArgValue {
                name,
                value,
                reason,
            } => write!(
                f,
                "The {} argument {reason}. Received {}",
                curly_quote(name),
                curly_quote(&value_dump(value))
            ),
            Self::InvalidArgType {
                arg_name,
                expected,
                actual,
            } => write!(
                f,
                "The {} argument must be {}",
                curly_quote(arg_name),
                render(expected, actual)
            ),
            Self::InvalidArgsNumber {
                func_name,
                expected,
                actual,
            } => write!(
                f,
                "The number of arguments expected by function {} is {expected}, but {actual} were passed",
                curly_quote(func_name)
            ),
            Self::MissingArgs { args } => {
                let rendered: Vec<String> = args.iter().map(MissingArg::render).collect();
                let noun = if rendered.len() == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(
                    f,
                    "The {} {noun} must be specified",
                    join_list(&rendered, "and")
                )
            }

            // Properties / options
            Self::InvalidPropertyValue {
                obj_name,
                prop_name,
                value,
            } => write!(
                f,
                "Invalid value for property {} of object {}. Received {}",
                curly_quote(prop_name),
                curly_quote(obj_name),
                curly_quote(&value_dump(value))
            ),
            Self::InvalidPropertyType {
                obj_name,
                prop_name,
                expected,
                actual,
            } => write!(
                f,
                "The {} property of object {} must be {}",
                curly_quote(prop_name),
                curly_quote(obj_name),
                render(expected, actual)
            ),
            Self::MissingOption { opt_name } => {
                write!(f, "{} is a missing option that is required", curly_quote(opt_name))
            }

            // Return values
            Self::InvalidReturnPropertyValue {
                input,
                name,
                prop,
                value,
            } => write!(
                f,
                "Expected a valid {} to be returned for the {} from the {} function, but got {}",
                curly_quote(input),
                curly_quote(prop),
                curly_quote(name),
                curly_quote(&value.to_js_string())
            ),
            Self::InvalidReturnPropertyType {
                input,
                name,
                prop,
                value,
            } => write!(
                f,
                "Expected {} to be returned for the {} from the {} function, but got {}",
                curly_quote(input),
                curly_quote(prop),
                curly_quote(name),
                curly_quote(&received_type(value))
            ),
            Self::InvalidReturnValue { input, name, value } => write!(
                f,
                "Expected a valid {} to be returned from the {} function, but got {}",
                curly_quote(input),
                curly_quote(name),
                curly_quote(&value.to_js_string())
            ),
            Self::InvalidReturnType { input, name, value } => write!(
                f,
                "Expected {} to be returned from the {} function but got {}",
                curly_quote(input),
                curly_quote(name),
                curly_quote(&received_type(value))
            ),

            // Generic
            Self::UnhandledError { err: None } => write!(f, "Unhandled error."),
            Self::UnhandledError { err: Some(err) } => write!(f, "Unhandled error. ({err})"),
        }
    }
}

/// A validation failure with its message computed up front.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Structured error category.
    pub kind: ValidationErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl ValidationError {
    /// Create an error from a structured kind.
    pub fn from_kind(kind: ValidationErrorKind) -> Self {
        let message = kind.to_string();
        debug!(code = %kind.code(), "validation error");
        ValidationError { kind, message }
    }
}

impl Diagnostic for ValidationError {
    fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Bare, length-capped dump used by the invalid-value messages.
fn value_dump(value: &Value) -> String {
    let inspected = inspect(value, &InspectOptions::default().bare());
    ellipsify(&inspected, VALUE_DUMP_MAX_LEN)
}

/// `instance of Ctor` for truthy values with a constructor, else `type <typeof>`.
fn received_type(value: &Value) -> String {
    match value.constructor_name() {
        Some(constructor) if value.is_truthy() => format!("instance of {constructor}"),
        _ => format!("type {}", value.type_of()),
    }
}

// Factory functions

/// An invalid or unsupported value was passed for an argument.
///
/// `reason` completes "The ‘name’ argument ..."; pass `None` for the
/// default "is invalid".
pub fn invalid_arg_value(name: &str, value: Value, reason: Option<&str>) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidArgValue {
        name: name.to_string(),
        value,
        reason: reason.unwrap_or("is invalid").to_string(),
    })
}

/// An argument of the wrong type was passed.
pub fn invalid_arg_type(
    arg_name: &str,
    expected: impl Into<ExpectedSet>,
    actual: Value,
) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidArgType {
        arg_name: arg_name.to_string(),
        expected: expected.into(),
        actual,
    })
}

/// A function was called with the wrong number of arguments.
pub fn invalid_args_number(func_name: &str, expected: usize, actual: usize) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidArgsNumber {
        func_name: func_name.to_string(),
        expected,
        actual,
    })
}

/// Required arguments were not passed.
///
/// Fails with [`InvariantViolation::NoMissingArgs`] when `args` is empty.
pub fn missing_args<I, A>(args: I) -> Result<ValidationError, InvariantViolation>
where
    I: IntoIterator<Item = A>,
    A: Into<MissingArg>,
{
    let args: Vec<MissingArg> = args.into_iter().map(Into::into).collect();
    if args.is_empty() {
        return Err(InvariantViolation::NoMissingArgs);
    }
    Ok(ValidationError::from_kind(
        ValidationErrorKind::MissingArgs { args },
    ))
}

/// An invalid or unsupported value for an object property.
pub fn invalid_property_value(obj_name: &str, prop_name: &str, value: Value) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidPropertyValue {
        obj_name: obj_name.to_string(),
        prop_name: prop_name.to_string(),
        value,
    })
}

/// An object property of the wrong type.
pub fn invalid_property_type(
    obj_name: &str,
    prop_name: &str,
    expected: impl Into<ExpectedSet>,
    actual: Value,
) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidPropertyType {
        obj_name: obj_name.to_string(),
        prop_name: prop_name.to_string(),
        expected: expected.into(),
        actual,
    })
}

/// A required option is missing from an options object.
pub fn missing_option(opt_name: &str) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::MissingOption {
        opt_name: opt_name.to_string(),
    })
}

/// A function option returned an object with an invalid property value.
pub fn invalid_return_property_value(
    input: &str,
    name: &str,
    prop: &str,
    value: Value,
) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidReturnPropertyValue {
        input: input.to_string(),
        name: name.to_string(),
        prop: prop.to_string(),
        value,
    })
}

/// A function option returned an object with a property of the wrong type.
pub fn invalid_return_property_type(
    input: &str,
    name: &str,
    prop: &str,
    value: Value,
) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidReturnPropertyType {
        input: input.to_string(),
        name: name.to_string(),
        prop: prop.to_string(),
        value,
    })
}

/// A function option returned an invalid value.
pub fn invalid_return_value(input: &str, name: &str, value: Value) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidReturnValue {
        input: input.to_string(),
        name: name.to_string(),
        value,
    })
}

/// A function option returned a value of the wrong type, e.g. a plain value
/// where a promise was expected.
pub fn invalid_return_type(input: &str, name: &str, value: Value) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::InvalidReturnType {
        input: input.to_string(),
        name: name.to_string(),
        value,
    })
}

/// An error was emitted with nothing registered to handle it.
pub fn unhandled_error(err: Option<&str>) -> ValidationError {
    ValidationError::from_kind(ValidationErrorKind::UnhandledError {
        err: err.map(str::to_string),
    })
}

#[cfg(test)]
mod tests;
