//! Stable machine-readable codes for every validation error.
//!
//! Codes follow the `ERR_*` naming used by platform APIs, so callers can
//! match on `err.code()` across library boundaries without parsing messages.

use std::fmt;

/// Machine-readable code attached to each [`ValidationError`](crate::ValidationError).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Argument errors
    /// Invalid or unsupported argument value
    InvalidArgValue,
    /// Argument of the wrong type
    InvalidArgType,
    /// Wrong number of arguments passed to a function
    InvalidArgsNumber,
    /// Required argument not passed
    MissingArgs,

    // Property / option errors
    /// Invalid or unsupported property value
    InvalidPropertyValue,
    /// Property of the wrong type
    InvalidPropertyType,
    /// Required option missing
    MissingOption,

    // Return errors
    /// Function option returned an invalid property value
    InvalidReturnPropertyValue,
    /// Function option returned a property of the wrong type
    InvalidReturnPropertyType,
    /// Function option returned an invalid value
    InvalidReturnValue,
    /// Function option returned a value of the wrong type
    InvalidReturnType,

    // Generic
    /// Unhandled error (e.g. an `error` event without a listener)
    UnhandledError,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()`, which is exhaustive.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::InvalidArgValue,
        ErrorCode::InvalidArgType,
        ErrorCode::InvalidArgsNumber,
        ErrorCode::MissingArgs,
        ErrorCode::InvalidPropertyValue,
        ErrorCode::InvalidPropertyType,
        ErrorCode::MissingOption,
        ErrorCode::InvalidReturnPropertyValue,
        ErrorCode::InvalidReturnPropertyType,
        ErrorCode::InvalidReturnValue,
        ErrorCode::InvalidReturnType,
        ErrorCode::UnhandledError,
    ];

    /// The code string (e.g. `"ERR_INVALID_ARG_TYPE"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgValue => "ERR_INVALID_ARG_VALUE",
            ErrorCode::InvalidArgType => "ERR_INVALID_ARG_TYPE",
            ErrorCode::InvalidArgsNumber => "ERR_INVALID_ARGS_NUMBER",
            ErrorCode::MissingArgs => "ERR_MISSING_ARGS",
            ErrorCode::InvalidPropertyValue => "ERR_INVALID_PROPERTY_VALUE",
            ErrorCode::InvalidPropertyType => "ERR_INVALID_PROPERTY_TYPE",
            ErrorCode::MissingOption => "ERR_MISSING_OPTION",
            ErrorCode::InvalidReturnPropertyValue => "ERR_INVALID_RETURN_PROPERTY_VALUE",
            ErrorCode::InvalidReturnPropertyType => "ERR_INVALID_RETURN_PROPERTY_TYPE",
            ErrorCode::InvalidReturnValue => "ERR_INVALID_RETURN_VALUE",
            ErrorCode::InvalidReturnType => "ERR_INVALID_RETURN_TYPE",
            ErrorCode::UnhandledError => "ERR_UNHANDLED_ERROR",
        }
    }

    /// The error's class-style name (e.g. `"InvalidArgTypeError"`).
    pub fn error_name(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgValue => "InvalidArgValueError",
            ErrorCode::InvalidArgType => "InvalidArgTypeError",
            ErrorCode::InvalidArgsNumber => "InvalidArgsNumberError",
            ErrorCode::MissingArgs => "MissingArgsError",
            ErrorCode::InvalidPropertyValue => "InvalidPropertyValueError",
            ErrorCode::InvalidPropertyType => "InvalidPropertyTypeError",
            ErrorCode::MissingOption => "MissingOptionError",
            ErrorCode::InvalidReturnPropertyValue => "InvalidReturnPropertyValueError",
            ErrorCode::InvalidReturnPropertyType => "InvalidReturnPropertyTypeError",
            ErrorCode::InvalidReturnValue => "InvalidReturnValueError",
            ErrorCode::InvalidReturnType => "InvalidReturnTypeError",
            ErrorCode::UnhandledError => "UnhandledErrorError",
        }
    }

    /// Check if errors with this code are type errors.
    ///
    /// Everything except [`ErrorCode::UnhandledError`] reports misuse of an
    /// API's inputs or outputs.
    pub fn is_type_error(&self) -> bool {
        !matches!(self, ErrorCode::UnhandledError)
    }

    /// Check if this code concerns a function option's return value.
    pub fn is_return_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::InvalidReturnPropertyValue
                | ErrorCode::InvalidReturnPropertyType
                | ErrorCode::InvalidReturnValue
                | ErrorCode::InvalidReturnType
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"ERR_MISSING_ARGS"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`],
/// so it is automatically exhaustive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
