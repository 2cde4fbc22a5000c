//! Runtime values handed to validated APIs.
//!
//! # Heap Enforcement
//!
//! Strings and composites live behind [`Heap`], whose constructor is private
//! to this module. Build values through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let list = Value::array(vec![Value::Null]);     // OK
//! let obj = Value::object(ObjectValue::plain());  // OK
//! ```

mod heap;

use std::fmt;

pub use heap::Heap;

/// A JavaScript-style runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    // Nullish
    /// The `undefined` value.
    Undefined,
    /// The `null` value.
    Null,

    // Primitives (inline, no heap allocation)
    /// Boolean value.
    Bool(bool),
    /// IEEE-754 number.
    Number(f64),
    /// Arbitrary-precision integer, bounded here to 128 bits.
    BigInt(i128),

    // Heap Types
    /// String value.
    Str(Heap<String>),
    /// Symbol with an optional description.
    Symbol(Option<Heap<String>>),
    /// Callable value. `name` is the function's own name, if it has one.
    Function { name: Option<Heap<String>> },
    /// Array of values.
    Array(Heap<Vec<Value>>),
    /// Plain object or class instance.
    Object(Heap<ObjectValue>),
}

/// Rendering category of a [`Value`].
///
/// Computed once by [`Value::class`] so that message code dispatches on an
/// explicit tag. Borrowed payloads carry exactly what each branch renders.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueClass<'a> {
    /// `null` or `undefined`.
    Nullish,
    /// A function with a non-empty own name.
    Callable { name: &'a str },
    /// An array or object. `constructor` is `None` for prototype-less
    /// objects and for objects whose constructor has an empty name.
    Composite { constructor: Option<&'a str> },
    /// Everything else, including anonymous functions.
    Primitive,
}

/// Object payload: constructor name plus own enumerable properties in
/// insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    constructor: Option<String>,
    properties: Vec<(String, Value)>,
}

impl ObjectValue {
    /// An object literal (`{}`), constructed by `Object`.
    pub fn plain() -> Self {
        Self::instance_of("Object")
    }

    /// An instance of the named class.
    pub fn instance_of(constructor: impl Into<String>) -> Self {
        ObjectValue {
            constructor: Some(constructor.into()),
            properties: Vec::new(),
        }
    }

    /// An object without a prototype (`Object.create(null)`).
    pub fn null_prototype() -> Self {
        ObjectValue {
            constructor: None,
            properties: Vec::new(),
        }
    }

    /// Add an own property. Setting an existing key replaces its value in place.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if let Some(slot) = self.properties.iter_mut().find(|entry| entry.0 == key) {
            slot.1 = value;
        } else {
            self.properties.push((key, value));
        }
        self
    }

    /// Constructor name, ignoring empty names.
    pub fn constructor(&self) -> Option<&str> {
        self.constructor.as_deref().filter(|name| !name.is_empty())
    }

    pub fn properties(&self) -> &[(String, Value)] {
        &self.properties
    }

    /// Look up an own property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl Value {
    // Factory methods

    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a number value.
    pub fn number(n: impl Into<f64>) -> Self {
        Value::Number(n.into())
    }

    /// Create a symbol with a description (`Symbol('desc')`).
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(Some(Heap::new(description.into())))
    }

    /// Create a symbol without a description (`Symbol()`).
    pub fn anonymous_symbol() -> Self {
        Value::Symbol(None)
    }

    /// Create a named function.
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function {
            name: Some(Heap::new(name.into())),
        }
    }

    /// Create an anonymous function (arrow function, `function () {}`).
    pub fn anonymous_function() -> Self {
        Value::Function { name: None }
    }

    /// Create an array.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Create an object from its payload.
    pub fn object(object: ObjectValue) -> Self {
        Value::Object(Heap::new(object))
    }

    /// Create an empty object literal (`{}`).
    pub fn plain_object() -> Self {
        Value::object(ObjectValue::plain())
    }

    // Accessors

    /// Get as string slice if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the element slice if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Get the object payload if this is an object.
    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(obj) => Some(&**obj),
            _ => None,
        }
    }

    /// The function's own name, if this is a function with a non-empty name.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Value::Function { name } => name
                .as_deref()
                .map(String::as_str)
                .filter(|n| !n.is_empty()),
            _ => None,
        }
    }

    /// Classify the value for rendering.
    pub fn class(&self) -> ValueClass<'_> {
        match self {
            Value::Undefined | Value::Null => ValueClass::Nullish,
            Value::Function { .. } => match self.function_name() {
                Some(name) => ValueClass::Callable { name },
                None => ValueClass::Primitive,
            },
            Value::Array(_) | Value::Object(_) => ValueClass::Composite {
                constructor: self.constructor_name(),
            },
            Value::Bool(_)
            | Value::Number(_)
            | Value::BigInt(_)
            | Value::Str(_)
            | Value::Symbol(_) => ValueClass::Primitive,
        }
    }

    /// The `typeof` result for this value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function { .. } => "function",
        }
    }

    /// Name of the constructor reached through the prototype chain.
    ///
    /// Primitives report their wrapper constructor (`Number`, `String`, ...).
    /// Nullish values and prototype-less objects have none.
    pub fn constructor_name(&self) -> Option<&str> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Bool(_) => Some("Boolean"),
            Value::Number(_) => Some("Number"),
            Value::BigInt(_) => Some("BigInt"),
            Value::Str(_) => Some("String"),
            Value::Symbol(_) => Some("Symbol"),
            Value::Function { .. } => Some("Function"),
            Value::Array(_) => Some("Array"),
            Value::Object(obj) => obj.constructor(),
        }
    }

    /// Truthiness, as used by `if (value)`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::BigInt(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Function { .. } | Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// String coercion, as performed by `String(value)`.
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            // `String(-0)` is "0"; only inspection keeps the sign.
            Value::Number(n) if *n == 0.0 => "0".to_string(),
            Value::Number(n) => format_number(*n),
            Value::BigInt(n) => n.to_string(),
            Value::Str(s) => s.to_string(),
            Value::Symbol(desc) => {
                format!("Symbol({})", desc.as_deref().map_or("", String::as_str))
            }
            Value::Function { .. } => match self.function_name() {
                Some(name) => format!("function {name}() {{ [native code] }}"),
                None => "function () { [native code] }".to_string(),
            },
            Value::Array(items) => {
                let parts: Vec<_> = items
                    .iter()
                    .map(|item| match item {
                        Value::Undefined | Value::Null => String::new(),
                        other => other.to_js_string(),
                    })
                    .collect();
                parts.join(",")
            }
            Value::Object(_) => "[object Object]".to_string(),
        }
    }
}

/// Format a number the way JavaScript prints it.
///
/// Integral values drop the fractional part, magnitudes from `1e21` up and
/// below `1e-6` use exponent notation with an explicit sign, and negative
/// zero keeps its sign.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    format!("{n}")
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::object(object)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}
