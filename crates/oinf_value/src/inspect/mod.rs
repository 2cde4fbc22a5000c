//! Single-line structural dumps of runtime values.
//!
//! The output follows the familiar console style: strings single-quoted,
//! arrays as `[ 1, 2 ]`, objects as `{ a: 1 }` with a class prefix when the
//! constructor is not `Object`. Nothing is colored, nothing wraps.
//!
//! Composites nested deeper than [`InspectOptions::depth`] collapse to a
//! summary tag such as `[object Object]`, so a dump always terminates and
//! stays short even for large graphs.

use crate::value::{format_number, ObjectValue, Value};

/// Knobs for [`inspect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InspectOptions {
    /// Number of nesting levels expanded. `0` expands nothing, so even the
    /// top-level composite renders as a summary tag.
    pub depth: usize,
    /// Omit the top-level delimiters: string quotes and the brackets or
    /// braces of an expanded container without a class prefix.
    pub bare: bool,
}

impl Default for InspectOptions {
    /// The top level plus two nested levels, delimiters kept.
    fn default() -> Self {
        InspectOptions {
            depth: 3,
            bare: false,
        }
    }
}

impl InspectOptions {
    /// Expand nothing; composites render as summary tags.
    pub fn summary() -> Self {
        InspectOptions {
            depth: 0,
            bare: true,
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn bare(mut self) -> Self {
        self.bare = true;
        self
    }
}

/// Render `value` as a single-line dump.
pub fn inspect(value: &Value, options: &InspectOptions) -> String {
    let mut inspector = Inspector {
        options,
        out: String::new(),
    };
    inspector.value(value, 0);
    inspector.out
}

struct Inspector<'a> {
    options: &'a InspectOptions,
    out: String,
}

impl Inspector<'_> {
    fn value(&mut self, value: &Value, level: usize) {
        let bare = self.options.bare && level == 0;
        match value {
            Value::Undefined => self.out.push_str("undefined"),
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.out.push_str(&format_number(*n)),
            Value::BigInt(n) => {
                self.out.push_str(&n.to_string());
                self.out.push('n');
            }
            Value::Str(s) if bare => self.escaped(s, quote_for(s)),
            Value::Str(s) => self.quoted(s),
            Value::Symbol(desc) => {
                self.out.push_str("Symbol(");
                if let Some(desc) = desc {
                    self.out.push_str(desc);
                }
                self.out.push(')');
            }
            Value::Function { .. } => {
                if !bare {
                    self.out.push('[');
                }
                match value.function_name() {
                    Some(name) => {
                        self.out.push_str("Function: ");
                        self.out.push_str(name);
                    }
                    None => self.out.push_str("Function (anonymous)"),
                }
                if !bare {
                    self.out.push(']');
                }
            }
            Value::Array(items) => {
                if level >= self.options.depth {
                    self.summary("Array");
                } else {
                    self.array(items, level, bare);
                }
            }
            Value::Object(obj) => {
                if level >= self.options.depth {
                    self.summary(obj.constructor().unwrap_or("Object"));
                } else {
                    self.object(obj, level, bare);
                }
            }
        }
    }

    fn summary(&mut self, tag: &str) {
        self.out.push_str("[object ");
        self.out.push_str(tag);
        self.out.push(']');
    }

    fn array(&mut self, items: &[Value], level: usize, bare: bool) {
        if items.is_empty() {
            if !bare {
                self.out.push_str("[]");
            }
            return;
        }
        if !bare {
            self.out.push_str("[ ");
        }
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.value(item, level + 1);
        }
        if !bare {
            self.out.push_str(" ]");
        }
    }

    fn object(&mut self, obj: &ObjectValue, level: usize, bare: bool) {
        let prefix = match obj.constructor() {
            Some("Object") => None,
            Some(name) => Some(name),
            None => Some("[Object: null prototype]"),
        };
        // A class prefix stays glued to its braces.
        let bare = bare && prefix.is_none();
        if let Some(prefix) = prefix {
            self.out.push_str(prefix);
            self.out.push(' ');
        }
        if obj.properties().is_empty() {
            if !bare {
                self.out.push_str("{}");
            }
            return;
        }
        if !bare {
            self.out.push_str("{ ");
        }
        for (i, (key, value)) in obj.properties().iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            if is_identifier(key) {
                self.out.push_str(key);
            } else {
                self.quoted(key);
            }
            self.out.push_str(": ");
            self.value(value, level + 1);
        }
        if !bare {
            self.out.push_str(" }");
        }
    }

    fn quoted(&mut self, s: &str) {
        let quote = quote_for(s);
        self.out.push(quote);
        self.escaped(s, quote);
        self.out.push(quote);
    }

    /// String contents with control characters, backslashes and `quote`
    /// escaped. The result never contains a raw line break.
    fn escaped(&mut self, s: &str, quote: char) {
        for c in s.chars() {
            match c {
                '\n' => self.out.push_str("\\n"),
                '\t' => self.out.push_str("\\t"),
                '\r' => self.out.push_str("\\r"),
                '\u{8}' => self.out.push_str("\\b"),
                '\u{c}' => self.out.push_str("\\f"),
                '\\' => self.out.push_str("\\\\"),
                c if c.is_control() => self.out.push_str(&format!("\\x{:02X}", u32::from(c))),
                c if c == quote => {
                    self.out.push('\\');
                    self.out.push(c);
                }
                c => self.out.push(c),
            }
        }
    }
}

/// Single quotes unless the text contains one and no double quote.
fn quote_for(s: &str) -> char {
    if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    }
}

/// Property keys that print without quotes.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
