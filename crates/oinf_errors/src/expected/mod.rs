//! Expected-descriptor sets and their classification.
//!
//! A descriptor is a string naming what an API accepts. It falls into one
//! of three buckets:
//!
//! | bucket      | rule                                    | examples              |
//! |-------------|-----------------------------------------|-----------------------|
//! | `types`     | a primitive type name                   | `string`, `Function`  |
//! | `instances` | capitalized word segments, `Foo`/`FooBar` | `Buffer`, `URL2`    |
//! | `other`     | anything else                           | `null`, `a valid URL` |
//!
//! The class-name rule is a naming heuristic over ASCII letters and digits.
//! Unusual tokens (e.g. `URLSearchParams`) are classified by that rule
//! alone, and existing messages depend on it staying that way.

use once_cell::sync::Lazy;
use oinf_value::Value;
use regex::Regex;
use smallvec::SmallVec;
use tracing::trace;

use crate::InvariantViolation;

/// Primitive type names, roughly ordered by how often they appear.
///
/// `Function` and `Object` are accepted as spellings of `function` and
/// `object`.
const PRIMITIVE_TYPES: &[&str] = &[
    "string", "function", "number", "object", "Function", "Object", "boolean", "bigint",
    "symbol",
];

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][a-z0-9]*)+$").expect("class-name pattern is valid"));

/// An ordered list of expected descriptors.
///
/// Build one from a single token, a list of tokens, or a dynamically typed
/// runtime value with [`ExpectedSet::from_value`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpectedSet {
    entries: Vec<String>,
}

impl ExpectedSet {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExpectedSet {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a set from a runtime value.
    ///
    /// An array must contain only strings. Any other value is coerced with
    /// string conversion into a single descriptor.
    pub fn from_value(value: &Value) -> Result<Self, InvariantViolation> {
        let Some(items) = value.as_array() else {
            return Ok(ExpectedSet {
                entries: vec![value.to_js_string()],
            });
        };
        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item.as_str() {
                Some(s) => Ok(s.to_string()),
                None => Err(InvariantViolation::NonStringDescriptor {
                    index,
                    type_of: item.type_of(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ExpectedSet { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&str> for ExpectedSet {
    fn from(entry: &str) -> Self {
        ExpectedSet::new([entry])
    }
}

impl From<String> for ExpectedSet {
    fn from(entry: String) -> Self {
        ExpectedSet::new([entry])
    }
}

impl From<&[&str]> for ExpectedSet {
    fn from(entries: &[&str]) -> Self {
        ExpectedSet::new(entries.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for ExpectedSet {
    fn from(entries: [&str; N]) -> Self {
        ExpectedSet::new(entries)
    }
}

impl From<Vec<String>> for ExpectedSet {
    fn from(entries: Vec<String>) -> Self {
        ExpectedSet { entries }
    }
}

impl From<Vec<&str>> for ExpectedSet {
    fn from(entries: Vec<&str>) -> Self {
        ExpectedSet::new(entries)
    }
}

/// Descriptors sorted by kind, each bucket in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buckets {
    /// Lower-cased primitive type names.
    pub types: SmallVec<[String; 4]>,
    /// Class names.
    pub instances: SmallVec<[String; 4]>,
    /// Free-form tokens.
    pub other: SmallVec<[String; 4]>,
}

impl Buckets {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.instances.is_empty() && self.other.is_empty()
    }
}

/// Sort `expected` into [`Buckets`].
///
/// When `object` is expected alongside class names, it moves to the end of
/// the instance bucket as `Object`, so the message reads
/// "an instance of ‘Foo’ or ‘Object’" instead of mixing both forms.
pub fn classify(expected: &ExpectedSet) -> Buckets {
    let mut buckets = Buckets::default();

    for entry in expected.entries() {
        if PRIMITIVE_TYPES.contains(&entry.as_str()) {
            buckets.types.push(entry.to_lowercase());
        } else if CLASS_NAME.is_match(entry) {
            buckets.instances.push(entry.clone());
        } else {
            debug_assert_ne!(entry, "object", "‘object’ should be written as ‘Object’");
            buckets.other.push(entry.clone());
        }
    }

    if !buckets.instances.is_empty() {
        if let Some(pos) = buckets.types.iter().position(|t| t == "object") {
            buckets.types.remove(pos);
            buckets.instances.push("Object".to_string());
        }
    }

    trace!(
        types = buckets.types.len(),
        instances = buckets.instances.len(),
        other = buckets.other.len(),
        "classified expected descriptors"
    );
    buckets
}

#[cfg(test)]
mod tests;
