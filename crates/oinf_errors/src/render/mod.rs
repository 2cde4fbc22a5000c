//! Expected/received clause rendering.
//!
//! Produces the tail of a type-mismatch message:
//!
//! ```text
//! one of type ‘string’ or ‘number’ or an instance of ‘Buffer’. Received type ‘boolean’ (‘true’)
//! └──────── types bucket ────────┘    └─ instances bucket ─┘└──────── describe_received ───────┘
//! ```

use oinf_value::{inspect, InspectOptions, Value, ValueClass};
use tracing::trace;

use crate::expected::{classify, Buckets, ExpectedSet};
use crate::text::{curly_quote, ellipsify, join_list, TYPE_DUMP_MAX_LEN};

/// Render the full clause: expected descriptors, then the received value.
#[tracing::instrument(level = "trace", skip_all, fields(expected = expected.len()))]
pub fn render(expected: &ExpectedSet, actual: &Value) -> String {
    let buckets = classify(expected);
    let mut msg = render_expected_clause(&buckets);
    msg.push_str(&describe_received(actual));
    trace!(len = msg.len(), "rendered mismatch clause");
    msg
}

/// Render the expected half of the clause from classified buckets.
///
/// Non-empty buckets appear in a fixed order (types, instances, other) and
/// are separated by ` or `.
pub fn render_expected_clause(buckets: &Buckets) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if !buckets.types.is_empty() {
        let quoted = quote_all(&buckets.types);
        let prefix = if quoted.len() == 1 {
            "of type"
        } else {
            "one of type"
        };
        parts.push(format!("{prefix} {}", join_list(&quoted, "or")));
    }

    if !buckets.instances.is_empty() {
        let quoted = quote_all(&buckets.instances);
        parts.push(format!("an instance of {}", join_list(&quoted, "or")));
    }

    if !buckets.other.is_empty() {
        let quoted = quote_all(&buckets.other);
        match quoted.as_slice() {
            [only] => {
                // Capitalized tokens read as nouns: "an ‘Iterable’".
                if only.to_lowercase() == *only {
                    parts.push(only.clone());
                } else {
                    parts.push(format!("an {only}"));
                }
            }
            several => parts.push(format!("one of {}", join_list(several, "or"))),
        }
    }

    parts.join(" or ")
}

/// Describe the received value, starting with `. Received`.
pub fn describe_received(actual: &Value) -> String {
    match actual.class() {
        ValueClass::Nullish => {
            format!(". Received {}", curly_quote(&actual.to_js_string()))
        }
        ValueClass::Callable { name } => format!(". Received function {}", curly_quote(name)),
        ValueClass::Composite {
            constructor: Some(constructor),
        } => format!(". Received an instance of {}", curly_quote(constructor)),
        ValueClass::Composite { constructor: None } => {
            let inspected = inspect(actual, &InspectOptions::summary());
            format!(". Received {}", curly_quote(&inspected))
        }
        ValueClass::Primitive => {
            let inspected = inspect(actual, &InspectOptions::default().bare());
            format!(
                ". Received type {} ({})",
                curly_quote(actual.type_of()),
                curly_quote(&ellipsify(&inspected, TYPE_DUMP_MAX_LEN))
            )
        }
    }
}

fn quote_all(entries: &[String]) -> Vec<String> {
    entries.iter().map(|entry| curly_quote(entry)).collect()
}
