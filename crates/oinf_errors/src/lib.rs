//! Validation errors with consistent, human-readable messages.
//!
//! Every error produced here answers the same two questions: what did the
//! API expect, and what did it actually receive?
//!
//! ```text
//! The ‘path’ argument must be of type ‘string’ or an instance of ‘Buffer’.
//!     Received type ‘number’ (‘42’)
//! ```
//!
//! # Layers
//!
//! - [`classify`] sorts expected descriptors into type names, class names
//!   and free-form tokens.
//! - [`render_expected_clause`] turns the buckets into one English clause.
//! - [`describe_received`] appends what was actually received.
//! - [`ValidationError`] factories wrap the clause in fixed phrasing and
//!   attach an [`ErrorCode`].
//!
//! All of it is pure: no state survives a call, so every function can be
//! used from any thread without coordination.
//!
//! # Caller Bugs vs. Validation Failures
//!
//! A [`ValidationError`] describes bad input from an end user. An
//! [`InvariantViolation`] describes a bug in the code that was building the
//! error (a non-string descriptor, an empty missing-argument list). The
//! latter is returned as `Err` and must be fixed at the call site, never
//! handled.

mod error_code;
pub mod errors;
mod expected;
mod invariant;
mod render;
mod text;

use std::sync::Once;

pub use error_code::ErrorCode;
pub use errors::{Diagnostic, MissingArg, ValidationError, ValidationErrorKind};
pub use expected::{classify, Buckets, ExpectedSet};
pub use invariant::InvariantViolation;
pub use render::{describe_received, render, render_expected_clause};
pub use text::{curly_quote, ellipsify, TYPE_DUMP_MAX_LEN, VALUE_DUMP_MAX_LEN};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=oinf_errors=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already own the global slot (e.g. in a host
            // application); ours is then simply not installed.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
