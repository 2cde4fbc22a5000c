//! Runtime values as seen by validation diagnostics.
//!
//! Validation errors describe whatever a caller handed to an API: a string,
//! a number, `null`, a class instance, a callback. This crate models those
//! values as a closed sum type ([`Value`]) and renders them into short
//! single-line dumps ([`inspect`]).
//!
//! # Classification Before Dispatch
//!
//! Rendering never switches on ad-hoc type checks. [`Value::class`] first
//! produces a [`ValueClass`] tag (nullish, callable, composite, primitive),
//! and message code dispatches on that tag:
//!
//! ```text
//! match value.class() {
//!     ValueClass::Nullish => ...,
//!     ValueClass::Callable { name } => ...,
//!     ValueClass::Composite { constructor } => ...,
//!     ValueClass::Primitive => ...,
//! }
//! ```

mod inspect;
mod value;

pub use inspect::{inspect, InspectOptions};
pub use value::{format_number, Heap, ObjectValue, Value, ValueClass};
