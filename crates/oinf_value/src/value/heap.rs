//! Shared heap storage for composite values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted payload of a [`Value`](super::Value).
///
/// The constructor is `pub(super)`: heap payloads are only created through
/// the factory methods on `Value`, so every composite shares its storage
/// through `Arc` and clones stay cheap.
#[derive(PartialEq)]
pub struct Heap<T: ?Sized>(pub(super) Arc<T>);

impl<T> Heap<T> {
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

#[cfg(test)]
mod tests;
