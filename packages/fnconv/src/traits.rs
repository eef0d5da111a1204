//! The `Converter` trait.

use std::rc::Rc;
use std::sync::Arc;

use crate::Result;

/// Map a source value to a target value and, optionally, back again.
///
/// `convert` returns whatever the underlying mapping produces. A mapping that
/// can fail says so in its target type (`T = Result<U, E>`), and that value is
/// handed back untouched.
///
/// `unconvert` fails with [`Error::UnsupportedOperation`](crate::Error) when
/// the converter only knows the forward direction.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Converter<S, T>>`.
pub trait Converter<S, T> {
    /// Convert a source value into a target value.
    fn convert(&self, source: S) -> T;

    /// Convert a target value back into a source value.
    fn unconvert(&self, target: T) -> Result<S>;
}

// Blanket implementations for references and smart pointers

impl<S, T, C: Converter<S, T> + ?Sized> Converter<S, T> for &C {
    fn convert(&self, source: S) -> T {
        (**self).convert(source)
    }

    fn unconvert(&self, target: T) -> Result<S> {
        (**self).unconvert(target)
    }
}

impl<S, T, C: Converter<S, T> + ?Sized> Converter<S, T> for Box<C> {
    fn convert(&self, source: S) -> T {
        self.as_ref().convert(source)
    }

    fn unconvert(&self, target: T) -> Result<S> {
        self.as_ref().unconvert(target)
    }
}

impl<S, T, C: Converter<S, T> + ?Sized> Converter<S, T> for Rc<C> {
    fn convert(&self, source: S) -> T {
        self.as_ref().convert(source)
    }

    fn unconvert(&self, target: T) -> Result<S> {
        self.as_ref().unconvert(target)
    }
}

impl<S, T, C: Converter<S, T> + ?Sized> Converter<S, T> for Arc<C> {
    fn convert(&self, source: S) -> T {
        self.as_ref().convert(source)
    }

    fn unconvert(&self, target: T) -> Result<S> {
        self.as_ref().unconvert(target)
    }
}
