//! A converter built from a forward callable and an optional reverse callable.

use std::fmt;
use std::marker::PhantomData;

use crate::{Converter, Error, Result};

/// Converter backed by plain callables.
///
/// Holds a mandatory forward mapping `F: Fn(S) -> T` and an optional reverse
/// mapping `R: Fn(T) -> S`. Every lifting in [`crate::lift`] ends up here.
///
/// - `convert` calls the forward mapping once per call and returns its result
///   as is.
/// - `unconvert` checks for the reverse mapping on every call. Without one it
///   fails with [`Error::UnsupportedOperation`]; the converter stays usable in
///   the forward direction.
///
/// # Thread Safety
///
/// `FnConverter` adds no synchronisation of its own. It is `Send`/`Sync`
/// exactly when the callables it holds are.
pub struct FnConverter<S, T, F, R = fn(T) -> S> {
    forward: F,
    reverse: Option<R>,
    _types: PhantomData<fn(S) -> T>,
}

impl<S, T, F> FnConverter<S, T, F>
where
    F: Fn(S) -> T,
{
    /// Create a forward-only converter.
    pub fn new(forward: F) -> Self {
        Self {
            forward,
            reverse: None,
            _types: PhantomData,
        }
    }
}

impl<S, T, F, R> FnConverter<S, T, F, R>
where
    F: Fn(S) -> T,
    R: Fn(T) -> S,
{
    /// Create a converter from a possibly absent forward and reverse mapping.
    ///
    /// An absent `forward` is rejected here, at construction. An absent
    /// `reverse` is accepted and only surfaces when `unconvert` is called.
    pub fn from_parts(forward: Option<F>, reverse: Option<R>) -> Result<Self> {
        let forward = forward.ok_or_else(|| Error::absent("forward transform"))?;
        Ok(Self {
            forward,
            reverse,
            _types: PhantomData,
        })
    }

    /// Create a converter that maps in both directions.
    pub fn bidirectional(forward: F, reverse: R) -> Self {
        Self {
            forward,
            reverse: Some(reverse),
            _types: PhantomData,
        }
    }
}

impl<S, T, F, R> FnConverter<S, T, F, R> {
    /// Get a reference to the forward mapping.
    pub fn forward(&self) -> &F {
        &self.forward
    }

    /// Get a reference to the reverse mapping, if there is one.
    pub fn reverse(&self) -> Option<&R> {
        self.reverse.as_ref()
    }

    /// Whether `unconvert` is supported.
    pub fn has_reverse(&self) -> bool {
        self.reverse.is_some()
    }

    /// Unwrap, returning the forward and reverse mappings.
    pub fn into_parts(self) -> (F, Option<R>) {
        (self.forward, self.reverse)
    }
}

impl<S, T, F, R> Converter<S, T> for FnConverter<S, T, F, R>
where
    F: Fn(S) -> T,
    R: Fn(T) -> S,
{
    fn convert(&self, source: S) -> T {
        (self.forward)(source)
    }

    fn unconvert(&self, target: T) -> Result<S> {
        match &self.reverse {
            Some(reverse) => Ok(reverse(target)),
            None => Err(Error::no_reverse()),
        }
    }
}

impl<S, T, F: Clone, R: Clone> Clone for FnConverter<S, T, F, R> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            reverse: self.reverse.clone(),
            _types: PhantomData,
        }
    }
}

impl<S, T, F, R> fmt::Debug for FnConverter<S, T, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter")
            .field("source", &std::any::type_name::<S>())
            .field("target", &std::any::type_name::<T>())
            .field("has_reverse", &self.has_reverse())
            .finish_non_exhaustive()
    }
}
