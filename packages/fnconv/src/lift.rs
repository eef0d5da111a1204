//! Lifting one-way callables into converters.
//!
//! Each shape of callable gets one function:
//!
//! | Shape | Function | `unconvert` |
//! |---|---|---|
//! | `Fn(&S) -> bool` | [`from_predicate`] | unsupported |
//! | `Fn() -> T` | [`from_producer`] | unsupported |
//! | `Fn(S) -> T` | [`from_transform`] | unsupported |
//! | `Fn(S) -> T` + `Fn(T) -> S` | [`from_transform_with_reverse`] | reverse mapping |
//!
//! All of them build a [`FnConverter`] through [`FnConverter::from_parts`].
//! Mandatory callables are passed as `Option` so that an absent one can be
//! rejected with [`Error::InvalidArgument`] when the converter is built.

use crate::{Error, FnConverter, Result};

/// Lift a predicate into a converter targeting `bool`.
///
/// `convert(s)` returns `predicate(&s)`. Predicates are not invertible, so
/// `unconvert` always fails with [`Error::UnsupportedOperation`].
pub fn from_predicate<S, P>(
    predicate: Option<P>,
) -> Result<FnConverter<S, bool, impl Fn(S) -> bool>>
where
    P: Fn(&S) -> bool,
{
    let predicate = predicate.ok_or_else(|| Error::absent("predicate"))?;
    FnConverter::from_parts(Some(move |source: S| predicate(&source)), None)
}

/// Lift a producer into a converter whose source value is ignored.
///
/// Every `convert` call invokes `producer` again; the produced value is never
/// memoized. `unconvert` always fails with [`Error::UnsupportedOperation`].
pub fn from_producer<S, T, G>(producer: Option<G>) -> Result<FnConverter<S, T, impl Fn(S) -> T>>
where
    G: Fn() -> T,
{
    let producer = producer.ok_or_else(|| Error::absent("producer"))?;
    FnConverter::from_parts(Some(move |_source: S| producer()), None)
}

/// Lift a one-way transform into a forward-only converter.
///
/// Same as [`from_transform_with_reverse`] with an absent reverse.
pub fn from_transform<S, T, F>(forward: Option<F>) -> Result<FnConverter<S, T, F>>
where
    F: Fn(S) -> T,
{
    from_transform_with_reverse(forward, None)
}

/// Lift a forward transform and an optional reverse transform into a converter.
///
/// An absent `forward` fails here with [`Error::InvalidArgument`]. An absent
/// `reverse` makes every `unconvert` call fail with
/// [`Error::UnsupportedOperation`].
pub fn from_transform_with_reverse<S, T, F, R>(
    forward: Option<F>,
    reverse: Option<R>,
) -> Result<FnConverter<S, T, F, R>>
where
    F: Fn(S) -> T,
    R: Fn(T) -> S,
{
    FnConverter::from_parts(forward, reverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Converter;

    #[test]
    fn predicate_converts() {
        let converter = from_predicate(Some(|n: &i32| *n > 0)).unwrap();

        assert!(converter.convert(1));
        assert!(!converter.convert(-1));
    }

    #[test]
    fn predicate_unconvert_unsupported() {
        let converter = from_predicate(Some(|_: &i32| true)).unwrap();

        assert!(matches!(
            converter.unconvert(true),
            Err(Error::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn absent_predicate_is_named() {
        let err = from_predicate::<i32, fn(&i32) -> bool>(None).unwrap_err();
        assert_eq!(err, Error::InvalidArgument("predicate"));
    }

    #[test]
    fn producer_ignores_source() {
        let converter = from_producer::<String, _, _>(Some(|| 7)).unwrap();

        assert_eq!(converter.convert("x".to_string()), 7);
        assert_eq!(converter.convert(String::new()), 7);
    }

    #[test]
    fn absent_producer_is_named() {
        let err = from_producer::<(), i32, fn() -> i32>(None).unwrap_err();
        assert_eq!(err, Error::InvalidArgument("producer"));
    }

    #[test]
    fn transform_without_reverse() {
        let converter = from_transform(Some(|s: &str| s.len())).unwrap();

        assert_eq!(converter.convert("abc"), 3);
        assert!(!converter.has_reverse());
    }

    #[test]
    fn absent_transform_is_named() {
        let err = from_transform::<i32, i32, fn(i32) -> i32>(None).unwrap_err();
        assert_eq!(err, Error::InvalidArgument("forward transform"));
    }

    #[test]
    fn transform_with_reverse() {
        let forward = |c: char| c as u32;
        let reverse = |n: u32| char::from_u32(n).unwrap_or(char::REPLACEMENT_CHARACTER);
        let converter = from_transform_with_reverse(Some(forward), Some(reverse)).unwrap();

        assert_eq!(converter.convert('A'), 65);
        assert_eq!(converter.unconvert(97), Ok('a'));
    }
}
