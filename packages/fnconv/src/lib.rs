//! fnconv: bidirectional converters lifted from one-way callables.
//!
//! A [`Converter`] maps a source value to a target value with `convert` and,
//! when it knows how, maps a target back to a source with `unconvert`. This
//! crate builds converters out of the three callable shapes Rust code already
//! has lying around:
//!
//! - a transform `Fn(S) -> T`, optionally paired with a reverse `Fn(T) -> S`
//! - a predicate `Fn(&S) -> bool`
//! - a producer `Fn() -> T`
//!
//! Mandatory callables are checked when the converter is built. A missing
//! reverse transform is only reported when `unconvert` is called, so a
//! forward-only converter is perfectly usable in the forward direction.
//!
//! # Example
//!
//! ```rust
//! use fnconv::{from_transform_with_reverse, Converter, Error};
//!
//! let celsius = from_transform_with_reverse(
//!     Some(|c: i32| c * 9 / 5 + 32),
//!     Some(|f: i32| (f - 32) * 5 / 9),
//! )?;
//!
//! assert_eq!(celsius.convert(100), 212);
//! assert_eq!(celsius.unconvert(32)?, 0);
//! # Ok::<(), Error>(())
//! ```
//!
//! Forward-only converters refuse to go backwards:
//!
//! ```rust
//! use fnconv::{from_predicate, Converter, Error};
//!
//! let is_blank = from_predicate(Some(|s: &String| s.trim().is_empty()))?;
//!
//! assert!(is_blank.convert("  ".to_string()));
//! assert!(matches!(
//!     is_blank.unconvert(true),
//!     Err(Error::UnsupportedOperation(_))
//! ));
//! # Ok::<(), Error>(())
//! ```

mod error;
mod fn_converter;
pub mod lift;
mod traits;

pub use error::{Error, Result};
pub use fn_converter::FnConverter;
pub use lift::{from_predicate, from_producer, from_transform, from_transform_with_reverse};
pub use traits::Converter;
