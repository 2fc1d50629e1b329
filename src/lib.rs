//! Railway-oriented value types with two failure policies.
//!
//! [`Outcome`] and [`Maybe`] carry a shared combinator algebra (map, bind,
//! ensure, filter, fold, taps, recovery) under the fail-fast policy, while
//! [`ErrorBuilder`] and the tuple [`combine_all`](CombineAll::combine_all)
//! operation implement the complementary accumulation policy: evaluate
//! everything, collect every failure, report them together.
//!
//! # Examples
//!
//! ## Fail-fast chaining
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let shipped = Outcome::success(3)
//!     .ensure(|n| *n > 0, Error::validation("quantity must be positive"))
//!     .map(|n| n * 25)
//!     .and_then(|total| {
//!         if total <= 100 {
//!             Outcome::success(total)
//!         } else {
//!             Outcome::failure(Error::conflict("order exceeds credit"))
//!         }
//!     });
//!
//! assert_eq!(shipped, Outcome::success(75));
//! ```
//!
//! ## Accumulating independent validations
//!
//! ```
//! use outcome_rail::{CombineAll, Error, ErrorKind, Outcome};
//!
//! let name = Outcome::<&str>::failure(Error::validation("name is empty"));
//! let email = Outcome::success("valid@x.com");
//! let age = Outcome::<i32>::failure(Error::validation("age is negative"));
//!
//! let record = (name, email, age).combine_all();
//!
//! let error = record.into_error();
//! assert_eq!(error.kind(), &ErrorKind::Aggregate);
//! assert_eq!(error.causes().len(), 2);
//! ```
//!
//! ## Growing a typed tuple along a chain
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let row = Outcome::success("alice".to_string())
//!     .and_then_append(|name| Outcome::success(name.len() as i32))
//!     .and_then_append_all(|_, len| Outcome::success(*len > 3));
//!
//! assert_eq!(row, Outcome::success(("alice".to_string(), 5, true)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between the crate's value types and `std` ones
pub mod convert;
/// Outcome construction and unwrapping macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Multi-value (tuple) generalization of the combinator algebra
pub mod tuple;
/// Core value types: Error, Maybe, Outcome, ErrorBuilder
pub mod types;

/// Async extensions for the outcome algebra (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing taps for failure observation (requires `tracing` feature)
#[cfg(feature = "tracing")]
mod trace;

// Re-export the common surface at the root; the prelude modules stay the
// recommended import path.
pub use convert::*;
pub use tuple::{CombineAll, TupleConcat};
pub use types::{Error, ErrorBuilder, ErrorKind, ErrorVec, Maybe, Metadata, Outcome, UnitOutcome};
