//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`failure!`], [`try_outcome!`]
//! - **Types**: [`Error`], [`ErrorKind`], [`Metadata`], [`Maybe`],
//!   [`Outcome`], [`ErrorBuilder`]
//! - **Traits**: [`CombineAll`], [`TupleConcat`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn positive(n: i32) -> Outcome<i32> {
//!     Outcome::success(n).ensure(|n| *n > 0, Error::validation("not positive"))
//! }
//!
//! let combined = (positive(1), positive(2)).combine_all();
//! assert_eq!(combined, Outcome::success((1, 2)));
//! ```

// Macros
pub use crate::{failure, try_outcome};

// Core types
pub use crate::types::{Error, ErrorBuilder, ErrorKind, Maybe, Metadata, Outcome, UnitOutcome};

// Traits
pub use crate::tuple::{CombineAll, TupleConcat};
