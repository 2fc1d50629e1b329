//! Core value types: [`Error`], [`Maybe`], [`Outcome`], [`ErrorBuilder`].
//!
//! All four are immutable values constructed through factories and updated
//! only by producing new instances; they are freely shareable across threads
//! once built.

use smallvec::SmallVec;

pub mod error;
pub mod error_builder;
pub mod maybe;
pub mod outcome;

pub use error::{Error, ErrorKind, Metadata};
pub use error_builder::ErrorBuilder;
pub use maybe::Maybe;
pub use outcome::Outcome;

/// SmallVec-backed collection used for accumulating errors.
///
/// Inline storage for two elements covers the smallest possible aggregate
/// without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// The valueless outcome form.
pub type UnitOutcome = Outcome<()>;
