//! Multi-value generalization of the combinator algebra.
//!
//! The unary combinators on [`Outcome`](crate::Outcome) and
//! [`Maybe`](crate::Maybe) each have a tuple counterpart here whose callback
//! receives the elements positionally as separate arguments — that is the
//! only difference; failure and short-circuit semantics are identical. The
//! positional forms carry the `_all` suffix.
//!
//! The practical arity ceiling is **8** elements per tuple, stated here once:
//! the `macro_rules!` expansions in this module cover arities 2 through 8
//! (and every [`TupleConcat`] shape pair whose combined arity stays within
//! the ceiling). The limit is practical, not semantic.
//!
//! # Examples
//!
//! Growing a typed tuple along a short-circuit chain:
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let chained = Outcome::success("user-7".to_string())
//!     .and_then_append(|id| Outcome::success(id.len() as i32))
//!     .and_then_append_all(|_, n| Outcome::success(*n > 0));
//!
//! assert_eq!(chained, Outcome::success(("user-7".to_string(), 6, true)));
//! ```
//!
//! Combining independent outcomes with full accumulation:
//!
//! ```
//! use outcome_rail::{CombineAll, Outcome};
//!
//! let combined = (Outcome::success(1), Outcome::success("two")).combine_all();
//! assert_eq!(combined, Outcome::success((1, "two")));
//! ```

pub mod combine;
pub mod concat;

mod maybe_n;
mod outcome_n;

pub use combine::CombineAll;
pub use concat::TupleConcat;
