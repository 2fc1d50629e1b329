//! Async prelude: everything from [`prelude`](crate::prelude) plus the
//! future extension traits.
//!
//! ```
//! use outcome_rail::prelude_async::*;
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{FutureMaybeExt, FutureOutcomeExt, ThenSync};
