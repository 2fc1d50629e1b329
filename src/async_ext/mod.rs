//! Async extensions for the outcome algebra.
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.4", features = ["async"] }
//! ```
//!
//! Every combinator here is a thin wrapper around its synchronous twin:
//! await the inner future, then apply the identical transform. See
//! [`ThenSync`] for the adapter and [`FutureOutcomeExt`] /
//! [`FutureMaybeExt`] for the method surface.

mod future_ext;
mod then_sync;

pub use future_ext::{FutureMaybeExt, FutureOutcomeExt};
pub use then_sync::ThenSync;
