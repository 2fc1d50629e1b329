//! Tracing integration: failure taps that emit structured events.
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.4", features = ["tracing"] }
//! ```

use crate::types::Outcome;

impl<T> Outcome<T> {
    /// Pass-through tap that emits a structured warning for a failure.
    ///
    /// A success passes through silently. The event carries the operation
    /// label, the error kind, its code, and its cause count.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let outcome = Outcome::<i32>::failure(Error::not_found("no such user"))
    ///     .trace_failure("load_user");
    ///
    /// assert!(outcome.is_failure());
    /// ```
    pub fn trace_failure(self, operation: &str) -> Self {
        if let Outcome::Failure(error) = &self {
            tracing::warn!(
                operation,
                kind = error.kind().as_str(),
                code = error.code(),
                cause_count = error.causes().len(),
                "{}",
                error.message(),
            );
        }
        self
    }
}
