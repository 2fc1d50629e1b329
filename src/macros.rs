//! Ergonomic macros for constructing and unwrapping outcomes.
//!
//! - [`macro@crate::failure`] - Formats a message (optionally with a code)
//!   straight into a `Failure` outcome.
//! - [`macro@crate::try_outcome`] - Unwraps a `Success` or early-returns the
//!   `Failure` from the enclosing function, the outcome analog of `?`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{failure, try_outcome, Outcome};
//!
//! fn halve(n: i32) -> Outcome<i32> {
//!     if n % 2 != 0 {
//!         return failure!(code = "ODD", "{n} is not even");
//!     }
//!     Outcome::success(n / 2)
//! }
//!
//! fn quarter(n: i32) -> Outcome<i32> {
//!     let half = try_outcome!(halve(n));
//!     halve(half)
//! }
//!
//! assert_eq!(quarter(8), Outcome::success(2));
//! assert_eq!(quarter(6).into_error().code(), "ODD");
//! ```

/// Formats a message into a `Failure` outcome.
///
/// # Syntax
///
/// - `failure!("fmt", args...)` - plain failure with a formatted message
/// - `failure!(code = expr, "fmt", args...)` - failure with an error code
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Outcome};
///
/// let plain: Outcome<()> = failure!("missing field {}", "name");
/// assert_eq!(plain.error().message(), "missing field name");
///
/// let coded: Outcome<()> = failure!(code = "CFG-3", "bad port");
/// assert_eq!(coded.error().code(), "CFG-3");
/// ```
#[macro_export]
macro_rules! failure {
    (code = $code:expr, $($arg:tt)+) => {
        $crate::Outcome::failure($crate::Error::with_code($code, format!($($arg)+)))
    };
    ($($arg:tt)+) => {
        $crate::Outcome::failure($crate::Error::new(format!($($arg)+)))
    };
}

/// Unwraps a `Success` value or early-returns the `Failure`.
///
/// The enclosing function must return an `Outcome`; the error propagates
/// unchanged, exactly like a short-circuit `and_then` step.
///
/// # Examples
///
/// ```
/// use outcome_rail::{try_outcome, Error, Outcome};
///
/// fn first_char(input: &str) -> Outcome<char> {
///     let trimmed = try_outcome!(Outcome::success(input.trim()));
///     match trimmed.chars().next() {
///         Some(c) => Outcome::success(c),
///         None => Outcome::failure(Error::new("empty input")),
///     }
/// }
///
/// assert_eq!(first_char("  rail"), Outcome::success('r'));
/// assert!(first_char("   ").is_failure());
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(error);
            }
        }
    };
}
