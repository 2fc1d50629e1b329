//! Structured error value with a kind discriminant, code, message, and metadata.
//!
//! [`Error`] is the single failure representation flowing through the crate:
//! every [`Outcome`](crate::Outcome) failure carries one. Aggregates of two or
//! more simultaneous failures are themselves `Error` values with
//! [`ErrorKind::Aggregate`] and a flat, ordered list of causes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, ErrorKind};
//!
//! let err = Error::with_code("ORD-404", "order not found")
//!     .with_metadata("order_id", "991");
//!
//! assert_eq!(err.kind(), &ErrorKind::Failure);
//! assert_eq!(err.code(), "ORD-404");
//! assert_eq!(err.metadata().get("order_id"), Some("991"));
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminant for the closed error-kind set.
///
/// The fixed variants cover the domain failures this crate models directly;
/// [`ErrorKind::Custom`] is the extension point for consumers that need
/// additional kinds without forking the set.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// Plain domain failure without further classification.
    Failure,
    /// Input failed a validation rule.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// The operation conflicts with current state.
    Conflict,
    /// The caller could not be identified.
    Authentication,
    /// The caller is identified but not permitted.
    Authorization,
    /// Two or more simultaneous failures; see [`Error::causes`].
    Aggregate,
    /// Consumer-defined kind carrying its own name.
    Custom(Cow<'static, str>),
}

impl ErrorKind {
    /// Returns the kind's stable name, usable for dispatch and logging.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Failure => "failure",
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::Aggregate => "aggregate",
            Self::Custom(name) => name.as_ref(),
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered string metadata attached to an [`Error`].
///
/// Keys are unique; overwriting a key keeps its original position so that
/// iteration and serialization stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Metadata {
    entries: SmallVec<[(String, String); 2]>,
}

impl Metadata {
    /// Creates an empty metadata map.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self { entries: SmallVec::new() }
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are stored.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn insert(&mut self, key: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

#[cfg(feature = "serde")]
mod metadata_serde {
    use super::Metadata;
    use alloc::string::String;
    use core::fmt;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Metadata {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for Metadata {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct MetadataVisitor;

            impl<'de> Visitor<'de> for MetadataVisitor {
                type Value = Metadata;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a map of string keys to string values")
                }

                fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Metadata, A::Error> {
                    let mut metadata = Metadata::new();
                    while let Some((key, value)) = access.next_entry::<String, String>()? {
                        metadata.insert(key, value);
                    }
                    Ok(metadata)
                }
            }

            deserializer.deserialize_map(MetadataVisitor)
        }
    }
}

/// Immutable structured error value.
///
/// Carries a [`kind`](Error::kind) discriminant, an optional
/// [`code`](Error::code) (the empty string means "no code"), a human-readable
/// message, insertion-ordered [`Metadata`], and — for
/// [`ErrorKind::Aggregate`] only — a flat, ordered list of
/// [`causes`](Error::causes).
///
/// Equality is structural over all fields; two independently constructed
/// errors with the same contents compare equal.
///
/// Updates are builder-style: [`with_metadata`](Error::with_metadata) and
/// [`set_code`](Error::set_code) consume the value and return a new one.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, ErrorKind};
///
/// let err = Error::validation("age must be positive")
///     .with_metadata("field", "age")
///     .with_metadata("supplied", "-1");
///
/// assert_eq!(err.kind(), &ErrorKind::Validation);
/// assert!(!err.has_code());
/// let keys: Vec<&str> = err.metadata().iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["field", "supplied"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    kind: ErrorKind,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    metadata: Metadata,
    causes: Vec<Error>,
}

impl Error {
    fn with_kind(kind: ErrorKind, message: Cow<'static, str>) -> Self {
        debug_assert!(!message.is_empty(), "Error message must not be empty");
        Self {
            kind,
            code: Cow::Borrowed(""),
            message,
            metadata: Metadata::new(),
            causes: Vec::new(),
        }
    }

    /// Creates a plain [`ErrorKind::Failure`] error without a code.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::new("disk full");
    /// assert_eq!(err.message(), "disk full");
    /// assert_eq!(err.code(), "");
    /// ```
    #[inline]
    pub fn new<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::with_kind(ErrorKind::Failure, message.into())
    }

    /// Creates a plain failure with a pre-set error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::with_code("IO-17", "disk full");
    /// assert_eq!(err.code(), "IO-17");
    /// ```
    #[inline]
    pub fn with_code<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::with_kind(ErrorKind::Failure, message.into()).set_code(code)
    }

    /// Creates an [`ErrorKind::Validation`] error.
    #[inline]
    pub fn validation<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::with_kind(ErrorKind::Validation, message.into())
    }

    /// Creates an [`ErrorKind::NotFound`] error.
    #[inline]
    pub fn not_found<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::with_kind(ErrorKind::NotFound, message.into())
    }

    /// Creates an [`ErrorKind::Conflict`] error.
    #[inline]
    pub fn conflict<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::with_kind(ErrorKind::Conflict, message.into())
    }

    /// Creates an [`ErrorKind::Authentication`] error.
    #[inline]
    pub fn authentication<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::with_kind(ErrorKind::Authentication, message.into())
    }

    /// Creates an [`ErrorKind::Authorization`] error.
    #[inline]
    pub fn authorization<M: Into<Cow<'static, str>>>(message: M) -> Self {
        Self::with_kind(ErrorKind::Authorization, message.into())
    }

    /// Creates a plain failure from any displayable foreign error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = "abc".parse::<i32>().map_err(Error::from_display).unwrap_err();
    /// assert_eq!(err.message(), "invalid digit found in string");
    /// ```
    #[inline]
    pub fn from_display<E: Display>(source: E) -> Self {
        use alloc::string::ToString;
        Self::new(source.to_string())
    }

    /// Creates an error with a consumer-defined [`ErrorKind::Custom`] kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, ErrorKind};
    ///
    /// let err = Error::custom("rate_limited", "too many requests");
    /// assert_eq!(err.kind().as_str(), "rate_limited");
    /// ```
    #[inline]
    pub fn custom<K, M>(kind_name: K, message: M) -> Self
    where
        K: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::with_kind(ErrorKind::Custom(kind_name.into()), message.into())
    }

    /// Creates an [`ErrorKind::Aggregate`] error from an ordered, non-empty
    /// sequence of child errors.
    ///
    /// Children that are themselves aggregates contribute their cause list in
    /// place, so the resulting list is always flat. Since this constructor and
    /// [`ErrorBuilder`](crate::ErrorBuilder) are the only producers of
    /// aggregates, deeper nesting cannot be constructed.
    ///
    /// # Panics
    ///
    /// Panics if `errors` yields no elements; an aggregate of nothing is a
    /// contract violation, not a domain failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let inner = Error::aggregate([Error::new("a"), Error::new("b")]);
    /// let outer = Error::aggregate([inner, Error::new("c")]);
    ///
    /// let messages: Vec<&str> = outer.causes().iter().map(Error::message).collect();
    /// assert_eq!(messages, ["a", "b", "c"]);
    /// ```
    pub fn aggregate<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        let mut causes = Vec::new();
        for error in errors {
            if error.kind == ErrorKind::Aggregate {
                causes.extend(error.causes);
            } else {
                causes.push(error);
            }
        }
        assert!(
            !causes.is_empty(),
            "Error::aggregate requires at least one child error"
        );
        Self {
            kind: ErrorKind::Aggregate,
            code: Cow::Borrowed(""),
            message: Cow::Borrowed("multiple errors occurred"),
            metadata: Metadata::new(),
            causes,
        }
    }

    /// Sets (or overrides) the error code.
    #[inline]
    pub fn set_code<C: Into<Cow<'static, str>>>(mut self, code: C) -> Self {
        self.code = code.into();
        self
    }

    /// Returns a new error with `key` set to `value` in the metadata.
    ///
    /// An existing key is overwritten in place, keeping its original position
    /// in iteration order.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the kind discriminant.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the error code; the empty string means "no code".
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns `true` if a non-empty code is set.
    #[must_use]
    #[inline]
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// Returns the human-readable message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached metadata.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the child errors, in insertion order.
    ///
    /// Empty for every kind except [`ErrorKind::Aggregate`].
    #[must_use]
    #[inline]
    pub fn causes(&self) -> &[Error] {
        &self.causes
    }

    /// Consumes the error, returning its child list.
    ///
    /// Empty for non-aggregate errors.
    #[must_use]
    #[inline]
    pub fn into_causes(self) -> Vec<Error> {
        self.causes
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.code.is_empty() {
            write!(f, " (code: {})", self.code)?;
        }
        if !self.causes.is_empty() {
            write!(f, " [{} causes]", self.causes.len())?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.causes
            .first()
            .map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}
