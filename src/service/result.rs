//! Uniform success/failure outcome returned by every service operation.

/// Outcome of a service call: a value, or a failure with an optional
/// caller-facing message.
///
/// Failures caused upstream carry no message so upstream error text never
/// reaches the caller. Validation failures carry a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ServiceResult<T> {
    /// The operation produced a value.
    Ok(T),
    /// The operation failed.
    Fail(Option<String>),
}

impl<T> ServiceResult<T> {
    /// A successful outcome.
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// A failure with no caller-facing message.
    pub fn fail() -> Self {
        Self::Fail(None)
    }

    /// A failure with a caller-facing message.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self::Fail(Some(message.into()))
    }

    /// `true` for [`ServiceResult::Ok`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// The value, if the operation succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// The failure message, if the operation failed with one.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Fail(message) => message.as_deref(),
        }
    }

    /// Consume the result, keeping only the value.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Fail(_) => None,
        }
    }
}
